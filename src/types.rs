use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub email: String,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Client-side issuance input; the file is uploaded as a multipart part.
#[derive(Debug, Clone)]
pub struct IssueRequest {
    pub student_name: String,
    pub student_email: String,
    pub course_name: String,
    pub issue_date: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueResponse {
    pub id: Option<i64>,
    pub hash: String,
    pub tx: Option<String>,
    pub contract: Option<String>,
    pub filename: String,
    pub download_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    pub course_name: String,
    pub issue_date: String,
    pub file_hash: String,
    pub blockchain_tx: Option<String>,
    pub contract_address: Option<String>,
    pub filename: Option<String>,
    pub download_url: Option<String>,
}

#[derive(Tabled)]
pub struct CertificateTableRow {
    pub id: i64,
    pub date: String,
    pub student: String,
    pub course: String,
    pub file: String,
}

#[derive(Tabled)]
pub struct CertificateHashTableRow {
    pub id: i64,
    pub date: String,
    pub student: String,
    pub course: String,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub on_chain: bool,
    pub issuer: Option<String>,
    pub timestamp: Option<i64>,
    pub meta: Option<VerifyMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyMeta {
    pub student_name: String,
    pub student_email: String,
    pub course_name: String,
    pub issue_date: String,
    pub issuer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStats {
    pub users: u64,
    pub certificates: u64,
}
