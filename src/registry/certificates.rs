use reqwest::{Client, multipart};

use crate::{
    config,
    registry::RegistryError,
    types::{CertificateRecord, IssueRequest, IssueResponse},
};

/// Issues a certificate by uploading its PDF to the registry.
///
/// Builds a multipart form from the issuance fields, reads the PDF from disk
/// and attaches it as the `file` part with an `application/pdf` content type.
/// The request carries the bearer token; the registry hashes the stored file
/// and responds with the certificate id, the `0x`-prefixed digest and a
/// download URL for the stored copy.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(IssueResponse)` - Certificate id, file hash, optional chain anchor
///   and the stored file's name/download URL
/// - `Err(RegistryError)` - I/O failure reading the PDF, transport failure,
///   or the server's `error` text (bad date, non-PDF upload, missing file)
pub async fn issue(token: &str, request: &IssueRequest) -> Result<IssueResponse, RegistryError> {
    let file_bytes = async_fs::read(&request.file).await?;
    let filename = request
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("certificate.pdf")
        .to_string();

    let part = multipart::Part::bytes(file_bytes)
        .file_name(filename)
        .mime_str("application/pdf")?;
    let form = multipart::Form::new()
        .text("student_name", request.student_name.clone())
        .text("student_email", request.student_email.clone())
        .text("course_name", request.course_name.clone())
        .text("issue_date", request.issue_date.clone())
        .part("file", part);

    let client = Client::new();
    let api_url = format!("{}/api/certificates", config::api_base_url());

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.json::<IssueResponse>().await?)
}

/// Retrieves the caller's certificates, newest first.
///
/// Issuers receive the certificates they issued, students the ones issued to
/// their email. The `Authorization` header is attached only when a token is
/// supplied; without one the request is sent anonymously and the registry
/// answers with an authentication error.
pub async fn list(token: Option<&str>) -> Result<Vec<CertificateRecord>, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/certificates", config::api_base_url());

    let mut request = client.get(&api_url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.json::<Vec<CertificateRecord>>().await?)
}

/// Fetches the raw bytes of a stored certificate file.
///
/// `download_url` is the path the registry handed out with the record
/// (relative to the API base) or a full URL. The bearer header is attached
/// only when a token is supplied. A non-2xx response is an error; nothing is
/// written anywhere by this function, the caller decides where bytes go.
pub async fn download(token: Option<&str>, download_url: &str) -> Result<Vec<u8>, RegistryError> {
    let url = if download_url.starts_with("http") {
        download_url.to_string()
    } else {
        format!("{}{}", config::api_base_url(), download_url)
    };

    let client = Client::new();
    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.bytes().await?.to_vec())
}
