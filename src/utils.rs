use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::{Res, types::CertificateRecord};

/// Normalizes a certificate hash to the form the registry stores:
/// lowercase hex with a `0x` prefix.
pub fn normalize_hash(input: &str) -> String {
    let trimmed = input.trim().to_lowercase();
    if trimmed.starts_with("0x") {
        trimmed
    } else {
        format!("0x{}", trimmed)
    }
}

/// Computes the SHA-256 digest of a file, returned in the registry's
/// `0x`-prefixed lowercase hex form.
pub async fn sha256_file(path: &Path) -> Res<String> {
    let bytes = async_fs::read(path).await?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("0x{}", hex::encode(digest)))
}

/// Parses an issue date in either of the formats the registry accepts,
/// `YYYY-MM-DD` or `DD-MM-YYYY`.
pub fn parse_issue_date(input: &str) -> Result<NaiveDate, String> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d-%m-%Y"))
        .map_err(|_| {
            format!(
                "invalid issue date '{}', expected YYYY-MM-DD or DD-MM-YYYY",
                trimmed
            )
        })
}

/// Validates an account role; the registry only knows issuers and students.
pub fn parse_role(input: &str) -> Result<String, String> {
    let role = input.trim().to_lowercase();
    match role.as_str() {
        "issuer" | "student" => Ok(role),
        _ => Err(format!(
            "invalid role '{}', expected 'issuer' or 'student'",
            input
        )),
    }
}

/// The registry only stores PDF certificates.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

pub fn sort_certificates(records: &mut Vec<CertificateRecord>) {
    records.sort_by(|a, b| {
        match b.issue_date.cmp(&a.issue_date) {
            Ordering::Equal => a.student_name.cmp(&b.student_name), // secondary sort: name ascending
            other => other,
        }
    });
}

/// One-line summary of a certificate record.
pub fn meta_line(record: &CertificateRecord) -> String {
    format!(
        "{} • {} • {}",
        record.student_name, record.course_name, record.issue_date
    )
}

/// Picks a path in `dir` that does not collide with an existing file,
/// appending `_1`, `_2`, ... before the extension when needed. Mirrors the
/// registry's own upload naming.
pub fn unique_target_path(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    if !path.exists() {
        return path;
    }

    let (base, ext) = match filename.rsplit_once('.') {
        Some((base, ext)) => (base.to_string(), format!(".{}", ext)),
        None => (filename.to_string(), String::new()),
    };

    let mut i = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", base, i, ext));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Writes downloaded bytes into `dir` under a collision-free name and
/// returns the path written to.
pub async fn save_download(bytes: &[u8], dir: &Path, filename: &str) -> Res<PathBuf> {
    async_fs::create_dir_all(dir).await?;
    let target = unique_target_path(dir, filename);
    async_fs::write(&target, bytes).await?;
    Ok(target)
}

/// Renders an on-chain anchoring timestamp as a human-readable UTC string.
pub fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
