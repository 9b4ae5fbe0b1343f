use certcli::types::CertificateRecord;
use certcli::utils::*;

// Helper function to create a test certificate record
fn create_test_record(id: i64, student: &str, course: &str, issue_date: &str) -> CertificateRecord {
    CertificateRecord {
        id,
        student_name: student.to_string(),
        student_email: format!("{}@example.com", student.to_lowercase()),
        course_name: course.to_string(),
        issue_date: issue_date.to_string(),
        file_hash: format!("0xhash{}", id),
        blockchain_tx: None,
        contract_address: None,
        filename: Some(format!("cert_{}.pdf", id)),
        download_url: Some(format!("/uploads/cert_{}.pdf", id)),
    }
}

#[test]
fn test_normalize_hash_adds_prefix() {
    let normalized = normalize_hash("ABCDEF0123");

    // Should be lowercased and prefixed
    assert_eq!(normalized, "0xabcdef0123");
}

#[test]
fn test_normalize_hash_keeps_existing_prefix() {
    let normalized = normalize_hash("0xABCDEF0123");

    // Should not double the prefix
    assert_eq!(normalized, "0xabcdef0123");
}

#[test]
fn test_normalize_hash_trims_whitespace() {
    let normalized = normalize_hash("  0xabc123  ");
    assert_eq!(normalized, "0xabc123");
}

#[test]
fn test_parse_issue_date_iso_format() {
    let date = parse_issue_date("2024-01-31").unwrap();
    assert_eq!(date.to_string(), "2024-01-31");
}

#[test]
fn test_parse_issue_date_day_first_format() {
    // The registry also accepts DD-MM-YYYY
    let date = parse_issue_date("31-01-2024").unwrap();
    assert_eq!(date.to_string(), "2024-01-31");

    // Both formats should agree
    assert_eq!(date, parse_issue_date("2024-01-31").unwrap());
}

#[test]
fn test_parse_issue_date_tolerates_whitespace() {
    let date = parse_issue_date(" 2024-06-15 ").unwrap();
    assert_eq!(date.to_string(), "2024-06-15");
}

#[test]
fn test_parse_issue_date_invalid_input() {
    let result = parse_issue_date("not-a-date");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid issue date"));

    // Month/day swapped beyond range
    assert!(parse_issue_date("2024-31-01").is_err());
}

#[test]
fn test_parse_role_valid_inputs() {
    assert_eq!(parse_role("issuer").unwrap(), "issuer");
    assert_eq!(parse_role("student").unwrap(), "student");

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_role("Issuer").unwrap(), "issuer");
    assert_eq!(parse_role(" STUDENT ").unwrap(), "student");
}

#[test]
fn test_parse_role_invalid_inputs() {
    let result = parse_role("admin");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid role"));

    assert!(parse_role("").is_err());
}

#[test]
fn test_is_pdf() {
    use std::path::Path;

    assert!(is_pdf(Path::new("certificate.pdf")));
    assert!(is_pdf(Path::new("dir/CERTIFICATE.PDF")));

    assert!(!is_pdf(Path::new("certificate.txt")));
    assert!(!is_pdf(Path::new("certificate")));
    assert!(!is_pdf(Path::new("pdf")));
}

#[test]
fn test_sort_certificates() {
    let mut records = vec![
        create_test_record(1, "Zoe", "Algebra", "2024-01-01"),
        create_test_record(2, "Ada", "Calculus", "2024-01-03"),
        create_test_record(3, "Ada", "Biology", "2024-01-01"), // Same date as record 1
        create_test_record(4, "Mia", "Chemistry", "2024-01-02"),
    ];

    sort_certificates(&mut records);

    // Should be sorted by issue date descending, then by student ascending
    assert_eq!(records[0].issue_date, "2024-01-03"); // Most recent
    assert_eq!(records[1].issue_date, "2024-01-02");
    assert_eq!(records[2].issue_date, "2024-01-01");
    assert_eq!(records[2].student_name, "Ada"); // Earlier alphabetically
    assert_eq!(records[3].issue_date, "2024-01-01");
    assert_eq!(records[3].student_name, "Zoe"); // Later alphabetically
}

#[test]
fn test_meta_line() {
    let record = create_test_record(7, "A", "B", "2024-01-01");
    assert_eq!(meta_line(&record), "A • B • 2024-01-01");
}

#[test]
fn test_unique_target_path_without_collision() {
    let dir = tempfile::tempdir().unwrap();
    let path = unique_target_path(dir.path(), "certificate.pdf");

    // Nothing exists yet, so the name is untouched
    assert_eq!(path, dir.path().join("certificate.pdf"));
}

#[test]
fn test_unique_target_path_with_collisions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("certificate.pdf"), b"first").unwrap();

    let path = unique_target_path(dir.path(), "certificate.pdf");
    assert_eq!(path, dir.path().join("certificate_1.pdf"));

    // A second collision moves to the next counter
    std::fs::write(dir.path().join("certificate_1.pdf"), b"second").unwrap();
    let path = unique_target_path(dir.path(), "certificate.pdf");
    assert_eq!(path, dir.path().join("certificate_2.pdf"));
}

#[test]
fn test_unique_target_path_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("certificate"), b"first").unwrap();

    let path = unique_target_path(dir.path(), "certificate");
    assert_eq!(path, dir.path().join("certificate_1"));
}

#[tokio::test]
async fn test_sha256_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.pdf");
    std::fs::write(&file, b"hello world").unwrap();

    let digest = sha256_file(&file).await.unwrap();

    // Known SHA-256 of "hello world", in the registry's stored form
    assert_eq!(
        digest,
        "0xb94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );

    // Deterministic - same input produces same output
    assert_eq!(digest, sha256_file(&file).await.unwrap());
}

#[tokio::test]
async fn test_sha256_file_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = sha256_file(&dir.path().join("missing.pdf")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_save_download_uniquifies() {
    let dir = tempfile::tempdir().unwrap();

    let first = save_download(b"one", dir.path(), "cert.pdf").await.unwrap();
    let second = save_download(b"two", dir.path(), "cert.pdf").await.unwrap();

    assert_eq!(first, dir.path().join("cert.pdf"));
    assert_eq!(second, dir.path().join("cert_1.pdf"));

    // The first file is not overwritten
    assert_eq!(std::fs::read(&first).unwrap(), b"one");
    assert_eq!(std::fs::read(&second).unwrap(), b"two");
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
    assert_eq!(format_timestamp(1704067200), "2024-01-01 00:00:00 UTC");
}
