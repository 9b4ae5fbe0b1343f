use certcli::types::{
    CertificateRecord, ErrorBody, IssueResponse, LoginSuccess, Profile, RegistryStats,
    VerifyResponse,
};

#[test]
fn test_parse_login_success() {
    let body = r#"{"access_token": "eyJhbGciOiJIUzI1NiJ9.payload.sig"}"#;
    let parsed: LoginSuccess = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.access_token, "eyJhbGciOiJIUzI1NiJ9.payload.sig");
}

#[test]
fn test_parse_error_body() {
    let body = r#"{"error": "invalid credentials"}"#;
    let parsed: ErrorBody = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.error, "invalid credentials");
}

#[test]
fn test_parse_issue_response() {
    // Issuance without a reachable chain: tx and contract stay null
    let body = r#"{
        "id": 12,
        "hash": "0xabc123",
        "tx": null,
        "contract": null,
        "filename": "diploma.pdf",
        "download_url": "/uploads/diploma.pdf"
    }"#;

    let parsed: IssueResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.id, Some(12));
    assert_eq!(parsed.hash, "0xabc123");
    assert!(parsed.tx.is_none());
    assert!(parsed.contract.is_none());
    assert_eq!(parsed.filename, "diploma.pdf");
    assert_eq!(parsed.download_url, "/uploads/diploma.pdf");
}

#[test]
fn test_parse_certificate_listing() {
    let body = r#"[
        {
            "id": 1,
            "student_name": "A",
            "student_email": "a@example.com",
            "course_name": "B",
            "issue_date": "2024-01-01",
            "file_hash": "0xabc",
            "blockchain_tx": "0xfeed",
            "contract_address": "0xc0ffee",
            "filename": "c.pdf",
            "download_url": "/uploads/c.pdf"
        },
        {
            "id": 2,
            "student_name": "D",
            "student_email": "d@example.com",
            "course_name": "E",
            "issue_date": "2024-02-02",
            "file_hash": "0xdef",
            "blockchain_tx": null,
            "contract_address": null,
            "filename": null,
            "download_url": null
        }
    ]"#;

    let parsed: Vec<CertificateRecord> = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.len(), 2);

    assert_eq!(parsed[0].student_name, "A");
    assert_eq!(parsed[0].course_name, "B");
    assert_eq!(parsed[0].issue_date, "2024-01-01");
    assert_eq!(parsed[0].file_hash, "0xabc");
    assert_eq!(parsed[0].download_url.as_deref(), Some("/uploads/c.pdf"));

    // Records without a stored file carry null filename/download_url
    assert!(parsed[1].filename.is_none());
    assert!(parsed[1].download_url.is_none());
}

#[test]
fn test_parse_verify_response_with_record() {
    let body = r#"{
        "on_chain": true,
        "issuer": "0x1111111111111111111111111111111111111111",
        "timestamp": 1704067200,
        "meta": {
            "student_name": "A",
            "student_email": "a@example.com",
            "course_name": "B",
            "issue_date": "2024-01-01",
            "issuer_id": 3
        }
    }"#;

    let parsed: VerifyResponse = serde_json::from_str(body).unwrap();
    assert!(parsed.on_chain);
    assert_eq!(parsed.timestamp, Some(1704067200));

    let meta = parsed.meta.unwrap();
    assert_eq!(meta.student_name, "A");
    assert_eq!(meta.issuer_id, 3);
}

#[test]
fn test_parse_verify_response_unknown_hash() {
    // Unknown hashes are a 200 with everything empty, not an error
    let body = r#"{"on_chain": false, "issuer": null, "timestamp": null, "meta": null}"#;

    let parsed: VerifyResponse = serde_json::from_str(body).unwrap();
    assert!(!parsed.on_chain);
    assert!(parsed.issuer.is_none());
    assert!(parsed.timestamp.is_none());
    assert!(parsed.meta.is_none());
}

#[test]
fn test_parse_profile_and_stats() {
    let profile: Profile =
        serde_json::from_str(r#"{"id": 5, "role": "issuer", "email": "i@example.com"}"#).unwrap();
    assert_eq!(profile.id, 5);
    assert_eq!(profile.role, "issuer");

    let stats: RegistryStats =
        serde_json::from_str(r#"{"users": 10, "certificates": 42}"#).unwrap();
    assert_eq!(stats.users, 10);
    assert_eq!(stats.certificates, 42);
}
