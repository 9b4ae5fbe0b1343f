//! # Registry Integration Module
//!
//! This module is the HTTP client layer for the certificate registry API. It
//! covers every remote operation the CLI performs: account registration and
//! login, certificate issuance with a PDF upload, hash verification, listing
//! of issued certificates, file download, and the account/statistics queries.
//!
//! ## Architecture
//!
//! Each submodule maps to one endpoint family:
//!
//! ```text
//! CLI Layer (commands, rendering)
//!          ↓
//! Registry Integration Layer
//!     ├── auth          POST /api/register, POST /api/login
//!     ├── certificates  POST /api/certificates (multipart),
//!     │                 GET /api/certificates, GET <download_url>
//!     ├── verify        GET /api/verify?hash=<value>
//!     └── account       GET /api/me, GET /api/stats
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! The registry hands out an opaque bearer token at login. Functions that
//! operate on the caller's own data take the token as an argument; the
//! listing and download calls take an `Option` and attach the
//! `Authorization` header only when a token is supplied, leaving the header
//! out entirely for anonymous calls. There is no refresh flow; an expired
//! token simply produces an authentication error and the user logs in again.
//!
//! ## Error Handling
//!
//! Every function returns [`RegistryError`]:
//!
//! - transport and decoding failures are wrapped `reqwest` errors
//! - non-2xx responses become [`RegistryError::Api`], carrying the status
//!   code and the server's `error` field when the body has one, otherwise
//!   the HTTP status reason
//! - reading a local file for upload can surface an I/O error
//!
//! Requests are single-shot: no retries, no client-side timeouts beyond the
//! transport defaults.

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::types::ErrorBody;

pub mod account;
pub mod auth;
pub mod certificates;
pub mod verify;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// True when the registry rejected the request for lack of (valid)
    /// credentials, which usually means the stored session is stale.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            RegistryError::Api { status, .. } => *status == StatusCode::UNAUTHORIZED,
            _ => false,
        }
    }
}

/// Converts a non-2xx response into an [`RegistryError::Api`], surfacing the
/// server's `error` field when the body carries one.
pub(crate) async fn api_error(response: Response) -> RegistryError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    RegistryError::Api { status, message }
}
