//! Configuration management for the certificate registry CLI.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the application's local data directory. The lookup
//! order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use dotenv;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `certcli/` directory structure if it doesn't exist and loads
/// variables from `certcli/.env` when the file is present. A missing `.env`
/// file is not an error; every setting has a usable default.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/certcli/.env`
/// - macOS: `~/Library/Application Support/certcli/.env`
/// - Windows: `%LOCALAPPDATA%/certcli/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("certcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the certificate registry API.
///
/// Reads the `CERTCLI_API_URL` environment variable, falling back to the
/// registry's default local address. All endpoint paths are joined onto
/// this base.
///
/// # Example
///
/// ```
/// let base = api_base_url(); // e.g., "http://localhost:5000"
/// ```
pub fn api_base_url() -> String {
    env::var("CERTCLI_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Returns the directory where downloaded certificate files are saved.
///
/// Reads the `CERTCLI_DOWNLOAD_DIR` environment variable, falling back to
/// the platform download directory and finally to the current directory.
pub fn download_dir() -> PathBuf {
    match env::var("CERTCLI_DOWNLOAD_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
    }
}
