//! # CLI Module
//!
//! This module implements the user-facing commands of the certificate
//! registry CLI. Each command collects its inputs (flags first, interactive
//! prompts for anything missing), delegates to the [`crate::registry`]
//! client, and renders the outcome with the crate's status macros, spinners
//! and tables.
//!
//! ## Commands
//!
//! ### Accounts and sessions
//!
//! - [`register`] - Create an account (issuer or student)
//! - [`login`] - Exchange credentials for a bearer token and persist the
//!   session
//! - [`logout`] - Delete the persisted session
//! - [`whoami`] - Show the account behind the current session
//!
//! ### Certificates
//!
//! - [`issue`] - Upload a PDF and issue a certificate for it
//! - [`list_certificates`] - Table of the caller's certificates, newest
//!   first, with optional search filter and hash column
//! - [`download_certificate`] - Save one certificate's stored PDF to disk
//! - [`verify`] - Check a hash (pasted or computed from a local file)
//!   against the registry
//!
//! ### Information
//!
//! - [`stats`] - Registry-wide user/certificate counts (issuers only)
//!
//! ## Conventions
//!
//! Network calls run behind an `indicatif` spinner. Fatal conditions go
//! through the `error!` macro, which prints and exits non-zero; everything
//! else degrades to `warning!`/`info!` lines. The commands own all terminal
//! I/O; the registry and management layers never print.
//!
//! ## Session handling
//!
//! Commands that require authentication load the persisted session up front
//! and direct the user to `certcli login` when it is missing or rejected.
//! The listing and download commands follow the original client contract
//! instead: without a session they simply send no Authorization header and
//! surface whatever the registry answers.

mod account;
mod auth;
mod certificates;
mod issue;
mod prompt;
mod verify;

pub use account::stats;
pub use account::whoami;
pub use auth::login;
pub use auth::logout;
pub use auth::register;
pub use certificates::download_certificate;
pub use certificates::list_certificates;
pub use issue::issue;
pub use verify::verify;
