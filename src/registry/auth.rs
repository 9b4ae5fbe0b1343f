use reqwest::Client;

use crate::{
    config,
    registry::RegistryError,
    types::{LoginRequest, LoginSuccess, MessageBody, RegisterRequest},
};

/// Registers a new account with the registry.
///
/// Sends the email, password and role as a JSON body to `/api/register`.
/// The registry validates the role (`issuer` or `student`), rejects
/// duplicate emails and stores the salted password hash.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The registry's confirmation message
/// - `Err(RegistryError)` - Transport failure or the server's `error` text
///   (duplicate email, invalid role, missing fields)
pub async fn register(request: &RegisterRequest) -> Result<String, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/register", config::api_base_url());

    let response = client.post(&api_url).json(request).send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    let body = response.json::<MessageBody>().await?;
    Ok(body.message)
}

/// Exchanges credentials for a bearer token.
///
/// Sends the email and password as a JSON body to `/api/login`. On success
/// the registry returns an opaque access token which the caller is expected
/// to persist; this function performs no storage side effects itself.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The access token, exactly as returned by the registry
/// - `Err(RegistryError)` - Transport failure or the server's `error` text
///   (typically "invalid credentials")
pub async fn login(request: &LoginRequest) -> Result<String, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/login", config::api_base_url());

    let response = client.post(&api_url).json(request).send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    let body = response.json::<LoginSuccess>().await?;
    Ok(body.access_token)
}
