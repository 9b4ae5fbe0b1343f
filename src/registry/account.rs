use reqwest::Client;

use crate::{
    config,
    registry::RegistryError,
    types::{Profile, RegistryStats},
};

/// Fetches the account behind the supplied token from `/api/me`.
pub async fn me(token: &str) -> Result<Profile, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/me", config::api_base_url());

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.json::<Profile>().await?)
}

/// Fetches registry-wide user and certificate counts from `/api/stats`.
/// The registry restricts this to issuer accounts.
pub async fn stats(token: &str) -> Result<RegistryStats, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/stats", config::api_base_url());

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.json::<RegistryStats>().await?)
}
