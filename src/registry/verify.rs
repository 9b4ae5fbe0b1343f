use reqwest::Client;

use crate::{config, registry::RegistryError, types::VerifyResponse};

/// Looks up a certificate hash in the registry.
///
/// Sends an unauthenticated GET to `/api/verify` with the hash as a
/// url-encoded query parameter. The hash is expected in the registry's
/// stored form, `0x`-prefixed lowercase hex; callers normalize user input
/// before reaching this function.
///
/// An unknown hash is not an error: the registry answers `200` with
/// `on_chain: false` and no metadata. Only a missing/empty hash parameter
/// produces an `error` body.
pub async fn verify(hash: &str) -> Result<VerifyResponse, RegistryError> {
    let client = Client::new();
    let api_url = format!("{}/api/verify", config::api_base_url());

    let response = client.get(&api_url).query(&[("hash", hash)]).send().await?;
    if !response.status().is_success() {
        return Err(super::api_error(response).await);
    }

    Ok(response.json::<VerifyResponse>().await?)
}
