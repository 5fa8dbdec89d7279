use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    Res, config, error::ServiceError, management::CredentialExchanger, types::TokenResponse, utils,
};

/// The application's fixed identity for the `client_credentials` grant.
///
/// This exchanger backs the shared service credential used for track search.
/// It is distinct from the per-user token supplied by callers when saving a
/// playlist; that token is obtained through an authorization-code flow that
/// lives outside this service.
#[derive(Debug, Default)]
pub struct ClientCredentials;

impl ClientCredentials {
    pub fn new() -> Self {
        ClientCredentials
    }
}

#[async_trait]
impl CredentialExchanger for ClientCredentials {
    /// Exchanges the application identity for a service-level access token.
    ///
    /// Sends `grant_type=client_credentials` to the platform's token endpoint
    /// with a Basic authorization header of `base64(client_id:client_secret)`.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(TokenResponse)` - The access token and its declared lifetime
    /// - `Err(ServiceError::Credential)` - Non-success status, network
    ///   failure, or a malformed response body
    async fn exchange(&self) -> Res<TokenResponse> {
        let identity = STANDARD.encode(format!(
            "{client_id}:{client_secret}",
            client_id = &config::spotify_client_id(),
            client_secret = &config::spotify_client_secret()
        ));

        let response = utils::http_client()
            .post(&config::spotify_token_url())
            .header("Authorization", format!("Basic {}", identity))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| ServiceError::Credential(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Credential(e.to_string()))?;

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ServiceError::Credential(e.to_string()))?;

        Ok(token)
    }
}
