//! The one network call the application makes.

use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::CharacterRecord;
use crate::config::ApiConfig;

/// Thin wrapper over `reqwest` for the characters endpoint.
///
/// Carries no state besides the built client and base URL. No retries and
/// no backoff: a failure surfaces directly and ends up in the error state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full character list.
    ///
    /// Issues a single `GET <base-url>/api/characters` with no headers and
    /// no auth, and decodes the body as a JSON array of records.
    pub async fn fetch_all_characters(&self) -> Result<Vec<CharacterRecord>, ApiError> {
        let url = self.characters_url();
        tracing::debug!(%url, "Fetching character list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<CharacterRecord>>()
            .await
            .map_err(|e| ApiError::Decode { source: e })
    }

    fn characters_url(&self) -> String {
        format!("{}/api/characters", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_url_appends_endpoint_path() {
        let config = ApiConfig {
            base_url: "https://hp-api.onrender.com".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(
            client.characters_url(),
            "https://hp-api.onrender.com/api/characters"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.characters_url(), "http://localhost:3000/api/characters");
    }
}
