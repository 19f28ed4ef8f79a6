//! HTTP client for the Atlas Mode storefront REST API.

mod catalog;
mod content;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use atlas_core::AppConfig;

use crate::error::ClientError;

/// HTTP client for the storefront's public JSON endpoints.
///
/// Every request carries the configured `version` query parameter. 404
/// responses surface as [`ClientError::NotFound`] and other non-2xx
/// statuses as [`ClientError::UnexpectedStatus`]. Failed requests are not
/// retried; callers decide whether to ask again.
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
    api_version: String,
}

impl StorefrontClient {
    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL cannot carry path segments.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            &config.api_version,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client against an explicit base URL (used with wiremock in tests).
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(
        base_url: &str,
        api_version: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry path segments".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_version: api_version.to_owned(),
        })
    }

    /// Builds `{base}/{segments...}?version=..&{query...}`. Segments are
    /// percent-encoded individually, so a product id can never escape its
    /// path position.
    fn endpoint_url(&self, segments: &[&str], query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", &self.api_version);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Sends a GET and decodes the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] on HTTP 404.
    /// - [`ClientError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ClientError::Http`] on network or TLS failure.
    /// - [`ClientError::Deserialize`] if the body does not decode as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(segments, query);
        tracing::debug!(url = %url, context, "storefront request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
