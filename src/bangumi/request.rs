//! Request layer: URL assembly, fixed headers and status handling

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::{API_BASE_URL, NEXT_BASE_URL};
use crate::error::AppError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Which of the two API hosts serves an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Host {
    /// Stable versioned API host
    #[default]
    Api,
    /// Secondary host for endpoints the stable host does not serve yet
    Next,
}

/// Client for the Bangumi API. Holds no mutable state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct BangumiClient {
    client: Client,
    api_base: String,
    next_base: String,
}

impl BangumiClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_urls(client, API_BASE_URL, NEXT_BASE_URL)
    }

    /// Points both hosts somewhere else, e.g. a local mock server.
    pub fn with_base_urls(
        client: Client,
        api_base: impl Into<String>,
        next_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            next_base: next_base.into(),
        }
    }

    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Api => &self.api_base,
            Host::Next => &self.next_base,
        }
    }

    pub fn url(&self, path: &str, host: Host) -> String {
        format!("{}{}", self.base_url(host), path)
    }

    /// Issues a GET to `base + path` and parses the JSON body.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str, host: Host) -> Result<T, AppError> {
        let url = self.url(path, host);
        info!("GET {url}");
        let request = self.client.get(&url).header(ACCEPT, JSON_MEDIA_TYPE);
        self.send(request, &url).await
    }

    /// Issues a POST to `base + path` with `body` serialized as JSON.
    #[instrument(skip(self, body))]
    pub async fn post<B, T>(&self, path: &str, body: &B, host: Host) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, host);
        info!("POST {url}");
        // `json` sets Content-Type; a body that fails to serialize surfaces
        // from `send` as a builder error before any request goes out
        let request = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .json(body);
        self.send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, AppError> {
        let response = request
            .header(USER_AGENT, crate::constants::USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed for URL {}: {}", url, e);
                AppError::ApiFetch(e)
            })?;

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {} - {} (URL: {})", status.as_u16(), status_text, url);
            return Err(AppError::api_error(status.as_u16(), status_text, url));
        }

        let response_text = response.text().await.map_err(|e| {
            error!("Failed to read response text from URL {}: {}", url, e);
            AppError::ApiFetch(e)
        })?;
        debug!("Response length: {} bytes", response_text.len());

        serde_json::from_str::<T>(&response_text).map_err(|e| {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            AppError::ApiParse(e)
        })
    }
}
