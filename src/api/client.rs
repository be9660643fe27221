use std::{fmt::Debug, sync::Arc};

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::{constants, types::RiotApiResponse};

use super::metrics::RequestMetrics;

/// Tunables shared by every request a client performs.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// When set, every request targets this URL instead of the routed
    /// `https://{routing}.api.riotgames.com` host. Used by the mock-server
    /// tests; production callers leave it unset.
    pub base_url: Option<String>,
    /// Upper bound on in-flight match fetches during a bulk aggregation.
    pub max_concurrent_fetches: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            max_concurrent_fetches: 8,
        }
    }
}

/// Shared HTTP plumbing behind the endpoint traits: URL routing, API key
/// injection, status translation and request metrics.
#[derive(Debug)]
pub struct ApiClientBase {
    client: reqwest::Client,
    /// Riot API key, sent as the `api_key` query parameter on every call.
    key: String,
    settings: ClientSettings,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClientBase {
    pub fn new(api_key: String, settings: ClientSettings, metrics_name: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            key: api_key,
            settings,
            metrics: RequestMetrics::new(metrics_name),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Resolve the scheme-and-host prefix for a platform or regional
    /// routing value.
    pub fn base_url(&self, routing: &str) -> String {
        match &self.settings.base_url {
            Some(url) => url.clone(),
            None => format!("https://{routing}.api.riotgames.com"),
        }
    }

    /// Perform one GET against `path` and return the raw body.
    ///
    /// The API key is appended as a query parameter and the status code is
    /// checked against the documented error table before the body is read.
    /// Codes absent from the table pass through, whatever they are; a body
    /// that is not valid JSON then fails in the caller during decoding.
    pub async fn request(&self, path: String) -> RiotApiResponse<Bytes> {
        self.metrics.inc_sent();

        let res = self
            .client
            .get(&path)
            .query(&[("api_key", self.key.as_str())])
            .send()
            .await?;

        if let Err(e) = constants::check_status(res.status().as_u16()) {
            self.metrics.inc_failed();
            return Err(e);
        }

        Ok(res.bytes().await?)
    }

    /// [`request`](Self::request) followed by a JSON decode of the body.
    pub async fn request_json<T: DeserializeOwned + Debug>(
        &self,
        path: String,
    ) -> RiotApiResponse<T> {
        let raw = self.request(path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
