use async_trait::async_trait;
use bytes::Bytes;

use crate::types::RiotApiResponse;

use super::{
    client::{ApiClientBase, ClientSettings},
    traits::{ApiRequest, TftApiFull},
};

pub mod league_v1;
pub mod match_v1;
pub mod summoner_v1;

/// High level client implementing every TFT API exposed by the crate.
#[derive(Debug)]
pub struct TftApiClient(ApiClientBase);

impl TftApiClient {
    /// Create a new API client using the provided key and default settings.
    pub fn new(api_key: String) -> Self {
        Self::with_settings(api_key, ClientSettings::default())
    }

    pub fn with_settings(api_key: String, settings: ClientSettings) -> Self {
        Self(ApiClientBase::new(api_key, settings, "tft"))
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.0.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    pub(crate) fn base(&self) -> &ApiClientBase {
        &self.0
    }
}

#[async_trait]
impl ApiRequest for TftApiClient {
    async fn request(&self, path: String) -> RiotApiResponse<Bytes> {
        self.0.request(path).await
    }
}

impl TftApiFull for TftApiClient {}
