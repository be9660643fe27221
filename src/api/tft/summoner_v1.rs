use async_trait::async_trait;
use serde_json::Value;

use crate::{api::traits::SummonerApi, types::RiotApiResponse};

use super::TftApiClient;

#[async_trait]
impl SummonerApi for TftApiClient {
    async fn get_summoner_by_name(&self, name: &str, server: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[SUMMONER-V4 API] get_summoner_by_name {} on {}", name, server);

        // Summoner names may contain spaces; the other identifiers are opaque
        // URL-safe tokens.
        let path = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.base().base_url(server),
            urlencoding::encode(name),
        );

        self.base().request_json(path).await
    }

    async fn get_summoner_by_puuid(&self, puuid: &str, server: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[SUMMONER-V1 API] get_summoner_by_puuid {} on {}", puuid, server);

        let path = format!(
            "{}/tft/summoner/v1/summoners/by-puuid/{}",
            self.base().base_url(server),
            puuid,
        );

        self.base().request_json(path).await
    }

    async fn get_summoner_by_account_id(
        &self,
        account_id: &str,
        server: &str,
    ) -> RiotApiResponse<Value> {
        tracing::trace!(
            "[SUMMONER-V1 API] get_summoner_by_account_id {} on {}",
            account_id,
            server
        );

        let path = format!(
            "{}/tft/summoner/v1/summoners/by-account/{}",
            self.base().base_url(server),
            account_id,
        );

        self.base().request_json(path).await
    }

    async fn get_summoner_by_id(
        &self,
        summoner_id: &str,
        server: &str,
    ) -> RiotApiResponse<Value> {
        tracing::trace!(
            "[SUMMONER-V1 API] get_summoner_by_id {} on {}",
            summoner_id,
            server
        );

        let path = format!(
            "{}/tft/summoner/v1/summoners/{}",
            self.base().base_url(server),
            summoner_id,
        );

        self.base().request_json(path).await
    }
}
