use async_trait::async_trait;
use serde_json::Value;

use crate::{api::traits::LeagueApi, types::RiotApiResponse};

use super::TftApiClient;

impl TftApiClient {
    /// The master, grandmaster and challenger lists share one URL shape.
    async fn get_apex_league(&self, apex: &str, server: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[LEAGUE-V1 API] get_{}_league on {}", apex, server);

        let path = format!(
            "{}/tft/league/v1/{}",
            self.base().base_url(server),
            apex,
        );

        self.base().request_json(path).await
    }
}

#[async_trait]
impl LeagueApi for TftApiClient {
    async fn get_master_league(&self, server: &str) -> RiotApiResponse<Value> {
        self.get_apex_league("master", server).await
    }

    async fn get_grandmaster_league(&self, server: &str) -> RiotApiResponse<Value> {
        self.get_apex_league("grandmaster", server).await
    }

    async fn get_challenger_league(&self, server: &str) -> RiotApiResponse<Value> {
        self.get_apex_league("challenger", server).await
    }

    async fn get_league_entries_by_summoner(
        &self,
        summoner_id: &str,
        server: &str,
    ) -> RiotApiResponse<Value> {
        tracing::trace!(
            "[LEAGUE-V1 API] get_league_entries_by_summoner {} on {}",
            summoner_id,
            server
        );

        let path = format!(
            "{}/tft/league/v1/entries/by-summoner/{}",
            self.base().base_url(server),
            summoner_id,
        );

        self.base().request_json(path).await
    }

    async fn get_league_entries(
        &self,
        tier: &str,
        division: &str,
        server: &str,
        page: u32,
    ) -> RiotApiResponse<Value> {
        tracing::trace!(
            "[LEAGUE-V1 API] get_league_entries {}/{} on {}",
            tier,
            division,
            server
        );

        let path = format!(
            "{}/tft/league/v1/entries/{}/{}?page={}",
            self.base().base_url(server),
            tier,
            division,
            page,
        );

        self.base().request_json(path).await
    }

    async fn get_league_by_id(&self, league_id: &str, server: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[LEAGUE-V1 API] get_league_by_id {} on {}", league_id, server);

        let path = format!(
            "{}/tft/league/v1/leagues/{}",
            self.base().base_url(server),
            league_id,
        );

        self.base().request_json(path).await
    }

    async fn get_top_rated_ladder(&self, queue: &str, server: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[LEAGUE-V1 API] get_top_rated_ladder {} on {}", queue, server);

        let path = format!(
            "{}/tft/league/v1/rated-ladders/{}/top",
            self.base().base_url(server),
            queue,
        );

        self.base().request_json(path).await
    }
}
