use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::types::RiotApiResponse;

/// Trait implemented by structures capable of performing raw HTTP requests
/// against the Riot API.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    async fn request(&self, path: String) -> RiotApiResponse<Bytes>;
}

/// Summoner-V1 lookups (plus the legacy by-name route, which Riot still
/// serves from the LoL Summoner-V4 API).
///
/// Identifiers are passed through opaque; responses keep whatever shape the
/// remote API gives them.
#[async_trait]
pub trait SummonerApi: ApiRequest {
    async fn get_summoner_by_name(&self, name: &str, server: &str) -> RiotApiResponse<Value>;

    async fn get_summoner_by_puuid(&self, puuid: &str, server: &str) -> RiotApiResponse<Value>;

    async fn get_summoner_by_account_id(
        &self,
        account_id: &str,
        server: &str,
    ) -> RiotApiResponse<Value>;

    async fn get_summoner_by_id(&self, summoner_id: &str, server: &str)
        -> RiotApiResponse<Value>;
}

/// Match-V1 history and detail lookups, routed by region.
#[async_trait]
pub trait MatchApi: ApiRequest {
    /// List match ids for a player, newest first.
    ///
    /// `start_time` and `end_time` are epoch seconds. They are omitted from
    /// the request when unset; the API reads an explicit `0` as a real
    /// timestamp filter, so it is never sent.
    async fn get_match_ids(
        &self,
        puuid: &str,
        region: &str,
        count: u32,
        start: u32,
        start_time: Option<u64>,
        end_time: Option<u64>,
    ) -> RiotApiResponse<Vec<String>>;

    async fn get_match(&self, match_id: &str, region: &str) -> RiotApiResponse<Value>;

    /// Fetch every match in `match_ids` concurrently and return the bodies
    /// once all fetches have finished, in completion order.
    async fn get_matches(&self, match_ids: &[String], region: &str)
        -> RiotApiResponse<Vec<Value>>;
}

/// League-V1 ladder and entry lookups, routed by server.
#[async_trait]
pub trait LeagueApi: ApiRequest {
    async fn get_master_league(&self, server: &str) -> RiotApiResponse<Value>;

    async fn get_grandmaster_league(&self, server: &str) -> RiotApiResponse<Value>;

    async fn get_challenger_league(&self, server: &str) -> RiotApiResponse<Value>;

    async fn get_league_entries_by_summoner(
        &self,
        summoner_id: &str,
        server: &str,
    ) -> RiotApiResponse<Value>;

    async fn get_league_entries(
        &self,
        tier: &str,
        division: &str,
        server: &str,
        page: u32,
    ) -> RiotApiResponse<Value>;

    async fn get_league_by_id(&self, league_id: &str, server: &str) -> RiotApiResponse<Value>;

    async fn get_top_rated_ladder(&self, queue: &str, server: &str) -> RiotApiResponse<Value>;
}

/// All APIs required for the entire TFT scope of the crate.
pub trait TftApiFull: SummonerApi + MatchApi + LeagueApi {}
