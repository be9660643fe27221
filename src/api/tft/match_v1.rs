use async_trait::async_trait;
use futures::{StreamExt, stream};
use serde_json::Value;

use crate::{api::traits::MatchApi, types::RiotApiResponse};

use super::TftApiClient;

#[async_trait]
impl MatchApi for TftApiClient {
    async fn get_match_ids(
        &self,
        puuid: &str,
        region: &str,
        count: u32,
        start: u32,
        start_time: Option<u64>,
        end_time: Option<u64>,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!("[MATCH-V1 API] get_match_ids {} in {}", puuid, region);

        let mut path = format!(
            "{}/tft/match/v1/matches/by-puuid/{}/ids?start={}&count={}",
            self.base().base_url(region),
            puuid,
            start,
            count,
        );
        // A literal 0 is a real epoch filter to the API, so unset means absent.
        if let Some(t) = start_time.filter(|t| *t != 0) {
            path.push_str(&format!("&startTime={t}"));
        }
        if let Some(t) = end_time.filter(|t| *t != 0) {
            path.push_str(&format!("&endTime={t}"));
        }

        self.base().request_json(path).await
    }

    async fn get_match(&self, match_id: &str, region: &str) -> RiotApiResponse<Value> {
        tracing::trace!("[MATCH-V1 API] get_match {} in {}", match_id, region);

        let path = format!(
            "{}/tft/match/v1/matches/{}",
            self.base().base_url(region),
            match_id,
        );

        self.base().request_json(path).await
    }

    async fn get_matches(
        &self,
        match_ids: &[String],
        region: &str,
    ) -> RiotApiResponse<Vec<Value>> {
        tracing::trace!(
            "[MATCH-V1 API] get_matches, {} ids in {}",
            match_ids.len(),
            region
        );

        let cap = self.base().settings().max_concurrent_fetches.max(1);
        let fetches: Vec<_> = match_ids
            .iter()
            .map(|id| self.get_match(id, region))
            .collect();
        let outcomes: Vec<RiotApiResponse<Value>> = stream::iter(fetches)
            .buffer_unordered(cap)
            .collect()
            .await;

        // Every fetch runs to completion before the first failure is
        // surfaced; no partial list is ever handed back.
        outcomes.into_iter().collect()
    }
}
