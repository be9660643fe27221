//! Static reference data published on the Riot developer portal.
//!
//! See <https://developer.riotgames.com/docs/portal> for the full listing.
//! None of the fetchers validate their inputs against these tables: an
//! out-of-range server or tier simply comes back as a 4xx from the remote
//! service.

use crate::types::{RiotApiError, RiotApiResponse};

/// Platform routing values, one per game server.
pub const SERVERS: [&str; 11] = [
    "BR1", "EUN1", "EUW1", "JP1", "KR", "LA1", "LA2", "NA1", "OC1", "TR1", "RU",
];

/// Regional routing values used by the match endpoints.
pub const REGIONS: [&str; 3] = ["AMERICAS", "ASIA", "EUROPE"];

/// Ranked tiers below master.
pub const TIERS: [&str; 6] = ["DIAMOND", "GOLD", "SILVER", "BRONZE", "IRON", "PLATINUM"];

/// Divisions within a tier, as published upstream.
// Upstream repeats "I" and omits "II". Kept verbatim until the portal data
// is corrected; do not patch locally.
pub const DIVISIONS: [&str; 4] = ["I", "I", "III", "IV"];

/// Rated queues accepted by the ladder endpoint.
pub const QUEUES: [&str; 1] = ["RANKED_TFT_TURBO"];

/// Status codes the API documents as failures, with their portal wording.
pub const ERROR_REASONS: [(u16, &'static str); 11] = [
    (400, "Bad request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Data not found"),
    (405, "Method not allowed"),
    (415, "Unsupported media type"),
    (429, "Rate limit exceeded"),
    (500, "Internal server error"),
    (502, "Bad gateway"),
    (503, "Service unavailable"),
    (504, "Gateway timeout"),
];

/// Look up the documented reason for a status code, if it is tabled.
pub fn error_reason(code: u16) -> Option<&'static str> {
    ERROR_REASONS
        .iter()
        .find(|(tabled, _)| *tabled == code)
        .map(|(_, reason)| *reason)
}

/// Translate a response status into an error when it is tabled.
///
/// Any code absent from [`ERROR_REASONS`] passes, success or not; a body
/// that then fails to parse surfaces as [`RiotApiError::Serde`] in the
/// endpoint that requested it.
pub fn check_status(code: u16) -> RiotApiResponse<()> {
    match error_reason(code) {
        Some(reason) => Err(RiotApiError::Status { code, reason }),
        None => Ok(()),
    }
}

/// Snapshot of every constant table, mirroring the portal documentation page.
#[derive(Debug, Clone, Copy)]
pub struct SupportedValues {
    pub servers: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub tiers: &'static [&'static str],
    pub divisions: &'static [&'static str],
    pub queues: &'static [&'static str],
    pub error_reasons: &'static [(u16, &'static str)],
}

pub fn supported_values() -> SupportedValues {
    SupportedValues {
        servers: &SERVERS,
        regions: &REGIONS,
        tiers: &TIERS,
        divisions: &DIVISIONS,
        queues: &QUEUES,
        error_reasons: &ERROR_REASONS,
    }
}
