//! Client library for the Riot Teamfight Tactics REST API.
//!
//! The crate wraps the TFT summoner, match and league endpoints into typed
//! async calls, injects the API key on every request and translates error
//! status codes into [`RiotApiError`]. Match details can be fetched in bulk
//! through a bounded concurrent fan-out ([`api::traits::MatchApi::get_matches`]).

pub mod api;
pub mod constants;
pub mod types;

pub use api::tft::TftApiClient;
pub use api::client::ClientSettings;
pub use types::{RiotApiError, RiotApiResponse};
