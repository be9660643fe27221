pub mod client;
pub mod metrics;
pub mod tft;
pub mod traits;

pub use client::{ApiClientBase, ClientSettings};
pub use tft::TftApiClient;
pub use traits::{LeagueApi, MatchApi, SummonerApi, TftApiFull};
