use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An HTTP status code listed in the error table, rendered as the
    /// Riot developer portal describes it.
    #[error("{code} - {reason}")]
    Status { code: u16, reason: &'static str },

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A call to the Riot API either succeeds with the success type or fails with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;
