use thiserror::Error;

/// Anything that can stop a single game from being played.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("could not parse weather report: {0}")]
    Parse(String),

    /// The knight has no attribute above zero to rank, or an attribute
    /// outside 0..=10. Negative values land here too; they are not skipped
    /// like zeroes.
    #[error("invalid knight: {0}")]
    InvalidInput(String),
}
