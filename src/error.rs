/// Domain-specific error types for the marketplace data layer.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type MarketResult<T> = Result<T, MarketError>;
