use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifelineError {
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),
    #[error("Donor store error: {0}")]
    Store(#[from] crate::store::StoreError),
    #[error("Registry error: {0}")]
    Registry(#[from] lifeline_registry::RegistryError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LifelineError {
    /// Whether this failure was caused by a malformed or incomplete query
    /// (the caller's fault, no I/O was attempted).
    #[must_use]
    pub fn is_invalid_query(&self) -> bool {
        matches!(
            self,
            Self::Search(crate::search::SearchError::InvalidQuery(_))
        )
    }

    /// Whether this failure came from the donor store (the search failed
    /// as a whole; no partial results were produced).
    #[must_use]
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Search(crate::search::SearchError::Store(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, LifelineError>;
