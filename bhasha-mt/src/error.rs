use thiserror::Error;

/// Errors from machine translation providers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// Provider misconfiguration (missing endpoint, rejected credentials, ...)
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Transport failure talking to a provider
    #[error("Network error: {0}")]
    NetworkError(String),
    /// The provider answered but produced no usable translation
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// A language code that cannot be sent to a provider
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for MtError {
    fn from(e: reqwest::Error) -> Self {
        MtError::NetworkError(e.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

/// Errors from the offline language pack lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// No pack exists for the language
    #[error("no language pack for '{0}'")]
    PackNotFound(String),
    /// The pack exists but has not been installed yet
    #[error("language pack '{0}' is not installed")]
    PackNotInstalled(String),
    /// The persistent store could not be written
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for pack operations
pub type PackResult<T> = Result<T, PackError>;
