use thiserror::Error;

/// Reasons a dispatch request could not produce an activity result.
///
/// Callers that only need the user-visible text collapse every variant to
/// [`crate::party::FALLBACK_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown venue: '{0}'")]
    UnknownVenue(String),

    #[error("unknown activity: '{0}'")]
    UnknownActivity(String),

    #[error("no activity registered for '{0}'")]
    NotRegistered(String),

    #[error("activity '{key}' failed: {reason}")]
    InvocationFailed { key: String, reason: String },
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {message}")]
    Parse { path: String, message: String },
}
