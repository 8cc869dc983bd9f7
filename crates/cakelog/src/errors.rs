use thiserror::Error;

/// Result type alias using CakelogError
pub type Result<T> = std::result::Result<T, CakelogError>;

/// Errors raised while configuring logging
///
/// Log calls themselves never fail; these only come out of setup code such as
/// profile parsing and subscriber installation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CakelogError {
    /// Profile name not recognised
    #[error("Unknown logging profile: {value}")]
    UnknownProfile { value: String },

    /// Installing the global tracing subscriber failed
    #[error("Failed to install tracing subscriber: {reason}")]
    SubscriberInit { reason: String },
}

impl CakelogError {
    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CakelogError::UnknownProfile { .. } => "ERR_UNKNOWN_PROFILE",
            CakelogError::SubscriberInit { .. } => "ERR_SUBSCRIBER_INIT",
        }
    }
}
