//! Logging initialization module
//!
//! Provides a single initialization point for the global tracing subscriber.

use crate::errors::{CakelogError, Result};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the logging profile
pub const PROFILE_ENV_VAR: &str = "CAKELOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Filtered registry without output; tests attach their own capture layer
    Test,
}

impl Profile {
    /// Read the profile from `CAKELOG_PROFILE`
    ///
    /// Falls back to `Development` when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns `CakelogError::UnknownProfile` if the variable holds an
    /// unrecognised name.
    pub fn from_env() -> Result<Self> {
        match std::env::var(PROFILE_ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Profile::default()),
        }
    }

    fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "cakelog=debug",
            Profile::Production => "cakelog=info",
            Profile::Test => "cakelog=trace",
        }
    }
}

impl FromStr for Profile {
    type Err = CakelogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            _ => Err(CakelogError::UnknownProfile {
                value: s.to_string(),
            }),
        }
    }
}

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Initialize the logging facility
///
/// Call once at application startup. Later calls, or a subscriber installed
/// by someone else, leave the existing subscriber in place.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Registry with a trace-level filter and no output
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    if let Err(err) = try_init(profile) {
        tracing::debug!(profile = ?profile, error = %err, "tracing subscriber already installed");
    }
}

/// Initialize the logging facility, reporting failure
///
/// # Errors
///
/// Returns `CakelogError::SubscriberInit` if a global subscriber is already
/// installed.
pub fn try_init(profile: Profile) -> Result<()> {
    let result = match profile {
        Profile::Development => tracing_subscriber::fmt()
            .with_env_filter(env_filter(profile))
            .finish()
            .try_init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter(profile))
            .finish()
            .try_init(),
        Profile::Test => tracing_subscriber::registry()
            .with(env_filter(profile))
            .try_init(),
    };
    result.map_err(|e| CakelogError::SubscriberInit {
        reason: e.to_string(),
    })
}
