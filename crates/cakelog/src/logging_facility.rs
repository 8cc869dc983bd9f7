//! Subscriber setup for the `tracing` backend
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Profile selection from configuration (`Profile::from_env`, `FromStr`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use cakelog::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, try_init, Profile, PROFILE_ENV_VAR};
pub use test_capture::{CapturedEvent, TestCapture};
