//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig)
//! - [`rooms`]: Room policy configuration (RoomsConfig, EncryptionDefaultPolicy)
//! - [`validation`]: Startup validation (collects every error before refusing to boot)

mod rooms;
mod types;
pub mod validation;

pub use rooms::{EncryptionDefaultPolicy, RoomsConfig};
pub use types::{Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
