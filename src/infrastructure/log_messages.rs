//! Log message constants
//!
//! This module centralizes the log messages emitted across the crate so the
//! wording stays consistent between call sites.

/// Factorization trace messages
pub mod factorization {
    pub const FACTORED: &str = "Factored number";
    pub const REJECTED_NEGATIVE: &str = "Rejected negative input";
}

/// Configuration and logging setup messages
pub mod configuration {
    pub const LOADING_CONFIG: &str = "Loading configuration";
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
    pub const SUBSCRIBER_INSTALLED: &str = "Tracing subscriber installed";
    pub const SUBSCRIBER_ALREADY_INSTALLED: &str =
        "Tracing subscriber already installed, keeping existing one";
}
