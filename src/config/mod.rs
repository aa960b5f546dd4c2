//! Triage Configuration Module
//!
//! Provides service configuration loaded from TOML files, replacing
//! hardcoded pipeline thresholds and defect-batch rules with operator-tunable
//! values.
//!
//! ## Loading Order
//!
//! 1. `AUTOTRIAGE_CONFIG` environment variable (path to TOML file)
//! 2. `triage_config.toml` in the current working directory
//! 3. Built-in defaults (matching original hardcoded values)
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(TriageConfig::load());
//!
//! // Anywhere in the codebase:
//! let threshold = config::get().thresholds.urgent_confidence;
//! ```

mod triage_config;

pub use triage_config::*;

use std::sync::OnceLock;

/// Global triage configuration, initialized once at startup.
static TRIAGE_CONFIG: OnceLock<TriageConfig> = OnceLock::new();

/// Initialize the global triage configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: TriageConfig) {
    if TRIAGE_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global triage configuration.
///
/// Panics if `init()` has not been called. A missing config is a fatal
/// startup error, not a recoverable condition.
pub fn get() -> &'static TriageConfig {
    TRIAGE_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    TRIAGE_CONFIG.get().is_some()
}
