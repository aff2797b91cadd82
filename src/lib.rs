//! Kilo Keywords Library
//!
//! Dictionary-driven keyword extraction and replacement. Keywords are loaded
//! into a character trie, each mapped to a canonical name, and text is then
//! scanned once to collect the canonical names found or to rewrite every
//! occurrence.
//!
//! # Architecture
//!
//! - [`data_structures::keyword_trie`] holds the trie nodes
//! - [`data_structures::keyword_matcher`] owns a trie and runs the
//!   longest-match scan
//! - [`config`], [`error`] and [`logging`] carry the ambient setup
//!
//! The matcher is single-threaded by contract: queries borrow it immutably,
//! insertion borrows it mutably, and any sharing across threads is left to
//! the caller.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

use std::path::Path;

pub use data_structures::keyword_matcher::{KeywordMatch, KeywordMatcher, MatcherOptions};

/// Version information for the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the configuration (file, then `KILO__*` environment overrides),
/// installs the tracing subscriber it describes, and returns it.
pub fn init(config_path: Option<&Path>) -> error::KiloResult<config::KiloConfig> {
    let config = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&config.log)?;

    tracing::info!(version = VERSION, "Kilo keywords initialized");
    Ok(config)
}
