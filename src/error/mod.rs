//! Error module for the Kilo keyword matcher.
//!
//! Each component owns a specific error type; this module gathers them into
//! a single crate-level error for callers that drive several components.

use thiserror::Error;

use crate::data_structures::keyword_matcher::KeywordMatcherError;

pub mod config;

/// Result type alias used throughout the crate.
pub type KiloResult<T> = Result<T, KiloError>;

/// Core error enum for the Kilo keyword matcher.
#[derive(Error, Debug)]
pub enum KiloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while building the keyword dictionary.
    #[error("Keyword error: {0}")]
    Keyword(#[from] KeywordMatcherError),

    /// Errors installing the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}
