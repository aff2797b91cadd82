//! Matcher configuration module.
//!
//! This module defines the settings a [`KeywordMatcher`] is constructed with.
//!
//! [`KeywordMatcher`]: crate::data_structures::keyword_matcher::KeywordMatcher

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Keyword matcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Whether keywords and text are compared without lower-casing
    pub case_sensitive: bool,
}

impl Validate for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every combination of matcher settings is usable.
        Ok(())
    }
}
