// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Keyword Matcher.

/// Error types for Keyword Matcher operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeywordMatcherError {
    /// Empty keyword provided
    #[error("Keyword cannot be empty")]
    EmptyKeyword,
}

/// Result type for Keyword Matcher operations
pub type KeywordMatcherResult<T> = std::result::Result<T, KeywordMatcherError>;
