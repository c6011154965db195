use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur inside the Marquee extraction engine.
///
/// The public entry points never surface these; they degrade to defaults.
/// They exist for construction-time checks and for components that report
/// a failure before falling back.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// A built-in regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// Percent-decoding a path segment produced invalid UTF-8.
    #[error("failed to percent-decode {input:?}: {source}")]
    Decode {
        /// The segment that could not be decoded.
        input: String,
        /// The underlying UTF-8 error.
        #[source]
        source: FromUtf8Error,
    },

    /// The cleaner configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;
