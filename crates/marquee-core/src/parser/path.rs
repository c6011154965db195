//! # Path Decoding
//!
//! Reduces URI-like identifiers (`file://`, `content://`, percent-encoded
//! provider paths) to the bare filename they point at.

use crate::diagnostics::DiagnosticSink;
use crate::error::{MarqueeError, Result};

/// Resolves path-like inputs to their last segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathDecoder;

impl PathDecoder {
    /// Creates a decoder.
    pub fn new() -> Self {
        Self
    }

    /// Returns the decoded final path segment of `input`.
    ///
    /// Anything after `?` is dropped. If percent-decoding fails the
    /// undecoded segment is returned.
    ///
    /// ```
    /// use marquee_core::parser::PathDecoder;
    /// use marquee_core::NoopSink;
    ///
    /// let name = PathDecoder::new().decode(
    ///     "content://downloads/file%2FDownload%2FShow.S01E01.mkv?x=1",
    ///     &NoopSink,
    /// );
    /// assert_eq!(name, "Show.S01E01.mkv");
    /// ```
    pub fn decode(&self, input: &str, sink: &dyn DiagnosticSink) -> String {
        let without_query = input.split('?').next().unwrap_or_default();
        let segment = last_segment(without_query);

        let decoded = match try_decode(segment) {
            Ok(decoded) => decoded,
            Err(err) => {
                sink.log("path", &err.to_string());
                return segment.to_string();
            }
        };

        let name = if decoded.contains('/') {
            last_segment(&decoded).to_string()
        } else {
            decoded
        };

        if name != input {
            sink.log("path", &format!("{input:?} -> {name:?}"));
        }
        name
    }
}

/// Last non-empty `/`-separated segment, or the empty string.
fn last_segment(input: &str) -> &str {
    input
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
}

fn try_decode(segment: &str) -> Result<String> {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|source| MarqueeError::Decode {
            input: segment.to_string(),
            source,
        })
}
