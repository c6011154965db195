//! # Year Extraction
//!
//! Finds a release year delimited by separators or wrapped in parentheses
//! or brackets, and splits the string into the title before it and the year.

use std::ops::RangeInclusive;

use crate::diagnostics::DiagnosticSink;
use crate::parser::patterns::{is_separator, is_separator_or_end, patterns};

/// Default range of plausible release years.
pub const DEFAULT_YEAR_RANGE: RangeInclusive<u16> = 1900..=2100;

/// A year found in a filename together with the residual title before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMatch {
    /// The four-digit year.
    pub year: u16,
    /// Text preceding the year, trimmed.
    pub title: String,
}

/// Locates release years in filenames.
#[derive(Debug, Clone)]
pub struct YearExtractor {
    range: RangeInclusive<u16>,
}

impl Default for YearExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_RANGE)
    }
}

impl YearExtractor {
    /// Creates an extractor accepting years within `range`.
    pub fn new(range: RangeInclusive<u16>) -> Self {
        Self { range }
    }

    /// Returns `true` if `value` lies within the accepted year range.
    pub fn is_plausible(&self, value: u32) -> bool {
        u16::try_from(value).is_ok_and(|v| self.range.contains(&v))
    }

    /// Finds the release year in `input`.
    ///
    /// A candidate only counts when more than one character of title
    /// precedes it. The last parenthesized or bracketed candidate wins;
    /// otherwise the first bare one does.
    pub fn find(&self, input: &str, sink: &dyn DiagnosticSink) -> Option<YearMatch> {
        let mut first_bare: Option<YearMatch> = None;
        let mut last_wrapped: Option<YearMatch> = None;

        for caps in patterns().year.captures_iter(input) {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !is_separator_or_end(input, whole.end()) {
                continue;
            }
            let Ok(year) = digits.as_str().parse::<u16>() else {
                continue;
            };
            if !self.range.contains(&year) {
                continue;
            }

            let prefix = &input[..whole.start()];
            let residual = prefix.trim_end_matches(is_separator);
            if residual.chars().count() <= 1 {
                sink.log("year", &format!("ignoring {year}: no title before it"));
                continue;
            }

            let candidate = YearMatch {
                year,
                title: prefix.trim().to_string(),
            };
            let wrapped = whole.as_str().contains(['(', '[']);
            if wrapped {
                last_wrapped = Some(candidate);
            } else if first_bare.is_none() {
                first_bare = Some(candidate);
            }
        }

        let found = last_wrapped.or(first_bare);
        match &found {
            Some(m) => sink.log("year", &format!("found {} in {input:?}", m.year)),
            None => sink.log("year", &format!("no year in {input:?}")),
        }
        found
    }
}
