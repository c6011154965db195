use crate::types::TvInfo;

/// What the formatter knows about a file besides its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayInfo {
    /// Explicit season/episode numbering was found.
    Tv(TvInfo),
    /// No TV numbering; a release year may be known.
    Movie {
        /// Release year, if any.
        year: Option<u16>,
    },
}

/// Composes the human-facing title string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayTitleFormatter;

impl DisplayTitleFormatter {
    /// Creates a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Formats `title` with `info`, or returns `original` when `title` is empty.
    ///
    /// ```
    /// use marquee_core::parser::{DisplayInfo, DisplayTitleFormatter};
    /// use marquee_core::TvInfo;
    ///
    /// let f = DisplayTitleFormatter::new();
    /// assert_eq!(f.format("x.mkv", "Show", DisplayInfo::Tv(TvInfo::new(1, 2))), "Show S01E02");
    /// assert_eq!(f.format("x.mkv", "Movie", DisplayInfo::Movie { year: Some(1999) }), "Movie (1999)");
    /// assert_eq!(f.format("x.mkv", "", DisplayInfo::Movie { year: None }), "x.mkv");
    /// ```
    pub fn format(&self, original: &str, title: &str, info: DisplayInfo) -> String {
        if title.is_empty() {
            return original.to_string();
        }
        match info {
            DisplayInfo::Tv(tv) => format!("{title} {tv}"),
            DisplayInfo::Movie { year: Some(year) } => format!("{title} ({year})"),
            DisplayInfo::Movie { year: None } => title.to_string(),
        }
    }
}
