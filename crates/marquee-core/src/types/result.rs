use serde::{Deserialize, Serialize};

use super::episode::TvInfo;

/// The structured output of [`FilenameCleaner::clean`](crate::FilenameCleaner::clean).
///
/// Season and episode are always populated; a filename without any
/// numbering marker yields the defaults `1`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Residual show or movie name after all stripping. May be empty.
    pub title: String,

    /// Season number (default 1).
    pub season: u32,

    /// Episode number (default 1).
    pub episode: u32,

    /// Release year, when one was found.
    pub year: Option<u16>,

    /// True when the episode came from absolute numbering
    /// (anime dash form or the loose fallback).
    pub is_anime: bool,
}

impl ExtractionResult {
    /// Creates a result holding `title` with default numbering.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            season: 1,
            episode: 1,
            year: None,
            is_anime: false,
        }
    }

    /// Returns `true` if a non-empty title survived cleaning.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Season and episode as a [`TvInfo`].
    #[must_use]
    pub fn tv_info(&self) -> TvInfo {
        TvInfo::new(self.season, self.episode)
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExtractionResult(title={:?}, {}", self.title, self.tv_info())?;
        if let Some(year) = self.year {
            write!(f, ", year={year}")?;
        }
        if self.is_anime {
            write!(f, ", anime")?;
        }
        write!(f, ")")
    }
}
