use std::fmt;

use serde::{Deserialize, Serialize};

/// Season and episode pair recognised from an explicit TV marker
/// such as `S01E02` or `1x02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TvInfo {
    /// Season number, never below 1.
    pub season: u32,
    /// Episode number, never below 1.
    pub episode: u32,
}

impl TvInfo {
    /// Creates a new `TvInfo`, raising zero values to 1.
    #[must_use]
    pub fn new(season: u32, episode: u32) -> Self {
        Self {
            season: season.max(1),
            episode: episode.max(1),
        }
    }
}

impl fmt::Display for TvInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}
