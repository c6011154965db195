//! # Marquee Core
//!
//! Turns messy media filenames and path-like identifiers into clean titles,
//! season/episode numbering, release years and human-facing display titles.
//!
//! ## Quick Start
//!
//! ```rust
//! let result = marquee_core::clean("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv");
//!
//! assert_eq!(result.title, "Jujutsu Kaisen");
//! assert_eq!(result.episode, 24);
//! assert!(result.is_anime);
//!
//! assert_eq!(
//!     marquee_core::extract_display_title("Show.Name.S01E02.1080p.x264-GROUP.mkv"),
//!     "Show Name S01E02"
//! );
//! ```
//!
//! Both functions are pure: they never fail and never touch the filesystem.
//! Use [`FilenameCleaner`] directly to change the year range, disable the
//! bare-number fallback or attach a [`DiagnosticSink`].
use std::sync::LazyLock;

pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use diagnostics::{DiagnosticSink, NoopSink, RecordingSink, TracingSink};
pub use error::{MarqueeError, Result};
pub use parser::{CleanerConfig, FilenameCleaner};
pub use types::{ExtractionResult, TvInfo};

static DEFAULT_CLEANER: LazyLock<FilenameCleaner> = LazyLock::new(FilenameCleaner::default);

/// Clean a filename with the default configuration.
pub fn clean(filename: &str) -> ExtractionResult {
    DEFAULT_CLEANER.clean(filename)
}

/// Build a display title with the default configuration.
pub fn extract_display_title(filename: &str) -> String {
    DEFAULT_CLEANER.extract_display_title(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_match_default_cleaner() {
        let cleaner = FilenameCleaner::default();
        for input in [
            "Show.Name.S01E02.1080p.x264-GROUP.mkv",
            "Movie.Title.2023.1080p.BluRay.mkv",
            "Show - 01 [Group].mkv",
        ] {
            assert_eq!(clean(input), cleaner.clean(input));
            assert_eq!(extract_display_title(input), cleaner.extract_display_title(input));
        }
    }

    #[test]
    fn concurrent_use() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = format!("Show.S0{}E0{}.mkv", i + 1, i + 2);
                    clean(&input)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.season, i as u32 + 1);
            assert_eq!(result.episode, i as u32 + 2);
            assert_eq!(result.title, "Show");
        }
    }
}
