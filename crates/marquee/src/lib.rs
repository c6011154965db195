//! # Marquee
//!
//! Clean titles, episode numbering and display strings from media filenames.
//!
//! This crate re-exports [`marquee_core`]; see its documentation for the
//! individual components.
//!
//! ```rust
//! let result = marquee::clean("One.Piece.1080.WEBRip.mkv");
//! assert_eq!(result.title, "One Piece");
//! assert_eq!(result.episode, 1080);
//!
//! assert_eq!(
//!     marquee::extract_display_title("Movie Title (1999) [1080p].mkv"),
//!     "Movie Title (1999)"
//! );
//! ```
pub use marquee_core::*;
