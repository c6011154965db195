//! # Filename Cleaner
//!
//! Wires the components into the two entry points:
//!
//! - [`FilenameCleaner::clean`]: cascade → year → junk tags → normalizer,
//!   producing an [`ExtractionResult`].
//! - [`FilenameCleaner::extract_display_title`]: TV probe plus token-boundary
//!   title, composed into a display string.
//!
//! The two pipelines share patterns but no intermediate state.

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{MarqueeError, Result};
use crate::parser::cascade::PatternCascade;
use crate::parser::display::{DisplayInfo, DisplayTitleFormatter};
use crate::parser::junk::JunkTagStripper;
use crate::parser::normalize::FinalNormalizer;
use crate::parser::path::PathDecoder;
use crate::parser::tokenizer::TitleTokenizer;
use crate::parser::year::{DEFAULT_YEAR_RANGE, YearExtractor};
use crate::types::{ExtractionResult, TvInfo};

/// Configuration for the cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Earliest accepted release year.
    pub min_year: u16,
    /// Latest accepted release year.
    pub max_year: u16,
    /// Whether a bare number may be read as an absolute episode.
    pub loose_absolute_fallback: bool,
    /// Whether `clean` resolves URI/path inputs to their last segment first.
    pub decode_paths: bool,
    /// Additional words that end a display title.
    pub extra_boundary_words: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
            loose_absolute_fallback: true,
            decode_paths: false,
            extra_boundary_words: Vec::new(),
        }
    }
}

impl CleanerConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted release year range.
    pub fn with_year_range(mut self, min_year: u16, max_year: u16) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Enable or disable the loose absolute-number fallback.
    pub fn with_loose_absolute(mut self, enabled: bool) -> Self {
        self.loose_absolute_fallback = enabled;
        self
    }

    /// Enable or disable path decoding in `clean`.
    pub fn with_path_decoding(mut self, enabled: bool) -> Self {
        self.decode_paths = enabled;
        self
    }

    /// Add a word that ends display titles.
    pub fn with_boundary_word(mut self, word: impl Into<String>) -> Self {
        self.extra_boundary_words.push(word.into());
        self
    }

    /// Accepted release years.
    pub fn year_range(&self) -> RangeInclusive<u16> {
        self.min_year..=self.max_year
    }

    /// Checks the configuration for inconsistent values.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::InvalidConfig` for an inverted year range, a
    /// range reaching outside 1900..=2100, or a blank boundary word.
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(MarqueeError::InvalidConfig(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        if !DEFAULT_YEAR_RANGE.contains(&self.min_year)
            || !DEFAULT_YEAR_RANGE.contains(&self.max_year)
        {
            return Err(MarqueeError::InvalidConfig(format!(
                "year range {}..={} must lie within {}..={}",
                self.min_year,
                self.max_year,
                DEFAULT_YEAR_RANGE.start(),
                DEFAULT_YEAR_RANGE.end()
            )));
        }
        if self.extra_boundary_words.iter().any(|w| w.trim().is_empty()) {
            return Err(MarqueeError::InvalidConfig(
                "extra_boundary_words contains a blank entry".into(),
            ));
        }
        Ok(())
    }
}

/// Extracts titles and numbering from media filenames.
///
/// Cheap to share: every component is immutable and the compiled patterns
/// are process-wide.
pub struct FilenameCleaner {
    config: CleanerConfig,
    years: YearExtractor,
    cascade: PatternCascade,
    tv_probe: PatternCascade,
    junk: JunkTagStripper,
    normalizer: FinalNormalizer,
    decoder: PathDecoder,
    tokenizer: TitleTokenizer,
    formatter: DisplayTitleFormatter,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for FilenameCleaner {
    fn default() -> Self {
        Self::build(CleanerConfig::default())
    }
}

impl fmt::Debug for FilenameCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilenameCleaner")
            .field("config", &self.config)
            .field("cascade", &self.cascade.rule_names())
            .finish_non_exhaustive()
    }
}

impl FilenameCleaner {
    /// Create a cleaner with the given configuration.
    ///
    /// Diagnostics go to [`TracingSink`] until replaced with [`with_sink`](Self::with_sink).
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::InvalidConfig` if the configuration is rejected.
    pub fn new(config: CleanerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CleanerConfig) -> Self {
        let years = YearExtractor::new(config.year_range());
        let cascade = PatternCascade::standard(years.clone(), config.loose_absolute_fallback);
        let tokenizer = TitleTokenizer::new().with_extra_boundaries(&config.extra_boundary_words);

        Self {
            config,
            years,
            cascade,
            tv_probe: PatternCascade::tv_probe(),
            junk: JunkTagStripper::new(),
            normalizer: FinalNormalizer::new(),
            decoder: PathDecoder::new(),
            tokenizer,
            formatter: DisplayTitleFormatter::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Extracts title, season, episode, year and the anime flag.
    ///
    /// Never fails: a filename without recognisable markers yields its
    /// normalized self with season 1, episode 1.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::FilenameCleaner;
    ///
    /// let cleaner = FilenameCleaner::default();
    /// let result = cleaner.clean("Show.Name.S01E02.1080p.x264-GROUP.mkv");
    ///
    /// assert_eq!(result.title, "Show Name");
    /// assert_eq!((result.season, result.episode), (1, 2));
    /// assert!(!result.is_anime);
    /// ```
    pub fn clean(&self, filename: &str) -> ExtractionResult {
        let sink = self.sink.as_ref();
        let input: Cow<'_, str> = if self.config.decode_paths {
            Cow::Owned(self.decoder.decode(filename, sink))
        } else {
            Cow::Borrowed(filename)
        };

        let mut result = ExtractionResult::default();
        let mut working = input.to_string();

        if let Some(found) = self.cascade.run(&input, sink) {
            result.season = found.season;
            result.episode = found.episode;
            result.is_anime = found.is_anime;
            working = found.title;
        }

        if let Some(year) = self.years.find(&working, sink) {
            result.year = Some(year.year);
            working = year.title;
        }

        let stripped = self.junk.strip(&working, sink);
        result.title = self.normalizer.normalize(&stripped, sink);

        sink.log("clean", &format!("{filename:?} -> {result}"));
        result
    }

    /// Season and episode from the explicit `S01E02`/`1x02` rules only.
    ///
    /// The raw filename is tried first, then its decoded last path segment,
    /// so percent-encoded separators (`Show%20S01E02`) still count.
    pub fn tv_info(&self, filename: &str) -> Option<TvInfo> {
        let sink = self.sink.as_ref();
        self.tv_probe
            .run(filename, sink)
            .or_else(|| {
                let decoded = self.decoder.decode(filename, sink);
                if decoded == filename {
                    None
                } else {
                    self.tv_probe.run(&decoded, sink)
                }
            })
            .map(|found| found.tv_info())
    }

    /// Produces a human-facing title such as `Show S01E02` or `Movie (2023)`.
    ///
    /// Falls back to `filename` itself when no title can be extracted.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::FilenameCleaner;
    ///
    /// let cleaner = FilenameCleaner::default();
    /// assert_eq!(
    ///     cleaner.extract_display_title("content://media/file%2FDownload%2FSopranos.S01E01.1080p.mkv"),
    ///     "Sopranos S01E01"
    /// );
    /// assert_eq!(cleaner.extract_display_title("Movie.Title.2023.1080p.BluRay.mkv"), "Movie Title (2023)");
    /// ```
    pub fn extract_display_title(&self, filename: &str) -> String {
        let sink = self.sink.as_ref();
        let title = self.tokenizer.extract_title(filename, sink);

        let info = match self.tv_info(filename) {
            Some(tv) => DisplayInfo::Tv(tv),
            None => {
                let name = self.decoder.decode(filename, sink);
                DisplayInfo::Movie {
                    year: self.years.find(&name, sink).map(|found| found.year),
                }
            }
        };

        let out = self.formatter.format(filename, &title, info);
        sink.log("display", &format!("{filename:?} -> {out:?}"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NoopSink, RecordingSink};

    fn cleaner() -> FilenameCleaner {
        FilenameCleaner::default().with_sink(Arc::new(NoopSink))
    }

    #[test]
    fn scene_episode() {
        let r = cleaner().clean("Show.Name.S01E02.1080p.x264-GROUP.mkv");
        assert_eq!(r.title, "Show Name");
        assert_eq!((r.season, r.episode), (1, 2));
        assert_eq!(r.year, None);
        assert!(!r.is_anime);
    }

    #[test]
    fn anime_dash_episode() {
        let r = cleaner().clean("Show - 01 [Group].mkv");
        assert_eq!(r.title, "Show");
        assert_eq!((r.season, r.episode), (1, 1));
        assert!(r.is_anime);
    }

    #[test]
    fn fansub_release() {
        let r = cleaner().clean("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv");
        assert_eq!(r.title, "Jujutsu Kaisen");
        assert_eq!(r.episode, 24);
        assert!(r.is_anime);
    }

    #[test]
    fn movie_with_year() {
        let r = cleaner().clean("Movie.Title.2023.1080p.BluRay.mkv");
        assert_eq!(r.title, "Movie Title");
        assert_eq!(r.year, Some(2023));
        assert_eq!((r.season, r.episode), (1, 1));
        assert!(!r.is_anime);
    }

    #[test]
    fn loose_absolute_number() {
        let r = cleaner().clean("One.Piece.1080.WEBRip.mkv");
        assert_eq!(r.title, "One Piece");
        assert_eq!((r.season, r.episode), (1, 1080));
        assert!(r.is_anime);
    }

    #[test]
    fn year_before_episode_marker() {
        let r = cleaner().clean("Doctor.Who.2005.S10E01.720p.mkv");
        assert_eq!(r.title, "Doctor Who");
        assert_eq!(r.year, Some(2005));
        assert_eq!((r.season, r.episode), (10, 1));
    }

    #[test]
    fn junk_only_release() {
        let r = cleaner().clean("Some.Movie.1080p.BluRay.x264-SPARKS.mkv");
        assert_eq!(r.title, "Some Movie");
        assert_eq!(r.year, None);
    }

    #[test]
    fn untouched_filename() {
        let r = cleaner().clean("Just A Title.mkv");
        assert_eq!(r, ExtractionResult::new("Just A Title"));
    }

    #[test]
    fn defaults_hold_for_odd_inputs() {
        for input in ["", "   ", "...", "S00E00", "- 0", "2100", "[]", "%%%"] {
            let r = cleaner().clean(input);
            assert!(r.season >= 1 && r.episode >= 1, "{input:?}: {r}");
            if let Some(year) = r.year {
                assert!((1900..=2100).contains(&year), "{input:?}: {r}");
            }
        }
    }

    #[test]
    fn loose_absolute_can_be_disabled() {
        let cleaner = FilenameCleaner::new(CleanerConfig::new().with_loose_absolute(false))
            .unwrap()
            .with_sink(Arc::new(NoopSink));
        let r = cleaner.clean("One.Piece.1080.WEBRip.mkv");
        assert_eq!(r.title, "One Piece 1080");
        assert_eq!(r.episode, 1);
        assert!(!r.is_anime);
    }

    #[test]
    fn path_decoding_in_clean() {
        let input = "file:///media/tv/Show%20Name/Show.Name.S02E03.mkv";
        let decoding = FilenameCleaner::new(CleanerConfig::new().with_path_decoding(true))
            .unwrap()
            .with_sink(Arc::new(NoopSink));
        let r = decoding.clean(input);
        assert_eq!(r.title, "Show Name");
        assert_eq!((r.season, r.episode), (2, 3));
    }

    #[test]
    fn display_titles() {
        let c = cleaner();
        assert_eq!(c.extract_display_title("Show.Name.S01E02.1080p.x264-GROUP.mkv"), "Show Name S01E02");
        assert_eq!(c.extract_display_title("Show Name 3x07.mkv"), "Show Name S03E07");
        assert_eq!(c.extract_display_title("Movie.Title.2023.1080p.BluRay.mkv"), "Movie Title (2023)");
        assert_eq!(c.extract_display_title("Movie Title (1999) [1080p].mkv"), "Movie Title (1999)");
        assert_eq!(c.extract_display_title("Show - 01 [Group].mkv"), "Show");
        assert_eq!(
            c.extract_display_title("content://media/file%2FDownload%2FSopranos.S01E01.1080p.mkv"),
            "Sopranos S01E01"
        );
    }

    #[test]
    fn display_with_percent_encoded_spaces() {
        let c = cleaner();
        let input = "file:///media/Show%20Name%20S01E02.mkv";
        assert_eq!(c.tv_info(input), Some(TvInfo::new(1, 2)));
        assert_eq!(c.extract_display_title(input), "Show Name S01E02");
    }

    #[test]
    fn hyphenated_title_words_survive_clean() {
        let c = cleaner();
        let r = c.clean("Sub-Zero.2021.1080p.mkv");
        assert_eq!(r.title, "Sub-Zero");
        assert_eq!(r.year, Some(2021));
        assert_eq!(c.extract_display_title("Sub-Zero.2021.1080p.mkv"), "Sub-Zero (2021)");
        assert_eq!(c.clean("HD-Man.mkv").title, "HD-Man");
    }

    #[test]
    fn codec_and_audio_digits_are_not_episodes() {
        let c = cleaner();
        for input in [
            "Movie.Title.1080p.H.264.mkv",
            "Movie.Title.2160p.DDP5.1.Atmos.mkv",
            "Movie.Title.1080p.AAC2.0.mkv",
        ] {
            let r = c.clean(input);
            assert_eq!(r.title, "Movie Title", "{input}");
            assert_eq!((r.season, r.episode), (1, 1), "{input}");
            assert!(!r.is_anime, "{input}");
        }
    }

    #[test]
    fn display_falls_back_to_input() {
        let c = cleaner();
        assert_eq!(c.extract_display_title("1080p.mkv"), "1080p.mkv");
        assert_eq!(c.extract_display_title("S01E01.mkv"), "S01E01.mkv");
        for input in ["x", "2020", "[Group].mkv", "-"] {
            assert!(!c.extract_display_title(input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn extra_boundary_word_in_display() {
        let c = FilenameCleaner::new(CleanerConfig::new().with_boundary_word("Fansub"))
            .unwrap()
            .with_sink(Arc::new(NoopSink));
        assert_eq!(c.extract_display_title("My Show Fansub Edition.mkv"), "My Show");
    }

    #[test]
    fn sink_does_not_change_outputs() {
        let recording = Arc::new(RecordingSink::new());
        let observed = FilenameCleaner::default().with_sink(recording.clone());
        let silent = cleaner();

        for input in [
            "Show.Name.S01E02.1080p.x264-GROUP.mkv",
            "Movie.Title.2023.1080p.BluRay.mkv",
            "One.Piece.1080.WEBRip.mkv",
            "dir/Bad%FF.mkv",
        ] {
            assert_eq!(observed.clean(input), silent.clean(input));
            assert_eq!(
                observed.extract_display_title(input),
                silent.extract_display_title(input)
            );
        }
        assert!(recording.saw("cascade"));
        assert!(recording.saw("year"));
        assert!(recording.saw("normalize"));
        assert!(recording.saw("tokenizer"));
        assert!(recording.saw("display"));
    }

    #[test]
    fn config_validation() {
        assert!(CleanerConfig::default().validate().is_ok());
        assert!(matches!(
            CleanerConfig::new().with_year_range(2100, 1900).validate(),
            Err(MarqueeError::InvalidConfig(_))
        ));
        assert!(matches!(
            CleanerConfig::new().with_year_range(0, 2000).validate(),
            Err(MarqueeError::InvalidConfig(_))
        ));
        assert!(matches!(
            CleanerConfig::new().with_year_range(1000, 9999).validate(),
            Err(MarqueeError::InvalidConfig(_))
        ));
        assert!(CleanerConfig::new().with_year_range(1899, 2000).validate().is_err());
        assert!(CleanerConfig::new().with_year_range(1950, 2101).validate().is_err());
        assert!(CleanerConfig::new().with_year_range(1900, 2100).validate().is_ok());
        assert!(FilenameCleaner::new(CleanerConfig::new().with_year_range(1000, 9999)).is_err());
        assert!(FilenameCleaner::new(CleanerConfig::new().with_boundary_word("  ")).is_err());
    }

    #[test]
    fn custom_year_range() {
        let c = FilenameCleaner::new(CleanerConfig::new().with_year_range(1950, 1999))
            .unwrap()
            .with_sink(Arc::new(NoopSink));
        let r = c.clean("Old.Movie.1985.mkv");
        assert_eq!(r.year, Some(1985));
        assert_eq!(r.title, "Old Movie");
    }

    #[test]
    fn config_from_partial_json() {
        let config: CleanerConfig =
            serde_json::from_str(r#"{"loose_absolute_fallback": false, "extra_boundary_words": ["raw"]}"#)
                .unwrap();
        assert_eq!(config.min_year, 1900);
        assert!(!config.loose_absolute_fallback);
        assert_eq!(config.extra_boundary_words, vec!["raw".to_string()]);
    }

    #[test]
    fn cleaner_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FilenameCleaner>();
    }
}
