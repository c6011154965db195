//! # Episode Pattern Cascade
//!
//! An ordered chain of [`EpisodeRule`]s. Rules run strongest-first and the
//! first one that matches decides the season, the episode, whether the
//! numbering is absolute, and where the title ends.

use regex::Regex;

use crate::diagnostics::DiagnosticSink;
use crate::parser::junk::JunkTagStripper;
use crate::parser::patterns::{is_separator_or_end, patterns};
use crate::parser::year::YearExtractor;
use crate::types::TvInfo;

/// Partial result produced by a successful rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeMatch {
    /// Text before the episode marker, trimmed.
    pub title: String,
    /// Season number, never below 1.
    pub season: u32,
    /// Episode number, never below 1.
    pub episode: u32,
    /// True for absolute (anime style) numbering.
    pub is_anime: bool,
    /// Name of the rule that matched.
    pub rule: &'static str,
}

impl CascadeMatch {
    fn new(rule: &'static str, title: &str, season: u32, episode: u32, is_anime: bool) -> Self {
        Self {
            title: title.trim().to_string(),
            season: season.max(1),
            episode: episode.max(1),
            is_anime,
            rule,
        }
    }

    /// Season and episode as a [`TvInfo`].
    pub fn tv_info(&self) -> TvInfo {
        TvInfo::new(self.season, self.episode)
    }
}

/// One step of the cascade.
pub trait EpisodeRule: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts to recognise an episode marker in `input`.
    fn try_extract(&self, input: &str, sink: &dyn DiagnosticSink) -> Option<CascadeMatch>;
}

fn number(caps: &regex::Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Applies a `prefix, season, episode` pattern.
fn season_episode_rule(
    regex: &Regex,
    rule: &'static str,
    input: &str,
) -> Option<CascadeMatch> {
    let caps = regex.captures(input)?;
    let season = number(&caps, 2)?;
    let episode = number(&caps, 3)?;
    Some(CascadeMatch::new(rule, &caps[1], season, episode, false))
}

/// `S01E02`, `s1e1`, `S01.E02`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSeasonEpisode;

impl EpisodeRule for ExplicitSeasonEpisode {
    fn name(&self) -> &'static str {
        "season-episode"
    }

    fn try_extract(&self, input: &str, _sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        season_episode_rule(&patterns().season_episode, self.name(), input)
    }
}

/// `1x01`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossNotation;

impl EpisodeRule for CrossNotation {
    fn name(&self) -> &'static str {
        "cross"
    }

    fn try_extract(&self, input: &str, _sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        season_episode_rule(&patterns().cross_episode, self.name(), input)
    }
}

/// `Title - 01`, followed by a dash, a bracket, a parenthesis or the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimeDash;

impl EpisodeRule for AnimeDash {
    fn name(&self) -> &'static str {
        "anime-dash"
    }

    fn try_extract(&self, input: &str, _sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        let caps = patterns().anime_dash.captures(input)?;
        let episode = number(&caps, 2)?;
        Some(CascadeMatch::new(self.name(), &caps[1], 1, episode, true))
    }
}

/// `Episode 1`, `Ep 1`, `E1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordEpisode;

impl EpisodeRule for WordEpisode {
    fn name(&self) -> &'static str {
        "word-episode"
    }

    fn try_extract(&self, input: &str, _sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        let caps = patterns().word_episode.captures(input)?;
        let episode = number(&caps, 2)?;
        Some(CascadeMatch::new(self.name(), &caps[1], 1, episode, false))
    }
}

/// A bare number bounded by separators, read as an absolute episode.
///
/// Only the first such number is considered. It is rejected when the year
/// extractor reads the same value as the release year.
#[derive(Debug, Clone, Default)]
pub struct LooseAbsolute {
    years: YearExtractor,
}

impl LooseAbsolute {
    /// Creates the rule, disambiguating against `years`.
    pub fn new(years: YearExtractor) -> Self {
        Self { years }
    }

    /// First separator-bounded number that is not part of a scene tag
    /// (`H.264`, `DDP5.1`, `AAC2.0`).
    fn first_candidate(input: &str) -> Option<(usize, u32)> {
        let tags = JunkTagStripper::new().spans(input);
        patterns()
            .loose_number
            .captures_iter(input)
            .find_map(|caps| {
                let whole = caps.get(0)?;
                let digits = caps.get(1)?;
                if !is_separator_or_end(input, digits.end()) {
                    return None;
                }
                if tags.iter().any(|tag| tag.contains(&digits.start())) {
                    return None;
                }
                Some((whole.start(), digits.as_str().parse().ok()?))
            })
    }
}

impl EpisodeRule for LooseAbsolute {
    fn name(&self) -> &'static str {
        "loose-absolute"
    }

    fn try_extract(&self, input: &str, sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        let (start, candidate) = Self::first_candidate(input)?;
        let year = self.years.find(input, sink).map(|m| m.year);

        if year.is_some_and(|y| u32::from(y) == candidate) {
            sink.log("cascade", &format!("{candidate} is the release year, not an episode"));
            return None;
        }

        if self.years.is_plausible(candidate) && year.is_none() {
            // Year-shaped and no competing year: still read as an episode.
            sink.log(
                "cascade",
                &format!("{candidate} could be a year; reading it as an absolute episode"),
            );
        } else {
            sink.log(
                "cascade",
                &format!("{candidate} read as absolute episode (year: {year:?})"),
            );
        }

        Some(CascadeMatch::new(
            self.name(),
            &input[..start],
            1,
            candidate,
            true,
        ))
    }
}

/// Ordered list of rules evaluated until one matches.
pub struct PatternCascade {
    rules: Vec<Box<dyn EpisodeRule>>,
}

impl PatternCascade {
    /// Builds a cascade from explicit rules, in priority order.
    pub fn from_rules(rules: Vec<Box<dyn EpisodeRule>>) -> Self {
        Self { rules }
    }

    /// The full five-rule cascade.
    ///
    /// `loose_absolute` toggles the final bare-number fallback.
    pub fn standard(years: YearExtractor, loose_absolute: bool) -> Self {
        let mut rules: Vec<Box<dyn EpisodeRule>> = vec![
            Box::new(ExplicitSeasonEpisode),
            Box::new(CrossNotation),
            Box::new(AnimeDash),
            Box::new(WordEpisode),
        ];
        if loose_absolute {
            rules.push(Box::new(LooseAbsolute::new(years)));
        }
        Self::from_rules(rules)
    }

    /// Only the two explicit season/episode rules, used to detect TV content.
    pub fn tv_probe() -> Self {
        Self::from_rules(vec![Box::new(ExplicitSeasonEpisode), Box::new(CrossNotation)])
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs the rules in order and returns the first match.
    pub fn run(&self, input: &str, sink: &dyn DiagnosticSink) -> Option<CascadeMatch> {
        for rule in &self.rules {
            if let Some(found) = rule.try_extract(input, sink) {
                sink.log(
                    "cascade",
                    &format!(
                        "{} matched: title={:?} {}",
                        found.rule,
                        found.title,
                        found.tv_info()
                    ),
                );
                return Some(found);
            }
        }
        sink.log("cascade", &format!("no episode marker in {input:?}"));
        None
    }
}
