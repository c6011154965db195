//! Compiled regular expressions shared by every component.
//!
//! The `regex` crate has no lookaround, so patterns that must not be
//! "followed by" something stop at the candidate and leave the check to
//! [`is_separator_or_end`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

const RESOLUTION: &str = r"\b(?:4320|2160|1440|1080|720|576|540|480|360|240)[pi]\b|\b(?:8k|4k|uhd|fhd|qhd|hd|sd)\b";
const SOURCE: &str = r"\b(?:blu-?ray|bdrip|brrip|bd-?remux|remux|bd|web-?dl|web-?rip|hdtv|pdtv|sdtv|dvd-?rip|dvdscr|dvd|hdrip|hdcam|telesync|amzn|dsnp|hmax|atvp|nf)\b";
const CODEC: &str = r"\b(?:[xh]\.?26[45]|hevc|avc|av1|vp9|xvid|divx|mpeg-?[24])\b";
const AUDIO: &str = r"\b(?:dts(?:-?hd)?(?:-?ma)?|dts-?x|atmos|truehd|e-?ac-?3|ac-?3|aac(?:2\.0)?|ddp?(?:[257]\.[01])?|flac|opus|mp3|lpcm)\b|\b[257]\.[01]\b";
const HDR: &str = r"\b(?:hdr10(?:plus)?|hdr|dolby[\s._-]?vision|dovi|hlg|sdr|1[02]-?bit|8-?bit)\b\+?";
const RELEASE: &str = r"\b(?:repack|proper|rerip|extended(?:[\s._-]cut)?|uncut|unrated|uncensored|remastered|directors?[\s._-]?cut|theatrical|internal|limited|imax|hybrid|readnfo)\b";
const LANGUAGE: &str = r"\b(?:multi(?:subs?)?|dual[\s._-]?audio|vostfr|truefrench|french|vff|german|italian|spanish|latino|castellano|hindi|dubbed|subbed|dub|sub)\b";
const BRACKETED: &str = r"^\[[^\]]*\]|[\s._-]\[[^\]]*\]|[\s._-]\([^)]*\)|[\s._-]\{[^}]*\}";
// Scene groups are written in capitals or digits ("-SPARKS", "-NTb"),
// which keeps hyphenated title words like "Spider-Man" intact.
const GROUP_SUFFIX: &str = r"-(?-i:[A-Z0-9]{2,}[A-Za-z0-9]*)(?:\.[A-Za-z0-9]{2,4})?$";

// `\b` treats `_` as a word character, so markers are delimited explicitly.
const SEP: &str = r"[\s._\-\[\](){}]";

const VIDEO_EXTENSIONS: &str =
    r"mkv|mp4|m4v|avi|mov|wmv|flv|webm|mpe?g|m2ts|mts|ts|vob|ogm|ogv|rmvb|divx|3gp|iso";

/// Every pattern used by the cascade, the junk stripper, the normalizer and
/// the tokenizer.
pub(crate) struct Patterns {
    pub season_episode: Regex,
    pub cross_episode: Regex,
    pub anime_dash: Regex,
    pub word_episode: Regex,
    pub loose_number: Regex,
    pub year: Regex,
    pub scene_tag: Regex,
    pub wrapped_tag: Regex,
    pub video_extension: Regex,
    pub whitespace: Regex,
    pub dangling_hyphens: Regex,
    pub trailing_group: Regex,
    pub last_extension: Regex,
    pub spaced_hyphen: Regex,
    pub resolution_token: Regex,
    pub audio_token: Regex,
    pub codec_token: Regex,
    pub bracketed_year_token: Regex,
    pub episode_token: Regex,
}

impl Patterns {
    /// Compiles the full pattern set.
    ///
    /// # Errors
    ///
    /// Returns `MarqueeError::Regex` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        let scene_tags = [RESOLUTION, SOURCE, CODEC, AUDIO, HDR, RELEASE, LANGUAGE].join("|");

        Ok(Self {
            season_episode: Regex::new(&format!(
                r"(?i)^(.*?)(?:^|{SEP})s(\d{{1,2}})[\s._-]*e(\d{{1,4}})"
            ))?,
            cross_episode: Regex::new(&format!(
                r"(?i)^(.*?)(?:^|{SEP})(\d{{1,2}})x(\d{{1,3}})(?:{SEP}|$)"
            ))?,
            anime_dash: Regex::new(
                r"(?i)^(.*?)[\s_]+-[\s_]+(\d{1,4})(?:v\d{1,2})?(?:[\s_]*[-\[(]|[\s_]*(?:\.[a-z0-9]{2,4})?$)",
            )?,
            word_episode: Regex::new(&format!(
                r"(?i)^(.*?)(?:^|{SEP})(?:episode[\s._-]?|ep[\s._-]?|e)(\d{{1,4}})(?:v\d{{1,2}})?(?:{SEP}|$)"
            ))?,
            loose_number: Regex::new(r"(?:^|[\s._\-\[(])(\d{1,4})")?,
            year: Regex::new(r"(?:^|[\s._\-\[(])[\[(]?(\d{4})[\])]?")?,
            scene_tag: Regex::new(&format!("(?i)(?:{scene_tags})"))?,
            wrapped_tag: Regex::new(&format!("(?i)(?:{BRACKETED}|{GROUP_SUFFIX})"))?,
            video_extension: Regex::new(&format!(r"(?i)\.(?:{VIDEO_EXTENSIONS})$"))?,
            whitespace: Regex::new(r"\s+")?,
            dangling_hyphens: Regex::new(r"(?:\s*-)+\s*$")?,
            trailing_group: Regex::new(r"\s*(?:\[[^\]]*\]|\{[^}]*\})\s*$")?,
            last_extension: Regex::new(r"\.[a-z][a-z0-9]{1,3}$")?,
            spaced_hyphen: Regex::new(r"\s+-+\s+")?,
            resolution_token: Regex::new(r"^\d+[pi]$")?,
            audio_token: Regex::new(r"^ddp?\d+(?:\.\d+)?$")?,
            codec_token: Regex::new(r"^[xh]\.?\d+$")?,
            bracketed_year_token: Regex::new(r"^[(\[](?:19|20)\d{2}[)\]]$")?,
            episode_token: Regex::new(
                r"^(?:s\d{1,2}[-.]?e\d{1,4}|\d{1,2}x\d{1,3}|(?:ep?|episode)\d{1,4})(?:v\d{1,2})?$",
            )?,
        })
    }
}

static PATTERNS: LazyLock<Patterns> =
    LazyLock::new(|| Patterns::new().expect("built-in filename patterns must compile"));

/// Process-wide compiled patterns, built on first use.
pub(crate) fn patterns() -> &'static Patterns {
    &PATTERNS
}

/// Characters that delimit numbers and tags in release names.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '_' | '-' | '[' | ']' | '(' | ')' | '{' | '}')
}

/// Returns `true` if `input[pos..]` is empty or starts with a separator.
pub(crate) fn is_separator_or_end(input: &str, pos: usize) -> bool {
    input[pos..].chars().next().is_none_or(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        assert!(Patterns::new().is_ok());
    }

    #[test]
    fn separator_or_end() {
        assert!(is_separator_or_end("1080", 4));
        assert!(is_separator_or_end("1080.mkv", 4));
        assert!(!is_separator_or_end("1080p", 4));
        assert!(!is_separator_or_end("10801", 4));
    }

    #[test]
    fn scene_tag_pattern_is_word_anchored() {
        let tags = &patterns().scene_tag;
        for word in ["Shdtv", "Audience", "Hevcraft", "Subway", "Ambush"] {
            assert!(!tags.is_match(word), "matched inside {word}");
        }
        for tag in ["1080p", "WEB-DL", "x264", "DDP5.1", "HDR10", "REPACK", "MULTI"] {
            assert!(tags.is_match(tag), "missed {tag}");
        }
    }

    #[test]
    fn group_suffix_requires_capitals() {
        let wrapped = &patterns().wrapped_tag;
        assert!(wrapped.is_match("Movie-SPARKS"));
        assert!(!wrapped.is_match("Spider-Man"));
    }
}
