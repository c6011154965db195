//! # Boundary Tokens
//!
//! Tokens that mark the end of a title: source, resolution, codec, audio,
//! HDR and release-type keywords, plus structural shapes such as years,
//! `1080p`, `x264`, `ddp5` and episode markers.

use crate::parser::patterns::patterns;

/// Lowercase keywords that never belong to a title.
pub static BOUNDARY_WORDS: &[&str] = &[
    // source
    "bluray", "blu-ray", "bdrip", "brrip", "bdremux", "remux", "web-dl", "webdl", "webrip",
    "web-rip", "hdtv", "pdtv", "dvdrip", "dvdscr", "hdrip", "hdcam", "telesync", "amzn", "dsnp",
    "hmax", "atvp",
    // resolution
    "4k", "8k", "uhd", "fhd",
    // codec
    "hevc", "avc", "av1", "vp9", "xvid", "divx",
    // audio
    "aac", "ac3", "eac3", "dts", "dts-hd", "truehd", "atmos", "flac", "opus", "mp3", "lpcm", "dd",
    "ddp",
    // hdr / video spec
    "hdr", "hdr10", "hdr10+", "hdr10plus", "dovi", "hlg", "sdr", "10bit", "8bit", "12bit",
    // release type
    "repack", "proper", "rerip", "extended", "uncut", "unrated", "uncensored", "remastered",
    "internal", "imax", "readnfo",
    // language
    "multi", "vostfr", "truefrench", "subbed", "dubbed",
];

/// Lowest year treated as a boundary token.
const YEAR_TOKEN_MIN: u16 = 1900;
/// Highest year treated as a boundary token.
const YEAR_TOKEN_MAX: u16 = 2099;

/// Returns `true` if `token` (any case) marks the end of a title.
///
/// `previous` is the token before it, used to recognise an absolute
/// episode number after a standalone dash (`Title - 01`).
pub fn is_boundary(token: &str, previous: Option<&str>) -> bool {
    let lower = token.to_lowercase();
    if is_boundary_shape(&lower) {
        return true;
    }

    // `x264-GROUP`, `1080p-GROUP`, `WEB-DL-GROUP`
    if let Some((head, _)) = lower.split_once('-') {
        if !head.is_empty() && is_boundary_shape(head) {
            return true;
        }
    }

    previous == Some("-") && is_absolute_episode(&lower)
}

fn is_boundary_shape(lower: &str) -> bool {
    let p = patterns();
    BOUNDARY_WORDS.contains(&lower)
        || is_year(lower)
        || p.resolution_token.is_match(lower)
        || p.audio_token.is_match(lower)
        || p.codec_token.is_match(lower)
        || p.bracketed_year_token.is_match(lower)
        || p.episode_token.is_match(lower)
}

/// A bare four-digit year between 1900 and 2099.
pub fn is_year(token: &str) -> bool {
    token.len() == 4
        && token.bytes().all(|b| b.is_ascii_digit())
        && token
            .parse::<u16>()
            .is_ok_and(|y| (YEAR_TOKEN_MIN..=YEAR_TOKEN_MAX).contains(&y))
}

fn is_absolute_episode(token: &str) -> bool {
    let digits = token.split_once('v').map_or(token, |(n, _)| n);
    (1..=4).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
