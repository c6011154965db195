//! # Title Tokenizer
//!
//! Splits a filename into space-delimited tokens and keeps the longest
//! prefix of tokens that are not release metadata.

use crate::diagnostics::DiagnosticSink;
use crate::parser::boundary;
use crate::parser::path::PathDecoder;
use crate::parser::patterns::patterns;

/// Token-boundary title extractor.
#[derive(Debug, Clone, Default)]
pub struct TitleTokenizer {
    decoder: PathDecoder,
    extra_boundaries: Vec<String>,
}

impl TitleTokenizer {
    /// Create a tokenizer using only the built-in boundary catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds extra boundary words, compared case-insensitively.
    pub fn with_extra_boundaries<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_boundaries
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Tokenize an already decoded name with its extension removed.
    ///
    /// Dots and underscores become spaces and free-standing dashes become a
    /// `-` token; hyphens inside words are kept.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::parser::TitleTokenizer;
    ///
    /// let tokens = TitleTokenizer::new().tokenize("Spider-Man.No_Way - Home");
    /// assert_eq!(tokens, vec!["Spider-Man", "No", "Way", "-", "Home"]);
    /// ```
    pub fn tokenize(&self, name: &str) -> Vec<String> {
        let spaced = name.replace(['_', '.'], " ");
        patterns()
            .spaced_hyphen
            .replace_all(&spaced, " - ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Extracts the display title from a filename or path-like identifier.
    ///
    /// Returns an empty string when the very first token is a boundary.
    pub fn extract_title(&self, input: &str, sink: &dyn DiagnosticSink) -> String {
        let name = self.decoder.decode(input, sink);
        let stem = strip_suffixes(&name);

        let mut tokens = self.tokenize(&stem);
        drop_release_group(&mut tokens, sink);

        let mut title: Vec<&str> = Vec::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            let previous = idx.checked_sub(1).map(|prev| tokens[prev].as_str());
            if self.is_boundary(token, previous) {
                sink.log("tokenizer", &format!("boundary {token:?} at {idx}"));
                break;
            }
            title.push(token);
        }
        while title.last() == Some(&"-") {
            title.pop();
        }

        let out = title
            .join(" ")
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '“' | '”'))
            .to_string();
        sink.log("tokenizer", &format!("{input:?} -> {out:?}"));
        out
    }

    fn is_boundary(&self, token: &str, previous: Option<&str>) -> bool {
        boundary::is_boundary(token, previous)
            || (!self.extra_boundaries.is_empty()
                && self.extra_boundaries.contains(&token.to_lowercase()))
    }
}

/// Removes trailing `[...]`/`{...}` groups and the file extension.
fn strip_suffixes(name: &str) -> String {
    let p = patterns();
    let name = p.trailing_group.replace(name, "");
    let name = if p.video_extension.is_match(&name) {
        p.video_extension.replace(&name, "")
    } else {
        p.last_extension.replace(&name, "")
    };
    p.trailing_group.replace(&name, "").into_owned()
}

/// Drops a trailing `-GROUP` token unless it is the only token.
fn drop_release_group(tokens: &mut Vec<String>, sink: &dyn DiagnosticSink) {
    if !tokens.last().is_some_and(|t| t.starts_with('-')) {
        return;
    }
    if let Some(idx) = tokens.iter().rposition(|t| t.starts_with('-')) {
        if idx > 0 {
            sink.log("tokenizer", &format!("dropping release group {:?}", &tokens[idx..]));
            tokens.truncate(idx);
        }
    }
}
