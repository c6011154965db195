//! Scene tag removal.

use std::borrow::Cow;
use std::ops::Range;

use regex::Regex;

use crate::diagnostics::DiagnosticSink;
use crate::parser::patterns::patterns;

/// Removes release metadata (resolution, source, codec, audio, HDR,
/// release type, language, bracketed groups, trailing `-GROUP`) in a
/// single pass, replacing every tag with one space.
#[derive(Debug, Clone, Copy, Default)]
pub struct JunkTagStripper;

impl JunkTagStripper {
    /// Creates a stripper backed by the shared tag patterns.
    pub fn new() -> Self {
        Self
    }

    /// Byte ranges of every tag in `input`, sorted and non-overlapping.
    ///
    /// A tag joined to its neighbour by a hyphen only counts when the
    /// neighbour is a tag too (`x264-GROUP`, `HDTV-x264`), so hyphenated
    /// title words such as `Sub-Zero` survive.
    pub fn spans(&self, input: &str) -> Vec<Range<usize>> {
        let p = patterns();
        let mut spans: Vec<Range<usize>> =
            p.wrapped_tag.find_iter(input).map(|m| m.range()).collect();

        let mut last_tag_end = None;
        for m in p.scene_tag.find_iter(input) {
            if is_delimited(input, m.range(), last_tag_end) {
                last_tag_end = Some(m.end());
                spans.push(m.range());
            }
        }

        merge(input, spans)
    }

    /// Strips every junk tag from `input`.
    pub fn strip<'a>(&self, input: &'a str, sink: &dyn DiagnosticSink) -> Cow<'a, str> {
        let spans = self.spans(input);
        if spans.is_empty() {
            return Cow::Borrowed(input);
        }

        let mut out = String::with_capacity(input.len());
        let mut cursor = 0;
        for span in &spans {
            out.push_str(&input[cursor..span.start]);
            out.push(' ');
            cursor = span.end;
        }
        out.push_str(&input[cursor..]);

        sink.log("junk", &format!("{input:?} -> {out:?}"));
        Cow::Owned(out)
    }
}

/// Checks the characters around a scene tag match. `\b` already rules out
/// letters and digits; a hyphen needs a tag on its other side.
fn is_delimited(input: &str, range: Range<usize>, last_tag_end: Option<usize>) -> bool {
    let p = patterns();

    let before_ok = match input[..range.start].chars().next_back() {
        Some('-') => last_tag_end == Some(range.start - 1),
        _ => true,
    };
    let after_ok = match input[range.end..].chars().next() {
        Some('-') => {
            starts_at(&p.wrapped_tag, input, range.end)
                || starts_at(&p.scene_tag, input, range.end + 1)
        }
        _ => true,
    };
    before_ok && after_ok
}

fn starts_at(regex: &Regex, input: &str, pos: usize) -> bool {
    pos <= input.len()
        && regex
            .find_at(input, pos)
            .is_some_and(|m| m.start() == pos)
}

/// Joins overlapping spans and spans separated by a single hyphen.
fn merge(input: &str, mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|span| span.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last)
                if span.start <= last.end
                    || input.get(last.end..span.start) == Some("-") =>
            {
                last.end = last.end.max(span.end)
            }
            _ => merged.push(span),
        }
    }
    merged
}
