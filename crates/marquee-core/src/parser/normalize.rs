use crate::diagnostics::DiagnosticSink;
use crate::parser::patterns::patterns;

/// Final cleanup applied to a title after tag stripping.
///
/// In order: drop a known video extension, turn `.` and `_` into spaces,
/// collapse whitespace, then remove dangling hyphens. Normalizing an
/// already normalized string returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalNormalizer;

impl FinalNormalizer {
    /// Creates a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `input`.
    pub fn normalize(&self, input: &str, sink: &dyn DiagnosticSink) -> String {
        let p = patterns();

        let without_ext = p.video_extension.replace(input, "");
        let spaced = without_ext.replace(['.', '_'], " ");
        let collapsed = p.whitespace.replace_all(&spaced, " ");
        let out = p
            .dangling_hyphens
            .replace(collapsed.trim(), "")
            .trim()
            .to_string();

        sink.log("normalize", &format!("{input:?} -> {out:?}"));
        out
    }
}
