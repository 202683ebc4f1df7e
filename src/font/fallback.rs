use super::FontMetrics;

/// Wraps a [FontMetrics] source so that characters it has no metrics for are
/// measured as a replacement glyph instead of failing.
///
/// Replacements are tried in order; by default that is the Unicode replacement
/// character `U+FFFD` followed by `?`, mirroring what gets drawn when a glyph
/// is missing from a font. If none of the replacements are covered either, the
/// missing width is used: a full em unless configured otherwise, so that text
/// is never measured narrower than it could be drawn.
///
/// ```
/// use pdf_linebreak::{FontMetrics, StandardFont, WithFallback};
///
/// let font = WithFallback::new(StandardFont::Helvetica);
/// // no U+FFFD in Helvetica, so 'é' is measured as '?'
/// assert_eq!(font.glyph_width('é'), Some(556.0));
/// ```
#[derive(Debug, Clone)]
pub struct WithFallback<F> {
    inner: F,
    replacements: Vec<char>,
    missing_width: Option<f32>,
}

/// Per-mille width of a character with no metrics and no covered replacement
pub const DEFAULT_MISSING_WIDTH: f32 = 1000.0;

impl<F: FontMetrics> WithFallback<F> {
    pub fn new(inner: F) -> WithFallback<F> {
        WithFallback {
            inner,
            replacements: vec!['\u{FFFD}', '?'],
            missing_width: Some(DEFAULT_MISSING_WIDTH),
        }
    }

    /// Replace the list of replacement glyphs, tried in order
    pub fn with_replacements<I: IntoIterator<Item = char>>(mut self, replacements: I) -> Self {
        self.replacements = replacements.into_iter().collect();
        self
    }

    /// Width (per-mille) to use when neither the character nor any replacement has metrics
    pub fn with_missing_width(mut self, width: f32) -> Self {
        self.missing_width = Some(width);
        self
    }

    /// Report characters as unsupported when no replacement is covered
    pub fn without_missing_width(mut self) -> Self {
        self.missing_width = None;
        self
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: FontMetrics> FontMetrics for WithFallback<F> {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        if let Some(width) = self.inner.glyph_width(ch) {
            return Some(width);
        }

        let substitute = self
            .replacements
            .iter()
            .find_map(|&replacement| self.inner.glyph_width(replacement))
            .or(self.missing_width);
        if let Some(width) = substitute {
            log::trace!("no metrics for {ch:?}, substituting a width of {width}");
        }
        substitute
    }
}
