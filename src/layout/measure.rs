use crate::font::FontMetrics;
use crate::units::Pt;
use crate::TextError;

/// Fails with [TextError::InvalidParameter] unless `value` is finite and greater than zero
pub(crate) fn check_positive(name: &'static str, value: Pt) -> Result<(), TextError> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(TextError::InvalidParameter {
            name,
            value: value.0,
        })
    }
}

/// Split text on its explicit line breaks. A `\r` directly before a `\n` is part
/// of the break rather than the line. Trailing empty lines are kept, so text with
/// `k` breaks always yields `k + 1` lines.
pub(crate) fn input_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Rendered advance of a single character, in points
pub(crate) fn advance<F: FontMetrics + ?Sized>(
    font: &F,
    ch: char,
    size: f64,
) -> Result<f64, TextError> {
    font.glyph_width(ch)
        .map(|width| width as f64 / 1000.0 * size)
        .ok_or(TextError::UnsupportedGlyph { ch })
}

// accumulate in f64 so long lines don't drift; callers narrow once at the end
fn line_width<F: FontMetrics + ?Sized>(line: &str, font: &F, size: f64) -> Result<f64, TextError> {
    line.chars()
        .try_fold(0.0, |width, ch| -> Result<f64, TextError> {
            Ok(width + advance(font, ch, size)?)
        })
}

/// Calculate the width of a single line of text given the font and font size. Line
/// breaks are not interpreted: a `\n` is measured like any other character.
pub fn width_of_line<F: FontMetrics + ?Sized>(
    line: &str,
    font: &F,
    size: Pt,
) -> Result<Pt, TextError> {
    check_positive("size", size)?;
    Ok(Pt(line_width(line, font, size.0 as f64)? as f32))
}

/// Calculate the width of a given string of text given the font and font size.
///
/// Text containing explicit line breaks (`\n`) is as wide as its widest line, which
/// makes this suitable for sizing a column to fit its content. Empty text has zero
/// width.
///
/// ```
/// use pdf_linebreak::{layout::width_of_text, Pt, StandardFont};
///
/// let width = width_of_text("this is a small text", &StandardFont::Helvetica, Pt(12.0))
///     .expect("Helvetica covers ASCII");
/// assert!((width.0 - 94.692).abs() < 0.001);
/// ```
pub fn width_of_text<F: FontMetrics + ?Sized>(
    text: &str,
    font: &F,
    size: Pt,
) -> Result<Pt, TextError> {
    check_positive("size", size)?;

    let mut widest = Pt(0.0);
    for line in input_lines(text) {
        let width = Pt(line_width(line, font, size.0 as f64)? as f32);
        if width > widest {
            widest = width;
        }
    }
    Ok(widest)
}

/// Whether every line of `text` fits within `max_width`
pub fn does_text_line_fit<F: FontMetrics + ?Sized>(
    text: &str,
    font: &F,
    size: Pt,
    max_width: Pt,
) -> Result<bool, TextError> {
    check_positive("max_width", max_width)?;
    Ok(width_of_text(text, font, size)? <= max_width)
}
