//! Sources of glyph advance widths.
//!
//! Measuring and breaking text only ever asks one question of a font: how wide
//! is this character? That question is the [`FontMetrics`] trait. Widths are
//! reported in per-mille of the nominal font size (1000 units per em), the
//! convention PDF uses for its font width arrays, so a width of `500.0` at a
//! size of `Pt(12.0)` renders `6pt` wide.
//!
//! Three sources ship with the crate:
//!
//! - [`Font`] - a parsed TrueType / OpenType face
//! - [`StandardFont`] - built-in metrics for the PDF standard fonts, which need
//!   no font file at all
//! - [`WithFallback`] - wraps another source and substitutes replacement glyphs
//!   for characters it doesn't cover

use crate::TextError;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::rc::Rc;
use std::sync::Arc;

mod fallback;
pub use fallback::*;

mod standard;
pub use standard::*;

/// Anything that can report the advance width of a character.
///
/// Implementations are only ever read through a shared reference, so a single
/// source can be used to measure and break text from multiple threads at once
/// as long as it is [Sync].
pub trait FontMetrics {
    /// The advance width of `ch` in thousandths of the font size, or [None] if
    /// the font has no metrics for the character
    fn glyph_width(&self, ch: char) -> Option<f32>;
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        (**self).glyph_width(ch)
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for Box<F> {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        (**self).glyph_width(ch)
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for Rc<F> {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        (**self).glyph_width(ch)
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for Arc<F> {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        (**self).glyph_width(ch)
    }
}

/// A parsed TrueType or OpenType font, used purely as a source of metrics.
///
/// Advance widths are read from the font's `hmtx` table and rescaled from the
/// font's own units-per-em to per-mille.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The number of font design units in one em
    pub fn units_per_em(&self) -> u16 {
        self.face.as_face_ref().units_per_em()
    }
}

impl FontMetrics for Font {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        let face = self.face.as_face_ref();
        let gid = face.glyph_index(ch)?;
        let advance = face.glyph_hor_advance(gid)?;
        Some(advance as f32 * 1000.0 / face.units_per_em() as f32)
    }
}
