use super::FontMetrics;

/// Helvetica advance widths for the printable ASCII range `0x20..=0x7E`,
/// taken from the Adobe font metrics that ship with every PDF reader.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0 - 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A - Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a - z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Every Courier glyph has the same advance
const COURIER_WIDTH: u16 = 600;

/// One of the standard PDF fonts. These are available in every conforming PDF
/// reader without embedding, so their metrics are compiled into the crate and
/// no font file is needed to measure text set in them.
///
/// Only printable ASCII is covered; wrap the font in a
/// [`WithFallback`](crate::WithFallback) to measure anything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    Courier,
}

impl StandardFont {
    /// The PostScript name of the font, as written into a PDF font dictionary
    pub fn name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    /// Look up a standard font by its PostScript name
    pub fn from_name(name: &str) -> Option<StandardFont> {
        match name {
            "Helvetica" => Some(StandardFont::Helvetica),
            "Courier" => Some(StandardFont::Courier),
            _ => None,
        }
    }
}

impl FontMetrics for StandardFont {
    fn glyph_width(&self, ch: char) -> Option<f32> {
        if !(' '..='~').contains(&ch) {
            return None;
        }
        let width = match self {
            StandardFont::Helvetica => HELVETICA_WIDTHS[ch as usize - 0x20],
            StandardFont::Courier => COURIER_WIDTH,
        };
        Some(width as f32)
    }
}
