//! Text measurement and line breaking for fixed-width columns.
//!
//! This module answers the two questions a table or column renderer has to ask
//! before it can place any text: how wide is this text, and how do I break it so
//! that it fits?
//!
//! # Measuring
//!
//! [`width_of_text`](crate::layout::width_of_text) sums glyph advances for each
//! line of the text and returns the width of the widest one.
//!
//! # Breaking
//!
//! [`break_lines`](crate::layout::break_lines) (or a configured
//! [`LineBreaker`](crate::layout::LineBreaker)) keeps explicit line breaks and
//! breaks anything still too wide, in order of preference:
//!
//! 1. between words, dropping the space
//! 2. after `.`, `,`, `/` or `-`, keeping the punctuation on the first line
//! 3. by size, appending a `-` continuation marker
//!
//! The preferences are a [`BreakPolicy`](crate::layout::BreakPolicy), which can be
//! extended with more delimiter tiers or loaded from TOML.
//!
//! # Example
//!
//! ```
//! use pdf_linebreak::{Mm, Pt, StandardFont};
//! use pdf_linebreak::layout::{break_lines, width_of_text};
//!
//! let font = StandardFont::Helvetica;
//! let column: Pt = Mm(24.0).into();
//!
//! let lines = break_lines("https://example.com/a/very/long/path", &font, Pt(8.0), column)
//!     .expect("Helvetica covers ASCII");
//! for line in lines.iter() {
//!     assert!(width_of_text(line, &font, Pt(8.0)).expect("can measure") <= column);
//! }
//! ```

mod breaker;
mod measure;
mod policy;

pub use breaker::*;
pub use measure::{does_text_line_fit, width_of_line, width_of_text};
pub use policy::*;
