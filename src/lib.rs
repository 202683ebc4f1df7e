mod font;
pub use font::*;

/// Measure text and break it into lines that fit a column
pub mod layout;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export the font parser, mostly for inspecting [Font] faces directly
pub use owned_ttf_parser;
