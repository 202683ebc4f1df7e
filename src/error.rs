use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextError {
    #[error("the font has no metrics for the character {ch:?}")]
    /// A character in the text has no advance width in the font's metrics
    UnsupportedGlyph { ch: char },

    #[error("{name} must be a finite number greater than zero, got {value}")]
    /// A font size or maximum width that can't be used for layout
    InvalidParameter { name: &'static str, value: f32 },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [toml] failed to parse a break policy
    Config(#[from] toml::de::Error),
}
