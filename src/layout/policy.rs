use crate::TextError;
use serde::{Deserialize, Serialize};

/// What happens to a delimiter when a line is broken on it
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// The delimiter is consumed by the break and appears on neither line (spaces)
    Drop,
    /// The delimiter ends the line it was found on (punctuation)
    #[default]
    Keep,
}

/// A set of characters that are all equally good places to break a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelimiterTier {
    /// Used when logging break decisions
    pub name: String,
    pub delimiters: Vec<char>,
    #[serde(default)]
    pub placement: Placement,
}

impl DelimiterTier {
    pub fn new<S: ToString, I: IntoIterator<Item = char>>(
        name: S,
        delimiters: I,
        placement: Placement,
    ) -> DelimiterTier {
        DelimiterTier {
            name: name.to_string(),
            delimiters: delimiters.into_iter().collect(),
            placement,
        }
    }

    /// Breaks between words, dropping the space
    pub fn whitespace() -> DelimiterTier {
        DelimiterTier::new("whitespace", [' '], Placement::Drop)
    }

    /// Breaks after sentence, list, path and compound-word punctuation, keeping it
    /// on the line being ended
    pub fn punctuation() -> DelimiterTier {
        DelimiterTier::new("punctuation", ['.', ',', '/', '-'], Placement::Keep)
    }

    pub fn matches(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }
}

/// The ordered rules used to pick where an overflowing line is broken.
///
/// Tiers are listed from most to least preferred. When a line overflows, the
/// rightmost break point of the first tier that has one in the fitting part of
/// the line wins. If no tier has a break point the line is split by size and the
/// continuation marker is appended to show that the word carries on.
///
/// Policies can be loaded from TOML; missing fields take their defaults:
///
/// ```
/// use pdf_linebreak::layout::BreakPolicy;
///
/// let policy = BreakPolicy::from_toml(r#"
/// continuation_marker = "~"
///
/// [[tiers]]
/// name = "whitespace"
/// delimiters = [" ", "\t"]
/// placement = "drop"
/// "#).expect("policy is valid");
///
/// assert_eq!(policy.tiers.len(), 1);
/// assert_eq!(policy.continuation_marker, "~");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakPolicy {
    /// Appended to lines that end in a forced split. May be empty.
    pub continuation_marker: String,
    pub tiers: Vec<DelimiterTier>,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        BreakPolicy {
            continuation_marker: "-".to_string(),
            tiers: vec![DelimiterTier::whitespace(), DelimiterTier::punctuation()],
        }
    }
}

impl BreakPolicy {
    /// Parse a policy from TOML source
    pub fn from_toml(source: &str) -> Result<BreakPolicy, TextError> {
        Ok(toml::from_str(source)?)
    }

    /// Add a tier with a lower priority than all existing tiers
    pub fn with_tier(mut self, tier: DelimiterTier) -> Self {
        self.tiers.push(tier);
        self
    }

    pub fn with_continuation_marker<S: ToString>(mut self, marker: S) -> Self {
        self.continuation_marker = marker.to_string();
        self
    }

    /// Index of the most preferred tier that `ch` delimits
    pub(crate) fn tier_of(&self, ch: char) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.matches(ch))
    }

    /// Whether breaking on `ch` consumes it
    pub(crate) fn drops(&self, ch: char) -> bool {
        self.tier_of(ch)
            .is_some_and(|tier| self.tiers[tier].placement == Placement::Drop)
    }
}
