//! Vowel classification.
//!
//! The default set is the five ASCII lowercase vowels. Case folding is an
//! explicit opt-in via [`VowelSet::AsciiCaseInsensitive`]; no locale-specific
//! or Unicode vowel handling exists.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Which characters count as vowels when scanning for runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VowelSet {
    /// Exactly `a`, `e`, `i`, `o`, `u`. Uppercase letters are not vowels.
    #[default]
    #[serde(alias = "lowercase", alias = "sensitive")]
    AsciiLowercase,
    /// `a`, `e`, `i`, `o`, `u` in either ASCII case.
    #[serde(alias = "case-insensitive", alias = "insensitive")]
    AsciiCaseInsensitive,
}

impl VowelSet {
    #[must_use]
    pub const fn contains(self, ch: char) -> bool {
        match self {
            Self::AsciiLowercase => is_lowercase_vowel(ch),
            Self::AsciiCaseInsensitive => is_lowercase_vowel(ch.to_ascii_lowercase()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsciiLowercase => "ascii-lowercase",
            Self::AsciiCaseInsensitive => "ascii-case-insensitive",
        }
    }
}

const fn is_lowercase_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl fmt::Display for VowelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vowel set `{0}` (expected `lowercase` or `case-insensitive`)")]
pub struct UnknownVowelSet(pub String);

impl FromStr for VowelSet {
    type Err = UnknownVowelSet;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "sensitive" | "ascii-lowercase" => Ok(Self::AsciiLowercase),
            "case-insensitive" | "insensitive" | "ascii-case-insensitive" => {
                Ok(Self::AsciiCaseInsensitive)
            }
            _ => Err(UnknownVowelSet(raw.to_string())),
        }
    }
}
