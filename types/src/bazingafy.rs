//! Vowel-run replacement.
//!
//! Every maximal run of vowels collapses to a single [`MARKER`]; everything
//! else is copied through unchanged and in order. The transform is total: any
//! `&str` has a defined result.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::vowel::VowelSet;

/// Replacement emitted once per vowel run, regardless of the run's length.
pub const MARKER: &str = "bazinga";

/// Replace every maximal run of ASCII lowercase vowels in `word` with [`MARKER`].
///
/// # Examples
///
/// ```
/// use bazinga_types::bazingafy;
///
/// assert_eq!(bazingafy("bear"), "bbazingar");
/// assert_eq!(bazingafy("aeiou"), "bazinga");
/// assert_eq!(bazingafy("tsk"), "tsk");
/// ```
#[must_use]
pub fn bazingafy(word: &str) -> String {
    bazingafy_with(word, VowelSet::AsciiLowercase).into_owned()
}

/// Replace every maximal vowel run in `word`, using `vowels` to classify characters.
///
/// Returns `Cow::Borrowed` when `word` contains no vowels, since the result is
/// then identical to the input.
#[must_use]
pub fn bazingafy_with(word: &str, vowels: VowelSet) -> Cow<'_, str> {
    Bazingafier::new(vowels).apply(word)
}

/// Decode `bytes` as UTF-8 and replace its vowel runs.
///
/// Input that is not valid UTF-8 is rejected rather than lossily decoded.
pub fn bazingafy_utf8(bytes: &[u8], vowels: VowelSet) -> Result<String, InvalidInput> {
    let word = std::str::from_utf8(bytes).map_err(|err| InvalidInput::NotUtf8 {
        valid_up_to: err.valid_up_to(),
    })?;
    Ok(bazingafy_with(word, vowels).into_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 { valid_up_to: usize },
}

/// A vowel-run replacer bound to one [`VowelSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bazingafier {
    vowels: VowelSet,
}

impl Bazingafier {
    #[must_use]
    pub const fn new(vowels: VowelSet) -> Self {
        Self { vowels }
    }

    #[must_use]
    pub const fn vowels(&self) -> VowelSet {
        self.vowels
    }

    /// Transform `word`, borrowing it unchanged when it has no vowels.
    #[must_use]
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if !word.chars().any(|c| self.vowels.contains(c)) {
            return Cow::Borrowed(word);
        }

        let mut out = String::with_capacity(word.len() + MARKER.len());
        self.write_to(word, &mut out)
            .expect("writing to a String cannot fail");
        Cow::Owned(out)
    }

    /// Append the transform of `word` to `out`.
    pub fn write_to<W: fmt::Write + ?Sized>(&self, word: &str, out: &mut W) -> fmt::Result {
        let mut previous_was_vowel = false;

        for c in word.chars() {
            if self.vowels.contains(c) {
                if !previous_was_vowel {
                    out.write_str(MARKER)?;
                }
                previous_was_vowel = true;
            } else {
                out.write_char(c)?;
                previous_was_vowel = false;
            }
        }

        Ok(())
    }
}
