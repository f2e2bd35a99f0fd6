//! Partitioning a word into literals and maximal vowel runs.

use std::iter::FusedIterator;

use crate::vowel::VowelSet;

/// One piece of a word, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A single character outside the vowel set.
    Literal(char),
    /// A maximal, non-empty run of consecutive vowels.
    VowelRun(&'a str),
}

impl Segment<'_> {
    #[must_use]
    pub const fn is_vowel_run(&self) -> bool {
        matches!(self, Self::VowelRun(_))
    }
}

/// Iterator over the [`Segment`]s of a word.
///
/// Concatenating the source text of every segment yields the original word, and
/// two [`Segment::VowelRun`]s are never adjacent.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    vowels: VowelSet,
}

/// Split `word` into literals and maximal vowel runs.
///
/// ```
/// use bazinga_types::{Segment, VowelSet, segments};
///
/// let parts: Vec<_> = segments("bear", VowelSet::AsciiLowercase).collect();
/// assert_eq!(
///     parts,
///     [Segment::Literal('b'), Segment::VowelRun("ea"), Segment::Literal('r')]
/// );
/// ```
#[must_use]
pub fn segments(word: &str, vowels: VowelSet) -> Segments<'_> {
    Segments { rest: word, vowels }
}

/// Number of vowel runs in `word`, i.e. how many markers a replacement emits.
#[must_use]
pub fn count_vowel_runs(word: &str, vowels: VowelSet) -> usize {
    segments(word, vowels).filter(Segment::is_vowel_run).count()
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        if !self.vowels.contains(first) {
            self.rest = &self.rest[first.len_utf8()..];
            return Some(Segment::Literal(first));
        }

        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !self.vowels.contains(c))
            .map_or(self.rest.len(), |(i, _)| i);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::VowelRun(run))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl FusedIterator for Segments<'_> {}
