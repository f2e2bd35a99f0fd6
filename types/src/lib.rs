//! Core vowel-run replacement for bazinga.
//!
//! This crate contains the pure transformation with no IO, no async, and no
//! logging. Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod bazingafy;
mod segment;
mod vowel;

pub use bazingafy::{Bazingafier, InvalidInput, MARKER, bazingafy, bazingafy_utf8, bazingafy_with};
pub use segment::{Segment, Segments, count_vowel_runs, segments};
pub use vowel::{UnknownVowelSet, VowelSet};
