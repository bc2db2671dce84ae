//! Syllable-frequency name generation library.
//!
//! This crate trains a statistical model over a corpus of example names
//! and samples plausible new names from it, including:
//! - Heuristic vowel/consonant syllable splitting
//! - Mergeable corpus statistics with binary caching
//! - Shifted-Poisson and weighted-categorical sampling
//! - A high-level name generator
//!
//! Training scans the corpus once and never mutates the resulting model.
//! Generation draws all randomness from an injectable RNG, so output is
//! reproducible under a seeded generator.

/// Core statistics, sampling and generation logic.
///
/// This module exposes the splitter, the corpus statistics, the trained
/// frequency model, the sampling primitives and the generator interface.
pub mod model;

/// Corpus file utilities (text loading, cache paths, directory listing).
///
/// Only directory listing is exposed; loading goes through
/// `model::corpus::CorpusStats`.
pub mod io;

/// The caller-facing error raised by model construction.
pub mod error;
