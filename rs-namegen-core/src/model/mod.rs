//! Top-level module for the name generation system.
//!
//! This crate provides a syllable-frequency name generator, including:
//! - A heuristic syllable splitter (`splitter`)
//! - Mergeable raw corpus statistics (`CorpusStats`)
//! - The immutable trained model (`FrequencyModel`)
//! - Randomness-consuming sampling primitives (`sampler`)
//! - A high-level generation interface (`NameGenerator`)

/// High-level interface for generating names from a trained model.
///
/// Exposes training from raw names, wrapping of pre-built models, and
/// generation with either the thread RNG or an injected seeded RNG.
pub mod generator;

/// The immutable trained model: per-name and per-word averages plus the
/// insertion-ordered syllable probability table.
pub mod frequency_model;

/// Raw corpus statistics.
///
/// Supports loading from disk with a binary cache, parallel construction,
/// merging, and conversion into a `FrequencyModel`.
pub mod corpus;

/// Pure heuristic syllable splitter (vowel/consonant boundary finder).
pub mod splitter;

/// Sampling primitives: shifted-Poisson counts and the sequential
/// residual-mass weighted draw.
pub mod sampler;
