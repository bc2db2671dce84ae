use serde::{Deserialize, Serialize};

use super::corpus::CorpusStats;
use crate::error::InvalidInputError;

/// The immutable trained model.
///
/// # Responsibilities
/// - Hold the per-name and per-word averages driving the Poisson draws
/// - Hold the syllable probability table driving the weighted draw
///
/// # Invariants
/// - `avg_words_per_name > 0` and `avg_syllables_per_word > 0`
/// - Every probability is in (0, 1] and the table sums to 1.0 within
///   floating-point tolerance
/// - The table is ordered by first encounter in the corpus scan. This
///   order is part of the public contract: the sequential residual-mass
///   draw consumes the table in order and its output distribution
///   changes if the order changes.
///
/// A model is computed once from a corpus snapshot and never mutated;
/// it can be shared across threads freely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FrequencyModel {
	/// Average number of words per name.
	avg_words_per_name: f64,
	/// Average number of syllables per word.
	avg_syllables_per_word: f64,
	/// Syllable usage probabilities, in corpus first-seen order.
	syllable_probabilities: Vec<(String, f64)>,
}

impl FrequencyModel {
	/// Converts raw corpus statistics into a model.
	///
	/// # Errors
	/// - `InvalidInputError::EmptyCorpus` if the statistics cover no
	///   names.
	/// - `InvalidInputError::NoWords` if the total word count is zero
	///   (the averages would divide by zero).
	pub fn from_stats(stats: &CorpusStats) -> Result<Self, InvalidInputError> {
		if stats.name_count() == 0 {
			return Err(InvalidInputError::EmptyCorpus);
		}
		if stats.word_count() == 0 {
			return Err(InvalidInputError::NoWords);
		}

		let syllable_total = stats.syllable_count() as f64;
		let syllable_probabilities = stats
			.ordered_counts()
			.map(|(syllable, count)| (syllable.to_owned(), count as f64 / syllable_total))
			.collect();

		Ok(Self {
			avg_words_per_name: stats.word_count() as f64 / stats.name_count() as f64,
			avg_syllables_per_word: stats.syllable_count() as f64 / stats.word_count() as f64,
			syllable_probabilities,
		})
	}

	/// Trains a model directly from an in-memory sequence of names.
	///
	/// # Errors
	/// Same as `from_stats`.
	pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, InvalidInputError> {
		Self::from_stats(&CorpusStats::from_names(names))
	}

	/// Average number of words per name.
	pub fn avg_words_per_name(&self) -> f64 {
		self.avg_words_per_name
	}

	/// Average number of syllables per word.
	pub fn avg_syllables_per_word(&self) -> f64 {
		self.avg_syllables_per_word
	}

	/// The syllable probability table, in corpus first-seen order.
	pub fn syllable_probabilities(&self) -> &[(String, f64)] {
		&self.syllable_probabilities
	}
}
