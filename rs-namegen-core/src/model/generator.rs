use rand::Rng;

use super::frequency_model::FrequencyModel;
use super::sampler::{pick_weighted, poisson_one_based};
use crate::error::InvalidInputError;

/// High-level name generator.
///
/// # Responsibilities
/// - Own exactly one `FrequencyModel` for its lifetime
/// - Assemble names: Poisson-many words of Poisson-many concatenated
///   syllables, each word capitalized, joined by single spaces
///
/// Stateless across calls apart from RNG consumption: with the same
/// model and the same seeded RNG stream, the output sequence is
/// identical.
#[derive(Clone, Debug)]
pub struct NameGenerator {
	model: FrequencyModel,
}

impl NameGenerator {
	/// Trains a model from a sequence of names and wraps it.
	///
	/// # Errors
	/// Returns `InvalidInputError` if the corpus is empty or contains
	/// no words.
	pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, InvalidInputError> {
		Ok(Self { model: FrequencyModel::from_names(names)? })
	}

	/// Wraps an already trained (ex. cache-loaded) model.
	pub fn from_model(model: FrequencyModel) -> Self {
		Self { model }
	}

	/// The trained model backing this generator.
	pub fn model(&self) -> &FrequencyModel {
		&self.model
	}

	/// Generates one name using the thread-local RNG.
	pub fn generate(&self) -> String {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one name, drawing all randomness from `rng`.
	///
	/// Use a seeded RNG (ex. `StdRng::seed_from_u64`) for reproducible
	/// output.
	pub fn generate_with<R: Rng>(&self, rng: &mut R) -> String {
		let word_amount = poisson_one_based(rng, self.model.avg_words_per_name());

		let mut words = Vec::with_capacity(word_amount as usize);
		for _ in 0..word_amount {
			words.push(capitalize(&self.random_word(rng)));
		}

		words.join(" ")
	}

	/// Builds one word: Poisson-many syllables concatenated with no
	/// separator.
	fn random_word<R: Rng>(&self, rng: &mut R) -> String {
		let syllable_amount = poisson_one_based(rng, self.model.avg_syllables_per_word());

		let mut word = String::new();
		for _ in 0..syllable_amount {
			// An exhausted draw contributes nothing; the word may come
			// out shorter than the drawn syllable count.
			if let Some(syllable) = pick_weighted(rng, self.model.syllable_probabilities()) {
				word.push_str(syllable);
			}
		}

		word
	}
}

/// Upper-cases the first character and keeps the rest as produced.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first.to_uppercase().chain(chars).collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CORPUS: [&str; 4] = ["anna maria", "anna lisa", "bertrand stein", "carolina berg"];

	#[test]
	fn single_syllable_corpus_reproduces_its_word() {
		let generator = NameGenerator::new(&["ab"]).unwrap();
		let mut rng = StdRng::seed_from_u64(1);

		for _ in 0..100 {
			let name = generator.generate_with(&mut rng);
			// Every word can only be "ab", capitalized.
			for word in name.split(' ') {
				assert_eq!(word.to_lowercase(), "ab".repeat(word.len() / 2));
				assert!(word.starts_with("Ab"));
			}
		}
	}

	#[test]
	fn words_are_capitalized_and_space_joined() {
		let generator = NameGenerator::new(&CORPUS).unwrap();
		let mut rng = StdRng::seed_from_u64(2);

		for _ in 0..500 {
			let name = generator.generate_with(&mut rng);
			assert!(!name.contains("  "), "double space in {name:?}");
			for word in name.split(' ') {
				if let Some(first) = word.chars().next() {
					assert!(first.is_ascii_uppercase(), "uncapitalized word in {name:?}");
				}
				for rest in word.chars().skip(1) {
					assert!(rest.is_ascii_lowercase(), "unexpected casing in {name:?}");
				}
			}
		}
	}

	#[test]
	fn generated_words_are_built_from_corpus_syllables() {
		let generator = NameGenerator::new(&CORPUS).unwrap();
		let syllables: Vec<&str> = generator
			.model()
			.syllable_probabilities()
			.iter()
			.map(|(s, _)| s.as_str())
			.collect();
		let mut rng = StdRng::seed_from_u64(3);

		// Backtracking decomposition: greedy stripping could reject
		// words like "an" + "d..." where "a" was the drawn syllable.
		fn decomposable(word: &str, syllables: &[&str]) -> bool {
			word.is_empty()
				|| syllables.iter().any(|s| {
					!s.is_empty() && word.starts_with(s) && decomposable(&word[s.len()..], syllables)
				})
		}

		for _ in 0..200 {
			let name = generator.generate_with(&mut rng);
			for word in name.split(' ') {
				assert!(
					decomposable(&word.to_lowercase(), &syllables),
					"word {word:?} is not made of corpus syllables"
				);
			}
		}
	}

	#[test]
	fn word_count_tracks_the_corpus_average() {
		// CORPUS has exactly 2 words per name.
		let generator = NameGenerator::new(&CORPUS).unwrap();
		assert_eq!(generator.model().avg_words_per_name(), 2.0);

		let mut rng = StdRng::seed_from_u64(4);
		let trials = 1_000;
		let total_words: usize = (0..trials)
			.map(|_| generator.generate_with(&mut rng).split(' ').count())
			.sum();
		let mean = total_words as f64 / trials as f64;

		// 1 + Poisson(1): variance 1, so 1000 trials stay well inside
		// +/- 0.15 of the expectation.
		assert!((mean - 2.0).abs() < 0.15, "mean word count {mean}, expected ~2.0");
	}

	#[test]
	fn seeded_generation_is_idempotent_across_builds() {
		let first = NameGenerator::new(&CORPUS).unwrap();
		let second = NameGenerator::new(&CORPUS).unwrap();

		let mut rng_a = StdRng::seed_from_u64(42);
		let mut rng_b = StdRng::seed_from_u64(42);
		for _ in 0..100 {
			assert_eq!(first.generate_with(&mut rng_a), second.generate_with(&mut rng_b));
		}
	}

	#[test]
	fn from_model_generates_like_new() {
		let trained = NameGenerator::new(&CORPUS).unwrap();
		let wrapped = NameGenerator::from_model(trained.model().clone());

		let mut rng_a = StdRng::seed_from_u64(7);
		let mut rng_b = StdRng::seed_from_u64(7);
		for _ in 0..50 {
			assert_eq!(trained.generate_with(&mut rng_a), wrapped.generate_with(&mut rng_b));
		}
	}

	#[test]
	fn empty_corpus_is_rejected() {
		let empty: [&str; 0] = [];
		assert_eq!(NameGenerator::new(&empty).unwrap_err(), InvalidInputError::EmptyCorpus);
	}

	#[test]
	fn capitalize_handles_edge_cases() {
		assert_eq!(capitalize(""), "");
		assert_eq!(capitalize("a"), "A");
		assert_eq!(capitalize("anna"), "Anna");
	}
}
