/// Vowels recognized by the splitter.
const VOWELS: &str = "aeiou";

/// Consonants recognized by the splitter.
///
/// Characters outside both sets (digits, punctuation, accented letters)
/// count as neither, so they never make a prefix valid on their own.
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Whether a prefix qualifies as a syllable on its own: it must contain
/// at least one vowel and at least one consonant.
fn is_valid_syllable(prefix: &str) -> bool {
	prefix.chars().any(|c| VOWELS.contains(c))
		&& prefix.chars().any(|c| CONSONANTS.contains(c))
}

/// Splits a word into syllable-like tokens.
///
/// Scans split positions left to right and cuts at the first position
/// whose prefix is a valid syllable (at least one vowel and one
/// consonant), then restarts the scan on the remainder. The remainder is
/// emitted whole once no position qualifies.
///
/// The returned slices borrow from `word`; concatenating them in order
/// reproduces `word` exactly.
///
/// # Notes
/// - Expects lowercase input; uppercase letters match neither letter
///   class, so they behave like punctuation.
/// - A word with no vowel, no consonant, or a single character comes
///   back as one token.
/// - Deterministic and pure. O(n²) in the word length, which is fine
///   for name-sized input.
pub fn split_syllables(word: &str) -> Vec<&str> {
	let mut syllables = Vec::new();
	let mut rest = word;

	loop {
		// Candidate cut points leave at least one char on each side.
		let mut cut = None;
		for (i, _) in rest.char_indices().skip(1) {
			if is_valid_syllable(&rest[..i]) {
				cut = Some(i);
				break;
			}
		}

		match cut {
			Some(i) => {
				let (prefix, suffix) = rest.split_at(i);
				syllables.push(prefix);
				rest = suffix;
			}
			None => {
				syllables.push(rest);
				return syllables;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_at_leftmost_valid_prefix() {
		assert_eq!(split_syllables("anna"), vec!["an", "na"]);
		assert_eq!(split_syllables("maria"), vec!["ma", "ri", "a"]);
		assert_eq!(split_syllables("lisa"), vec!["li", "sa"]);
		assert_eq!(split_syllables("banana"), vec!["ba", "na", "na"]);
	}

	#[test]
	fn unsplittable_words_come_back_whole() {
		// No interior boundary leaves a valid prefix.
		assert_eq!(split_syllables("ab"), vec!["ab"]);
		// No vowel at all.
		assert_eq!(split_syllables("xyz"), vec!["xyz"]);
		// No consonant at all.
		assert_eq!(split_syllables("aeiou"), vec!["aeiou"]);
	}

	#[test]
	fn single_character_word_is_one_syllable() {
		assert_eq!(split_syllables("a"), vec!["a"]);
		assert_eq!(split_syllables("x"), vec!["x"]);
	}

	#[test]
	fn empty_input_yields_one_empty_token() {
		assert_eq!(split_syllables(""), vec![""]);
	}

	#[test]
	fn decomposition_is_lossless() {
		for word in ["anna", "maria", "ab", "xyz", "aeiou", "wolfeschlegelstein"] {
			let joined: String = split_syllables(word).concat();
			assert_eq!(joined, word);
		}
	}

	#[test]
	fn non_letter_characters_never_validate_a_prefix() {
		// '-' belongs to neither letter class, so "a-" is still invalid
		// and the first cut happens after the first consonant.
		assert_eq!(split_syllables("a-ba"), vec!["a-b", "a"]);
	}
}
