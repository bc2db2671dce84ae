use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use super::splitter::split_syllables;
use crate::io::{cache_path, corpus_name, read_corpus};

/// Raw counts accumulated from a corpus of names.
///
/// This is the mutable, mergeable stage of training; converting it into a
/// `FrequencyModel` freezes it into probabilities.
///
/// # Responsibilities
/// - Accumulate name/word/syllable totals and per-syllable counts
/// - Load a corpus from a text file, with a binary sidecar cache
/// - Merge with other statistics (ex. parallel ingestion, multi-corpus
///   training)
///
/// # Invariants
/// - `order` holds every distinct syllable exactly once, in the order it
///   was first encountered while scanning the corpus. The probability
///   table derived from it inherits this order, and the weighted draw's
///   output distribution depends on it.
/// - Every syllable in `order` has a count >= 1 in `counts`, and
///   `counts` has no other keys.
/// - `syllable_count` is the sum of all counts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CorpusStats {
	/// Number of names scanned.
	name_count: usize,
	/// Total words across all names.
	word_count: usize,
	/// Total syllables across all words.
	syllable_count: usize,
	/// Occurrences per distinct syllable.
	counts: HashMap<String, usize>,
	/// Distinct syllables in first-seen order.
	order: Vec<String>,
	/// Names of the corpus files these statistics were loaded from.
	corpus_names: Vec<String>,
}

impl CorpusStats {
	/// Creates empty statistics.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds statistics from an in-memory sequence of names.
	pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
		let mut stats = Self::new();
		for name in names {
			stats.add_name(name.as_ref());
		}
		stats
	}

	/// Adds one name to the statistics.
	///
	/// Splits the name into words on single spaces, lowercases each word,
	/// splits it into syllables and counts them.
	///
	/// # Notes
	/// - Case is folded before syllable splitting; the model never keeps
	///   the original casing.
	/// - Splitting `""` yields one empty word with one empty syllable,
	///   so even an empty name contributes to the word count.
	pub fn add_name(&mut self, name: &str) {
		self.name_count += 1;

		for word in name.split(' ') {
			self.word_count += 1;
			let word = word.to_lowercase();

			for syllable in split_syllables(&word) {
				self.syllable_count += 1;
				match self.counts.entry(syllable.to_owned()) {
					Entry::Occupied(mut entry) => *entry.get_mut() += 1,
					Entry::Vacant(entry) => {
						self.order.push(entry.key().clone());
						entry.insert(1);
					}
				}
			}
		}
	}

	/// Loads corpus statistics from a text file (one name per line).
	///
	/// # Behavior
	/// - If a `.bin` sidecar cache exists, deserializes it (postcard).
	/// - Otherwise reads the text corpus, builds the statistics with
	///   multithreaded chunk ingestion, and writes the cache.
	/// - The corpus name (file stem) is recorded either way.
	///
	/// # Errors
	/// Returns an error on file I/O or cache decoding failure.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let binary_data_path = cache_path(&filepath)?;
		let mut stats;
		if binary_data_path.exists() {
			let bytes = std::fs::read(binary_data_path)?;
			stats = postcard::from_bytes(&bytes)?;
		} else {
			stats = Self::read_corpus_file(&filepath, binary_data_path)?;
		}
		stats.corpus_names.push(corpus_name(&filepath)?);
		Ok(stats)
	}

	/// Reads a corpus file, splits its names into chunks, accumulates
	/// partial statistics in parallel, merges them, and serializes the
	/// result for future fast loading.
	///
	/// # Notes
	/// - Chunk count is based on CPU cores * factor; partial statistics
	///   are built on worker threads and collected over an MPSC channel.
	/// - Partials are merged **in chunk index order**: the syllable
	///   table's first-seen order must match a sequential scan of the
	///   corpus, so arrival order on the channel cannot be used.
	fn read_corpus_file<PF, PB>(
		filename: PF,
		binary_data_path: PB,
	) -> Result<CorpusStats, Box<dyn std::error::Error>>
	where
		PF: AsRef<Path>,
		PB: AsRef<Path>,
	{
		let names = read_corpus(&filename)?;
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = ((names.len() + chunks - 1) / chunks).max(1);

		let (tx, rx) = mpsc::channel();
		for (index, chunk) in names.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial_stats = CorpusStats::new();
				for name in &chunk {
					partial_stats.add_name(name);
				}
				tx.send((index, partial_stats)).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut partials: Vec<(usize, CorpusStats)> = rx.iter().collect();
		partials.sort_by_key(|(index, _)| *index);

		let mut final_stats = CorpusStats::new();
		for (_, partial_stats) in &partials {
			final_stats.merge(partial_stats);
		}

		let bytes = postcard::to_stdvec(&final_stats)?;
		std::fs::write(binary_data_path, bytes)?;

		Ok(final_stats)
	}

	/// Merges other statistics into this one.
	///
	/// Totals and per-syllable counts are summed. Syllables unknown to
	/// this table are appended after its own, in the other table's
	/// first-seen order, so merging chunked partials in scan order
	/// reproduces the sequential table exactly.
	pub fn merge(&mut self, other: &Self) {
		self.name_count += other.name_count;
		self.word_count += other.word_count;
		self.syllable_count += other.syllable_count;

		for (syllable, count) in other.ordered_counts() {
			match self.counts.entry(syllable.to_owned()) {
				Entry::Occupied(mut entry) => *entry.get_mut() += count,
				Entry::Vacant(entry) => {
					self.order.push(entry.key().clone());
					entry.insert(count);
				}
			}
		}

		self.corpus_names.extend(other.corpus_names.iter().cloned());
	}

	/// Number of names scanned.
	pub fn name_count(&self) -> usize {
		self.name_count
	}

	/// Total words across all names.
	pub fn word_count(&self) -> usize {
		self.word_count
	}

	/// Total syllables across all words.
	pub fn syllable_count(&self) -> usize {
		self.syllable_count
	}

	/// Iterates the per-syllable counts in first-seen order.
	pub fn ordered_counts(&self) -> impl Iterator<Item = (&str, usize)> {
		self.order
			.iter()
			.map(|syllable| (syllable.as_str(), self.counts.get(syllable).copied().unwrap_or(0)))
	}

	/// Names of the corpus files these statistics were loaded from.
	///
	/// Empty for statistics built purely in memory.
	pub fn corpus_names(&self) -> &[String] {
		&self.corpus_names
	}
}
