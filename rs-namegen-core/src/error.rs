use thiserror::Error;

/// Error raised when a training corpus cannot produce a frequency model.
///
/// Model construction fails fast: no partial model is ever returned.
/// Everything downstream of a successful construction is total and
/// cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
	/// The corpus contains no names at all.
	#[error("corpus is empty")]
	EmptyCorpus,

	/// The corpus produced a total word count of zero, so the
	/// per-word averages are undefined.
	#[error("corpus contains no words")]
	NoWords,
}
