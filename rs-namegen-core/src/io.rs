use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Reads a text corpus and returns its names as a `Vec<String>`.
///
/// - One name per line (`\n` / `\r\n`)
/// - Blank lines are skipped
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds the binary cache path for a corpus file.
///
/// Example:
/// `data/french.txt` → `data/french.bin`
pub(crate) fn cache_path<P: AsRef<Path>>(corpus_path: P) -> io::Result<PathBuf> {
	let corpus_path = corpus_path.as_ref();

	let parent = corpus_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = corpus_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Corpus path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension("bin");

	Ok(output)
}

/// Extracts the corpus name from a path (base filename without extension).
///
/// Examples:
/// - `"./data/french.txt"` → `"french"`
/// - `"french.txt"` → `"french"`
pub(crate) fn corpus_name<P: AsRef<Path>>(corpus_path: P) -> io::Result<String> {
	let stem = corpus_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted for stable output.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	files.sort();
	Ok(files)
}
