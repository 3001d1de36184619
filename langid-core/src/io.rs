use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::error::{Error, Result};

/// Derives a model label from a corpus path.
///
/// The label is the file name up to its first `.`.
///
/// Examples:
/// - `"./data/english.txt"` → `"english"`
/// - `"french.corpus.txt"` → `"french"`
/// - `"german"` → `"german"`
///
/// # Errors
/// Returns `Error::InvalidPath` if the path has no file name or the
/// label would be empty (ex. `".txt"`).
pub fn label_from_path<P: AsRef<Path>>(input_path: P) -> Result<String> {
	let path = input_path.as_ref();
	let name = path
		.file_name()
		.ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?
		.to_string_lossy();

	let label = name.split('.').next().unwrap_or_default();
	if label.is_empty() {
		return Err(Error::InvalidPath(path.to_path_buf()));
	}
	Ok(label.to_owned())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Lists the corpus files of a directory as full paths, sorted by name.
pub fn corpus_paths<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	Ok(list_files(dir, extension)?.into_iter().map(|name| dir.join(name)).collect())
}
