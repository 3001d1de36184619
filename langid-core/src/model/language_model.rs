use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use super::transition_counts::{TransitionCounter, TransitionCounts};
use super::transition_probabilities::TransitionProbabilities;
use crate::alphabet::index_of;
use crate::error::{Error, Result};
use crate::io::label_from_path;

/// First-order Markov model of letter transitions for one label.
///
/// A `LanguageModel` is built once from a training stream and then only
/// read: scoring never mutates it, so a model can be shared freely across
/// threads once trained.
///
/// # Invariants
/// - `probabilities` is derived from a single, fully consumed stream
/// - The model is never updated after construction
#[derive(Clone, Debug)]
pub struct LanguageModel {
	/// Language (or source) name, ex. `"english"`.
	label: String,
	/// Smoothed transition table.
	probabilities: TransitionProbabilities,
}

impl LanguageModel {
	/// Trains a model from an in-memory character sequence.
	///
	/// The sequence is consumed exactly once, in order.
	pub fn train<I>(label: impl Into<String>, chars: I) -> Self
	where
		I: IntoIterator<Item = char>,
	{
		let mut counter = TransitionCounter::new();
		counter.extend(chars);
		Self::from_counter(label.into(), counter)
	}

	/// Trains a model by streaming `reader` to exhaustion.
	///
	/// The reader is consumed line by line; the previous letter is kept
	/// across line breaks. Bytes that are not valid UTF-8 are decoded as
	/// replacement characters, which are non-letters.
	///
	/// # Errors
	/// Any read failure aborts training.
	pub fn train_reader<R: BufRead>(label: impl Into<String>, mut reader: R) -> io::Result<Self> {
		let mut counter = TransitionCounter::new();
		let mut line = Vec::new();
		while reader.read_until(b'\n', &mut line)? != 0 {
			counter.feed_str(&String::from_utf8_lossy(&line));
			line.clear();
		}
		Ok(Self::from_counter(label.into(), counter))
	}

	/// Trains a model from a corpus file.
	///
	/// The label is the file name up to its first `.`
	/// (`data/english.txt` → `english`).
	///
	/// # Errors
	/// - `Error::InvalidPath` if no label can be derived
	/// - `Error::Corpus` if the file cannot be opened or read
	pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let label = label_from_path(path)?;
		info!("Training {} model from {}", label, path.display());

		let file = File::open(path).map_err(|e| Error::corpus(path, e))?;
		Self::train_reader(label, BufReader::new(file)).map_err(|e| Error::corpus(path, e))
	}

	/// Builds a model from already accumulated counts.
	pub fn from_counts(label: impl Into<String>, counts: &TransitionCounts) -> Self {
		Self {
			label: label.into(),
			probabilities: TransitionProbabilities::from_counts(counts),
		}
	}

	fn from_counter(label: String, counter: TransitionCounter) -> Self {
		let letters = counter.letters();
		let model = Self::from_counts(label, &counter.finish());
		info!("Trained {} model ({} letters)", model.label, letters);
		model
	}

	/// Returns the model label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the smoothed transition table.
	pub fn probabilities(&self) -> &TransitionProbabilities {
		&self.probabilities
	}

	/// Relative likelihood that `text` was produced by this model.
	///
	/// The score is the product of `P(next | previous)` over every pair of
	/// letters in `text`, where a run of non-letters after a letter is
	/// skipped and the next letter found is treated as its successor.
	/// A letter with no later letter contributes nothing.
	///
	/// Scores are only comparable between models for the same input:
	/// longer texts give smaller scores.
	///
	/// # Returns
	/// - `1.0` when `text` holds fewer than two letters
	/// - A value in `(0, 1]` otherwise (it may underflow to `0.0` on very
	///   long inputs, see `log_score`)
	pub fn score(&self, text: &str) -> f64 {
		letter_pairs(text).fold(1.0, |score, (previous, next)| {
			score * self.probabilities.get(previous, next)
		})
	}

	/// Natural logarithm of `score`, computed as a sum so it never underflows.
	///
	/// Returns `0.0` when `text` holds fewer than two letters.
	pub fn log_score(&self, text: &str) -> f64 {
		let log_score: f64 = letter_pairs(text)
			.map(|(previous, next)| self.probabilities.get(previous, next).ln())
			.sum();
		debug!("{} log score: {}", self.label, log_score);
		log_score
	}
}

/// Diagnostic grid of the transition table.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.probabilities, f)
	}
}

/// Yields the alphabet indices of every scored letter pair of `text`.
///
/// Scanning adjacent characters and searching forward past non-letters for
/// the successor of each letter pairs every letter with the next letter
/// in the text, so this walks the letters once while remembering the last one.
fn letter_pairs(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
	let mut previous: Option<usize> = None;
	text.chars().filter_map(index_of).filter_map(move |next| {
		let pair = previous.map(|p| (p, next));
		previous = Some(next);
		pair
	})
}
