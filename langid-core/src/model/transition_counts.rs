use crate::alphabet::{index_of, ALPHABET_SIZE};

/// Letter-pair occurrence counts observed in a training stream.
///
/// `get(i, j)` is the number of times letter `j` followed letter `i`,
/// where any run of non-letter characters between them is skipped.
///
/// ## Invariants
/// - Counts are only written by `TransitionCounter` and frozen afterwards
/// - Indices are alphabet indices (`0..ALPHABET_SIZE`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionCounts {
	cells: [[u64; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl TransitionCounts {
	fn empty() -> Self {
		Self { cells: [[0; ALPHABET_SIZE]; ALPHABET_SIZE] }
	}

	/// Number of times `next` followed `previous`.
	///
	/// # Panics
	/// Panics if either index is outside the alphabet.
	pub fn get(&self, previous: usize, next: usize) -> u64 {
		self.cells[previous][next]
	}

	/// Outgoing counts of `previous`, indexed by successor.
	pub fn row(&self, previous: usize) -> &[u64; ALPHABET_SIZE] {
		&self.cells[previous]
	}

	/// Sum of the outgoing counts of `previous`.
	pub fn row_sum(&self, previous: usize) -> u64 {
		self.cells[previous].iter().sum()
	}

	/// Total number of recorded transitions.
	pub fn total(&self) -> u64 {
		self.cells.iter().flatten().sum()
	}
}

/// Accumulates `TransitionCounts` from a character stream.
///
/// The counter remembers the last letter it saw, so a stream can be fed
/// in arbitrary chunks (lines, buffers) without losing the transitions
/// that span a chunk boundary.
#[derive(Clone, Debug)]
pub struct TransitionCounter {
	counts: TransitionCounts,
	previous: Option<usize>,
	letters: u64,
}

impl Default for TransitionCounter {
	fn default() -> Self {
		Self::new()
	}
}

impl TransitionCounter {
	/// Creates a counter with all cells at zero and no previous letter.
	pub fn new() -> Self {
		Self { counts: TransitionCounts::empty(), previous: None, letters: 0 }
	}

	/// Consumes one character.
	///
	/// - A letter following a remembered letter increments their cell.
	/// - A letter always becomes the remembered letter.
	/// - Non-letters are ignored and never reset the remembered letter.
	pub fn feed(&mut self, c: char) {
		let Some(next) = index_of(c) else {
			return;
		};
		if let Some(previous) = self.previous {
			self.counts.cells[previous][next] += 1;
		}
		self.previous = Some(next);
		self.letters += 1;
	}

	/// Consumes every character of `chunk` in order.
	pub fn feed_str(&mut self, chunk: &str) {
		chunk.chars().for_each(|c| self.feed(c));
	}

	/// Number of letters consumed so far.
	pub fn letters(&self) -> u64 {
		self.letters
	}

	/// Ends the stream and returns the frozen counts.
	pub fn finish(self) -> TransitionCounts {
		self.counts
	}
}

impl<'a> Extend<&'a str> for TransitionCounter {
	fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
		for chunk in iter {
			self.feed_str(chunk);
		}
	}
}

impl Extend<char> for TransitionCounter {
	fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
		for c in iter {
			self.feed(c);
		}
	}
}
