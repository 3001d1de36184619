use std::fmt;

use super::transition_counts::TransitionCounts;
use crate::alphabet::{letters, ALPHABET_SIZE};

/// Probability substituted for any transition that was never observed.
pub const SMOOTHING_FLOOR: f64 = 0.01;

/// Conditional letter-transition probabilities `P(next | previous)`.
///
/// Derived once from `TransitionCounts`, then frozen.
///
/// ## Invariants
/// - Every cell is in `(0, 1]`
/// - A row whose letter was never followed by another letter is flat `SMOOTHING_FLOOR`
/// - Zero cells of an observed row are replaced by `SMOOTHING_FLOOR` without
///   renormalizing, so such rows sum to slightly more than 1
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionProbabilities {
	cells: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl TransitionProbabilities {
	/// Converts counts to probabilities row by row, applying the smoothing floor.
	pub fn from_counts(counts: &TransitionCounts) -> Self {
		let mut cells = [[SMOOTHING_FLOOR; ALPHABET_SIZE]; ALPHABET_SIZE];

		for (previous, row) in cells.iter_mut().enumerate() {
			let row_sum = counts.row_sum(previous);
			if row_sum == 0 {
				continue;
			}
			for (next, cell) in row.iter_mut().enumerate() {
				let occurrence = counts.get(previous, next);
				if occurrence != 0 {
					*cell = occurrence as f64 / row_sum as f64;
				}
			}
		}

		Self { cells }
	}

	/// Probability that `next` follows `previous`.
	///
	/// # Panics
	/// Panics if either index is outside the alphabet.
	pub fn get(&self, previous: usize, next: usize) -> f64 {
		self.cells[previous][next]
	}

	/// Distribution of successors of `previous`.
	pub fn row(&self, previous: usize) -> &[f64; ALPHABET_SIZE] {
		&self.cells[previous]
	}

	/// Iterates over the rows in alphabet order.
	pub fn rows(&self) -> impl Iterator<Item = &[f64; ALPHABET_SIZE]> {
		self.cells.iter()
	}
}

/// Human-readable 26×26 grid, two decimals per cell.
///
/// The first line holds the successor letters, each following line starts
/// with its predecessor letter. Meant for inspection, not for reloading.
impl fmt::Display for TransitionProbabilities {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, " ")?;
		for letter in letters() {
			write!(f, "    {}", letter)?;
		}
		writeln!(f)?;

		for (letter, row) in letters().zip(self.rows()) {
			write!(f, "{} ", letter)?;
			for probability in row {
				write!(f, "{:.2} ", probability)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
