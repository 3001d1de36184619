/// Number of symbols in the alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Returns the alphabet index (0..26) of a character.
///
/// The mapping is case-insensitive over the 26 ASCII Latin letters.
/// Any other character (digits, punctuation, whitespace, accented or
/// non-Latin letters) has no index.
///
/// Examples:
/// - `'a'` → `Some(0)`
/// - `'Z'` → `Some(25)`
/// - `'é'` → `None`
pub fn index_of(c: char) -> Option<usize> {
	if c.is_ascii_alphabetic() {
		Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
	} else {
		None
	}
}

/// Returns `true` if the character belongs to the alphabet.
pub fn is_letter(c: char) -> bool {
	index_of(c).is_some()
}

/// Returns the lowercase letter at `index`, or `None` if out of range.
pub fn letter_at(index: usize) -> Option<char> {
	if index < ALPHABET_SIZE {
		Some((b'a' + index as u8) as char)
	} else {
		None
	}
}

/// Iterates over the alphabet in index order.
pub fn letters() -> impl Iterator<Item = char> {
	(b'a'..=b'z').map(char::from)
}
