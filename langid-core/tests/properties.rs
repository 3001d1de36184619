use langid_core::alphabet::{index_of, ALPHABET_SIZE};
use langid_core::model::{Classifier, LanguageModel, TransitionCounter, SMOOTHING_FLOOR};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SYMBOLS: &[char] = &[
	'a', 'b', 'c', 'e', 'k', 'q', 'z', 'A', 'E', 'Z', ' ', ' ', '.', ',', '7', '\n', 'é', '-',
];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
	let len = rng.random_range(0..=max_len);
	(0..len).map(|_| SYMBOLS[rng.random_range(0..SYMBOLS.len())]).collect()
}

fn letter_indices(text: &str) -> Vec<usize> {
	text.chars().filter_map(index_of).collect()
}

#[test]
fn every_cell_is_a_probability() {
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..50 {
		let corpus = random_text(&mut rng, 400);
		let model = LanguageModel::train("random", corpus.chars());

		let mut counter = TransitionCounter::new();
		counter.feed_str(&corpus);
		let counts = counter.finish();

		for (previous, row) in model.probabilities().rows().enumerate() {
			assert!(row.iter().all(|&p| p > 0.0 && p <= 1.0));
			if counts.row_sum(previous) == 0 {
				assert!(row.iter().all(|&p| p == SMOOTHING_FLOOR));
			}
		}
	}
}

#[test]
fn counts_pair_consecutive_letters() {
	let mut rng = StdRng::seed_from_u64(11);
	for _ in 0..50 {
		let corpus = random_text(&mut rng, 300);
		let mut counter = TransitionCounter::new();
		counter.feed_str(&corpus);
		let counts = counter.finish();

		let mut expected = [[0u64; ALPHABET_SIZE]; ALPHABET_SIZE];
		for pair in letter_indices(&corpus).windows(2) {
			expected[pair[0]][pair[1]] += 1;
		}
		for (previous, row) in expected.iter().enumerate() {
			assert_eq!(counts.row(previous), row);
		}
	}
}

#[test]
fn training_is_deterministic() {
	let mut rng = StdRng::seed_from_u64(13);
	for _ in 0..20 {
		let corpus = random_text(&mut rng, 500);
		let first = LanguageModel::train("a", corpus.chars());
		let second = LanguageModel::train("a", corpus.chars());
		assert_eq!(first.probabilities(), second.probabilities());
		assert_eq!(first.to_string(), second.to_string());
	}
}

/// Scores `text` by scanning adjacent positions: a letter followed by a
/// non-letter is paired with the first letter found from two positions on.
fn scan_score(model: &LanguageModel, text: &str) -> f64 {
	let chars: Vec<char> = text.chars().collect();
	let mut score = 1.0;
	for c in 0..chars.len().saturating_sub(1) {
		let Some(a) = index_of(chars[c]) else {
			continue;
		};
		let b = index_of(chars[c + 1]).or_else(|| chars[c + 2..].iter().find_map(|&next| index_of(next)));
		if let Some(b) = b {
			score *= model.probabilities().get(a, b);
		}
	}
	score
}

#[test]
fn scoring_skips_non_letters() {
	let mut rng = StdRng::seed_from_u64(17);
	let model = LanguageModel::train("a", random_text(&mut rng, 2000).chars());
	for _ in 0..200 {
		let text = random_text(&mut rng, 60);
		assert_eq!(model.score(&text), scan_score(&model, &text), "{:?}", text);

		let letters_only: String = text.chars().filter(|c| c.is_ascii_alphabetic()).collect();
		assert_eq!(model.score(&text), model.score(&letters_only));
	}
}

#[test]
fn scan_pairs_a_letter_with_the_next_one_found() {
	let model = LanguageModel::train("a", "ab ba bb aa ca".chars());
	let ab = model.probabilities().get(0, 1);
	let ba = model.probabilities().get(1, 0);
	for (text, expected) in [("a1b", ab), ("a...b!", ab), ("a, b.a", ab * ba), ("b?", 1.0), ("..a", 1.0)] {
		assert_eq!(scan_score(&model, text), expected, "{:?}", text);
		assert_eq!(model.score(text), expected, "{:?}", text);
	}
}

#[test]
fn scores_without_pairs_are_identity() {
	let mut rng = StdRng::seed_from_u64(19);
	let model = LanguageModel::train("a", random_text(&mut rng, 1000).chars());
	for text in ["", "x", "Q", "  ", "12.5", "é-é", "a...", "!b!"] {
		assert_eq!(model.score(text), 1.0, "{:?}", text);
	}
}

#[test]
fn normalized_probabilities_sum_to_one() {
	let mut rng = StdRng::seed_from_u64(23);
	let models = (0..4).map(|i| LanguageModel::train(format!("m{}", i), random_text(&mut rng, 800).chars()));
	let classifier = Classifier::with_models(models).unwrap();

	for _ in 0..50 {
		let report = classifier.classify(&random_text(&mut rng, 200)).unwrap();
		let total: f64 = report.entries().iter().map(|e| e.probability).sum();
		assert!((total - 1.0).abs() < 1e-9);
		let best = report.probability_of(report.most_likely()).unwrap();
		assert!(report.entries().iter().all(|e| e.probability <= best));
	}
}
