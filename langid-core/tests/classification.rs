use std::fs;
use std::path::PathBuf;

use langid_core::model::{train_corpora, Classifier, LanguageModel, SMOOTHING_FLOOR};
use langid_core::Error;
use tempfile::TempDir;

const ENGLISH: &str = "The quick brown fox jumps over the lazy dog. \
	This is a short sample of English text, with the usual letters and \
	the usual words that the English language uses all the time.";

const FRENCH: &str = "Le renard brun rapide saute par-dessus le chien paresseux. \
	Ceci est un court exemple de texte en francais, avec les lettres et \
	les mots que la langue francaise utilise tout le temps.";

const GERMAN: &str = "Der schnelle braune Fuchs springt ueber den faulen Hund. \
	Dies ist ein kurzes Beispiel fuer deutschen Text, mit den Buchstaben \
	und Woertern, welche die deutsche Sprache schon immer benutzt.";

fn write_corpora(dir: &TempDir) -> Vec<PathBuf> {
	[("english.txt", ENGLISH), ("french.txt", FRENCH), ("german.txt", GERMAN)]
		.iter()
		.map(|(name, text)| {
			let path = dir.path().join(name);
			fs::write(&path, text).unwrap();
			path
		})
		.collect()
}

#[test]
fn trains_from_files_with_labels_from_file_names() {
	let dir = TempDir::new().unwrap();
	let paths = write_corpora(&dir);

	let model = LanguageModel::from_corpus_file(&paths[0]).unwrap();
	assert_eq!(model.label(), "english");
	assert_eq!(
		model.probabilities(),
		LanguageModel::train("english", ENGLISH.chars()).probabilities()
	);
}

#[test]
fn parallel_training_keeps_input_order() {
	let dir = TempDir::new().unwrap();
	let paths = write_corpora(&dir);

	for jobs in [0, 1, 2, 8] {
		let labels: Vec<String> = train_corpora(&paths, jobs)
			.unwrap()
			.iter()
			.map(|m| m.label().to_owned())
			.collect();
		assert_eq!(labels, ["english", "french", "german"]);
	}
}

#[test]
fn classifies_each_language() {
	let dir = TempDir::new().unwrap();
	let paths = write_corpora(&dir);
	let classifier = Classifier::from_corpora(&paths, 2).unwrap();

	assert_eq!(classifier.labels(), ["english", "french", "german"]);
	assert_eq!(classifier.classify("the weather is lovely with the sun").unwrap().most_likely(), "english");
	assert_eq!(classifier.classify("les enfants sont dans la maison").unwrap().most_likely(), "french");
	assert_eq!(classifier.classify("schnell springt der Hund").unwrap().most_likely(), "german");
}

#[test]
fn missing_corpus_aborts_the_run() {
	let dir = TempDir::new().unwrap();
	let mut paths = write_corpora(&dir);
	paths.insert(1, dir.path().join("klingon.txt"));

	match Classifier::from_corpora(&paths, 1) {
		Err(Error::Corpus { path, .. }) => assert!(path.ends_with("klingon.txt")),
		other => panic!("expected a corpus error, got {:?}", other),
	}
}

#[test]
fn latin1_corpus_still_trains() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("french.txt");
	// "le café est très bon" encoded as ISO-8859-1
	fs::write(&path, b"le caf\xe9 est tr\xe8s bon").unwrap();

	let model = LanguageModel::from_corpus_file(&path).unwrap();
	assert_eq!(model.label(), "french");
	assert_eq!(
		model.probabilities(),
		LanguageModel::train("french", "le caf est tr s bon".chars()).probabilities()
	);
}

#[test]
fn unreadable_corpus_is_fatal() {
	let dir = TempDir::new().unwrap();
	// a directory opens but cannot be read as a stream
	let path = dir.path().join("folder.txt");
	fs::create_dir(&path).unwrap();

	assert!(matches!(LanguageModel::from_corpus_file(&path), Err(Error::Corpus { .. })));
}

#[test]
fn corpus_without_letters_is_flat() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("digits.txt");
	fs::write(&path, "0123 4567 -- 89!").unwrap();

	let model = LanguageModel::from_corpus_file(&path).unwrap();
	assert!(model.probabilities().rows().flatten().all(|&p| p == SMOOTHING_FLOOR));
	let expected = SMOOTHING_FLOOR.powi(12);
	assert!((model.score("anything at all") - expected).abs() < expected * 1e-9);
}

#[test]
fn duplicate_labels_are_rejected() {
	let dir = TempDir::new().unwrap();
	let first = dir.path().join("english.txt");
	let second = dir.path().join("english.corpus.txt");
	fs::write(&first, ENGLISH).unwrap();
	fs::write(&second, ENGLISH).unwrap();

	assert!(matches!(
		Classifier::from_corpora(&[first, second], 0),
		Err(Error::DuplicateLabel(label)) if label == "english"
	));
}
