use std::path::Path;

use log::{debug, warn};

use super::language_model::LanguageModel;
use super::score_report::{LabelScore, ScoreReport};
use super::trainer::train_corpora;
use crate::error::{Error, Result};

/// Ranks labels for a text by comparing several `LanguageModel`s.
///
/// # Responsibilities
/// - Own a list of trained models with unique labels
/// - Score a text against every model
/// - Normalize the scores into a distribution over labels
///
/// Model order is insertion order; it decides ties.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
	models: Vec<LanguageModel>,
}

impl Classifier {
	/// Creates a classifier without any model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a classifier from already trained models.
	///
	/// # Errors
	/// Returns `Error::DuplicateLabel` if two models share a label.
	pub fn with_models<I>(models: I) -> Result<Self>
	where
		I: IntoIterator<Item = LanguageModel>,
	{
		let mut classifier = Self::new();
		for model in models {
			classifier.add_model(model)?;
		}
		Ok(classifier)
	}

	/// Trains one model per corpus file (on up to `jobs` threads, `0` for
	/// one per CPU) and collects them in path order.
	///
	/// # Errors
	/// Fails on the first corpus that cannot be read, or on duplicate labels.
	pub fn from_corpora<P: AsRef<Path>>(paths: &[P], jobs: usize) -> Result<Self> {
		Self::with_models(train_corpora(paths, jobs)?)
	}

	/// Adds a trained model.
	///
	/// # Errors
	/// Returns `Error::DuplicateLabel` if the label is already loaded.
	pub fn add_model(&mut self, model: LanguageModel) -> Result<()> {
		if self.model(model.label()).is_some() {
			return Err(Error::DuplicateLabel(model.label().to_owned()));
		}
		self.models.push(model);
		Ok(())
	}

	/// Returns the model with the given label.
	pub fn model(&self, label: &str) -> Option<&LanguageModel> {
		self.models.iter().find(|m| m.label() == label)
	}

	/// Returns the loaded models in order.
	pub fn models(&self) -> &[LanguageModel] {
		&self.models
	}

	/// Returns the labels in model order.
	pub fn labels(&self) -> Vec<&str> {
		self.models.iter().map(LanguageModel::label).collect()
	}

	pub fn len(&self) -> usize {
		self.models.len()
	}

	pub fn is_empty(&self) -> bool {
		self.models.is_empty()
	}

	/// Scores `text` against every model and normalizes the scores.
	///
	/// The normalized probability of a label is its raw score divided by
	/// the sum of all raw scores. It is computed from log scores so that
	/// long texts, whose raw scores underflow to zero, still rank.
	///
	/// # Errors
	/// Returns `Error::NoModels` if the classifier is empty.
	pub fn classify(&self, text: &str) -> Result<ScoreReport> {
		if self.models.is_empty() {
			return Err(Error::NoModels);
		}

		let log_scores: Vec<f64> = self.models.iter().map(|m| m.log_score(text)).collect();
		let probabilities = normalize_log_scores(&log_scores);

		let entries = self
			.models
			.iter()
			.zip(probabilities)
			.map(|(model, probability)| {
				let score = model.score(text);
				debug!("{}: score={} probability={}", model.label(), score, probability);
				LabelScore { label: model.label().to_owned(), score, probability }
			})
			.collect();

		Ok(ScoreReport::new(entries))
	}
}

/// Turns log scores into a distribution (log-sum-exp).
///
/// Falls back to a uniform distribution if no score is finite.
fn normalize_log_scores(log_scores: &[f64]) -> Vec<f64> {
	let max = log_scores
		.iter()
		.copied()
		.filter(|s| s.is_finite())
		.fold(f64::NEG_INFINITY, f64::max);

	if !max.is_finite() {
		warn!("Degenerate scores, falling back to a uniform distribution");
		let uniform = 1.0 / log_scores.len() as f64;
		return vec![uniform; log_scores.len()];
	}

	let weights: Vec<f64> = log_scores
		.iter()
		.map(|s| if s.is_finite() { (s - max).exp() } else { 0.0 })
		.collect();
	let sum: f64 = weights.iter().sum();
	weights.into_iter().map(|w| w / sum).collect()
}
