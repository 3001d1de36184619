use serde::Serialize;

/// Score of one label for a classified text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelScore {
	/// Model label.
	pub label: String,
	/// Raw (unnormalized) score, see `LanguageModel::score`.
	pub score: f64,
	/// Normalized probability over all labels of the classifier.
	pub probability: f64,
}

/// Result of one classification request.
///
/// # Invariants
/// - `entries` keeps the classifier's model order and is never empty
/// - Probabilities sum to 1.0 (within floating-point tolerance)
/// - `most_likely` is the first label holding the highest probability
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreReport {
	entries: Vec<LabelScore>,
	most_likely: String,
}

impl ScoreReport {
	/// Builds a report from non-empty entries.
	pub(crate) fn new(entries: Vec<LabelScore>) -> Self {
		let mut best: Option<&LabelScore> = None;
		for entry in &entries {
			// Strict comparison keeps the first label on ties
			if best.is_none_or(|b| entry.probability > b.probability) {
				best = Some(entry);
			}
		}
		let most_likely = best.map(|b| b.label.clone()).unwrap_or_default();
		Self { entries, most_likely }
	}

	/// Label with the highest probability.
	pub fn most_likely(&self) -> &str {
		&self.most_likely
	}

	/// Scores in model order.
	pub fn entries(&self) -> &[LabelScore] {
		&self.entries
	}

	/// Normalized probability of `label`, if the classifier knows it.
	pub fn probability_of(&self, label: &str) -> Option<f64> {
		self.entries.iter().find(|e| e.label == label).map(|e| e.probability)
	}

	/// Scores sorted by descending probability (ties keep model order).
	pub fn ranked(&self) -> Vec<&LabelScore> {
		let mut ranked: Vec<&LabelScore> = self.entries.iter().collect();
		ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
		ranked
	}
}
