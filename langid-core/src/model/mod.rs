//! Letter-transition language models and classification.
//!
//! This module provides:
//! - Transition counting over a character stream (`TransitionCounter`)
//! - Smoothed transition tables (`TransitionProbabilities`)
//! - Per-label models that score texts (`LanguageModel`)
//! - Multi-model ranking (`Classifier`, `ScoreReport`)
//! - Parallel training of several corpora (`train_corpora`)

/// Letter-pair counts and the counter that accumulates them.
pub mod transition_counts;

/// Smoothed `P(next | previous)` table and its diagnostic grid.
pub mod transition_probabilities;

/// Trained model for one label.
///
/// Handles training from characters, readers and files,
/// and scoring of arbitrary strings.
pub mod language_model;

/// Ranking of labels over a collection of models.
pub mod classifier;

/// Per-request classification result.
pub mod score_report;

/// Multi-threaded training of several corpus files.
pub mod trainer;

pub use classifier::Classifier;
pub use language_model::LanguageModel;
pub use score_report::{LabelScore, ScoreReport};
pub use trainer::train_corpora;
pub use transition_counts::{TransitionCounter, TransitionCounts};
pub use transition_probabilities::{TransitionProbabilities, SMOOTHING_FLOOR};
