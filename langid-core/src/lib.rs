//! Letter-bigram language identification library.
//!
//! This crate classifies a text by language (or source) using one
//! first-order Markov model per label:
//! - Case-insensitive 26-letter alphabet mapping
//! - Transition counting over a corpus, skipping non-letter runs
//! - Smoothed transition tables with a fixed probability floor
//! - Scoring and normalized ranking of a text against several models
//!
//! Training reads each corpus once; trained models are immutable.

/// Alphabet helper (letter ↔ index).
pub mod alphabet;

/// Error type shared by the crate.
pub mod error;

/// Corpus path helpers (labels, directory listing).
pub mod io;

/// Models, training and classification.
pub mod model;

pub use error::{Error, Result};
pub use model::{Classifier, LanguageModel, ScoreReport};
