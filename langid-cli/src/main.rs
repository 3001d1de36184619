use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info};
use langid_core::model::{Classifier, LabelScore, ScoreReport};

/// Guess the language of a text from letter-transition statistics.
///
/// Each corpus file trains one model, labelled by its file name up to the
/// first '.', ex. `data/english.txt` trains `english`.
#[derive(Parser, Debug)]
#[command(name = "langid", version)]
struct Args {
	/// Corpus files followed by the text to classify (last argument).
	/// Options go before the corpus files; everything after the first
	/// corpus is taken as is, so the text may start with '-'.
	#[arg(required = true, num_args = 2.., trailing_var_arg = true, value_name = "CORPUS... TEXT")]
	inputs: Vec<String>,

	/// Number of training threads (0 = one per CPU)
	#[arg(short, long, env = "LANGID_JOBS", default_value_t = 0)]
	jobs: usize,

	/// Print the transition matrix of every model
	#[arg(long)]
	matrix: bool,

	/// List labels by descending probability instead of corpus order
	#[arg(long)]
	ranked: bool,
}

impl Args {
	/// Splits the positional inputs into corpus paths and the query text.
	fn split_inputs(&self) -> Result<(Vec<PathBuf>, &str)> {
		match self.inputs.split_last() {
			Some((text, corpora)) if !corpora.is_empty() => {
				Ok((corpora.iter().map(PathBuf::from).collect(), text.as_str()))
			}
			_ => bail!("expected at least one corpus file and a text"),
		}
	}
}

fn print_report(text: &str, report: &ScoreReport, ranked: bool) {
	println!("Analyzing: {}", text);
	let entries: Vec<&LabelScore> = if ranked {
		report.ranked()
	} else {
		report.entries().iter().collect()
	};
	for entry in entries {
		println!("Probability that test string is {:>8}: {:.2}", entry.label, entry.probability);
	}
	println!("Test string is most likely {}.", report.most_likely());
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let (corpora, text) = args.split_inputs()?;

	let classifier = Classifier::from_corpora(&corpora, args.jobs)?;
	info!("Loaded {} models: {}", classifier.len(), classifier.labels().join(", "));

	if args.matrix {
		for model in classifier.models() {
			println!("{}:\n{}", model.label(), model);
		}
	}

	let report = classifier.classify(text)?;
	debug!("Most likely label: {}", report.most_likely());
	print_report(text, &report, args.ranked);

	Ok(())
}
