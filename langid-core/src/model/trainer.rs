use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use log::info;

use super::language_model::LanguageModel;
use crate::error::{Error, Result};

/// Trains one `LanguageModel` per corpus file on a pool of threads.
///
/// # Parameters
/// - `paths`: corpus files, the label of each model is derived from its file name.
/// - `jobs`: number of worker threads, `0` for one per CPU.
///
/// # Returns
/// - `Ok(Vec<LanguageModel>)`: the models, in the order of `paths`.
/// - `Err(...)`: the first corpus failure received; no model is returned.
///
/// # Behavior
/// - Splits the paths into at most `jobs` chunks.
/// - Spawns one thread per chunk, each training its corpora sequentially.
/// - Collects models through an MPSC channel, tagged by input position.
///
/// # Notes
/// - Models share nothing; workers only share the channel and a stop flag.
/// - The first failure raises the stop flag: no worker starts another corpus.
/// - All workers are joined before returning, on success and on failure.
pub fn train_corpora<P: AsRef<Path>>(paths: &[P], jobs: usize) -> Result<Vec<LanguageModel>> {
	if paths.is_empty() {
		return Ok(Vec::new());
	}

	let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
	let workers = jobs.clamp(1, paths.len());
	let chunk_size = paths.len().div_ceil(workers);
	info!("Training {} corpora on {} threads", paths.len(), workers);

	let indexed: Vec<(usize, PathBuf)> = paths
		.iter()
		.enumerate()
		.map(|(index, path)| (index, path.as_ref().to_path_buf()))
		.collect();

	let stop = Arc::new(AtomicBool::new(false));
	let (tx, rx) = mpsc::channel();
	let mut handles = Vec::new();
	for chunk in indexed.chunks(chunk_size) {
		let tx = tx.clone();
		let stop = Arc::clone(&stop);
		let chunk = chunk.to_vec();
		handles.push(thread::spawn(move || train_chunk(chunk, &tx, &stop)));
	}
	drop(tx);

	// Ends once every worker has dropped its sender
	let mut models: Vec<Option<LanguageModel>> = vec![None; paths.len()];
	let mut failure = None;
	for (index, result) in rx.iter() {
		match result {
			Ok(model) => models[index] = Some(model),
			Err(e) => {
				failure.get_or_insert(e);
			}
		}
	}
	for handle in handles {
		// A panicked worker leaves its slots empty, reported below
		let _ = handle.join();
	}

	if let Some(e) = failure {
		return Err(e);
	}
	models
		.into_iter()
		.collect::<Option<Vec<_>>>()
		.ok_or_else(|| Error::Io(io::Error::other("a training worker stopped before finishing")))
}

/// Trains the corpora of one chunk in order, sending each result.
///
/// Stops before the next corpus once `stop` is raised, and raises it on failure.
fn train_chunk(chunk: Vec<(usize, PathBuf)>, tx: &Sender<(usize, Result<LanguageModel>)>, stop: &AtomicBool) {
	for (index, path) in chunk {
		if stop.load(Ordering::Relaxed) {
			break;
		}
		let result = LanguageModel::from_corpus_file(&path);
		if result.is_err() {
			stop.store(true, Ordering::Relaxed);
		}
		if tx.send((index, result)).is_err() {
			break;
		}
	}
}
