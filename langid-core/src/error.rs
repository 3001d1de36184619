use std::io;
use std::path::PathBuf;

/// Result type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while training or classifying.
///
/// Corpus failures are fatal: no partial model is ever produced.
/// Sparse data is never an error (see the smoothing floor).
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A corpus could not be opened or read.
	#[error("failed to read corpus {}: {source}", .path.display())]
	Corpus {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// No label can be derived from the corpus path.
	#[error("cannot derive a label from path {}", .0.display())]
	InvalidPath(PathBuf),

	/// A model with this label is already loaded.
	#[error("model '{0}' already loaded")]
	DuplicateLabel(String),

	/// Classification requested without any model.
	#[error("no models available for classification")]
	NoModels,

	/// Other I/O errors (directory listing, reader failures).
	#[error("io error: {0}")]
	Io(#[from] io::Error),
}

impl Error {
	/// Wraps an I/O error raised while reading the corpus at `path`.
	pub fn corpus(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Corpus { path: path.into(), source }
	}
}
