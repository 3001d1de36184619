use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info, warn};
use serde::Deserialize;

use langid_core::io::{corpus_paths, list_files, normalize_folder};
use langid_core::{Classifier, Error};

/// HTTP server classifying texts against the corpora of a data directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "langid-server", version)]
struct Config {
	/// Address to bind
	#[arg(long, env = "LANGID_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, env = "LANGID_PORT", default_value_t = 5000)]
	port: u16,

	/// Folder holding one corpus file per label
	#[arg(long, env = "LANGID_DATA_DIR", default_value = "./data")]
	data_dir: String,

	/// Extension of corpus files
	#[arg(long, env = "LANGID_EXTENSION", default_value = "txt")]
	extension: String,

	/// Number of training threads (0 = one per CPU)
	#[arg(short, long, env = "LANGID_JOBS", default_value_t = 0)]
	jobs: usize,
}

impl Config {
	fn data_dir(&self) -> PathBuf {
		normalize_folder(&self.data_dir)
	}

	/// Path of the corpus named `name` inside the data directory.
	///
	/// Returns `None` unless `name` is a single plain file name, so a
	/// request cannot reach files outside the data directory.
	fn corpus_path(&self, name: &str) -> Option<PathBuf> {
		let file_name = format!("{}.{}", name, self.extension);
		let mut components = Path::new(&file_name).components();
		match (components.next(), components.next()) {
			(Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) && name != ".." => {
				Some(self.data_dir().join(file_name))
			}
			_ => None,
		}
	}
}

/// Query parameters of `/v1/classify`
#[derive(Deserialize)]
struct ClassifyParams {
	text: Option<String>,
}

#[derive(Deserialize)]
struct ModelQuery {
	names: Option<String>,
}

struct SharedData {
	classifier: Classifier,
}

/// HTTP GET endpoint `/v1/classify`
///
/// Scores `text` against every loaded model.
/// Returns the score report as JSON.
#[get("/v1/classify")]
async fn get_classify(data: web::Data<Mutex<SharedData>>, query: web::Query<ClassifyParams>) -> impl Responder {
	let text = match &query.text {
		Some(text) => text,
		None => return HttpResponse::BadRequest().body("Missing text"),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match shared_data.classifier.classify(text) {
		Ok(report) => HttpResponse::Ok().json(report),
		Err(Error::NoModels) => HttpResponse::Conflict().body("No models loaded"),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

#[get("/v1/models")]
async fn get_models(config: web::Data<Config>) -> impl Responder {
	let suffix = format!(".{}", config.extension);
	match list_files(config.data_dir(), &config.extension) {
		Ok(files) => {
			let names: Vec<&str> = files.iter().filter_map(|f| f.strip_suffix(&suffix)).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list models"),
	}
}

#[get("/v1/loaded_models")]
async fn get_loaded_models(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.classifier.labels().join("\n"))
}

#[get("/v1/models/{label}/matrix")]
async fn get_matrix(data: web::Data<Mutex<SharedData>>, label: web::Path<String>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match shared_data.classifier.model(&label) {
		Some(model) => HttpResponse::Ok().body(model.to_string()),
		None => HttpResponse::NotFound().body(format!("Model {} not loaded", label)),
	}
}

/// HTTP PUT endpoint `/v1/load_models`
///
/// Retrains the classifier from `<data_dir>/<name>.<extension>` for each
/// comma-separated name. Names must be plain file names (no separators
/// or `..`). The previous classifier is kept if training fails.
#[put("/v1/load_models")]
async fn put_model(
	data: web::Data<Mutex<SharedData>>,
	config: web::Data<Config>,
	query: web::Query<ModelQuery>,
) -> impl Responder {
	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty model name"),
	};

	let paths: Option<Vec<PathBuf>> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.map(|name| config.corpus_path(name))
		.collect();
	let paths = match paths {
		Some(paths) => paths,
		None => return HttpResponse::BadRequest().body("Invalid model name"),
	};

	let jobs = config.jobs;
	let trained = web::block(move || Classifier::from_corpora(&paths, jobs)).await;
	let classifier = match trained {
		Ok(Ok(classifier)) => classifier,
		Ok(Err(e)) => {
			error!("Failed to load models: {}", e);
			return HttpResponse::InternalServerError().body(format!("Failed to load models: {e}"));
		}
		Err(_) => return HttpResponse::InternalServerError().body("Training task failed"),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.classifier = classifier;
	info!("Loaded models: {}", shared_data.classifier.labels().join(", "));

	HttpResponse::Ok().body("Models loaded successfully")
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_classify)
		.service(get_models)
		.service(get_loaded_models)
		.service(get_matrix)
		.service(put_model);
}

/// Trains every corpus of the data directory.
///
/// A missing directory yields an empty classifier.
fn load_data_dir(config: &Config) -> langid_core::Result<Classifier> {
	let folder = config.data_dir();
	if !folder.is_dir() {
		warn!("Data directory {} not found, starting without models", folder.display());
		return Ok(Classifier::new());
	}
	let paths = corpus_paths(&folder, &config.extension)?;
	Classifier::from_corpora(&paths, config.jobs)
}

/// Main entry point for the server.
///
/// Trains the corpora of the data directory, wraps the classifier in a
/// `Mutex` and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let classifier = load_data_dir(&config).map_err(io::Error::other)?;
	info!("Loaded {} models", classifier.len());

	let shared_data = web::Data::new(Mutex::new(SharedData { classifier }));
	let bind = (config.host.clone(), config.port);
	let config = web::Data::new(config);

	info!("Listening on {}:{}", bind.0, bind.1);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.app_data(config.clone())
			.configure(configure)
	})
		.bind(bind)?
		.run()
		.await
}
