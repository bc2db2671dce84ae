use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use rs_namegen_core::io::list_files;
use rs_namegen_core::model::corpus::CorpusStats;
use rs_namegen_core::model::frequency_model::FrequencyModel;
use rs_namegen_core::model::generator::NameGenerator;

/// Upper bound on the number of names returned by one request.
const MAX_BATCH: usize = 1000;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	seed: Option<u64>, // seeded batches are reproducible
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	stats: CorpusStats,
	generator: Option<NameGenerator>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` names (default 1) from the loaded corpora.
/// An optional `seed` makes the whole batch reproducible.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count == 0 || count > MAX_BATCH {
		return HttpResponse::BadRequest().body(format!("count must be between 1 and {MAX_BATCH}"));
	}

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let generator = match &shared_data.generator {
		Some(g) => g,
		None => {
			warn!("generation requested before any corpus was loaded");
			return HttpResponse::InternalServerError().body("No corpus loaded");
		}
	};

	let names: Vec<String> = match query.seed {
		Some(seed) => {
			let mut rng = StdRng::seed_from_u64(seed);
			(0..count).map(|_| generator.generate_with(&mut rng)).collect()
		}
		None => (0..count).map(|_| generator.generate()).collect(),
	};

	HttpResponse::Ok().body(names.join("\n"))
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files("./data", "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.stats.corpus_names().join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Rebuilds the model from the named corpus files under `./data`
/// (comma-separated `names` query parameter). Statistics of all named
/// corpora are merged before one model is trained from them.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut stats = CorpusStats::new();
	for name in corpus_names {
		let corpus_path = format!("./data/{}.txt", name);
		let partial_stats = match CorpusStats::from_file(&corpus_path) {
			Ok(s) => s,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
		};
		stats.merge(&partial_stats);
	}

	let model = match FrequencyModel::from_stats(&stats) {
		Ok(m) => m,
		Err(e) => return HttpResponse::BadRequest().body(format!("Corpus cannot train a model: {e}")),
	};

	info!(
		"loaded corpora: {} ({} names, {} distinct syllables)",
		stats.corpus_names().join(", "),
		stats.name_count(),
		model.syllable_probabilities().len()
	);

	shared_data.stats = stats;
	shared_data.generator = Some(NameGenerator::from_model(model));

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server with the generation and corpus
/// management endpoints. The corpus statistics and the active generator
/// are wrapped in a `Mutex` so `load_corpora` can swap them out.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Corpora are looked up under `./data` (one name per line, `.txt`).
/// - CORS is permissive so browser clients can call the API directly.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		stats: CorpusStats::new(),
		generator: None,
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	info!("listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
