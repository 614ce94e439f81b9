use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use bhasha::Resolver;
use bhasha_mt::{
    FallbackTranslator, JsonFileStore, LanguagePack, MachineTranslator, PackError, PackManager,
    PackManagerConfig, PackTranslation, RemoteTranslator, StorageSummary, TranslationSource,
};

const BIND_ENV: &str = "BHASHA_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:3000";
const STORE_ENV: &str = "BHASHA_STORE";
const DEFAULT_STORE: &str = "bhasha-store.json";
const LEXICONS_ENV: &str = "BHASHA_LEXICONS";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    pub target_lang: String,
    #[serde(default)]
    pub offline: bool,
}

fn default_source_lang() -> String {
    "en".to_string()
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub source: TranslationSource,
    pub confidence: Option<f32>,
}

#[derive(Serialize)]
pub struct InstallResponse {
    pub installed: bool,
}

#[derive(Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<FallbackTranslator>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let remote: Option<Arc<dyn MachineTranslator>> = match RemoteTranslator::from_env() {
        Ok(remote) => {
            info!("Remote translation endpoint: {}", remote.endpoint());
            Some(Arc::new(remote))
        }
        Err(e) => {
            info!("Remote tier disabled: {}", e);
            None
        }
    };

    let store_path = std::env::var(STORE_ENV).unwrap_or_else(|_| DEFAULT_STORE.to_string());
    let store = Arc::new(JsonFileStore::open(store_path));
    let packs = Arc::new(PackManager::new(store, PackManagerConfig::default()));
    let resolver = match std::env::var(LEXICONS_ENV) {
        Ok(dir) => {
            info!("Merging lexicons from {}", dir);
            Resolver::builtin_with_dir(std::path::Path::new(&dir))?
        }
        Err(_) => Resolver::builtin(),
    };
    let state = AppState {
        translator: Arc::new(FallbackTranslator::new(remote, packs, Arc::new(resolver))),
    };

    info!("Starting bhasha translation server");

    let app = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let bind = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Server running at http://{}", bind);

    axum::serve(listener, app).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate))
        .route("/api/offline/translate", post(translate_offline))
        .route("/api/pairs", get(list_pairs))
        .route("/api/packs", get(list_packs))
        .route("/api/packs/{lang}", post(install_pack).delete(remove_pack))
        .route("/api/storage", get(storage_summary))
        .with_state(state)
}

fn pack_error(e: PackError) -> ApiError {
    let status = match e {
        PackError::PackNotFound(_) => StatusCode::NOT_FOUND,
        PackError::PackNotInstalled(_) => StatusCode::CONFLICT,
        PackError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    info!(
        "Translating {} chars {} → {} (offline: {})",
        request.text.chars().count(),
        &request.source_lang,
        &request.target_lang,
        request.offline
    );

    let outcome = state
        .translator
        .translate(
            &request.text,
            &request.source_lang,
            &request.target_lang,
            request.offline,
        )
        .await;

    debug!(source = ?outcome.source, "translation served");
    Json(TranslateResponse {
        translation: outcome.text,
        source: outcome.source,
        confidence: outcome.confidence,
    })
}

async fn translate_offline(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<PackTranslation>, ApiError> {
    state
        .translator
        .packs()
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .map(Json)
        .map_err(pack_error)
}

async fn list_pairs(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .translator
            .resolver()
            .supported_pairs()
            .iter()
            .map(|pair| pair.key())
            .collect(),
    )
}

async fn list_packs(State(state): State<AppState>) -> Json<Vec<LanguagePack>> {
    Json(state.translator.packs().list_packs())
}

async fn install_pack(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<InstallResponse>, ApiError> {
    let installed = state
        .translator
        .packs()
        .install_pack(&lang, |progress| {
            debug!(pack = %lang, progress, "install progress");
            ControlFlow::Continue(())
        })
        .await
        .map_err(pack_error)?;
    Ok(Json(InstallResponse { installed }))
}

async fn remove_pack(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<RemoveResponse>, ApiError> {
    let removed = state
        .translator
        .packs()
        .remove_pack(&lang)
        .map_err(pack_error)?;
    Ok(Json(RemoveResponse { removed }))
}

async fn storage_summary(State(state): State<AppState>) -> Json<StorageSummary> {
    Json(state.translator.packs().storage_summary())
}
