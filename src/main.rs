use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use narrator_backend::controllers::{
    documents::DocumentController, tts::TtsController, voices::VoiceController,
};
use narrator_backend::domain::document::DocumentService;
use narrator_backend::domain::session::SpeechSession;
use narrator_backend::domain::tts::SpeechService;
use narrator_backend::infrastructure::config::{Config, LogFormat, SpeechSecrets};
use narrator_backend::infrastructure::http::{create_router, start_http_server};
use narrator_backend::infrastructure::repositories::{AzureSpeechRepository, SpeechRepository};
use narrator_backend::infrastructure::storage::ArtifactStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Narrator Backend on {}:{}",
        config.host,
        config.port
    );

    log_runtime_diagnostics(&config);

    // Credentials must be valid before any remote call is made
    let secrets = match SpeechSecrets::load(&config.secrets_path) {
        Ok(secrets) => secrets,
        Err(e) => {
            tracing::error!(path = %config.secrets_path.display(), error = %e, "Failed to load speech secrets");
            return Err(e.into());
        }
    };
    tracing::info!(region = %secrets.region, "Speech secrets loaded");

    let speech_repo: Arc<dyn SpeechRepository> = Arc::new(AzureSpeechRepository::new(
        &secrets,
        config.speech_endpoint.clone(),
    )?);

    // One catalog fetch per process, shared read-only afterwards
    let session = Arc::new(SpeechSession::start(secrets, speech_repo.as_ref()).await?);

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    tracing::info!("Instantiating services...");
    let artifacts = ArtifactStore::new(config.output_dir.clone());
    let speech_service = Arc::new(SpeechService::new(
        session.clone(),
        speech_repo,
        artifacts,
        config.max_chunk_chars,
        config.pricing,
        config.gap_policy,
        config.preview_cache_enabled,
    ));
    let document_service = Arc::new(DocumentService::new());

    tracing::info!("Instantiating controllers...");
    let document_controller = Arc::new(DocumentController::new(document_service));
    let voice_controller = Arc::new(VoiceController::new(session.clone()));
    let tts_controller = Arc::new(TtsController::new(speech_service));

    let app = create_router(session, document_controller, voice_controller, tts_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn log_runtime_diagnostics(config: &Config) {
    let executable = std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|e| format!("unknown ({})", e));
    let working_dir = std::env::current_dir()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|e| format!("unknown ({})", e));

    tracing::info!(
        executable = %executable,
        working_dir = %working_dir,
        version = env!("CARGO_PKG_VERSION"),
        secrets_path = %config.secrets_path.display(),
        secrets_present = config.secrets_path.exists(),
        output_dir = %config.output_dir.display(),
        gap_policy = ?config.gap_policy,
        max_chunk_chars = config.max_chunk_chars,
        "Runtime diagnostics"
    );
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "narrator_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "narrator_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
