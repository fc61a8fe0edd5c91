use anyhow::Result;
use axum::Router;
use narrator_backend::{
    controllers::{documents::DocumentController, tts::TtsController, voices::VoiceController},
    domain::{
        document::DocumentService,
        session::SpeechSession,
        tts::{GapPolicy, Pricing, SpeechService},
    },
    infrastructure::{config::SpeechSecrets, http::create_router, storage::ArtifactStore},
};
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod fixtures;

use api_client::TestClient;
use fixtures::FakeSpeechRepository;

/// Small enough that a couple of sentences span several chunks
pub const TEST_MAX_CHUNK_CHARS: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct TestOptions {
    pub gap_policy: GapPolicy,
    pub preview_cache_enabled: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            gap_policy: GapPolicy::Skip,
            preview_cache_enabled: false,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub speech_repo: Arc<FakeSpeechRepository>,
    pub output_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Self::with_options(TestOptions::default()).await
    }

    pub async fn with_options(options: TestOptions) -> Result<Self> {
        let output_dir = tempfile::tempdir()?;
        let speech_repo = Arc::new(FakeSpeechRepository::new());

        let app = create_app_with_fake_provider(&options, speech_repo.clone(), &output_dir).await?;

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            speech_repo,
            output_dir,
        })
    }

    /// Files under one conversion's artifact directory
    pub fn artifact_files(&self, conversion_id: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir.path().join(conversion_id))
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::new()
                .await
                .expect("Failed to create test context")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Artifacts go away with the TempDir
        }
    }
}

async fn create_app_with_fake_provider(
    options: &TestOptions,
    speech_repo: Arc<FakeSpeechRepository>,
    output_dir: &TempDir,
) -> Result<Router> {
    let secrets = SpeechSecrets {
        api_key: "test-key".to_string(),
        region: "westeurope".to_string(),
    };
    let session = Arc::new(
        SpeechSession::start(secrets, speech_repo.as_ref()).await?,
    );

    let speech_service = Arc::new(SpeechService::new(
        session.clone(),
        speech_repo,
        ArtifactStore::new(output_dir.path()),
        TEST_MAX_CHUNK_CHARS,
        Pricing::default(),
        options.gap_policy,
        options.preview_cache_enabled,
    ));
    let document_service = Arc::new(DocumentService::new());

    let document_controller = Arc::new(DocumentController::new(document_service));
    let voice_controller = Arc::new(VoiceController::new(session.clone()));
    let tts_controller = Arc::new(TtsController::new(speech_service));

    Ok(create_router(
        session,
        document_controller,
        voice_controller,
        tts_controller,
    ))
}
