use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        ConvertRequest, CostEstimate, PreviewRequest, SpeechService, SpeechServiceApi,
        OUTPUT_ARTIFACT, PREVIEW_ARTIFACT,
    },
    error::{AppError, AppResult},
    infrastructure::http::RequestId,
};

/// Largest text accepted by estimate and convert
pub const MAX_TEXT_CHARS: usize = 1_000_000;

pub const X_CONVERSION_ID: &str = "x-conversion-id";
pub const X_CHUNK_COUNT: &str = "x-chunk-count";
pub const X_CHARACTER_COUNT: &str = "x-character-count";
pub const X_ESTIMATED_COST: &str = "x-estimated-cost";
pub const X_MISSING_CHUNKS: &str = "x-missing-chunks";

pub struct TtsController {
    speech_service: Arc<SpeechService>,
}

impl TtsController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/tts/estimate - Price a conversion without calling the provider
    pub async fn estimate(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<ConvertRequest>, JsonRejection>,
    ) -> AppResult<Json<CostEstimate>> {
        let Json(request) = payload?;
        validate_text(&request.text)?;

        let estimate = controller
            .speech_service
            .estimate(&request.text, &request.voice)?;

        Ok(Json(estimate))
    }

    /// POST /api/tts/convert - Convert text to one MP3 download
    pub async fn convert(
        State(controller): State<Arc<TtsController>>,
        Extension(RequestId(request_id)): Extension<RequestId>,
        payload: Result<Json<ConvertRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;
        validate_text(&request.text)?;

        tracing::info!(
            request_id = %request_id,
            voice = %request.voice,
            "Conversion requested"
        );

        let result = controller
            .speech_service
            .convert(&request.text, &request.voice)
            .await?;

        if !result.is_complete() {
            tracing::warn!(
                conversion_id = %result.request_id,
                missing = result.gaps.len(),
                chunk_count = result.chunk_count,
                "Conversion finished with missing chunks"
            );
        }

        let mut headers = audio_headers(&format!("attachment; filename=\"{}\"", OUTPUT_ARTIFACT))?;
        insert_header(&mut headers, X_CONVERSION_ID, &result.request_id.to_string())?;
        insert_header(&mut headers, X_CHUNK_COUNT, &result.chunk_count.to_string())?;
        insert_header(
            &mut headers,
            X_CHARACTER_COUNT,
            &result.estimate.characters.to_string(),
        )?;
        insert_header(&mut headers, X_ESTIMATED_COST, &result.estimate.cost.to_string())?;

        if !result.gaps.is_empty() {
            let missing = result
                .gaps
                .iter()
                .map(|gap| gap.index.to_string())
                .collect::<Vec<_>>()
                .join(",");
            insert_header(&mut headers, X_MISSING_CHUNKS, &missing)?;
        }

        Ok((StatusCode::OK, headers, Body::from(result.audio)))
    }

    /// POST /api/tts/preview - Short greeting in the chosen voice
    pub async fn preview(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<PreviewRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;
        let audio = controller.speech_service.preview(&request.voice).await?;
        let headers = audio_headers(&format!("inline; filename=\"{}\"", PREVIEW_ARTIFACT))?;

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }
}

fn validate_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::PayloadTooLarge(
            "Text must be 1,000,000 characters or less".to_string(),
        ));
    }

    Ok(())
}

fn audio_headers(disposition: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(disposition).map_err(|e| AppError::Internal(e.to_string()))?,
    );
    Ok(headers)
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> AppResult<()> {
    let value = HeaderValue::from_str(value).map_err(|e| AppError::Internal(e.to_string()))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}
