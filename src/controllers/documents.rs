use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::document::{DocumentService, ExtractedDocument},
    error::{AppError, AppResult},
};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

pub struct DocumentController {
    document_service: Arc<DocumentService>,
}

impl DocumentController {
    pub fn new(document_service: Arc<DocumentService>) -> Self {
        Self { document_service }
    }

    /// POST /api/documents/extract - Pull the text out of an uploaded .txt or .pdf
    pub async fn extract(
        State(controller): State<Arc<DocumentController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<ExtractedDocument>> {
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;

            // PDF parsing is CPU bound
            let service = controller.document_service.clone();
            let document = tokio::task::spawn_blocking(move || {
                service.extract(&bytes, content_type.as_deref(), file_name.as_deref())
            })
            .await
            .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

            tracing::info!(
                kind = ?document.kind,
                characters = document.characters,
                suggested_language = ?document.suggested_language,
                "Document text extracted"
            );

            return Ok(Json(document));
        }

        Err(AppError::BadRequest(format!(
            "Missing multipart field '{}'",
            UPLOAD_FIELD
        )))
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
