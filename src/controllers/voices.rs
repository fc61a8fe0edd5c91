use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    domain::{
        session::SpeechSession,
        voice::{group_by_language_and_type, LanguageGroup, VoicesByType, DEFAULT_LANGUAGE_GROUPS},
    },
    error::{AppError, AppResult},
};

/// Query for GET /api/voices
#[derive(Debug, Default, Deserialize)]
pub struct VoiceQuery {
    /// Restrict to one offered group, e.g. "English"
    pub language: Option<String>,
    /// Skip the allow-list and group every locale
    #[serde(default)]
    pub all: bool,
}

/// Response for GET /api/voices
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub total: usize,
    pub languages: BTreeMap<String, VoicesByType>,
}

pub struct VoiceController {
    session: Arc<SpeechSession>,
}

impl VoiceController {
    pub fn new(session: Arc<SpeechSession>) -> Self {
        Self { session }
    }

    /// GET /api/voices - Session voice catalog grouped by language and type
    pub async fn list_voices(
        State(controller): State<Arc<VoiceController>>,
        Query(query): Query<VoiceQuery>,
    ) -> AppResult<Json<VoicesResponse>> {
        let selected;
        let allow_list: Option<&[LanguageGroup]> = match (&query.language, query.all) {
            (Some(label), _) => {
                let group = LanguageGroup::from_label(label)
                    .ok_or_else(|| AppError::BadRequest(format!("Unsupported language: {}", label)))?;
                selected = [group];
                Some(&selected[..])
            }
            (None, true) => None,
            (None, false) => Some(DEFAULT_LANGUAGE_GROUPS),
        };

        let languages =
            group_by_language_and_type(controller.session.catalog().voices(), allow_list);
        let total = languages
            .values()
            .map(|by_type| by_type.neural.len() + by_type.standard.len())
            .sum();

        Ok(Json(VoicesResponse { total, languages }))
    }
}
