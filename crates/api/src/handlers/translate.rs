//! Handlers for the `/translate` routes.
//!
//! Translation never hard-fails on content: the pipeline falls back to the
//! original text sentence-by-sentence, so these endpoints return 200 with
//! partially translated output when the endpoint is flaky. Only malformed
//! requests (bad language codes) and the `languages` passthrough surface
//! errors.

use axum::extract::State;
use axum::Json;
use rentora_core::validate::validate_language_code;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request payload for plain-text translation.
#[derive(Debug, Deserialize)]
pub struct TranslateTextRequest {
    pub text: String,
    /// Source language code (`en`, `pt-BR`, ...).
    pub source: String,
    /// Target language code.
    pub target: String,
}

/// Request payload for HTML translation.
#[derive(Debug, Deserialize)]
pub struct TranslateHtmlRequest {
    pub html: String,
    pub source: String,
    pub target: String,
}

/// Translated plain text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedText {
    pub translated_text: String,
}

/// Translated HTML fragment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedHtml {
    pub translated_html: String,
}

/// POST /api/translate/text
pub async fn translate_text(
    State(state): State<AppState>,
    Json(payload): Json<TranslateTextRequest>,
) -> AppResult<Json<DataResponse<TranslatedText>>> {
    validate_language_code(&payload.source)?;
    validate_language_code(&payload.target)?;

    let translated_text = state
        .translator
        .translate_text(&payload.text, &payload.source, &payload.target)
        .await;

    Ok(Json(DataResponse {
        data: TranslatedText { translated_text },
    }))
}

/// POST /api/translate/html
pub async fn translate_html(
    State(state): State<AppState>,
    Json(payload): Json<TranslateHtmlRequest>,
) -> AppResult<Json<DataResponse<TranslatedHtml>>> {
    validate_language_code(&payload.source)?;
    validate_language_code(&payload.target)?;

    let translated_html = state
        .translator
        .translate_html(&payload.html, &payload.source, &payload.target)
        .await;

    Ok(Json(DataResponse {
        data: TranslatedHtml { translated_html },
    }))
}

/// GET /api/translate/languages
///
/// Passes the endpoint's language list through verbatim.
pub async fn languages(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let languages = state.translator.languages().await?;
    Ok(Json(languages))
}
