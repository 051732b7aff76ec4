use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::state::AppState;
use crate::translate::TranslateRequest;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the AI-API"
    }))
}

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> ApiResult {
    let request = match payload {
        Ok(Json(request)) if request.is_complete() => request,
        Ok(_) => {
            debug!("Rejected translate request with empty fields");
            return Err(invalid_request());
        }
        Err(rejection) => {
            debug!("Rejected translate request: {}", rejection.body_text());
            return Err(invalid_request());
        }
    };

    match state
        .translator
        .translate(&request.text, &request.from_language, &request.to_language)
        .await
    {
        Ok(result) => Ok(Json(json!({ "result": result }))),
        Err(e) => {
            error!(kind = e.kind(), "Translation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Translation failed",
                    "details": e.to_string()
                })),
            ))
        }
    }
}

pub async fn languages(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "languages": state.translator.supported_languages(),
        "supported_languages": "List of supported languages"
    }))
}

fn invalid_request() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Invalid request data"})),
    )
}
