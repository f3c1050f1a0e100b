use crate::{types::Context, utils::validation::ValidatedJson};
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingStatus {
    pub date_time: i64,
    pub status: String,
}

async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "data": PingStatus {
                date_time: Utc::now().timestamp(),
                status: String::from("OK"),
            }
        })),
    )
}

#[derive(Deserialize, Validate)]
pub struct EchoPayload {
    #[validate(length(min = 1, max = 50, message = "Text must be between 1 and 50 characters"))]
    pub text: String,
}

async fn echo(ValidatedJson(payload): ValidatedJson<EchoPayload>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "echo": payload.text })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/ping", get(ping))
        .route("/echo", post(echo))
}
