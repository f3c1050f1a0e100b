use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::validation::{ValidatedJson, ValidatedPath},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedPath(params): ValidatedPath<request::Params>,
    ValidatedJson(body): ValidatedJson<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { params, body }).await
}
