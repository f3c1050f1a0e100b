use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::validation::{ValidatedPath, ValidatedQuery},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedPath(params): ValidatedPath<request::Params>,
    ValidatedQuery(query): ValidatedQuery<request::Query>,
) -> impl IntoResponse {
    service(ctx, request::Payload { params, query }).await
}
