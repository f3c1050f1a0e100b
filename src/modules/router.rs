use super::{menu, utility};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/menus", menu::routes::get_router())
        .merge(utility::routes::get_router())
}
