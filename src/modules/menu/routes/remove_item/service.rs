use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::remove(&ctx.menus, &payload.params.menu_type, &payload.params.id)
        .await
        .map(response::Success::Removed)
        .map_err(|err| match err {
            repository::Error::MenuTypeNotFound(menu_type) => {
                response::Error::MenuTypeNotFound(menu_type)
            }
            repository::Error::MenuItemNotFound(id) => response::Error::MenuItemNotFound(id),
        })
}
