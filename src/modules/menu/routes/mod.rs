mod add_item;
mod remove_item;
mod retrieve;

use crate::types::Context;
use axum::routing::Router;
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;
use validator::ValidationError;

const MENU_TYPES: [&str; 3] = ["ale", "wine", "food"];

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(retrieve::get_router())
        .merge(add_item::get_router())
        .merge(remove_item::get_router())
}

pub fn validate_menu_type(menu_type: &str) -> Result<(), ValidationError> {
    match MENU_TYPES.contains(&menu_type) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_MENU_TYPE")
            .with_message(Cow::from("Menu type must be one of ale, wine or food"))),
    }
}

pub fn validate_menu_item_id(id: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("Invalid menu item id regex");
    match regex.is_match(id) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_MENU_ITEM_ID")
            .with_message(Cow::from("Menu item id must be a v4 UUID"))),
    }
}
