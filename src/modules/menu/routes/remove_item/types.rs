pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Params {
        #[validate(custom(
            code = "INVALID_MENU_TYPE",
            function = "crate::modules::menu::routes::validate_menu_type"
        ))]
        #[serde(rename = "type")]
        pub menu_type: String,
        #[validate(custom(
            code = "INVALID_MENU_ITEM_ID",
            function = "crate::modules::menu::routes::validate_menu_item_id"
        ))]
        pub id: String,
    }

    pub struct Payload {
        pub params: Params,
    }
}

pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Removed(bool),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Removed(removed) => {
                    (StatusCode::NO_CONTENT, Json(json!({ "data": removed }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MenuTypeNotFound(String),
        MenuItemNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuTypeNotFound(menu_type) => {
                    ApiError::missing_resource(format!("Menu type {} does not exist", menu_type))
                        .into_response()
                }
                Self::MenuItemNotFound(id) => {
                    ApiError::missing_resource(format!("Menu item with id {} not found", id))
                        .into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
