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
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 2,
            max = 50,
            message = "Name must be between 2 and 50 characters"
        ))]
        pub name: String,
        #[validate(length(
            min = 15,
            max = 500,
            message = "Description must be between 15 and 500 characters"
        ))]
        pub description: String,
        #[validate(range(min = 0.0, message = "Price must not be negative"))]
        pub price: f64,
    }

    pub struct Payload {
        pub params: Params,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::menu::repository::MenuItem;
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Menu(Vec<MenuItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(menu) => {
                    (StatusCode::OK, Json(json!({ "data": menu }))).into_response()
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
