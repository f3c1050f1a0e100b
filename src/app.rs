use crate::{
    modules,
    types::{AppEnvironment, Context},
    utils::error::ApiError,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    response::{IntoResponse, Response},
    Router,
};
use std::{any::Any, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors, trace};

const ALLOWED_METHODS: [Method; 4] = [Method::OPTIONS, Method::GET, Method::POST, Method::DELETE];

pub fn router(ctx: Arc<Context>) -> Router {
    let cors_layer = match ctx.app.environment {
        // Permissive CORS policy only outside production
        AppEnvironment::Production => cors::CorsLayer::new()
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::CONTENT_TYPE]),
        _ => cors::CorsLayer::new()
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(cors::Any),
    };

    Router::new()
        .nest("/api", modules::get_router())
        .fallback(missing_route)
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 1024 * 2))
        .layer(trace::TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer)
}

async fn missing_route() -> ApiError {
    ApiError::missing_route()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };
    tracing::error!("Panic while handling request: {}", message);

    ApiError::server_error().into_response()
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let listener = TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port))
            .await
            .unwrap();

        tracing::debug!(
            "App is running on {}:{}",
            self.ctx.app.host,
            self.ctx.app.port
        );

        axum::serve(listener, self.router).await.unwrap();
    }
}
