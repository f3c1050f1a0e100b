use dotenv::dotenv;
use std::sync::Arc;
use tavern_backend_rs::{
    app::App,
    types::{Config, Context, ToContext},
};
use tracing_subscriber::prelude::*;

fn init_tracing(debug: bool) {
    let default_directive = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::default();

    init_tracing(config.app.debug);

    let ctx: Arc<Context> = Arc::new(config.to_context().await);

    App::new(ctx).serve().await;
}
