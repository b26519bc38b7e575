mod account;
mod extract;
mod health;
mod swagger;
mod transfer;
use crate::database::{self, PostgreDatabase};
use crate::models::Error;
use health::health_checker_handler;
use tracing::info;
use tower_http::trace::TraceLayer;

use crate::{AppState, Config};

use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;

/// Connects to PostgreSQL, makes sure the schema exists and builds the router on top of it.
/// Any failure here is fatal for the process.
pub async fn make_app(config: &Config) -> anyhow::Result<Router> {
    info!("Connecting to PostgreSQL...");
    let sqlx_db_connection = database::connect_sqlx(config).await?;
    info!("Connected to PostgreSQL!");

    let db = PostgreDatabase::new(sqlx_db_connection);
    db.init().await?;

    Ok(build_router(Arc::new(AppState::new(db))))
}

/// Routes, docs and tracing over whatever store `state` carries
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_checker_handler))
        .merge(account::account_routes())
        .merge(transfer::transfer_routes())
        .merge(swagger::build_documentation())
        .fallback(no_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn method_not_allowed(method: Method) -> Error {
    Error::MethodNotAllowed(method.to_string())
}

async fn no_route(uri: Uri) -> Error {
    Error::NotFound(format!("no route for {}", uri.path()))
}
