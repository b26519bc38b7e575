use crate::models::dto::Message;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health_checker_handler))]
/// Defines the OpenAPI spec for the liveness endpoint
pub struct HealthApi;

/// Answers as long as the process is serving; the database is not consulted.
#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = OK, description = "Service is up", body = Message)
    )
)]
pub async fn health_checker_handler() -> Json<Message> {
    Json(Message::new("OK, I'm alive!"))
}
