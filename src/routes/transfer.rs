use std::sync::Arc;

use axum::{routing::post, Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{dto::TransferRequest, Error},
    AppState,
};

use super::{extract::JsonBody, method_not_allowed};

#[derive(OpenApi)]
#[openapi(paths(transfer_handler))]
/// Defines the OpenAPI spec for transfer endpoints
pub struct TransferApi;

pub const TRANSFER_API_GROUP: &str = "TRANSFER";

pub fn transfer_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/transfer",
        post(transfer_handler).fallback(method_not_allowed),
    )
}

/// Decodes a transfer request and echoes it back. Balances are not touched.
#[utoipa::path(
    post,
    path = "/transfer",
    tag = TRANSFER_API_GROUP,
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer request accepted", body = TransferRequest),
        (status = 400, description = "Malformed request body", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn transfer_handler(
    JsonBody(transfer): JsonBody<TransferRequest>,
) -> Result<Json<TransferRequest>, Error> {
    info!(
        to_account = transfer.to_account,
        amount = transfer.amount,
        "transfer requested"
    );
    Ok(Json(transfer))
}
