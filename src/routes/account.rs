use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountResponse, CreateAccountRequest, DeletedResponse, UpdateAccountRequest},
        Account, AccountUpdate, Error,
    },
    AppState,
};

use super::{
    extract::{AccountId, JsonBody},
    method_not_allowed,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    list_accounts_handler,
    create_account_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/account",
            get(list_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/account/:id",
            get(get_account_handler)
                .put(update_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_allowed),
        )
}

#[utoipa::path(
    get,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts", body = [AccountResponse]),
        (status = 500, description = "Storage failure", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    let accounts = state.db.get_accounts().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account successfully created", body = AccountResponse),
        (status = 400, description = "Malformed request body", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, Error> {
    let account = state
        .db
        .create_account(&Account::new(body.first_name, body.last_name))
        .await?;
    info!(id = account.id, number = account.number, "account created");

    Ok(Json(AccountResponse::from(account)))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, description = "Id is not an integer", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
) -> Result<Json<AccountResponse>, Error> {
    let account = state.db.get_account_by_id(id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Update account handler function
#[utoipa::path(
    put,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account successfully updated", body = AccountResponse),
        (status = 400, description = "Bad id or body", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
    JsonBody(body): JsonBody<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, Error> {
    let update = AccountUpdate {
        first_name: body.first_name,
        last_name: body.last_name,
        balance: body.balance,
    };
    let updated = state.db.update_account(id, &update).await?;
    info!(id, "account updated");

    Ok(Json(AccountResponse::from(updated)))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account deleted", body = DeletedResponse),
        (status = 400, description = "Id is not an integer", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
) -> Result<Json<DeletedResponse>, Error> {
    state.db.delete_account(id).await?;
    info!(id, "account deleted");

    Ok(Json(DeletedResponse { deleted: id }))
}
