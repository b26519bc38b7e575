use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::models::Error;

/// JSON request body decoded regardless of the `Content-Type` header
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Error::Decode(rejection.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

/// The `{id}` path segment parsed as an account id
pub struct AccountId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::InvalidArgument(rejection.body_text()))?;
        parse_id(&raw).map(AccountId)
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<i32, Error> {
    raw.parse::<i32>()
        .map_err(|_| Error::InvalidArgument(format!("invalid id {raw}")))
}
