use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted by `POST /transfer` and echoed back unchanged. No balances move.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: i64,
    pub amount: i64,
}
