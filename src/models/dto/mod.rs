pub mod account;
pub mod message;
pub mod transfer;
pub use account::*;
pub use message::{ErrorMessage, Message};
pub use transfer::TransferRequest;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    CreateAccountRequest,
    UpdateAccountRequest,
    AccountResponse,
    DeletedResponse,
    TransferRequest,
    Message,
    ErrorMessage,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
