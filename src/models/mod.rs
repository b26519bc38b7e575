pub mod account;
pub mod dto;
pub mod error;
pub use account::{Account, AccountUpdate};
pub use error::{Error, StoreError};
