pub mod account_request;
pub mod transfer_request;

pub use account_request::{CreateAccountRequest, LoginRequest};
pub use transfer_request::TransferRequest;
