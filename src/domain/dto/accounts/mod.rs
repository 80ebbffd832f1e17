pub mod request;
pub mod response;

pub use request::{CreateAccountRequest, LoginRequest, TransferRequest};
pub use response::{DeleteAccountResponse, TokenResponse};
