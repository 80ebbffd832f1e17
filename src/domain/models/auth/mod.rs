pub mod authenticated_account;
pub mod authentication_request;

pub use authenticated_account::AuthenticatedAccount;
pub use authentication_request::AuthScope;
