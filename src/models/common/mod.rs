pub mod error_code;
pub mod form;
pub mod patch;
pub mod response;

pub use error_code::ErrorCode;
pub use form::{FieldErrors, RedirectResponse};
pub use response::ApiResponse;
