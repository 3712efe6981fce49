pub mod classes;
pub mod common;
pub mod scheduled_classes;
pub mod users;
pub mod vaults;

pub use common::{ApiResponse, ErrorCode, FieldErrors, RedirectResponse};

