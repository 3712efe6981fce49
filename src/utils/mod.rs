pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeClassIdI64, SafeIDI64};
pub use parameter_error_handler::json_error_handler;
