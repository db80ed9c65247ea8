pub mod error_banner;
pub mod field_input;
