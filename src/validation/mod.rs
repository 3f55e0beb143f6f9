//! Contains the validation used on incoming messages before they reach their routes.

/// Validation for [InitMsg](crate::core::msg::InitMsg) values.
pub mod validate_init_msg;
