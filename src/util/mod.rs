//! Miscellaneous functionalities that do not logically belong to a concrete group.

/// Defines various types with type aliases to shorten syntax used elsewhere in the contract code.
pub mod aliases;
/// Defines all global constant values used throughout the contract.
pub mod constants;
/// Functions that perform common guard checks for the [execute](crate::contract::execute) and
/// [instantiate](crate::contract::instantiate) functions.
pub mod contract_helpers;
/// Helpers to ensure that emitting event attributes on [execute](crate::contract::execute) calls
/// occurs with standard values throughout the contract.
pub mod event_attributes;
/// Global traits to be used across various areas of the contract.
pub mod traits;
