//! Shared values and helper functions used by the unit tests throughout the contract.

/// Helpers for driving the asset registry routes with default values.
pub mod asset_registry_helpers;
/// Helpers for driving the lessee verification registry routes with default values.
pub mod lessee_registry_helpers;
pub mod msg_utilities;
pub mod test_constants;
pub mod test_utilities;
