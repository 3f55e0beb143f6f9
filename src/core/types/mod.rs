//! Contains all structs used to drive core functionality throughout the contract.

/// Defines a piece of physical equipment registered to an owner.
pub mod asset;
/// Defines a lessee company that can be verified by an authorized verifier.
pub mod company;
/// Defines an account authorized by the contract owner to verify companies.
pub mod verifier_detail;
