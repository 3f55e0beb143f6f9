//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_asset;
pub mod query_company;
pub mod query_company_verified;
pub mod query_state;
pub mod query_verifier;
pub mod query_version;
