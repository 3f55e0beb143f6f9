use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Defines an account that the contract owner has authorized to verify companies.  Only verifiers
/// with [active](self::VerifierDetail::active) set to true may verify.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct VerifierDetail {
    /// The address of the verifier account.
    pub address: Addr,
    /// Whether or not the verifier is currently allowed to verify companies.
    pub active: bool,
}
impl VerifierDetail {
    /// Constructs a new instance of this struct.
    ///
    /// # Parameters
    ///
    /// * `address` The address of the verifier account.
    /// * `active` Whether or not the verifier is currently allowed to verify companies.
    pub fn new(address: Addr, active: bool) -> Self {
        VerifierDetail { address, active }
    }
}
