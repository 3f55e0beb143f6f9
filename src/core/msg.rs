use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The message used to create the contract.
///
/// # Parameters
///
/// * `base_contract_name` The root name that the contract is known by on the chain.
/// * `bind_base_name` Whether or not to bind the base contract name to the contract address as a
/// restricted Provenance name.
/// * `contract_owner` The account allowed to manage verifiers.  When omitted, the instantiating
/// account becomes the contract owner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    pub base_contract_name: String,
    pub bind_base_name: bool,
    pub contract_owner: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    RegisterAsset {
        name: String,
        model: String,
        manufacturer: String,
        year: u32,
        serial_number: String,
    },
    SetAssetAvailability {
        asset_id: u64,
        available: bool,
    },
    TransferAsset {
        asset_id: u64,
        new_owner: String,
    },
    RegisterCompany {
        name: String,
        address: String,
        license_number: String,
    },
    AddVerifier {
        verifier: String,
    },
    UpdateVerifier {
        verifier: String,
        active: bool,
    },
    VerifyCompany {
        company_id: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    QueryAsset { asset_id: u64 },
    QueryCompany { company_id: u64 },
    QueryCompanyVerified { company_id: u64 },
    QueryVerifier { verifier: String },
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
