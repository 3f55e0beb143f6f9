use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lessee company tracked by the verification registry.  The [verified](self::Company::verified)
/// flag moves from false to true exactly once and never back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Company {
    /// The unique id assigned at registration.  Ids start at 1 and are never reused.
    pub id: u64,
    pub name: String,
    pub address: String,
    pub license_number: String,
    pub verified: bool,
    /// The account that registered the company.
    pub admin: Addr,
}
impl Company {
    /// Constructs a newly-registered, unverified company.
    pub fn new(id: u64, input: CompanyInput, admin: Addr) -> Self {
        Company {
            id,
            name: input.name,
            address: input.address,
            license_number: input.license_number,
            verified: false,
            admin,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct CompanyInput {
    pub name: String,
    pub address: String,
    pub license_number: String,
}
impl CompanyInput {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        name: S1,
        address: S2,
        license_number: S3,
    ) -> Self {
        CompanyInput {
            name: name.into(),
            address: address.into(),
            license_number: license_number.into(),
        }
    }
}
