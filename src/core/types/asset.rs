use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A piece of equipment tracked by the asset registry.  Assets are never deleted, and only their
/// [owner](self::Asset::owner) and [available](self::Asset::available) fields change after
/// registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Asset {
    /// The unique id assigned at registration.  Ids start at 1 and are never reused.
    pub id: u64,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub year: u32,
    pub serial_number: String,
    /// The account allowed to toggle availability and transfer the asset.
    pub owner: Addr,
    /// Whether or not the asset can currently be leased.
    pub available: bool,
}
impl Asset {
    /// Constructs a newly-registered asset.  All registered assets start as available.
    ///
    /// # Parameters
    ///
    /// * `id` The unique id assigned by the asset counter.
    /// * `input` The descriptive values provided by the registering account.
    /// * `owner` The account that registered the asset.
    pub fn new(id: u64, input: AssetInput, owner: Addr) -> Self {
        Asset {
            id,
            name: input.name,
            model: input.model,
            manufacturer: input.manufacturer,
            year: input.year,
            serial_number: input.serial_number,
            owner,
            available: true,
        }
    }
}

/// The descriptive portion of an [Asset], as provided by the registering account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetInput {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub year: u32,
    pub serial_number: String,
}
impl AssetInput {
    pub fn new<S1, S2, S3, S4>(
        name: S1,
        model: S2,
        manufacturer: S3,
        year: u32,
        serial_number: S4,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        AssetInput {
            name: name.into(),
            model: model.into(),
            manufacturer: manufacturer.into(),
            year,
            serial_number: serial_number.into(),
        }
    }
}
