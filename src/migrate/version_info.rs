use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

/// The name of this contract as declared in Cargo.toml.  Stored on instantiation and verified on
/// every migration.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// The version of this contract as declared in Cargo.toml.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overwrites the stored version info with the provided values.
pub fn set_version_info(storage: &mut dyn Storage, version_info: &ContractVersion) -> ContractResult<()> {
    set_contract_version(storage, &version_info.contract, &version_info.version)?;
    Ok(())
}

/// Loads the currently-stored version info, failing if the contract has never been instantiated.
pub fn get_version_info(storage: &dyn Storage) -> ContractResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

/// Stores the name and version of the running code, returning the new values.
pub fn migrate_version_info(storage: &mut dyn Storage) -> ContractResult<ContractVersion> {
    let version_info = ContractVersion {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &version_info)?;
    version_info.to_ok()
}

/// Parses the version string of a stored version info as a semver value.
pub fn parse_sem_ver(version_info: &ContractVersion) -> ContractResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}
