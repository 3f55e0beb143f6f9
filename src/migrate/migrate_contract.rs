use cosmwasm_std::{Response, Storage};
use semver::Version;

use crate::{
    core::error::ContractError,
    util::{
        aliases::{ContractResult, DepsMutC, EntryPointResponse},
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

use super::version_info::{
    get_version_info, migrate_version_info, parse_sem_ver, CONTRACT_NAME, CONTRACT_VERSION,
};

/// Runs a code migration.  Registry records and counters are untouched, only the stored version
/// info is replaced.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn migrate_contract(deps: DepsMutC) -> EntryPointResponse {
    check_valid_migration_versioning(deps.storage)?;
    let new_version_info = migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract)
                .set_new_value(&new_version_info.version),
        )
        .to_ok()
}

/// Verifies that the migration is going to a proper version and the contract name of the new wasm matches
fn check_valid_migration_versioning(storage: &mut dyn Storage) -> ContractResult<()> {
    let stored_version_info = get_version_info(storage)?;
    if CONTRACT_NAME != stored_version_info.contract {
        return ContractError::InvalidContractName {
            current_contract: stored_version_info.contract,
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_err();
    }
    let contract_version = CONTRACT_VERSION.parse::<Version>()?;
    // A stored version above the package version means this migration is a downgrade
    if parse_sem_ver(&stored_version_info)? > contract_version {
        return ContractError::InvalidContractVersion {
            current_version: stored_version_info.version,
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_err();
    }
    Ok(())
}
