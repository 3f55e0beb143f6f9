use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_asset;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Fetches an [Asset](crate::core::types::asset::Asset) by its id.  An unknown id is not an error:
/// the response serializes to `null` instead.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_id` The id assigned to the asset at registration.
pub fn query_asset(deps: &DepsC, asset_id: u64) -> ContractResult<Binary> {
    to_binary(&may_load_asset(deps.storage, asset_id)?)?.to_ok()
}
