use cosmwasm_std::{to_binary, Binary};

use crate::core::state::STATE;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// A query that directly returns the contract's stored [State](crate::core::state::State) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_state(deps: &DepsC) -> ContractResult<Binary> {
    let state = STATE.load(deps.storage)?;
    to_binary(&state)?.to_ok()
}
