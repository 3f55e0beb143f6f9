use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_company;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Fetches a [Company](crate::core::types::company::Company) by its id, serializing `null` when
/// no company holds the id.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `company_id` The id assigned to the company at registration.
pub fn query_company(deps: &DepsC, company_id: u64) -> ContractResult<Binary> {
    to_binary(&may_load_company(deps.storage, company_id)?)?.to_ok()
}
