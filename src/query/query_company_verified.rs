use cosmwasm_std::{to_binary, Binary};

use crate::core::state::may_load_company;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Responds with whether or not the company is verified.  A company that does not exist is
/// reported as unverified.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `company_id` The id assigned to the company at registration.
pub fn query_company_verified(deps: &DepsC, company_id: u64) -> ContractResult<Binary> {
    let verified = may_load_company(deps.storage, company_id)?
        .map(|company| company.verified)
        .unwrap_or(false);
    to_binary(&verified)?.to_ok()
}
