use cosmwasm_std::{to_binary, Addr, Binary};

use crate::core::state::may_load_verifier;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

/// Fetches the [VerifierDetail](crate::core::types::verifier_detail::VerifierDetail) stored for
/// an account, serializing `null` when the account was never added as a verifier.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `verifier` The account identity of the verifier.
pub fn query_verifier<S: Into<String>>(deps: &DepsC, verifier: S) -> ContractResult<Binary> {
    to_binary(&may_load_verifier(deps.storage, &Addr::unchecked(verifier))?)?.to_ok()
}
