use crate::core::error::ContractError;
use crate::core::state::STATE;
use crate::util::aliases::{ContractResult, DepsC};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Ensures that only the contract owner can call into a route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use cosmwasm_std::Addr;
/// use cosmwasm_std::testing::mock_info;
/// use provwasm_mocks::mock_dependencies;
/// use equipment_leasing_smart_contract::core::state::{State, STATE};
/// use equipment_leasing_smart_contract::util::contract_helpers::check_contract_owner_only;
///
/// let mut deps = mock_dependencies(&[]);
/// STATE.save(deps.as_mut().storage, &State::new("contract-name", Addr::unchecked("owner-name")))
///     .expect("expected state to save successfully");
/// let info = mock_info("owner-name", &[]);
/// check_contract_owner_only(&deps.as_ref(), &info).expect("owner-name was used as the owner and should return a success");
/// ```
pub fn check_contract_owner_only(deps: &DepsC, info: &MessageInfo) -> ContractResult<()> {
    let state = STATE.load(deps.storage)?;
    if info.sender != state.contract_owner {
        ContractError::NotContractOwner {
            sender: info.sender.to_string(),
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use equipment_leasing_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("sender-name", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> ContractResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}
