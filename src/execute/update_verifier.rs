use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{may_load_verifier, upsert_verifier};
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_contract_owner_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, Addr, MessageInfo, Response};

/// A transformation of [ExecuteMsg::UpdateVerifier](crate::core::msg::ExecuteMsg::UpdateVerifier)
/// for ease of use in the underlying [update_verifier](self::update_verifier) function.
///
/// # Parameters
///
/// * `verifier` The address of a previously-added verifier.
/// * `active` The new value for the verifier's active flag.
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateVerifierV1 {
    pub verifier: String,
    pub active: bool,
}
impl UpdateVerifierV1 {
    pub fn new<S: Into<String>>(verifier: S, active: bool) -> Self {
        UpdateVerifierV1 {
            verifier: verifier.into(),
            active,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<UpdateVerifierV1> {
        match msg {
            ExecuteMsg::UpdateVerifier { verifier, active } => {
                UpdateVerifierV1::new(verifier, active).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateVerifier".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::UpdateVerifier](crate::core::msg::ExecuteMsg::UpdateVerifier)
/// message is provided.  Overwrites the active flag of an existing verifier.  Only the contract
/// owner may update verifiers, and verifiers that were never added cannot be updated.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the update verifier v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn update_verifier(
    deps: DepsMutC,
    info: MessageInfo,
    msg: UpdateVerifierV1,
) -> EntryPointResponse {
    check_contract_owner_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let address = Addr::unchecked(msg.verifier);
    let mut verifier = match may_load_verifier(deps.storage, &address)? {
        Some(verifier) => verifier,
        None => {
            return ContractError::VerifierNotFound {
                verifier_address: address.into_string(),
            }
            .to_err()
        }
    };
    verifier.active = msg.active;
    upsert_verifier(deps.storage, &verifier)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::UpdateVerifier)
                .set_verifier(verifier.address.as_str())
                .set_new_value(verifier.active),
        )
        .set_data(to_binary(&true)?)
        .to_ok()
}
