use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::upsert_verifier;
use crate::core::types::verifier_detail::VerifierDetail;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_contract_owner_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, Addr, MessageInfo, Response};

/// A transformation of [ExecuteMsg::AddVerifier](crate::core::msg::ExecuteMsg::AddVerifier)
/// for ease of use in the underlying [add_verifier](self::add_verifier) function.
///
/// # Parameters
///
/// * `verifier` The address of the account to authorize as a verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct AddVerifierV1 {
    pub verifier: String,
}
impl AddVerifierV1 {
    /// Constructs a new instance of this struct.
    ///
    /// # Parameters
    ///
    /// * `verifier` The address of the account to authorize as a verifier.
    pub fn new<S: Into<String>>(verifier: S) -> Self {
        AddVerifierV1 {
            verifier: verifier.into(),
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [AddVerifier](crate::core::msg::ExecuteMsg::AddVerifier)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<AddVerifierV1> {
        match msg {
            ExecuteMsg::AddVerifier { verifier } => AddVerifierV1::new(verifier).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::AddVerifier".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::AddVerifier](crate::core::msg::ExecuteMsg::AddVerifier)
/// message is provided.  Stores an active [VerifierDetail](crate::core::types::verifier_detail::VerifierDetail)
/// for the given address, replacing any existing record.  Only the contract owner may add
/// verifiers.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the add verifier v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn add_verifier(deps: DepsMutC, info: MessageInfo, msg: AddVerifierV1) -> EntryPointResponse {
    check_contract_owner_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let verifier = VerifierDetail::new(Addr::unchecked(msg.verifier), true);
    upsert_verifier(deps.storage, &verifier)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::AddVerifier)
                .set_verifier(verifier.address.as_str())
                .set_new_value(verifier.active),
        )
        .set_data(to_binary(&true)?)
        .to_ok()
}
