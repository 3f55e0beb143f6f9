use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_company, may_load_verifier, replace_company};
use crate::util::aliases::{ContractResult, DepsC, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, MessageInfo, Response};

/// A transformation of [ExecuteMsg::VerifyCompany](crate::core::msg::ExecuteMsg::VerifyCompany)
/// for ease of use in the underlying [verify_company](self::verify_company) function.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyCompanyV1 {
    pub company_id: u64,
}
impl VerifyCompanyV1 {
    pub fn new(company_id: u64) -> Self {
        VerifyCompanyV1 { company_id }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<VerifyCompanyV1> {
        match msg {
            ExecuteMsg::VerifyCompany { company_id } => VerifyCompanyV1::new(company_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::VerifyCompany".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::VerifyCompany](crate::core::msg::ExecuteMsg::VerifyCompany)
/// message is provided.  Marks a company as verified.  The sender must hold an active verifier
/// record, and the verifier checks always run before the company lookup.  Verifying an already
/// verified company succeeds and leaves it verified.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the verify company v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn verify_company(
    deps: DepsMutC,
    info: MessageInfo,
    msg: VerifyCompanyV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    check_active_verifier(&deps.as_ref(), &info)?;
    let mut company = load_company(deps.storage, msg.company_id)?;
    company.verified = true;
    replace_company(deps.storage, &company)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_company_event(EventType::VerifyCompany, company.id)
                .set_verifier(info.sender.as_str()),
        )
        .set_data(to_binary(&true)?)
        .to_ok()
}

fn check_active_verifier(deps: &DepsC, info: &MessageInfo) -> ContractResult<()> {
    match may_load_verifier(deps.storage, &info.sender)? {
        None => ContractError::UnknownVerifier {
            sender: info.sender.to_string(),
        }
        .to_err(),
        Some(verifier) if !verifier.active => ContractError::InactiveVerifier {
            sender: info.sender.to_string(),
        }
        .to_err(),
        Some(_) => Ok(()),
    }
}
