use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::insert_company;
use crate::core::types::company::CompanyInput;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, MessageInfo, Response};

/// A transformation of [ExecuteMsg::RegisterCompany](crate::core::msg::ExecuteMsg::RegisterCompany)
/// for ease of use in the underlying [register_company](self::register_company) function.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterCompanyV1 {
    pub company: CompanyInput,
}
impl RegisterCompanyV1 {
    pub fn new(company: CompanyInput) -> Self {
        RegisterCompanyV1 { company }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<RegisterCompanyV1> {
        match msg {
            ExecuteMsg::RegisterCompany {
                name,
                address,
                license_number,
            } => RegisterCompanyV1::new(CompanyInput::new(name, address, license_number)).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::RegisterCompany".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::RegisterCompany](crate::core::msg::ExecuteMsg::RegisterCompany)
/// message is provided.  Assigns the next company id and stores a new, unverified
/// [Company](crate::core::types::company::Company) administered by the sender.  The new id is set
/// as the response data.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the register company v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn register_company(
    deps: DepsMutC,
    info: MessageInfo,
    msg: RegisterCompanyV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let company = insert_company(deps.storage, msg.company, info.sender)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_company_event(EventType::RegisterCompany, company.id)
                .set_owner(company.admin.as_str()),
        )
        .set_data(to_binary(&company.id)?)
        .to_ok()
}
