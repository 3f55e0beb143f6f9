use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_asset, replace_asset};
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, MessageInfo, Response};

use super::check_asset_owner;

/// A transformation of [ExecuteMsg::SetAssetAvailability](crate::core::msg::ExecuteMsg::SetAssetAvailability)
/// for ease of use in the underlying [set_asset_availability](self::set_asset_availability) function.
#[derive(Clone, PartialEq, Eq)]
pub struct SetAssetAvailabilityV1 {
    pub asset_id: u64,
    pub available: bool,
}
impl SetAssetAvailabilityV1 {
    pub fn new(asset_id: u64, available: bool) -> Self {
        SetAssetAvailabilityV1 {
            asset_id,
            available,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<SetAssetAvailabilityV1> {
        match msg {
            ExecuteMsg::SetAssetAvailability {
                asset_id,
                available,
            } => SetAssetAvailabilityV1::new(asset_id, available).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SetAssetAvailability".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::SetAssetAvailability](crate::core::msg::ExecuteMsg::SetAssetAvailability)
/// message is provided.  Only the current owner of the asset may change its availability.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the set asset availability v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn set_asset_availability(
    deps: DepsMutC,
    info: MessageInfo,
    msg: SetAssetAvailabilityV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut asset = load_asset(deps.storage, msg.asset_id)?;
    check_asset_owner(&asset, &info)?;
    asset.available = msg.available;
    replace_asset(deps.storage, &asset)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::SetAssetAvailability, asset.id)
                .set_new_value(asset.available),
        )
        .set_data(to_binary(&true)?)
        .to_ok()
}
