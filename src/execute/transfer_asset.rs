use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_asset, replace_asset};
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, Addr, MessageInfo, Response};

use super::check_asset_owner;

/// A transformation of [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// for ease of use in the underlying [transfer_asset](self::transfer_asset) function.
///
/// # Parameters
///
/// * `asset_id` The id of the asset to transfer.
/// * `new_owner` The account that will own the asset after the transfer.  This value is taken as
/// provided and is not validated.
#[derive(Clone, PartialEq, Eq)]
pub struct TransferAssetV1 {
    pub asset_id: u64,
    pub new_owner: String,
}
impl TransferAssetV1 {
    pub fn new<S: Into<String>>(asset_id: u64, new_owner: S) -> Self {
        TransferAssetV1 {
            asset_id,
            new_owner: new_owner.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<TransferAssetV1> {
        match msg {
            ExecuteMsg::TransferAsset {
                asset_id,
                new_owner,
            } => TransferAssetV1::new(asset_id, new_owner).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::TransferAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// message is provided.  Reassigns the owner of an existing asset.  Only the current owner may
/// transfer an asset.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the transfer asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn transfer_asset(
    deps: DepsMutC,
    info: MessageInfo,
    msg: TransferAssetV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut asset = load_asset(deps.storage, msg.asset_id)?;
    check_asset_owner(&asset, &info)?;
    // Owner identities are opaque, so the new owner is stored exactly as provided
    asset.owner = Addr::unchecked(msg.new_owner);
    replace_asset(deps.storage, &asset)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::TransferAsset, asset.id)
                .set_owner(asset.owner.as_str()),
        )
        .set_data(to_binary(&true)?)
        .to_ok()
}
