use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::insert_asset;
use crate::core::types::asset::AssetInput;
use crate::util::aliases::{ContractResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{to_binary, MessageInfo, Response};

/// A transformation of [ExecuteMsg::RegisterAsset](crate::core::msg::ExecuteMsg::RegisterAsset)
/// for ease of use in the underlying [register_asset](self::register_asset) function.
///
/// # Parameters
///
/// * `asset` The descriptive values of the equipment being registered.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterAssetV1 {
    pub asset: AssetInput,
}
impl RegisterAssetV1 {
    /// Constructs a new instance of this struct.
    ///
    /// # Parameters
    ///
    /// * `asset` The descriptive values of the equipment being registered.
    pub fn new(asset: AssetInput) -> Self {
        RegisterAssetV1 { asset }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [RegisterAsset](crate::core::msg::ExecuteMsg::RegisterAsset)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> ContractResult<RegisterAssetV1> {
        match msg {
            ExecuteMsg::RegisterAsset {
                name,
                model,
                manufacturer,
                year,
                serial_number,
            } => RegisterAssetV1::new(AssetInput::new(
                name,
                model,
                manufacturer,
                year,
                serial_number,
            ))
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::RegisterAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::RegisterAsset](crate::core::msg::ExecuteMsg::RegisterAsset)
/// message is provided.  Assigns the next asset id and stores a new, available
/// [Asset](crate::core::types::asset::Asset) owned by the sender.  The new id is set as the
/// response data.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the register asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn register_asset(
    deps: DepsMutC,
    info: MessageInfo,
    msg: RegisterAssetV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let asset = insert_asset(deps.storage, msg.asset, info.sender)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::RegisterAsset, asset.id)
                .set_owner(asset.owner.as_str()),
        )
        .set_data(to_binary(&asset.id)?)
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use cosmwasm_std::testing::{mock_env, mock_info};
    use provwasm_mocks::mock_dependencies;

    use crate::contract::execute;
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;
    use crate::core::state::load_asset;
    use crate::execute::register_asset::{register_asset, RegisterAssetV1};
    use crate::testutil::asset_registry_helpers::{default_asset_input, test_register_asset};
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_MANUFACTURER, DEFAULT_ASSET_MODEL, DEFAULT_ASSET_NAME,
        DEFAULT_ASSET_SERIAL_NUMBER, DEFAULT_ASSET_YEAR, DEFAULT_SENDER_ADDRESS,
        DEFAULT_STRANGER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, response_data, single_attribute_for_key, test_instantiate_success,
        InstArgs,
    };
    use crate::util::constants::{ASSET_ID_KEY, OWNER_ADDRESS_KEY, REGISTRY_EVENT_TYPE_KEY};
    use crate::util::event_attributes::EventType;

    #[test]
    fn test_valid_register_asset_via_execute() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            ExecuteMsg::RegisterAsset {
                name: DEFAULT_ASSET_NAME.to_string(),
                model: DEFAULT_ASSET_MODEL.to_string(),
                manufacturer: DEFAULT_ASSET_MANUFACTURER.to_string(),
                year: DEFAULT_ASSET_YEAR,
                serial_number: DEFAULT_ASSET_SERIAL_NUMBER.to_string(),
            },
        )
        .expect("expected the register asset function to execute properly");
        assert!(
            response.messages.is_empty(),
            "registering an asset should not require messages",
        );
        assert_eq!(
            3,
            response.attributes.len(),
            "registering an asset should produce the correct number of attributes",
        );
        assert_eq!(
            EventType::RegisterAsset.event_name().as_str(),
            single_attribute_for_key(&response, REGISTRY_EVENT_TYPE_KEY),
            "expected the correct event type to be emitted",
        );
        assert_eq!(
            "1",
            single_attribute_for_key(&response, ASSET_ID_KEY),
            "expected the first asset id to be emitted",
        );
        assert_eq!(
            DEFAULT_SENDER_ADDRESS,
            single_attribute_for_key(&response, OWNER_ADDRESS_KEY),
            "expected the sender to be emitted as the owner",
        );
        assert_eq!(
            1u64,
            response_data::<u64, _>(&response),
            "expected the new asset id to be set as the response data",
        );
        let asset = load_asset(deps.as_ref().storage, 1)
            .expect("expected the asset to be stored after registration");
        assert_eq!(DEFAULT_ASSET_NAME, asset.name, "the name should be stored");
        assert_eq!(DEFAULT_ASSET_MODEL, asset.model, "the model should be stored");
        assert_eq!(
            DEFAULT_ASSET_MANUFACTURER, asset.manufacturer,
            "the manufacturer should be stored",
        );
        assert_eq!(DEFAULT_ASSET_YEAR, asset.year, "the year should be stored");
        assert_eq!(
            DEFAULT_ASSET_SERIAL_NUMBER, asset.serial_number,
            "the serial number should be stored",
        );
        assert_eq!(
            DEFAULT_SENDER_ADDRESS,
            asset.owner.as_str(),
            "the sender should own the new asset",
        );
        assert!(asset.available, "new assets should be available");
    }

    #[test]
    fn test_valid_register_asset_via_internal() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = register_asset(
            deps.as_mut(),
            empty_mock_info(DEFAULT_STRANGER_ADDRESS),
            RegisterAssetV1::new(default_asset_input()),
        )
        .expect("expected the register asset function to return properly");
        assert_eq!(
            1u64,
            response_data::<u64, _>(&response),
            "expected the first registration to produce id 1",
        );
        let asset = load_asset(deps.as_ref().storage, 1).unwrap();
        assert_eq!(
            DEFAULT_STRANGER_ADDRESS,
            asset.owner.as_str(),
            "any account should be able to register and own an asset",
        );
    }

    #[test]
    fn test_register_asset_ids_follow_call_order() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        for expected_id in 1..=5u64 {
            let id = test_register_asset(deps.as_mut(), DEFAULT_SENDER_ADDRESS);
            assert_eq!(
                expected_id, id,
                "each registration should receive the next sequential id",
            );
        }
    }

    #[test]
    fn test_invalid_register_asset_for_provided_funds() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = register_asset(
            deps.as_mut(),
            mock_info(DEFAULT_SENDER_ADDRESS, &[coin(100, "nhash")]),
            RegisterAssetV1::new(default_asset_input()),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "expected the invalid funds response to be returned when funds are provided to the function, but got: {:?}",
            error,
        );
        assert!(
            load_asset(deps.as_ref().storage, 1).is_err(),
            "no asset should be stored when registration is rejected",
        );
    }

    #[test]
    fn test_from_execute_msg_rejects_other_variants() {
        let error = RegisterAssetV1::from_execute_msg(ExecuteMsg::VerifyCompany { company_id: 1 })
            .err()
            .expect("converting the wrong variant should fail");
        assert!(
            matches!(error, ContractError::InvalidMessageType { .. }),
            "expected the invalid message type error, but got: {:?}",
            error,
        );
    }
}
