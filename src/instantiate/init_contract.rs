use crate::core::msg::InitMsg;
use crate::core::state::{State, STATE};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, CosmosMsg, Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg};

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [State](crate::core::state::State) value and records the contract version.
/// Both registries start empty, so the first asset and the first company each receive id 1.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    if msg.bind_base_name {
        messages.push(bind_name(
            &msg.base_contract_name,
            env.contract.address,
            NameBinding::Restricted,
        )?);
    }
    let contract_owner = msg
        .contract_owner
        .map(Addr::unchecked)
        .unwrap_or(info.sender);
    let state = State::new(msg.base_contract_name, contract_owner);
    STATE.save(deps.storage, &state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_messages(messages)
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_owner(state.contract_owner.as_str()),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::state::STATE;
    use crate::migrate::version_info::{get_version_info, CONTRACT_NAME, CONTRACT_VERSION};
    use crate::testutil::msg_utilities::test_for_default_base_name;
    use crate::testutil::test_constants::{
        DEFAULT_CONTRACT_BASE_NAME, DEFAULT_CONTRACT_OWNER_ADDRESS, DEFAULT_SENDER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        mock_info_with_funds, single_attribute_for_key, test_instantiate, InstArgs,
    };
    use crate::util::constants::{OWNER_ADDRESS_KEY, REGISTRY_EVENT_TYPE_KEY};
    use crate::util::event_attributes::EventType;
    use cosmwasm_std::coin;
    use provwasm_mocks::mock_dependencies;

    #[test]
    fn test_valid_default_init() {
        let mut deps = mock_dependencies(&[]);
        let response = test_instantiate(deps.as_mut(), InstArgs::default())
            .expect("the default instantiate should produce a response without error");
        assert_eq!(
            2,
            response.attributes.len(),
            "the correct number of attributes should be emitted",
        );
        assert_eq!(
            EventType::InstantiateContract.event_name().as_str(),
            single_attribute_for_key(&response, REGISTRY_EVENT_TYPE_KEY),
            "the proper event type should be emitted",
        );
        assert_eq!(
            DEFAULT_CONTRACT_OWNER_ADDRESS,
            single_attribute_for_key(&response, OWNER_ADDRESS_KEY),
            "the contract owner should be emitted",
        );
        test_for_default_base_name(&response.messages);
        let state = STATE
            .load(deps.as_ref().storage)
            .expect("state should be created by instantiation");
        assert_eq!(
            DEFAULT_CONTRACT_BASE_NAME,
            state.base_contract_name.as_str(),
            "the base contract name should be stored",
        );
        assert_eq!(
            DEFAULT_CONTRACT_OWNER_ADDRESS,
            state.contract_owner.as_str(),
            "the instantiating sender should become the contract owner by default",
        );
        let version_info = get_version_info(deps.as_ref().storage)
            .expect("version info should successfully load after instantiation");
        assert_eq!(
            CONTRACT_NAME, version_info.contract,
            "the contract name should be properly stored after a successful instantiation",
        );
        assert_eq!(
            CONTRACT_VERSION, version_info.version,
            "the contract version should be properly stored after a successful instantiation",
        );
    }

    #[test]
    fn test_valid_init_with_explicit_contract_owner() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate(
            deps.as_mut(),
            InstArgs {
                contract_owner: Some(DEFAULT_SENDER_ADDRESS.to_string()),
                ..Default::default()
            },
        )
        .expect("instantiation with an explicit contract owner should succeed");
        let state = STATE.load(deps.as_ref().storage).unwrap();
        assert_eq!(
            DEFAULT_SENDER_ADDRESS,
            state.contract_owner.as_str(),
            "the explicit contract owner should take precedence over the sender",
        );
    }

    #[test]
    fn test_valid_init_bind_base_name_false_skips_base_bind() {
        let mut deps = mock_dependencies(&[]);
        let response = test_instantiate(
            deps.as_mut(),
            InstArgs {
                bind_base_name: false,
                ..Default::default()
            },
        )
        .expect("instantiation with defaults and bind_base_name = false should succeed");
        assert!(
            response.messages.is_empty(),
            "no messages should be emitted when the base name is not bound",
        );
    }

    #[test]
    fn test_invalid_init_contract_including_funds() {
        let mut deps = mock_dependencies(&[]);
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                info: mock_info_with_funds(DEFAULT_CONTRACT_OWNER_ADDRESS, &[coin(100, "nhash")]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "the responding error should indicate invalid funds, but got: {:?}",
            error,
        );
        assert!(
            STATE.may_load(deps.as_ref().storage).unwrap().is_none(),
            "no state should be stored when instantiation fails",
        );
    }

    #[test]
    fn test_invalid_init_fails_for_invalid_init_msg() {
        let mut deps = mock_dependencies(&[]);
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                base_contract_name: String::new(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "the responding error should indicate that the InitMsg was badly formatted, but got: {:?}",
            error,
        );
    }
}
