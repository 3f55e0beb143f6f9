use cosmwasm_std::{
    from_binary,
    testing::{mock_env, mock_info},
    Coin, Env, MessageInfo, Response,
};
use provwasm_std::ProvenanceMsg;
use serde::de::DeserializeOwned;

use crate::{
    contract::instantiate,
    core::msg::InitMsg,
    util::aliases::{DepsMutC, EntryPointResponse},
};

use super::test_constants::{DEFAULT_CONTRACT_BASE_NAME, DEFAULT_CONTRACT_OWNER_ADDRESS};

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub base_contract_name: String,
    pub bind_base_name: bool,
    pub contract_owner: Option<String>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_CONTRACT_OWNER_ADDRESS, &[]),
            base_contract_name: DEFAULT_CONTRACT_BASE_NAME.into(),
            bind_base_name: true,
            // Defers to the instantiating sender, which is the default contract owner
            contract_owner: None,
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            base_contract_name: args.base_contract_name,
            bind_base_name: args.bind_base_name,
            contract_owner: args.contract_owner,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}

/// Deserializes the data field of a response.  Every successful execute route sets response data.
pub fn response_data<T: DeserializeOwned, U>(response: &Response<U>) -> T {
    from_binary(
        response
            .data
            .as_ref()
            .expect("expected the response to include data"),
    )
    .expect("expected the response data to deserialize")
}
