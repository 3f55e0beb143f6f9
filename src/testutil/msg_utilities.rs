use cosmwasm_std::{testing::MOCK_CONTRACT_ADDR, CosmosMsg, SubMsg};
use provwasm_std::{NameMsgParams, ProvenanceMsg, ProvenanceMsgParams};

use super::test_constants::DEFAULT_CONTRACT_BASE_NAME;

// Tests that the slice holds exactly one message and that it restrictively binds the default
// contract base name to the mock contract address
pub fn test_for_default_base_name(messages: &[SubMsg<ProvenanceMsg>]) {
    test_message_is_name_bind(messages, DEFAULT_CONTRACT_BASE_NAME);
}

pub fn test_message_is_name_bind(messages: &[SubMsg<ProvenanceMsg>], expected_name: &str) {
    assert_eq!(
        1,
        messages.len(),
        "expected only a single name binding message to be emitted",
    );
    match &messages[0].msg {
        CosmosMsg::Custom(msg) => match &msg.params {
            ProvenanceMsgParams::Name(NameMsgParams::BindName {
                name,
                address,
                restrict,
            }) => {
                assert_eq!(
                    expected_name,
                    name.as_str(),
                    "the expected name should be bound",
                );
                assert_eq!(
                    MOCK_CONTRACT_ADDR,
                    address.as_str(),
                    "the default contract address should be bound to",
                );
                assert!(restrict, "the name should be bound as restricted");
            }
            _ => panic!("unexpected provenance message type was emitted"),
        },
        _ => panic!("unexpected message type was emitted"),
    }
}
