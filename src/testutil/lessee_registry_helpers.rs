use crate::{
    core::types::company::CompanyInput,
    execute::{
        add_verifier::{add_verifier, AddVerifierV1},
        register_company::{register_company, RegisterCompanyV1},
    },
    util::aliases::DepsMutC,
};

use super::{
    test_constants::{
        DEFAULT_COMPANY_ADDRESS, DEFAULT_COMPANY_LICENSE_NUMBER, DEFAULT_COMPANY_NAME,
        DEFAULT_CONTRACT_OWNER_ADDRESS,
    },
    test_utilities::{empty_mock_info, response_data},
};

pub fn default_company_input() -> CompanyInput {
    CompanyInput::new(
        DEFAULT_COMPANY_NAME,
        DEFAULT_COMPANY_ADDRESS,
        DEFAULT_COMPANY_LICENSE_NUMBER,
    )
}

/// Registers the default company as the given sender and returns the newly-assigned company id.
pub fn test_register_company<S: Into<String>>(deps: DepsMutC, sender: S) -> u64 {
    let response = register_company(
        deps,
        empty_mock_info(sender),
        RegisterCompanyV1::new(default_company_input()),
    )
    .expect("expected the default company to register successfully");
    response_data(&response)
}

/// Adds an active verifier using the default contract owner as the sender.  Requires the contract
/// to be instantiated with the default owner.
pub fn test_add_verifier<S: Into<String>>(deps: DepsMutC, verifier: S) {
    add_verifier(
        deps,
        empty_mock_info(DEFAULT_CONTRACT_OWNER_ADDRESS),
        AddVerifierV1::new(verifier),
    )
    .expect("expected the verifier to be added by the contract owner");
}
