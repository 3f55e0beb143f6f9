use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::add_verifier::{add_verifier, AddVerifierV1};
use crate::execute::register_asset::{register_asset, RegisterAssetV1};
use crate::execute::register_company::{register_company, RegisterCompanyV1};
use crate::execute::set_asset_availability::{set_asset_availability, SetAssetAvailabilityV1};
use crate::execute::transfer_asset::{transfer_asset, TransferAssetV1};
use crate::execute::update_verifier::{update_verifier, UpdateVerifierV1};
use crate::execute::verify_company::{verify_company, VerifyCompanyV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_asset::query_asset;
use crate::query::query_company::query_company;
use crate::query::query_company_verified::query_company_verified;
use crate::query::query_state::query_state;
use crate::query::query_verifier::query_verifier;
use crate::query::query_version::query_version;
use crate::util::aliases::{ContractResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    init_contract(deps, env, info, msg)
}

#[entry_point]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::QueryAsset { asset_id } => query_asset(&deps, asset_id),
        QueryMsg::QueryCompany { company_id } => query_company(&deps, company_id),
        QueryMsg::QueryCompanyVerified { company_id } => {
            query_company_verified(&deps, company_id)
        }
        QueryMsg::QueryVerifier { verifier } => query_verifier(&deps, verifier),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(deps: DepsMutC, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    match msg {
        ExecuteMsg::RegisterAsset { .. } => {
            register_asset(deps, info, RegisterAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::SetAssetAvailability { .. } => {
            set_asset_availability(deps, info, SetAssetAvailabilityV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::TransferAsset { .. } => {
            transfer_asset(deps, info, TransferAssetV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::RegisterCompany { .. } => {
            register_company(deps, info, RegisterCompanyV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::AddVerifier { .. } => {
            add_verifier(deps, info, AddVerifierV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::UpdateVerifier { .. } => {
            update_verifier(deps, info, UpdateVerifierV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::VerifyCompany { .. } => {
            verify_company(deps, info, VerifyCompanyV1::from_execute_msg(msg)?)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
