use cosmwasm_std::{Addr, StdError, Storage};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::asset::{Asset, AssetInput};
use crate::core::types::company::{Company, CompanyInput};
use crate::core::types::verifier_detail::VerifierDetail;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

pub const STATE: Item<State> = Item::new("state");

// Asset registry storage
const ASSET_COUNTER: Item<u64> = Item::new("asset_counter");
const ASSETS: Map<u64, Asset> = Map::new("asset_records");

// Lessee verification registry storage
const COMPANY_COUNTER: Item<u64> = Item::new("company_counter");
const COMPANIES: Map<u64, Company> = Map::new("company_records");
const VERIFIERS: Map<&Addr, VerifierDetail> = Map::new("verifier_records");

/// The contract-wide configuration, created once during instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    /// The root name that the contract is known by on the chain.
    pub base_contract_name: String,
    /// The only account allowed to add or update verifiers.
    pub contract_owner: Addr,
}
impl State {
    pub fn new<S: Into<String>>(base_contract_name: S, contract_owner: Addr) -> State {
        State {
            base_contract_name: base_contract_name.into(),
            contract_owner,
        }
    }
}

/// Increments a counter and returns the incremented value.  Counters begin at zero, so the first
/// value produced is always 1.
fn next_id(storage: &mut dyn Storage, counter: &Item<u64>, counter_name: &str) -> ContractResult<u64> {
    let next = counter
        .may_load(storage)?
        .unwrap_or_default()
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err(format!("{} overflowed", counter_name)))?;
    counter.save(storage, &next)?;
    next.to_ok()
}

/// Assigns the next asset id and stores a new [Asset] owned by the given account.
///
/// # Parameters
///
/// * `storage` A mutable reference to the contract's internal storage.
/// * `input` The descriptive values of the asset.
/// * `owner` The account that will own the asset.
pub fn insert_asset(
    storage: &mut dyn Storage,
    input: AssetInput,
    owner: Addr,
) -> ContractResult<Asset> {
    let id = next_id(storage, &ASSET_COUNTER, "asset counter")?;
    let asset = Asset::new(id, input, owner);
    ASSETS.save(storage, id, &asset)?;
    asset.to_ok()
}

pub fn may_load_asset(storage: &dyn Storage, asset_id: u64) -> ContractResult<Option<Asset>> {
    ASSETS.may_load(storage, asset_id)?.to_ok()
}

/// Loads an existing [Asset], returning an [AssetNotFound](crate::core::error::ContractError::AssetNotFound)
/// error if no asset has the given id.
pub fn load_asset(storage: &dyn Storage, asset_id: u64) -> ContractResult<Asset> {
    match may_load_asset(storage, asset_id)? {
        Some(asset) => asset.to_ok(),
        None => ContractError::AssetNotFound { asset_id }.to_err(),
    }
}

/// Overwrites a previously-inserted [Asset] in place.  The id is never reassigned.
pub fn replace_asset(storage: &mut dyn Storage, asset: &Asset) -> ContractResult<()> {
    if !ASSETS.has(storage, asset.id) {
        return ContractError::AssetNotFound { asset_id: asset.id }.to_err();
    }
    ASSETS.save(storage, asset.id, asset)?;
    Ok(())
}

/// Assigns the next company id and stores a new, unverified [Company] administered by the given
/// account.
pub fn insert_company(
    storage: &mut dyn Storage,
    input: CompanyInput,
    admin: Addr,
) -> ContractResult<Company> {
    let id = next_id(storage, &COMPANY_COUNTER, "company counter")?;
    let company = Company::new(id, input, admin);
    COMPANIES.save(storage, id, &company)?;
    company.to_ok()
}

pub fn may_load_company(storage: &dyn Storage, company_id: u64) -> ContractResult<Option<Company>> {
    COMPANIES.may_load(storage, company_id)?.to_ok()
}

pub fn load_company(storage: &dyn Storage, company_id: u64) -> ContractResult<Company> {
    match may_load_company(storage, company_id)? {
        Some(company) => company.to_ok(),
        None => ContractError::CompanyNotFound { company_id }.to_err(),
    }
}

pub fn replace_company(storage: &mut dyn Storage, company: &Company) -> ContractResult<()> {
    if !COMPANIES.has(storage, company.id) {
        return ContractError::CompanyNotFound {
            company_id: company.id,
        }
        .to_err();
    }
    COMPANIES.save(storage, company.id, company)?;
    Ok(())
}

pub fn may_load_verifier(
    storage: &dyn Storage,
    address: &Addr,
) -> ContractResult<Option<VerifierDetail>> {
    VERIFIERS.may_load(storage, address)?.to_ok()
}

/// Inserts or overwrites the record for the verifier's address.
pub fn upsert_verifier(storage: &mut dyn Storage, verifier: &VerifierDetail) -> ContractResult<()> {
    VERIFIERS.save(storage, &verifier.address, verifier)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Addr;
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::state::{
        insert_asset, insert_company, load_asset, load_company, may_load_asset,
        may_load_company, may_load_verifier, replace_asset, replace_company, upsert_verifier,
    };
    use crate::core::types::asset::{Asset, AssetInput};
    use crate::core::types::company::{Company, CompanyInput};
    use crate::core::types::verifier_detail::VerifierDetail;

    fn test_asset_input() -> AssetInput {
        AssetInput::new("Crane", "CR300", "Liebherr", 2023, "LIE345678")
    }

    #[test]
    fn test_asset_ids_increment_from_one() {
        let mut deps = mock_dependencies(&[]);
        for expected_id in 1..=3 {
            let asset = insert_asset(
                deps.as_mut().storage,
                test_asset_input(),
                Addr::unchecked("owner"),
            )
            .expect("inserting an asset should succeed");
            assert_eq!(
                expected_id, asset.id,
                "asset ids should be assigned sequentially starting at 1",
            );
        }
    }

    #[test]
    fn test_asset_and_company_counters_are_independent() {
        let mut deps = mock_dependencies(&[]);
        insert_asset(
            deps.as_mut().storage,
            test_asset_input(),
            Addr::unchecked("owner"),
        )
        .unwrap();
        insert_asset(
            deps.as_mut().storage,
            test_asset_input(),
            Addr::unchecked("owner"),
        )
        .unwrap();
        let company = insert_company(
            deps.as_mut().storage,
            CompanyInput::new("ABC Construction", "123 Builder St", "LIC123456"),
            Addr::unchecked("admin"),
        )
        .unwrap();
        assert_eq!(
            1, company.id,
            "the company counter should not be affected by asset registration",
        );
    }

    #[test]
    fn test_missing_records_load_as_none() {
        let deps = mock_dependencies(&[]);
        assert!(
            may_load_asset(deps.as_ref().storage, 1).unwrap().is_none(),
            "no asset should exist in empty storage",
        );
        assert!(
            may_load_company(deps.as_ref().storage, 1).unwrap().is_none(),
            "no company should exist in empty storage",
        );
        assert!(
            may_load_verifier(deps.as_ref().storage, &Addr::unchecked("verifier"))
                .unwrap()
                .is_none(),
            "no verifier should exist in empty storage",
        );
    }

    #[test]
    fn test_missing_records_fail_strict_loads() {
        let deps = mock_dependencies(&[]);
        let error = load_asset(deps.as_ref().storage, 999).unwrap_err();
        assert!(
            matches!(error, ContractError::AssetNotFound { asset_id: 999 }),
            "expected the asset not found error, but got: {:?}",
            error,
        );
        let error = load_company(deps.as_ref().storage, 999).unwrap_err();
        assert!(
            matches!(error, ContractError::CompanyNotFound { company_id: 999 }),
            "expected the company not found error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_replace_requires_existing_record() {
        let mut deps = mock_dependencies(&[]);
        let error = replace_asset(
            deps.as_mut().storage,
            &Asset::new(5, test_asset_input(), Addr::unchecked("owner")),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::AssetNotFound { asset_id: 5 }),
            "replacing an asset that was never inserted should fail, but got: {:?}",
            error,
        );
        let error = replace_company(
            deps.as_mut().storage,
            &Company::new(
                5,
                CompanyInput::new("name", "address", "license"),
                Addr::unchecked("admin"),
            ),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::CompanyNotFound { company_id: 5 }),
            "replacing a company that was never inserted should fail, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_replace_asset_persists_changes() {
        let mut deps = mock_dependencies(&[]);
        let mut asset = insert_asset(
            deps.as_mut().storage,
            test_asset_input(),
            Addr::unchecked("owner"),
        )
        .unwrap();
        asset.available = false;
        replace_asset(deps.as_mut().storage, &asset).expect("replacing the asset should succeed");
        let stored = load_asset(deps.as_ref().storage, asset.id).unwrap();
        assert_eq!(asset, stored, "the stored asset should reflect the replacement");
    }

    #[test]
    fn test_upsert_verifier_overwrites() {
        let mut deps = mock_dependencies(&[]);
        let address = Addr::unchecked("verifier");
        upsert_verifier(
            deps.as_mut().storage,
            &VerifierDetail::new(address.clone(), true),
        )
        .unwrap();
        upsert_verifier(
            deps.as_mut().storage,
            &VerifierDetail::new(address.clone(), false),
        )
        .unwrap();
        let verifier = may_load_verifier(deps.as_ref().storage, &address)
            .unwrap()
            .expect("the verifier should be stored");
        assert!(!verifier.active, "the second upsert should overwrite the first");
    }
}
