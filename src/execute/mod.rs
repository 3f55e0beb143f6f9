//! Contains all execution routes used by the [contract file](crate::contract).
use crate::core::error::ContractError;
use crate::core::types::asset::Asset;
use crate::util::aliases::ContractResult;
use crate::util::traits::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Contains the functionality used by the [AddVerifier](crate::core::msg::ExecuteMsg::AddVerifier)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod add_verifier;
/// Contains the functionality used by the [RegisterAsset](crate::core::msg::ExecuteMsg::RegisterAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod register_asset;
/// Contains the functionality used by the [RegisterCompany](crate::core::msg::ExecuteMsg::RegisterCompany)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod register_company;
/// Contains the functionality used by the [SetAssetAvailability](crate::core::msg::ExecuteMsg::SetAssetAvailability)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod set_asset_availability;
/// Contains the functionality used by the [TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod transfer_asset;
/// Contains the functionality used by the [UpdateVerifier](crate::core::msg::ExecuteMsg::UpdateVerifier)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod update_verifier;
/// Contains the functionality used by the [VerifyCompany](crate::core::msg::ExecuteMsg::VerifyCompany)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod verify_company;

/// Rejects any sender that does not currently own the asset.
pub(crate) fn check_asset_owner(asset: &Asset, info: &MessageInfo) -> ContractResult<()> {
    if info.sender != asset.owner {
        ContractError::NotAssetOwner {
            asset_id: asset.id,
            sender: info.sender.to_string(),
            owner: asset.owner.to_string(),
        }
        .to_err()
    } else {
        Ok(())
    }
}
