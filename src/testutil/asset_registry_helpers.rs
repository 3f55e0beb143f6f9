use crate::{
    core::types::asset::AssetInput,
    execute::register_asset::{register_asset, RegisterAssetV1},
    util::aliases::DepsMutC,
};

use super::{
    test_constants::{
        DEFAULT_ASSET_MANUFACTURER, DEFAULT_ASSET_MODEL, DEFAULT_ASSET_NAME,
        DEFAULT_ASSET_SERIAL_NUMBER, DEFAULT_ASSET_YEAR,
    },
    test_utilities::{empty_mock_info, response_data},
};

pub fn default_asset_input() -> AssetInput {
    AssetInput::new(
        DEFAULT_ASSET_NAME,
        DEFAULT_ASSET_MODEL,
        DEFAULT_ASSET_MANUFACTURER,
        DEFAULT_ASSET_YEAR,
        DEFAULT_ASSET_SERIAL_NUMBER,
    )
}

/// Registers the default asset as the given sender and returns the newly-assigned asset id.
pub fn test_register_asset<S: Into<String>>(deps: DepsMutC, sender: S) -> u64 {
    let response = register_asset(
        deps,
        empty_mock_info(sender),
        RegisterAssetV1::new(default_asset_input()),
    )
    .expect("expected the default asset to register successfully");
    response_data(&response)
}
