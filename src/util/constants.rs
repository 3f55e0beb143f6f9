// Execution output attributes.  All should be prefixed with "registry_" to make them easy to
// discern when observed in the event stream

//////////////////////////////////////////
// Asset registration output attributes //
//////////////////////////////////////////

/// Value = Asset ID (u64)
pub const ASSET_ID_KEY: &str = "registry_asset_id";
/// Value = The address that owns the asset after the event occurred (String)
pub const OWNER_ADDRESS_KEY: &str = "registry_owner_address";

///////////////////////////////////////////
// Lessee verification output attributes //
///////////////////////////////////////////

/// Value = Company ID (u64)
pub const COMPANY_ID_KEY: &str = "registry_company_id";
/// Value = The address of the verifier associated with the event (String)
pub const VERIFIER_ADDRESS_KEY: &str = "registry_verifier_address";

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const REGISTRY_EVENT_TYPE_KEY: &str = "registry_event_type";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "registry_new_value";
