use super::constants::{
    ASSET_ID_KEY, COMPANY_ID_KEY, NEW_VALUE_KEY, OWNER_ADDRESS_KEY, REGISTRY_EVENT_TYPE_KEY,
    VERIFIER_ADDRESS_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    RegisterAsset,
    SetAssetAvailability,
    TransferAsset,
    RegisterCompany,
    AddVerifier,
    UpdateVerifier,
    VerifyCompany,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::RegisterAsset => "register_asset",
            EventType::SetAssetAvailability => "set_asset_availability",
            EventType::TransferAsset => "transfer_asset",
            EventType::RegisterCompany => "register_company",
            EventType::AddVerifier => "add_verifier",
            EventType::UpdateVerifier => "update_verifier",
            EventType::VerifyCompany => "verify_company",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(REGISTRY_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_asset_event(event_type: EventType, asset_id: u64) -> Self {
        Self::new(event_type).set_asset_id(asset_id)
    }

    pub fn for_company_event(event_type: EventType, company_id: u64) -> Self {
        Self::new(event_type).set_company_id(company_id)
    }

    pub fn set_asset_id(mut self, asset_id: u64) -> Self {
        self.attributes
            .push((ASSET_ID_KEY.into(), asset_id.to_string()));
        self
    }

    pub fn set_company_id(mut self, company_id: u64) -> Self {
        self.attributes
            .push((COMPANY_ID_KEY.into(), company_id.to_string()));
        self
    }

    pub fn set_owner<T: Into<String>>(mut self, owner_address: T) -> Self {
        self.attributes
            .push((OWNER_ADDRESS_KEY.into(), owner_address.into()));
        self
    }

    pub fn set_verifier<T: Into<String>>(mut self, verifier_address: T) -> Self {
        self.attributes
            .push((VERIFIER_ADDRESS_KEY.into(), verifier_address.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
