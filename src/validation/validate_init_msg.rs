use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::traits::ResultExtensions;

/// Ensures the init msg carries a usable base name and, when provided, a non-blank contract owner.
pub fn validate_init_msg(msg: &InitMsg) -> Result<(), ContractError> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.base_contract_name.trim().is_empty() {
        invalid_fields.push("base_contract_name: must not be blank".to_string());
    }
    if let Some(owner) = &msg.contract_owner {
        if owner.trim().is_empty() {
            invalid_fields.push("contract_owner: must not be blank when provided".to_string());
        }
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
