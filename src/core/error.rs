use cosmwasm_std::StdError;
use thiserror::Error;

/// Coarse classification shared by every registry rule violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryErrorKind {
    NotFound,
    Unauthorized,
}

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Asset [{asset_id}] not found")]
    AssetNotFound { asset_id: u64 },

    #[error("Unauthorized: sender [{sender}] does not own asset [{asset_id}], owned by [{owner}]")]
    NotAssetOwner {
        asset_id: u64,
        sender: String,
        owner: String,
    },

    #[error("Unauthorized: sender [{sender}] is not the contract owner")]
    NotContractOwner { sender: String },

    #[error("Unauthorized: sender [{sender}] is not a registered verifier")]
    UnknownVerifier { sender: String },

    #[error("Unauthorized: verifier [{sender}] is not active")]
    InactiveVerifier { sender: String },

    #[error("Company [{company_id}] not found")]
    CompanyNotFound { company_id: u64 },

    #[error("Verifier [{verifier_address}] not found")]
    VerifierNotFound { verifier_address: String },
}
impl ContractError {
    /// The numeric code reported for registry rule violations.  Codes are scoped to their
    /// registry: the asset registry uses 1 and 2, while the lessee verification registry uses 1
    /// for both owner and verifier rejections.  Callers that need to tell those apart should match
    /// on the variant instead.
    pub fn code(&self) -> Option<u32> {
        match self {
            ContractError::AssetNotFound { .. } => Some(1),
            ContractError::NotAssetOwner { .. } => Some(2),
            ContractError::NotContractOwner { .. } => Some(1),
            ContractError::UnknownVerifier { .. } => Some(1),
            ContractError::InactiveVerifier { .. } => Some(2),
            ContractError::CompanyNotFound { .. } => Some(3),
            ContractError::VerifierNotFound { .. } => Some(4),
            _ => None,
        }
    }

    /// Classifies registry rule violations.  Returns `None` for framework and validation errors.
    pub fn kind(&self) -> Option<RegistryErrorKind> {
        match self {
            ContractError::AssetNotFound { .. }
            | ContractError::CompanyNotFound { .. }
            | ContractError::VerifierNotFound { .. } => Some(RegistryErrorKind::NotFound),
            ContractError::NotAssetOwner { .. }
            | ContractError::NotContractOwner { .. }
            | ContractError::UnknownVerifier { .. }
            | ContractError::InactiveVerifier { .. } => Some(RegistryErrorKind::Unauthorized),
            _ => None,
        }
    }
}
