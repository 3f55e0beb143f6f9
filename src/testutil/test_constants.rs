/// All addresses in these test constants were randomly generated for testing purposes
/// This address should be used for the contract owner address in state
pub const DEFAULT_CONTRACT_OWNER_ADDRESS: &str = "tp1grjeedyfmx0hujsgmqhdr6thjrye4hfesvh2lz";
/// Use this address in a circumstance that is testing a user registering and/or interacting with an asset or company
pub const DEFAULT_SENDER_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// Use this address in a circumstance that is testing a company verification
pub const DEFAULT_VERIFIER_ADDRESS: &str = "tp1dj50kvzsknr3ydypw3lt8f4dulrrncw4j626vk";
/// Use this address when an account that holds no role in the contract is required
pub const DEFAULT_STRANGER_ADDRESS: &str = "tp1kq5zx7w0x6jvavcay8tutqldync62r29gp8e68";
/// This is the default value that test_instantiate uses to create the contract's base name
pub const DEFAULT_CONTRACT_BASE_NAME: &str = "lease";
pub const DEFAULT_ASSET_NAME: &str = "Excavator";
pub const DEFAULT_ASSET_MODEL: &str = "EX200";
pub const DEFAULT_ASSET_MANUFACTURER: &str = "Caterpillar";
pub const DEFAULT_ASSET_YEAR: u32 = 2022;
pub const DEFAULT_ASSET_SERIAL_NUMBER: &str = "CAT123456";
pub const DEFAULT_COMPANY_NAME: &str = "ABC Construction";
pub const DEFAULT_COMPANY_ADDRESS: &str = "123 Builder St, Construction City";
pub const DEFAULT_COMPANY_LICENSE_NUMBER: &str = "LIC123456";
