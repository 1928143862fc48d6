/// Application constants used throughout the application

/// The display name of the application (with proper casing)
pub const APP_NAME: &str = "User Portal";

/// The lowercase version for file names, directories, etc.
pub const APP_NAME_LOWERCASE: &str = "user-portal";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that forces debug logging on or off
pub const DEBUG_ENV_VAR: &str = "USER_PORTAL_DEBUG";

/// Name of the configuration file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Prefix of the "last modified" phrase
pub const LAST_MODIFIED_PREFIX: &str = "Last modified";

/// Alt text used for every avatar image
pub const AVATAR_ALT: &str = "avatar";
