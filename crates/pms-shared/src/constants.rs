//! Application-wide constants

pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;
pub const RESET_TOKEN_EXPIRY_MINUTES: i64 = 15;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const PROPERTY_CODE_PREFIX: &str = "PROP";
pub const PROPERTY_CODE_WIDTH: usize = 5;
