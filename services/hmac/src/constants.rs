// Env values used by the env credential provider.
pub const APISIGN_KEY: &str = "APISIGN_KEY";
pub const APISIGN_IDENTIFIER: &str = "APISIGN_IDENTIFIER";
pub const APISIGN_BEARER: &str = "APISIGN_BEARER";
