/// Port the gRPC server listens on unless `MSG_PARSER_PORT` says otherwise
pub const DEFAULT_PORT: u16 = 9097;
/// Upper bound on the startup catalog load, and on each Redfish request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Level used when `LOG_LEVEL` is unset or unrecognized
pub const DEFAULT_LOG_LEVEL: &str = "DEBUG";

pub const ENV_CONFIG_FILE: &str = "MSG_PARSER_CONFIG";
pub const ENV_PORT: &str = "MSG_PARSER_PORT";
pub const ENV_REDFISH_HOST: &str = "REDFISH_HOSTADDR";
pub const ENV_REDFISH_USERNAME: &str = "REDFISH_USERNAME";
pub const ENV_REDFISH_PASSWORD: &str = "REDFISH_PASSWORD";
pub const ENV_REDFISH_VERIFY_TLS: &str = "REDFISH_VERIFY_TLS";
pub const ENV_REDFISH_TIMEOUT: &str = "REDFISH_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
