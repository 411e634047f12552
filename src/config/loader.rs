// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::config::LogLevel;
use crate::errors::ConfigError;
use crate::traits::{ControllerEndpoint, Credentials};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

/// Service configuration.
///
/// Built from defaults, then an optional YAML file, then environment
/// variables, each layer overriding the one before.
///
/// # Example
/// ```yaml
/// port: 9097
/// log_level: INFO
/// redfish:
///   host: 10.46.61.142
///   username: root
///   password: calvin
///   verify_tls: false
///   timeout_seconds: 30
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub redfish: RedfishConfig,
}

/// Connection settings for the management controller.
///
/// `host`, `username` and `password` have no defaults; [`Config::endpoint`]
/// reports whichever is missing.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RedfishConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub verify_tls: bool,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: default_log_level(),
            redfish: RedfishConfig::default(),
        }
    }
}

impl Default for RedfishConfig {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            verify_tls: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl std::fmt::Debug for RedfishConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedfishConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("verify_tls", &self.verify_tls)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Controller address and credentials; fails on the first missing one.
    pub fn endpoint(&self) -> Result<ControllerEndpoint, ConfigError> {
        let host = required(&self.redfish.host, ENV_REDFISH_HOST)?;
        let username = required(&self.redfish.username, ENV_REDFISH_USERNAME)?;
        let password = required(&self.redfish.password, ENV_REDFISH_PASSWORD)?;
        Ok(ControllerEndpoint::new(host, Credentials::new(username, password)))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.redfish.timeout_seconds)
    }

    /// Effective level, and whether the configured value was recognized.
    pub fn log_level(&self) -> (LogLevel, bool) {
        LogLevel::parse_or_default(&self.log_level)
    }
}

fn required(value: &Option<String>, env_var: &'static str) -> Result<String, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingField { env_var }),
    }
}

/// Reads a YAML configuration file.
pub fn read_config_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads configuration from `path` (or `MSG_PARSER_CONFIG`) and the process environment.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_config_from(path, &env)
}

/// Same as [`load_config`] with an explicit environment, and validates that
/// the controller endpoint is complete.
pub fn load_config_from(
    path: Option<&Path>,
    env: &HashMap<String, String>,
) -> Result<Config, ConfigError> {
    let file = path
        .map(Path::to_path_buf)
        .or_else(|| env.get(ENV_CONFIG_FILE).filter(|p| !p.is_empty()).map(Into::into));

    let mut config = match file {
        Some(file) => read_config_file(file)?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config, env)?;
    config.endpoint()?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, env: &HashMap<String, String>) -> Result<(), ConfigError> {
    let get = |key: &str| env.get(key).filter(|v| !v.is_empty());

    if let Some(port) = get(ENV_PORT) {
        config.port = parse_env(ENV_PORT, port, "a TCP port number")?;
    }
    if let Some(host) = get(ENV_REDFISH_HOST) {
        config.redfish.host = Some(host.clone());
    }
    if let Some(username) = get(ENV_REDFISH_USERNAME) {
        config.redfish.username = Some(username.clone());
    }
    if let Some(password) = get(ENV_REDFISH_PASSWORD) {
        config.redfish.password = Some(password.clone());
    }
    if let Some(verify) = get(ENV_REDFISH_VERIFY_TLS) {
        config.redfish.verify_tls = parse_bool(ENV_REDFISH_VERIFY_TLS, verify)?;
    }
    if let Some(timeout) = get(ENV_REDFISH_TIMEOUT) {
        config.redfish.timeout_seconds = parse_env(ENV_REDFISH_TIMEOUT, timeout, "a number of seconds")?;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.log_level = level.clone();
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "true or false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn controller_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_REDFISH_HOST, "10.46.61.142"),
            (ENV_REDFISH_USERNAME, "root"),
            (ENV_REDFISH_PASSWORD, "calvin"),
        ]
    }

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_from_environment_only() {
        let config = load_config_from(None, &env(&controller_env())).unwrap();

        assert_eq!(config.port, 9097);
        assert_eq!(config.log_level, "DEBUG");
        assert_eq!(config.log_level(), (LogLevel::Debug, true));
        assert!(!config.redfish.verify_tls);
        assert_eq!(config.load_timeout(), Duration::from_secs(30));
        assert_eq!(config.listen_addr().port(), 9097);

        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.host, "10.46.61.142");
        assert_eq!(endpoint.credentials, Credentials::new("root", "calvin"));
    }

    #[test]
    fn test_environment_overrides() {
        let mut pairs = controller_env();
        pairs.extend([
            (ENV_PORT, "50051"),
            (ENV_REDFISH_VERIFY_TLS, "true"),
            (ENV_REDFISH_TIMEOUT, "5"),
            (ENV_LOG_LEVEL, "INFO"),
        ]);

        let config = load_config_from(None, &env(&pairs)).unwrap();
        assert_eq!(config.port, 50051);
        assert!(config.redfish.verify_tls);
        assert_eq!(config.redfish.timeout_seconds, 5);
        assert_eq!(config.log_level(), (LogLevel::Info, true));
    }

    #[test]
    fn test_unrecognized_log_level_falls_back_to_debug() {
        let mut pairs = controller_env();
        pairs.push((ENV_LOG_LEVEL, "CHATTY"));

        let config = load_config_from(None, &env(&pairs)).unwrap();
        assert_eq!(config.log_level, "CHATTY");
        assert_eq!(config.log_level(), (LogLevel::Debug, false));
    }

    #[test]
    fn test_missing_controller_settings() {
        struct TestCase {
            name: &'static str,
            pairs: Vec<(&'static str, &'static str)>,
            missing: &'static str,
        }

        let test_cases = vec![
            TestCase { name: "nothing set", pairs: vec![], missing: ENV_REDFISH_HOST },
            TestCase {
                name: "no username",
                pairs: vec![(ENV_REDFISH_HOST, "bmc"), (ENV_REDFISH_PASSWORD, "calvin")],
                missing: ENV_REDFISH_USERNAME,
            },
            TestCase {
                name: "blank password",
                pairs: vec![(ENV_REDFISH_HOST, "bmc"), (ENV_REDFISH_USERNAME, "root"), (ENV_REDFISH_PASSWORD, "")],
                missing: ENV_REDFISH_PASSWORD,
            },
        ];

        for case in test_cases {
            match load_config_from(None, &env(&case.pairs)) {
                Err(ConfigError::MissingField { env_var }) => {
                    assert_eq!(env_var, case.missing, "Test case '{}'", case.name)
                }
                other => panic!("Test case '{}': expected MissingField, got {:?}", case.name, other),
            }
        }
    }

    #[test]
    fn test_invalid_environment_values() {
        for (key, value) in [(ENV_PORT, "not-a-port"), (ENV_PORT, "70000"), (ENV_REDFISH_TIMEOUT, "-1"), (ENV_REDFISH_VERIFY_TLS, "maybe")] {
            let mut pairs = controller_env();
            pairs.push((key, value));

            match load_config_from(None, &env(&pairs)) {
                Err(ConfigError::InvalidValue { key: k, value: v, .. }) => {
                    assert_eq!(k, key);
                    assert_eq!(v, value);
                }
                other => panic!("{}={}: expected InvalidValue, got {:?}", key, value, other),
            }
        }
    }

    #[test]
    fn test_yaml_file_with_environment_on_top() {
        let file = yaml_file(
            "port: 10000\nlog_level: ERROR\nredfish:\n  host: bmc.lab\n  username: admin\n  password: secret\n  verify_tls: true\n",
        );

        let config = load_config_from(Some(file.path()), &env(&[(ENV_REDFISH_USERNAME, "root")])).unwrap();
        assert_eq!(config.port, 10000);
        assert_eq!(config.log_level(), (LogLevel::Error, true));
        assert_eq!(config.redfish.host.as_deref(), Some("bmc.lab"));
        assert_eq!(config.redfish.username.as_deref(), Some("root"));
        assert!(config.redfish.verify_tls);
        assert_eq!(config.redfish.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_config_file_from_environment() {
        let file = yaml_file("redfish:\n  host: bmc.lab\n  username: admin\n  password: secret\n");
        let path = file.path().to_string_lossy().to_string();

        let config = load_config_from(None, &env(&[(ENV_CONFIG_FILE, path.as_str())])).unwrap();
        assert_eq!(config.redfish.host.as_deref(), Some("bmc.lab"));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_bad_config_files() {
        let file = yaml_file("port: [1, 2]\n");
        assert!(matches!(
            load_config_from(Some(file.path()), &env(&controller_env())),
            Err(ConfigError::Parse { .. })
        ));

        let file = yaml_file("listen_port: 9097\n");
        assert!(matches!(
            load_config_from(Some(file.path()), &env(&controller_env())),
            Err(ConfigError::Parse { .. })
        ));

        assert!(matches!(
            load_config_from(Some(Path::new("/nonexistent/message-parser.yaml")), &env(&controller_env())),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = load_config_from(None, &env(&controller_env())).unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("root"));
        assert!(!rendered.contains("calvin"));
    }
}
