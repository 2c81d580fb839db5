use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_FILE_ENV: &str = "RECO_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "config/recoservice";
const ENV_PREFIX: &str = "RECO";

/// Process wide settings, read once at startup and shared read-only with handlers
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct ServiceConfig {
    pub service_name: String,
    /// Number of items returned by every recommendations call
    pub k_recs: usize,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "reco_service".to_string(),
            k_recs: 10,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServiceConfig {
    /// Loads defaults, then the optional config file, then `RECO_*` environment variables
    pub fn load() -> anyhow::Result<Self> {
        let config_file =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&config_file)
    }

    pub fn load_from(config_file: &str) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("service_name", defaults.service_name)?
            .set_default("k_recs", defaults.k_recs as i64)?
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid service configuration")
    }
}

#[cfg(test)]
mod service_config_tests {
    use std::io::Write;

    use serial_test::serial;

    use crate::settings::ServiceConfig;

    const NO_SUCH_FILE: &str = "does/not/exist/recoservice";

    fn clear_env() {
        for var in ["RECO_K_RECS", "RECO_SERVICE_NAME", "RECO_HOST", "RECO_PORT"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_nothing_is_configured() {
        clear_env();
        let config = ServiceConfig::load_from(NO_SUCH_FILE).expect("Failed to load config");
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.k_recs, 10);
    }

    #[test]
    #[serial]
    fn test_environment_overrides_defaults() {
        clear_env();
        std::env::set_var("RECO_K_RECS", "5");
        std::env::set_var("RECO_PORT", "9000");
        let config = ServiceConfig::load_from(NO_SUCH_FILE);
        clear_env();

        let config = config.expect("Failed to load config");
        assert_eq!(config.k_recs, 5);
        assert_eq!(config.port, 9000);
        assert_eq!(config.service_name, "reco_service");
    }

    #[test]
    #[serial]
    fn test_negative_k_recs_is_rejected() {
        clear_env();
        std::env::set_var("RECO_K_RECS", "-1");
        let config = ServiceConfig::load_from(NO_SUCH_FILE);
        clear_env();

        assert!(config.is_err());
    }

    #[test]
    #[serial]
    fn test_file_then_environment() {
        clear_env();
        let path = std::env::temp_dir().join(format!("recoservice_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(file, "k_recs = 3\nservice_name = \"from_file\"").unwrap();
        drop(file);

        let from_file = ServiceConfig::load_from(path.to_str().unwrap());

        std::env::set_var("RECO_K_RECS", "7");
        let from_env = ServiceConfig::load_from(path.to_str().unwrap());
        clear_env();
        std::fs::remove_file(&path).unwrap();

        let from_file = from_file.expect("Failed to load config");
        assert_eq!(from_file.k_recs, 3);
        assert_eq!(from_file.service_name, "from_file");

        let from_env = from_env.expect("Failed to load config");
        assert_eq!(from_env.k_recs, 7);
        assert_eq!(from_env.service_name, "from_file");
    }
}
