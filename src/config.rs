use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::domain::validation_constants::test_runs;
use crate::error::Result;
use crate::infrastructure::log_messages::configuration;

const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "PRIME_FACTORS";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub properties: PropertySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

/// Tuning for randomized runs of the factorization laws
#[derive(Debug, Deserialize, Clone)]
pub struct PropertySettings {
    /// Cases generated per property
    pub cases: u32,
    /// Largest input a generator may produce
    pub max_input: i64,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_DIR))
    }

    /// Load settings with `config_dir` as the location of the optional files
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::layered(config_dir, &environment, environment_source())
    }

    fn layered(config_dir: &Path, environment: &str, variables: Environment) -> Result<Self> {
        debug!(?config_dir, %environment, "{}", configuration::LOADING_CONFIG);

        let file = |name: &str| {
            File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        let config = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default(
                "properties.cases",
                i64::from(test_runs::DEFAULT_PROPTEST_CASES),
            )?
            .set_default("properties.max_input", test_runs::DEFAULT_MAX_INPUT)?
            // Add configuration files if they exist
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            // Add environment variables with prefix
            .add_source(variables)
            .build()?;

        let settings: Self = config.try_deserialize()?;
        debug!("{}", configuration::CONFIG_LOADED);
        Ok(settings)
    }
}

fn environment_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Install the global tracing subscriber described by `settings`
///
/// Installing twice is not an error; the first subscriber stays in place.
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    match installed {
        Ok(()) => debug!("{}", configuration::SUBSCRIBER_INSTALLED),
        Err(_) => debug!("{}", configuration::SUBSCRIBER_ALREADY_INSTALLED),
    }
    Ok(())
}
