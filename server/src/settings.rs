use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use store::Seed;

#[derive(Debug, Deserialize)]
pub struct Port(pub u16);

impl Default for Port {
    fn default() -> Self { Port(8080) }
}

#[derive(Debug, Deserialize, Default)]
pub struct ApiSettings {
    #[serde(default)]
    pub port: Port,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub __config_file: String,
    #[serde(default)]
    pub api: ApiSettings,
    /// Initial contents of the store. Seed data lives in the config file, the
    /// process resets to it on every restart.
    #[serde(default)]
    pub seed: Seed,
}

impl Settings {
    pub fn new(env: String) -> Result<Self, ConfigError> {
        let config_file = format!("config/{}.yaml", env);
        let s = Config::builder()
            .add_source(File::with_name(&config_file))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("QM"))
            .set_override("__config_file", config_file)?
            .build()?;
        s.try_deserialize()
    }
}
