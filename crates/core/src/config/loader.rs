use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from an optional file with environment variable overrides.
///
/// Layers, lowest precedence first: built-in defaults, the TOML file,
/// `MULTISUBS_`-prefixed variables (`MULTISUBS_FEED__URL` sets `feed.url`),
/// and the bare `PORT` variable which sets `server.port`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed("MULTISUBS_").split("__"))
        .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
