// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use birthdaymd_core::{APP_NAME, CalendarOptions};

const CONFIG_ENV: &str = "BIRTHDAY_MD_CONFIG";

/// Load the configuration.
///
/// An explicit `path` wins over `$BIRTHDAY_MD_CONFIG`, which wins over the
/// file in the user config directory. Without any of them the defaults apply.
///
/// # Errors
/// Returns an error if the selected file cannot be read or parsed.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        match get_config_dir().map(|a| a.join(APP_NAME).join("config.toml")) {
            Some(config) if config.exists() => config,
            _ => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        }
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

/// Configuration for the birthday.md application.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options for the generated calendar.
    pub calendar: CalendarOptions,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}
