//! Configuration management for the logitrack application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and edited through an interactive wizard. Every module is optional: fuel
//! parameters fall back to built-in defaults, the remote store module
//! enables synchronization with a hosted backend, and the home base module
//! provides a fixed coordinate used when no live location is supplied.

use crate::api::remote::RemoteConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Vehicle fuel parameters used when a job ends.
///
/// Session-scoped: the values are read at end time and baked into the
/// computed fuel cost, never persisted per job.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct FuelConfig {
    /// Distance covered per unit of fuel, in km per liter. Must be
    /// strictly positive; the wizard and CLI overrides enforce this.
    pub efficiency: f64,
    /// Fuel price in currency units per liter.
    pub price: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        FuelConfig { efficiency: 12.0, price: 1.5 }
    }
}

/// A fixed coordinate used when no live location is available.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HomeConfig {
    pub lat: f64,
    pub lon: f64,
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output, keeping the file
/// clean and letting new modules appear without breaking existing setups.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<FuelConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<HomeConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Fuel parameters with built-in defaults when unconfigured.
    pub fn fuel(&self) -> FuelConfig {
        self.fuel.unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select over the available modules and prompts for
    /// each selected one, pre-filling existing values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "fuel".to_string(),
                name: "Fuel".to_string(),
            },
            RemoteConfig::module(),
            ConfigModule {
                key: "home".to_string(),
                name: "Home base".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "fuel" => {
                    let default = config.fuel.unwrap_or_default();
                    msg_print!(Message::ConfigModuleFuel);
                    let mut efficiency: f64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptFuelEfficiency.to_string())
                        .default(default.efficiency)
                        .interact_text()?;
                    // A zero or negative efficiency would blow up the cost
                    // formula; silently reset to the stock default.
                    if efficiency <= 0.0 {
                        efficiency = FuelConfig::default().efficiency;
                    }
                    let price: f64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptFuelPrice.to_string())
                        .default(default.price)
                        .interact_text()?;
                    config.fuel = Some(FuelConfig { efficiency, price });
                }
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                "home" => {
                    let default = config.home.unwrap_or(HomeConfig { lat: 0.0, lon: 0.0 });
                    msg_print!(Message::ConfigModuleHome);
                    config.home = Some(HomeConfig {
                        lat: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHomeLat.to_string())
                            .default(default.lat)
                            .interact_text()?,
                        lon: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHomeLon.to_string())
                            .default(default.lon)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
