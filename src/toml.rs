//! Very basic functionality to read and write the ambient tunables into a toml
//! configuration file. If `config.toml` is missing, one is created next to the
//! binary with default values rather than failing the run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::accepting_set::DEFAULT_CAPACITY as ACCEPTING_SET_DEFAULT_CAPACITY;
use crate::config::{
    MAX_STATES_DEFAULT, QUEUE_CAPACITY_DEFAULT, TAPE_GROWTH_FACTOR, TAPE_MIN_CAPACITY_DEFAULT,
};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConfigToml {
    #[serde(default = "default_max_states")]
    max_states: u32,

    #[serde(default = "default_tape_initial_capacity")]
    tape_initial_capacity: usize,

    #[serde(default = "default_tape_left_min_capacity")]
    tape_left_min_capacity: usize,

    #[serde(default = "default_queue_capacity")]
    queue_capacity: usize,

    #[serde(default = "default_accepting_set_initial_capacity")]
    accepting_set_initial_capacity: usize,

    #[serde(default = "default_growth_factor")]
    growth_factor: usize,
}

impl ConfigToml {
    pub fn read_toml() -> ConfigToml {
        Self::read_toml_at(Path::new(CONFIG_FILE))
    }

    /// Same read-or-create-default flow as [`Self::read_toml`], against an
    /// explicit path (the driver's `--config` flag).
    pub fn read_toml_at(path: &Path) -> ConfigToml {
        if path.exists() {
            let config_content =
                fs::read_to_string(path).expect("Config file {path:?} could not be read.");
            let config: ConfigToml = toml::from_str(&config_content)
                .expect("Config file {path:?} could not be parsed.");
            config
        } else {
            tracing::info!(file = %path.display(), "config file not found, creating one with default values");
            let default_config = ConfigToml::default();
            let toml_string = toml::to_string_pretty(&default_config)
                .expect("Failed to serialize default config");
            let write_result = fs::write(path, toml_string);
            if let Err(error) = write_result {
                tracing::warn!(
                    file = %path.display(),
                    %error,
                    "could not write default config file; continuing with default values"
                );
            }
            default_config
        }
    }

    pub fn max_states(&self) -> u32 {
        self.max_states
    }

    pub fn tape_initial_capacity(&self) -> usize {
        self.tape_initial_capacity
    }

    pub fn tape_left_min_capacity(&self) -> usize {
        self.tape_left_min_capacity
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    pub fn accepting_set_initial_capacity(&self) -> usize {
        self.accepting_set_initial_capacity
    }

    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }
}

impl Default for ConfigToml {
    fn default() -> Self {
        ConfigToml {
            max_states: default_max_states(),
            tape_initial_capacity: default_tape_initial_capacity(),
            tape_left_min_capacity: default_tape_left_min_capacity(),
            queue_capacity: default_queue_capacity(),
            accepting_set_initial_capacity: default_accepting_set_initial_capacity(),
            growth_factor: default_growth_factor(),
        }
    }
}

fn default_max_states() -> u32 {
    MAX_STATES_DEFAULT
}

fn default_tape_initial_capacity() -> usize {
    TAPE_MIN_CAPACITY_DEFAULT
}

fn default_tape_left_min_capacity() -> usize {
    TAPE_MIN_CAPACITY_DEFAULT
}

fn default_queue_capacity() -> usize {
    QUEUE_CAPACITY_DEFAULT
}

fn default_accepting_set_initial_capacity() -> usize {
    ACCEPTING_SET_DEFAULT_CAPACITY
}

fn default_growth_factor() -> usize {
    TAPE_GROWTH_FACTOR
}
