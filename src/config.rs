//! Runtime configuration: the ambient tunables that shape how the engine allocates
//! and bounds itself, as distinct from per-run machine data (transitions, accepting
//! states, step budget), which always comes from the input stream (see
//! [`crate::parser`]).
//!
//! Shaped like the reference crate's `Config`/`ConfigBuilder`: a plain struct with a
//! `new_default()`, a builder for overriding individual fields, and a `Display` that
//! renders large numbers with a locale-aware thousands separator via `num-format`.

use std::fmt::Display;
use std::sync::LazyLock;

use num_format::ToFormattedString;

use crate::accepting_set::DEFAULT_CAPACITY as ACCEPTING_SET_DEFAULT_CAPACITY;
use crate::toml::ConfigToml;

/// Minimum cell count a tape half is grown to the first time it is touched.
pub const TAPE_MIN_CAPACITY_DEFAULT: usize = 256;

/// Factor by which a tape half's backing buffer grows once it outgrows its current
/// capacity.
pub const TAPE_GROWTH_FACTOR: usize = 4;

/// Default bound on the Configuration Queue; exceeding it is a fatal
/// [`crate::error::EngineError::QueueOverflow`], not a silent truncation.
pub const QUEUE_CAPACITY_DEFAULT: usize = 1_000_000;

/// Default bound on how large a state identifier the parser will accept.
pub const MAX_STATES_DEFAULT: u32 = 1_000_000;

/// Read `config.toml` only once.
pub static CONFIG_TOML: LazyLock<ConfigToml> = LazyLock::new(ConfigToml::read_toml);

/// Ambient tunables for one process run. Immutable once built; use
/// [`RuntimeConfig::builder_from_config`] to derive a variant.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Largest state identifier the parser will accept before rejecting the machine.
    max_states: u32,
    /// Minimum cell capacity the right tape half is grown to on first write.
    tape_initial_capacity: usize,
    /// Minimum cell capacity the left tape half is grown to on first write.
    tape_left_min_capacity: usize,
    /// Maximum number of in-flight configurations the Configuration Queue may hold.
    queue_capacity: usize,
    /// Capacity the Accepting Set is pre-allocated with; it grows past this freely.
    accepting_set_initial_capacity: usize,
    /// Factor a tape half's backing buffer grows by once it outgrows its current
    /// capacity.
    growth_factor: usize,
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::new()
    }

    pub fn builder_from_config(config: &RuntimeConfig) -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::new_config(*config)
    }

    /// Default values, also used by tests that don't care about tuning.
    pub fn new_default() -> Self {
        Self {
            max_states: MAX_STATES_DEFAULT,
            tape_initial_capacity: TAPE_MIN_CAPACITY_DEFAULT,
            tape_left_min_capacity: TAPE_MIN_CAPACITY_DEFAULT,
            queue_capacity: QUEUE_CAPACITY_DEFAULT,
            accepting_set_initial_capacity: ACCEPTING_SET_DEFAULT_CAPACITY,
            growth_factor: TAPE_GROWTH_FACTOR,
        }
    }

    /// Builds a `RuntimeConfig` from the process-wide `config.toml`, falling back to
    /// defaults for any field the file doesn't set.
    pub fn from_config_toml() -> Self {
        Self::from_config_toml_value(&CONFIG_TOML)
    }

    /// Builds a `RuntimeConfig` from an explicit `config.toml` path, for the
    /// driver's `--config` override.
    pub fn from_config_toml_at(path: &std::path::Path) -> Self {
        Self::from_config_toml_value(&ConfigToml::read_toml_at(path))
    }

    fn from_config_toml_value(config_toml: &ConfigToml) -> Self {
        RuntimeConfigBuilder::new()
            .max_states(config_toml.max_states())
            .tape_initial_capacity(config_toml.tape_initial_capacity())
            .tape_left_min_capacity(config_toml.tape_left_min_capacity())
            .queue_capacity(config_toml.queue_capacity())
            .accepting_set_initial_capacity(config_toml.accepting_set_initial_capacity())
            .growth_factor(config_toml.growth_factor())
            .build()
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

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new_default()
    }
}

#[derive(Default)]
pub struct RuntimeConfigBuilder {
    config: RuntimeConfig,
    max_states: Option<u32>,
    tape_initial_capacity: Option<usize>,
    tape_left_min_capacity: Option<usize>,
    queue_capacity: Option<usize>,
    accepting_set_initial_capacity: Option<usize>,
    growth_factor: Option<usize>,
}

impl RuntimeConfigBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::new_default(),
            ..Default::default()
        }
    }

    fn new_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn max_states(mut self, value: u32) -> Self {
        self.max_states = Some(value);
        self
    }

    pub fn tape_initial_capacity(mut self, value: usize) -> Self {
        self.tape_initial_capacity = Some(value);
        self
    }

    pub fn tape_left_min_capacity(mut self, value: usize) -> Self {
        self.tape_left_min_capacity = Some(value);
        self
    }

    pub fn queue_capacity(mut self, value: usize) -> Self {
        self.queue_capacity = Some(value);
        self
    }

    pub fn accepting_set_initial_capacity(mut self, value: usize) -> Self {
        self.accepting_set_initial_capacity = Some(value);
        self
    }

    pub fn growth_factor(mut self, value: usize) -> Self {
        self.growth_factor = Some(value);
        self
    }

    pub fn build(self) -> RuntimeConfig {
        RuntimeConfig {
            max_states: self.max_states.unwrap_or(self.config.max_states),
            tape_initial_capacity: self
                .tape_initial_capacity
                .unwrap_or(self.config.tape_initial_capacity),
            tape_left_min_capacity: self
                .tape_left_min_capacity
                .unwrap_or(self.config.tape_left_min_capacity),
            queue_capacity: self.queue_capacity.unwrap_or(self.config.queue_capacity),
            accepting_set_initial_capacity: self
                .accepting_set_initial_capacity
                .unwrap_or(self.config.accepting_set_initial_capacity),
            growth_factor: self.growth_factor.unwrap_or(self.config.growth_factor),
        }
    }
}

impl Display for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let locale = user_locale();
        write!(
            f,
            "max states: {}, queue capacity: {}, tape initial capacity (right/left): {}/{}, tape growth factor: {}, accepting set initial capacity: {}",
            self.max_states.to_formatted_string(&locale),
            self.queue_capacity.to_formatted_string(&locale),
            self.tape_initial_capacity.to_formatted_string(&locale),
            self.tape_left_min_capacity.to_formatted_string(&locale),
            self.growth_factor.to_formatted_string(&locale),
            self.accepting_set_initial_capacity
                .to_formatted_string(&locale),
        )
    }
}

pub fn user_locale() -> num_format::Locale {
    num_format::Locale::en
}
