use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File consulted by [`RegistrarConfig::load`].
pub const CONFIG_FILE: &str = "Registrar.toml";

/// Prefix for environment overrides, e.g. `REGISTRAR_ADULT_AGE=21`.
pub const ENV_PREFIX: &str = "REGISTRAR_";

/// Eligibility bounds applied by a [`crate::Registrar`].
///
/// Layered from built-in defaults, then `Registrar.toml`, then
/// `REGISTRAR_*` environment variables, with later sources winning.
/// Every way of obtaining one, deserialization included, rejects
/// inconsistent bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRegistrarConfig")]
pub struct RegistrarConfig {
    min_id: i64,
    max_age: i32,
    adult_age: i32,
}

/// Bounds as read from a config source, before validation.
#[derive(Deserialize)]
#[serde(default)]
struct RawRegistrarConfig {
    min_id: i64,
    max_age: i32,
    adult_age: i32,
}

impl Default for RawRegistrarConfig {
    fn default() -> Self {
        let RegistrarConfig {
            min_id,
            max_age,
            adult_age,
        } = RegistrarConfig::default();
        Self {
            min_id,
            max_age,
            adult_age,
        }
    }
}

impl TryFrom<RawRegistrarConfig> for RegistrarConfig {
    type Error = Error;

    fn try_from(raw: RawRegistrarConfig) -> Result<Self> {
        Self::new(raw.min_id, raw.max_age, raw.adult_age)
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            min_id: 1,
            max_age: 120,
            adult_age: 18,
        }
    }
}

impl RegistrarConfig {
    /// Build a config directly, rejecting inconsistent bounds.
    pub fn new(min_id: i64, max_age: i32, adult_age: i32) -> Result<Self> {
        let config = Self {
            min_id,
            max_age,
            adult_age,
        };
        config.validate()?;
        Ok(config)
    }

    /// Smallest identifier that is structurally valid.
    pub fn min_id(&self) -> i64 {
        self.min_id
    }

    /// Oldest age that is still considered a plausible human age.
    pub fn max_age(&self) -> i32 {
        self.max_age
    }

    /// Age at which a candidate becomes eligible to vote.
    pub fn adult_age(&self) -> i32 {
        self.adult_age
    }

    /// The default provider stack, reading [`CONFIG_FILE`].
    pub fn figment() -> Figment {
        Self::figment_from(CONFIG_FILE)
    }

    /// The default provider stack, reading the given TOML file instead.
    /// A missing file contributes nothing.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate the config from [`RegistrarConfig::figment`].
    pub fn load() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        // Extract unvalidated first so bad bounds surface as `InvalidConfig`.
        let config = Self::try_from(figment.extract::<RawRegistrarConfig>()?)?;
        debug!(
            "Loaded registrar config: min_id={}, max_age={}, adult_age={}",
            config.min_id, config.max_age, config.adult_age
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.min_id < 1 {
            return Err(Error::InvalidConfig(format!(
                "`min_id` must be at least 1, got {}",
                self.min_id
            )));
        }
        if self.adult_age < 1 {
            return Err(Error::InvalidConfig(format!(
                "`adult_age` must be at least 1, got {}",
                self.adult_age
            )));
        }
        if self.adult_age > self.max_age {
            return Err(Error::InvalidConfig(format!(
                "`adult_age` ({}) exceeds `max_age` ({})",
                self.adult_age, self.max_age
            )));
        }
        Ok(())
    }
}
