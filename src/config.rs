//! Configuration for the comparison runner.
//!
//! Loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `TREES_SIZES`: comma separated tree sizes to compare (default: `100,200,300,400,500`)
//! - `TREES_MIN_DEGREE`: minimum degree of the B-trees (default: `2`)
//! - `TREES_SEED`: seed for key generation (default: unset, seeded from the OS)
//!
//! # Invariants
//!
//! - `sizes` is never empty and holds no zero
//! - `min_degree` is at least 2

use std::fmt;

use crate::btree::MIN_DEGREE;

/// Settings for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// How many keys to build each compared pair of trees from, one table row per size.
    pub sizes: Vec<usize>,
    /// Minimum degree of every B-tree built.
    pub min_degree: usize,
    /// Seed for the key generator. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// Name of the variable.
        name: String,
        /// What is wrong with it.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            sizes: Self::DEFAULT_SIZES.to_vec(),
            min_degree: Self::DEFAULT_MIN_DEGREE,
            seed: None,
        }
    }
}

impl CompareConfig {
    /// Default tree sizes.
    pub const DEFAULT_SIZES: [usize; 5] = [100, 200, 300, 400, 500];
    /// Default B-tree minimum degree.
    pub const DEFAULT_MIN_DEGREE: usize = 2;

    const SIZES_VAR: &'static str = "TREES_SIZES";
    const MIN_DEGREE_VAR: &'static str = "TREES_MIN_DEGREE";
    const SEED_VAR: &'static str = "TREES_SEED";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, if `TREES_SIZES` lists no size
    /// or a zero size, or if `TREES_MIN_DEGREE` is below 2.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value, if set.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`][Self::from_env].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let sizes = match lookup(Self::SIZES_VAR) {
            Some(value) => Self::parse_sizes(&value)?,
            None => Self::DEFAULT_SIZES.to_vec(),
        };
        let min_degree = match lookup(Self::MIN_DEGREE_VAR) {
            Some(value) => Self::parse_min_degree(&value)?,
            None => Self::DEFAULT_MIN_DEGREE,
        };
        let seed = lookup(Self::SEED_VAR)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    name: Self::SEED_VAR.to_string(),
                    message: format!("'{value}' is not an unsigned integer"),
                })
            })
            .transpose()?;

        Ok(Self {
            sizes,
            min_degree,
            seed,
        })
    }

    fn parse_sizes(value: &str) -> Result<Vec<usize>, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            name: Self::SIZES_VAR.to_string(),
            message,
        };

        let sizes = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<usize>() {
                Ok(0) => Err(invalid("sizes must be positive".to_string())),
                Ok(size) => Ok(size),
                Err(_) => Err(invalid(format!("'{part}' is not a size"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sizes.is_empty() {
            return Err(invalid("at least one size is required".to_string()));
        }
        Ok(sizes)
    }

    fn parse_min_degree(value: &str) -> Result<usize, ConfigError> {
        match value.trim().parse::<usize>() {
            Ok(min_degree) if min_degree >= MIN_DEGREE => Ok(min_degree),
            _ => Err(ConfigError::InvalidValue {
                name: Self::MIN_DEGREE_VAR.to_string(),
                message: format!("'{value}' is not an integer of at least {MIN_DEGREE}"),
            }),
        }
    }
}
