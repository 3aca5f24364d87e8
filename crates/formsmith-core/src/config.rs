//! Builder configuration.
//!
//! Defaults give an unbounded history and ids of the form `field_<n>`.
//! [`BuilderConfig::from_env`] lets a host override both:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FORMSMITH_MAX_HISTORY` | Undo steps retained; `0` or `unlimited` for no cap |
//! | `FORMSMITH_ID_PREFIX` | Prefix for generated field ids |

use crate::error::BuilderError;

/// Environment variable for the history cap.
pub const ENV_MAX_HISTORY: &str = "FORMSMITH_MAX_HISTORY";
/// Environment variable for the generated id prefix.
pub const ENV_ID_PREFIX: &str = "FORMSMITH_ID_PREFIX";

const DEFAULT_ID_PREFIX: &str = "field";

/// Configuration for a [`FormBuilder`](crate::builder::FormBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Maximum number of undo steps kept. `None` keeps everything.
    pub max_history: Option<usize>,
    /// Prefix for generated field ids.
    pub id_prefix: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_history: None,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl BuilderConfig {
    #[must_use]
    pub fn with_max_history(mut self, max_history: Option<usize>) -> Self {
        self.max_history = max_history;
        self
    }

    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, BuilderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` (a stand-in for the environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BuilderError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_HISTORY) {
            config.max_history = parse_max_history(&raw)?;
        }

        if let Some(raw) = lookup(ENV_ID_PREFIX) {
            let prefix = raw.trim();
            if prefix.is_empty() {
                return Err(BuilderError::InvalidConfig {
                    key: ENV_ID_PREFIX,
                    value: raw,
                });
            }
            config.id_prefix = prefix.to_string();
        }

        Ok(config)
    }
}

fn parse_max_history(raw: &str) -> Result<Option<usize>, BuilderError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("unlimited") {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(BuilderError::InvalidConfig {
            key: ENV_MAX_HISTORY,
            value: raw.to_string(),
        }),
    }
}
