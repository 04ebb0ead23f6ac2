//! Rule configuration loaded from JSON.
//!
//! A form declares its rules as an object keyed by rule name:
//!
//! ```json
//! { "ssn": { "format2": true, "with": "/^\\d{4}$/" } }
//! ```
//!
//! Configuration is validated eagerly: [`RulesConfig::into_registry`]
//! compiles every configured rule, so bad patterns surface at load time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RuleError;
use crate::registry::{RuleRegistry, SSN_RULE};
use crate::validators::{Ssn, SsnOptions};

/// Options for every known rule. Rules left out are not registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<SsnOptions>,
}

impl RulesConfig {
    /// Parses configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses configuration from an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RuleError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds a registry holding every configured rule.
    pub fn into_registry(self) -> Result<RuleRegistry, RuleError> {
        let mut registry = RuleRegistry::new();
        if let Some(options) = &self.ssn {
            registry.register(SSN_RULE, Ssn::new(options)?)?;
        }
        debug!(rules = ?registry.names(), "rule configuration loaded");
        Ok(registry)
    }
}
