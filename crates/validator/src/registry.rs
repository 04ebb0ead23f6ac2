//! Rule registry
//!
//! Maps rule names, as a form declares them (`"ssn"`), to validators. The
//! registry owns the `perform` step: absent and empty values are skipped
//! before a rule ever runs.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::combinators::SkipEmpty;
use crate::error::RuleError;
use crate::foundation::{Validate, ValidatorMetadata};
use crate::validators::Ssn;

/// A string rule shared between registries and threads.
pub type SharedRule = Arc<dyn Validate<Input = str> + Send + Sync>;

/// Name of the SSN rule in a default registry.
pub const SSN_RULE: &str = "ssn";

/// Registry of named string rules.
///
/// # Examples
///
/// ```
/// use idcheck_validator::registry::RuleRegistry;
///
/// let registry = RuleRegistry::with_defaults();
/// assert!(registry.perform("ssn", Some("123-45-6789")).is_ok());
/// assert!(registry.perform("ssn", None).is_ok());
/// assert!(registry.perform("ssn", Some("12345")).is_err());
/// ```
#[derive(Default, Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, SharedRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in rules with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .rules
            .insert(SSN_RULE.to_owned(), Arc::new(Ssn::default()));
        registry
    }

    /// Registers a rule under a name.
    pub fn register<V>(&mut self, name: impl Into<String>, rule: V) -> Result<(), RuleError>
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.register_shared(name, Arc::new(rule))
    }

    /// Registers an already shared rule under a name.
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        rule: SharedRule,
    ) -> Result<(), RuleError> {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(RuleError::AlreadyRegistered { name });
        }
        debug!(rule = %name, validator = %rule.metadata().name, "registering rule");
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Replaces the rule under a name, returning the previous one.
    pub fn replace<V>(&mut self, name: impl Into<String>, rule: V) -> Option<SharedRule>
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(rule = %name, "replacing rule");
        self.rules.insert(name, Arc::new(rule))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<SharedRule> {
        self.rules.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Metadata of every rule, sorted by rule name.
    #[must_use]
    pub fn describe(&self) -> Vec<(&str, ValidatorMetadata)> {
        self.names()
            .into_iter()
            .filter_map(|name| self.rules.get(name).map(|rule| (name, rule.metadata())))
            .collect()
    }

    /// Runs a rule against a field value.
    ///
    /// `None` and `""` pass without running the rule.
    pub fn perform(&self, name: &str, value: Option<&str>) -> Result<(), RuleError> {
        let Some(rule) = self.rules.get(name) else {
            warn!(rule = %name, "perform called for unknown rule");
            return Err(RuleError::UnknownRule {
                name: name.to_owned(),
            });
        };

        SkipEmpty::new(rule.as_ref())
            .validate(value.unwrap_or_default())
            .map_err(|source| RuleError::Validation {
                rule: name.to_owned(),
                source,
            })
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
