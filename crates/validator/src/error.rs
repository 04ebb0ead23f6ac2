use crate::foundation::ValidationError;

/// Error type for building and dispatching rules.
///
/// Configuration problems are reported eagerly, when a rule is built, so a
/// constructed rule never fails for reasons other than the value itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A custom pattern could not be compiled or used an unsupported flag.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Rule configuration could not be parsed.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// No rule is registered under the given name.
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },

    /// A rule with the given name is already registered.
    #[error("rule already registered: `{name}`")]
    AlreadyRegistered { name: String },

    /// The value did not satisfy the rule.
    #[error("validation failed for rule `{rule}`: {source}")]
    Validation {
        rule: String,
        #[source]
        source: ValidationError,
    },
}

impl RuleError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "configuration",
            Self::InvalidConfiguration { .. } => "configuration",
            Self::UnknownRule { .. } => "lookup",
            Self::AlreadyRegistered { .. } => "lookup",
            Self::Validation { .. } => "validation",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
            Self::InvalidConfiguration { .. } => "RULE_INVALID_CONFIG",
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::AlreadyRegistered { .. } => "RULE_ALREADY_REGISTERED",
            Self::Validation { .. } => "RULE_VALIDATION",
        }
    }

    /// True for errors caused by configuration rather than input values.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.category() == "configuration"
    }

    /// The underlying validation failure, if this error carries one.
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration {
            reason: err.to_string(),
        }
    }
}
