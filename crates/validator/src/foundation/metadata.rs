//! Validator metadata for introspection
//!
//! Rules expose a [`ValidatorMetadata`] so a registry can list what it
//! holds without running anything.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Metadata about a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorMetadata {
    /// Human-readable name of the validator.
    pub name: Cow<'static, str>,

    /// Optional description of what the validator checks.
    pub description: Option<Cow<'static, str>>,

    /// Computational complexity of one validation call.
    pub complexity: ValidationComplexity,

    /// Tags for categorization.
    pub tags: Vec<Cow<'static, str>>,
}

impl Default for ValidatorMetadata {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("Unknown"),
            description: None,
            complexity: ValidationComplexity::Constant,
            tags: Vec::new(),
        }
    }
}

impl ValidatorMetadata {
    /// Creates simple metadata with just a name.
    pub fn simple(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a tag to the metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Computational complexity classification for validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum ValidationComplexity {
    /// O(1): null checks, emptiness checks.
    #[default]
    Constant,

    /// O(n): length checks, anchored regex scans.
    Linear,

    /// Anything heavier, including unbounded user-supplied regexes.
    Expensive,
}

impl fmt::Display for ValidationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "O(1)"),
            Self::Linear => write!(f, "O(n)"),
            Self::Expensive => write!(f, "expensive"),
        }
    }
}
