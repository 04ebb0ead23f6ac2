//! SKIP_EMPTY combinator - runs a string rule only on non-empty input

use crate::foundation::{Validate, ValidationError, ValidatorMetadata};

/// Wraps a string validator so that empty input passes untouched.
///
/// This is the `perform` step of a field rule: presence is checked by a
/// separate "required" rule, format rules only look at values that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipEmpty<V> {
    pub(crate) inner: V,
}

impl<V> SkipEmpty<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for SkipEmpty<V>
where
    V: Validate<Input = str>,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            tracing::trace!("empty value, rule skipped");
            return Ok(());
        }
        self.inner.validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}

pub fn skip_empty<V>(validator: V) -> SkipEmpty<V>
where
    V: Validate<Input = str>,
{
    SkipEmpty::new(validator)
}
