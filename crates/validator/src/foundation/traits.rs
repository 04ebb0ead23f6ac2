//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that wraps rules in combinators.

use crate::combinators::SkipEmpty;
use crate::foundation::{ValidationError, ValidatorMetadata};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so a rule only accepts what it can check.
/// All validators return `Result<(), ValidationError>` for a consistent API.
///
/// # Examples
///
/// ```
/// use idcheck_validator::foundation::{Validate, ValidationError};
///
/// struct FourDigits;
///
/// impl Validate for FourDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::invalid_format("four digits"))
///         }
///     }
/// }
///
/// assert!(FourDigits.validate("1234").is_ok());
/// assert!(FourDigits.validate("12a4").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Describes the validator for registries and tooling.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        (**self).metadata()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type.
pub trait ValidateExt: Validate + Sized {
    /// Skips validation for empty input.
    ///
    /// Empty values are the concern of a separate "required" rule, so a
    /// format rule wrapped this way treats `""` as valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use idcheck_validator::foundation::{Validate, ValidateExt};
    /// use idcheck_validator::validators::Ssn;
    ///
    /// let rule = Ssn::default().skip_empty();
    /// assert!(rule.validate("").is_ok());
    /// assert!(rule.validate("123-45-6789").is_ok());
    /// assert!(rule.validate("nope").is_err());
    /// ```
    fn skip_empty(self) -> SkipEmpty<Self>
    where
        Self: Validate<Input = str>,
    {
        SkipEmpty::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
