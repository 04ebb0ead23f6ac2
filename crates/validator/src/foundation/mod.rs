//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//! - **Metadata**: [`ValidatorMetadata`], [`ValidationComplexity`]
//!
//! Validators are generic over their input type, so a string rule cannot be
//! handed a number by mistake:
//!
//! ```rust,ignore
//! impl Validate for Ssn {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```

pub mod error;
pub mod metadata;
pub mod traits;

pub use error::ValidationError;
pub use metadata::{ValidationComplexity, ValidatorMetadata};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a validator.
///
/// Convenience for one-off validations.
///
/// # Examples
///
/// ```
/// use idcheck_validator::foundation::validate_value;
/// use idcheck_validator::validators::Ssn;
///
/// assert!(validate_value("123-45-6789", &Ssn::default()).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
