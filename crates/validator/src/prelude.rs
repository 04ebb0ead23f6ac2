//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use idcheck_validator::prelude::*;
//!
//! let rule = ssn(&SsnOptions::new().all())?.skip_empty();
//! ```

pub use crate::foundation::{
    Validate, ValidateExt, ValidationComplexity, ValidationError, ValidatorMetadata,
};

pub use crate::validators::{Pattern, Ssn, SsnFormat, SsnOptions, ssn};

pub use crate::combinators::{SkipEmpty, skip_empty};

pub use crate::config::RulesConfig;
pub use crate::error::RuleError;
pub use crate::registry::{RuleRegistry, SSN_RULE, SharedRule};
