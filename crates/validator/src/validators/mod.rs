//! Built-in validators
//!
//! - **Identifiers**: [`Ssn`], social security number layouts selected by
//!   [`SsnOptions`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use idcheck_validator::prelude::*;
//!
//! let rule = ssn(&SsnOptions::new().all())?.skip_empty();
//! assert!(rule.validate("123 45 6789").is_ok());
//! ```

pub mod ssn;

pub use ssn::{Pattern, Ssn, SsnFormat, SsnOptions, ssn};
