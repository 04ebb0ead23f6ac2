//! # idcheck-validator
//!
//! Format rules for identification-number form fields.
//!
//! ## Quick Start
//!
//! ```
//! use idcheck_validator::prelude::*;
//!
//! // Accept every built-in SSN layout, skip empty fields.
//! let rule = ssn(&SsnOptions::new().all()).unwrap().skip_empty();
//! assert!(rule.validate("123-45-6789").is_ok());
//! assert!(rule.validate("123 45 6789").is_ok());
//! assert!(rule.validate("").is_ok());
//! assert!(rule.validate("12-345-6789").is_err());
//! ```
//!
//! ## Rules by name
//!
//! Forms refer to rules by name. A [`RuleRegistry`](registry::RuleRegistry)
//! built from [`RulesConfig`](config::RulesConfig) resolves names and runs
//! the `perform` step:
//!
//! ```
//! use idcheck_validator::config::RulesConfig;
//!
//! let registry = RulesConfig::from_json_str(r#"{ "ssn": { "format2": true } }"#)
//!     .and_then(RulesConfig::into_registry)
//!     .unwrap();
//! assert!(registry.perform("ssn", Some("123456789")).is_ok());
//! ```

pub mod combinators;
pub mod config;
pub mod error;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use error::RuleError;
