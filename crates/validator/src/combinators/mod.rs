//! Combinators that change when or how a rule runs.

pub mod skip_empty;

pub use skip_empty::{SkipEmpty, skip_empty};
