//! Unified diff hunk parsing and CVS/RCS revision number algebra.
//!
//! - [`diff`] groups the body of a unified diff into hunks of add, remove,
//!   change and context blocks
//! - [`revision`] validates, compares, strips and walks dotted revision
//!   numbers such as `1.2.0.4`
//!
//! Both are pure functions of their input and safe to call from any thread.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod revision;
