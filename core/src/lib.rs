//! # isonline core
//!
//! Decides whether HTTP(S) endpoints are online.
//!
//! * **[`checker`]**: validates input, fans out one probe per target and reports the result.
//! * **[`probe`]**: the single request behind each verdict.

pub mod checker;
pub mod probe;

pub use checker::{Checker, check};
