//! Shared model for `isonline`: what gets checked, how, and how the result looks.

pub mod config;
pub mod error;
pub mod report;
pub mod target;
