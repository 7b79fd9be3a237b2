//! End-to-end checks against real loopback listeners.

pub mod utils;

#[cfg(test)]
mod check;
