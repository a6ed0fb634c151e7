//! Platform utilities.
//!
//! - [`paths`]: Home directory expansion for configured paths

pub mod paths;

pub use paths::expand_tilde;
