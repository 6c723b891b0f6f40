//! Shared utilities for Starknet Quest.

pub mod domain;
pub mod logging;

pub use domain::minify_domain;
pub use logging::{init_logging, LogFormat};
