//! Configuration model, discovery, and validation for doccheck

mod config;

pub use config::*;

pub(crate) use doccheck_utils::error;
