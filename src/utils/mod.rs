//! Utility modules: build info, logging, persistence paths.

pub mod build_info;
pub mod logging;
pub mod persistence;
