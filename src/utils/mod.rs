//! Utility modules for the gateway

pub mod error;
pub mod logging;
