//! Core functionality for the gateway
//!
//! This module contains the caching layer the read path is built on.

pub mod cache;
