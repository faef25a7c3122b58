//! Error handling for the gateway
//!
//! This module defines the error type shared by the cache layer, the store and
//! the HTTP surface, plus its JSON rendering.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
