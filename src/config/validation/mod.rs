//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: GatewayConfig and ServerConfig
//! - `storage_validators`: StorageConfig, DatabaseConfig and RedisConfig
//! - `cache_validators`: CacheConfig
//! - `tests`: Test suite for all validators

mod cache_validators;
mod config_validators;
mod storage_validators;
mod trait_def;


pub use trait_def::Validate;
