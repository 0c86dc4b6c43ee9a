//! url-shortener - short links with custom paths, metadata and expiration
//!
//! # Architecture
//! - `storage`: URL records, the store contract and the SeaORM backend
//! - `cache`: object cache backends (redis / moka / null) and the cache-aside policy
//! - `services`: short path allocation, URL orchestration, health checks
//! - `api`: HTTP handlers, routes and the response envelope
//! - `config`: Configuration management
//! - `runtime`: Startup wiring and server mode
//! - `system`: Logging

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
