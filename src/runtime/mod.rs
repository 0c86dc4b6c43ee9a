//! Application lifecycle
//!
//! - `lifetime`: startup wiring (store, cache, service)
//! - `modes`: execution modes (HTTP server)

pub mod lifetime;
pub mod modes;
