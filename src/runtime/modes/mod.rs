//! Mode routing
//!
//! Only the HTTP server mode exists; `generate-config` is handled in `main`.

pub mod server;

pub use server::run_server;
