//! Service layer for business logic
//!
//! Short path allocation, URL orchestration over store and cache, and
//! dependency health checks.

pub mod health;
pub mod short_path;
mod url_service;

pub use health::{DependencyHealth, HealthReport, HealthService, HealthStatus};
pub use short_path::{ShortPathResolver, generate_short_path};
pub use url_service::*;
