pub mod error_code;
pub mod helpers;
pub mod routes;
pub mod types;
pub mod url_crud;

pub use error_code::ErrorCode;
pub use routes::{api_routes, urls_routes};
pub use types::{ApiResponse, ListUrlsQuery, UrlListResponse};
