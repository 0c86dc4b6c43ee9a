//! URL API 路由配置

use actix_web::web;

use super::helpers::{json_config, query_config};
use super::url_crud::{delete_url, get_url, list_urls, post_url, update_url};
use crate::api::services::health::health_check;

/// URL 管理路由 `/urls`
///
/// - GET /urls - 分页列出
/// - POST /urls - 创建
/// - GET /urls/{id} - 按 id 读取
/// - PUT, PATCH /urls/{id} - 部分更新
/// - DELETE /urls/{id} - 删除
pub fn urls_routes() -> actix_web::Scope {
    web::scope("/urls")
        .route("", web::get().to(list_urls))
        .route("", web::post().to(post_url))
        .route("/{id}", web::get().to(get_url))
        .route("/{id}", web::put().to(update_url))
        .route("/{id}", web::patch().to(update_url))
        .route("/{id}", web::delete().to(delete_url))
}

/// `/api` 作用域
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(health_check))
        .route("/health", web::head().to(health_check))
        .service(urls_routes())
}
