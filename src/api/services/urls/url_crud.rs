//! URL CRUD 接口

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::{instrument, trace};

use crate::services::{CreateUrlRequest, UrlService};
use crate::storage::UrlPatch;

use super::helpers::{api_result, created_response, error_from_shortener, parse_url_id};
use super::types::{ListUrlsQuery, UrlListResponse};

/// POST /api/urls
#[instrument(name = "create_url", skip_all)]
pub async fn post_url(
    body: web::Json<CreateUrlRequest>,
    service: web::Data<Arc<UrlService>>,
) -> impl Responder {
    match service.create_url(body.into_inner()).await {
        Ok(record) => created_response(record),
        Err(e) => error_from_shortener(&e),
    }
}

/// GET /api/urls?page=&limit=
#[instrument(name = "list_urls", skip_all)]
pub async fn list_urls(
    query: web::Query<ListUrlsQuery>,
    service: web::Data<Arc<UrlService>>,
) -> impl Responder {
    trace!("Listing URLs: {:?}", query);
    let result = service
        .list_urls(query.page, query.limit)
        .await
        .map(UrlListResponse::from);
    api_result(result)
}

/// GET /api/urls/{id}
#[instrument(name = "get_url", skip_all, fields(id = %path.as_str()))]
pub async fn get_url(
    path: web::Path<String>,
    service: web::Data<Arc<UrlService>>,
) -> impl Responder {
    let id = match parse_url_id(&path) {
        Ok(id) => id,
        Err(e) => return error_from_shortener(&e),
    };
    api_result(service.get_url(id).await)
}

/// PUT / PATCH /api/urls/{id}，均为部分更新
#[instrument(name = "update_url", skip_all, fields(id = %path.as_str()))]
pub async fn update_url(
    path: web::Path<String>,
    body: web::Json<UrlPatch>,
    service: web::Data<Arc<UrlService>>,
) -> impl Responder {
    let id = match parse_url_id(&path) {
        Ok(id) => id,
        Err(e) => return error_from_shortener(&e),
    };
    api_result(service.update_url(id, body.into_inner()).await)
}

/// DELETE /api/urls/{id}
#[instrument(name = "delete_url", skip_all, fields(id = %path.as_str()))]
pub async fn delete_url(
    path: web::Path<String>,
    service: web::Data<Arc<UrlService>>,
) -> impl Responder {
    let id = match parse_url_id(&path) {
        Ok(id) => id,
        Err(e) => return error_from_shortener(&e),
    };
    match service.delete_url(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_from_shortener(&e),
    }
}
