use actix_web::web;

pub mod health;
pub mod redirect;
pub mod urls;

pub use health::health_check;
pub use redirect::handle_redirect;
pub use urls::{ErrorCode, api_routes};

/// 注册全部路由：/api 下的管理接口在前，/{short_path} 重定向在最后
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes()).service(
        web::resource("/{short_path}")
            .route(web::get().to(handle_redirect))
            .route(web::head().to(handle_redirect)),
    );
}
