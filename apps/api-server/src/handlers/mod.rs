//! HTTP handlers and route configuration.

mod comments;
mod health;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Comments
        .route("/comment", web::post().to(comments::create_comment))
        .route("/comment/{id}", web::get().to(comments::get_comment))
        .route("/comments", web::get().to(comments::list_comments))
        .route("/comments/count", web::get().to(comments::count_comments))
        // Users
        .route("/users", web::get().to(users::list_users))
        .route("/users/count", web::get().to(users::count_users))
        .route("/user/{id}", web::get().to(users::get_user))
        .route("/user", web::post().to(users::lookup_user))
        .route("/populate", web::get().to(users::populate))
        .default_service(web::to(route_not_found));
}

async fn route_not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::RouteNotFound)
}
