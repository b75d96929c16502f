//! User handlers.

use actix_web::{HttpResponse, web};

use remark_core::domain::User;
use remark_core::error::ValidationError;
use remark_shared::ApiResponse;
use remark_shared::dto::{CountResponse, PopulatedUser, UserLookupRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        created_at: user.created_at,
    }
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let body: Vec<_> = users.into_iter().map(user_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /user/{id}
///
/// Responds with a one-element array, as existing clients expect.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidId("user"))?;

    let user = state.users.get(id).await?;
    Ok(HttpResponse::Ok().json([user_response(user)]))
}

/// POST /user with `{"id": n}`
pub async fn lookup_user(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    // A missing or unreadable body is treated as a request without an id.
    let request: UserLookupRequest = serde_json::from_slice(&body).unwrap_or_default();

    let user = state.users.lookup(request.id.as_ref()).await?;
    Ok(HttpResponse::Ok().json([user_response(user)]))
}

/// GET /users/count
pub async fn count_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.users.count().await?;
    Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// GET /populate
pub async fn populate(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.populate(state.populate_count).await?;
    let message = format!("Inserted {} users", users.len());
    tracing::info!(count = users.len(), "Random users inserted");

    let body: Vec<_> = users
        .into_iter()
        .map(|user| PopulatedUser {
            id: user.id,
            name: user.name,
        })
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(body, message)))
}
