//! Comment handlers.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use serde_json::Value;

use remark_core::domain::{Comment, CommentPayload, Page};
use remark_core::error::ValidationError;
use remark_shared::ApiResponse;
use remark_shared::dto::{CommentResponse, CountResponse, ListCommentsQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        content: comment.content,
        created_at: comment.created_at,
    }
}

/// Lowercased media type without parameters.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(media_type: &str) -> bool {
    media_type == "application/json" || media_type.ends_with("+json")
}

/// JSON bodies are parsed as structured payloads and `text/plain` bodies are
/// read as legacy text. Any other body (form data, no content type) is left
/// unparsed and looks like an empty object, which the pipeline rejects as
/// missing content. Undecodable JSON or text is treated the same way.
fn decode_payload(content_type: Option<&str>, body: &[u8]) -> CommentPayload {
    let unparsed = || CommentPayload::Json(Value::Object(Default::default()));

    match content_type.map(media_type).as_deref() {
        Some(media) if is_json(media) => serde_json::from_slice(body)
            .map(CommentPayload::Json)
            .unwrap_or_else(|_| unparsed()),
        Some("text/plain") => String::from_utf8(body.to_vec())
            .map(CommentPayload::Text)
            .unwrap_or_else(|_| unparsed()),
        _ => unparsed(),
    }
}

/// POST /comment
pub async fn create_comment(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let comment = state
        .comments
        .submit(decode_payload(content_type, &body))
        .await?;

    tracing::info!(comment_id = comment.id, "Comment created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(comment_response(comment))))
}

/// GET /comments?limit=&offset=
///
/// Unusable paging parameters fall back to defaults rather than failing.
pub async fn list_comments(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let query = web::Query::<ListCommentsQuery>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let page = Page::from_params(query.limit.as_deref(), query.offset.as_deref());

    let comments = state.comments.list(page).await?;
    let body: Vec<_> = comments.into_iter().map(comment_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /comment/{id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidId("comment"))?;

    let comment = state.comments.get(id).await?;
    Ok(HttpResponse::Ok().json(comment_response(comment)))
}

/// GET /comments/count
pub async fn count_comments(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.comments.count().await?;
    Ok(HttpResponse::Ok().json(CountResponse { count }))
}
