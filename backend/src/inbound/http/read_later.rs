//! Read-later handlers backed by the visitor session.
//!
//! ```text
//! GET  /read-later   bookmarked posts
//! POST /read-later   post_id=4 toggles the bookmark and redirects to /
//! ```

use actix_web::{HttpResponse, http::header, web};
use serde_json::json;
use tracing::info;

use crate::domain::{Error, PostId, ToggleOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{ReadLaterResponse, ReadLaterToggleRequest};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn parse_post_id(raw: Option<&str>) -> Result<PostId, Error> {
    let raw = raw.map(str::trim).unwrap_or_default();
    raw.parse::<i64>().map(PostId::new).map_err(|_| {
        Error::invalid_request("post_id must be an integer")
            .with_details(json!({ "field": "post_id", "value": raw }))
    })
}

/// Bookmarked posts, ordered by id.
#[utoipa::path(
    get,
    path = "/read-later",
    responses(
        (status = 200, description = "Bookmarked posts", body = ReadLaterResponse),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["read-later"],
    operation_id = "readLater"
)]
pub async fn read_later(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ReadLaterResponse>> {
    let stored = state.read_later.stored_posts(&session.bookmarks()).await?;
    Ok(web::Json(stored.into()))
}

/// Add the post to the visitor's bookmarks, or remove it when present.
///
/// The identifier is not checked against storage; unknown ids are skipped
/// when the list is rendered.
#[utoipa::path(
    post,
    path = "/read-later",
    request_body(content = ReadLaterToggleRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Bookmark toggled", headers(("Location" = String, description = "Start page"))),
        (status = 400, description = "Missing or non-integer post_id", body = Error)
    ),
    tags = ["read-later"],
    operation_id = "toggleReadLater"
)]
pub async fn toggle_read_later(
    session: SessionContext,
    form: web::Form<ReadLaterToggleRequest>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_post_id(form.post_id.as_deref())?;
    let mut bookmarks = session.bookmarks();
    let outcome = bookmarks.toggle(post_id);
    session.persist_bookmarks(&bookmarks)?;
    info!(
        post_id = %post_id,
        saved = matches!(outcome, ToggleOutcome::Added),
        "read-later bookmark toggled"
    );
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}
