//! Post listing, post detail and comment submission handlers.
//!
//! ```text
//! GET  /                 latest posts
//! GET  /posts            every post
//! GET  /posts/{slug}     detail with a blank comment form
//! POST /posts/{slug}     submit a comment (urlencoded)
//! ```

use actix_web::{HttpResponse, http::header, web};

use crate::domain::ports::CommentOutcome;
use crate::domain::{Error, Slug};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    CommentFormRequest, PostDetailResponse, PostListResponse,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Detail route of the post owning `slug`.
pub(crate) fn detail_location(slug: &Slug) -> String {
    format!("/posts/{slug}")
}

/// Route slugs that cannot be valid never match a post.
fn parse_slug(raw: &str) -> Result<Slug, Error> {
    Slug::new(raw).map_err(|_| Error::not_found(format!("no post with slug {raw}")))
}

/// Latest posts for the start page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Three most recent posts", body = PostListResponse),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["posts"],
    operation_id = "startingPage"
)]
pub async fn starting_page(state: web::Data<HttpState>) -> ApiResult<web::Json<PostListResponse>> {
    let posts = state.listing.latest_posts().await?;
    Ok(web::Json(posts.into()))
}

/// Every post, newest first.
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All posts", body = PostListResponse),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["posts"],
    operation_id = "allPosts"
)]
pub async fn all_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<PostListResponse>> {
    let posts = state.listing.all_posts().await?;
    Ok(web::Json(posts.into()))
}

/// Post detail with tags, comments and read-later status.
#[utoipa::path(
    get,
    path = "/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail", body = PostDetailResponse),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["posts"],
    operation_id = "postDetail"
)]
pub async fn post_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    slug: web::Path<String>,
) -> ApiResult<web::Json<PostDetailResponse>> {
    let slug = parse_slug(&slug)?;
    let detail = state
        .detail
        .post_detail(&slug, &session.bookmarks())
        .await?;
    Ok(web::Json(detail.into()))
}

/// Submit a comment. Redirects to the post on success; re-renders the detail
/// context with field errors otherwise.
#[utoipa::path(
    post,
    path = "/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body(content = CommentFormRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Comment stored", headers(("Location" = String, description = "Post detail route"))),
        (status = 200, description = "Form rejected", body = PostDetailResponse),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["posts"],
    operation_id = "submitComment"
)]
pub async fn submit_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    slug: web::Path<String>,
    form: web::Form<CommentFormRequest>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(&slug)?;
    let outcome = state
        .comments
        .submit_comment(&slug, &form.into_inner().into(), &session.bookmarks())
        .await?;
    Ok(match outcome {
        CommentOutcome::Accepted { slug, .. } => HttpResponse::Found()
            .insert_header((header::LOCATION, detail_location(&slug)))
            .finish(),
        CommentOutcome::Rejected(detail) => {
            HttpResponse::Ok().json(PostDetailResponse::from(*detail))
        }
    })
}
