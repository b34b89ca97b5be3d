//! OpenAPI document for the blog routes.
//!
//! Served by Swagger UI in debug builds and dumped by `openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::dto::{
    AuthorDto, CommentDto, CommentFormDto, CommentFormRequest, FormFieldDto, PostDetailResponse,
    PostDto, PostListResponse, ReadLaterResponse, ReadLaterToggleRequest, TagDto,
};

/// Registers the cookie that carries the read-later list.
struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Private cookie holding the visitor's read-later bookmarks.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieAddon),
    info(
        title = "Blog API",
        description = "Post listings, post detail with comments, and a session read-later list."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::posts::starting_page,
        crate::inbound::http::posts::all_posts,
        crate::inbound::http::posts::post_detail,
        crate::inbound::http::posts::submit_comment,
        crate::inbound::http::read_later::read_later,
        crate::inbound::http::read_later::toggle_read_later,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        AuthorDto,
        TagDto,
        PostDto,
        CommentDto,
        FormFieldDto,
        CommentFormDto,
        PostListResponse,
        PostDetailResponse,
        ReadLaterResponse,
        CommentFormRequest,
        ReadLaterToggleRequest,
    )),
    tags(
        (name = "posts", description = "Listings, detail pages and comments"),
        (name = "read-later", description = "Session bookmarks"),
        (name = "health", description = "Probes for orchestrators")
    )
)]
pub struct ApiDoc;
