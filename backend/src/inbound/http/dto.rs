//! Render contexts returned by the blog views and the forms they accept.
//!
//! Domain types stay free of OpenAPI concerns; these DTOs carry the schema
//! annotations and the camelCase wire names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::comment_form::{CommentForm, CommentSubmission, FormField};
use crate::domain::ports::{PostDetail, StoredPosts};
use crate::domain::{Author, Comment, Post, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    pub email_address: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            full_name: author.full_name(),
            id: author.id.get(),
            first_name: author.first_name,
            last_name: author.last_name,
            email_address: author.email_address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i64,
    #[schema(example = "Django")]
    pub caption: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.get(),
            caption: tag.caption,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub image_name: Option<String>,
    pub date: DateTime<Utc>,
    #[schema(example = "test-post")]
    pub slug: String,
    pub content: String,
    pub author: AuthorDto,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.get(),
            title: post.title,
            excerpt: post.excerpt,
            image_name: post.image_name,
            date: post.date,
            slug: post.slug.into(),
            content: post.content,
            author: post.author.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub user_name: String,
    pub user_mail: String,
    pub text: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.get(),
            user_name: comment.user_name,
            user_mail: comment.user_mail.into(),
            text: comment.text,
        }
    }
}

/// One input of the comment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldDto {
    #[schema(example = "user_mail")]
    pub name: String,
    #[schema(example = "Your Email")]
    pub label: String,
    pub value: String,
    pub errors: Vec<String>,
}

impl From<&FormField> for FormFieldDto {
    fn from(field: &FormField) -> Self {
        Self {
            name: field.name.to_owned(),
            label: field.label.to_owned(),
            value: field.value.clone(),
            errors: field.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentFormDto {
    pub fields: Vec<FormFieldDto>,
    pub has_errors: bool,
}

impl From<&CommentForm> for CommentFormDto {
    fn from(form: &CommentForm) -> Self {
        Self {
            fields: form.fields().iter().map(FormFieldDto::from).collect(),
            has_errors: form.has_errors(),
        }
    }
}

/// Context of the start page and the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
}

impl From<Vec<Post>> for PostListResponse {
    fn from(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into_iter().map(PostDto::from).collect(),
        }
    }
}

/// Context of the post detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: PostDto,
    pub post_tags: Vec<TagDto>,
    pub comment_form: CommentFormDto,
    /// Newest first.
    pub comments: Vec<CommentDto>,
    pub is_saved: bool,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            comment_form: CommentFormDto::from(&detail.comment_form),
            post: detail.post.into(),
            post_tags: detail.tags.into_iter().map(TagDto::from).collect(),
            comments: detail.comments.into_iter().map(CommentDto::from).collect(),
            is_saved: detail.is_saved,
        }
    }
}

/// Context of the read-later page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadLaterResponse {
    pub posts: Vec<PostDto>,
    pub has_posts: bool,
}

impl From<StoredPosts> for ReadLaterResponse {
    fn from(stored: StoredPosts) -> Self {
        Self {
            posts: stored.posts.into_iter().map(PostDto::from).collect(),
            has_posts: stored.has_posts,
        }
    }
}

/// Urlencoded comment form body. Every field is optional on the wire so
/// missing fields surface as form errors rather than extractor failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CommentFormRequest {
    pub user_name: Option<String>,
    pub user_mail: Option<String>,
    pub text: Option<String>,
}

impl From<CommentFormRequest> for CommentSubmission {
    fn from(form: CommentFormRequest) -> Self {
        Self {
            user_name: form.user_name,
            user_mail: form.user_mail,
            text: form.text,
        }
    }
}

/// Urlencoded read-later toggle body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReadLaterToggleRequest {
    #[schema(example = "4")]
    pub post_id: Option<String>,
}
