//! Validated creation of authors, tags and posts.
//!
//! Every path here runs full validation before touching storage, including
//! the post content minimum length that the raw repository insert skips.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::json;
use tracing::info;

use super::ports::{AuthorRepository, PostRepository, TagRepository};
use super::service_support::map_persistence_error;
use super::{
    Author, AuthorId, Error, NewAuthor, NewPost, NewTag, Post, PostId, Slug, Tag, TagId,
};

/// Post fields supplied by an author. `date` defaults to the clock's now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub image_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub slug: String,
    pub content: String,
    pub author_id: AuthorId,
}

fn invalid_field(field: &str, message: impl std::fmt::Display) -> Error {
    Error::invalid_request(message.to_string()).with_details(json!({ "field": field }))
}

/// Publishing service over the author, tag and post repositories.
#[derive(Clone)]
pub struct PublishingService<A, T, P> {
    authors: Arc<A>,
    tags: Arc<T>,
    posts: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<A, T, P> PublishingService<A, T, P> {
    pub fn new(authors: Arc<A>, tags: Arc<T>, posts: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            authors,
            tags,
            posts,
            clock,
        }
    }
}

impl<A, T, P> PublishingService<A, T, P>
where
    A: AuthorRepository,
    T: TagRepository,
    P: PostRepository,
{
    /// Register an author after validating names and email.
    pub async fn register_author(
        &self,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> Result<Author, Error> {
        let author = NewAuthor::new(first_name, last_name, email_address)
            .map_err(|error| invalid_field("author", error))?;
        let author = self
            .authors
            .create(&author)
            .await
            .map_err(map_persistence_error)?;
        info!(author_id = %author.id, "author registered");
        Ok(author)
    }

    /// Create a tag after validating its caption.
    pub async fn create_tag(&self, caption: &str) -> Result<Tag, Error> {
        let tag = NewTag::new(caption).map_err(|error| invalid_field("caption", error))?;
        self.tags
            .create(&tag)
            .await
            .map_err(map_persistence_error)
    }

    /// Validate and store a post.
    ///
    /// Duplicate slugs surface as `conflict`; validation failures as
    /// `invalid_request` naming the offending field.
    pub async fn publish_post(&self, draft: PostDraft) -> Result<Post, Error> {
        let slug = Slug::new(draft.slug).map_err(|error| invalid_field("slug", error))?;
        let post = NewPost {
            title: draft.title,
            excerpt: draft.excerpt,
            image_name: draft.image_name,
            date: draft.date.unwrap_or_else(|| self.clock.utc()),
            slug,
            content: draft.content,
            author_id: draft.author_id,
        };
        post.validate()
            .map_err(|error| invalid_field(error.field(), &error))?;
        let post = self
            .posts
            .insert(&post)
            .await
            .map_err(map_persistence_error)?;
        info!(post_id = %post.id, slug = %post.slug, "post published");
        Ok(post)
    }

    /// Attach tags to a post. Already attached tags are ignored.
    pub async fn tag_post(&self, post_id: PostId, tag_ids: &[TagId]) -> Result<(), Error> {
        self.tags
            .attach(post_id, tag_ids)
            .await
            .map_err(map_persistence_error)
    }

    /// Delete a post; its comments and tag links go with it.
    pub async fn delete_post(&self, post_id: PostId) -> Result<(), Error> {
        let removed = self
            .posts
            .delete(post_id)
            .await
            .map_err(map_persistence_error)?;
        if !removed {
            return Err(Error::not_found(format!("post {post_id} not found")));
        }
        info!(post_id = %post_id, "post deleted");
        Ok(())
    }
}
