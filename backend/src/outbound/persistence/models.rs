//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer. Conversions into domain types
//! re-validate slugs and email addresses read back from storage.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::ports::BlogPersistenceError;
use crate::domain::{
    Author, AuthorId, Comment, CommentId, EmailAddress, NewAuthor, NewComment, NewPost, NewTag,
    Post, PostId, Slug, Tag, TagId,
};

use super::schema::{authors, comments, post_tags, posts, tags};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuthorRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = authors)]
pub(crate) struct NewAuthorRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_address: &'a str,
}

impl<'a> From<&'a NewAuthor> for NewAuthorRow<'a> {
    fn from(author: &'a NewAuthor) -> Self {
        Self {
            first_name: &author.first_name,
            last_name: &author.last_name,
            email_address: author.email_address.as_str(),
        }
    }
}

impl TryFrom<AuthorRow> for Author {
    type Error = BlogPersistenceError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        let email_address = EmailAddress::new(&row.email_address).map_err(|error| {
            BlogPersistenceError::query(format!("author {} has a bad email: {error}", row.id))
        })?;
        Ok(Self {
            id: AuthorId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email_address,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TagRow {
    pub id: i64,
    pub caption: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tags)]
pub(crate) struct NewTagRow<'a> {
    pub caption: &'a str,
}

impl<'a> From<&'a NewTag> for NewTagRow<'a> {
    fn from(tag: &'a NewTag) -> Self {
        Self {
            caption: &tag.caption,
        }
    }
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            id: TagId::new(row.id),
            caption: row.caption,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post_tags)]
pub(crate) struct PostTagRow {
    pub post_id: i64,
    pub tag_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub image_name: Option<String>,
    pub date: DateTime<Utc>,
    pub slug: String,
    pub content: String,
    #[expect(dead_code, reason = "the author is loaded through the join")]
    pub author_id: i64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub title: &'a str,
    pub excerpt: &'a str,
    pub image_name: Option<&'a str>,
    pub date: DateTime<Utc>,
    pub slug: &'a str,
    pub content: &'a str,
    pub author_id: i64,
}

impl<'a> From<&'a NewPost> for NewPostRow<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            excerpt: &post.excerpt,
            image_name: post.image_name.as_deref(),
            date: post.date,
            slug: post.slug.as_str(),
            content: &post.content,
            author_id: post.author_id.get(),
        }
    }
}

/// Build a domain post from a post row joined with its author.
pub(crate) fn post_from_rows(row: PostRow, author: AuthorRow) -> Result<Post, BlogPersistenceError> {
    let slug = Slug::new(row.slug).map_err(|error| {
        BlogPersistenceError::query(format!("post {} has a bad slug: {error}", row.id))
    })?;
    Ok(Post {
        id: PostId::new(row.id),
        title: row.title,
        excerpt: row.excerpt,
        image_name: row.image_name,
        date: row.date,
        slug,
        content: row.content,
        author: Author::try_from(author)?,
    })
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub user_name: String,
    pub user_mail: String,
    pub text: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub user_name: &'a str,
    pub user_mail: &'a str,
    pub text: &'a str,
    pub post_id: i64,
}

impl<'a> From<&'a NewComment> for NewCommentRow<'a> {
    fn from(comment: &'a NewComment) -> Self {
        Self {
            user_name: &comment.user_name,
            user_mail: comment.user_mail.as_str(),
            text: &comment.text,
            post_id: comment.post_id.get(),
        }
    }
}

impl TryFrom<CommentRow> for Comment {
    type Error = BlogPersistenceError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let user_mail = EmailAddress::new(&row.user_mail).map_err(|error| {
            BlogPersistenceError::query(format!("comment {} has a bad email: {error}", row.id))
        })?;
        Ok(Self {
            id: CommentId::new(row.id),
            user_name: row.user_name,
            user_mail,
            text: row.text,
            post_id: PostId::new(row.post_id),
        })
    }
}
