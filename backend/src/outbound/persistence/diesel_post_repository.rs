//! PostgreSQL-backed `PostRepository`.
//!
//! Every read joins `authors` so posts come back with their author loaded.
//! Deleting a post relies on `ON DELETE CASCADE` for comments and tag links.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BlogPersistenceError, PostRepository};
use crate::domain::{NewPost, Post, PostId, Slug};

use super::error_mapping::{map_diesel_error, map_pool_error, map_post_write_error};
use super::models::{AuthorRow, NewPostRow, PostRow, post_from_rows};
use super::pool::DbPool;
use super::schema::{authors, posts};

#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_posts(rows: Vec<(PostRow, AuthorRow)>) -> Result<Vec<Post>, BlogPersistenceError> {
    rows.into_iter()
        .map(|(post, author)| post_from_rows(post, author))
        .collect()
}

async fn load_post(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Option<Post>, BlogPersistenceError> {
    posts::table
        .inner_join(authors::table)
        .filter(posts::id.eq(id))
        .select((PostRow::as_select(), AuthorRow::as_select()))
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?
        .map(|(post, author)| post_from_rows(post, author))
        .transpose()
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn insert(&self, post: &NewPost) -> Result<Post, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(posts::table)
            .values(NewPostRow::from(post))
            .returning(posts::id)
            .get_result(&mut conn)
            .await
            .map_err(|error| map_post_write_error(error, post.slug.as_str()))?;

        load_post(&mut conn, id)
            .await?
            .ok_or_else(|| BlogPersistenceError::query(format!("post {id} vanished after insert")))
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        posts::table
            .inner_join(authors::table)
            .filter(posts::slug.eq(slug.as_str()))
            .select((PostRow::as_select(), AuthorRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(|(post, author)| post_from_rows(post, author))
            .transpose()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        load_post(&mut conn, id.get()).await
    }

    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = posts::table
            .inner_join(authors::table)
            .order((posts::date.desc(), posts::id.desc()))
            .select((PostRow::as_select(), AuthorRow::as_select()))
            .into_boxed();
        if let Some(limit) = limit {
            query = query.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = query.load(&mut conn).await.map_err(map_diesel_error)?;
        into_posts(rows)
    }

    async fn find_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, BlogPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();

        let rows = posts::table
            .inner_join(authors::table)
            .filter(posts::id.eq_any(raw_ids))
            .order(posts::id.asc())
            .select((PostRow::as_select(), AuthorRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        into_posts(rows)
    }

    async fn delete(&self, id: PostId) -> Result<bool, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(posts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
