//! PostgreSQL-backed `CommentRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BlogPersistenceError, CommentRepository};
use crate::domain::{Comment, NewComment, PostId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(comments::table)
            .values(NewCommentRow::from(comment))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Comment::try_from(row)
    }

    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .filter(comments::post_id.eq(post_id.get()))
            .order(comments::id.desc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
