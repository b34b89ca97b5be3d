//! PostgreSQL-backed `TagRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BlogPersistenceError, TagRepository};
use crate::domain::{NewTag, PostId, Tag, TagId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTagRow, PostTagRow, TagRow};
use super::pool::DbPool;
use super::schema::{post_tags, tags};

#[derive(Clone)]
pub struct DieselTagRepository {
    pool: DbPool,
}

impl DieselTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for DieselTagRepository {
    async fn create(&self, tag: &NewTag) -> Result<Tag, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(tags::table)
            .values(NewTagRow::from(tag))
            .returning(TagRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Tag::from)
            .map_err(map_diesel_error)
    }

    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TagRow> = tags::table
            .inner_join(post_tags::table)
            .filter(post_tags::post_id.eq(post_id.get()))
            .order((tags::caption.asc(), tags::id.asc()))
            .select(TagRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn attach(&self, post_id: PostId, tag_ids: &[TagId]) -> Result<(), BlogPersistenceError> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let links: Vec<PostTagRow> = tag_ids
            .iter()
            .map(|tag_id| PostTagRow {
                post_id: post_id.get(),
                tag_id: tag_id.get(),
            })
            .collect();

        diesel::insert_into(post_tags::table)
            .values(&links)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
