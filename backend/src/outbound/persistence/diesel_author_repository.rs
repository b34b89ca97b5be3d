//! PostgreSQL-backed `AuthorRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AuthorRepository, BlogPersistenceError};
use crate::domain::{Author, AuthorId, NewAuthor};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AuthorRow, NewAuthorRow};
use super::pool::DbPool;
use super::schema::authors;

#[derive(Clone)]
pub struct DieselAuthorRepository {
    pool: DbPool,
}

impl DieselAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for DieselAuthorRepository {
    async fn create(&self, author: &NewAuthor) -> Result<Author, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(authors::table)
            .values(NewAuthorRow::from(author))
            .returning(AuthorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Author::try_from(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        authors::table
            .find(id.get())
            .select(AuthorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Author::try_from)
            .transpose()
    }
}
