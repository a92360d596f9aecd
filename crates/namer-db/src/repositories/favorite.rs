//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use namer_core::entities::Favorite;
use namer_core::traits::{FavoriteQuery, FavoriteRepository, RepoResult};
use namer_core::value_objects::Word;

use crate::mappers::FavoriteInsert;
use crate::models::FavoriteModel;

use super::error::{favorite_exists, map_db_error, map_unique_violation};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(models: Vec<FavoriteModel>) -> RepoResult<Vec<Favorite>> {
    models.into_iter().map(Favorite::try_from).collect()
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn find_by_word(&self, word: &Word) -> RepoResult<Option<Favorite>> {
        let result = sqlx::query_as::<_, FavoriteModel>(
            r#"
            SELECT word, created_at
            FROM favorites
            WHERE word = $1
            "#,
        )
        .bind(word.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Favorite::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &FavoriteQuery) -> RepoResult<Vec<Favorite>> {
        let results = sqlx::query_as::<_, FavoriteModel>(
            r#"
            SELECT word, created_at
            FROM favorites
            WHERE ($1::TEXT IS NULL OR strpos(lower(word), lower($1)) > 0)
            ORDER BY created_at DESC, word ASC
            "#,
        )
        .bind(query.search.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self))]
    async fn insert(&self, favorite: &Favorite) -> RepoResult<()> {
        let insert = FavoriteInsert::new(favorite);

        sqlx::query(
            r#"
            INSERT INTO favorites (word, created_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(insert.word)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || favorite_exists(insert.word)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, word: &Word) -> RepoResult<Option<Favorite>> {
        let result = sqlx::query_as::<_, FavoriteModel>(
            r#"
            DELETE FROM favorites
            WHERE word = $1
            RETURNING word, created_at
            "#,
        )
        .bind(word.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Favorite::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<Vec<Favorite>> {
        let results = sqlx::query_as::<_, FavoriteModel>(
            r#"
            DELETE FROM favorites
            RETURNING word, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // RETURNING has no defined order
        let mut removed = into_entities(results)?;
        removed.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.word.cmp(&b.word)));
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
