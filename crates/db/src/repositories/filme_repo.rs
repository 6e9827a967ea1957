//! Repository for the `filmes` table.
//!
//! Single-row statements only; every write commits when its statement is
//! awaited, so callers respond after the change is durable.

use sqlx::PgPool;

use filmes_core::types::DbId;

use crate::models::filme::Filme;

/// Column list for `filmes` queries.
const COLUMNS: &str = "id, title, genre, duration";

/// Provides data access for movies.
pub struct FilmeRepo;

impl FilmeRepo {
    /// Insert a new row. The store assigns the id; the stored row is
    /// returned.
    pub async fn insert(pool: &PgPool, filme: &Filme) -> Result<Filme, sqlx::Error> {
        let query = format!(
            "INSERT INTO filmes (title, genre, duration) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filme>(&query)
            .bind(&filme.title)
            .bind(&filme.genre)
            .bind(filme.duration)
            .fetch_one(pool)
            .await
    }

    /// Look up a single row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filmes WHERE id = $1");
        sqlx::query_as::<_, Filme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rows in insertion order, windowed by `skip`/`take`.
    ///
    /// The result is fully materialized before it is returned. Callers
    /// pass a non-negative window; bounds policy lives at the handler.
    pub async fn list(pool: &PgPool, skip: i64, take: i64) -> Result<Vec<Filme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filmes ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Filme>(&query)
            .bind(skip)
            .bind(take)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable fields of an existing row.
    ///
    /// Returns `false` if no row matched the id.
    pub async fn update(pool: &PgPool, filme: &Filme) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE filmes SET title = $1, genre = $2, duration = $3 WHERE id = $4")
            .bind(&filme.title)
            .bind(&filme.genre)
            .bind(filme.duration)
            .bind(filme.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a row by id. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM filmes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
