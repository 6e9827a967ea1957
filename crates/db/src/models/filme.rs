//! Movie models and DTOs.
//!
//! The `filmes` table is the only collection in the system: one row per
//! movie, keyed by a store-assigned id. The DTOs control exactly which
//! fields cross the service boundary; validation constraints live on the
//! input shapes and are enforced at the handler boundary, not by the
//! store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use filmes_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `filmes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Filme {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    /// Runtime in minutes.
    pub duration: i32,
}

// ---------------------------------------------------------------------------
// DTOs (request/response payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a movie. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFilme {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "genre must be 1-50 characters"))]
    pub genre: String,

    #[validate(range(min = 70, max = 600, message = "duration must be between 70 and 600 minutes"))]
    pub duration: i32,
}

/// DTO for full or partial update. Same fields and constraints as
/// [`CreateFilme`]; also serializable so the current row can be projected
/// to it as the target of a patch document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFilme {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "genre must be 1-50 characters"))]
    pub genre: String,

    #[validate(range(min = 70, max = 600, message = "duration must be between 70 and 600 minutes"))]
    pub duration: i32,
}

/// DTO returned from read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ReadFilme {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub duration: i32,
}

/// Query window for list requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}
