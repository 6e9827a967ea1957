//! Handlers for the `/filmes` resource.
//!
//! Every operation is a single read-then-write sequence: validate the
//! input shape, copy fields between the DTO and the row, issue one
//! statement, respond. Writes are awaited before the response is sent,
//! the delete path included.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use filmes_core::error::CoreError;
use filmes_core::patch::{self, PatchOp};
use filmes_core::types::DbId;
use filmes_db::mapping;
use filmes_db::models::filme::{CreateFilme, Filme, ListParams, ReadFilme, UpdateFilme};
use filmes_db::repositories::FilmeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Default list window when `take` is absent.
const DEFAULT_TAKE: i64 = 50;

/// Maximum list window. Larger requests are clamped, not rejected.
const MAX_TAKE: i64 = 200;

/// POST /filmes
///
/// Creates a movie and returns the stored row, id included.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFilme>,
) -> AppResult<(StatusCode, Json<Filme>)> {
    let filme = mapping::filme_from_create(&input);
    let created = FilmeRepo::insert(&state.pool, &filme).await?;

    tracing::info!(id = created.id, "Filme created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /filmes?skip=0&take=50
///
/// Lists movies in insertion order. Negative `skip` clamps to 0 and
/// `take` to at most [`MAX_TAKE`], so arbitrary windows have defined
/// behavior instead of falling through to the store.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ReadFilme>>> {
    let skip = params.skip.unwrap_or(0).max(0);
    let take = params.take.unwrap_or(DEFAULT_TAKE).clamp(0, MAX_TAKE);

    let filmes = FilmeRepo::list(&state.pool, skip, take).await?;
    let read = filmes.iter().map(mapping::read_from_filme).collect();

    Ok(Json(read))
}

/// GET /filmes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadFilme>> {
    let filme = find_filme(&state, id).await?;

    Ok(Json(mapping::read_from_filme(&filme)))
}

/// PUT /filmes/{id}
///
/// Full replace: every mutable field is overwritten from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFilme>,
) -> AppResult<StatusCode> {
    let mut filme = find_filme(&state, id).await?;
    mapping::apply_update(&mut filme, &input);
    FilmeRepo::update(&state.pool, &filme).await?;

    tracing::info!(id, "Filme updated");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /filmes/{id}
///
/// Applies a JSON Patch document to a projection of the current row,
/// re-validates the result with the same rules as PUT, then writes the
/// merged row back. Read-modify-write; concurrent patches to the same id
/// are last-write-wins.
pub async fn update_partial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<StatusCode> {
    let ops: Vec<PatchOp> = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid patch document: {e}")))?;

    let mut filme = find_filme(&state, id).await?;

    let projection = mapping::update_from_filme(&filme);
    let mut doc = serde_json::to_value(&projection)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    patch::apply(&mut doc, &ops).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let patched: UpdateFilme = serde_json::from_value(doc)
        .map_err(|e| AppError::BadRequest(format!("Patched document is invalid: {e}")))?;
    patched.validate()?;

    mapping::apply_update(&mut filme, &patched);
    FilmeRepo::update(&state.pool, &filme).await?;

    tracing::info!(id, ops = ops.len(), "Filme patched");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /filmes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FilmeRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Filme", id }));
    }

    tracing::info!(id, "Filme deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn find_filme(state: &AppState, id: DbId) -> AppResult<Filme> {
    FilmeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Filme", id }))
}
