//! Route definitions for the movie catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::filmes;
use crate::state::AppState;

/// Movie routes mounted at `/filmes`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// PATCH  /{id}   -> update_partial
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(filmes::list).post(filmes::create))
        .route(
            "/{id}",
            get(filmes::get_by_id)
                .put(filmes::update)
                .patch(filmes::update_partial)
                .delete(filmes::delete),
        )
}
