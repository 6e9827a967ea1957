//! Field-copy conversions between the `Filme` row and its DTOs.
//!
//! Four conversions, one per DTO pair. Each copies same-named fields
//! verbatim; there is no transformation logic here. Handlers compose
//! these with the repository instead of mapping ad hoc.

use crate::models::filme::{CreateFilme, Filme, ReadFilme, UpdateFilme};

/// Create -> entity. The returned row is unsaved; the store assigns `id`
/// on insert.
pub fn filme_from_create(dto: &CreateFilme) -> Filme {
    Filme {
        id: 0,
        title: dto.title.clone(),
        genre: dto.genre.clone(),
        duration: dto.duration,
    }
}

/// Update -> entity. Overwrites every mutable field in place; `id` is
/// untouched.
pub fn apply_update(filme: &mut Filme, dto: &UpdateFilme) {
    filme.title = dto.title.clone();
    filme.genre = dto.genre.clone();
    filme.duration = dto.duration;
}

/// Entity -> update shape. Used as the patch target projection.
pub fn update_from_filme(filme: &Filme) -> UpdateFilme {
    UpdateFilme {
        title: filme.title.clone(),
        genre: filme.genre.clone(),
        duration: filme.duration,
    }
}

/// Entity -> read shape.
pub fn read_from_filme(filme: &Filme) -> ReadFilme {
    ReadFilme {
        id: filme.id,
        title: filme.title.clone(),
        genre: filme.genre.clone(),
        duration: filme.duration,
    }
}
