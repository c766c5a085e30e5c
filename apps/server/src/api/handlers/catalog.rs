//! Set listings and facet vocabularies

use crate::{db::Term, state::AppState, Error, Result};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// All sets ordered by name (GET /mtg/sets)
pub async fn list_sets(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.cards.sets().await?))
}

/// Single set (GET /mtg/sets/{id}), matched case-insensitively
pub async fn get_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    match state.cards.set(&id).await? {
        Some(set) => Ok(Json(set)),
        None => Err(Error::SetNotFound(id)),
    }
}

async fn terms(state: &AppState, term: Term) -> Result<Json<Vec<String>>> {
    Ok(Json(state.cards.terms(term).await?))
}

pub async fn list_colors(State(state): State<AppState>) -> Result<impl IntoResponse> {
    terms(&state, Term::Colors).await
}

pub async fn list_types(State(state): State<AppState>) -> Result<impl IntoResponse> {
    terms(&state, Term::Types).await
}

pub async fn list_supertypes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    terms(&state, Term::Supertypes).await
}

pub async fn list_subtypes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    terms(&state, Term::Subtypes).await
}
