//! Card catalog routes, mounted under `/mtg`
//!
//! Static segments (`typeahead`, `random`) take priority over the `:id` capture.

use crate::api::handlers::{cards, catalog};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn mtg_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(cards::search_cards))
        .route("/cards/typeahead", get(cards::typeahead))
        .route("/cards/random", get(cards::random_card))
        .route("/cards/:id", get(cards::get_card))
        .route("/sets", get(catalog::list_sets))
        .route("/sets/:id", get(catalog::get_set))
        .route("/colors", get(catalog::list_colors))
        .route("/types", get(catalog::list_types))
        .route("/supertypes", get(catalog::list_supertypes))
        .route("/subtypes", get(catalog::list_subtypes))
}
