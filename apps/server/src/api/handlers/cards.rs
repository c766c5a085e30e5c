//! Card handlers
//!
//! - Faceted search (GET /mtg/cards), paginated through the `Link` header
//! - Name typeahead (GET /mtg/cards/typeahead?q=)
//! - Random card redirect (GET /mtg/cards/random)
//! - Single card (GET /mtg/cards/{id})

use crate::{
    api::url as api_url,
    db::search::{LinkHints, SearchRequest},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Maximum number of typeahead suggestions.
pub const TYPEAHEAD_LIMIT: i64 = 10;

/// Search cards (GET /mtg/cards)
///
/// - 200 OK with at most one page of cards and a `Link` header
/// - 400 Bad Request listing every invalid parameter
pub async fn search_cards(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Response> {
    let items: Vec<(String, String)> = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let request = SearchRequest::from_items(&items)?;
    let cards = state.cards.search_cards(&request).await?;

    let base_url = state.public_base_url(&api_url::origin_from_headers(&headers));
    let hints = LinkHints::new(&base_url, uri.path(), &items, request.page);
    let link = HeaderValue::from_str(&hints.to_header_value())
        .map_err(|e| Error::Internal(format!("Invalid Link header: {e}")))?;

    tracing::debug!(page = request.page, results = cards.len(), "Card search complete");

    let mut response = Json(cards).into_response();
    response.headers_mut().insert(header::LINK, link);
    Ok(response)
}

#[derive(Debug, Deserialize)]
pub struct TypeaheadParams {
    #[serde(default)]
    pub q: String,
}

/// Name prefix suggestions (GET /mtg/cards/typeahead?q=)
pub async fn typeahead(
    State(state): State<AppState>,
    Query(params): Query<TypeaheadParams>,
) -> Result<impl IntoResponse> {
    let cards = state.cards.typeahead(&params.q, TYPEAHEAD_LIMIT).await?;
    Ok(Json(cards))
}

/// Redirect to a random card (GET /mtg/cards/random)
pub async fn random_card(State(state): State<AppState>) -> Result<Response> {
    let id = state
        .cards
        .random_card_id()
        .await?
        .ok_or_else(|| Error::NotFound("No random card can be found".to_string()))?;

    let location = HeaderValue::from_str(&format!("/mtg/cards/{id}"))
        .map_err(|e| Error::Internal(format!("Invalid card id for redirect: {e}")))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Read a single card (GET /mtg/cards/{id})
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    match state.cards.card(&id).await? {
        Some(card) => Ok(Json(card)),
        None => Err(Error::CardNotFound(id)),
    }
}
