//! Read-side storage trait used by the HTTP handlers

use crate::{
    db::{cards::Term, search::SearchRequest},
    models::{Card, Set},
    Result,
};
use async_trait::async_trait;

/// Read access to the card catalog.
///
/// Handlers only depend on this trait, so the API can be driven by any backend
/// that can answer these queries.
#[async_trait]
pub trait CardReader: Send + Sync {
    /// One page of cards matching a validated search, ordered by name then id.
    async fn search_cards(&self, request: &SearchRequest) -> Result<Vec<Card>>;

    /// Cards whose name starts with `prefix`, at most `limit` of them.
    async fn typeahead(&self, prefix: &str, limit: i64) -> Result<Vec<Card>>;

    /// # Returns
    /// * `Ok(Some(card))` - Card found
    /// * `Ok(None)` - No card with this id
    async fn card(&self, id: &str) -> Result<Option<Card>>;

    /// Id of a uniformly chosen card, `None` when the catalog is empty.
    async fn random_card_id(&self) -> Result<Option<String>>;

    async fn sets(&self) -> Result<Vec<Set>>;

    async fn set(&self, id: &str) -> Result<Option<Set>>;

    /// Distinct values of a facet column, ascending.
    async fn terms(&self, term: Term) -> Result<Vec<String>>;
}
