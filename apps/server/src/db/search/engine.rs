//! Search execution
//!
//! The SearchEngine is responsible for:
//! - Compiling a validated [`SearchRequest`] into a paged `SELECT` over the cards table
//! - Executing it against the pool
//! - Decoding each matched document into the caller's record type

use super::paging::PAGE_SIZE;
use super::params::SearchRequest;
use super::query_builder::{bind_all, CompiledQuery, Select};
use crate::models::Card;
use crate::Result;
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, Row};

/// Search engine executes card searches against the database
#[derive(Debug, Clone)]
pub struct SearchEngine {
    db_pool: PgPool,
}

impl SearchEngine {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Compile the paged search statement for a request.
    pub fn build_query(request: &SearchRequest) -> Result<CompiledQuery> {
        let query = Select::new(&["record"])
            .from("cards")
            .filter(request.to_condition())
            .order_by("name")
            .order_by("id")
            .limit(PAGE_SIZE)
            .offset(request.offset())
            .build()?;
        Ok(query)
    }

    /// Run a search and decode every matched document as `T`.
    pub async fn search<T: DeserializeOwned>(&self, request: &SearchRequest) -> Result<Vec<T>> {
        let query = Self::build_query(request)?;
        fetch_records(&self.db_pool, query).await
    }

    pub async fn search_cards(&self, request: &SearchRequest) -> Result<Vec<Card>> {
        self.search(request).await
    }
}

/// Execute a compiled query whose first column is a JSON document and decode every row.
///
/// A single undecodable row fails the whole fetch; no partial results are returned.
pub(crate) async fn fetch_records<T: DeserializeOwned>(
    pool: &PgPool,
    query: CompiledQuery,
) -> Result<Vec<T>> {
    let CompiledQuery { sql, args } = query;
    tracing::debug!(sql = %sql, args = args.len(), "Executing record query");

    let mut rows = bind_all(sqlx::query(&sql), args).fetch(pool);
    let mut records = Vec::new();
    while let Some(row) = rows.try_next().await.map_err(|e| {
        tracing::error!(error = %e, "Record query failed");
        crate::Error::Database(e)
    })? {
        let document: JsonValue = row.try_get(0)?;
        let record = serde_json::from_value(document).map_err(|e| {
            tracing::error!(error = %e, "Failed to decode stored record");
            crate::Error::Decode(e)
        })?;
        records.push(record);
    }

    Ok(records)
}
