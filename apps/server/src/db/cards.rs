//! PostgreSQL card store
//!
//! Reads go through the search engine and the statement builder; writes denormalize each
//! card into the facet columns the search filters on.

use super::search::engine::fetch_records;
use super::search::params::{check_substring, escape_like};
use super::search::{Condition, SearchEngine, SearchRequest, Select};
use super::traits::CardReader;
use crate::models::card::normalize_terms;
use crate::models::{Card, Set};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

/// Sets whose joke cards are left out of the term listings.
const UN_SETS: [&str; 2] = ["unh", "ugl"];

/// Facet columns that can be listed as vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Colors,
    Types,
    Supertypes,
    Subtypes,
}

impl Term {
    pub fn column(self) -> &'static str {
        match self {
            Term::Colors => "colors",
            Term::Types => "types",
            Term::Supertypes => "supertypes",
            Term::Subtypes => "subtypes",
        }
    }
}

/// Payload accepted by [`PgCardStore::import`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardImport {
    #[serde(default)]
    pub sets: Vec<Set>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub sets: usize,
    pub cards: usize,
}

#[derive(Debug, Clone)]
pub struct PgCardStore {
    pool: PgPool,
    search: SearchEngine,
}

impl PgCardStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            search: SearchEngine::new(pool.clone()),
            pool,
        }
    }

    /// Upsert every set and card in a single transaction.
    pub async fn import(&self, import: &CardImport) -> Result<ImportSummary> {
        let mut tx = self.pool.begin().await?;

        for set in &import.sets {
            upsert_set(&mut tx, set).await?;
        }
        for card in &import.cards {
            upsert_card(&mut tx, card).await?;
        }

        tx.commit().await?;

        let summary = ImportSummary {
            sets: import.sets.len(),
            cards: import.cards.len(),
        };
        tracing::info!(sets = summary.sets, cards = summary.cards, "Imported card data");
        Ok(summary)
    }
}

async fn upsert_card(tx: &mut Transaction<'_, Postgres>, card: &Card) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO cards (
            id, name, rules, record,
            types, supertypes, subtypes, colors,
            rarities, formats, status, sets, mids, multicolor
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            rules = EXCLUDED.rules,
            record = EXCLUDED.record,
            types = EXCLUDED.types,
            supertypes = EXCLUDED.supertypes,
            subtypes = EXCLUDED.subtypes,
            colors = EXCLUDED.colors,
            rarities = EXCLUDED.rarities,
            formats = EXCLUDED.formats,
            status = EXCLUDED.status,
            sets = EXCLUDED.sets,
            mids = EXCLUDED.mids,
            multicolor = EXCLUDED.multicolor,
            updated_at = NOW()
        "#,
    )
    .bind(&card.id)
    .bind(&card.name)
    .bind(&card.text)
    .bind(Json(card))
    .bind(normalize_terms(&card.types))
    .bind(normalize_terms(&card.supertypes))
    .bind(normalize_terms(&card.subtypes))
    .bind(normalize_terms(&card.colors))
    .bind(card.rarities())
    .bind(card.formats())
    .bind(card.status())
    .bind(card.sets())
    .bind(card.multiverse_ids())
    .bind(card.is_multicolor())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn upsert_set(tx: &mut Transaction<'_, Postgres>, set: &Set) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO sets (id, name, record)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            record = EXCLUDED.record,
            updated_at = NOW()
        "#,
    )
    .bind(&set.id)
    .bind(&set.name)
    .bind(Json(set))
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Text containing NUL can never be stored, so no row can match it.
fn is_storable(id: &str) -> bool {
    !id.contains('\0')
}

fn typeahead_query(prefix: &str, limit: i64) -> Result<super::search::CompiledQuery> {
    check_substring("q", prefix).map_err(|e| Error::Validation(vec![e]))?;

    let query = Select::new(&["record"])
        .from("cards")
        .filter(Condition::ilike("name", format!("{}%", escape_like(prefix))))
        .order_by("name")
        .order_by("id")
        .limit(limit)
        .build()?;
    Ok(query)
}

#[async_trait]
impl CardReader for PgCardStore {
    async fn search_cards(&self, request: &SearchRequest) -> Result<Vec<Card>> {
        self.search.search_cards(request).await
    }

    async fn typeahead(&self, prefix: &str, limit: i64) -> Result<Vec<Card>> {
        let query = typeahead_query(prefix, limit)?;
        fetch_records(&self.pool, query).await
    }

    async fn card(&self, id: &str) -> Result<Option<Card>> {
        if !is_storable(id) {
            return Ok(None);
        }
        let query = Select::new(&["record"])
            .from("cards")
            .filter(Condition::eq("id", id))
            .build()?;
        Ok(fetch_records(&self.pool, query).await?.into_iter().next())
    }

    async fn random_card_id(&self) -> Result<Option<String>> {
        let id = sqlx::query_scalar::<_, String>("SELECT id FROM cards ORDER BY random() LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn sets(&self) -> Result<Vec<Set>> {
        let query = Select::new(&["record"])
            .from("sets")
            .order_by("name")
            .order_by("id")
            .build()?;
        fetch_records(&self.pool, query).await
    }

    async fn set(&self, id: &str) -> Result<Option<Set>> {
        if !is_storable(id) {
            return Ok(None);
        }
        let set = sqlx::query_scalar::<_, Json<Set>>(
            "SELECT record FROM sets WHERE lower(id) = lower($1)",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(set.map(|Json(set)| set))
    }

    async fn terms(&self, term: Term) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT DISTINCT unnest({column}) AS term FROM cards \
             WHERE NOT (sets && $1) ORDER BY term ASC",
            column = term.column()
        );
        let un_sets: Vec<String> = UN_SETS.iter().map(|s| s.to_string()).collect();
        let terms = sqlx::query_scalar::<_, String>(&sql)
            .bind(un_sets)
            .fetch_all(&self.pool)
            .await?;
        Ok(terms)
    }
}
