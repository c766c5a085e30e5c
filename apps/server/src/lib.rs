//! Deckbrew - Magic: The Gathering card search API
//!
//! A read-mostly card catalog served over HTTP:
//! - Faceted card search with validated allow-lists and paginated results
//! - Typeahead, random card and single card lookups
//! - Set listings and facet vocabularies
//! - A transactional import path used by the loader binary

#![allow(
    clippy::large_enum_variant, // sqlx::Error dominates the error enum
)]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
