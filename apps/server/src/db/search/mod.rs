//! Faceted card search: validation, condition building, SQL compilation and execution.

pub mod engine;
pub mod facets;
pub mod paging;
pub mod params;
pub mod query_builder;

pub use engine::SearchEngine;
pub use facets::Facet;
pub use paging::{LinkHints, PAGE_SIZE};
pub use params::SearchRequest;
pub use query_builder::{BindValue, BuildError, CompiledQuery, Condition, Select};
