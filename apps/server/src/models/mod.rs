//! Domain models for the card catalog

pub mod card;

pub use card::{Card, Edition, Set};
