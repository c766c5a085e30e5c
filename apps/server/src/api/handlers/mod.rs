//! Request handlers for API endpoints
//!
//! Handlers validate the request, call the card reader and shape the response.
//! Errors are rendered by `Error`'s `IntoResponse` impl.

pub mod cards;
pub mod catalog;

pub use cards::*;
pub use catalog::*;
