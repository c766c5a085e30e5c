//! Middleware stack for the API

pub mod headers;
pub mod layers;

pub use headers::api_headers_middleware;
pub use layers::{compression, cors, trace};
