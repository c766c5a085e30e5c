//! Response headers shared by every API response

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

const RANDOM_CARD_PATH: &str = "/mtg/cards/random";

const LICENSE: &str = "The textual information presented through this API about Magic: \
The Gathering is copyrighted by Wizards of the Coast.";
const DISCLAIMER: &str = "This API is not produced, endorsed, supported, or affiliated with \
Wizards of the Coast.";

/// Caching and attribution headers.
///
/// Catalog data changes only on import, so responses are publicly cacheable for an hour.
/// The random-card redirect must never be cached.
pub async fn api_headers_middleware(req: Request, next: Next) -> Response {
    let cacheable = req.uri().path() != RANDOM_CARD_PATH;

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    if cacheable {
        headers.insert(
            "cache-control",
            HeaderValue::from_static("public,max-age=3600"),
        );
    } else {
        headers.insert("cache-control", HeaderValue::from_static("no-store"));
    }
    headers.insert("license", HeaderValue::from_static(LICENSE));
    headers.insert("disclaimer", HeaderValue::from_static(DISCLAIMER));
    headers.insert(
        "strict-transport-security",
        HeaderValue::from_static("max-age=86400"),
    );

    response
}
