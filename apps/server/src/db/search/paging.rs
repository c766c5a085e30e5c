//! Page windowing and navigation hints.

/// Number of cards returned per page.
pub const PAGE_SIZE: i64 = 100;

/// Parse the `page` parameter; absent means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<u32, String> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(0);
    };

    match raw.parse::<i64>() {
        Ok(page) if page < 0 => Err("Page parameter must be >= 0".to_string()),
        Ok(page) => u32::try_from(page)
            .map_err(|_| format!("The page '{raw}' is not a valid integer")),
        Err(_) => Err(format!("The page '{raw}' is not a valid integer")),
    }
}

pub fn page_offset(page: u32) -> i64 {
    i64::from(page) * PAGE_SIZE
}

/// Previous/next page URLs for a search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHints {
    pub prev: Option<String>,
    pub next: String,
}

impl LinkHints {
    /// Build hints from the request's base URL, path and query items.
    ///
    /// Every query item other than `page` is carried over unchanged and in order.
    pub fn new(base_url: &str, path: &str, query_items: &[(String, String)], page: u32) -> Self {
        let prev = page
            .checked_sub(1)
            .map(|prev| page_url(base_url, path, query_items, prev));
        let next = page_url(base_url, path, query_items, page.saturating_add(1));
        Self { prev, next }
    }

    /// Render as an HTTP `Link` header value.
    pub fn to_header_value(&self) -> String {
        let next = format!("<{}>; rel=\"next\"", self.next);
        match &self.prev {
            Some(prev) => format!("<{prev}>; rel=\"prev\", {next}"),
            None => next,
        }
    }
}

fn page_url(base_url: &str, path: &str, query_items: &[(String, String)], page: u32) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in query_items {
        if key != "page" {
            serializer.append_pair(key, value);
        }
    }
    serializer.append_pair("page", &page.to_string());

    format!(
        "{}{}?{}",
        base_url.trim_end_matches('/'),
        path,
        serializer.finish()
    )
}
