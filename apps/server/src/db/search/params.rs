//! Search request parsing and validation
//!
//! Turns raw query parameters into a validated [`SearchRequest`]:
//! - Enumerated facets are checked against their allow-lists
//! - `name`/`oracle` substrings are checked for SQL wildcards
//! - NUL characters are rejected everywhere; Postgres cannot store them in text
//! - `multicolor` and `page` are parsed as single values
//!
//! Every problem in a request is reported at once; validation never stops at the first
//! bad value.

use super::facets::Facet;
use super::paging::{page_offset, parse_page};
use super::query_builder::Condition;
use crate::{Error, Result};

const WILDCARD_ERROR: &str = "Search string can't contain '%' or '_'";

/// Validated card search.
///
/// Values inside one facet are alternatives (OR); distinct facets all have to match (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub rarities: Vec<String>,
    pub types: Vec<String>,
    pub supertypes: Vec<String>,
    pub colors: Vec<String>,
    pub subtypes: Vec<String>,
    pub formats: Vec<String>,
    pub status: Vec<String>,
    pub multiverse_ids: Vec<String>,
    pub sets: Vec<String>,
    /// Substrings of the card name.
    pub names: Vec<String>,
    /// Substrings of the oracle text.
    pub rules: Vec<String>,
    /// `None` places no constraint on multicolored cards.
    pub multicolor: Option<bool>,
    pub page: u32,
}

impl SearchRequest {
    /// Parse a raw, still percent-encoded query string.
    pub fn from_query(query: &str) -> Result<Self> {
        let items: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self::from_items(&items)
    }

    /// Parse ordered, decoded (key, value) query items.
    ///
    /// Unknown keys are ignored. On failure the error carries one message per invalid value.
    pub fn from_items(items: &[(String, String)]) -> Result<Self> {
        let mut request = Self::default();
        let mut errors = Vec::new();

        if let Err(e) = request.parse_multicolor(first_value(items, "multicolor")) {
            errors.push(e);
        }

        for facet in Facet::ALL {
            for (key, raw) in items {
                if Facet::from_param(key) != Some(facet) {
                    continue;
                }
                if let Err(e) = reject_nul(key, raw) {
                    errors.push(e);
                    continue;
                }
                match facet.validate(raw) {
                    Ok(Some(value)) => request.facet_values_mut(facet).push(value),
                    Ok(None) => {}
                    Err(e) => errors.push(e),
                }
            }
        }

        request.names = extract_patterns(items, "name", &mut errors);
        request.rules = extract_patterns(items, "oracle", &mut errors);

        match parse_page(first_value(items, "page")) {
            Ok(page) => request.page = page,
            Err(e) => errors.push(e),
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(Error::Validation(errors))
        }
    }

    fn parse_multicolor(&mut self, raw: Option<&str>) -> std::result::Result<(), String> {
        self.multicolor = match raw {
            None | Some("") => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => return Err("Multicolor should be either 'true' or 'false'".to_string()),
        };
        Ok(())
    }

    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Rarity => &self.rarities,
            Facet::Type => &self.types,
            Facet::Supertype => &self.supertypes,
            Facet::Color => &self.colors,
            Facet::Subtype => &self.subtypes,
            Facet::Format => &self.formats,
            Facet::Status => &self.status,
            Facet::MultiverseId => &self.multiverse_ids,
            Facet::Set => &self.sets,
        }
    }

    fn facet_values_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Rarity => &mut self.rarities,
            Facet::Type => &mut self.types,
            Facet::Supertype => &mut self.supertypes,
            Facet::Color => &mut self.colors,
            Facet::Subtype => &mut self.subtypes,
            Facet::Format => &mut self.formats,
            Facet::Status => &mut self.status,
            Facet::MultiverseId => &mut self.multiverse_ids,
            Facet::Set => &mut self.sets,
        }
    }

    pub fn offset(&self) -> i64 {
        page_offset(self.page)
    }

    /// Filter condition for this request; empty when no facet is constrained.
    pub fn to_condition(&self) -> Condition {
        let mut conditions = Vec::new();

        if let Some(multicolor) = self.multicolor {
            conditions.push(Condition::eq("multicolor", multicolor));
        }

        for facet in Facet::ALL {
            let values = self.facet_values(facet);
            if !values.is_empty() {
                conditions.push(Condition::overlap(facet.column(), values.to_vec()));
            }
        }

        if !self.names.is_empty() {
            conditions.push(pattern_condition("name", &self.names));
        }
        if !self.rules.is_empty() {
            conditions.push(pattern_condition("rules", &self.rules));
        }

        Condition::and(conditions)
    }
}

fn first_value<'a>(items: &'a [(String, String)], key: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn extract_patterns(items: &[(String, String)], key: &str, errors: &mut Vec<String>) -> Vec<String> {
    let mut patterns = Vec::new();
    for (k, value) in items {
        if k != key || value.is_empty() {
            continue;
        }
        match check_substring(key, value) {
            Ok(()) => patterns.push(value.clone()),
            Err(e) => errors.push(e),
        }
    }
    patterns
}

fn reject_nul(param: &str, value: &str) -> std::result::Result<(), String> {
    if value.contains('\0') {
        Err(format!("The {param} value can't contain a NUL character"))
    } else {
        Ok(())
    }
}

/// Check a user-supplied substring read from `param` before it is matched with `ILIKE`.
///
/// `ILIKE` wildcards are not allowed.
pub fn check_substring(param: &str, value: &str) -> std::result::Result<(), String> {
    reject_nul(param, value)?;
    if value.contains(['%', '_']) {
        Err(WILDCARD_ERROR.to_string())
    } else {
        Ok(())
    }
}

/// Escape `\`, the default `LIKE` escape character, so the value matches literally.
pub fn escape_like(value: &str) -> String {
    value.replace('\\', "\\\\")
}

fn pattern_condition(column: &'static str, substrings: &[String]) -> Condition {
    Condition::or(
        substrings
            .iter()
            .map(|s| Condition::ilike(column, format!("%{}%", escape_like(s))))
            .collect(),
    )
}
