use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A card as stored in the `record` document column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(rename = "cmc", default)]
    pub converted_cost: i32,
    #[serde(rename = "cost", default)]
    pub mana_cost: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub power: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub toughness: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub loyalty: i32,
    /// Legality per format, e.g. `"modern" -> "legal"`.
    #[serde(rename = "formats", default)]
    pub format_map: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editions: Vec<Edition>,
}

/// One printing of a card in a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub set: String,
    pub set_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub watermark: String,
    pub rarity: String,
    #[serde(default)]
    pub artist: String,
    pub multiverse_id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flavor: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub border: String,
    #[serde(rename = "type", default)]
    pub set_type: String,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Lower-case, de-duplicate and sort.
pub(crate) fn normalize_terms<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Facet projections stored in the filter-only array columns.
impl Card {
    pub fn sets(&self) -> Vec<String> {
        normalize_terms(self.editions.iter().map(|e| &e.set_id))
    }

    pub fn rarities(&self) -> Vec<String> {
        normalize_terms(self.editions.iter().map(|e| &e.rarity))
    }

    pub fn multiverse_ids(&self) -> Vec<String> {
        normalize_terms(self.editions.iter().map(|e| e.multiverse_id.to_string()))
    }

    /// Formats the card may be played in (legal or restricted).
    pub fn formats(&self) -> Vec<String> {
        normalize_terms(
            self.format_map
                .iter()
                .filter(|(_, status)| status.as_str() == "legal" || status.as_str() == "restricted")
                .map(|(format, _)| format),
        )
    }

    /// Every legality status the card holds in some format.
    pub fn status(&self) -> Vec<String> {
        normalize_terms(self.format_map.values())
    }

    pub fn is_multicolor(&self) -> bool {
        self.colors.len() > 1
    }
}
