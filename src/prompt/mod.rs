//! Prompt records and their structured breakdown.
//!
//! DESIGN
//! ======
//! `PromptRecord` mirrors one row of the `prompts` table. The `structure`
//! column holds a JSON document, normally stored as text, that maps category
//! keys to bilingual phrase lists. Decoding into [`Structure`] happens once at
//! the boundary, before layout. Anything undecodable is treated as a record
//! with no categories rather than an error.

pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// RECORD
// =============================================================================

/// One row of the `prompts` table, serialized as-is by the record endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: i64,
    pub model_name: Option<String>,
    pub prompt: String,
    pub prompt_cn: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
    pub search_keyword: Option<String>,
    /// Either the raw JSON text from the database or an already decoded object.
    pub structure: Option<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl PromptRecord {
    /// Decode the `structure` column. See [`Structure::decode`].
    #[must_use]
    pub fn decoded_structure(&self) -> Structure {
        Structure::decode(self.structure.as_ref())
    }
}

// =============================================================================
// LANGUAGE
// =============================================================================

/// Which phrase list drives labels and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cn,
}

// =============================================================================
// STRUCTURE
// =============================================================================

/// Phrases for one category. The two lists are independent: no index
/// correspondence is assumed and their lengths may differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryValue {
    pub en: Vec<String>,
    pub cn: Vec<String>,
}

impl CategoryValue {
    #[must_use]
    pub fn phrases(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Cn => &self.cn,
        }
    }

    /// Lenient per-category decode: a missing or non-array list is empty and
    /// non-string elements are skipped.
    fn from_value(value: &Value) -> Self {
        Self { en: string_list(value.get("en")), cn: string_list(value.get("cn")) }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect())
        .unwrap_or_default()
}

/// Decoded structure: categories in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    pub categories: Vec<(String, CategoryValue)>,
}

impl Structure {
    /// Decode a `structure` value that is either JSON text or an already
    /// decoded object. Absent, unparseable, or non-object input yields an
    /// empty structure.
    #[must_use]
    pub fn decode(raw: Option<&Value>) -> Self {
        let parsed = match raw {
            Some(Value::String(text)) => serde_json::from_str::<Value>(text).ok(),
            Some(value) => Some(value.clone()),
            None => None,
        };

        let Some(Value::Object(map)) = parsed else {
            return Self::default();
        };

        let categories = map
            .into_iter()
            .map(|(key, value)| {
                let category = CategoryValue::from_value(&value);
                (key, category)
            })
            .collect();

        Self { categories }
    }

    /// Categories whose phrase list for `language` is non-empty, in order.
    pub fn valid_categories(&self, language: Language) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(move |(key, value)| (key.as_str(), value.phrases(language)))
            .filter(|(_, phrases)| !phrases.is_empty())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
