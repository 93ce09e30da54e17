//! Localized category labels.
//!
//! A read-only key -> label table consulted when the secondary language is
//! selected. Loaded once at startup and shared through `AppState`; it is never
//! mutated afterwards.

use std::collections::HashMap;
use std::path::Path;

const BUILTIN_LABELS: &str = include_str!("category_labels.json");

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("failed to read label file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid label table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLabels {
    labels: HashMap<String, String>,
}

impl CategoryLabels {
    /// Parse a JSON object of `key: label` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Json`] if the text is not a string-to-string object.
    pub fn from_json_str(text: &str) -> Result<Self, LabelError> {
        let labels: HashMap<String, String> = serde_json::from_str(text)?;
        Ok(Self { labels })
    }

    /// The table bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Json`] if the bundled table is malformed.
    pub fn builtin() -> Result<Self, LabelError> {
        Self::from_json_str(BUILTIN_LABELS)
    }

    /// Load the table from `path`, or the built-in table when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`LabelError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, LabelError> {
        let Some(path) = path else {
            return Self::builtin();
        };
        let text = std::fs::read_to_string(path)
            .map_err(|source| LabelError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    /// Localized label for `key`, falling back to the key itself.
    #[must_use]
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map_or(key, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

impl FromIterator<(String, String)> for CategoryLabels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { labels: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod tests;
