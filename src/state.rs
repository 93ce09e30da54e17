//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the prompt store, the category label table, and the layout
//! constants. Nothing in it is mutated after startup.

use std::sync::Arc;

use crate::layout::LayoutConfig;
use crate::layout::labels::CategoryLabels;
use crate::prompt::store::PromptStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PromptStore>,
    pub labels: Arc<CategoryLabels>,
    pub layout: LayoutConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PromptStore>, labels: CategoryLabels) -> Self {
        Self { store, labels: Arc::new(labels), layout: LayoutConfig::default() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::prompt::PromptRecord;
    use crate::prompt::store::StoreError;

    /// Minimal record with only the required prompt text set.
    #[must_use]
    pub fn record(id: i64, prompt: impl Into<String>) -> PromptRecord {
        PromptRecord {
            id,
            model_name: None,
            prompt: prompt.into(),
            prompt_cn: None,
            image_url: None,
            source: None,
            source_id: None,
            search_keyword: None,
            structure: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// In-memory `PromptStore`. `random_id` returns the first eligible record
    /// so tests stay deterministic.
    pub struct MemoryPromptStore {
        pub records: Vec<PromptRecord>,
        pub min_structure_len: usize,
        /// When set, every query fails as if the database were unreachable.
        pub fail: bool,
    }

    impl MemoryPromptStore {
        #[must_use]
        pub fn new(records: Vec<PromptRecord>) -> Self {
            Self { records, min_structure_len: 50, fail: false }
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    fn structure_len(record: &PromptRecord) -> usize {
        match &record.structure {
            Some(serde_json::Value::String(text)) => text.chars().count(),
            Some(value) => value.to_string().chars().count(),
            None => 0,
        }
    }

    #[async_trait::async_trait]
    impl PromptStore for MemoryPromptStore {
        async fn get_by_id(&self, id: i64) -> Result<Option<PromptRecord>, StoreError> {
            self.check()?;
            Ok(self.records.iter().find(|r| r.id == id).cloned())
        }

        async fn next_id(&self, after: i64) -> Result<Option<i64>, StoreError> {
            self.check()?;
            Ok(self
                .records
                .iter()
                .filter(|r| r.id > after && r.structure.is_some())
                .map(|r| r.id)
                .min())
        }

        async fn random_id(&self) -> Result<Option<i64>, StoreError> {
            self.check()?;
            Ok(self
                .records
                .iter()
                .find(|r| r.structure.is_some() && structure_len(r) > self.min_structure_len)
                .map(|r| r.id))
        }
    }

    /// Create a test `AppState` over an in-memory store.
    #[must_use]
    pub fn test_app_state(records: Vec<PromptRecord>) -> AppState {
        AppState::new(Arc::new(MemoryPromptStore::new(records)), CategoryLabels::default())
    }

    /// Create a test `AppState` whose store always fails.
    #[must_use]
    pub fn failing_app_state() -> AppState {
        let store = MemoryPromptStore { fail: true, ..MemoryPromptStore::new(Vec::new()) };
        AppState::new(Arc::new(store), CategoryLabels::default())
    }
}
