use crate::{error::{HelperError, Result},
            settings::{SettingsDatabase, SettingsRow, SettingsTable}};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-process settings store keyed by setting name, in insertion order.
///
/// Ids are assigned from 1 upwards; replacing a value keeps the row's id.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    inner: Arc<RwLock<Rows>>,
}

#[derive(Debug, Default)]
struct Rows {
    rows: IndexMap<String, SettingsRow>,
    next_id: i64,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from rows, keeping their ids
    pub fn from_rows(rows: impl IntoIterator<Item = SettingsRow>) -> Self {
        let mut state = Rows::default();
        for row in rows {
            state.next_id = state.next_id.max(row.id);
            state.rows.insert(row.key.clone(), row);
        }
        Self { inner: Arc::new(RwLock::new(state)) }
    }

    /// Insert or replace `key`, returning the row id
    pub fn put(&self, key: impl Into<String>, value: serde_json::Value) -> Result<i64> {
        let key = key.into();
        let mut state = self.inner.write().map_err(|e| HelperError::Settings(e.to_string()))?;

        if let Some(row) = state.rows.get_mut(&key) {
            row.value = value;
            return Ok(row.id);
        }

        state.next_id += 1;
        let id = state.next_id;
        state.rows.insert(key.clone(), SettingsRow::new(id, key, value));
        Ok(id)
    }

    /// All rows in insertion order
    pub fn rows(&self) -> Result<Vec<SettingsRow>> {
        let state = self.inner.read().map_err(|e| HelperError::Settings(e.to_string()))?;
        Ok(state.rows.values().cloned().collect())
    }

    pub fn len(&self) -> Result<usize> {
        let state = self.inner.read().map_err(|e| HelperError::Settings(e.to_string()))?;
        Ok(state.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SettingsTable for MemorySettings {
    async fn get(&self, key: &str) -> Result<Option<SettingsRow>> {
        let state = self.inner.read().map_err(|e| HelperError::Settings(e.to_string()))?;
        Ok(state.rows.get(key).cloned())
    }
}

#[async_trait]
impl SettingsDatabase for MemorySettings {
    async fn open(&self) -> Result<Arc<dyn SettingsTable>> {
        Ok(Arc::new(self.clone()))
    }
}
