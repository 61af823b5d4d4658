//! Settings store contract and the stores shipped with the crate
//!
//! A store is opened once per lookup. The handle returned by
//! [`SettingsDatabase::open`] exposes the `settings` table, queried by key.

pub mod json_file;
pub mod memory;

pub use json_file::JsonSettings;
pub use memory::MemorySettings;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Key of the row holding the extension's on/off status
pub const STATUS_KEY: &str = "status";

/// One row of the settings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRow {
    pub id: i64,
    pub key: String,
    pub value: serde_json::Value,
}

impl SettingsRow {
    pub fn new(id: i64, key: impl Into<String>, value: serde_json::Value) -> Self {
        Self { id, key: key.into(), value }
    }
}

/// Opened settings table
#[async_trait]
pub trait SettingsTable: Send + Sync {
    /// Look up the row stored under `key`
    async fn get(&self, key: &str) -> Result<Option<SettingsRow>>;
}

/// A settings store that can be opened for reading
#[async_trait]
pub trait SettingsDatabase: Send + Sync {
    async fn open(&self) -> Result<Arc<dyn SettingsTable>>;
}
