use crate::{error::Result,
            settings::{MemorySettings, SettingsDatabase, SettingsRow, SettingsTable}};
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf, sync::Arc};

/// Settings store persisted as a JSON array of `{ "id", "key", "value" }` rows.
///
/// The file is read again on every [`SettingsDatabase::open`]; a missing file opens empty.
#[derive(Debug, Clone)]
pub struct JsonSettings {
    path: PathBuf,
}

impl JsonSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsDatabase for JsonSettings {
    async fn open(&self) -> Result<Arc<dyn SettingsTable>> {
        let rows: Vec<SettingsRow> = match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Settings file {} not found, opening empty", self.path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        log::debug!("Opened {} settings rows from {}", rows.len(), self.path.display());
        Ok(Arc::new(MemorySettings::from_rows(rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelperError;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_reads_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"[{"id": 3, "key": "status", "value": false}]"#).unwrap();

        let table = JsonSettings::new(&path).open().await.unwrap();
        let row = table.get("status").await.unwrap().expect("status row");
        assert_eq!(row.id, 3);
        assert_eq!(row.value, json!(false));
    }

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let table = JsonSettings::new(dir.path().join("absent.json")).open().await.unwrap();

        assert!(table.get("status").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonSettings::new(&path).open().await;
        assert!(matches!(result, Err(HelperError::Json(_))));
    }

    #[tokio::test]
    async fn test_open_rereads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = JsonSettings::new(&path);
        assert!(store.open().await.unwrap().get("status").await.unwrap().is_none());

        fs::write(&path, r#"[{"id": 1, "key": "status", "value": true}]"#).unwrap();
        assert!(store.open().await.unwrap().get("status").await.unwrap().is_some());
    }
}
