//! Stateless helper operations for extension code
//!
//! `parse_txt` and `parse_url` are pure. The async operations take the capability
//! they need as an argument, so callers decide which host and store back them.
//! Failures from the host or store are returned unchanged; nothing here retries.

pub mod parse;

pub use parse::{ParsedUrl, parse_txt, parse_url};

use crate::{error::Result,
            host::{BadgeText, HostBrowser, TabInfo, TabQuery},
            settings::{STATUS_KEY, SettingsDatabase}};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, time::Duration};

/// Stored extension status together with its row id. Both are `None` when no status row exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionStatus {
    pub status: Option<serde_json::Value>,
    pub id: Option<i64>,
}

/// Set the toolbar badge text to `message` rendered as a string
pub async fn set_badge(host: &dyn HostBrowser, message: impl Display) -> Result<()> {
    let badge = BadgeText::new(message.to_string());
    log::debug!("Setting badge text to {:?}", badge.text);

    host.set_badge_text(badge).await
}

/// Wait at least `ms` milliseconds without blocking other tasks
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// The active tab of the focused window, if the host reports one
pub async fn get_current_tab(host: &dyn HostBrowser) -> Result<Option<TabInfo>> {
    let tabs = host.query_tabs(TabQuery::current_tab()).await?;

    if tabs.len() > 1 {
        log::debug!("Host reported {} current tabs, using the first", tabs.len());
    }

    Ok(tabs.into_iter().next())
}

/// Read the `status` setting and its row id
pub async fn get_extension_status(db: &dyn SettingsDatabase) -> Result<ExtensionStatus> {
    let table = db.open().await?;

    let status = match table.get(STATUS_KEY).await? {
        Some(row) => ExtensionStatus { status: Some(row.value), id: Some(row.id) },
        None => {
            log::debug!("No {:?} row in settings store", STATUS_KEY);
            ExtensionStatus::default()
        }
    };

    Ok(status)
}
