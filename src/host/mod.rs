//! Host browser automation contract
//!
//! The helper never talks to a global browser handle. Everything it needs from the
//! browser goes through [`HostBrowser`], so tests can substitute a fake host and
//! real deployments can plug in [`ChromeHost`] or any other backend.

pub mod chrome;

pub use chrome::ChromeHost;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Details for setting the toolbar badge text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeText {
    pub text: String,
}

impl BadgeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Filter for [`HostBrowser::query_tabs`]. `None` fields do not constrain the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_window: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TabQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: restrict to the currently focused window
    pub fn current_window(mut self, current_window: bool) -> Self {
        self.current_window = Some(current_window);
        self
    }

    /// Builder method: restrict by active state
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// The active tab of the focused window
    pub fn current_tab() -> Self {
        Self::new().current_window(true).active(true)
    }
}

/// Tab descriptor as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    /// Host-assigned tab identifier
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i64>,

    /// Position of the tab within its window
    pub index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub active: bool,
}

impl TabInfo {
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self { id: id.into(), index, ..Default::default() }
    }

    /// Builder method: set URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: set window id
    pub fn with_window(mut self, window_id: i64) -> Self {
        self.window_id = Some(window_id);
        self
    }

    /// Builder method: set active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Browser capabilities consumed by the helper
#[async_trait]
pub trait HostBrowser: Send + Sync {
    /// Set the extension's toolbar badge text
    async fn set_badge_text(&self, badge: BadgeText) -> Result<()>;

    /// Return every tab matching `query`, in tab order
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>>;
}
