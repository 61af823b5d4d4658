use async_trait::async_trait;
use extension_helper::{BadgeText, ExtensionStatus, HelperError, HostBrowser, Result, SettingsDatabase, SettingsRow,
                       SettingsTable, TabInfo, TabQuery, get_current_tab, get_extension_status, set_badge};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Host that records calls and answers queries from a fixed tab list
#[derive(Default)]
struct MockHost {
    tabs: Vec<TabInfo>,
    badges: Mutex<Vec<String>>,
    queries: Mutex<Vec<TabQuery>>,
    fail: bool,
}

impl MockHost {
    fn with_tabs(tabs: Vec<TabInfo>) -> Self {
        Self { tabs, ..Default::default() }
    }

    fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }
}

#[async_trait]
impl HostBrowser for MockHost {
    async fn set_badge_text(&self, badge: BadgeText) -> Result<()> {
        if self.fail {
            return Err(HelperError::HostUnavailable("permission denied".to_string()));
        }
        self.badges.lock().unwrap().push(badge.text);
        Ok(())
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>> {
        if self.fail {
            return Err(HelperError::HostUnavailable("tabs API missing".to_string()));
        }
        self.queries.lock().unwrap().push(query);

        Ok(self
            .tabs
            .iter()
            .filter(|tab| query.active.is_none_or(|active| tab.active == active))
            .cloned()
            .collect())
    }
}

/// Store whose single table is a fixed list of rows
struct MockStore {
    rows: Vec<SettingsRow>,
    opens: Mutex<usize>,
}

impl MockStore {
    fn new(rows: Vec<SettingsRow>) -> Self {
        Self { rows, opens: Mutex::new(0) }
    }
}

struct MockTable(Vec<SettingsRow>);

#[async_trait]
impl SettingsTable for MockTable {
    async fn get(&self, key: &str) -> Result<Option<SettingsRow>> {
        Ok(self.0.iter().find(|row| row.key == key).cloned())
    }
}

#[async_trait]
impl SettingsDatabase for MockStore {
    async fn open(&self) -> Result<Arc<dyn SettingsTable>> {
        *self.opens.lock().unwrap() += 1;
        Ok(Arc::new(MockTable(self.rows.clone())))
    }
}

struct UnavailableStore;

#[async_trait]
impl SettingsDatabase for UnavailableStore {
    async fn open(&self) -> Result<Arc<dyn SettingsTable>> {
        Err(HelperError::Settings("store unavailable".to_string()))
    }
}

#[tokio::test]
async fn test_get_current_tab_returns_active_tab() {
    let host = MockHost::with_tabs(vec![
        TabInfo::new("1", 0).with_url("https://a.example/"),
        TabInfo::new("2", 1).with_url("https://b.example/").with_active(true),
    ]);

    let tab = get_current_tab(&host).await.unwrap().expect("current tab");
    assert_eq!(tab.id, "2");

    let queries = host.queries.lock().unwrap();
    assert_eq!(*queries, vec![TabQuery::current_tab()]);
}

#[tokio::test]
async fn test_get_current_tab_none_when_host_returns_nothing() {
    let host = MockHost::with_tabs(Vec::new());

    assert!(get_current_tab(&host).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_current_tab_takes_first_match() {
    let host = MockHost::with_tabs(vec![
        TabInfo::new("a", 0).with_active(true),
        TabInfo::new("b", 0).with_window(2).with_active(true),
    ]);

    let tab = get_current_tab(&host).await.unwrap().expect("current tab");
    assert_eq!(tab.id, "a");
}

#[tokio::test]
async fn test_get_current_tab_propagates_host_errors() {
    let result = get_current_tab(&MockHost::failing()).await;
    assert!(matches!(result, Err(HelperError::HostUnavailable(_))));
}

#[tokio::test]
async fn test_set_badge_stringifies_values() {
    let host = MockHost::default();

    set_badge(&host, 42).await.unwrap();
    set_badge(&host, "on").await.unwrap();
    set_badge(&host, "").await.unwrap();

    assert_eq!(*host.badges.lock().unwrap(), vec!["42", "on", ""]);
}

#[tokio::test]
async fn test_set_badge_propagates_host_errors() {
    let result = set_badge(&MockHost::failing(), 1).await;
    assert!(matches!(result, Err(HelperError::HostUnavailable(_))));
}

#[tokio::test]
async fn test_get_extension_status_reads_status_row() {
    let store = MockStore::new(vec![
        SettingsRow::new(1, "whitelist", json!(["example.com"])),
        SettingsRow::new(7, "status", json!(true)),
    ]);

    let status = get_extension_status(&store).await.unwrap();
    assert_eq!(status, ExtensionStatus { status: Some(json!(true)), id: Some(7) });
    assert_eq!(*store.opens.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_get_extension_status_absent_row() {
    let store = MockStore::new(vec![SettingsRow::new(1, "other", json!(1))]);

    let status = get_extension_status(&store).await.unwrap();
    assert!(status.status.is_none());
    assert!(status.id.is_none());
}

#[tokio::test]
async fn test_get_extension_status_propagates_store_errors() {
    let result = get_extension_status(&UnavailableStore).await;
    assert!(matches!(result, Err(HelperError::Settings(_))));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let host = Arc::new(MockHost::with_tabs(vec![TabInfo::new("1", 0).with_active(true)]));

    let (first, second, _) = tokio::join!(
        get_current_tab(host.as_ref()),
        get_current_tab(host.as_ref()),
        set_badge(host.as_ref(), 5)
    );

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(host.queries.lock().unwrap().len(), 2);
}
