use crate::{browser::BrowserSession,
            error::{HelperError, Result},
            host::{BadgeText, HostBrowser, TabInfo, TabQuery}};
use async_trait::async_trait;
use headless_chrome::Tab;
use std::sync::Arc;

/// [`HostBrowser`] backed by a Chrome DevTools Protocol session.
///
/// CDP has no notion of the extension toolbar, so badge updates are evaluated inside an
/// open extension page where the `chrome.action` API is in scope. All tabs are reported
/// as belonging to the current window.
#[derive(Clone)]
pub struct ChromeHost {
    session: Arc<BrowserSession>,
}

impl ChromeHost {
    pub fn new(session: BrowserSession) -> Self {
        Self { session: Arc::new(session) }
    }
}

#[async_trait]
impl HostBrowser for ChromeHost {
    async fn set_badge_text(&self, badge: BadgeText) -> Result<()> {
        let session = Arc::clone(&self.session);
        let script = badge_script(&badge)?;

        run_blocking(move || {
            let page = session.find_extension_page()?.ok_or_else(|| {
                HelperError::HostUnavailable("no extension page is open to reach the badge API".to_string())
            })?;

            log::debug!("Setting badge text via {}", page.get_url());
            session.evaluate(&page, &script)?;
            Ok(())
        })
        .await
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabInfo>> {
        let session = Arc::clone(&self.session);

        run_blocking(move || describe_tabs(&session, query)).await
    }
}

fn describe_tabs(session: &BrowserSession, query: TabQuery) -> Result<Vec<TabInfo>> {
    // Every CDP target counts as part of the current window
    if query.current_window == Some(false) {
        return Ok(Vec::new());
    }

    let tabs = session.get_tabs()?;

    let active_id = match session.get_active_tab() {
        Ok(tab) => Some(tab.get_target_id().clone()),
        Err(e) => {
            log::debug!("No active tab detected: {}", e);
            None
        }
    };

    let described = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| describe_tab(tab, index, active_id.as_deref()))
        .filter(|info| query.active.is_none_or(|active| info.active == active))
        .collect();

    Ok(described)
}

fn describe_tab(tab: &Arc<Tab>, index: usize, active_id: Option<&str>) -> TabInfo {
    let id = tab.get_target_id().clone();
    let active = active_id == Some(id.as_str());

    let mut info = TabInfo::new(id, index).with_url(tab.get_url()).with_active(active);
    if let Ok(title) = tab.get_title() {
        info = info.with_title(title);
    }
    info
}

/// Script calling whichever badge API the extension page exposes
fn badge_script(badge: &BadgeText) -> Result<String> {
    let details = serde_json::to_string(badge)?;

    Ok(format!(
        r#"
            (function() {{
                const api = (globalThis.chrome && (chrome.action || chrome.browserAction))
                    || (globalThis.browser && browser.browserAction);
                if (!api) {{
                    throw new Error("badge API not available");
                }}
                return Promise.resolve(api.setBadgeText({details})).then(() => true);
            }})()
        "#
    ))
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| HelperError::HostUnavailable(format!("CDP worker failed: {}", e)))?
}
