//! # extension-helper
//!
//! Small helpers shared by browser extension code, with the browser and the settings
//! store injected as capabilities instead of reached through globals.
//!
//! ## Features
//!
//! - **Filter-list parsing**: [`parse_txt`] keeps the non-empty, non-comment lines of a text body
//! - **URL validation**: [`parse_url`] parses a URL and derives its domain without ever failing
//! - **Badge text**: [`set_badge`] updates the extension's toolbar badge
//! - **Current tab**: [`get_current_tab`] asks the host for the active tab of the focused window
//! - **Extension status**: [`get_extension_status`] reads the `status` row of a settings store
//! - **Chrome backend**: [`ChromeHost`] implements the host contract over the Chrome DevTools Protocol
//!
//! ## Usage
//!
//! ```rust,no_run
//! use extension_helper::{MemorySettings, get_extension_status, parse_txt, parse_url};
//!
//! # #[tokio::main]
//! # async fn main() -> extension_helper::Result<()> {
//! let lines = parse_txt("example.com\n! comment\nads.example.net");
//! assert_eq!(lines, vec!["example.com", "ads.example.net"]);
//!
//! let parsed = parse_url("https://www.example.com/page");
//! assert_eq!(parsed.domain(), Some("example.com"));
//!
//! let settings = MemorySettings::new();
//! settings.put("status", serde_json::json!(true))?;
//! let status = get_extension_status(&settings).await?;
//! println!("status {:?} (row {:?})", status.status, status.id);
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving a real browser
//!
//! ```rust,no_run
//! use extension_helper::{BrowserSession, ChromeHost, LaunchOptions, get_current_tab, set_badge};
//!
//! # #[tokio::main]
//! # async fn main() -> extension_helper::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::new().headless(false).extension("./my-extension"))?;
//! let host = ChromeHost::new(session);
//!
//! if let Some(tab) = get_current_tab(&host).await? {
//!     println!("current tab: {:?}", tab.url);
//! }
//! set_badge(&host, 3).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`helper`]: The helper operations and their result types
//! - [`host`]: Host browser contract and the CDP-backed implementation
//! - [`browser`]: Chrome session management and launch/connection options
//! - [`settings`]: Settings store contract, in-memory and JSON file stores
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod error;
pub mod helper;
pub mod host;
pub mod settings;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use error::{HelperError, Result};
pub use helper::{ExtensionStatus, ParsedUrl, get_current_tab, get_extension_status, parse_txt, parse_url, set_badge,
                 sleep};
pub use host::{BadgeText, ChromeHost, HostBrowser, TabInfo, TabQuery};
pub use settings::{JsonSettings, MemorySettings, STATUS_KEY, SettingsDatabase, SettingsRow, SettingsTable};
