//! Chrome session management backing [`crate::host::ChromeHost`]

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
