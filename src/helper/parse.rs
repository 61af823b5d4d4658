use serde::{Deserialize, Serialize};
use url::Url;

/// Lines starting with this marker are comments in filter lists
const COMMENT_MARKER: &str = "!";

/// Extract the usable lines from a text body.
///
/// Only the part before the first `\r\n` is considered. That part is split on `\n`
/// and empty lines and `!` comments are dropped, order preserved.
pub fn parse_txt(body: &str) -> Vec<&str> {
    let first_segment = body.split("\r\n").next().unwrap_or_default();

    first_segment
        .split('\n')
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect()
}

/// Outcome of [`parse_url`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// True only when both `url` and `domain` are present
    pub status: bool,

    /// The parsed URL
    pub url: Option<Url>,

    /// Hostname with the leading label stripped when it contains `www.`
    pub domain: Option<String>,
}

impl ParsedUrl {
    fn failed() -> Self {
        Self { status: false, url: None, domain: None }
    }

    /// Domain when the parse succeeded
    pub fn domain(&self) -> Option<&str> {
        if self.status { self.domain.as_deref() } else { None }
    }
}

/// Parse and validate a URL, deriving its domain. Never fails: problems are encoded in `status`.
pub fn parse_url(input: &str) -> ParsedUrl {
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("Rejected URL {:?}: {}", input, e);
            return ParsedUrl::failed();
        }
    };

    let domain = url.host_str().map(domain_of).filter(|domain| !domain.is_empty());

    ParsedUrl { status: domain.is_some(), url: Some(url), domain }
}

/// Drop everything up to the first dot when `www.` appears anywhere in the hostname
fn domain_of(hostname: &str) -> String {
    if hostname.contains("www.") {
        if let Some((_, rest)) = hostname.split_once('.') {
            return rest.to_string();
        }
    }

    hostname.to_string()
}
