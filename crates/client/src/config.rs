//! Board configuration from environment variables.
//!
//! Desktop builds read the variables at startup. Web builds have no process
//! environment, so the same names are captured at compile time.

use std::time::Duration;

use anyhow::{bail, Context};
use gratitude_shared::DEFAULT_PAGE_SIZE;

/// Default lifetime of the "posted" banner.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3000);

/// Whether a post needs a named author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorPolicy {
    /// Blank authors are posted as "Anonymous".
    #[default]
    Optional,
    /// Submissions without an author are not sent.
    Required,
}

/// How the feed is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// `GET /api/posts?page={n}&limit={limit}`
    Paged { limit: usize },
    /// `GET /api/posts`, whole feed in one response.
    Unpaged,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::Paged {
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub api_base: String,
    pub pagination: Pagination,
    pub author_policy: AuthorPolicy,
    /// Periodic `load(1)`; `None` means manual refresh only.
    pub refresh_interval: Option<Duration>,
    pub banner_duration: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            pagination: Pagination::default(),
            author_policy: AuthorPolicy::default(),
            refresh_interval: None,
            banner_duration: DEFAULT_BANNER_DURATION,
        }
    }
}

impl BoardConfig {
    /// Load configuration from the environment.
    ///
    /// Environment variables:
    /// - `GRATITUDE_API_BASE`: base URL of the posts API (default: page origin on web, `http://localhost:3000` on desktop)
    /// - `GRATITUDE_PAGE_SIZE`: posts per page, or `all` for a single unpaged request (default: 10)
    /// - `GRATITUDE_AUTHOR_POLICY`: `optional` | `required` (default: `optional`)
    /// - `GRATITUDE_REFRESH_SECS`: periodic refresh interval, `0` disables (default: disabled)
    /// - `GRATITUDE_BANNER_MS`: success banner lifetime (default: 3000)
    ///
    /// Invalid values are logged and the defaults are used instead.
    pub fn from_env() -> Self {
        match Self::from_lookup(env_var) {
            Ok(config) => config,
            Err(e) => {
                crate::log_warn!("invalid board configuration, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup("GRATITUDE_API_BASE").filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(size) = lookup("GRATITUDE_PAGE_SIZE") {
            config.pagination = parse_pagination(&size)?;
        }

        if let Some(policy) = lookup("GRATITUDE_AUTHOR_POLICY") {
            config.author_policy = match policy.trim().to_lowercase().as_str() {
                "optional" => AuthorPolicy::Optional,
                "required" => AuthorPolicy::Required,
                other => bail!("GRATITUDE_AUTHOR_POLICY must be optional or required, got {other:?}"),
            };
        }

        if let Some(secs) = lookup("GRATITUDE_REFRESH_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("GRATITUDE_REFRESH_SECS is not a number: {secs:?}"))?;
            config.refresh_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(ms) = lookup("GRATITUDE_BANNER_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("GRATITUDE_BANNER_MS is not a number: {ms:?}"))?;
            config.banner_duration = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_pagination(raw: &str) -> anyhow::Result<Pagination> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Pagination::Unpaged);
    }
    let limit: usize = raw
        .parse()
        .with_context(|| format!("GRATITUDE_PAGE_SIZE is not a number: {raw:?}"))?;
    if limit == 0 {
        bail!("GRATITUDE_PAGE_SIZE must be positive");
    }
    Ok(Pagination::Paged { limit })
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(key: &str) -> Option<String> {
    let value = match key {
        "GRATITUDE_API_BASE" => option_env!("GRATITUDE_API_BASE"),
        "GRATITUDE_PAGE_SIZE" => option_env!("GRATITUDE_PAGE_SIZE"),
        "GRATITUDE_AUTHOR_POLICY" => option_env!("GRATITUDE_AUTHOR_POLICY"),
        "GRATITUDE_REFRESH_SECS" => option_env!("GRATITUDE_REFRESH_SECS"),
        "GRATITUDE_BANNER_MS" => option_env!("GRATITUDE_BANNER_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    "http://localhost:3000".to_string()
}

// reqwest in the browser needs an absolute URL, so default to the page origin.
#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
