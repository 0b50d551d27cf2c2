//! Source-domain trust rating
//!
//! Exact, case-insensitive lookup of a host name in curated allow and deny
//! lists. Subdomains are not matched: `www.bbc.com` is not `bbc.com`.

use crate::models::TrustTier;
use crate::utils::TrustConfig;
use std::collections::HashSet;
use url::Url;

/// Outlets rated `High`
pub const TRUSTED_DOMAINS: &[&str] = &[
    "reuters.com",
    "ap.org",
    "bbc.com",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
    "npr.org",
    "pbs.org",
    "abcnews.go.com",
    "cbsnews.com",
    "nbcnews.com",
    "foxnews.com",
    "usatoday.com",
];

/// Outlets rated `Low`
pub const UNRELIABLE_DOMAINS: &[&str] = &[
    "infowars.com",
    "breitbart.com",
    "naturalnews.com",
    "beforeitsnews.com",
    "veteranstoday.com",
    "whatreallyhappened.com",
];

/// Host component of an absolute URL, without port or userinfo
pub fn domain_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_string())
}

fn domain_set<'a>(domains: impl Iterator<Item = &'a str>) -> HashSet<String> {
    domains
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct TrustRater {
    trusted: HashSet<String>,
    unreliable: HashSet<String>,
}

impl TrustRater {
    /// Built-in lists extended with the configured domains
    pub fn new(config: &TrustConfig) -> Self {
        Self {
            trusted: domain_set(
                TRUSTED_DOMAINS
                    .iter()
                    .copied()
                    .chain(config.trusted_domains.iter().map(String::as_str)),
            ),
            unreliable: domain_set(
                UNRELIABLE_DOMAINS
                    .iter()
                    .copied()
                    .chain(config.unreliable_domains.iter().map(String::as_str)),
            ),
        }
    }

    pub fn rate(&self, domain: Option<&str>) -> TrustTier {
        let domain = match domain.map(str::trim) {
            Some(d) if !d.is_empty() => d.to_lowercase(),
            _ => return TrustTier::Unknown,
        };

        if self.trusted.contains(&domain) {
            TrustTier::High
        } else if self.unreliable.contains(&domain) {
            TrustTier::Low
        } else {
            TrustTier::Medium
        }
    }

    /// Rate the host of `url`; `Unknown` when there is no usable host
    pub fn rate_url(&self, url: Option<&str>) -> TrustTier {
        let domain = url.and_then(domain_from_url);
        self.rate(domain.as_deref())
    }
}

impl Default for TrustRater {
    fn default() -> Self {
        Self::new(&TrustConfig::default())
    }
}
