//! Response metadata: rate limits and pagination links

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Rate budget reported by the server on the most recent response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests remaining in the current window
    pub remaining: u64,
    /// When the window resets
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Parse `X-RateLimit-{Limit,Remaining,Reset}` headers.
    ///
    /// Returns `None` when any of the three is missing or malformed;
    /// a partial rate budget is worse than none.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let parse = |name: &str| -> Option<u64> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        };
        let limit = parse("X-RateLimit-Limit")?;
        let remaining = parse("X-RateLimit-Remaining")?;
        let reset_epoch = parse("X-RateLimit-Reset")?;
        let reset = Utc.timestamp_opt(reset_epoch as i64, 0).single()?;
        Some(Self {
            limit,
            remaining,
            reset,
        })
    }
}

/// Pagination relations for one list response
///
/// Populated from the `Link` response header and, when the body carries a
/// `links.pages` object, overridden per relation by the body values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Body-side `links.pages` object
#[derive(Deserialize, Debug, Default, Clone)]
pub struct BodyPages {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

impl PageLinks {
    /// Parse a `Link` header of the form `<uri>; rel="next", <uri>; rel="last"`.
    ///
    /// Relations other than the four pagination ones are ignored here; the
    /// `monitor` relation is extracted separately by the transport.
    pub fn from_link_header(value: &str) -> Self {
        let mut links = Self::default();
        for (uri, rel) in parse_link_header(value) {
            match rel.as_str() {
                "first" => links.first = Some(uri),
                "prev" => links.prev = Some(uri),
                "next" => links.next = Some(uri),
                "last" => links.last = Some(uri),
                _ => {}
            }
        }
        links
    }

    /// Override relations with the body's `links.pages` values where present.
    pub fn merge_body(&mut self, pages: &BodyPages) {
        if pages.first.is_some() {
            self.first = pages.first.clone();
        }
        if pages.prev.is_some() {
            self.prev = pages.prev.clone();
        }
        if pages.next.is_some() {
            self.next = pages.next.clone();
        }
        if pages.last.is_some() {
            self.last = pages.last.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }
}

/// Split a `Link` header into `(uri, rel)` pairs
pub(crate) fn parse_link_header(value: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        let Some(end) = part.find('>') else { continue };
        if !part.starts_with('<') {
            continue;
        }
        let uri = part[1..end].to_string();
        let Some(rel) = part[end + 1..]
            .split(';')
            .map(str::trim)
            .find_map(|p| p.strip_prefix("rel="))
        else {
            continue;
        };
        let rel = rel.trim_matches('"').to_string();
        pairs.push((uri, rel));
    }
    pairs
}

/// Per-invocation list options, written as `page`/`per_page` query params
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOpts {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListOpts {
    /// Render as query pairs, omitting unset fields
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(page) = self.page {
            q.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            q.push(("per_page", per_page.to_string()));
        }
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn headers(entries: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in entries {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let map = headers(&[
            ("X-RateLimit-Limit", "5000"),
            ("X-RateLimit-Remaining", "4999"),
            ("X-RateLimit-Reset", "1700000000"),
        ]);
        let rate = RateLimit::from_headers(&map).unwrap();
        assert_eq!(rate.limit, 5000);
        assert_eq!(rate.remaining, 4999);
        assert_eq!(rate.reset.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_rate_limit_missing_header_yields_none() {
        let map = headers(&[
            ("X-RateLimit-Limit", "5000"),
            ("X-RateLimit-Remaining", "4999"),
        ]);
        assert!(RateLimit::from_headers(&map).is_none());
    }

    #[test]
    fn test_rate_limit_malformed_header_yields_none() {
        let map = headers(&[
            ("X-RateLimit-Limit", "lots"),
            ("X-RateLimit-Remaining", "4999"),
            ("X-RateLimit-Reset", "1700000000"),
        ]);
        assert!(RateLimit::from_headers(&map).is_none());
    }

    #[test]
    fn test_link_header_all_relations() {
        let value = "<https://api.nimbus.cloud/v2/servers?page=3>; rel=\"next\", \
                     <https://api.nimbus.cloud/v2/servers?page=1>; rel=\"prev\", \
                     <https://api.nimbus.cloud/v2/servers?page=1>; rel=\"first\", \
                     <https://api.nimbus.cloud/v2/servers?page=9>; rel=\"last\"";
        let links = PageLinks::from_link_header(value);
        assert_eq!(
            links.next.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=3")
        );
        assert_eq!(
            links.prev.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=1")
        );
        assert_eq!(
            links.first.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=1")
        );
        assert_eq!(
            links.last.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=9")
        );
    }

    #[test]
    fn test_link_header_contains_exactly_named_relations() {
        let value = "<https://api.nimbus.cloud/v2/servers?page=2>; rel=\"next\"";
        let links = PageLinks::from_link_header(value);
        assert!(links.next.is_some());
        assert!(links.prev.is_none());
        assert!(links.first.is_none());
        assert!(links.last.is_none());
    }

    #[test]
    fn test_link_header_monitor_relation_not_a_page_link() {
        let value = "<https://api.nimbus.cloud/v2/actions/99>; rel=\"monitor\"";
        let links = PageLinks::from_link_header(value);
        assert!(links.is_empty());
        let pairs = parse_link_header(value);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "monitor");
    }

    #[test]
    fn test_link_header_garbage_segments_skipped() {
        let value = "nonsense, <https://x.example/a?page=2>; rel=\"next\", <no-rel>";
        let links = PageLinks::from_link_header(value);
        assert_eq!(links.next.as_deref(), Some("https://x.example/a?page=2"));
        assert!(links.last.is_none());
    }

    #[test]
    fn test_merge_body_overrides_per_relation() {
        let mut links = PageLinks {
            next: Some("header-next".to_string()),
            last: Some("header-last".to_string()),
            ..Default::default()
        };
        let pages = BodyPages {
            next: Some("body-next".to_string()),
            ..Default::default()
        };
        links.merge_body(&pages);
        assert_eq!(links.next.as_deref(), Some("body-next"));
        assert_eq!(links.last.as_deref(), Some("header-last"));
    }

    #[test]
    fn test_list_opts_query_omits_unset() {
        let opts = ListOpts::default();
        assert!(opts.query().is_empty());

        let opts = ListOpts {
            page: Some(2),
            per_page: Some(50),
        };
        assert_eq!(
            opts.query(),
            vec![("page", "2".to_string()), ("per_page", "50".to_string())]
        );
    }
}
