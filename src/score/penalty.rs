//! URL-derived penalties, applied uniformly to a document's keywords.
//!
//! Deep paths, long subdomain chains, and query strings all hint at pages
//! far from a site's front door, so every surviving keyword of such a
//! document is knocked down by the same amount.

/// Penalty per domain label beyond the registrable two.
const DOMAIN_STEP: f64 = 0.125;
const DOMAIN_CAP: f64 = 0.25;

/// Penalty per path segment.
const PATH_STEP: f64 = 0.1;
const PATH_CAP: f64 = 0.5;

/// Flat penalty when the last path segment carries a query delimiter.
const QUERY_PENALTY: f64 = 0.25;

/// Breakdown of one document's URL penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UrlPenalty {
    pub domain: f64,
    pub path: f64,
    pub query: f64,
}

impl UrlPenalty {
    /// Derive the penalty from URL structure alone.
    ///
    /// The scheme prefix is stripped if present, the first `/`-segment is
    /// the authority, and empty segments (doubled or trailing slashes) do
    /// not count as path segments.
    pub fn from_url(url: &str) -> Self {
        let stripped = url.split_once("://").map_or(url, |(_, rest)| rest);

        let mut segments = stripped.split('/');
        let authority = segments.next().unwrap_or_default();
        let path: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();

        let labels = authority.split('.').filter(|l| !l.is_empty()).count();
        let domain = (DOMAIN_STEP * labels.saturating_sub(2) as f64).clamp(0.0, DOMAIN_CAP);

        let path_penalty = (PATH_STEP * path.len() as f64).clamp(0.0, PATH_CAP);

        let query = if path.last().is_some_and(|s| s.contains('?')) {
            QUERY_PENALTY
        } else {
            0.0
        };

        Self {
            domain,
            path: path_penalty,
            query,
        }
    }

    /// Amount subtracted from every surviving keyword's compressed
    /// relevance. No floor is enforced afterwards; scores may go negative.
    pub fn total(&self) -> f64 {
        self.domain + self.path + self.query
    }
}
