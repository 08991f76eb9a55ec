//! Hash-based routing for IPFS-compatible navigation.

use crate::config::routes::{HOME_PATH, INTRO_QUERY, NFT_PREFIX};

/// Current route snapshot.
///
/// URL format: `#/path?query` (e.g., `#/pools/v2`, `#/?intro=true`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppRoute {
    /// Absolute path, always starting with `/`
    pub path: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl AppRoute {
    pub fn home() -> Self {
        Self {
            path: HOME_PATH.to_string(),
            search: String::new(),
        }
    }

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let (path, search) = match raw.find('?') {
            Some(idx) => raw.split_at(idx),
            None => (raw, ""),
        };

        let path = match path.trim_start_matches('/') {
            "" => HOME_PATH.to_string(),
            rest => format!("/{}", rest),
        };
        // A bare "?" carries no parameters
        let search = if search.len() > 1 { search } else { "" };

        Self {
            path,
            search: search.to_string(),
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}{}", self.path, self.search)
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Update browser URL to match this route (using pushState).
    pub fn push(&self) {
        crate::utils::dom::push_hash(&self.to_hash());
    }

    /// Returns the value of a query parameter, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Landing page (exact root path).
    pub fn is_landing_page(&self) -> bool {
        self.path == HOME_PATH
    }

    pub fn is_nft_page(&self) -> bool {
        self.path.starts_with(NFT_PREFIX)
    }

    /// Whether the landing page was reached from the brand icon.
    pub fn is_intro(&self) -> bool {
        self.is_landing_page() && self.query_param("intro") == Some("true")
    }
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::home()
    }
}

/// Target handed to the router's navigate action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub pathname: String,
    pub search: String,
}

impl NavigationIntent {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Landing page with the intro marker set.
    pub fn intro_home() -> Self {
        Self::new(HOME_PATH, INTRO_QUERY)
    }

    pub fn to_route(&self) -> AppRoute {
        AppRoute::from_hash(&format!("{}{}", self.pathname, self.search))
    }
}
