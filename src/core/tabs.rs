//! Navigation tab definitions.

use super::is_active;
use super::error::TabConfigError;
use crate::config::routes;

/// A navigable page tab.
///
/// Constructed through [`Tab::new`], which rejects hrefs that would break
/// prefix activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    label: &'static str,
    href: &'static str,
    active_prefixes: Vec<&'static str>,
    test_id: Option<&'static str>,
}

impl Tab {
    pub fn new(label: &'static str, href: &'static str) -> Result<Self, TabConfigError> {
        validate_prefix(href)?;
        Ok(Self {
            label,
            href,
            active_prefixes: Vec::new(),
            test_id: None,
        })
    }

    /// Adds another prefix that marks this tab active.
    pub fn with_active_prefix(mut self, prefix: &'static str) -> Result<Self, TabConfigError> {
        validate_prefix(prefix)?;
        self.active_prefixes.push(prefix);
        Ok(self)
    }

    /// Sets the `data-testid` attribute rendered on the link.
    pub fn with_test_id(mut self, test_id: &'static str) -> Self {
        self.test_id = Some(test_id);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn href(&self) -> &'static str {
        self.href
    }

    pub fn test_id(&self) -> Option<&'static str> {
        self.test_id
    }

    /// True when the href or any extra prefix matches `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.href)
            || self
                .active_prefixes
                .iter()
                .any(|prefix| is_active(current_path, prefix))
    }
}

fn validate_prefix(prefix: &str) -> Result<(), TabConfigError> {
    if prefix.is_empty() {
        return Err(TabConfigError::EmptyHref);
    }
    if !prefix.starts_with('/') {
        return Err(TabConfigError::MissingLeadingSlash(prefix.to_string()));
    }
    if prefix.len() > 1 && prefix.ends_with('/') {
        return Err(TabConfigError::TrailingSlash(prefix.to_string()));
    }
    Ok(())
}

/// The primary page tabs of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTabs {
    pub swap: Tab,
    pub pools: Tab,
}

impl NavTabs {
    /// Builds the default Swap and Pools tabs.
    pub fn standard() -> Result<Self, TabConfigError> {
        let swap = Tab::new("Swap", routes::SWAP_PATH)?;
        let pools = routes::POOLS_ACTIVE_PREFIXES
            .iter()
            .try_fold(Tab::new("Pools", routes::POOLS_PATH)?, |tab, prefix| {
                tab.with_active_prefix(*prefix)
            })?
            .with_test_id("pool-nav-link");
        Ok(Self { swap, pools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_hrefs() {
        assert_eq!(Tab::new("Empty", ""), Err(TabConfigError::EmptyHref));
        assert_eq!(
            Tab::new("Relative", "swap"),
            Err(TabConfigError::MissingLeadingSlash("swap".to_string()))
        );
        assert_eq!(
            Tab::new("Trailing", "/swap/"),
            Err(TabConfigError::TrailingSlash("/swap/".to_string()))
        );
    }

    #[test]
    fn test_root_href_allowed() {
        let tab = Tab::new("Home", "/").unwrap();
        assert_eq!(tab.href(), "/");
    }

    #[test]
    fn test_rejects_invalid_extra_prefix() {
        let tab = Tab::new("Pools", "/pools/v2").unwrap();
        assert_eq!(tab.with_active_prefix(""), Err(TabConfigError::EmptyHref));
    }

    #[test]
    fn test_swap_activation() {
        let tabs = NavTabs::standard().unwrap();
        assert!(tabs.swap.is_active("/swap"));
        assert!(tabs.swap.is_active("/swap/execute"));
        assert!(!tabs.swap.is_active("/pools"));
        assert!(!tabs.swap.is_active("/"));
    }

    #[test]
    fn test_pools_activation() {
        let tabs = NavTabs::standard().unwrap();
        assert_eq!(tabs.pools.href(), "/pools/v2");
        assert_eq!(tabs.pools.test_id(), Some("pool-nav-link"));
        for path in ["/pools", "/pools/v2", "/pool", "/add/ETH", "/remove/v2", "/increase/1", "/find"] {
            assert!(tabs.pools.is_active(path), "{path} should activate pools");
        }
        assert!(!tabs.pools.is_active("/swap"));
        assert!(!tabs.pools.is_active("/nfts"));
    }

    #[test]
    fn test_tabs_are_exclusive_on_known_routes() {
        let tabs = NavTabs::standard().unwrap();
        for path in ["/swap", "/pools/v2", "/pool", "/add"] {
            assert!(tabs.swap.is_active(path) ^ tabs.pools.is_active(path));
        }
    }
}
