//! Route-based tab activation.

/// Returns whether a tab targeting `href_prefix` is active on `current_path`.
///
/// This is a plain prefix match, so a `/pools` tab also highlights on
/// `/pools/v2`. Trailing slashes are not normalized; [`crate::core::Tab`]
/// rejects hrefs that would make the match unstable, including the empty
/// prefix that would match every path.
#[inline]
pub fn is_active(current_path: &str, href_prefix: &str) -> bool {
    current_path.starts_with(href_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_nested_paths() {
        assert!(is_active("/pools/v2", "/pools/v2"));
        assert!(is_active("/swap/execute", "/swap"));
        assert!(is_active("/pools/v2", "/pools"));
    }

    #[test]
    fn test_non_matching_paths() {
        assert!(!is_active("/pool", "/pools"));
        assert!(!is_active("/", "/swap"));
        assert!(!is_active("/nfts", "/swap"));
    }

    #[test]
    fn test_prefix_longer_than_path() {
        assert!(!is_active("/sw", "/swap"));
        assert!(!is_active("", "/"));
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        assert!(is_active("/swap", ""));
        assert!(is_active("", ""));
    }

    #[test]
    fn test_no_trailing_slash_normalization() {
        assert!(!is_active("/swap", "/swap/"));
        assert!(is_active("/swap/", "/swap"));
    }

    #[test]
    fn test_matches_starts_with() {
        let paths = ["/", "/swap", "/swap/execute", "/pool", "/pools", "/pools/v2", "/nfts/x"];
        let prefixes = ["/", "/swap", "/pool", "/pools", "/pools/v2", "/nfts"];
        for path in paths {
            for prefix in prefixes {
                assert_eq!(is_active(path, prefix), path.starts_with(prefix));
                // Repeated calls agree
                assert_eq!(is_active(path, prefix), is_active(path, prefix));
            }
        }
    }
}
