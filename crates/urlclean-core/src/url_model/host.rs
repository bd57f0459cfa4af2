//! Host classification for locale stripping.

use std::collections::HashSet;

use crate::error::ConfigError;

/// Strips one leading `www.` label (any case) and lowercases the rest.
pub fn normalize_host(host: &str) -> String {
    let stripped = match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    };
    stripped.to_lowercase()
}

/// Domains on which a leading locale path segment may be removed.
///
/// Entries are canonical: lowercase, no `www.` label. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct LocaleDomainSet {
    domains: HashSet<String>,
}

impl LocaleDomainSet {
    /// Builds the set from configuration entries, rejecting malformed ones.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains = HashSet::new();
        for entry in entries {
            let raw = entry.as_ref();
            let domain = raw.trim().to_lowercase();
            if domain.is_empty()
                || domain.starts_with('.')
                || domain.ends_with('.')
                || domain
                    .chars()
                    .any(|c| c.is_whitespace() || c == '/' || c == ':')
            {
                return Err(ConfigError::InvalidDomain(raw.to_string()));
            }
            if domain.starts_with("www.") {
                return Err(ConfigError::WwwDomain(raw.to_string()));
            }
            domains.insert(domain);
        }
        Ok(Self { domains })
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Whether URLs on `host` get their locale segment stripped.
    ///
    /// Matches the normalized host exactly, or after dropping exactly one
    /// leading label when the host has more than two labels. The label chain
    /// is never walked further up.
    pub fn supports_locale_stripping(&self, host: &str) -> bool {
        let normalized = normalize_host(host);
        if self.domains.contains(&normalized) {
            return true;
        }

        match normalized.split_once('.') {
            // More than two labels: the remainder still contains a dot.
            Some((_, rest)) if rest.contains('.') => self.domains.contains(rest),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> LocaleDomainSet {
        LocaleDomainSet::from_entries(entries).unwrap()
    }

    #[test]
    fn normalize_strips_www_any_case() {
        assert_eq!(normalize_host("www.Example.com"), "example.com");
        assert_eq!(normalize_host("WWW.example.com"), "example.com");
        assert_eq!(normalize_host("wwwexample.com"), "wwwexample.com");
        assert_eq!(normalize_host("www.www.example.com"), "www.example.com");
        assert_eq!(normalize_host("ww"), "ww");
    }

    #[test]
    fn exact_match() {
        let s = set(&["aws.amazon.com"]);
        assert!(s.supports_locale_stripping("aws.amazon.com"));
        assert!(s.supports_locale_stripping("www.aws.amazon.com"));
        assert!(s.supports_locale_stripping("AWS.Amazon.COM"));
    }

    #[test]
    fn one_extra_label_matches() {
        let s = set(&["aws.amazon.com"]);
        assert!(s.supports_locale_stripping("eu.aws.amazon.com"));
        assert!(s.supports_locale_stripping("www.eu.aws.amazon.com"));
    }

    #[test]
    fn two_extra_labels_do_not_match() {
        let s = set(&["aws.amazon.com"]);
        assert!(!s.supports_locale_stripping("a.b.aws.amazon.com"));
    }

    #[test]
    fn parent_domain_does_not_match() {
        let s = set(&["learn.microsoft.com"]);
        assert!(!s.supports_locale_stripping("microsoft.com"));
        assert!(!s.supports_locale_stripping("azure.microsoft.com"));
    }

    #[test]
    fn two_label_hosts_only_match_exactly() {
        let s = set(&["com", "example.com"]);
        assert!(s.supports_locale_stripping("example.com"));
        // "example.com" has two labels, so the suffix "com" is never tried.
        assert!(!s.supports_locale_stripping("other.com"));
    }

    #[test]
    fn unrelated_host_does_not_match() {
        let s = set(&["developer.mozilla.org"]);
        assert!(!s.supports_locale_stripping("example.com"));
        assert!(!s.supports_locale_stripping("mozilla.org"));
        assert!(!s.supports_locale_stripping("localhost"));
    }

    #[test]
    fn entries_are_canonicalized() {
        let s = set(&["  Help.SAP.com "]);
        assert_eq!(s.len(), 1);
        assert!(s.supports_locale_stripping("help.sap.com"));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(
            LocaleDomainSet::from_entries(["www.example.com"]),
            Err(ConfigError::WwwDomain(_))
        ));
        for bad in ["", "  ", "example.com/path", "example.com:443", "exa mple.com", ".example.com"] {
            assert!(
                matches!(
                    LocaleDomainSet::from_entries([bad]),
                    Err(ConfigError::InvalidDomain(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
