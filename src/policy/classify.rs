//! Path classification.
//!
//! # Responsibilities
//! - Map a request path to exactly one classification
//! - Literal prefix matching (exact match, or prefix followed by "/")
//! - Short-circuit framework-internal and static-asset paths
//!
//! # Design Decisions
//! - Fixed precedence: internal/asset → public → onboarding → protected →
//!   fail-closed default
//! - Prefix match requires a segment boundary, so `/home-page-other` never
//!   matches `/home-page`
//! - Total function: any string input yields a classification, never an error

use crate::policy::table::RouteTable;

/// Category a request path resolves to. Exactly one per path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Public,
    Onboarding,
    Protected,
}

impl Classification {
    /// Label used in log fields and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Public => "public",
            Classification::Onboarding => "onboarding",
            Classification::Protected => "protected",
        }
    }
}

/// Returns true if `path` equals `prefix`, or starts with `prefix` followed
/// by a `/` segment boundary.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    if path == prefix {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Returns true if the final path segment carries a file extension.
///
/// Asset requests (`/favicon.ico`, `/_next/chunk.js`) must never be blocked,
/// whatever the table says.
fn has_file_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

impl RouteTable {
    /// Classify a request path. Total: unmatched paths are `Protected`.
    pub fn classify(&self, path: &str) -> Classification {
        // Framework-internal and asset paths bypass the table entirely.
        if has_file_extension(path) || self.internal.iter().any(|p| matches_prefix(path, p)) {
            return Classification::Public;
        }
        if self.public.iter().any(|p| matches_prefix(path, p)) {
            return Classification::Public;
        }
        if self.onboarding.iter().any(|p| matches_prefix(path, p)) {
            return Classification::Onboarding;
        }
        if self.protected.iter().any(|p| matches_prefix(path, p)) {
            return Classification::Protected;
        }
        // Fail closed: unknown paths require authentication.
        Classification::Protected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RoutesConfig;

    fn table() -> RouteTable {
        RouteTable::from_config(&RoutesConfig::default())
    }

    #[test]
    fn test_prefix_match_exact_and_nested() {
        assert!(matches_prefix("/fraud-page", "/fraud-page"));
        assert!(matches_prefix("/fraud-page/analytics", "/fraud-page"));
        assert!(matches_prefix("/fraud-page/analytics/deep", "/fraud-page"));
    }

    #[test]
    fn test_prefix_match_rejects_sibling_names() {
        assert!(!matches_prefix("/home-page-other", "/home-page"));
        assert!(!matches_prefix("/sign-into", "/sign-in"));
        assert!(!matches_prefix("/home", "/home-page"));
    }

    #[test]
    fn test_classify_public_routes() {
        let table = table();
        assert_eq!(table.classify("/sign-in"), Classification::Public);
        assert_eq!(table.classify("/sign-up"), Classification::Public);
        assert_eq!(table.classify("/api/webhooks/clerk"), Classification::Public);
    }

    #[test]
    fn test_classify_onboarding_routes() {
        let table = table();
        assert_eq!(table.classify("/onboarding"), Classification::Onboarding);
        assert_eq!(table.classify("/onboarding/step-2"), Classification::Onboarding);
    }

    #[test]
    fn test_classify_protected_catch_all_families() {
        let table = table();
        assert_eq!(table.classify("/home-page"), Classification::Protected);
        assert_eq!(table.classify("/home-page/widgets/42"), Classification::Protected);
        assert_eq!(table.classify("/fraud-page/analytics"), Classification::Protected);
    }

    #[test]
    fn test_classify_unknown_paths_fail_closed() {
        let table = table();
        assert_eq!(table.classify("/"), Classification::Protected);
        assert_eq!(table.classify("/nonexistent"), Classification::Protected);
        assert_eq!(table.classify("/home-page-other"), Classification::Protected);
    }

    #[test]
    fn test_classify_assets_and_internal_paths() {
        let table = table();
        assert_eq!(table.classify("/favicon.ico"), Classification::Public);
        assert_eq!(table.classify("/_next/static/chunk.js"), Classification::Public);
        assert_eq!(table.classify("/static/logo.svg"), Classification::Public);
        assert_eq!(table.classify("/assets/fonts"), Classification::Public);
    }

    #[test]
    fn test_classify_is_total_on_malformed_input() {
        let table = table();
        // No panic, and every answer is one of the three categories.
        for input in ["", "no-leading-slash", "//", "/..", "/\u{1F600}", "/a b c"] {
            let _ = table.classify(input);
        }
        assert_eq!(table.classify(""), Classification::Protected);
        assert_eq!(table.classify("sign-in"), Classification::Protected);
    }
}
