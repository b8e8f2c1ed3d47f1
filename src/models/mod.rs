pub mod about;
pub mod achievements;
pub mod blog_posts;
pub mod case_studies;
pub mod company_profile;
pub mod contact_messages;
pub mod featured_developers;
pub mod hobbies;
pub mod newsletter;
pub mod portfolio;
pub mod projects;
pub mod resources;
pub mod services;
pub mod skills;
pub mod testimonials;
pub mod users;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

/// Largest OFFSET the database accepts (a signed 64-bit integer).
const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PaginationQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    /// Row offset of the first item on the requested page, saturating at
    /// [`MAX_OFFSET`] for absurd page numbers.
    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.limit())
            .min(MAX_OFFSET)
    }
}

/// Split a stored comma-separated column into its trimmed, non-empty parts.
///
/// `"A, B ,C"` becomes `["A", "B", "C"]`; an empty string yields an empty list.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase ASCII slug: alphanumerics kept, runs of anything else collapse to a
/// single hyphen, no leading or trailing hyphens.
///
/// Input is NFKD-decomposed first, so accented Latin letters fold to their base
/// letter (`"Café"` becomes `"cafe"`). Characters with no ASCII decomposition are
/// dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.nfkd() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '_' || ch == '-' || ch.is_whitespace() || ch.is_ascii_punctuation() {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty_segments() {
        assert_eq!(split_csv("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(split_csv("Rust,, ,Go,"), vec!["Rust", "Go"]);
    }

    #[test]
    fn split_csv_of_empty_string_is_empty() {
        assert!(split_csv("").is_empty());
        assert!(split_csv("  ,  ").is_empty());
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  E-commerce   Platform  "), "e-commerce-platform");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn slugify_folds_accents() {
        assert_eq!(slugify("Café Déjà vu"), "cafe-deja-vu");
        assert_eq!(slugify("josé"), "jose");
        assert_eq!(slugify("Ｒｕｓｔ"), "rust");
    }

    #[test]
    fn slugify_drops_what_cannot_be_folded() {
        assert_eq!(slugify("日本 blog"), "blog");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn pagination_defaults_and_caps() {
        let query = PaginationQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 20);
        assert_eq!(query.offset(), 0);

        let query = PaginationQuery {
            page: Some(3),
            limit: Some(500),
        };
        assert_eq!(query.limit(), 100);
        assert_eq!(query.offset(), 200);

        let query = PaginationQuery {
            page: Some(0),
            limit: Some(0),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 1);
    }

    #[test]
    fn huge_page_numbers_saturate_the_offset() {
        let query = PaginationQuery {
            page: Some(u64::MAX),
            limit: Some(100),
        };
        assert_eq!(query.offset(), i64::MAX as u64);

        let query = PaginationQuery {
            page: Some(1_000_000_000_000_000_000),
            limit: Some(20),
        };
        assert_eq!(query.offset(), i64::MAX as u64);
    }
}
