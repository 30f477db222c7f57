//! Slug derivation for sluggable catalog entities.
//!
//! A slug is the URL-safe form of a human name: `"Café Olé"` becomes `"cafe-ole"`.
//! [`generate_unique_slug`] probes the store for collisions and appends a numeric
//! suffix (`-1`, `-2`, ...) until a free value is found.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use crate::core::error::Result;
use crate::shared::constants::MAX_SLUG_ATTEMPTS;
use crate::shared::repository::SlugLookup;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref EDGE_HYPHENS: Regex = Regex::new(r"^-+|-+$").unwrap();
    static ref REPEATED_HYPHENS: Regex = Regex::new(r"--+").unwrap();
}

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("Invalid text for slug: {0}")]
    InvalidInput(String),

    #[error("Name '{0}' contains no letters or digits to build a slug from")]
    Empty(String),

    #[error("Could not generate a unique slug for '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },
}

/// Combining diacritical marks block (U+0300..U+036F)
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize text into a slug token.
///
/// Output contains only `[a-z0-9]` separated by single hyphens, with no leading or
/// trailing hyphen. Text without any letters or digits normalizes to `""`.
pub fn normalize_slug(text: &str) -> std::result::Result<String, SlugError> {
    if text.is_empty() {
        return Err(SlugError::InvalidInput("text must not be empty".to_string()));
    }

    let lowered: String = text
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .to_lowercase();

    let hyphenated = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let trimmed = EDGE_HYPHENS.replace_all(&hyphenated, "");
    Ok(REPEATED_HYPHENS.replace_all(&trimmed, "-").into_owned())
}

/// Resolve a slug for `name` that no existing record holds.
///
/// Probes `base`, `base-1`, `base-2`, ... and gives up after [`MAX_SLUG_ATTEMPTS`]
/// lookups. The slug is not reserved: callers persist it and rely on the store's
/// unique index to reject a concurrent writer that resolved the same value.
pub async fn generate_unique_slug(name: &str, lookup: &dyn SlugLookup) -> Result<String> {
    let base = normalize_slug(name)?;
    if base.is_empty() {
        return Err(SlugError::Empty(name.to_string()).into());
    }

    let mut candidate = base.clone();
    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        if !lookup.slug_exists(&candidate).await? {
            return Ok(candidate);
        }
        candidate = format!("{}-{}", base, attempt);
    }

    Err(SlugError::Exhausted {
        base,
        attempts: MAX_SLUG_ATTEMPTS,
    }
    .into())
}

/// Slug for an entity being renamed from one holding `current_slug`.
///
/// Keeps the current slug when the new name normalizes to its base, so a change
/// of casing or punctuation does not push the entity onto another suffixed slug.
/// `shoes-1` survives a rename to `"SHOES"`.
pub async fn regenerate_slug(
    current_slug: &str,
    new_name: &str,
    lookup: &dyn SlugLookup,
) -> Result<String> {
    let base = normalize_slug(new_name)?;
    if is_resolved_from(current_slug, &base) {
        return Ok(current_slug.to_string());
    }
    generate_unique_slug(new_name, lookup).await
}

/// True when `slug` is `base` or one of the suffixed forms the resolver hands out.
fn is_resolved_from(slug: &str, base: &str) -> bool {
    if base.is_empty() {
        return false;
    }
    if slug == base {
        return true;
    }
    slug.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|suffix| suffix.parse::<u32>().ok().map(|n| (suffix, n)))
        .is_some_and(|(suffix, n)| n >= 1 && n < MAX_SLUG_ATTEMPTS && n.to_string() == suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::validation::SLUG_REGEX;
    use async_trait::async_trait;
    use fake::faker::company::en::CompanyName;
    use fake::Fake;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct TakenSlugs {
        taken: HashSet<String>,
        probes: AtomicU32,
    }

    impl TakenSlugs {
        fn new(taken: &[&str]) -> Self {
            Self {
                taken: taken.iter().map(|s| s.to_string()).collect(),
                probes: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl SlugLookup for TakenSlugs {
        async fn slug_exists(&self, slug: &str) -> Result<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Ok(self.taken.contains(slug))
        }
    }

    struct EverythingTaken {
        probes: AtomicU32,
    }

    #[async_trait]
    impl SlugLookup for EverythingTaken {
        async fn slug_exists(&self, _slug: &str) -> Result<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
    }

    #[test]
    fn test_normalize_basic() {
        assert_eq!(
            normalize_slug("Zapatos Deportivos Nike").unwrap(),
            "zapatos-deportivos-nike"
        );
    }

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize_slug("Café Olé").unwrap(), "cafe-ole");
        assert_eq!(normalize_slug("Niño & Piña").unwrap(), "nino-pina");
    }

    #[test]
    fn test_normalize_collapses_and_trims_separators() {
        assert_eq!(normalize_slug("  --Hello,   World!!-- ").unwrap(), "hello-world");
        assert_eq!(normalize_slug("a__b..c").unwrap(), "a-b-c");
        assert_eq!(normalize_slug("Model 3000 X").unwrap(), "model-3000-x");
    }

    #[test]
    fn test_normalize_without_alphanumerics_is_empty() {
        assert_eq!(normalize_slug("!!! ---").unwrap(), "");
        assert_eq!(normalize_slug("   ").unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_empty_text() {
        assert!(matches!(
            normalize_slug(""),
            Err(SlugError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_output_shape_and_idempotence() {
        let mut inputs: Vec<String> = vec![
            "Électroménager & Cuisine".to_string(),
            "ÅNGSTRÖM".to_string(),
            "日本 Store 2".to_string(),
            "x".to_string(),
            "--Ça va?--".to_string(),
        ];
        inputs.extend((0..25).map(|_| CompanyName().fake::<String>()));

        for input in inputs {
            let slug = normalize_slug(&input).unwrap();
            assert!(
                slug.is_empty() || SLUG_REGEX.is_match(&slug),
                "unexpected slug {:?} for {:?}",
                slug,
                input
            );
            if !slug.is_empty() {
                assert_eq!(normalize_slug(&slug).unwrap(), slug);
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_returns_base_when_free() {
        let lookup = TakenSlugs::new(&[]);
        let slug = generate_unique_slug("Running Shoes", &lookup).await.unwrap();
        assert_eq!(slug, "running-shoes");
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_skips_taken_candidates() {
        let lookup = TakenSlugs::new(&["shoes", "shoes-1"]);
        let slug = generate_unique_slug("Shoes", &lookup).await.unwrap();
        assert_eq!(slug, "shoes-2");
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_resolve_gives_up_after_bounded_probes() {
        let lookup = EverythingTaken {
            probes: AtomicU32::new(0),
        };
        let result = generate_unique_slug("Shoes", &lookup).await;

        assert!(matches!(result, Err(AppError::SlugExhausted(_))));
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 100);
    }

    #[tokio::test]
    async fn test_regenerate_keeps_equivalent_slug() {
        let lookup = TakenSlugs::new(&["shoes"]);
        let slug = regenerate_slug("shoes", "SHOES!", &lookup).await.unwrap();
        assert_eq!(slug, "shoes");
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 0);

        let slug = regenerate_slug("shoes", "Boots", &lookup).await.unwrap();
        assert_eq!(slug, "boots");
    }

    #[tokio::test]
    async fn test_regenerate_keeps_suffixed_slug_of_same_base() {
        let lookup = TakenSlugs::new(&["shoes", "shoes-1"]);
        let slug = regenerate_slug("shoes-1", "SHOES", &lookup).await.unwrap();
        assert_eq!(slug, "shoes-1");
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 0);

        // Only resolver suffixes count, not arbitrary trailing text
        let lookup = TakenSlugs::new(&["shoes", "shoes-x"]);
        let slug = regenerate_slug("shoes-x", "Shoes", &lookup).await.unwrap();
        assert_eq!(slug, "shoes-1");
    }

    #[test]
    fn test_resolved_from() {
        assert!(is_resolved_from("shoes", "shoes"));
        assert!(is_resolved_from("shoes-1", "shoes"));
        assert!(is_resolved_from("shoes-99", "shoes"));
        assert!(!is_resolved_from("shoes-01", "shoes"));
        assert!(!is_resolved_from("shoes-100", "shoes"));
        assert!(!is_resolved_from("shoes-0", "shoes"));
        assert!(!is_resolved_from("shoesbox-1", "shoes"));
        assert!(!is_resolved_from("boots-1", "shoes"));
        assert!(!is_resolved_from("", ""));
    }

    #[tokio::test]
    async fn test_resolve_rejects_name_without_alphanumerics() {
        let lookup = TakenSlugs::new(&[]);
        let result = generate_unique_slug("???", &lookup).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 0);
    }
}
