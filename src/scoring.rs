//! # Scoring Module
//!
//! Pairwise similarity for company records on a 0–100 scale: token-sort
//! fuzzy ratios per field, decisive overrides on strong identifiers, and a
//! weighted sum with overlap bonuses for everything else.

use crate::config::DedupeConfig;
use crate::model::CompanyRecord;
use std::collections::HashSet;

/// The decisive score returned when an override rule fires.
pub const MATCH_SCORE: f64 = 100.0;

/// Flat bonus for each overlap signal (shared domain token, shared website
/// URL token, shared social URL). Bonuses stack independently.
const OVERLAP_BONUS: f64 = 5.0;

/// Token-sort similarity ratio in [0, 100].
///
/// Tokens are sorted before comparison, so the ratio is insensitive to word
/// order ("corp acme" matches "acme corp" at 100). Comparison against an
/// empty string scores 0 — including empty against empty, so a blank field
/// can never read as a perfect match.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let sorted_a = sort_tokens(a);
    let sorted_b = sort_tokens(b);
    strsim::normalized_levenshtein(&sorted_a, &sorted_b) * 100.0
}

fn sort_tokens(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Check whether two whitespace-separated token lists share a token.
/// Empty strings contribute no tokens.
fn shares_token(a: &str, b: &str) -> bool {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    b.split_whitespace().any(|token| tokens_a.contains(token))
}

/// Compute the similarity score for a pair of records.
///
/// A near-exact match (>= override threshold) on any strong identifier —
/// primary name, commercial name, legal name, website domain, or any pair of
/// social URLs — is decisive and returns [`MATCH_SCORE`] immediately: one
/// strong signal outweighs an average over weaker fields. Otherwise the
/// weighted sum plus overlap bonuses applies, clamped to 100.
///
/// Scoring is a pure function of the two records; it is symmetric and holds
/// no state.
pub fn score_pair(a: &CompanyRecord, b: &CompanyRecord, config: &DedupeConfig) -> f64 {
    let name_score = token_sort_ratio(&a.company_name, &b.company_name);
    let commercial_score =
        token_sort_ratio(&a.company_commercial_names, &b.company_commercial_names);
    let legal_score = token_sort_ratio(&a.company_legal_names, &b.company_legal_names);
    let domain_score = token_sort_ratio(&a.website_domain, &b.website_domain);
    let phone_score = token_sort_ratio(&a.primary_phone, &b.primary_phone);
    let description_score = token_sort_ratio(&a.short_description, &b.short_description);

    // token_sort_ratio scores empty fields as 0, so an override can only fire
    // on two non-empty values.
    if name_score >= config.override_threshold
        || commercial_score >= config.override_threshold
        || legal_score >= config.override_threshold
        || domain_score >= config.override_threshold
    {
        return MATCH_SCORE;
    }

    for social_a in a.social_urls() {
        if social_a.is_empty() {
            continue;
        }
        for social_b in b.social_urls() {
            if social_b.is_empty() {
                continue;
            }
            if token_sort_ratio(social_a, social_b) >= config.override_threshold {
                return MATCH_SCORE;
            }
        }
    }

    let mut bonus = 0.0;
    if shares_token(&a.domains, &b.domains) {
        bonus += OVERLAP_BONUS;
    }
    if shares_token(&a.website_url, &b.website_url) {
        bonus += OVERLAP_BONUS;
    }
    if shares_social_url(a, b) {
        bonus += OVERLAP_BONUS;
    }

    let weights = &config.weights;
    let weighted = weights.name * name_score
        + weights.commercial_name * commercial_score
        + weights.domain * domain_score
        + weights.phone * phone_score
        + weights.description * description_score;

    (weighted + bonus).min(MATCH_SCORE)
}

/// Exact, non-empty social URL shared between the two records, compared
/// across all four platforms.
fn shares_social_url(a: &CompanyRecord, b: &CompanyRecord) -> bool {
    a.social_urls().iter().any(|social_a| {
        !social_a.is_empty() && b.social_urls().iter().any(|social_b| social_a == social_b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, domain: &str) -> CompanyRecord {
        CompanyRecord {
            company_name: name.to_string(),
            website_domain: domain.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_token_sort_ratio_identical() {
        assert_eq!(token_sort_ratio("acme corp", "acme corp"), 100.0);
    }

    #[test]
    fn test_token_sort_ratio_word_order_insensitive() {
        assert_eq!(token_sort_ratio("corp acme", "acme corp"), 100.0);
    }

    #[test]
    fn test_token_sort_ratio_empty_scores_zero() {
        assert_eq!(token_sort_ratio("", ""), 0.0);
        assert_eq!(token_sort_ratio("acme", ""), 0.0);
        assert_eq!(token_sort_ratio("", "acme"), 0.0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let config = DedupeConfig::default();
        let a = record("acme corporation", "acme.com");
        let b = record("acme corp", "acmegroup.com");
        assert_eq!(score_pair(&a, &b, &config), score_pair(&b, &a, &config));
    }

    #[test]
    fn test_self_score_is_maximal() {
        let config = DedupeConfig::default();
        let a = record("acme corp", "acme.com");
        assert_eq!(score_pair(&a, &a, &config), MATCH_SCORE);
    }

    #[test]
    fn test_domain_override_beats_dissimilar_name() {
        // "acme corp" vs "acme corporation" stays below the override
        // threshold on name, but the identical domain is decisive.
        let config = DedupeConfig::default();
        let a = record("acme corp", "acme.com");
        let b = record("acme corporation", "acme.com");
        assert!(token_sort_ratio(&a.company_name, &b.company_name) < config.override_threshold);
        assert_eq!(score_pair(&a, &b, &config), MATCH_SCORE);
    }

    #[test]
    fn test_social_override_without_shared_name_or_domain() {
        let config = DedupeConfig::default();
        let mut a = record("northern lights bakery", "nlbakery.example");
        let mut b = record("nl baked goods", "baked.example");
        a.facebook_url = "facebook.com/nlbakery".to_string();
        b.facebook_url = "facebook.com/nlbakery".to_string();
        assert_eq!(score_pair(&a, &b, &config), MATCH_SCORE);
    }

    #[test]
    fn test_cross_platform_social_override() {
        let config = DedupeConfig::default();
        let mut a = record("alpha", "a.example");
        let mut b = record("beta", "b.example");
        a.twitter_url = "social.example/alpha-co".to_string();
        b.linkedin_url = "social.example/alpha-co".to_string();
        assert_eq!(score_pair(&a, &b, &config), MATCH_SCORE);
    }

    #[test]
    fn test_blank_strong_identifiers_never_force_match() {
        let config = DedupeConfig::default();
        let a = CompanyRecord::default();
        let b = CompanyRecord::default();
        assert_eq!(score_pair(&a, &b, &config), 0.0);
    }

    #[test]
    fn test_weighted_sum_with_stacked_bonuses() {
        // Disable overrides so the weighted path is observable.
        let config = DedupeConfig::default().with_override_threshold(200.0);
        let mut a = record("alpha consulting", "alpha.com");
        let mut b = record("alpha consulting", "alpha.com");
        for r in [&mut a, &mut b] {
            r.domains = "alpha.com".to_string();
            r.website_url = "https://alpha.com".to_string();
            r.facebook_url = "facebook.com/alpha".to_string();
        }
        // name 100 * 0.35 + domain 100 * 0.15 + three bonuses = 65.
        let score = score_pair(&a, &b, &config);
        assert!((score - 65.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_score_clamped_to_100() {
        let config = DedupeConfig::default().with_override_threshold(200.0);
        let mut a = record("alpha consulting", "alpha.com");
        a.company_commercial_names = "alpha".to_string();
        a.primary_phone = "12345".to_string();
        a.short_description = "consulting services".to_string();
        a.domains = "alpha.com".to_string();
        a.website_url = "https://alpha.com".to_string();
        a.facebook_url = "facebook.com/alpha".to_string();
        let b = a.clone();
        assert_eq!(score_pair(&a, &b, &config), MATCH_SCORE);
    }

    #[test]
    fn test_no_bonus_for_blank_social_fields() {
        let config = DedupeConfig::default().with_override_threshold(200.0);
        // Both records have every social field blank; the shared-social bonus
        // must not fire on the shared emptiness.
        let a = record("alpha consulting", "alpha.com");
        let b = record("alpha consulting", "alpha.com");
        let score = score_pair(&a, &b, &config);
        assert!((score - 50.0).abs() < 1e-9, "got {score}");
    }
}
