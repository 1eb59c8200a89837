//! Catalog and Ranking Value Objects
//!
//! Value objects for catalog products, user interest profiles, and the
//! ranked candidates produced by similarity queries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Builds the deterministic text form fed to the embedding provider.
///
/// Canonical text concatenates an entity's governing fields in a fixed
/// order with fixed separators, so semantically identical inputs always
/// produce byte-identical text. This is what makes the embedding cache
/// hit reliably and keeps tests reproducible.
pub trait CanonicalText {
    /// Render the entity as its canonical embedding input
    fn canonical_text(&self) -> String;
}

/// Value Object: Product Attributes
///
/// The attributes of a catalog product that govern its embedding. The
/// text fields (name, description, category, tags) enter the canonical
/// form; price and brand ride along for callers but do not influence
/// the embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAttributes {
    /// Product display name
    pub name: String,
    /// Free-text product description
    pub description: String,
    /// Category label (e.g., "Sports", "Electronics")
    pub category: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Listed price
    pub price: f64,
    /// Optional brand name
    pub brand: Option<String>,
}

impl CanonicalText for ProductAttributes {
    fn canonical_text(&self) -> String {
        format!(
            "{}. {}. Category: {}. Tags: {}",
            self.name,
            self.description,
            self.category,
            self.tags.join(", ")
        )
    }
}

/// Value Object: User Interest Profile
///
/// Query-side profile combining interest tags, a budget, and previously
/// viewed product identifiers. Embedded on demand for each
/// recommendation request; never persisted as a vector by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Interest tags (e.g., "running", "camping")
    pub interests: Vec<String>,
    /// Numeric budget
    pub budget: f64,
    /// Identifiers of previously viewed products
    pub viewed_products: Vec<String>,
}

impl CanonicalText for UserProfile {
    fn canonical_text(&self) -> String {
        format!(
            "Interests: {}\nBudget: {}\nViewed products: {}",
            self.interests.join(", "),
            self.budget,
            self.viewed_products.join(", ")
        )
    }
}

/// Value Object: Scored Candidate
///
/// Transient pairing of an indexed entity's identifier with its cosine
/// similarity against a query vector. Scores lie in `[-1, 1]`.
///
/// Ordering is total and deterministic: score descending, ties broken
/// by identifier ascending. Scores are never NaN by construction (the
/// zero-magnitude case maps to the -1 sentinel).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    /// Identifier of the indexed entity
    pub id: String,
    /// Cosine similarity against the query vector
    pub score: f64,
}

impl ScoredCandidate {
    /// Create a new scored candidate
    pub fn new<S: Into<String>>(id: S, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }

    /// Cosine distance form of the score (`1 - score`)
    pub fn distance(&self) -> f64 {
        1.0 - self.score
    }
}

impl Eq for ScoredCandidate {}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_sort_by_score_descending() {
        let mut candidates = vec![
            ScoredCandidate::new("low", 0.1),
            ScoredCandidate::new("high", 0.9),
            ScoredCandidate::new("mid", 0.5),
        ];
        candidates.sort();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn ties_break_by_id_ascending() {
        let mut candidates = vec![
            ScoredCandidate::new("b", 0.5),
            ScoredCandidate::new("a", 0.5),
            ScoredCandidate::new("c", 0.5),
        ];
        candidates.sort();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn product_canonical_text_is_deterministic() {
        let product = ProductAttributes {
            name: "Trail Runner".to_string(),
            description: "Lightweight running shoe".to_string(),
            category: "Sports".to_string(),
            tags: vec!["running".to_string(), "outdoor".to_string()],
            price: 89.99,
            brand: Some("Acme".to_string()),
        };
        let expected =
            "Trail Runner. Lightweight running shoe. Category: Sports. Tags: running, outdoor";
        assert_eq!(product.canonical_text(), expected);
        assert_eq!(product.canonical_text(), product.clone().canonical_text());
    }

    #[test]
    fn profile_canonical_text_is_deterministic() {
        let profile = UserProfile {
            interests: vec!["running".to_string(), "hiking".to_string()],
            budget: 150.0,
            viewed_products: vec!["p1".to_string(), "p2".to_string()],
        };
        assert_eq!(
            profile.canonical_text(),
            "Interests: running, hiking\nBudget: 150\nViewed products: p1, p2"
        );
    }

    #[test]
    fn brand_and_price_do_not_enter_canonical_text() {
        let base = ProductAttributes {
            name: "Kettle".to_string(),
            description: "Steel kettle".to_string(),
            category: "Home & Kitchen".to_string(),
            tags: vec![],
            price: 20.0,
            brand: None,
        };
        let mut repriced = base.clone();
        repriced.price = 35.0;
        repriced.brand = Some("Other".to_string());
        assert_eq!(base.canonical_text(), repriced.canonical_text());
    }
}
