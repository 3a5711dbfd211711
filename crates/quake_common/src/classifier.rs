//! Rule-based query classifier.
//!
//! Categorises free-text emergency descriptions using ordered keyword
//! rules. No tokenization, no scoring: the first rule with a substring
//! hit wins, and overlaps are resolved by rule order alone. Falls back
//! to General if no rule matches.

use crate::category::Category;

/// Ordered classification rules. First match wins.
///
/// Two rules target Trauma on purpose: bleeding terms outrank
/// everything, crush/entrapment terms sit below internal injuries.
const RULES: &[(&[&str], Category)] = &[
    (
        &["bleed", "blood", "hemorrhag", "laceration", "deep cut", "wound"],
        Category::Trauma,
    ),
    (
        &["bone", "fracture", "spine", "spinal", "fell", "fall", "broken", "dislocat"],
        Category::Orthopedic,
    ),
    (
        &["organ", "abdomen", "abdominal", "stomach", "internal", "gut"],
        Category::Internal,
    ),
    (
        &["trapped", "crush", "pinned", "stuck under", "debris", "rubble"],
        Category::Trauma,
    ),
    (
        &["breath", "choking", "chest pain", "cardiac", "heart", "no pulse", "suffocat"],
        Category::Respiratory,
    ),
    (
        &["burn", "chemical", "gas", "smoke", "fire", "scald", "fumes"],
        Category::Environmental,
    ),
    (
        &["pregnan", "labor", "labour", "contraction", "baby", "infant", "child"],
        Category::Maternal,
    ),
    (
        &["panic", "anxiety", "stress", "scared", "terrified", "trembling", "shaking"],
        Category::Psychosocial,
    ),
    (
        &["water", "diarrhea", "diarrhoea", "vomit", "fever", "dehydrat", "sanitation"],
        Category::Sanitation,
    ),
];

/// Classify a free-text emergency description.
///
/// Deterministic and stateless: the same input always yields the same
/// category, regardless of any prior queries.
pub fn classify(query: &str) -> Category {
    let q = query.to_lowercase();
    for (patterns, category) in RULES {
        if patterns.iter().any(|p| q.contains(p)) {
            return *category;
        }
    }
    Category::General
}
