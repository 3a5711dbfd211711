//! Emergency categories for offline triage.
//!
//! Closed set - every query maps to exactly one category, with General
//! as the catch-all when no classification rule matches.

use serde::{Deserialize, Serialize};

/// Emergency category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bleeding, open wounds, crush injuries
    Trauma,
    /// Fractures, spinal injuries, falls
    Orthopedic,
    /// Abdominal and organ injuries
    Internal,
    /// Breathing difficulty, choking, cardiac events
    Respiratory,
    /// Burns, chemical exposure, gas leaks
    Environmental,
    /// Pregnancy, labor, infants and children
    Maternal,
    /// Panic, acute stress reactions
    Psychosocial,
    /// Contaminated water, diarrheal disease, fever
    Sanitation,
    /// No specific match - generic safety advisory
    General,
}

/// Standard category names (in catalog display order)
pub const CATEGORY_ORDER: &[Category] = &[
    Category::Trauma,
    Category::Orthopedic,
    Category::Internal,
    Category::Respiratory,
    Category::Environmental,
    Category::Maternal,
    Category::Psychosocial,
    Category::Sanitation,
    Category::General,
];

impl Category {
    /// Display label used in protocol headers and transcripts
    pub fn label(&self) -> &'static str {
        match self {
            Category::Trauma => "TRAUMA",
            Category::Orthopedic => "ORTHOPEDIC",
            Category::Internal => "INTERNAL",
            Category::Respiratory => "RESPIRATORY",
            Category::Environmental => "ENVIRONMENTAL",
            Category::Maternal => "MATERNAL",
            Category::Psychosocial => "PSYCHOSOCIAL",
            Category::Sanitation => "SANITATION",
            Category::General => "GENERAL",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
