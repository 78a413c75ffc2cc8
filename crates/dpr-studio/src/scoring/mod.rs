//! Heuristic scores shown to entrepreneurs. Neither is a model inference.

mod bankability;
mod eligibility;

pub use bankability::{bankability_score, BankabilityAssessment, BankabilityRubric, KeywordIndicator};
pub use eligibility::{
    eligibility_score, focus_areas, rank_schemes, SchemeMatch, MIN_ELIGIBILITY,
};
