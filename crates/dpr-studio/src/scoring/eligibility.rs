use crate::datasets::Scheme;
use serde::Serialize;
use std::collections::BTreeSet;

/// Schemes must score strictly above this to be shown.
pub const MIN_ELIGIBILITY: f64 = 0.15;

const OVERLAP_WEIGHT: f64 = 0.6;
const THRESHOLD_BONUS: f64 = 0.4;

/// Focus overlap plus a readiness bonus, capped at 1.
///
/// A scheme without focus tags has no overlap to offer and only the readiness
/// bonus applies.
pub fn eligibility_score<S>(scheme: &Scheme, selected_focus: &[S], user_score: f64) -> f64
where
    S: AsRef<str>,
{
    let overlap_ratio = if scheme.focus.is_empty() {
        0.0
    } else {
        let overlap = scheme
            .focus
            .iter()
            .filter(|focus| {
                selected_focus
                    .iter()
                    .any(|selected| selected.as_ref() == focus.as_str())
            })
            .count();
        overlap as f64 / scheme.focus.len() as f64
    };

    let threshold_bonus = if user_score >= scheme.min_score {
        THRESHOLD_BONUS
    } else {
        0.0
    };

    (overlap_ratio * OVERLAP_WEIGHT + threshold_bonus).min(1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeMatch<'a> {
    pub scheme: &'a Scheme,
    pub score: f64,
}

/// Schemes scoring above [`MIN_ELIGIBILITY`], best first. Ties keep catalog order.
pub fn rank_schemes<'a, S>(
    catalog: &'a [Scheme],
    selected_focus: &[S],
    user_score: f64,
) -> Vec<SchemeMatch<'a>>
where
    S: AsRef<str>,
{
    let mut matches: Vec<SchemeMatch<'a>> = catalog
        .iter()
        .map(|scheme| SchemeMatch {
            scheme,
            score: eligibility_score(scheme, selected_focus, user_score),
        })
        .filter(|candidate| candidate.score > MIN_ELIGIBILITY)
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Every focus tag across the catalog, sorted and deduplicated.
pub fn focus_areas(catalog: &[Scheme]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|scheme| scheme.focus.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
