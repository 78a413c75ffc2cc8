use super::whole_percent;
use crate::datasets::Scheme;
use crate::scoring::{focus_areas, rank_schemes, SchemeMatch};
use serde::Serialize;
use tracing::debug;

/// Readiness the matcher opens with before the entrepreneur moves the slider.
pub const DEFAULT_READINESS: f64 = 0.62;

pub fn default_focus() -> Vec<String> {
    vec!["Working Capital".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusChip {
    pub label: String,
    pub selected: bool,
}

/// One ranked scheme with its display strings.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeCard {
    pub name: String,
    pub headline: String,
    pub fit_score: f64,
    pub fit_pct: u32,
    pub focus: Vec<String>,
    pub rate: String,
    pub subsidy: String,
    pub min_score: String,
    pub eligibility: String,
    pub digital_touchpoints: Vec<String>,
}

impl From<&SchemeMatch<'_>> for SchemeCard {
    fn from(matched: &SchemeMatch<'_>) -> Self {
        let scheme = matched.scheme;
        Self {
            name: scheme.name.clone(),
            headline: format!(
                "{} - Ticket INR {}L - INR {}L",
                scheme.owner, scheme.ticket_size.min, scheme.ticket_size.max
            ),
            fit_score: matched.score,
            fit_pct: whole_percent(matched.score),
            focus: scheme.focus.clone(),
            rate: format!("{:.2}% p.a.", scheme.interest_rate),
            subsidy: format!("{}% capital grant", whole_percent(scheme.subsidy)),
            min_score: format!("{}%", whole_percent(scheme.min_score)),
            eligibility: scheme.eligibility.join("; "),
            digital_touchpoints: scheme.digital_touchpoints.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemeMatcherView {
    pub readiness_score: f64,
    pub readiness_pct: u32,
    pub focus_chips: Vec<FocusChip>,
    pub matches: Vec<SchemeCard>,
}

impl SchemeMatcherView {
    pub fn build<S>(catalog: &[Scheme], selected_focus: &[S], readiness_score: f64) -> Self
    where
        S: AsRef<str>,
    {
        let focus_chips = focus_areas(catalog)
            .into_iter()
            .map(|label| FocusChip {
                selected: selected_focus
                    .iter()
                    .any(|selected| selected.as_ref() == label),
                label,
            })
            .collect();

        let matches: Vec<SchemeCard> = rank_schemes(catalog, selected_focus, readiness_score)
            .iter()
            .map(SchemeCard::from)
            .collect();

        debug!(
            catalog = catalog.len(),
            selected = selected_focus.len(),
            matched = matches.len(),
            readiness_score,
            "built scheme matcher view"
        );

        Self {
            readiness_score,
            readiness_pct: whole_percent(readiness_score),
            focus_chips,
            matches,
        }
    }

    /// Matcher state before any interaction.
    pub fn initial(catalog: &[Scheme]) -> Self {
        Self::build(catalog, &default_focus(), DEFAULT_READINESS)
    }
}
