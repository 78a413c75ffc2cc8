//! Reference datasets consumed by the chart and scoring core.
//!
//! Everything here is read-only input. The built-in Andhra Pradesh demo data
//! lives in [`standard`]; [`loader`] replaces individual slices from CSV.

pub mod loader;
mod standard;

pub use loader::{DatasetImportError, DatasetImporter, DatasetOverrides};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One period of the cash-flow timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub revenue: f64,
    pub expense: f64,
    pub capital: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkforceSplit {
    pub skilled: f64,
    pub semi_skilled: f64,
    pub women: f64,
}

/// Viability reference figures for one sub-sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBenchmark {
    pub sub_sector: String,
    /// Capital expenditure per unit, INR lakh.
    pub capex_per_unit: f64,
    pub operating_margin: f64,
    pub break_even_months: u32,
    pub productivity_index: f64,
    pub export_readiness: f64,
    pub sustainability_score: f64,
    pub workforce_split: WorkforceSplit,
    pub sources: Vec<String>,
}

/// EBITDA impact of moving one driver by one variation, in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCell {
    pub driver: String,
    pub variation: String,
    pub ebitda_delta: f64,
}

impl SensitivityCell {
    pub fn new(driver: impl Into<String>, variation: impl Into<String>, ebitda_delta: f64) -> Self {
        Self {
            driver: driver.into(),
            variation: variation.into(),
            ebitda_delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    InputCluster,
    ProcessingHub,
    Distribution,
}

impl NodeRole {
    pub const fn ordered() -> [Self; 3] {
        [Self::InputCluster, Self::ProcessingHub, Self::Distribution]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputCluster => "Input Cluster",
            Self::ProcessingHub => "Processing Hub",
            Self::Distribution => "Distribution",
        }
    }

    /// Accepts either the display label or the snake_case key.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Self::ordered()
            .into_iter()
            .find(|role| role.label().to_ascii_lowercase() == normalized)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyNode {
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub role: NodeRole,
    pub throughput: f64,
}

/// Polygon boundary as `(latitude, longitude)` vertices. Callers close the path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeographicOutline {
    vertices: Vec<(f64, f64)>,
}

impl GeographicOutline {
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }
}

/// Ticket range in INR lakh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicketSize {
    pub min: f64,
    pub max: f64,
}

/// A state or national credit programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub owner: String,
    pub ticket_size: TicketSize,
    pub focus: Vec<String>,
    /// Percent per annum.
    pub interest_rate: f64,
    pub subsidy: f64,
    pub min_score: f64,
    pub eligibility: Vec<String>,
    pub digital_touchpoints: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    /// Telugu, the regional language of the demo.
    Vernacular,
}

impl Language {
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Vernacular => "తెలుగు",
        }
    }

    pub const fn locale(self) -> &'static str {
        match self {
            Self::English => "en-IN",
            Self::Vernacular => "te-IN",
        }
    }

    /// Accepts the serde key, the locale, or a common name (`telugu`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "english" | "en" | "en-in" => Some(Self::English),
            "vernacular" | "telugu" | "te" | "te-in" => Some(Self::Vernacular),
            _ => None,
        }
    }
}

/// Typed or transcribed narrative for a single conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTextInput {
    pub text: String,
    pub language: Language,
}

impl FreeTextInput {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }
}

/// Every dataset the studio renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub refreshed_on: NaiveDate,
    pub cashflow_timeline: Vec<TimeSeriesPoint>,
    pub sector_benchmarks: Vec<SectorBenchmark>,
    pub sensitivity_matrix: Vec<SensitivityCell>,
    pub supply_nodes: Vec<SupplyNode>,
    pub state_outline: GeographicOutline,
    pub schemes: Vec<Scheme>,
}

impl ReferenceData {
    pub fn standard() -> Self {
        Self {
            refreshed_on: standard::refreshed_on(),
            cashflow_timeline: standard::cashflow_timeline(),
            sector_benchmarks: standard::sector_benchmarks(),
            sensitivity_matrix: standard::sensitivity_matrix(),
            supply_nodes: standard::supply_nodes(),
            state_outline: standard::state_outline(),
            schemes: standard::schemes(),
        }
    }

    pub fn sector(&self, index: usize) -> Option<&SectorBenchmark> {
        self.sector_benchmarks.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn node_role_parses_labels_and_keys() {
        assert_eq!(NodeRole::parse("Input Cluster"), Some(NodeRole::InputCluster));
        assert_eq!(NodeRole::parse("processing_hub"), Some(NodeRole::ProcessingHub));
        assert_eq!(NodeRole::parse(" distribution "), Some(NodeRole::Distribution));
        assert_eq!(NodeRole::parse("warehouse"), None);
    }

    #[test]
    fn language_parses_names_and_locales() {
        assert_eq!(Language::parse("Telugu"), Some(Language::Vernacular));
        assert_eq!(Language::parse("te-IN"), Some(Language::Vernacular));
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("hindi"), None);
    }

    #[test]
    fn standard_datasets_hold_their_keys_unique() {
        let data = ReferenceData::standard();

        let labels: HashSet<_> = data.cashflow_timeline.iter().map(|p| &p.label).collect();
        assert_eq!(labels.len(), data.cashflow_timeline.len());

        let districts: HashSet<_> = data.supply_nodes.iter().map(|n| &n.district).collect();
        assert_eq!(districts.len(), data.supply_nodes.len());

        let names: HashSet<_> = data.schemes.iter().map(|s| &s.name).collect();
        assert_eq!(names.len(), data.schemes.len());
    }

    #[test]
    fn standard_schemes_respect_their_ranges() {
        for scheme in ReferenceData::standard().schemes {
            assert!(!scheme.focus.is_empty(), "{} has no focus", scheme.name);
            assert!(scheme.ticket_size.min <= scheme.ticket_size.max);
            assert!((0.0..=1.0).contains(&scheme.subsidy));
            assert!((0.0..=1.0).contains(&scheme.min_score));
            assert!(scheme.interest_rate >= 0.0);
        }
    }

    #[test]
    fn sector_lookup_is_bounds_checked() {
        let data = ReferenceData::standard();
        assert!(data.sector(0).is_some());
        assert!(data.sector(data.sector_benchmarks.len()).is_none());
    }
}
