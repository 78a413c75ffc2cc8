//! Driver × variation index over sparse EBITDA sensitivity cells.

mod keys;

pub use keys::OrderedKeys;

use crate::datasets::SensitivityCell;
use serde::Serialize;
use std::collections::HashMap;

/// Display bucket for a sensitivity delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensitivityBucket {
    HighPositive,
    LowPositive,
    HighNegative,
    LowNegative,
}

impl SensitivityBucket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighPositive => "high-positive",
            Self::LowPositive => "low-positive",
            Self::HighNegative => "high-negative",
            Self::LowNegative => "low-negative",
        }
    }
}

/// Buckets a delta in percentage points. The branch order is significant.
pub fn classify(delta: f64) -> SensitivityBucket {
    if delta >= 6.0 {
        SensitivityBucket::HighPositive
    } else if delta >= 0.0 {
        SensitivityBucket::LowPositive
    } else if delta <= -6.0 {
        SensitivityBucket::HighNegative
    } else {
        SensitivityBucket::LowNegative
    }
}

/// Signed display label: `+7`, `-4.5`, `0`.
pub fn format_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{delta}")
    } else {
        format!("{delta}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub variation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<SensitivityBucket>,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub driver: String,
    pub cells: Vec<HeatmapCell>,
}

/// Rows and columns keep the order in which the dataset first mentions them.
#[derive(Debug, Clone)]
pub struct SensitivityGrid {
    drivers: OrderedKeys,
    variations: OrderedKeys,
    cells: Vec<SensitivityCell>,
    index: HashMap<(String, String), usize>,
}

impl SensitivityGrid {
    pub fn build(cells: &[SensitivityCell]) -> Self {
        let mut drivers = OrderedKeys::default();
        let mut variations = OrderedKeys::default();
        let mut index = HashMap::with_capacity(cells.len());

        for (position, cell) in cells.iter().enumerate() {
            drivers.insert(&cell.driver);
            variations.insert(&cell.variation);
            index
                .entry((cell.driver.clone(), cell.variation.clone()))
                .or_insert(position);
        }

        Self {
            drivers,
            variations,
            cells: cells.to_vec(),
            index,
        }
    }

    pub fn drivers(&self) -> &[String] {
        self.drivers.as_slice()
    }

    pub fn variations(&self) -> &[String] {
        self.variations.as_slice()
    }

    /// First cell recorded for the pair; `None` is a normal, renderable gap.
    pub fn lookup(&self, driver: &str, variation: &str) -> Option<&SensitivityCell> {
        self.index
            .get(&(driver.to_string(), variation.to_string()))
            .map(|&position| &self.cells[position])
    }

    /// Full matrix, one row per driver and one cell per variation.
    pub fn rows(&self) -> Vec<HeatmapRow> {
        self.drivers()
            .iter()
            .map(|driver| HeatmapRow {
                driver: driver.clone(),
                cells: self
                    .variations()
                    .iter()
                    .map(|variation| match self.lookup(driver, variation) {
                        Some(cell) => HeatmapCell {
                            variation: variation.clone(),
                            ebitda_delta: Some(cell.ebitda_delta),
                            bucket: Some(classify(cell.ebitda_delta)),
                            display: format_delta(cell.ebitda_delta),
                        },
                        None => HeatmapCell {
                            variation: variation.clone(),
                            ebitda_delta: None,
                            bucket: None,
                            display: "-".to_string(),
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(6.0).label(), "high-positive");
        assert_eq!(classify(5.999).label(), "low-positive");
        assert_eq!(classify(0.0).label(), "low-positive");
        assert_eq!(classify(-0.001).label(), "low-negative");
        assert_eq!(classify(-6.0).label(), "high-negative");
        assert_eq!(classify(-5.999).label(), "low-negative");
        assert_eq!(classify(42.0), SensitivityBucket::HighPositive);
        assert_eq!(classify(-42.0), SensitivityBucket::HighNegative);
    }

    #[test]
    fn energy_cost_scenario() {
        let grid = SensitivityGrid::build(&[
            SensitivityCell::new("Energy Cost", "+10%", 7.0),
            SensitivityCell::new("Energy Cost", "-10%", -7.0),
        ]);

        assert_eq!(grid.drivers(), ["Energy Cost"]);
        assert_eq!(grid.variations(), ["+10%", "-10%"]);

        let up = grid.lookup("Energy Cost", "+10%").expect("cell present");
        let down = grid.lookup("Energy Cost", "-10%").expect("cell present");
        assert_eq!(classify(up.ebitda_delta), SensitivityBucket::HighPositive);
        assert_eq!(classify(down.ebitda_delta), SensitivityBucket::HighNegative);
    }

    #[test]
    fn keys_follow_first_seen_order_not_sorted_order() {
        let grid = SensitivityGrid::build(&[
            SensitivityCell::new("Selling Price", "-10%", -9.0),
            SensitivityCell::new("Energy Cost", "+10%", -3.0),
            SensitivityCell::new("Selling Price", "+10%", 9.0),
            SensitivityCell::new("Bank Rate", "-10%", 1.0),
        ]);

        assert_eq!(grid.drivers(), ["Selling Price", "Energy Cost", "Bank Rate"]);
        assert_eq!(grid.variations(), ["-10%", "+10%"]);
    }

    #[test]
    fn missing_pairs_are_absent_not_errors() {
        let grid = SensitivityGrid::build(&[
            SensitivityCell::new("Energy Cost", "+10%", 7.0),
            SensitivityCell::new("Labour", "-10%", 2.0),
        ]);

        assert!(grid.lookup("Energy Cost", "-10%").is_none());
        assert!(grid.lookup("Unknown", "+10%").is_none());

        let rows = grid.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[1].display, "-");
        assert_eq!(rows[0].cells[1].bucket, None);
        assert_eq!(rows[0].cells[0].display, "+7");
        assert_eq!(rows[1].cells[1].display, "+2");
    }

    #[test]
    fn duplicate_pairs_resolve_to_first_cell() {
        let grid = SensitivityGrid::build(&[
            SensitivityCell::new("Energy Cost", "+10%", 7.0),
            SensitivityCell::new("Energy Cost", "+10%", -1.0),
        ]);
        let cell = grid.lookup("Energy Cost", "+10%").expect("cell present");
        assert_eq!(cell.ebitda_delta, 7.0);
        assert_eq!(grid.drivers().len(), 1);
    }

    #[test]
    fn empty_input_builds_empty_grid() {
        let grid = SensitivityGrid::build(&[]);
        assert!(grid.drivers().is_empty());
        assert!(grid.variations().is_empty());
        assert!(grid.rows().is_empty());
    }

    #[test]
    fn delta_labels_carry_sign() {
        assert_eq!(format_delta(7.0), "+7");
        assert_eq!(format_delta(-4.5), "-4.5");
        assert_eq!(format_delta(0.0), "0");
    }
}
