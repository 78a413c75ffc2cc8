use super::{whole_percent, DashboardError};
use crate::datasets::{ReferenceData, SectorBenchmark, TimeSeriesPoint};
use crate::geometry::{build_path, slice, LinearScale, PathDescriptor, PieSlice, Point, SliceError};
use crate::sensitivity::{HeatmapRow, SensitivityGrid};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

const CHART_WIDTH: f64 = 540.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PADDING: f64 = 40.0;
/// Vertical room left above the tallest value.
const CHART_HEADROOM: f64 = 1.1;
const PIE_SIZE: f64 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Revenue,
    Expense,
    Capital,
}

impl SeriesKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Revenue, Self::Expense, Self::Capital]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::Capital => "Capital Buffer",
        }
    }

    fn value(self, point: &TimeSeriesPoint) -> f64 {
        match self {
            Self::Revenue => point.revenue,
            Self::Expense => point.expense,
            Self::Capital => point.capital,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub position: Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub label: &'static str,
    pub path: PathDescriptor,
    pub svg_path: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisLabel {
    pub label: String,
    pub x: f64,
}

/// Revenue, expense and capital lines on a shared value axis.
#[derive(Debug, Clone, Serialize)]
pub struct LineChartView {
    pub width: f64,
    pub height: f64,
    pub max_value: f64,
    pub x_labels: Vec<AxisLabel>,
    pub series: Vec<ChartSeries>,
}

impl LineChartView {
    pub fn build(timeline: &[TimeSeriesPoint]) -> Self {
        let max_value = timeline
            .iter()
            .flat_map(|point| SeriesKind::ordered().map(|kind| kind.value(point)))
            .fold(0.0_f64, f64::max)
            * CHART_HEADROOM;

        let x_axis = LinearScale::new(
            (0.0, timeline.len().saturating_sub(1) as f64),
            (CHART_PADDING, CHART_WIDTH - CHART_PADDING),
        );
        // Inverted: larger values sit higher on the canvas.
        let y_axis = LinearScale::new(
            (0.0, max_value),
            (CHART_HEIGHT - CHART_PADDING, CHART_PADDING * 0.6),
        );

        let x_labels = timeline
            .iter()
            .enumerate()
            .map(|(index, point)| AxisLabel {
                label: point.label.clone(),
                x: x_axis.map(index as f64),
            })
            .collect();

        let series = SeriesKind::ordered()
            .into_iter()
            .map(|kind| {
                let points: Vec<SeriesPoint> = timeline
                    .iter()
                    .enumerate()
                    .map(|(index, point)| {
                        let value = kind.value(point);
                        SeriesPoint {
                            label: point.label.clone(),
                            value,
                            position: Point::new(x_axis.map(index as f64), y_axis.map(value)),
                        }
                    })
                    .collect();
                let path = build_path(points.iter().map(|point| point.position));

                ChartSeries {
                    kind,
                    label: kind.label(),
                    svg_path: path.to_svg(Some(2)),
                    path,
                    points,
                }
            })
            .collect();

        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            max_value,
            x_labels,
            series,
        }
    }
}

/// Funding split suggested for a sector, in INR lakh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapitalAllocation {
    pub capex: f64,
    pub working_capital: f64,
    pub green_upgrades: f64,
}

impl CapitalAllocation {
    pub fn for_benchmark(benchmark: &SectorBenchmark) -> Self {
        let capex = benchmark.capex_per_unit;
        Self {
            capex,
            working_capital: (capex * 0.6).max(12.0),
            green_upgrades: (capex * benchmark.sustainability_score * 0.35).max(6.0),
        }
    }

    pub fn magnitudes(&self) -> [(&'static str, f64); 3] {
        [
            ("Capex Assets", self.capex),
            ("Working Capital", self.working_capital),
            ("Green Upgrades", self.green_upgrades),
        ]
    }

    pub fn slices(&self) -> Result<Vec<PieSlice>, SliceError> {
        slice(&self.magnitudes())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationSlice {
    #[serde(flatten)]
    pub slice: PieSlice,
    pub value: f64,
    pub share_pct: u32,
    pub svg_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationView {
    pub size: f64,
    pub allocation: CapitalAllocation,
    pub slices: Vec<AllocationSlice>,
}

impl AllocationView {
    pub fn build(allocation: CapitalAllocation) -> Result<Self, SliceError> {
        let radius = PIE_SIZE / 2.0;
        let center = Point::new(radius, radius);
        let slices = allocation
            .slices()?
            .into_iter()
            .zip(allocation.magnitudes())
            .map(|(slice, (_, value))| AllocationSlice {
                value,
                share_pct: whole_percent(slice.share),
                svg_path: slice.arc_path(center, radius, Some(2)),
                slice,
            })
            .collect();

        Ok(Self {
            size: PIE_SIZE,
            allocation,
            slices,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkProfile {
    pub sub_sector: String,
    pub operating_margin_pct: u32,
    pub break_even_months: u32,
    pub productivity_percentile: u32,
    pub export_readiness_pct: u32,
    pub skilled_pct: u32,
    pub semi_skilled_pct: u32,
    pub women_pct: u32,
    pub sources: Vec<String>,
}

impl From<&SectorBenchmark> for BenchmarkProfile {
    fn from(benchmark: &SectorBenchmark) -> Self {
        Self {
            sub_sector: benchmark.sub_sector.clone(),
            operating_margin_pct: whole_percent(benchmark.operating_margin),
            break_even_months: benchmark.break_even_months,
            productivity_percentile: whole_percent(benchmark.productivity_index),
            export_readiness_pct: whole_percent(benchmark.export_readiness),
            skilled_pct: whole_percent(benchmark.workforce_split.skilled),
            semi_skilled_pct: whole_percent(benchmark.workforce_split.semi_skilled),
            women_pct: whole_percent(benchmark.workforce_split.women),
            sources: benchmark.sources.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SensitivityView {
    pub drivers: Vec<String>,
    pub variations: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl From<&SensitivityGrid> for SensitivityView {
    fn from(grid: &SensitivityGrid) -> Self {
        Self {
            drivers: grid.drivers().to_vec(),
            variations: grid.variations().to_vec(),
            rows: grid.rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialDashboardView {
    pub refreshed_on: NaiveDate,
    pub sectors: Vec<String>,
    pub selected_sector: usize,
    pub profile: BenchmarkProfile,
    pub cashflow: LineChartView,
    pub allocation: AllocationView,
    pub sensitivity: SensitivityView,
}

pub struct FinancialDashboard;

impl FinancialDashboard {
    pub fn build(
        data: &ReferenceData,
        sector_index: usize,
    ) -> Result<FinancialDashboardView, DashboardError> {
        let benchmark = data
            .sector(sector_index)
            .ok_or(DashboardError::UnknownSector {
                index: sector_index,
                available: data.sector_benchmarks.len(),
            })?;

        let allocation = AllocationView::build(CapitalAllocation::for_benchmark(benchmark))?;
        let grid = SensitivityGrid::build(&data.sensitivity_matrix);

        debug!(
            sector = %benchmark.sub_sector,
            periods = data.cashflow_timeline.len(),
            drivers = grid.drivers().len(),
            "built financial dashboard"
        );

        Ok(FinancialDashboardView {
            refreshed_on: data.refreshed_on,
            sectors: data
                .sector_benchmarks
                .iter()
                .map(|benchmark| benchmark.sub_sector.clone())
                .collect(),
            selected_sector: sector_index,
            profile: BenchmarkProfile::from(benchmark),
            cashflow: LineChartView::build(&data.cashflow_timeline),
            allocation,
            sensitivity: SensitivityView::from(&grid),
        })
    }
}
