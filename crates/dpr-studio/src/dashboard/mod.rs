//! View models assembled from the pure geometry and scoring core.
//!
//! Builders are invoked explicitly by the presentation layer whenever an input
//! changes; nothing here caches or holds state between calls.

mod conversation;
mod financial;
mod reach;
mod schemes;

pub use conversation::{ConversationExchange, ConversationMessage, ConversationTurn, Speaker};
pub use financial::{
    AllocationSlice, AllocationView, AxisLabel, BenchmarkProfile, CapitalAllocation, ChartSeries,
    FinancialDashboard, FinancialDashboardView, LineChartView, SensitivityView, SeriesKind,
    SeriesPoint,
};
pub use reach::{GeoReachView, LegendEntry, NodeMarker};
pub use schemes::{default_focus, FocusChip, SchemeCard, SchemeMatcherView, DEFAULT_READINESS};

use crate::geometry::SliceError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown sector index {index} ({available} sectors available)")]
    UnknownSector { index: usize, available: usize },
    #[error("capital allocation cannot be charted: {0}")]
    Allocation(#[from] SliceError),
}

/// Rounds a `[0, 1]` fraction to a whole percent for display.
pub(crate) fn whole_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}
