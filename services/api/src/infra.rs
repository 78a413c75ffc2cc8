use dpr_studio::datasets::{DatasetImportError, DatasetOverrides, Language, ReferenceData};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) data: Arc<ReferenceData>,
}

/// Built-in datasets with any configured CSV slices swapped in.
pub(crate) fn load_reference_data(
    overrides: &DatasetOverrides,
) -> Result<ReferenceData, DatasetImportError> {
    let data = overrides.apply(ReferenceData::standard())?;
    if !overrides.is_empty() {
        info!(
            periods = data.cashflow_timeline.len(),
            sensitivity_cells = data.sensitivity_matrix.len(),
            supply_nodes = data.supply_nodes.len(),
            "applied dataset overrides"
        );
    }
    Ok(data)
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::parse(raw)
        .ok_or_else(|| format!("unsupported language '{raw}' (expected english or telugu)"))
}

pub(crate) fn parse_readiness(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("readiness must lie between 0 and 1, got {value}"))
    }
}
