use super::{NodeRole, ReferenceData, SensitivityCell, SupplyNode, TimeSeriesPoint};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetImportError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate {kind} '{key}' in dataset")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("unknown supply node role '{0}'")]
    UnknownRole(String),
}

/// CSV readers for the dataset slices that deployments commonly replace.
pub struct DatasetImporter;

impl DatasetImporter {
    /// Columns: `label,revenue,expense,capital`.
    pub fn cashflow_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<TimeSeriesPoint>, DatasetImportError> {
        let mut labels = HashSet::new();
        let mut points = Vec::new();

        for row in csv_reader(reader).deserialize::<CashflowRow>() {
            let row = row?;
            if !labels.insert(row.label.clone()) {
                return Err(DatasetImportError::DuplicateKey {
                    kind: "timeline label",
                    key: row.label,
                });
            }
            points.push(TimeSeriesPoint {
                label: row.label,
                revenue: row.revenue,
                expense: row.expense,
                capital: row.capital,
            });
        }

        Ok(points)
    }

    /// Columns: `driver,variation,ebitda_delta`.
    pub fn sensitivity_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<SensitivityCell>, DatasetImportError> {
        let mut cells = Vec::new();
        for row in csv_reader(reader).deserialize::<SensitivityRow>() {
            let row = row?;
            cells.push(SensitivityCell::new(row.driver, row.variation, row.ebitda_delta));
        }
        Ok(cells)
    }

    /// Columns: `district,latitude,longitude,role,throughput`.
    pub fn supply_nodes_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<SupplyNode>, DatasetImportError> {
        let mut districts = HashSet::new();
        let mut nodes = Vec::new();

        for row in csv_reader(reader).deserialize::<SupplyNodeRow>() {
            let row = row?;
            let role = NodeRole::parse(&row.role).ok_or(DatasetImportError::UnknownRole(row.role))?;
            if !districts.insert(row.district.clone()) {
                return Err(DatasetImportError::DuplicateKey {
                    kind: "district",
                    key: row.district,
                });
            }
            nodes.push(SupplyNode {
                district: row.district,
                latitude: row.latitude,
                longitude: row.longitude,
                role,
                throughput: row.throughput,
            });
        }

        Ok(nodes)
    }

    pub fn cashflow_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<TimeSeriesPoint>, DatasetImportError> {
        Self::cashflow_from_reader(std::fs::File::open(path)?)
    }

    pub fn sensitivity_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SensitivityCell>, DatasetImportError> {
        Self::sensitivity_from_reader(std::fs::File::open(path)?)
    }

    pub fn supply_nodes_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SupplyNode>, DatasetImportError> {
        Self::supply_nodes_from_reader(std::fs::File::open(path)?)
    }
}

/// Optional CSV replacements layered over the built-in datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetOverrides {
    pub cashflow_csv: Option<std::path::PathBuf>,
    pub sensitivity_csv: Option<std::path::PathBuf>,
    pub supply_nodes_csv: Option<std::path::PathBuf>,
}

impl DatasetOverrides {
    pub fn is_empty(&self) -> bool {
        self.cashflow_csv.is_none()
            && self.sensitivity_csv.is_none()
            && self.supply_nodes_csv.is_none()
    }

    pub fn apply(&self, mut data: ReferenceData) -> Result<ReferenceData, DatasetImportError> {
        if let Some(path) = &self.cashflow_csv {
            data.cashflow_timeline = DatasetImporter::cashflow_from_path(path)?;
        }
        if let Some(path) = &self.sensitivity_csv {
            data.sensitivity_matrix = DatasetImporter::sensitivity_from_path(path)?;
        }
        if let Some(path) = &self.supply_nodes_csv {
            data.supply_nodes = DatasetImporter::supply_nodes_from_path(path)?;
        }
        Ok(data)
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

#[derive(Debug, Deserialize)]
struct CashflowRow {
    #[serde(deserialize_with = "trimmed_label")]
    label: String,
    revenue: f64,
    expense: f64,
    capital: f64,
}

#[derive(Debug, Deserialize)]
struct SensitivityRow {
    #[serde(deserialize_with = "trimmed_label")]
    driver: String,
    #[serde(deserialize_with = "trimmed_label")]
    variation: String,
    ebitda_delta: f64,
}

#[derive(Debug, Deserialize)]
struct SupplyNodeRow {
    #[serde(deserialize_with = "trimmed_label")]
    district: String,
    latitude: f64,
    longitude: f64,
    role: String,
    throughput: f64,
}

fn trimmed_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim_start_matches('\u{feff}').trim().to_string())
}
