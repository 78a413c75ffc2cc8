use super::{
    GeographicOutline, NodeRole, Scheme, SectorBenchmark, SensitivityCell, SupplyNode, TicketSize,
    TimeSeriesPoint, WorkforceSplit,
};
use chrono::NaiveDate;

pub(super) fn refreshed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or(NaiveDate::MIN)
}

pub(super) fn cashflow_timeline() -> Vec<TimeSeriesPoint> {
    [
        ("Q1 FY25", 18.0, 14.5, 9.0),
        ("Q2 FY25", 21.5, 16.0, 10.5),
        ("Q3 FY25", 24.0, 17.2, 12.8),
        ("Q4 FY25", 27.8, 18.9, 15.1),
        ("Q1 FY26", 30.5, 20.1, 17.6),
        ("Q2 FY26", 33.2, 21.4, 20.2),
        ("Q3 FY26", 36.9, 22.8, 23.5),
        ("Q4 FY26", 40.4, 24.0, 27.3),
    ]
    .into_iter()
    .map(|(label, revenue, expense, capital)| TimeSeriesPoint {
        label: label.to_string(),
        revenue,
        expense,
        capital,
    })
    .collect()
}

pub(super) fn sector_benchmarks() -> Vec<SectorBenchmark> {
    vec![
        SectorBenchmark {
            sub_sector: "Food Processing".to_string(),
            capex_per_unit: 45.0,
            operating_margin: 0.18,
            break_even_months: 22,
            productivity_index: 0.71,
            export_readiness: 0.46,
            sustainability_score: 0.62,
            workforce_split: WorkforceSplit {
                skilled: 0.34,
                semi_skilled: 0.48,
                women: 0.41,
            },
            sources: vec![
                "AP MSME ONE cluster survey 2025".to_string(),
                "APEDA export registry".to_string(),
                "SIDBI MSME Pulse Q2".to_string(),
            ],
        },
        SectorBenchmark {
            sub_sector: "Textiles & Apparel".to_string(),
            capex_per_unit: 32.0,
            operating_margin: 0.14,
            break_even_months: 26,
            productivity_index: 0.64,
            export_readiness: 0.58,
            sustainability_score: 0.48,
            workforce_split: WorkforceSplit {
                skilled: 0.28,
                semi_skilled: 0.52,
                women: 0.63,
            },
            sources: vec![
                "Handloom & Textiles Department MIS".to_string(),
                "AEPC buyer sentiment index".to_string(),
            ],
        },
        SectorBenchmark {
            sub_sector: "Auto Components".to_string(),
            capex_per_unit: 78.0,
            operating_margin: 0.21,
            break_even_months: 30,
            productivity_index: 0.82,
            export_readiness: 0.67,
            sustainability_score: 0.55,
            workforce_split: WorkforceSplit {
                skilled: 0.57,
                semi_skilled: 0.36,
                women: 0.19,
            },
            sources: vec![
                "ACMA supplier benchmarks".to_string(),
                "APIIC industrial park occupancy".to_string(),
                "CRISIL SME ratings digest".to_string(),
            ],
        },
    ]
}

pub(super) fn sensitivity_matrix() -> Vec<SensitivityCell> {
    vec![
        SensitivityCell::new("Raw Material Cost", "+10%", -6.5),
        SensitivityCell::new("Raw Material Cost", "-10%", 5.8),
        SensitivityCell::new("Energy Cost", "+10%", -3.2),
        SensitivityCell::new("Energy Cost", "-10%", 2.9),
        SensitivityCell::new("Selling Price", "+10%", 9.4),
        SensitivityCell::new("Selling Price", "-10%", -9.1),
        SensitivityCell::new("Capacity Utilisation", "+10%", 6.2),
        SensitivityCell::new("Capacity Utilisation", "-10%", -4.7),
        SensitivityCell::new("Interest Rate", "+10%", -1.1),
    ]
}

pub(super) fn supply_nodes() -> Vec<SupplyNode> {
    [
        ("Visakhapatnam", 17.69, 83.22, NodeRole::Distribution, 92.0),
        ("Kakinada", 16.99, 82.25, NodeRole::ProcessingHub, 74.0),
        ("Guntur", 16.31, 80.44, NodeRole::InputCluster, 81.0),
        ("Nellore", 14.44, 79.99, NodeRole::ProcessingHub, 63.0),
        ("Kurnool", 15.83, 78.04, NodeRole::InputCluster, 58.0),
        ("Anantapur", 14.68, 77.6, NodeRole::InputCluster, 47.0),
        ("Tirupati", 13.63, 79.42, NodeRole::Distribution, 69.0),
    ]
    .into_iter()
    .map(
        |(district, latitude, longitude, role, throughput)| SupplyNode {
            district: district.to_string(),
            latitude,
            longitude,
            role,
            throughput,
        },
    )
    .collect()
}

pub(super) fn state_outline() -> GeographicOutline {
    GeographicOutline::new(vec![
        (19.1, 83.0),
        (18.5, 82.2),
        (18.2, 81.3),
        (17.8, 80.8),
        (17.4, 80.3),
        (16.9, 80.0),
        (16.5, 79.6),
        (15.9, 78.9),
        (15.2, 78.2),
        (14.6, 78.0),
        (14.0, 78.3),
        (13.6, 79.4),
        (13.7, 80.1),
        (14.2, 80.5),
        (14.7, 80.8),
        (15.3, 81.8),
        (16.2, 82.4),
        (17.1, 83.0),
        (18.2, 83.2),
        (18.8, 83.1),
    ])
}

pub(super) fn schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            name: "PMEGP".to_string(),
            owner: "KVIC".to_string(),
            ticket_size: TicketSize { min: 5.0, max: 50.0 },
            focus: strings(&["New Enterprise", "Capex", "Rural"]),
            interest_rate: 9.5,
            subsidy: 0.35,
            min_score: 0.45,
            eligibility: strings(&[
                "First-generation entrepreneurs",
                "Project cost up to INR 50L for manufacturing",
                "EDP training completion",
            ]),
            digital_touchpoints: strings(&["KVIC e-portal", "Udyam registration"]),
        },
        Scheme {
            name: "CGTMSE Collateral-Free Credit".to_string(),
            owner: "SIDBI".to_string(),
            ticket_size: TicketSize { min: 10.0, max: 500.0 },
            focus: strings(&["Working Capital", "Capex"]),
            interest_rate: 10.25,
            subsidy: 0.0,
            min_score: 0.6,
            eligibility: strings(&[
                "Udyam-registered MSE",
                "No collateral or third-party guarantee",
            ]),
            digital_touchpoints: strings(&["JanSamarth", "Lender portal guarantee cover"]),
        },
        Scheme {
            name: "AP IDP Capital Subsidy".to_string(),
            owner: "Government of Andhra Pradesh".to_string(),
            ticket_size: TicketSize { min: 25.0, max: 1000.0 },
            focus: strings(&["Capex", "Export", "Women Entrepreneurs"]),
            interest_rate: 0.0,
            subsidy: 0.25,
            min_score: 0.55,
            eligibility: strings(&[
                "Unit located in Andhra Pradesh",
                "Commercial production within policy window",
            ]),
            digital_touchpoints: strings(&["AP Single Desk portal", "CFMS disbursal"]),
        },
        Scheme {
            name: "SIDBI 4E Green Finance".to_string(),
            owner: "SIDBI".to_string(),
            ticket_size: TicketSize { min: 10.0, max: 150.0 },
            focus: strings(&["Energy Efficiency", "Capex"]),
            interest_rate: 8.6,
            subsidy: 0.1,
            min_score: 0.65,
            eligibility: strings(&[
                "Energy audit report",
                "Minimum 10% energy saving",
            ]),
            digital_touchpoints: strings(&["SIDBI online loan portal"]),
        },
        Scheme {
            name: "Stand-Up India".to_string(),
            owner: "Scheduled Commercial Banks".to_string(),
            ticket_size: TicketSize { min: 10.0, max: 100.0 },
            focus: strings(&["Women Entrepreneurs", "New Enterprise", "Working Capital"]),
            interest_rate: 9.8,
            subsidy: 0.0,
            min_score: 0.5,
            eligibility: strings(&[
                "SC/ST or woman entrepreneur",
                "Greenfield enterprise",
            ]),
            digital_touchpoints: strings(&["Stand-Up Mitra portal"]),
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
