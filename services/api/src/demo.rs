use crate::infra::{load_reference_data, parse_language, parse_readiness};
use chrono::Utc;
use clap::Args;
use dpr_studio::dashboard::{
    default_focus, ConversationExchange, ConversationTurn, FinancialDashboard,
    FinancialDashboardView, GeoReachView, SchemeMatcherView, DEFAULT_READINESS,
};
use dpr_studio::datasets::{DatasetOverrides, FreeTextInput, Language, ReferenceData};
use dpr_studio::error::AppError;
use std::path::PathBuf;

const SAMPLE_NARRATIVE: &str = "We process millets near Guntur and want a term loan under a state scheme to add solar energy and start export shipments.";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Sector benchmark to chart (index into the benchmark list)
    #[arg(long, default_value_t = 0)]
    pub(crate) sector: usize,
    /// Focus area for scheme matching; repeat for several (defaults to Working Capital)
    #[arg(long)]
    pub(crate) focus: Vec<String>,
    /// Readiness score between 0 and 1 (defaults to 0.62)
    #[arg(long, value_parser = parse_readiness)]
    pub(crate) readiness: Option<f64>,
    /// Narrative to score in the conversation section
    #[arg(long)]
    pub(crate) narrative: Option<String>,
    /// CSV replacing the cash-flow timeline (label,revenue,expense,capital)
    #[arg(long)]
    pub(crate) cashflow_csv: Option<PathBuf>,
    /// CSV replacing the sensitivity matrix (driver,variation,ebitda_delta)
    #[arg(long)]
    pub(crate) sensitivity_csv: Option<PathBuf>,
    /// CSV replacing the supply nodes (district,latitude,longitude,role,throughput)
    #[arg(long)]
    pub(crate) nodes_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Narrative to score
    pub(crate) text: String,
    /// Reply language: english or telugu
    #[arg(long, value_parser = parse_language, default_value = "english")]
    pub(crate) language: Language,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SchemesArgs {
    /// Focus area to match; repeat for several (defaults to Working Capital)
    #[arg(long)]
    pub(crate) focus: Vec<String>,
    /// Readiness score between 0 and 1 (defaults to 0.62)
    #[arg(long, value_parser = parse_readiness)]
    pub(crate) readiness: Option<f64>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        sector,
        focus,
        readiness,
        narrative,
        cashflow_csv,
        sensitivity_csv,
        nodes_csv,
    } = args;

    let overrides = DatasetOverrides {
        cashflow_csv,
        sensitivity_csv,
        supply_nodes_csv: nodes_csv,
    };
    let imported = !overrides.is_empty();
    let data = load_reference_data(&overrides)?;

    println!("MSME DPR studio demo");
    if imported {
        println!("Data source: CSV overrides layered on the reference datasets");
    } else {
        println!("Data source: Reference datasets (refreshed {})", data.refreshed_on);
    }

    let financial = FinancialDashboard::build(&data, sector)?;
    render_financial(&financial);

    let reach = GeoReachView::with_default_box(&data.state_outline, &data.supply_nodes);
    render_reach(&reach);

    render_schemes(&matcher_view(&data, focus, readiness));

    let input = FreeTextInput::new(
        narrative.unwrap_or_else(|| SAMPLE_NARRATIVE.to_string()),
        Language::English,
    );
    match ConversationTurn::default().respond(&input, Utc::now()) {
        Some(exchange) => render_exchange(&exchange),
        None => println!("\nConversation: narrative was blank, nothing to score"),
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = FreeTextInput::new(args.text, args.language);
    match ConversationTurn::default().respond(&input, Utc::now()) {
        Some(exchange) => render_exchange(&exchange),
        None => println!("Nothing to score: the narrative is blank"),
    }
    Ok(())
}

pub(crate) fn run_schemes(args: SchemesArgs) -> Result<(), AppError> {
    let data = ReferenceData::standard();
    render_schemes(&matcher_view(&data, args.focus, args.readiness));
    Ok(())
}

fn matcher_view(
    data: &ReferenceData,
    focus: Vec<String>,
    readiness: Option<f64>,
) -> SchemeMatcherView {
    let focus = if focus.is_empty() {
        default_focus()
    } else {
        focus
    };
    SchemeMatcherView::build(
        &data.schemes,
        &focus,
        readiness.unwrap_or(DEFAULT_READINESS),
    )
}

fn render_financial(view: &FinancialDashboardView) {
    let profile = &view.profile;
    println!("\nFinancial engine: {}", profile.sub_sector);
    println!(
        "- Operating margin {}% | break-even {} months | productivity P{}",
        profile.operating_margin_pct, profile.break_even_months, profile.productivity_percentile
    );
    println!(
        "- Export readiness {}% | workforce {}% skilled, {}% semi-skilled, {}% women",
        profile.export_readiness_pct, profile.skilled_pct, profile.semi_skilled_pct, profile.women_pct
    );
    if !profile.sources.is_empty() {
        println!("- Sources: {}", profile.sources.join(", "));
    }

    println!(
        "\nCash-flow chart ({}x{}, max {:.1})",
        view.cashflow.width, view.cashflow.height, view.cashflow.max_value
    );
    for series in &view.cashflow.series {
        println!("  {}: {}", series.label, series.svg_path);
    }

    println!("\nCapital allocation");
    for slice in &view.allocation.slices {
        println!(
            "  - {}: INR {:.1}L ({}%)",
            slice.slice.label, slice.value, slice.share_pct
        );
    }

    println!("\nEBITDA sensitivity (pp)");
    println!("  {:<22} {}", "Driver", view.sensitivity.variations.join("  "));
    for row in &view.sensitivity.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| format!("{:>4}", cell.display))
            .collect();
        println!("  {:<22} {}", row.driver, cells.join("  "));
    }
}

fn render_reach(view: &GeoReachView) {
    println!("\nGeo reach ({}x{})", view.width, view.height);
    println!("  Outline: {}", view.outline_svg);
    for marker in &view.markers {
        let note = if marker.in_view { "" } else { " [outside outline]" };
        println!(
            "  - {} ({}) throughput {} at ({:.1}, {:.1}){}",
            marker.district,
            marker.role_label,
            marker.throughput,
            marker.position.x,
            marker.position.y,
            note
        );
    }
}

fn render_schemes(view: &SchemeMatcherView) {
    let selected: Vec<&str> = view
        .focus_chips
        .iter()
        .filter(|chip| chip.selected)
        .map(|chip| chip.label.as_str())
        .collect();
    println!(
        "\nScheme matcher (readiness {}%, focus: {})",
        view.readiness_pct,
        if selected.is_empty() {
            "none".to_string()
        } else {
            selected.join(", ")
        }
    );

    if view.matches.is_empty() {
        println!("  No schemes cleared the eligibility threshold");
        return;
    }

    for card in &view.matches {
        println!("  - {} | fit {}%", card.name, card.fit_pct);
        println!("    {}", card.headline);
        println!(
            "    Rate {} | Subsidy {} | Min score {}",
            card.rate, card.subsidy, card.min_score
        );
        if !card.eligibility.is_empty() {
            println!("    Eligibility highlights: {}.", card.eligibility);
        }
    }
}

fn render_exchange(exchange: &ConversationExchange) {
    println!("\nConversation ({})", exchange.entrepreneur.language.label());
    println!("  Entrepreneur: {}", exchange.entrepreneur.text);
    println!("  Assistant:");
    for line in exchange.assistant.text.lines() {
        println!("    {line}");
    }
    if !exchange.assessment.matched_indicators.is_empty() {
        println!(
            "  Indicators: {}",
            exchange.assessment.matched_indicators.join(", ")
        );
    }
}
