// Entry point and high-level flow.
//
// The run is a single linear pipeline: load the four input CSVs, clean them
// into typed records, build every analysis table, print each one to the
// console with its heading and any summary lines, then export one CSV per
// table plus a JSON summary. Any failure during loading or writing aborts
// the run with a single error message.
use std::env;
use std::error::Error;
use std::path::PathBuf;

use ipl_ad_report::output::RenderTable;
use ipl_ad_report::reports::HeadlineFigures;
use ipl_ad_report::types::AnalysisSummary;
use ipl_ad_report::{loader, output, reports, util};

const DEFAULT_ADVERTISERS: &str = "fact_ipl_advertisers.csv";
const DEFAULT_CONTRACTS: &str = "fact_ipl_central_contracts.csv";
const DEFAULT_REVENUE: &str = "fact_revenue_demography.csv";
const DEFAULT_SUMMARY: &str = "fact_summary_demography.csv";
const DEFAULT_OUT_DIR: &str = "output";

/// Console heading per table, in the same order the tables are built.
const HEADINGS: &[(&str, &str)] = &[
    ("Q1_Revenue", "1. Revenue from Central Contracts:"),
    ("Q2_Risk_Index", "2. Health/Social Risk Index:"),
    ("Q3_CAGR", "3. CAGR Projections (2025-2030):"),
    ("Q4_Population_Impact", "4. Population Impact Analysis:"),
    ("Q5_Celebrity", "5. Celebrity Endorsement Analysis:"),
    ("S1_Health_Costs", "1A. Public Health Costs:"),
    ("S1_Gambling_Behavior", "1B. Gambling Behavior Impact:"),
    ("S1_Regulatory", "1C. Regulatory Comparison:"),
    ("S2_Employment", "2A. Economic Ecosystem - Employment:"),
    ("S2_Tax_Revenue", "2B. Tax Revenue:"),
    ("E1_Balanced_Scorecard", "1. Balanced Scorecard:"),
    ("E2_AEI", "2. Advertising Ethics Index:"),
    ("E3_Framework", "3. Responsible Advertising Framework:"),
    ("E4_Policy_Tiers", "4. Responsible Advertising Policy Tiers:"),
    ("E5_Player_Framework", "5. Player Endorsement Evaluation Framework:"),
];

struct Args {
    advertisers: PathBuf,
    contracts: PathBuf,
    revenue: PathBuf,
    summary: PathBuf,
    out_dir: PathBuf,
}

/// Positional arguments: either none (default filenames in the working
/// directory), the four input paths, or the four paths plus an output
/// directory.
fn parse_args() -> Result<Args, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.len() {
        0 => Ok(Args {
            advertisers: DEFAULT_ADVERTISERS.into(),
            contracts: DEFAULT_CONTRACTS.into(),
            revenue: DEFAULT_REVENUE.into(),
            summary: DEFAULT_SUMMARY.into(),
            out_dir: DEFAULT_OUT_DIR.into(),
        }),
        4 | 5 => Ok(Args {
            advertisers: args[0].clone().into(),
            contracts: args[1].clone().into(),
            revenue: args[2].clone().into(),
            summary: args[3].clone().into(),
            out_dir: args
                .get(4)
                .map(|s| s.clone().into())
                .unwrap_or_else(|| DEFAULT_OUT_DIR.into()),
        }),
        n => Err(format!(
            "usage: ipl_ad_report [ADVERTISERS CONTRACTS REVENUE SUMMARY [OUT_DIR]] (got {} arguments)",
            n
        )
        .into()),
    }
}

fn banner(title: &str, width: usize) {
    println!("{}", "=".repeat(width));
    println!("{}", title);
    println!("{}", "=".repeat(width));
}

fn heading_for(name: &str) -> &'static str {
    HEADINGS
        .iter()
        .find(|(table, _)| *table == name)
        .map(|(_, heading)| *heading)
        .unwrap_or("")
}

/// Summary lines that accompany specific tables on the console.
fn print_figures_for(name: &str, figures: &HeadlineFigures) {
    match name {
        "Q1_Revenue" => {
            println!(
                "Total Central Contract Revenue 2025: ₹{} Crores",
                util::format_number(figures.total_revenue_cr, 0)
            );
        }
        "Q4_Population_Impact" => {
            let p = &figures.population;
            println!("Population Impact Summary:");
            println!(
                "Gaming/Betting Impact: {:.1}-{:.1} million",
                p.gaming_min, p.gaming_max
            );
            println!(
                "Pan Masala Impact: {:.1}-{:.1} million",
                p.pan_masala_min, p.pan_masala_max
            );
            println!(
                "Total Negatively Impacted: {:.1}-{:.1} million Indians",
                p.total_min(),
                p.total_max()
            );
        }
        "E2_AEI" => {
            println!(
                "IPL 2025 Advertising Ethics Index: {}/100",
                figures.aei_total
            );
            println!("Rating: Below Average - Significant room for improvement");
        }
        "E3_Framework" => {
            println!("Net Revenue Impact: -10% initially, +5% long-term");
            println!("Social Impact: Significantly Positive");
        }
        "E5_Player_Framework" => {
            println!("Recommended Actions for Players:");
            println!("1. Avoid High-Risk Categories: Pan masala, direct gambling platforms");
            println!("2. Negotiate Responsibility Clauses: Include social impact commitments");
            println!(
                "3. Promote Positive Alternatives: Partner with health, education, technology brands"
            );
            println!("4. Regular Impact Assessment: Annual review of endorsement portfolio");
        }
        _ => {}
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let (data, load_summary) = loader::load_all(
        &args.advertisers,
        &args.contracts,
        &args.revenue,
        &args.summary,
    )?;
    println!(
        "Processing datasets... ({} advertisers, {} contracts, {} revenue entries, {} summary rows)\n",
        util::format_int(load_summary.advertisers as i64),
        util::format_int(load_summary.contracts as i64),
        util::format_int(load_summary.revenue_entries as i64),
        util::format_int(load_summary.summary_rows as i64)
    );

    banner("IPL 2025 COMPREHENSIVE ANALYSIS", 60);
    let (tables, figures) = reports::build_all(&data);

    for (name, table) in tables.iter() {
        // Section banners precede the first table of each section.
        match name {
            "Q1_Revenue" => {
                println!();
                banner("PRIMARY ANALYSIS", 40);
            }
            "S1_Health_Costs" => {
                println!();
                banner("SECONDARY ANALYSIS", 40);
            }
            "E1_Balanced_Scorecard" => {
                println!();
                banner("EXPECTED OUTCOMES", 40);
            }
            _ => {}
        }
        println!("\n{}", heading_for(name));
        println!("{}\n", table.to_markdown());
        print_figures_for(name, &figures);
    }

    println!();
    let written = tables.export_all(&args.out_dir)?;
    for path in &written {
        println!("Saved: {}", path.display());
    }

    let summary = AnalysisSummary {
        total_central_revenue_cr: figures.total_revenue_cr,
        gaming_impact_min_million: figures.population.gaming_min,
        gaming_impact_max_million: figures.population.gaming_max,
        pan_masala_impact_min_million: figures.population.pan_masala_min,
        pan_masala_impact_max_million: figures.population.pan_masala_max,
        total_impact_min_million: figures.population.total_min(),
        total_impact_max_million: figures.population.total_max(),
        ethics_index_total: figures.aei_total,
        tables_exported: tables.len(),
    };
    let summary_path = args.out_dir.join("summary.json");
    output::write_json(&summary_path, &summary)?;
    println!("Saved: {}", summary_path.display());

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error encountered: {}", e);
        std::process::exit(1);
    }
}
