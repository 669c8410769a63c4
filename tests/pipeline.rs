// End-to-end pipeline test: realistic CSV fixtures in, fifteen exported
// tables out, byte-identical across runs.
use std::fs;
use std::path::{Path, PathBuf};

use ipl_ad_report::{loader, output, reports, types};

const EXPECTED_TABLES: &[&str] = &[
    "Q1_Revenue",
    "Q2_Risk_Index",
    "Q3_CAGR",
    "Q4_Population_Impact",
    "Q5_Celebrity",
    "S1_Health_Costs",
    "S1_Gambling_Behavior",
    "S1_Regulatory",
    "S2_Employment",
    "S2_Tax_Revenue",
    "E1_Balanced_Scorecard",
    "E2_AEI",
    "E3_Framework",
    "E4_Policy_Tiers",
    "E5_Player_Framework",
];

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn fixture_paths(dir: &Path) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let advertisers = write_fixture(
        dir,
        "fact_ipl_advertisers.csv",
        "advertiser_brand,category,health_social_risk,celebrity_influence\n\
         Dream11 (Fantasy Gaming),Fantasy Sports,Very High (addiction risk),Extremely High\n\
         My11Circle (Games24x7),Fantasy Sports,Very High,High\n\
         Vimal Elaichi (Surrogate),Pan Masala,Extremely High (Carcinogenic),Extremely High\n\
         Kamla Pasand (Surrogate),Pan Masala,Extremely High (Carcinogenic),High\n\
         Campa Cola,Beverages,Moderate (sugar content),Medium\n\
         AngelOne,Fintech,Low,Medium\n",
    );
    let contracts = write_fixture(
        dir,
        "fact_ipl_central_contracts.csv",
        "contract_type,partner_sponsor_name,amount_in_crores_2025\n\
         Title Sponsor,Tata Group,\"2,500\"\n\
         Official Digital Streaming Partner,JioCinema,\"1,500\"\n\
         Official Partner,My11Circle,625\n\
         Official Partner,AngelOne,180\n\
         Umpire Partner,IDFC First Bank,N/A\n",
    );
    let revenue = write_fixture(
        dir,
        "fact_revenue_demography.csv",
        "entity,latest_annual_revenue\n\
         Dream11,\"₹6,384 crore (FY24)\"\n\
         My11Circle,\"₹2,250 crore (FY24)\"\n\
         PokerBaazi,Not disclosed\n",
    );
    let summary = write_fixture(
        dir,
        "fact_summary_demography.csv",
        "metric,value\ntotal_ad_spend,\"4,500 Cr\"\nviewership,620M\n",
    );
    (advertisers, contracts, revenue, summary)
}

#[test]
fn full_pipeline_exports_all_tables() {
    let dir = tempfile::tempdir().unwrap();
    let (advertisers, contracts, revenue, summary) = fixture_paths(dir.path());

    let (data, load_summary) =
        loader::load_all(&advertisers, &contracts, &revenue, &summary).unwrap();
    assert_eq!(load_summary.advertisers, 6);
    assert_eq!(load_summary.contracts, 5);
    assert_eq!(load_summary.revenue_entries, 3);
    assert_eq!(load_summary.summary_rows, 2);

    let (tables, figures) = reports::build_all(&data);
    assert_eq!(tables.len(), EXPECTED_TABLES.len());
    // Observed 2,500 + 1,500 + 625 + 180 + 0, plus 150 in estimates.
    assert_eq!(figures.total_revenue_cr, 4955.0);

    let out_dir = dir.path().join("output");
    let written = tables.export_all(&out_dir).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let expected: Vec<String> = EXPECTED_TABLES
        .iter()
        .map(|name| format!("{}.csv", name))
        .collect();
    assert_eq!(names, expected);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn exported_revenue_table_has_expected_shape() {
    let dir = tempfile::tempdir().unwrap();
    let (advertisers, contracts, revenue, summary) = fixture_paths(dir.path());
    let (data, _) = loader::load_all(&advertisers, &contracts, &revenue, &summary).unwrap();
    let (tables, _) = reports::build_all(&data);

    let out_dir = dir.path().join("output");
    tables.export_all(&out_dir).unwrap();

    let q1 = fs::read_to_string(out_dir.join("Q1_Revenue.csv")).unwrap();
    let mut lines = q1.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Contract_Type,Partner_Sponsor,Amount_2025_Cr,Percentage"
    );
    // Largest contract leads after the descending sort.
    assert_eq!(lines.next().unwrap(), "Title Sponsor,Tata Group,2500.0,50.5");
    // 5 observed + 4 estimated rows.
    assert_eq!(q1.lines().count(), 10);

    let percentage_sum: f64 = q1
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap().parse::<f64>().unwrap())
        .sum();
    assert!((percentage_sum - 100.0).abs() < 0.5, "sum {percentage_sum}");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let (advertisers, contracts, revenue, summary) = fixture_paths(dir.path());

    let export = |out: &Path| {
        let (data, _) = loader::load_all(&advertisers, &contracts, &revenue, &summary).unwrap();
        let (tables, _) = reports::build_all(&data);
        tables.export_all(out).unwrap()
    };
    let first = export(&dir.path().join("run1"));
    let second = export(&dir.path().join("run2"));

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap(), "{:?}", a);
    }
}

#[test]
fn summary_json_carries_headline_figures() {
    let dir = tempfile::tempdir().unwrap();
    let (advertisers, contracts, revenue, summary) = fixture_paths(dir.path());
    let (data, _) = loader::load_all(&advertisers, &contracts, &revenue, &summary).unwrap();
    let (tables, figures) = reports::build_all(&data);

    let stats = types::AnalysisSummary {
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
    let path = dir.path().join("summary.json");
    output::write_json(&path, &stats).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["total_central_revenue_cr"], 4955.0);
    assert_eq!(parsed["ethics_index_total"], 45.25);
    assert_eq!(parsed["tables_exported"], 15);
    let gaming_min = parsed["gaming_impact_min_million"].as_f64().unwrap();
    assert!((gaming_min - 41.0).abs() < 1e-9);
}
