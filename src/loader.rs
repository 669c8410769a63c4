use crate::types::{
    Advertiser, Contract, Dataset, RawAdvertiserRow, RawContractRow, RawRevenueRow, RevenueEntry,
};
use crate::util::{extract_revenue, influence_to_score, parse_amount, risk_to_score};
use csv::ReaderBuilder;
use std::error::Error;
use std::path::Path;

/// Row counts observed while loading, for the console diagnostics line.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub advertisers: usize,
    pub contracts: usize,
    pub revenue_entries: usize,
    pub summary_rows: usize,
}

/// Load and clean all four input files. A missing file or a file missing an
/// expected column fails the whole run; bad field *values* never do, they
/// fall back to zero scores.
pub fn load_all(
    advertisers_path: &Path,
    contracts_path: &Path,
    revenue_path: &Path,
    summary_path: &Path,
) -> Result<(Dataset, LoadSummary), Box<dyn Error>> {
    let advertisers = load_advertisers(advertisers_path)?;
    let contracts = load_contracts(contracts_path)?;
    let revenue = load_revenue(revenue_path)?;
    let summary_rows = count_summary_rows(summary_path)?;

    let summary = LoadSummary {
        advertisers: advertisers.len(),
        contracts: contracts.len(),
        revenue_entries: revenue.len(),
        summary_rows,
    };
    let dataset = Dataset {
        advertisers,
        contracts,
        revenue,
        summary_rows,
    };
    Ok((dataset, summary))
}

pub fn load_advertisers(path: &Path) -> Result<Vec<Advertiser>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for result in rdr.deserialize::<RawAdvertiserRow>() {
        let row = result?;
        let risk_score = risk_to_score(row.health_social_risk.as_deref());
        let influence_score = influence_to_score(row.celebrity_influence.as_deref());
        out.push(Advertiser {
            brand: row.advertiser_brand.trim().to_string(),
            category: row.category.trim().to_string(),
            health_social_risk: row.health_social_risk.unwrap_or_default().trim().to_string(),
            risk_score,
            influence_score,
        });
    }
    Ok(out)
}

pub fn load_contracts(path: &Path) -> Result<Vec<Contract>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for result in rdr.deserialize::<RawContractRow>() {
        let row = result?;
        out.push(Contract {
            contract_type: row.contract_type.trim().to_string(),
            partner: row.partner_sponsor_name.trim().to_string(),
            amount_cr: parse_amount(row.amount_in_crores_2025.as_deref()),
        });
    }
    Ok(out)
}

pub fn load_revenue(path: &Path) -> Result<Vec<RevenueEntry>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for result in rdr.deserialize::<RawRevenueRow>() {
        let row = result?;
        out.push(RevenueEntry {
            entity: row.entity.trim().to_string(),
            revenue_cr: extract_revenue(row.latest_annual_revenue.as_deref()),
        });
    }
    Ok(out)
}

// The summary file has no consumer; its schema is deliberately left untyped
// and we only report how many rows it carries.
pub fn count_summary_rows(path: &Path) -> Result<usize, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut rows = 0usize;
    for record in rdr.records() {
        record?;
        rows += 1;
    }
    Ok(rows)
}
