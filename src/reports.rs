// Table builders. Each builder is a pure function from the cleaned dataset
// and/or the embedded reference data to one output table; none depends on
// another builder's output. Derived console figures (revenue total,
// population aggregates, ethics-index total) are returned alongside the rows
// that produce them rather than printed here.
use crate::output::ReportSet;
use crate::reference::{
    ADDITIONAL_CONTRACTS, CAGR_ASSUMPTIONS, CELEBRITY_ENDORSEMENTS, POPULATION_IMPACT,
};
use crate::types::{
    Advertiser, AeiRow, CagrRow, CelebrityRow, Contract, Dataset, EmploymentRow, FrameworkRow,
    GamblingBehaviorRow, HealthCostRow, PlayerFrameworkRow, PolicyTierRow, PopulationImpactRow,
    RegulatoryRow, RevenueRow, RiskIndexRow, ScorecardRow, TaxRevenueRow,
};
use crate::util::{responsibility_score, risk_category, round1};
use std::cmp::Ordering;

/// Unrounded population-impact running totals, split the same way the table
/// rows are categorized.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationTotals {
    pub gaming_min: f64,
    pub gaming_max: f64,
    pub pan_masala_min: f64,
    pub pan_masala_max: f64,
}

impl PopulationTotals {
    pub fn total_min(&self) -> f64 {
        self.gaming_min + self.pan_masala_min
    }

    pub fn total_max(&self) -> f64 {
        self.gaming_max + self.pan_masala_max
    }
}

/// Q1: observed central contracts merged with the researched estimates,
/// percentage share of the combined total, sorted by amount descending.
/// Also returns the combined total for the console summary line.
pub fn revenue_table(contracts: &[Contract]) -> (Vec<RevenueRow>, f64) {
    let mut rows: Vec<RevenueRow> = Vec::with_capacity(contracts.len() + ADDITIONAL_CONTRACTS.len());
    let mut total = 0.0;

    for c in contracts {
        let amount = if c.amount_cr > 0.0 { c.amount_cr } else { 0.0 };
        rows.push(RevenueRow {
            contract_type: c.contract_type.clone(),
            partner_sponsor: c.partner.clone(),
            amount_2025_cr: amount,
            percentage: 0.0,
        });
        total += amount;
    }
    for (partner, amount) in ADDITIONAL_CONTRACTS {
        rows.push(RevenueRow {
            contract_type: "Official Partner".to_string(),
            partner_sponsor: (*partner).to_string(),
            amount_2025_cr: *amount,
            percentage: 0.0,
        });
        total += amount;
    }

    if total > 0.0 {
        for row in &mut rows {
            row.percentage = round1((row.amount_2025_cr / total) * 100.0);
        }
    }
    rows.sort_by(|a, b| {
        b.amount_2025_cr
            .partial_cmp(&a.amount_2025_cr)
            .unwrap_or(Ordering::Equal)
    });
    (rows, total)
}

/// Q2: one row per advertiser with the derived risk score and its category,
/// worst first. Parenthesized qualifiers are dropped from the brand name.
pub fn risk_index_table(advertisers: &[Advertiser]) -> Vec<RiskIndexRow> {
    let mut rows: Vec<RiskIndexRow> = advertisers
        .iter()
        .map(|a| {
            let brand = a.brand.split('(').next().unwrap_or(&a.brand).trim();
            RiskIndexRow {
                brand: brand.to_string(),
                category: a.category.clone(),
                health_risk_level: a.health_social_risk.clone(),
                risk_score: a.risk_score,
                risk_category: risk_category(a.risk_score).to_string(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    rows
}

fn sector_for_company(company: &str) -> &'static str {
    if company.contains("Dream11") || company.contains("Circle") || company.contains("Poker") {
        "Gaming/Betting"
    } else if company.contains("Vimal") || company.contains("Kamla") {
        "Pan Masala"
    } else {
        "Other"
    }
}

/// Q3: five-year projection of current revenue at the assumed CAGR range,
/// rounded to whole crores, sorted by current revenue descending.
pub fn cagr_projection_table() -> Vec<CagrRow> {
    let mut rows: Vec<CagrRow> = CAGR_ASSUMPTIONS
        .iter()
        .map(|a| {
            let future_min = a.current_cr * (1.0 + a.cagr_min / 100.0).powi(5);
            let future_max = a.current_cr * (1.0 + a.cagr_max / 100.0).powi(5);
            CagrRow {
                company: a.company.to_string(),
                current_revenue_cr: a.current_cr,
                cagr_range: format!("{}-{}%", a.cagr_min, a.cagr_max),
                projected_2030_min_cr: future_min.round(),
                projected_2030_max_cr: future_max.round(),
                risk_category: sector_for_company(a.company).to_string(),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.current_revenue_cr
            .partial_cmp(&a.current_revenue_cr)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Q4: affected population per brand at the assumed impact-rate range,
/// sorted by user base descending. The category column is derived from the
/// impact-type description rather than assigned independently; the running
/// totals follow the same split and accumulate unrounded values.
pub fn population_impact_table() -> (Vec<PopulationImpactRow>, PopulationTotals) {
    let mut rows = Vec::with_capacity(POPULATION_IMPACT.len());
    let mut totals = PopulationTotals::default();

    for p in POPULATION_IMPACT {
        let impact_min = (p.impact_rate[0] / 100.0) * p.users_million;
        let impact_max = (p.impact_rate[1] / 100.0) * p.users_million;
        let gaming = ["Dream11", "Circle", "Poker"]
            .iter()
            .any(|needle| p.brand.contains(needle));
        let impact_type = if gaming {
            "Financial losses, addiction"
        } else {
            "Health issues, cancer risk"
        };
        let category = if impact_type.contains("Financial") {
            "Gaming/Betting"
        } else {
            "Pan Masala"
        };

        rows.push(PopulationImpactRow {
            brand: p.brand.to_string(),
            total_users_million: p.users_million,
            impact_rate_range: format!("{}-{}%", p.impact_rate[0], p.impact_rate[1]),
            affected_min_million: round1(impact_min),
            affected_max_million: round1(impact_max),
            impact_type: impact_type.to_string(),
            category: category.to_string(),
        });

        if category == "Gaming/Betting" {
            totals.gaming_min += impact_min;
            totals.gaming_max += impact_max;
        } else {
            totals.pan_masala_min += impact_min;
            totals.pan_masala_max += impact_max;
        }
    }

    rows.sort_by(|a, b| {
        b.total_users_million
            .partial_cmp(&a.total_users_million)
            .unwrap_or(Ordering::Equal)
    });
    (rows, totals)
}

/// Q5: celebrity endorsements ranked by social-responsibility score,
/// ascending so the worst offenders lead the table.
pub fn celebrity_table() -> Vec<CelebrityRow> {
    let mut rows: Vec<CelebrityRow> = CELEBRITY_ENDORSEMENTS
        .iter()
        .map(|c| CelebrityRow {
            celebrity: c.celebrity.to_string(),
            high_risk_brands_2025: c.brands_2025.join(", "),
            historical_pattern: c.pattern.to_string(),
            risk_level: c.risk.to_string(),
            social_responsibility_score: responsibility_score(c.risk),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.social_responsibility_score
            .cmp(&b.social_responsibility_score)
    });
    rows
}

// The remaining tables are fixed reference material. Their literal values
// are part of the report contract and must survive unchanged; derived
// columns (person-months, weighted scores) are recomputed from the literals.

pub fn health_cost_table() -> Vec<HealthCostRow> {
    let literals = [
        (
            "Pan Masala Products",
            "25,000-30,000",
            "87-101",
            "Cancer, oral diseases, respiratory issues",
            "2,500-3,500",
        ),
        (
            "Gaming/Betting Apps",
            "8,000-12,000",
            "41-53",
            "Mental health, financial stress, addiction",
            "1,800-2,500",
        ),
        (
            "Sugary FMCG Products",
            "15,000-20,000",
            "200+",
            "Diabetes, obesity, dental issues",
            "750-1,000",
        ),
    ];
    literals
        .iter()
        .map(|(category, cost, population, issues, per_person)| HealthCostRow {
            product_category: category.to_string(),
            annual_health_cost_cr: cost.to_string(),
            population_affected_million: population.to_string(),
            primary_health_issues: issues.to_string(),
            cost_per_person_rs: per_person.to_string(),
        })
        .collect()
}

pub fn gambling_behavior_table() -> Vec<GamblingBehaviorRow> {
    let literals = [
        ("New Fantasy App Registrations", "2M", "8M", "300%"),
        ("Average Spending per User", "₹2,500", "₹8,000", "220%"),
        ("Problem Gambling Cases", "50,000", "180,000", "260%"),
    ];
    literals
        .iter()
        .map(|(metric, before, during, increase)| GamblingBehaviorRow {
            metric: metric.to_string(),
            before_ipl_monthly: before.to_string(),
            during_ipl_monthly: during.to_string(),
            percentage_increase: increase.to_string(),
        })
        .collect()
}

pub fn regulatory_table() -> Vec<RegulatoryRow> {
    let literals = [
        (
            "Tobacco/Pan Masala Ads",
            "Allowed (Surrogate)",
            "Banned",
            "Banned",
            "Banned",
        ),
        (
            "Gambling Ads",
            "Heavily Featured",
            "Restricted",
            "Regulated",
            "Limited",
        ),
        (
            "Alcohol Ads",
            "Surrogate Only",
            "Regulated",
            "Allowed with Warnings",
            "Allowed",
        ),
        ("Health Warnings Required", "No", "Yes", "Yes", "Yes"),
    ];
    literals
        .iter()
        .map(|(parameter, ipl, epl, nfl, mlb)| RegulatoryRow {
            parameter: parameter.to_string(),
            ipl_2025: ipl.to_string(),
            epl: epl.to_string(),
            nfl: nfl.to_string(),
            mlb: mlb.to_string(),
        })
        .collect()
}

pub fn employment_table() -> Vec<EmploymentRow> {
    let literals = [
        ("Content Creation", 25_000, 4, 800),
        ("Media Production", 15_000, 6, 1_200),
        ("Digital Marketing", 35_000, 4, 1_500),
        ("Event Management", 20_000, 3, 600),
        ("Celebrity Management", 5_000, 6, 400),
    ];
    literals
        .iter()
        .map(|(sector, jobs, months, impact)| EmploymentRow {
            employment_sector: sector.to_string(),
            jobs_created: *jobs,
            duration_months: *months,
            economic_impact_cr: *impact,
            total_person_months: jobs * months,
        })
        .collect()
}

pub fn tax_revenue_table() -> Vec<TaxRevenueRow> {
    let literals = [
        ("Advertising Spend", 810, "GST (18%)", 4_500),
        ("Celebrity Endorsements", 120, "Income Tax (30%)", 400),
        ("Production Services", 200, "GST (18%)", 1_111),
        ("Digital Platform Revenue", 450, "Corporate Tax (25%)", 1_800),
    ];
    literals
        .iter()
        .map(|(stream, tax, tax_type, base)| TaxRevenueRow {
            revenue_stream: stream.to_string(),
            tax_amount_cr: *tax,
            tax_type: tax_type.to_string(),
            base_amount_cr: *base,
        })
        .collect()
}

pub fn balanced_scorecard() -> Vec<ScorecardRow> {
    let literals = [
        ("Tata Group", 95, 85, 80, 90, 89),
        ("Amazon Prime", 85, 80, 95, 85, 86),
        ("Reliance", 90, 70, 75, 80, 80),
        ("Dream11", 85, 25, 90, 60, 65),
        ("My11Circle", 75, 20, 80, 55, 58),
        ("Vimal Pan Masala", 70, 10, 40, 30, 43),
    ];
    let mut rows: Vec<ScorecardRow> = literals
        .iter()
        .map(
            |(brand, economic, social, innovation, transparency, total)| ScorecardRow {
                brand: brand.to_string(),
                economic_score: *economic,
                social_impact: *social,
                innovation: *innovation,
                transparency: *transparency,
                total_score: *total,
            },
        )
        .collect();
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    rows
}

/// E2: Advertising Ethics Index. Weighted scores are recomputed from the
/// literal weight/score pairs; the summed total is returned for the console.
pub fn aei_table() -> (Vec<AeiRow>, f64) {
    let literals = [
        ("Health Impact", 30, 35),
        ("Social Responsibility", 25, 40),
        ("Regulatory Compliance", 20, 60),
        ("Transparency", 15, 55),
        ("Innovation in Responsible Advertising", 10, 45),
    ];
    let rows: Vec<AeiRow> = literals
        .iter()
        .map(|(component, weight, score)| AeiRow {
            component: component.to_string(),
            weight_percentage: *weight,
            ipl_score_100: *score,
            weighted_score: f64::from(*weight) * f64::from(*score) / 100.0,
        })
        .collect();
    let total = rows.iter().map(|r| r.weighted_score).sum();
    (rows, total)
}

pub fn framework_table() -> Vec<FrameworkRow> {
    let literals = [
        (
            "Phase out surrogate ads",
            "-15% (₹675 Cr)",
            "High Positive",
            "3 years",
        ),
        (
            "Introduce health warnings",
            "-5% (₹225 Cr)",
            "Medium Positive",
            "1 year",
        ),
        (
            "Promote responsible gaming",
            "Neutral",
            "High Positive",
            "Immediate",
        ),
        (
            "Partner with health brands",
            "+10% (₹450 Cr)",
            "High Positive",
            "2 years",
        ),
    ];
    literals
        .iter()
        .map(|(strategy, revenue, social, timeline)| FrameworkRow {
            strategy: strategy.to_string(),
            revenue_impact: revenue.to_string(),
            social_impact: social.to_string(),
            implementation_timeline: timeline.to_string(),
        })
        .collect()
}

pub fn policy_tiers_table() -> Vec<PolicyTierRow> {
    let literals = [
        (
            "Tier 1 (Prohibited)",
            "Direct tobacco, gambling",
            "Complete ban",
            "0%",
        ),
        (
            "Tier 2 (Restricted)",
            "Pan masala, fantasy sports",
            "Limited slots, health warnings",
            "20%",
        ),
        (
            "Tier 3 (Regulated)",
            "Alcohol surrogates, sugary products",
            "Time restrictions, disclaimers",
            "30%",
        ),
        (
            "Tier 4 (Preferred)",
            "Healthcare, education, technology",
            "Priority placement",
            "50%",
        ),
    ];
    literals
        .iter()
        .map(|(tier, products, restrictions, share)| PolicyTierRow {
            tier: tier.to_string(),
            product_types: products.to_string(),
            advertising_restrictions: restrictions.to_string(),
            revenue_share_percentage: share.to_string(),
        })
        .collect()
}

pub fn player_framework_table() -> Vec<PlayerFrameworkRow> {
    let literals = [
        (
            "Social Impact Assessment",
            40,
            "Health/addiction risk analysis",
        ),
        ("Brand Values Alignment", 25, "Personal brand compatibility"),
        ("Financial Terms", 20, "Contract value vs. reputation risk"),
        (
            "Long-term Career Impact",
            10,
            "Future sponsorship implications",
        ),
        (
            "Public Perception Risk",
            5,
            "Media and fan reaction analysis",
        ),
    ];
    literals
        .iter()
        .map(|(criteria, weight, method)| PlayerFrameworkRow {
            evaluation_criteria: criteria.to_string(),
            weight_percentage: *weight,
            scoring_method: method.to_string(),
        })
        .collect()
}

/// Figures printed as console summary lines and persisted to `summary.json`,
/// produced while assembling the full report set.
#[derive(Debug, Clone, Copy)]
pub struct HeadlineFigures {
    pub total_revenue_cr: f64,
    pub population: PopulationTotals,
    pub aei_total: f64,
}

/// Build all fifteen tables in their fixed report order. Insertion order
/// here is the export enumeration order.
pub fn build_all(data: &Dataset) -> (ReportSet, HeadlineFigures) {
    let mut tables = ReportSet::new();

    let (revenue_rows, total_revenue_cr) = revenue_table(&data.contracts);
    tables.insert("Q1_Revenue", revenue_rows);
    tables.insert("Q2_Risk_Index", risk_index_table(&data.advertisers));
    tables.insert("Q3_CAGR", cagr_projection_table());
    let (impact_rows, population) = population_impact_table();
    tables.insert("Q4_Population_Impact", impact_rows);
    tables.insert("Q5_Celebrity", celebrity_table());

    tables.insert("S1_Health_Costs", health_cost_table());
    tables.insert("S1_Gambling_Behavior", gambling_behavior_table());
    tables.insert("S1_Regulatory", regulatory_table());
    tables.insert("S2_Employment", employment_table());
    tables.insert("S2_Tax_Revenue", tax_revenue_table());

    tables.insert("E1_Balanced_Scorecard", balanced_scorecard());
    let (aei_rows, aei_total) = aei_table();
    tables.insert("E2_AEI", aei_rows);
    tables.insert("E3_Framework", framework_table());
    tables.insert("E4_Policy_Tiers", policy_tiers_table());
    tables.insert("E5_Player_Framework", player_framework_table());

    let figures = HeadlineFigures {
        total_revenue_cr,
        population,
        aei_total,
    };
    (tables, figures)
}
