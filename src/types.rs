use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct RawAdvertiserRow {
    pub advertiser_brand: String,
    pub category: String,
    pub health_social_risk: Option<String>,
    pub celebrity_influence: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawContractRow {
    pub contract_type: String,
    pub partner_sponsor_name: String,
    pub amount_in_crores_2025: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawRevenueRow {
    pub entity: String,
    pub latest_annual_revenue: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Advertiser {
    pub brand: String,
    pub category: String,
    pub health_social_risk: String,
    pub risk_score: u8,
    pub influence_score: u8,
}

#[derive(Debug, Clone)]
pub struct Contract {
    pub contract_type: String,
    pub partner: String,
    pub amount_cr: f64,
}

#[derive(Debug, Clone)]
pub struct RevenueEntry {
    pub entity: String,
    pub revenue_cr: f64,
}

/// All cleaned inputs for one run. The revenue entries and the summary row
/// count are carried for load diagnostics only; no table builder consumes them.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub advertisers: Vec<Advertiser>,
    pub contracts: Vec<Contract>,
    pub revenue: Vec<RevenueEntry>,
    pub summary_rows: usize,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RevenueRow {
    #[serde(rename = "Contract_Type")]
    #[tabled(rename = "Contract_Type")]
    pub contract_type: String,
    #[serde(rename = "Partner_Sponsor")]
    #[tabled(rename = "Partner_Sponsor")]
    pub partner_sponsor: String,
    #[serde(rename = "Amount_2025_Cr")]
    #[tabled(rename = "Amount_2025_Cr")]
    pub amount_2025_cr: f64,
    #[serde(rename = "Percentage")]
    #[tabled(rename = "Percentage")]
    pub percentage: f64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RiskIndexRow {
    #[serde(rename = "Brand")]
    #[tabled(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Health_Risk_Level")]
    #[tabled(rename = "Health_Risk_Level")]
    pub health_risk_level: String,
    #[serde(rename = "Risk_Score_1_10")]
    #[tabled(rename = "Risk_Score_1_10")]
    pub risk_score: u8,
    #[serde(rename = "Risk_Category")]
    #[tabled(rename = "Risk_Category")]
    pub risk_category: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CagrRow {
    #[serde(rename = "Company")]
    #[tabled(rename = "Company")]
    pub company: String,
    #[serde(rename = "Current_Revenue_Cr")]
    #[tabled(rename = "Current_Revenue_Cr")]
    pub current_revenue_cr: f64,
    #[serde(rename = "CAGR_Range")]
    #[tabled(rename = "CAGR_Range")]
    pub cagr_range: String,
    #[serde(rename = "Projected_2030_Min_Cr")]
    #[tabled(rename = "Projected_2030_Min_Cr")]
    pub projected_2030_min_cr: f64,
    #[serde(rename = "Projected_2030_Max_Cr")]
    #[tabled(rename = "Projected_2030_Max_Cr")]
    pub projected_2030_max_cr: f64,
    #[serde(rename = "Risk_Category")]
    #[tabled(rename = "Risk_Category")]
    pub risk_category: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PopulationImpactRow {
    #[serde(rename = "Brand")]
    #[tabled(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Total_Users_Million")]
    #[tabled(rename = "Total_Users_Million")]
    pub total_users_million: f64,
    #[serde(rename = "Impact_Rate_Range")]
    #[tabled(rename = "Impact_Rate_Range")]
    pub impact_rate_range: String,
    #[serde(rename = "Affected_Min_Million")]
    #[tabled(rename = "Affected_Min_Million")]
    pub affected_min_million: f64,
    #[serde(rename = "Affected_Max_Million")]
    #[tabled(rename = "Affected_Max_Million")]
    pub affected_max_million: f64,
    #[serde(rename = "Impact_Type")]
    #[tabled(rename = "Impact_Type")]
    pub impact_type: String,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CelebrityRow {
    #[serde(rename = "Celebrity")]
    #[tabled(rename = "Celebrity")]
    pub celebrity: String,
    #[serde(rename = "High_Risk_Brands_2025")]
    #[tabled(rename = "High_Risk_Brands_2025")]
    pub high_risk_brands_2025: String,
    #[serde(rename = "Historical_Pattern_2023_2024")]
    #[tabled(rename = "Historical_Pattern_2023_2024")]
    pub historical_pattern: String,
    #[serde(rename = "Risk_Level")]
    #[tabled(rename = "Risk_Level")]
    pub risk_level: String,
    #[serde(rename = "Social_Responsibility_Score")]
    #[tabled(rename = "Social_Responsibility_Score")]
    pub social_responsibility_score: u8,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct HealthCostRow {
    #[serde(rename = "Product_Category")]
    #[tabled(rename = "Product_Category")]
    pub product_category: String,
    #[serde(rename = "Annual_Health_Cost_Cr")]
    #[tabled(rename = "Annual_Health_Cost_Cr")]
    pub annual_health_cost_cr: String,
    #[serde(rename = "Population_Affected_Million")]
    #[tabled(rename = "Population_Affected_Million")]
    pub population_affected_million: String,
    #[serde(rename = "Primary_Health_Issues")]
    #[tabled(rename = "Primary_Health_Issues")]
    pub primary_health_issues: String,
    #[serde(rename = "Cost_Per_Person_Rs")]
    #[tabled(rename = "Cost_Per_Person_Rs")]
    pub cost_per_person_rs: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct GamblingBehaviorRow {
    #[serde(rename = "Metric")]
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Before_IPL_Monthly")]
    #[tabled(rename = "Before_IPL_Monthly")]
    pub before_ipl_monthly: String,
    #[serde(rename = "During_IPL_Monthly")]
    #[tabled(rename = "During_IPL_Monthly")]
    pub during_ipl_monthly: String,
    #[serde(rename = "Percentage_Increase")]
    #[tabled(rename = "Percentage_Increase")]
    pub percentage_increase: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RegulatoryRow {
    #[serde(rename = "Parameter")]
    #[tabled(rename = "Parameter")]
    pub parameter: String,
    #[serde(rename = "IPL_2025")]
    #[tabled(rename = "IPL_2025")]
    pub ipl_2025: String,
    #[serde(rename = "EPL")]
    #[tabled(rename = "EPL")]
    pub epl: String,
    #[serde(rename = "NFL")]
    #[tabled(rename = "NFL")]
    pub nfl: String,
    #[serde(rename = "MLB")]
    #[tabled(rename = "MLB")]
    pub mlb: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct EmploymentRow {
    #[serde(rename = "Employment_Sector")]
    #[tabled(rename = "Employment_Sector")]
    pub employment_sector: String,
    #[serde(rename = "Jobs_Created")]
    #[tabled(rename = "Jobs_Created")]
    pub jobs_created: u32,
    #[serde(rename = "Duration_Months")]
    #[tabled(rename = "Duration_Months")]
    pub duration_months: u32,
    #[serde(rename = "Economic_Impact_Cr")]
    #[tabled(rename = "Economic_Impact_Cr")]
    pub economic_impact_cr: u32,
    #[serde(rename = "Total_Person_Months")]
    #[tabled(rename = "Total_Person_Months")]
    pub total_person_months: u32,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TaxRevenueRow {
    #[serde(rename = "Revenue_Stream")]
    #[tabled(rename = "Revenue_Stream")]
    pub revenue_stream: String,
    #[serde(rename = "Tax_Amount_Cr")]
    #[tabled(rename = "Tax_Amount_Cr")]
    pub tax_amount_cr: u32,
    #[serde(rename = "Tax_Type")]
    #[tabled(rename = "Tax_Type")]
    pub tax_type: String,
    #[serde(rename = "Base_Amount_Cr")]
    #[tabled(rename = "Base_Amount_Cr")]
    pub base_amount_cr: u32,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ScorecardRow {
    #[serde(rename = "Brand")]
    #[tabled(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Economic_Score_40pct")]
    #[tabled(rename = "Economic_Score_40pct")]
    pub economic_score: u8,
    #[serde(rename = "Social_Impact_30pct")]
    #[tabled(rename = "Social_Impact_30pct")]
    pub social_impact: u8,
    #[serde(rename = "Innovation_20pct")]
    #[tabled(rename = "Innovation_20pct")]
    pub innovation: u8,
    #[serde(rename = "Transparency_10pct")]
    #[tabled(rename = "Transparency_10pct")]
    pub transparency: u8,
    #[serde(rename = "Total_Score")]
    #[tabled(rename = "Total_Score")]
    pub total_score: u8,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct AeiRow {
    #[serde(rename = "Component")]
    #[tabled(rename = "Component")]
    pub component: String,
    #[serde(rename = "Weight_Percentage")]
    #[tabled(rename = "Weight_Percentage")]
    pub weight_percentage: u8,
    #[serde(rename = "IPL_Score_100")]
    #[tabled(rename = "IPL_Score_100")]
    pub ipl_score_100: u8,
    #[serde(rename = "Weighted_Score")]
    #[tabled(rename = "Weighted_Score")]
    pub weighted_score: f64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct FrameworkRow {
    #[serde(rename = "Strategy")]
    #[tabled(rename = "Strategy")]
    pub strategy: String,
    #[serde(rename = "Revenue_Impact")]
    #[tabled(rename = "Revenue_Impact")]
    pub revenue_impact: String,
    #[serde(rename = "Social_Impact")]
    #[tabled(rename = "Social_Impact")]
    pub social_impact: String,
    #[serde(rename = "Implementation_Timeline")]
    #[tabled(rename = "Implementation_Timeline")]
    pub implementation_timeline: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PolicyTierRow {
    #[serde(rename = "Tier")]
    #[tabled(rename = "Tier")]
    pub tier: String,
    #[serde(rename = "Product_Types")]
    #[tabled(rename = "Product_Types")]
    pub product_types: String,
    #[serde(rename = "Advertising_Restrictions")]
    #[tabled(rename = "Advertising_Restrictions")]
    pub advertising_restrictions: String,
    #[serde(rename = "Revenue_Share_Percentage")]
    #[tabled(rename = "Revenue_Share_Percentage")]
    pub revenue_share_percentage: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PlayerFrameworkRow {
    #[serde(rename = "Evaluation_Criteria")]
    #[tabled(rename = "Evaluation_Criteria")]
    pub evaluation_criteria: String,
    #[serde(rename = "Weight_Percentage")]
    #[tabled(rename = "Weight_Percentage")]
    pub weight_percentage: u8,
    #[serde(rename = "Scoring_Method")]
    #[tabled(rename = "Scoring_Method")]
    pub scoring_method: String,
}

/// Headline figures written to `summary.json` alongside the CSV exports.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub total_central_revenue_cr: f64,
    pub gaming_impact_min_million: f64,
    pub gaming_impact_max_million: f64,
    pub pan_masala_impact_min_million: f64,
    pub pan_masala_impact_max_million: f64,
    pub total_impact_min_million: f64,
    pub total_impact_max_million: f64,
    pub ethics_index_total: f64,
    pub tables_exported: usize,
}
