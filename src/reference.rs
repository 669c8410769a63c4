// Embedded reference datasets covering figures that have no source CSV:
// researched contract estimates, industry CAGR assumptions, population-impact
// assumptions, and celebrity endorsement records. Table builders read these
// alongside the loaded inputs.

/// Growth assumptions for one advertiser: current revenue in crores plus a
/// min/max CAGR range in percent.
#[derive(Debug, Clone, Copy)]
pub struct CagrAssumption {
    pub company: &'static str,
    pub current_cr: f64,
    pub cagr_min: f64,
    pub cagr_max: f64,
}

/// User base in millions and the assumed min/max share of users negatively
/// affected, in percent.
#[derive(Debug, Clone, Copy)]
pub struct PopulationAssumption {
    pub brand: &'static str,
    pub users_million: f64,
    pub impact_rate: [f64; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct CelebrityRecord {
    pub celebrity: &'static str,
    pub brands_2025: &'static [&'static str],
    pub risk: &'static str,
    pub pattern: &'static str,
}

/// Estimated amounts (crores) for central contracts disclosed without a
/// figure. All are folded into the revenue table as "Official Partner" rows.
pub static ADDITIONAL_CONTRACTS: &[(&str, f64)] = &[
    ("CEAT", 30.0),
    ("Wonder Cement", 25.0),
    ("Aramco", 35.0),
    ("Other Partners", 60.0),
];

pub static CAGR_ASSUMPTIONS: &[CagrAssumption] = &[
    CagrAssumption {
        company: "Dream11",
        current_cr: 6384.0,
        cagr_min: 15.0,
        cagr_max: 20.0,
    },
    CagrAssumption {
        company: "My11Circle",
        current_cr: 2250.0,
        cagr_min: 12.0,
        cagr_max: 18.0,
    },
    CagrAssumption {
        company: "Vimal (DS Group)",
        current_cr: 5267.0,
        cagr_min: 8.0,
        cagr_max: 12.0,
    },
    CagrAssumption {
        company: "PokerBaazi",
        current_cr: 415.0,
        cagr_min: 20.0,
        cagr_max: 25.0,
    },
    CagrAssumption {
        company: "Kamla Pasand",
        current_cr: 800.0,
        cagr_min: 6.0,
        cagr_max: 10.0,
    },
];

pub static POPULATION_IMPACT: &[PopulationAssumption] = &[
    PopulationAssumption {
        brand: "Dream11",
        users_million: 200.0,
        impact_rate: [15.0, 20.0],
    },
    PopulationAssumption {
        brand: "My11Circle",
        users_million: 50.0,
        impact_rate: [18.0, 22.0],
    },
    PopulationAssumption {
        brand: "PokerBaazi",
        users_million: 8.0,
        impact_rate: [25.0, 30.0],
    },
    PopulationAssumption {
        brand: "Vimal Pan Masala",
        users_million: 80.0,
        impact_rate: [60.0, 70.0],
    },
    PopulationAssumption {
        brand: "Kamla Pasand",
        users_million: 40.0,
        impact_rate: [60.0, 70.0],
    },
    PopulationAssumption {
        brand: "Rajshree",
        users_million: 25.0,
        impact_rate: [60.0, 70.0],
    },
];

pub static CELEBRITY_ENDORSEMENTS: &[CelebrityRecord] = &[
    CelebrityRecord {
        celebrity: "Shah Rukh Khan",
        brands_2025: &["Vimal Pan Masala"],
        risk: "Very High",
        pattern: "Continued",
    },
    CelebrityRecord {
        celebrity: "Salman Khan",
        brands_2025: &["Rajshree Pan Masala"],
        risk: "Very High",
        pattern: "Continued",
    },
    CelebrityRecord {
        celebrity: "Ajay Devgn",
        brands_2025: &["Vimal Pan Masala"],
        risk: "Very High",
        pattern: "Continued",
    },
    CelebrityRecord {
        celebrity: "Rohit Sharma",
        brands_2025: &["Dream11"],
        risk: "High",
        pattern: "3-year partnership",
    },
    CelebrityRecord {
        celebrity: "Sourav Ganguly",
        brands_2025: &["My11Circle"],
        risk: "High",
        pattern: "New in 2024",
    },
];
