//! Static registry of indicators, comparison countries, and SDG rows
//!
//! Uses `&'static str` fields so the tables can be initialized statically;
//! lookups hand out `&'static` rows the rest of the application can hold
//! on to freely.

/// Broad grouping of indicators, used for the browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// GDP, inflation, trade, sector shares
    Economic,
    /// Population, health, education, poverty
    Social,
    /// Electricity, internet, mobile, roads, energy
    Infrastructure,
    /// Emissions, forest cover, water access
    Environment,
}

impl Category {
    /// Returns a human-readable display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Economic => "Economic",
            Category::Social => "Social",
            Category::Infrastructure => "Infrastructure & Technology",
            Category::Environment => "Governance & Environment",
        }
    }
}

/// One entry of the indicator registry.
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    /// Short stable key used in the UI and export file names
    pub key: &'static str,
    /// World Bank indicator code
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
    /// Unit hint for formatting (e.g. "US$", "%", "years")
    pub unit: &'static str,
    /// Category for grouping in the browse view
    pub category: Category,
}

/// The fixed registry of indicators the dashboard knows about.
static INDICATORS: &[Indicator] = &[
    // Economic
    Indicator { key: "gdp", code: "NY.GDP.MKTP.CD", name: "GDP (current US$)", unit: "US$", category: Category::Economic },
    Indicator { key: "gdp_growth", code: "NY.GDP.MKTP.KD.ZG", name: "GDP growth (annual %)", unit: "%", category: Category::Economic },
    Indicator { key: "gdp_per_capita", code: "NY.GDP.PCAP.CD", name: "GDP per capita (current US$)", unit: "US$", category: Category::Economic },
    Indicator { key: "inflation", code: "FP.CPI.TOTL.ZG", name: "Inflation, consumer prices (annual %)", unit: "%", category: Category::Economic },
    Indicator { key: "unemployment", code: "SL.UEM.TOTL.ZS", name: "Unemployment (% of labor force)", unit: "%", category: Category::Economic },
    Indicator { key: "fdi", code: "BX.KLT.DINV.CD.WD", name: "Foreign direct investment, net inflows", unit: "US$", category: Category::Economic },
    Indicator { key: "trade", code: "NE.TRD.GNFS.ZS", name: "Trade (% of GDP)", unit: "%", category: Category::Economic },
    Indicator { key: "agriculture_gdp", code: "NV.AGR.TOTL.ZS", name: "Agriculture, value added (% of GDP)", unit: "%", category: Category::Economic },
    Indicator { key: "industry_gdp", code: "NV.IND.TOTL.ZS", name: "Industry, value added (% of GDP)", unit: "%", category: Category::Economic },
    Indicator { key: "services_gdp", code: "NV.SRV.TOTL.ZS", name: "Services, value added (% of GDP)", unit: "%", category: Category::Economic },
    // Social
    Indicator { key: "population", code: "SP.POP.TOTL", name: "Population, total", unit: "", category: Category::Social },
    Indicator { key: "life_expectancy", code: "SP.DYN.LE00.IN", name: "Life expectancy at birth", unit: "years", category: Category::Social },
    Indicator { key: "infant_mortality", code: "SP.DYN.IMRT.IN", name: "Infant mortality rate", unit: "per 1,000", category: Category::Social },
    Indicator { key: "literacy", code: "SE.ADT.LITR.ZS", name: "Literacy rate, adult total", unit: "%", category: Category::Social },
    Indicator { key: "school_enrollment_primary", code: "SE.PRM.NENR", name: "School enrollment, primary", unit: "%", category: Category::Social },
    Indicator { key: "school_enrollment_secondary", code: "SE.SEC.NENR", name: "School enrollment, secondary", unit: "%", category: Category::Social },
    Indicator { key: "poverty_headcount", code: "SI.POV.DDAY", name: "Poverty headcount at $2.15 a day", unit: "%", category: Category::Social },
    Indicator { key: "gini_index", code: "SI.POV.GINI", name: "Gini index", unit: "", category: Category::Social },
    // Infrastructure & Technology
    Indicator { key: "electricity_access", code: "EG.ELC.ACCS.ZS", name: "Access to electricity (% of population)", unit: "%", category: Category::Infrastructure },
    Indicator { key: "internet_users", code: "IT.NET.USER.ZS", name: "Individuals using the Internet", unit: "%", category: Category::Infrastructure },
    Indicator { key: "mobile_subscriptions", code: "IT.CEL.SETS.P2", name: "Mobile cellular subscriptions", unit: "per 100 people", category: Category::Infrastructure },
    Indicator { key: "roads_paved", code: "IS.ROD.PVED.ZS", name: "Roads, paved (% of total roads)", unit: "%", category: Category::Infrastructure },
    Indicator { key: "renewable_energy", code: "EG.FEC.RNEW.ZS", name: "Renewable energy consumption", unit: "%", category: Category::Infrastructure },
    // Governance & Environment
    Indicator { key: "co2_emissions", code: "EN.ATM.CO2E.PC", name: "CO2 emissions (metric tons per capita)", unit: "t/capita", category: Category::Environment },
    Indicator { key: "forest_area", code: "AG.LND.FRST.ZS", name: "Forest area (% of land area)", unit: "%", category: Category::Environment },
    Indicator { key: "water_access", code: "SH.H2O.SMDW.ZS", name: "Safely managed drinking water access", unit: "%", category: Category::Environment },
];

/// Returns the full indicator registry.
pub fn all_indicators() -> &'static [Indicator] {
    INDICATORS
}

/// Looks up an indicator by its short key.
pub fn indicator_by_key(key: &str) -> Option<&'static Indicator> {
    INDICATORS.iter().find(|i| i.key == key)
}

/// Looks up an indicator by its World Bank code.
pub fn indicator_by_code(code: &str) -> Option<&'static Indicator> {
    INDICATORS.iter().find(|i| i.code == code)
}

/// A country in the peer comparison set.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    /// ISO3 code
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Nigeria plus the peer African nations used for comparison charts.
static COMPARISON_COUNTRIES: &[Country] = &[
    Country { code: "NGA", name: "Nigeria" },
    Country { code: "ZAF", name: "South Africa" },
    Country { code: "EGY", name: "Egypt" },
    Country { code: "KEN", name: "Kenya" },
    Country { code: "GHA", name: "Ghana" },
    Country { code: "ETH", name: "Ethiopia" },
];

/// Returns the comparison country set, home country first.
pub fn comparison_countries() -> &'static [Country] {
    COMPARISON_COUNTRIES
}

/// Looks up a display name for an ISO3 code from the comparison set.
pub fn country_name(code: &str) -> Option<&'static str> {
    COMPARISON_COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.name)
}

/// One tracked Sustainable Development Goal indicator.
#[derive(Debug, Clone, Copy)]
pub struct SdgIndicator {
    /// Goal label, e.g. "SDG 1: No Poverty"
    pub goal: &'static str,
    /// World Bank indicator code used to track the goal
    pub code: &'static str,
    /// What the indicator measures
    pub description: &'static str,
    /// Target text shown next to the latest value
    pub target: &'static str,
}

/// SDG rows tracked on the SDG progress page.
static SDG_INDICATORS: &[SdgIndicator] = &[
    SdgIndicator {
        goal: "SDG 1: No Poverty",
        code: "SI.POV.DDAY",
        description: "Poverty headcount ratio at $2.15 a day (% of population)",
        target: "Eradicate extreme poverty by 2030",
    },
    SdgIndicator {
        goal: "SDG 3: Good Health",
        code: "SH.STA.MMRT",
        description: "Maternal mortality ratio (per 100,000 live births)",
        target: "Below 70 per 100,000 by 2030",
    },
    SdgIndicator {
        goal: "SDG 3: Good Health",
        code: "SH.DYN.MORT",
        description: "Under-5 mortality rate (per 1,000 live births)",
        target: "Below 25 per 1,000 by 2030",
    },
    SdgIndicator {
        goal: "SDG 4: Quality Education",
        code: "SE.PRM.CMPT.ZS",
        description: "Primary completion rate (% of relevant age group)",
        target: "Universal primary completion by 2030",
    },
    SdgIndicator {
        goal: "SDG 5: Gender Equality",
        code: "SL.TLF.CACT.FE.ZS",
        description: "Female labor force participation (% of female population)",
        target: "Full and productive employment for women",
    },
    SdgIndicator {
        goal: "SDG 7: Affordable Energy",
        code: "EG.ELC.ACCS.ZS",
        description: "Access to electricity (% of population)",
        target: "Universal access to electricity by 2030",
    },
];

/// Returns the tracked SDG rows.
pub fn sdg_indicators() -> &'static [SdgIndicator] {
    SDG_INDICATORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key_and_code() {
        let gdp = indicator_by_key("gdp").unwrap();
        assert_eq!(gdp.code, "NY.GDP.MKTP.CD");
        assert_eq!(indicator_by_code("SP.POP.TOTL").unwrap().key, "population");
        assert!(indicator_by_key("not_a_key").is_none());
        assert!(indicator_by_code("NOT.A.CODE").is_none());
    }

    #[test]
    fn test_registry_keys_are_unique() {
        let mut keys: Vec<&str> = all_indicators().iter().map(|i| i.key).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before, "duplicate indicator key in registry");
    }

    #[test]
    fn test_registry_codes_are_unique() {
        let mut codes: Vec<&str> = all_indicators().iter().map(|i| i.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before, "duplicate indicator code in registry");
    }

    #[test]
    fn test_every_category_has_indicators() {
        for category in [
            Category::Economic,
            Category::Social,
            Category::Infrastructure,
            Category::Environment,
        ] {
            assert!(
                all_indicators().iter().any(|i| i.category == category),
                "no indicators in category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_comparison_countries_start_with_home_country() {
        let countries = comparison_countries();
        assert_eq!(countries[0].code, "NGA");
        assert_eq!(countries.len(), 6);
        assert_eq!(country_name("KEN"), Some("Kenya"));
        assert!(country_name("XXX").is_none());
    }

    #[test]
    fn test_sdg_rows_reference_goals_and_codes() {
        for row in sdg_indicators() {
            assert!(row.goal.starts_with("SDG"));
            assert!(!row.code.is_empty());
            assert!(!row.target.is_empty());
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Economic.label(), "Economic");
        assert_eq!(
            Category::Infrastructure.label(),
            "Infrastructure & Technology"
        );
    }
}
