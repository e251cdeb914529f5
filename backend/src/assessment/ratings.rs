//! Ratings and sub-scores
//!
//! Every threshold table lives here. Each rating is picked by the first
//! matching band, checked from best to worst.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Debt health, from the debt-to-GDP ratio change (percentage points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtRating {
    Excellent,
    Good,
    Fair,
    Concerning,
    Critical,
}

impl DebtRating {
    pub fn from_ratio_change(change: f64) -> Self {
        if change < -10.0 {
            DebtRating::Excellent
        } else if change < 0.0 {
            DebtRating::Good
        } else if change < 10.0 {
            DebtRating::Fair
        } else if change < 25.0 {
            DebtRating::Concerning
        } else {
            DebtRating::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebtRating::Excellent => "Excellent",
            DebtRating::Good => "Good",
            DebtRating::Fair => "Fair",
            DebtRating::Concerning => "Concerning",
            DebtRating::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DebtRating::Excellent => "The debt-to-GDP ratio has decreased significantly, indicating a much stronger fiscal position.",
            DebtRating::Good => "The debt-to-GDP ratio has decreased, showing improving fiscal sustainability.",
            DebtRating::Fair => "The debt-to-GDP ratio has increased modestly, which is manageable but warrants attention.",
            DebtRating::Concerning => "The debt-to-GDP ratio has increased substantially, raising fiscal sustainability concerns.",
            DebtRating::Critical => "The debt-to-GDP ratio has increased dramatically, posing serious risks to fiscal sustainability.",
        }
    }
}

/// Growth health, from the mean GDP growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRating {
    Excellent,
    Good,
    Fair,
    Weak,
    Poor,
}

impl GrowthRating {
    pub fn from_average_growth(growth: f64) -> Self {
        if growth > 0.03 {
            GrowthRating::Excellent
        } else if growth > 0.02 {
            GrowthRating::Good
        } else if growth > 0.01 {
            GrowthRating::Fair
        } else if growth > 0.0 {
            GrowthRating::Weak
        } else {
            GrowthRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthRating::Excellent => "Excellent",
            GrowthRating::Good => "Good",
            GrowthRating::Fair => "Fair",
            GrowthRating::Weak => "Weak",
            GrowthRating::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GrowthRating::Excellent => "The economy has experienced strong, sustained growth.",
            GrowthRating::Good => "The economy has grown at a healthy rate.",
            GrowthRating::Fair => "The economy has grown modestly.",
            GrowthRating::Weak => "The economy has experienced very low growth.",
            GrowthRating::Poor => "The economy has contracted on average.",
        }
    }
}

/// Stability, from the share of years with a recession or depression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityRating {
    Excellent,
    Good,
    Fair,
    Concerning,
    Poor,
}

impl StabilityRating {
    pub fn from_counts(recession_years: usize, boom_years: usize, total_years: usize) -> Self {
        let within = |share| at_most_share(recession_years, total_years, share);
        if recession_years == 0 && boom_years > 0 {
            StabilityRating::Excellent
        } else if within(0.1) {
            StabilityRating::Good
        } else if within(0.2) {
            StabilityRating::Fair
        } else if within(0.3) {
            StabilityRating::Concerning
        } else {
            StabilityRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StabilityRating::Excellent => "Excellent",
            StabilityRating::Good => "Good",
            StabilityRating::Fair => "Fair",
            StabilityRating::Concerning => "Concerning",
            StabilityRating::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StabilityRating::Excellent => "The economy avoided recessions while experiencing growth periods.",
            StabilityRating::Good => "The economy was relatively stable with few downturns.",
            StabilityRating::Fair => "The economy experienced some instability but maintained overall function.",
            StabilityRating::Concerning => "The economy faced frequent instability.",
            StabilityRating::Poor => "The economy was highly unstable with frequent crises.",
        }
    }
}

/// Interest burden, from mean interest payments as a percentage of GDP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestBurdenRating {
    Excellent,
    Good,
    Fair,
    Concerning,
    Critical,
}

impl InterestBurdenRating {
    pub fn from_interest_to_gdp(percent: f64) -> Self {
        if percent < 1.0 {
            InterestBurdenRating::Excellent
        } else if percent < 2.0 {
            InterestBurdenRating::Good
        } else if percent < 3.0 {
            InterestBurdenRating::Fair
        } else if percent < 4.0 {
            InterestBurdenRating::Concerning
        } else {
            InterestBurdenRating::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterestBurdenRating::Excellent => "Excellent",
            InterestBurdenRating::Good => "Good",
            InterestBurdenRating::Fair => "Fair",
            InterestBurdenRating::Concerning => "Concerning",
            InterestBurdenRating::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InterestBurdenRating::Excellent => "Interest payments consumed a negligible share of economic output.",
            InterestBurdenRating::Good => "Interest payments remained a modest share of economic output.",
            InterestBurdenRating::Fair => "Interest payments took a noticeable share of economic output.",
            InterestBurdenRating::Concerning => "Interest payments absorbed a heavy share of economic output.",
            InterestBurdenRating::Critical => "Interest payments crowded out a large share of economic output.",
        }
    }
}

/// Overall verdict, from the summed sub-scores (0-20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallRating {
    MuchBetter,
    Better,
    Stable,
    Worse,
    MuchWorse,
}

impl OverallRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            16.. => OverallRating::MuchBetter,
            12..=15 => OverallRating::Better,
            8..=11 => OverallRating::Stable,
            4..=7 => OverallRating::Worse,
            _ => OverallRating::MuchWorse,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverallRating::MuchBetter => "MUCH BETTER",
            OverallRating::Better => "BETTER",
            OverallRating::Stable => "STABLE",
            OverallRating::Worse => "WORSE",
            OverallRating::MuchWorse => "MUCH WORSE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OverallRating::MuchBetter => "The economy is in a significantly stronger position than at the start of the simulation.",
            OverallRating::Better => "The economy has improved compared to the starting conditions.",
            OverallRating::Stable => "The economy has maintained roughly similar health to the starting conditions.",
            OverallRating::Worse => "The economy has deteriorated compared to the starting conditions.",
            OverallRating::MuchWorse => "The economy is in a significantly weaker position than at the start of the simulation.",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($rating:ty),*) => {
        $(
            impl fmt::Display for $rating {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(DebtRating, GrowthRating, StabilityRating, InterestBurdenRating, OverallRating);

// ============================================================================
// Sub-scores (0-5 each)
// ============================================================================

pub fn debt_score(ratio_change: f64) -> u32 {
    if ratio_change < -15.0 {
        5
    } else if ratio_change < -5.0 {
        4
    } else if ratio_change < 5.0 {
        3
    } else if ratio_change < 15.0 {
        2
    } else if ratio_change < 30.0 {
        1
    } else {
        0
    }
}

pub fn growth_score(average_growth: f64) -> u32 {
    if average_growth > 0.035 {
        5
    } else if average_growth > 0.025 {
        4
    } else if average_growth > 0.015 {
        3
    } else if average_growth > 0.005 {
        2
    } else if average_growth > 0.0 {
        1
    } else {
        0
    }
}

pub fn interest_burden_score(interest_to_gdp: f64) -> u32 {
    if interest_to_gdp < 1.0 {
        5
    } else if interest_to_gdp < 2.0 {
        4
    } else if interest_to_gdp < 3.0 {
        3
    } else if interest_to_gdp < 4.0 {
        2
    } else if interest_to_gdp < 5.0 {
        1
    } else {
        0
    }
}

pub fn stability_score(recession_years: usize, total_years: usize) -> u32 {
    let within = |share| at_most_share(recession_years, total_years, share);
    if recession_years == 0 {
        5
    } else if within(0.1) {
        4
    } else if within(0.2) {
        3
    } else if within(0.3) {
        2
    } else if within(0.4) {
        1
    } else {
        0
    }
}

/// `recession_years <= total_years * share`
fn at_most_share(recession_years: usize, total_years: usize, share: f64) -> bool {
    recession_years as f64 <= total_years as f64 * share
}
