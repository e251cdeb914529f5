//! Economic health assessment
//!
//! Reduces a finished trajectory to qualitative ratings and a 0-20 score.
//!
//! # Example
//!
//! ```rust
//! use fiscal_simulator_core_rs::{assess, calculate_progression, InitialConditions, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     simulation_years: 10,
//!     random_events_enabled: false,
//!     ..Default::default()
//! };
//! let trajectory = calculate_progression(config.clone()).unwrap();
//! let assessment = assess(&trajectory, InitialConditions::from_config(&config)).unwrap();
//!
//! assert!(assessment.metrics.score <= 20);
//! assert!(assessment.to_string().contains("ECONOMIC HEALTH ASSESSMENT"));
//! ```

pub mod ratings;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::snapshot::YearlySnapshot;
use crate::orchestrator::{SimulationConfig, SimulationError};

pub use ratings::{DebtRating, GrowthRating, InterestBurdenRating, OverallRating, StabilityRating};

/// Starting point the trajectory is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Starting debt (trillions)
    pub debt: f64,
    /// Starting GDP (trillions)
    pub gdp: f64,
    /// Starting debt-to-GDP ratio (percent)
    pub debt_ratio: f64,
}

impl InitialConditions {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            debt: config.initial_debt,
            gdp: config.initial_gdp,
            debt_ratio: config.initial_debt_ratio(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAssessment {
    pub rating: DebtRating,
    pub description: String,
    /// Debt-to-GDP ratio change (percentage points)
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    pub rating: GrowthRating,
    pub description: String,
    pub average_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    pub rating: StabilityRating,
    pub description: String,
    pub recession_years: usize,
    pub boom_years: usize,
    pub total_years: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestBurdenAssessment {
    pub rating: InterestBurdenRating,
    pub description: String,
    /// Mean of interest payment / GDP, as a percentage
    pub average_interest_to_gdp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub rating: OverallRating,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetrics {
    pub real_debt_change_percent: f64,
    pub gdp_change_percent: f64,
    pub debt_ratio_change: f64,
    /// Sum of the four sub-scores, 0-20
    pub score: u32,
}

/// Sub-scores, 0-5 each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub debt: u32,
    pub growth: u32,
    pub interest_burden: u32,
    pub stability: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.debt + self.growth + self.interest_burden + self.stability
    }
}

/// Complete qualitative verdict on a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub debt: DebtAssessment,
    pub growth: GrowthAssessment,
    pub stability: StabilityAssessment,
    pub interest_burden: InterestBurdenAssessment,
    pub overall: OverallAssessment,
    pub metrics: AssessmentMetrics,
    pub score_breakdown: ScoreBreakdown,
}

/// Assess a finished trajectory against its starting conditions
///
/// # Errors
///
/// `EmptyTrajectory` when `trajectory` has no years.
pub fn assess(
    trajectory: &[YearlySnapshot],
    initial: InitialConditions,
) -> Result<HealthAssessment, SimulationError> {
    let last = trajectory.last().ok_or(SimulationError::EmptyTrajectory)?;
    let total_years = trajectory.len();
    let years = total_years as f64;

    let real_debt_change_percent = percent_change(initial.debt, last.real_debt);
    let gdp_change_percent = percent_change(initial.gdp, last.gdp);
    let debt_ratio_change = last.debt_to_gdp_ratio - initial.debt_ratio;

    let recession_years = trajectory.iter().filter(|s| s.had_downturn()).count();
    let boom_years = trajectory.iter().filter(|s| s.had_expansion()).count();

    let average_growth = trajectory.iter().map(|s| s.gdp_growth_rate).sum::<f64>() / years;
    let average_interest_to_gdp =
        trajectory.iter().map(|s| s.interest_to_gdp()).sum::<f64>() / years * 100.0;

    let score_breakdown = ScoreBreakdown {
        debt: ratings::debt_score(debt_ratio_change),
        growth: ratings::growth_score(average_growth),
        interest_burden: ratings::interest_burden_score(average_interest_to_gdp),
        stability: ratings::stability_score(recession_years, total_years),
    };
    let score = score_breakdown.total();

    let debt = DebtRating::from_ratio_change(debt_ratio_change);
    let growth = GrowthRating::from_average_growth(average_growth);
    let stability = StabilityRating::from_counts(recession_years, boom_years, total_years);
    let interest_burden = InterestBurdenRating::from_interest_to_gdp(average_interest_to_gdp);
    let overall = OverallRating::from_score(score);

    Ok(HealthAssessment {
        debt: DebtAssessment {
            rating: debt,
            description: debt.description().to_string(),
            change: debt_ratio_change,
        },
        growth: GrowthAssessment {
            rating: growth,
            description: growth.description().to_string(),
            average_growth,
        },
        stability: StabilityAssessment {
            rating: stability,
            description: stability.description().to_string(),
            recession_years,
            boom_years,
            total_years,
        },
        interest_burden: InterestBurdenAssessment {
            rating: interest_burden,
            description: interest_burden.description().to_string(),
            average_interest_to_gdp,
        },
        overall: OverallAssessment {
            rating: overall,
            description: overall.description().to_string(),
        },
        metrics: AssessmentMetrics {
            real_debt_change_percent,
            gdp_change_percent,
            debt_ratio_change,
            score,
        },
        score_breakdown,
    })
}

/// Percentage change from `from` to `to`; zero when starting from nothing
fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to / from - 1.0) * 100.0
}

impl fmt::Display for HealthAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ECONOMIC HEALTH ASSESSMENT")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Debt Health: {}: {}", self.debt.rating, self.debt.description)?;
        writeln!(f, "Growth: {}: {}", self.growth.rating, self.growth.description)?;
        writeln!(f, "Stability: {}: {}", self.stability.rating, self.stability.description)?;
        writeln!(
            f,
            "Interest Burden: {}: {}",
            self.interest_burden.rating, self.interest_burden.description
        )?;
        writeln!(f)?;
        write!(
            f,
            "Overall Assessment: {}: {}",
            self.overall.rating, self.overall.description
        )
    }
}
