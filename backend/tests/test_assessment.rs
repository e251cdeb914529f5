//! Integration tests for the economic health assessment

use fiscal_simulator_core_rs::assessment::{DebtRating, GrowthRating, InterestBurdenRating, StabilityRating};
use fiscal_simulator_core_rs::{
    assess, calculate_progression, EconomicEvent, EventImpact, EventKind, InitialConditions,
    OverallRating, SimulationConfig, SimulationError, YearlySnapshot,
};

fn year(index: usize, debt: f64, gdp: f64, growth: f64, interest: f64) -> YearlySnapshot {
    YearlySnapshot {
        year_index: index,
        year: 2025 + index as i32,
        nominal_debt: debt,
        real_debt: debt,
        interest_payment: interest,
        principal_change: 0.0,
        gdp,
        debt_to_gdp_ratio: 100.0 * debt / gdp,
        inflation_adjustment: 0.0,
        inflation_rate: 0.0,
        gdp_growth_rate: growth,
        interest_rate: 0.03,
        population: 330.0,
        population_growth_rate: 0.0,
        debt_per_capita: debt * 1e12 / 330e6,
        events: Vec::new(),
        event_deficit_impact: 0.0,
    }
}

fn with_event(mut snapshot: YearlySnapshot, kind: EventKind) -> YearlySnapshot {
    snapshot.events.push(EconomicEvent {
        kind,
        name: kind.label().to_string(),
        description: String::new(),
        impact: EventImpact::default(),
        duration: 1,
        aftermath_duration: 0,
        aftermath_multiplier: 0.0,
    });
    snapshot
}

fn start() -> InitialConditions {
    InitialConditions {
        debt: 20.0,
        gdp: 100.0,
        debt_ratio: 20.0,
    }
}

#[test]
fn test_ratio_drop_of_exactly_ten_points_is_good() {
    let trajectory = vec![year(0, 15.0, 100.0, 0.02, 0.5), year(1, 10.0, 100.0, 0.02, 0.5)];
    let assessment = assess(&trajectory, start()).unwrap();

    assert_eq!(assessment.debt.change, -10.0);
    assert_eq!(assessment.debt.rating, DebtRating::Good);
    assert_eq!(
        assessment.debt.description,
        "The debt-to-GDP ratio has decreased, showing improving fiscal sustainability."
    );
}

#[test]
fn test_metrics_against_initial_conditions() {
    let trajectory = vec![year(0, 22.0, 105.0, 0.05, 0.6), year(1, 24.0, 110.0, 0.01, 0.66)];
    let assessment = assess(&trajectory, start()).unwrap();

    assert!((assessment.metrics.real_debt_change_percent - 20.0).abs() < 1e-9);
    assert!((assessment.metrics.gdp_change_percent - 10.0).abs() < 1e-9);
    assert!((assessment.growth.average_growth - 0.03).abs() < 1e-12);
    // (0.6/105 + 0.66/110) / 2 * 100
    let expected_interest = (0.6 / 105.0 + 0.66 / 110.0) / 2.0 * 100.0;
    assert!((assessment.interest_burden.average_interest_to_gdp - expected_interest).abs() < 1e-12);
    assert_eq!(assessment.interest_burden.rating, InterestBurdenRating::Excellent);
}

#[test]
fn test_perfect_run_scores_twenty() {
    // Ratio falls 20 points, 4% growth, negligible interest, no downturns
    let trajectory: Vec<_> = (0..10)
        .map(|i| year(i, 0.0, 100.0, 0.04, 0.0))
        .collect();
    let assessment = assess(&trajectory, start()).unwrap();

    assert_eq!(assessment.metrics.score, 20);
    assert_eq!(assessment.overall.rating, OverallRating::MuchBetter);
    assert_eq!(assessment.growth.rating, GrowthRating::Excellent);
    // No booms, so stability stops at Good
    assert_eq!(assessment.stability.rating, StabilityRating::Good);
}

#[test]
fn test_crisis_run_scores_zero() {
    // Ratio up 80 points, contraction, heavy interest, downturn every year
    let trajectory: Vec<_> = (0..10)
        .map(|i| with_event(year(i, 100.0, 100.0, -0.02, 6.0), EventKind::Depression))
        .collect();
    let assessment = assess(&trajectory, start()).unwrap();

    assert_eq!(assessment.metrics.score, 0);
    assert_eq!(assessment.overall.rating, OverallRating::MuchWorse);
    assert_eq!(assessment.debt.rating, DebtRating::Critical);
    assert_eq!(assessment.growth.rating, GrowthRating::Poor);
    assert_eq!(assessment.stability.rating, StabilityRating::Poor);
    assert_eq!(assessment.interest_burden.rating, InterestBurdenRating::Critical);
}

#[test]
fn test_boom_without_recession_is_excellent_stability() {
    let mut trajectory: Vec<_> = (0..5).map(|i| year(i, 20.0, 100.0, 0.02, 0.5)).collect();
    trajectory[3] = with_event(trajectory[3].clone(), EventKind::TechRevolution);

    let assessment = assess(&trajectory, start()).unwrap();
    assert_eq!(assessment.stability.rating, StabilityRating::Excellent);
    assert_eq!(assessment.stability.boom_years, 1);
    assert_eq!(assessment.score_breakdown.stability, 5);
}

#[test]
fn test_years_count_once_regardless_of_event_count() {
    let mut trajectory: Vec<_> = (0..10).map(|i| year(i, 20.0, 100.0, 0.02, 0.5)).collect();
    let busy = with_event(trajectory[0].clone(), EventKind::Recession);
    trajectory[0] = with_event(busy, EventKind::Recession);

    let assessment = assess(&trajectory, start()).unwrap();
    assert_eq!(assessment.stability.recession_years, 1);
    assert_eq!(assessment.stability.rating, StabilityRating::Good);
}

#[test]
fn test_empty_trajectory_is_an_error() {
    assert_eq!(assess(&[], start()).unwrap_err(), SimulationError::EmptyTrajectory);
}

#[test]
fn test_initial_conditions_use_percent_ratio() {
    let config = SimulationConfig {
        initial_debt: 30.0,
        initial_gdp: 120.0,
        ..Default::default()
    };
    let initial = InitialConditions::from_config(&config);

    assert_eq!(initial.debt_ratio, 25.0);
}

#[test]
fn test_real_run_assessment_is_consistent() {
    let config = SimulationConfig {
        simulation_years: 100,
        random_seed: Some(12345),
        ..Default::default()
    };
    let trajectory = calculate_progression(config.clone()).unwrap();
    let assessment = assess(&trajectory, InitialConditions::from_config(&config)).unwrap();

    assert!(assessment.metrics.score <= 20);
    assert_eq!(assessment.metrics.score, assessment.score_breakdown.total());
    assert_eq!(assessment.stability.total_years, 100);
    assert_eq!(
        assessment.stability.recession_years,
        trajectory.iter().filter(|s| s.had_downturn()).count()
    );

    let report = assessment.to_string();
    assert!(report.contains(&format!("Overall Assessment: {}", assessment.overall.rating)));
}
