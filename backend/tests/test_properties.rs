//! Property tests over random configurations and seeds

use fiscal_simulator_core_rs::models::state::{
    GDP_GROWTH_FLOOR, INFLATION_FLOOR, INTEREST_RATE_FLOOR, POPULATION_GROWTH_FLOOR,
};
use fiscal_simulator_core_rs::{simulate, EventKind, SimulationConfig};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (
        any::<u64>(),
        1usize..60,
        0.0f64..50.0,
        -0.05f64..0.10,
        -0.05f64..0.08,
        prop::collection::vec(-3.0f64..3.0, 0..60),
        1.0f64..50.0,
        -0.10f64..0.06,
        -0.04f64..0.03,
    )
        .prop_map(
            |(seed, years, debt, interest, inflation, deficits, gdp, growth, population)| {
                SimulationConfig {
                    initial_debt: debt,
                    simulation_years: years,
                    average_interest_rate: interest,
                    inflation_rate: inflation,
                    annual_deficits: deficits,
                    initial_gdp: gdp,
                    base_gdp_growth_rate: growth,
                    random_events_enabled: true,
                    random_seed: Some(seed),
                    base_population_growth_rate: Some(population),
                    start_year: Some(2025),
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rate_floors_hold(config in arb_config()) {
        let outcome = simulate(config).unwrap();
        for year in &outcome.trajectory {
            prop_assert!(year.inflation_rate >= INFLATION_FLOOR);
            prop_assert!(year.gdp_growth_rate >= GDP_GROWTH_FLOOR);
            prop_assert!(year.interest_rate >= INTEREST_RATE_FLOOR);
            prop_assert!(year.population_growth_rate >= POPULATION_GROWTH_FLOOR);
        }
    }

    #[test]
    fn prop_debt_ratio_never_negative(config in arb_config()) {
        let outcome = simulate(config).unwrap();
        for year in &outcome.trajectory {
            prop_assert!(year.nominal_debt >= 0.0);
            prop_assert!(year.debt_to_gdp_ratio >= 0.0);
            prop_assert!(year.gdp > 0.0);
            prop_assert!(year.population > 0.0);
        }
    }

    #[test]
    fn prop_score_within_bounds(config in arb_config()) {
        let outcome = simulate(config).unwrap();
        prop_assert!(outcome.assessment.metrics.score <= 20);
        prop_assert_eq!(
            outcome.assessment.metrics.score,
            outcome.assessment.score_breakdown.total()
        );
    }

    #[test]
    fn prop_horizon_is_exact_and_ordered(config in arb_config()) {
        let years = config.simulation_years;
        let outcome = simulate(config).unwrap();

        prop_assert_eq!(outcome.trajectory.len(), years);
        for (i, year) in outcome.trajectory.iter().enumerate() {
            prop_assert_eq!(year.year_index, i);
            prop_assert_eq!(year.year, 2025 + i as i32);
        }
    }

    #[test]
    fn prop_same_seed_same_outcome(config in arb_config()) {
        let first = simulate(config.clone()).unwrap();
        let second = simulate(config).unwrap();

        prop_assert_eq!(first.fingerprint, second.fingerprint);
        prop_assert_eq!(first.assessment, second.assessment);
    }

    #[test]
    fn prop_mutually_exclusive_events(config in arb_config()) {
        let outcome = simulate(config).unwrap();
        for year in &outcome.trajectory {
            prop_assert!(!(year.has_event(EventKind::Recession) && year.has_event(EventKind::Depression)));
            prop_assert!(!(year.has_event(EventKind::WarStart) && year.has_event(EventKind::WarEnd)));
        }
        // A downturn may begin during a boom, but a boom never begins during a downturn
        for started in outcome.event_log.events_of_type("EventStarted") {
            if started.kind() == Some(EventKind::EconomicBoom) {
                let year = &outcome.trajectory[started.year()];
                prop_assert!(!year.had_downturn());
            }
        }
    }
}
