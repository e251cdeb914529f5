//! Integration tests for the year-by-year progression engine

use fiscal_simulator_core_rs::{
    calculate_progression, EventKind, EventSchedule, Orchestrator, ScenarioEvent, ScheduledEvent,
    SimulationConfig, SimulationError,
};

const EPS: f64 = 1e-9;

fn quiet(years: usize) -> SimulationConfig {
    SimulationConfig {
        initial_debt: 10.0,
        simulation_years: years,
        average_interest_rate: 0.03,
        inflation_rate: 0.0,
        annual_deficits: vec![0.0; years],
        initial_gdp: 100.0,
        base_gdp_growth_rate: 0.02,
        random_events_enabled: false,
        base_population_growth_rate: Some(0.0),
        start_year: Some(2025),
        ..Default::default()
    }
}

#[test]
fn test_single_year_interest_only() {
    let trajectory = calculate_progression(quiet(1)).unwrap();
    let year = &trajectory[0];

    assert!((year.nominal_debt - 10.3).abs() < EPS);
    assert!((year.interest_payment - 0.3).abs() < EPS);
    assert!((year.gdp - 102.0).abs() < EPS);
    assert!((year.debt_to_gdp_ratio - 10.098).abs() < 1e-3);
    assert_eq!(year.principal_change, 0.0);
    assert_eq!(year.year, 2025);
}

#[test]
fn test_interest_compounds_on_prior_debt() {
    let trajectory = calculate_progression(quiet(2)).unwrap();

    assert!((trajectory[1].interest_payment - 10.3 * 0.03).abs() < EPS);
    assert!((trajectory[1].nominal_debt - 10.609).abs() < EPS);
    assert!((trajectory[1].gdp - 104.04).abs() < EPS);
}

#[test]
fn test_inflation_tracks_real_debt() {
    let config = SimulationConfig {
        inflation_rate: 0.02,
        base_gdp_growth_rate: 0.0,
        ..quiet(1)
    };
    let year = &calculate_progression(config).unwrap()[0];

    assert!((year.gdp - 102.0).abs() < EPS);
    assert!((year.real_debt - 10.3 / 1.02).abs() < EPS);
    assert!((year.inflation_adjustment - 10.3 * 0.02 / 1.02).abs() < EPS);
}

#[test]
fn test_population_growth_feeds_gdp_at_half_weight() {
    let config = SimulationConfig {
        base_population_growth_rate: Some(0.01),
        ..quiet(1)
    };
    let year = &calculate_progression(config).unwrap()[0];

    assert!((year.population - 330.0 * 1.01).abs() < EPS);
    assert!((year.gdp - 100.0 * 1.025).abs() < EPS);
    assert_eq!(year.population_growth_rate, 0.01);
}

#[test]
fn test_debt_per_capita_in_dollars() {
    let year = &calculate_progression(quiet(1)).unwrap()[0];
    assert!((year.debt_per_capita - 10.3e12 / 330e6).abs() < 1e-6);
}

#[test]
fn test_short_deficit_list_is_padded() {
    let config = SimulationConfig {
        annual_deficits: vec![1.0],
        ..quiet(3)
    };
    let trajectory = calculate_progression(config).unwrap();

    assert_eq!(trajectory[0].principal_change, 1.0);
    assert_eq!(trajectory[1].principal_change, 0.8);
    assert_eq!(trajectory[2].principal_change, 0.8);
}

#[test]
fn test_surplus_cannot_push_debt_negative() {
    let config = SimulationConfig {
        initial_debt: 1.0,
        annual_deficits: vec![-5.0, -5.0],
        ..quiet(2)
    };
    let trajectory = calculate_progression(config).unwrap();

    for year in &trajectory {
        assert_eq!(year.nominal_debt, 0.0);
        assert_eq!(year.debt_to_gdp_ratio, 0.0);
    }
}

#[test]
fn test_clipped_surplus_is_not_carried_forward() {
    let config = SimulationConfig {
        initial_debt: 1.0,
        annual_deficits: vec![-5.0, 2.0],
        ..quiet(2)
    };
    let trajectory = calculate_progression(config).unwrap();

    assert_eq!(trajectory[0].nominal_debt, 0.0);
    assert_eq!(trajectory[0].principal_change, -5.0);
    assert!((trajectory[1].nominal_debt - 2.0).abs() < EPS);
}

#[test]
fn test_monotonic_horizon_without_events() {
    let config = SimulationConfig {
        random_events_enabled: false,
        simulation_years: 50,
        start_year: Some(2000),
        ..Default::default()
    };
    let trajectory = calculate_progression(config).unwrap();

    assert_eq!(trajectory.len(), 50);
    for (i, year) in trajectory.iter().enumerate() {
        assert_eq!(year.year_index, i);
        assert_eq!(year.year, 2000 + i as i32);
        assert!(year.events.is_empty());
    }
}

#[test]
fn test_principal_change_includes_event_impacts() {
    let config = SimulationConfig {
        simulation_years: 60,
        random_seed: Some(4242),
        random_events_enabled: true,
        ..quiet(60)
    };
    let trajectory = calculate_progression(config.clone()).unwrap();

    for year in &trajectory {
        let summed: f64 = year.events.iter().map(|e| e.impact.deficit).sum();
        assert!((year.event_deficit_impact - summed).abs() < EPS);
        assert!(
            (year.principal_change - (config.deficit_for_year(year.year_index) + summed)).abs()
                < EPS
        );
    }
}

#[test]
fn test_scenario_pandemic_hits_population() {
    let mut config = SimulationConfig {
        random_events_enabled: true,
        random_seed: Some(1),
        base_population_growth_rate: Some(0.0),
        ..quiet(3)
    };
    config.scenario_events = vec![ScheduledEvent {
        event: ScenarioEvent {
            kind: EventKind::Pandemic,
            severity: 1.0,
        },
        schedule: EventSchedule::OneTime { year: 1 },
    }];

    let trajectory = calculate_progression(config).unwrap();

    assert!(trajectory[1].has_event(EventKind::Pandemic));
    assert!(trajectory[1].population_growth_rate < 0.0);
    assert!(trajectory[1].population < trajectory[0].population);
}

#[test]
fn test_stepwise_matches_full_run() {
    let config = SimulationConfig {
        simulation_years: 25,
        random_seed: Some(31337),
        start_year: Some(2025),
        ..Default::default()
    };

    let mut orchestrator = Orchestrator::new(config.clone()).unwrap();
    let mut stepped = Vec::new();
    while !orchestrator.is_finished() {
        stepped.push(orchestrator.step().unwrap());
    }

    assert_eq!(stepped, calculate_progression(config).unwrap());
    assert!(matches!(
        orchestrator.step(),
        Err(SimulationError::HorizonExhausted { horizon: 25 })
    ));
}

#[test]
fn test_event_log_has_one_completion_per_year() {
    let config = SimulationConfig {
        simulation_years: 40,
        random_seed: Some(8),
        ..Default::default()
    };
    let mut orchestrator = Orchestrator::new(config).unwrap();
    orchestrator.run_to_completion().unwrap();

    let log = orchestrator.event_log();
    for year in 0..40 {
        let completions = log
            .events_at_year(year)
            .into_iter()
            .filter(|e| e.event_type() == "YearCompleted")
            .count();
        assert_eq!(completions, 1);
    }
}

#[test]
fn test_config_from_json_runs() {
    let config = SimulationConfig::from_json(
        r#"{
            "initial_debt": 10.0,
            "simulation_years": 3,
            "average_interest_rate": 0.03,
            "inflation_rate": 0.0,
            "annual_deficits": [0.0, 0.0, 0.0],
            "initial_gdp": 100.0,
            "base_gdp_growth_rate": 0.02,
            "random_events_enabled": false,
            "base_population_growth_rate": 0.0,
            "start_year": 2025
        }"#,
    )
    .unwrap();

    assert_eq!(config, quiet(3));
    assert_eq!(calculate_progression(config).unwrap().len(), 3);
}
