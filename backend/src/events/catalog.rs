//! Event profiles
//!
//! Every function here builds one fresh [`EconomicEvent`], drawing names,
//! severities and durations from the supplied [`RandomSource`]. The order of
//! draws inside each constructor is part of the seeded-replay contract: do not
//! reorder them.

use crate::events::types::{EconomicEvent, EventImpact, EventKind};
use crate::rng::RandomSource;

const WAR_NAMES: &[&str] = &[
    "The AI Sovereignty War",
    "The Second Cyber Cold War",
    "The Water Wars",
    "The Quantum Conflict",
    "The Space Resource War",
    "The Arctic Territorial War",
    "Indo-Pacific Flashpoint War",
    "Great Blackout War",
    "Second South China Sea War",
    "Data War",
    "Green Energy Wars",
    "Global Food Crisis War",
    "Second Korean Conflict",
    "Digital Iron Curtain War",
    "AI Proxy Wars",
    "Eastern European Insurgency",
    "Middle East Water Conflict",
    "North Atlantic Defense War",
    "U.S.-China Economic War",
    "Synthetic Biology War",
    "Lithium Wars",
    "Space Colony Conflict",
    "Rare Earth Metals War",
    "Automated Warfare Crisis",
    "Climate Refugee War",
    "Orbital Skirmishes",
    "Pacific Cyber War",
    "Neo-Cold War",
    "Red Sea Trade War",
    "Second Taiwan Strait Crisis",
    "Quantum Network War",
    "African Resource Wars",
    "Global Resistance Conflict",
    "Second American Civil War",
    "South American Drug Wars 2.0",
    "Meridian Conflict",
    "Azure Coalition War",
    "Resource War",
    "Technological Sovereignty War",
    "Cyber Defense War",
    "Regional Security Crisis",
    "Global Alliance Conflict",
    "War of the Worlds",
    "World War X",
    "Great War",
    "Star Wars",
];

const RECESSION_NAMES: &[&str] = &[
    "Credit Crunch",
    "Market Correction",
    "Economic Contraction",
    "GDP Slowdown",
    "Investment Decline",
    "Consumer Confidence Crisis",
];

const BOOM_NAMES: &[&str] = &[
    "Economic Renaissance",
    "Prosperity Surge",
    "Market Expansion",
    "Growth Acceleration",
    "Investment Boom",
    "Productivity Revolution",
    "Technological Revolution",
    "Energy Revolution",
    "Space Exploration",
    "Healthcare Revolution",
    "Education Revolution",
    "Government Efficiency Period",
    "Financial Boom",
    "Globalization Renaissance",
];

// Common disasters appear twice to weight the draw.
const DISASTER_TYPES: &[&str] = &[
    "Hurricane",
    "Earthquake",
    "Flood",
    "Wildfire",
    "Drought",
    "Tsunami",
    "Volcanic Eruption",
    "Hurricane",
    "Earthquake",
    "Flood",
    "Wildfire",
    "Drought",
];

const TECH_FIELDS: &[&str] = &[
    "Quantum Computing",
    "Renewable Energy",
    "Biotechnology",
    "Space Industry",
    "Manufacturing Automation",
    "Robotics",
    "3D Printing",
    "Nanotechnology",
    "Genetic Engineering",
    "Augmented Reality",
    "Artificial Intelligence",
];

const ENERGY_SHOCKS: &[&str] = &[
    "Oil Supply Shock",
    "Grid Collapse",
    "Natural Gas Shortage",
    "Fuel Price Spiral",
];

const FINANCIAL_CRISES: &[&str] = &[
    "Banking Panic",
    "Sovereign Bond Crisis",
    "Housing Market Collapse",
    "Shadow Banking Meltdown",
];

/// Multiplier shared by every war's aftermath
pub const WAR_AFTERMATH_MULTIPLIER: f64 = 0.4;

fn event(
    kind: EventKind,
    name: impl Into<String>,
    description: impl Into<String>,
    impact: EventImpact,
    duration: u32,
    aftermath_duration: u32,
    aftermath_multiplier: f64,
) -> EconomicEvent {
    EconomicEvent {
        kind,
        name: name.into(),
        description: description.into(),
        impact,
        duration,
        aftermath_duration,
        aftermath_multiplier,
    }
}

/// New war; scale drawn from [0.5, 1.5)
pub fn war<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let name = *rng.pick(WAR_NAMES);
    let scale = rng.scaled(0.5, 1.0);
    let duration = rng.int_between(2, 5);
    let aftermath = rng.int_between(3, 4);

    event(
        EventKind::WarStart,
        name,
        format!("The {name} has begun, requiring significant military expenditures."),
        EventImpact {
            deficit: 0.5 * scale,
            gdp_growth: 0.005 * scale,
            inflation: 0.01 * scale,
            interest_rate: 0.002 * scale,
            population_growth: Some(-0.002 * scale),
        },
        duration,
        aftermath,
        WAR_AFTERMATH_MULTIPLIER,
    )
}

/// Reconstruction phase replacing a war once its fighting stops
///
/// Carries no duration of its own: the remaining aftermath years of the war
/// it replaces decide how long it lasts.
pub fn war_end(war_name: &str) -> EconomicEvent {
    event(
        EventKind::WarEnd,
        format!("{war_name} Aftermath"),
        format!("The {war_name} has ended, but reconstruction costs continue."),
        EventImpact {
            deficit: 0.3,
            gdp_growth: 0.01,
            inflation: 0.005,
            interest_rate: -0.001,
            population_growth: None,
        },
        0,
        0,
        1.0,
    )
}

/// Recession; severity drawn from [0.6, 1.4)
pub fn recession<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let name = *rng.pick(RECESSION_NAMES);
    let severity = rng.scaled(0.6, 0.8);
    let duration = rng.int_between(1, 3);
    let aftermath = rng.int_between(2, 3);

    event(
        EventKind::Recession,
        name,
        "A recession has hit the economy, reducing tax revenues and requiring stimulus spending.",
        EventImpact {
            deficit: 0.4 * severity,
            gdp_growth: -0.025 * severity,
            inflation: -0.01 * severity,
            interest_rate: -0.005 * severity,
            population_growth: None,
        },
        duration,
        aftermath,
        0.3,
    )
}

/// Depression; fixed high-impact profile
pub fn depression<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let duration = rng.int_between(3, 4);
    let aftermath = rng.int_between(5, 6);

    event(
        EventKind::Depression,
        "Economic Depression",
        "A severe economic depression has begun, dramatically increasing government spending on safety nets and stimulus.",
        EventImpact {
            deficit: 1.2,
            gdp_growth: -0.06,
            inflation: -0.015,
            interest_rate: -0.01,
            population_growth: None,
        },
        duration,
        aftermath,
        0.4,
    )
}

pub fn economic_boom<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let name = *rng.pick(BOOM_NAMES);
    let duration = rng.int_between(2, 3);
    let aftermath = rng.int_between(1, 2);

    event(
        EventKind::EconomicBoom,
        name,
        "A period of exceptional economic growth has begun, increasing tax revenues and reducing benefit payments.",
        EventImpact {
            deficit: -0.3,
            gdp_growth: 0.02,
            inflation: 0.005,
            interest_rate: 0.002,
            population_growth: None,
        },
        duration,
        aftermath,
        0.2,
    )
}

/// Natural disaster; severity drawn from [0.5, 1.5)
///
/// The aftermath length only feeds the year descriptions. Disasters are
/// never tracked as ongoing.
pub fn natural_disaster<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let disaster = *rng.pick(DISASTER_TYPES);
    let severity = rng.scaled(0.5, 1.0);
    let aftermath = rng.int_between(1, 2);

    event(
        EventKind::NaturalDisaster,
        format!("Major {disaster}"),
        format!(
            "A major {} has caused significant damage requiring federal disaster relief.",
            disaster.to_lowercase()
        ),
        EventImpact {
            deficit: 0.2 * severity,
            gdp_growth: -0.007 * severity,
            inflation: 0.003 * severity,
            interest_rate: 0.0,
            population_growth: None,
        },
        1,
        aftermath,
        0.3,
    )
}

pub fn pandemic<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let duration = rng.int_between(1, 2);
    let aftermath = rng.int_between(2, 3);

    event(
        EventKind::Pandemic,
        "Global Pandemic",
        "A global pandemic has emerged, requiring massive healthcare spending and economic support.",
        EventImpact {
            deficit: 1.0,
            gdp_growth: -0.05,
            inflation: 0.01,
            interest_rate: -0.005,
            population_growth: Some(-0.005),
        },
        duration,
        aftermath,
        0.5,
    )
}

pub fn tech_revolution<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let field = *rng.pick(TECH_FIELDS);
    let duration = rng.int_between(3, 5);
    let aftermath = rng.int_between(5, 8);

    event(
        EventKind::TechRevolution,
        format!("{field} Revolution"),
        format!(
            "A technological revolution in {field} is transforming the economy, boosting productivity and growth."
        ),
        EventImpact {
            deficit: -0.15,
            gdp_growth: 0.015,
            inflation: -0.002,
            interest_rate: 0.001,
            population_growth: None,
        },
        duration,
        aftermath,
        0.6,
    )
}

pub fn energy_crisis<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let name = *rng.pick(ENERGY_SHOCKS);
    let duration = rng.int_between(1, 3);
    let aftermath = rng.int_between(1, 3);

    event(
        EventKind::EnergyCrisis,
        name,
        "An energy crisis has driven up fuel and electricity prices across the economy.",
        EventImpact {
            deficit: 0.3,
            gdp_growth: -0.015,
            inflation: 0.02,
            interest_rate: 0.003,
            population_growth: None,
        },
        duration,
        aftermath,
        0.4,
    )
}

pub fn peace_dividend<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let duration = rng.int_between(3, 4);
    let aftermath = rng.int_between(2, 3);

    event(
        EventKind::PeaceDividend,
        "Peace Dividend",
        "A sustained period of peace has allowed reduction in military spending.",
        EventImpact {
            deficit: -0.2,
            gdp_growth: 0.005,
            inflation: -0.001,
            interest_rate: -0.001,
            population_growth: None,
        },
        duration,
        aftermath,
        0.5,
    )
}

pub fn financial_crisis<R: RandomSource + ?Sized>(rng: &mut R) -> EconomicEvent {
    let name = *rng.pick(FINANCIAL_CRISES);
    let duration = rng.int_between(1, 2);
    let aftermath = rng.int_between(3, 3);

    event(
        EventKind::FinancialCrisis,
        name,
        "A financial crisis has frozen credit markets, forcing bailouts and emergency rate cuts.",
        EventImpact {
            deficit: 0.8,
            gdp_growth: -0.035,
            inflation: -0.005,
            interest_rate: -0.007,
            population_growth: None,
        },
        duration,
        aftermath,
        0.4,
    )
}

/// Build a fresh event of the given kind
///
/// Returns `None` for the war phases that only the lifecycle can produce.
pub fn for_kind<R: RandomSource + ?Sized>(kind: EventKind, rng: &mut R) -> Option<EconomicEvent> {
    let event = match kind {
        EventKind::WarStart => war(rng),
        EventKind::WarOngoing | EventKind::WarEnd => return None,
        EventKind::Recession => recession(rng),
        EventKind::Depression => depression(rng),
        EventKind::EconomicBoom => economic_boom(rng),
        EventKind::NaturalDisaster => natural_disaster(rng),
        EventKind::Pandemic => pandemic(rng),
        EventKind::TechRevolution => tech_revolution(rng),
        EventKind::EnergyCrisis => energy_crisis(rng),
        EventKind::PeaceDividend => peace_dividend(rng),
        EventKind::FinancialCrisis => financial_crisis(rng),
    };
    Some(event)
}
