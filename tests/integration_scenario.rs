//! YAML scenario → wire bank → plan → report, the whole offline pipeline
//! the `wireplan plan` subcommand runs.

use wireplan::plan::build_plan;
use wireplan::report::PlanReport;
use wireplan::scenario::Scenario;

/// The bundled example: a healthy pair of 100Ω wires aiming for 50Ω.
const PAIR_SCENARIO: &str = "\
target_ohms: 50.0
max_active: 2
prefer_above_or_equal: true
supply_volts: 230.0
wires:
  - { r: 100.0 }
  - { r: 100.0 }
";

#[test]
fn pair_scenario_plans_one_exact_step() {
    let scenario = Scenario::parse(PAIR_SCENARIO).unwrap();
    let bank = scenario.bank();
    let r = bank.resistances();
    let plan = build_plan(bank.allowed_mask(), &r, &scenario.planner_config());
    let report = PlanReport::new(&plan, &r, scenario.supply_volts);

    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.steps[0].wires, vec![1, 2]);
    assert_eq!(report.steps[0].req_ohms, 50.0);
    assert!((report.steps[0].current_amps - 4.6).abs() < 1e-12);
}

#[test]
fn locked_and_hot_wires_never_reach_the_plan() {
    let scenario = Scenario::parse(
        "target_ohms: 41.0
wires:
  - { r: 41.0 }
  - { r: 41.0, locked: true }
  - { r: 41.0, temp_c: 150.0 }
  - { r: 41.0, temp_c: 149.9 }
",
    )
    .unwrap();
    let bank = scenario.bank();
    let allowed = bank.allowed_mask();
    assert!(allowed.contains(0));
    assert!(!allowed.contains(1), "locked wire leaked into the allowed set");
    assert!(!allowed.contains(2), "wire at the 150°C cutoff must be excluded");
    assert!(allowed.contains(3), "149.9°C is still below the cutoff");

    let plan = build_plan(allowed, &bank.resistances(), &scenario.planner_config());
    let covered = plan.covered();
    assert!(!covered.contains(1) && !covered.contains(2));
}

#[test]
fn all_excluded_scenario_gives_empty_report() {
    let scenario = Scenario::parse(
        "wires:
  - { r: 41.0, locked: true }
  - { r: 0.0 }
",
    )
    .unwrap();
    let bank = scenario.bank();
    assert!(bank.allowed_mask().is_empty());

    let plan = build_plan(
        bank.allowed_mask(),
        &bank.resistances(),
        &scenario.planner_config(),
    );
    let report = PlanReport::new(&plan, &bank.resistances(), scenario.supply_volts);
    assert!(report.steps.is_empty());
    assert_eq!(report.to_text(), "Planner returned an empty plan.\n");
}

#[test]
fn json_report_carries_the_full_pipeline_output() {
    let scenario = Scenario::parse(PAIR_SCENARIO).unwrap();
    let bank = scenario.bank();
    let r = bank.resistances();
    let plan = build_plan(bank.allowed_mask(), &r, &scenario.planner_config());
    let json = PlanReport::new(&plan, &r, scenario.supply_volts).to_json();

    let value: serde_json::Value = serde_json::from_str(&json).expect("JSON should parse");
    assert_eq!(value["supply_volts"], 230.0);
    let steps = value["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["mask"], "0b0000000011");
    assert_eq!(steps[0]["current_amps"], 4.6);
}

#[test]
fn defaults_produce_a_sensible_full_bank_plan() {
    // Ten nominal wires with no overrides at all: the device defaults
    // (16Ω target, 4-wire cap) must consume the whole bank.
    let mut yaml = String::from("wires:\n");
    for _ in 0..10 {
        yaml.push_str("  - {}\n");
    }
    let scenario = Scenario::parse(&yaml).unwrap();
    let bank = scenario.bank();
    let allowed = bank.allowed_mask();
    assert_eq!(allowed.active_count(), 10);

    let plan = build_plan(allowed, &bank.resistances(), &scenario.planner_config());
    assert_eq!(plan.covered(), allowed);
    for step in plan.steps() {
        assert!(step.active_count() <= 4);
    }
}
