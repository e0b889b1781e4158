//! `wireplan plan` — run the planner on a YAML scenario and print the plan.

use std::process;

use wireplan::plan::build_plan;
use wireplan::report::PlanReport;
use wireplan::scenario::Scenario;

pub fn run(scenario_path: &str, json: bool) {
    let scenario = Scenario::load(scenario_path).unwrap_or_else(|e| {
        eprintln!("Error loading {scenario_path}: {e}");
        process::exit(1);
    });

    let bank = scenario.bank();
    let allowed = bank.allowed_mask();
    let r = bank.resistances();
    let cfg = scenario.planner_config();

    if !json {
        eprintln!(
            "Allowed mask: {}  target={:.4} Ω  max_active={}  prefer_above={}  Vin={:.2} V",
            allowed, cfg.target_ohms, cfg.max_active, cfg.prefer_above_or_equal,
            scenario.supply_volts,
        );
    }

    // An empty allowed set or an empty plan is an expected outcome, not a
    // failure: report it and exit 0.
    let plan = build_plan(allowed, &r, &cfg);
    let report = PlanReport::new(&plan, &r, scenario.supply_volts);

    if json {
        println!("{}", report.to_json());
    } else if allowed.is_empty() {
        println!("No allowed wires (all locked, overheated, or open).");
    } else {
        print!("{}", report.to_text());
    }
}
