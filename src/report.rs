//! Plan reporting — per-step summaries for a human or a machine.
//!
//! The core hands back bare masks; this module derives what an operator
//! actually wants to see per step: the 1-based wire numbers, the group's
//! equivalent resistance, and the current it would draw from the supply
//! (`I = V / Req`). A step whose Req is not finite-positive reports 0 A
//! rather than a nonsense current.

use serde::Serialize;

use crate::mask::WireMask;
use crate::plan::Plan;
use crate::resistance::{equivalent_resistance, WireOhms};

/// One plan step, fully derived.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    /// 1-based step number.
    pub step: usize,
    /// The group as a bit pattern, wire 9 leftmost.
    pub mask: String,
    /// 1-based wire numbers in the group (the panel labels wires 1–10).
    pub wires: Vec<usize>,
    pub req_ohms: f64,
    pub current_amps: f64,
}

/// A rendered plan: supply context plus one summary per step.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub supply_volts: f64,
    pub steps: Vec<StepSummary>,
}

impl PlanReport {
    /// Derive the full report for `plan` at `supply_volts`.
    pub fn new(plan: &Plan, r: &WireOhms, supply_volts: f64) -> Self {
        let steps = plan
            .steps()
            .iter()
            .enumerate()
            .map(|(i, &mask)| summarize(i + 1, mask, r, supply_volts))
            .collect();
        Self {
            supply_volts,
            steps,
        }
    }

    /// Step-per-line text in the panel's format.
    pub fn to_text(&self) -> String {
        if self.steps.is_empty() {
            return "Planner returned an empty plan.\n".to_string();
        }
        let mut out = String::new();
        for s in &self.steps {
            let wires = s
                .wires
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "Step {}: mask={}  wires=[{}]  Req={:.4} Ω  I={:.2} A\n",
                s.step, s.mask, wires, s.req_ohms, s.current_amps
            ));
        }
        out
    }

    /// Pretty JSON for machine consumers.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("report serialization should not fail")
    }
}

fn summarize(step: usize, mask: WireMask, r: &WireOhms, supply_volts: f64) -> StepSummary {
    let req = equivalent_resistance(mask, r);
    let current = if req.is_finite() && req > 0.0 {
        supply_volts / req
    } else {
        0.0
    };
    StepSummary {
        step,
        mask: mask.to_string(),
        wires: mask.iter().map(|i| i + 1).collect(),
        req_ohms: req,
        current_amps: current,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
