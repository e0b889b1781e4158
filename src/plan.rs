//! Plan assembly — greedy consumption of the allowed set.
//!
//! A plan is an ordered sequence of disjoint groups. The builder repeatedly
//! asks the selector for the best group among the wires not yet used,
//! removes the pick from the pool, and continues until the pool is empty or
//! nothing more can be selected. There is no backtracking: a wire placed in
//! an earlier step is never reconsidered.
//!
//! When the selector comes up empty but unused wires remain, a degraded
//! fallback tries each remaining wire solo and takes the one closest to
//! target, ignoring the meets-or-exceeds preference — at that point any
//! usable wire beats stranding it. Wires that cannot conduct at all are
//! simply left uncovered; a plan that does not cover the whole allowed set
//! is a normal outcome.

use crate::mask::{WireMask, WIRE_COUNT};
use crate::resistance::{equivalent_resistance, WireOhms};
use crate::selector::{select_best, PlannerConfig};

/// An ordered sequence of disjoint wire groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<WireMask>,
}

impl Plan {
    /// The groups, in execution order.
    pub fn steps(&self) -> &[WireMask] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Union of all groups — the wires the plan actually uses.
    pub fn covered(&self) -> WireMask {
        self.steps
            .iter()
            .fold(WireMask::EMPTY, |acc, &m| acc.union(m))
    }
}

impl IntoIterator for Plan {
    type Item = WireMask;
    type IntoIter = std::vec::IntoIter<WireMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Build a plan covering as much of `allowed` as the wires permit.
///
/// Each step's group is disjoint from every other, fits within
/// `cfg.max_active`, and is a subset of `allowed`. An empty plan (empty
/// allowed set, or no wire conducts) is a normal result.
pub fn build_plan(allowed: WireMask, r: &WireOhms, cfg: &PlannerConfig) -> Plan {
    let mut steps = Vec::new();
    let mut remaining = allowed;
    let mut last = WireMask::EMPTY;

    while !remaining.is_empty() {
        let mut pick = select_best(remaining, r, cfg, last);
        if pick.is_empty() {
            pick = best_solo(remaining, r, cfg.target_ohms);
            if pick.is_empty() {
                // Leftover wires are all unusable; the plan ends here.
                break;
            }
        }

        steps.push(pick);
        remaining = remaining.without(pick);
        last = pick;
    }

    Plan { steps }
}

/// Degraded fallback: the single remaining wire closest to target, with no
/// meets-or-exceeds preference. Empty when nothing in `remaining` conducts.
fn best_solo(remaining: WireMask, r: &WireOhms, target: f64) -> WireMask {
    let mut best = WireMask::EMPTY;
    let mut best_err = f64::INFINITY;

    for i in 0..WIRE_COUNT {
        if !remaining.contains(i) {
            continue;
        }
        let req = equivalent_resistance(WireMask::solo(i), r);
        let err = (req - target).abs();
        if err < best_err {
            best_err = err;
            best = WireMask::solo(i);
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
