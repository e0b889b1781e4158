//! Ideal parallel-resistance model.
//!
//! Wires energized together form a parallel network, so the group's
//! equivalent resistance is the reciprocal of the summed conductances:
//!
//! `Req = 1 / Σ (1 / Ri)`  over the wires in the group
//!
//! A wire whose calibrated resistance is unusable — non-finite, or at or
//! below [`OPEN_THRESHOLD_OHMS`] — is treated as an open circuit and simply
//! contributes nothing to the sum. Bad calibration data therefore degrades
//! a group instead of poisoning the math. A group with no conducting member
//! reports [`f64::INFINITY`], the open-circuit sentinel.
//!
//! No tolerance or thermal-drift modelling here; the planner works on the
//! calibrated nominal values it is handed.

use crate::mask::{WireMask, WIRE_COUNT};

/// Per-wire calibrated resistances, ohms, indexed by wire.
pub type WireOhms = [f64; WIRE_COUNT];

/// Resistances at or below this are treated as open (non-conducting).
/// Matches the device's calibration floor.
pub const OPEN_THRESHOLD_OHMS: f64 = 0.01;

/// True if `ohms` represents a wire that actually conducts.
#[inline]
pub fn conducts(ohms: f64) -> bool {
    ohms.is_finite() && ohms > OPEN_THRESHOLD_OHMS
}

/// Equivalent parallel resistance of the wires in `mask`.
///
/// Returns `f64::INFINITY` when no member conducts (including the empty
/// mask) — an open circuit, not an error.
pub fn equivalent_resistance(mask: WireMask, r: &WireOhms) -> f64 {
    let mut conductance = 0.0;
    for i in mask.iter() {
        if conducts(r[i]) {
            conductance += 1.0 / r[i];
        }
    }
    if conductance <= 0.0 {
        return f64::INFINITY;
    }
    1.0 / conductance
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
