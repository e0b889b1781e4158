//! Candidate group selection — exhaustive scan with a safety ratchet.
//!
//! Given the wires currently permitted and the calibrated resistances, the
//! selector finds the single subset whose parallel equivalent resistance
//! best approximates the target. The universe is small (1023 nonempty
//! 10-bit masks) so the scan is exhaustive and deterministic, not a
//! heuristic search.
//!
//! Two policies shape the choice beyond raw error:
//!
//! - **Safety ratchet**: with `prefer_above_or_equal` set, the moment any
//!   candidate meets or exceeds the target, every under-target candidate is
//!   permanently out of the running — an under-target group draws *more*
//!   current than asked for, and no undershoot, however close, is preferred
//!   over an overshoot. If the ratcheted scan comes up empty, one relaxed
//!   scan without the ratchet runs instead.
//! - **Tie-breaks**: equal scores fall to the group with fewer active
//!   wires, then to the one with higher equivalent resistance (lower
//!   current).
//!
//! A tiny [`REPEAT_PENALTY`] nudges the scan away from re-selecting the
//! group picked in the previous plan step. It is a tie-break epsilon, not a
//! ban: a repeat still wins whenever it is meaningfully closer to target.

use crate::mask::{WireMask, WIRE_COUNT};
use crate::resistance::{equivalent_resistance, WireOhms};

/// Score penalty applied when a candidate equals the previously picked
/// group. Small enough to only matter on near-exact ties.
pub const REPEAT_PENALTY: f64 = 0.0001;

/// Immutable parameters for one planning call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Target equivalent resistance per group, ohms. Positive.
    pub target_ohms: f64,
    /// Maximum wires energized together in one group, 1–10.
    pub max_active: u8,
    /// Prefer groups with `Req >= target` (lower current than asked)
    /// whenever any such group exists.
    pub prefer_above_or_equal: bool,
}

impl PlannerConfig {
    /// Build a config, clamping `max_active` into 1–10.
    pub fn new(target_ohms: f64, max_active: u8, prefer_above_or_equal: bool) -> Self {
        Self {
            target_ohms,
            max_active: max_active.clamp(1, WIRE_COUNT as u8),
            prefer_above_or_equal,
        }
    }
}

impl Default for PlannerConfig {
    /// The device's advanced-mode defaults: 16 Ω target, at most 4 wires
    /// per group, prefer meeting-or-exceeding the target.
    fn default() -> Self {
        Self {
            target_ohms: 16.0,
            max_active: 4,
            prefer_above_or_equal: true,
        }
    }
}

/// Pick the best group within `allowed` for `cfg`.
///
/// `recent` is the group chosen in the previous plan step ([`WireMask::EMPTY`]
/// for the first step); it incurs [`REPEAT_PENALTY`] if re-encountered.
///
/// Returns [`WireMask::EMPTY`] when no subset of `allowed` within the
/// active-wire cap conducts at all — a normal outcome, not an error.
pub fn select_best(
    allowed: WireMask,
    r: &WireOhms,
    cfg: &PlannerConfig,
    recent: WireMask,
) -> WireMask {
    let first = select_pass(allowed, r, cfg, recent, cfg.prefer_above_or_equal);
    if cfg.prefer_above_or_equal && first.is_empty() {
        // Ratchet left nothing; one relaxed pass, then give up.
        return select_pass(allowed, r, cfg, recent, false);
    }
    first
}

/// One full scan of the 1023-mask universe. `prefer_above` arms the ratchet.
fn select_pass(
    allowed: WireMask,
    r: &WireOhms,
    cfg: &PlannerConfig,
    recent: WireMask,
    prefer_above: bool,
) -> WireMask {
    let mut best = WireMask::EMPTY;
    let mut best_score = f64::INFINITY;
    let mut best_count = 0u32;
    let mut best_req = 0.0f64;
    let mut found_above = false;

    for bits in 1..=WireMask::UNIVERSE {
        let m = WireMask::from_bits(bits);
        if !m.is_subset_of(allowed) {
            continue;
        }

        let k = m.active_count();
        if k > cfg.max_active as u32 {
            continue;
        }

        let req = equivalent_resistance(m, r);
        if !req.is_finite() {
            continue;
        }

        let above = req >= cfg.target_ohms;
        if prefer_above {
            if above && !found_above {
                // First meets-or-exceeds candidate: discard the running
                // best and lock out undershoots for the rest of the scan.
                found_above = true;
                best = WireMask::EMPTY;
                best_score = f64::INFINITY;
                best_count = 0;
                best_req = 0.0;
            }
            if !above && found_above {
                continue;
            }
        }

        let mut score = (req - cfg.target_ohms).abs();
        if m == recent {
            score += REPEAT_PENALTY;
        }

        let wins = score < best_score
            || (score == best_score && k < best_count)
            || (score == best_score && k == best_count && req > best_req);
        if wins {
            best = m;
            best_score = score;
            best_count = k;
            best_req = req;
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
