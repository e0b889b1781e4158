//! Caller-side wire state — locks, temperatures, and the allowed set.
//!
//! The planner core only sees an allowed mask; this module is the boundary
//! that derives it. A wire may participate in a plan when all three hold:
//!
//! - it is not locked out (operator toggle or a tripped safety latch)
//! - its temperature is below [`THERMAL_CUTOFF_C`] — at or past the cutoff
//!   the wire is force-excluded no matter what its lock flag says
//! - its calibrated resistance actually conducts (finite, above the open
//!   threshold)
//!
//! The bank is a plain value: deriving the allowed set never mutates it.

use serde::{Deserialize, Serialize};

use crate::mask::{WireMask, WIRE_COUNT};
use crate::resistance::{conducts, WireOhms};

/// A wire at or above this temperature is excluded regardless of its lock
/// flag. Matches the device's thermal latch threshold.
pub const THERMAL_CUTOFF_C: f64 = 150.0;

/// Factory-nominal wire resistance used when no calibration value is given.
pub const DEFAULT_WIRE_OHMS: f64 = 41.0;

/// Observed state of one wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireState {
    /// Calibrated resistance, ohms. Non-finite or ≤ 0.01 means open.
    #[serde(default = "default_resistance", rename = "r")]
    pub resistance_ohms: f64,
    /// Operator or safety lock; a locked wire never participates.
    #[serde(default)]
    pub locked: bool,
    /// Last measured wire temperature, °C.
    #[serde(default = "default_temperature", rename = "temp_c")]
    pub temperature_c: f64,
}

fn default_resistance() -> f64 {
    DEFAULT_WIRE_OHMS
}

fn default_temperature() -> f64 {
    25.0
}

impl Default for WireState {
    fn default() -> Self {
        Self {
            resistance_ohms: default_resistance(),
            locked: false,
            temperature_c: default_temperature(),
        }
    }
}

impl WireState {
    /// An unconnected channel: reads open, never participates.
    pub fn open() -> Self {
        Self {
            resistance_ohms: 0.0,
            ..Self::default()
        }
    }

    /// True if this wire may currently participate in a plan.
    pub fn usable(&self) -> bool {
        !self.locked && self.temperature_c < THERMAL_CUTOFF_C && conducts(self.resistance_ohms)
    }
}

/// The full 10-channel bank.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WireBank {
    pub wires: [WireState; WIRE_COUNT],
}

impl WireBank {
    pub fn new(wires: [WireState; WIRE_COUNT]) -> Self {
        Self { wires }
    }

    /// The allowed set the planner core consumes.
    pub fn allowed_mask(&self) -> WireMask {
        let mut mask = WireMask::EMPTY;
        for (i, wire) in self.wires.iter().enumerate() {
            if wire.usable() {
                mask = mask.with(i);
            }
        }
        mask
    }

    /// Per-wire resistances in the layout the resistance model expects.
    pub fn resistances(&self) -> WireOhms {
        let mut r = [0.0; WIRE_COUNT];
        for (i, wire) in self.wires.iter().enumerate() {
            r[i] = wire.resistance_ohms;
        }
        r
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wire_is_usable() {
        let w = WireState::default();
        assert!(w.usable());
        assert_eq!(w.resistance_ohms, DEFAULT_WIRE_OHMS);
    }

    #[test]
    fn locked_wire_is_excluded() {
        let w = WireState {
            locked: true,
            ..WireState::default()
        };
        assert!(!w.usable());
    }

    #[test]
    fn thermal_cutoff_is_inclusive() {
        // 149.9 is fine; exactly 150.0 trips the exclusion.
        let warm = WireState {
            temperature_c: THERMAL_CUTOFF_C - 0.1,
            ..WireState::default()
        };
        let hot = WireState {
            temperature_c: THERMAL_CUTOFF_C,
            ..WireState::default()
        };
        assert!(warm.usable());
        assert!(!hot.usable(), "cutoff must trip at exactly {THERMAL_CUTOFF_C}°C");
    }

    #[test]
    fn thermal_cutoff_overrides_unlocked_state() {
        let w = WireState {
            locked: false,
            temperature_c: 180.0,
            ..WireState::default()
        };
        assert!(!w.usable(), "overheated wire excluded even when unlocked");
    }

    #[test]
    fn open_wire_is_excluded() {
        assert!(!WireState::open().usable());
        let nan = WireState {
            resistance_ohms: f64::NAN,
            ..WireState::default()
        };
        assert!(!nan.usable());
    }

    #[test]
    fn allowed_mask_reflects_per_wire_state() {
        let mut bank = WireBank::default();
        bank.wires[1].locked = true;
        bank.wires[4].temperature_c = 151.0;
        bank.wires[7] = WireState::open();

        let mask = bank.allowed_mask();
        assert!(mask.contains(0));
        assert!(!mask.contains(1), "locked");
        assert!(!mask.contains(4), "overheated");
        assert!(!mask.contains(7), "open");
        assert_eq!(mask.active_count(), 7);
    }

    #[test]
    fn empty_bank_yields_empty_mask() {
        let bank = WireBank::new([WireState::open(); WIRE_COUNT]);
        assert!(bank.allowed_mask().is_empty());
    }
}
