//! YAML scenario files for offline planning.
//!
//! A scenario bundles everything one planning run needs: the planner
//! parameters, the supply voltage used for current reporting, and the
//! observed state of each wire. Every field has a sensible default, so a
//! minimal file can be just a target and a couple of wires:
//!
//! ```yaml
//! target_ohms: 16.0
//! max_active: 4
//! prefer_above_or_equal: true
//! supply_volts: 230.0
//! wires:
//!   - { r: 41.0 }
//!   - { r: 39.5, locked: true }
//!   - { r: 44.0, temp_c: 152.0 }
//! ```
//!
//! Fewer than ten `wires` entries is fine — the missing channels default to
//! open (they read 0 Ω and are excluded). More than ten is an error, since
//! the bank has exactly ten channels.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bank::{WireBank, WireState};
use crate::mask::WIRE_COUNT;
use crate::selector::PlannerConfig;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("scenario lists {0} wires; the bank has only {max} channels", max = WIRE_COUNT)]
    TooManyWires(usize),
    #[error("target_ohms must be positive, got {0}")]
    BadTarget(f64),
    #[error("supply_volts must be positive, got {0}")]
    BadSupply(f64),
}

/// One offline planning run, as described by a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_target")]
    pub target_ohms: f64,
    #[serde(default = "default_max_active")]
    pub max_active: u8,
    #[serde(default = "default_prefer")]
    pub prefer_above_or_equal: bool,
    /// Bus voltage used only for per-step current reporting.
    #[serde(default = "default_supply")]
    pub supply_volts: f64,
    #[serde(default)]
    pub wires: Vec<WireState>,
}

fn default_target() -> f64 {
    16.0
}
fn default_max_active() -> u8 {
    4
}
fn default_prefer() -> bool {
    true
}
fn default_supply() -> f64 {
    230.0
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            target_ohms: default_target(),
            max_active: default_max_active(),
            prefer_above_or_equal: default_prefer(),
            supply_volts: default_supply(),
            wires: Vec::new(),
        }
    }
}

impl Scenario {
    /// Load and validate a scenario from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Parse and validate a scenario from YAML text.
    pub fn parse(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        if self.wires.len() > WIRE_COUNT {
            return Err(ScenarioError::TooManyWires(self.wires.len()));
        }
        if !(self.target_ohms.is_finite() && self.target_ohms > 0.0) {
            return Err(ScenarioError::BadTarget(self.target_ohms));
        }
        if !(self.supply_volts.is_finite() && self.supply_volts > 0.0) {
            return Err(ScenarioError::BadSupply(self.supply_volts));
        }
        Ok(())
    }

    /// The wire bank this scenario describes; unlisted channels are open.
    pub fn bank(&self) -> WireBank {
        let mut wires = [WireState::open(); WIRE_COUNT];
        for (slot, wire) in wires.iter_mut().zip(self.wires.iter()) {
            *slot = *wire;
        }
        WireBank::new(wires)
    }

    /// Planner parameters for this scenario (`max_active` clamped to 1–10).
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.target_ohms, self.max_active, self.prefer_above_or_equal)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
