//! wireplan — parallel wire-group planner for a 10-channel resistive load
//! bank.
//!
//! The bank has ten individually switchable resistive wires. In advanced
//! mode the controller energizes them in parallel *groups*, one group per
//! step, so that each step's equivalent resistance approximates a target —
//! and every usable wire gets its turn across the sequence. This crate is
//! that planner, plus the thin caller surface around it.
//!
//! # Modules
//!
//! - [`mask`] — 10-bit wire sets (groups and allowed sets)
//! - [`resistance`] — ideal parallel-Req model with an open-wire threshold
//! - [`selector`] — exhaustive best-group search: safety ratchet, tie-breaks
//! - [`plan`] — greedy plan assembly with a degraded single-wire fallback
//! - [`bank`] — per-wire lock/temperature state → allowed set
//! - [`scenario`] — YAML scenario files for offline planning
//! - [`report`] — per-step wire lists, Req, and current at a supply voltage
//!
//! The core ([`selector`], [`plan`]) is pure and synchronous: degenerate
//! inputs (open wires, empty allowed sets) come back as normal values —
//! empty masks, empty or partial plans — never as errors.

pub mod bank;
pub mod mask;
pub mod plan;
pub mod report;
pub mod resistance;
pub mod scenario;
pub mod selector;
