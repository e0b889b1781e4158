//! 10-bit wire set representation.
//!
//! The load bank has exactly [`WIRE_COUNT`] controllable wires, so every
//! subset of wires fits in the low 10 bits of a `u16`: bit `i` set means
//! wire `i` is in the set. The same representation serves both roles the
//! planner needs:
//!
//! - a **group** — the wires energized together in one plan step
//! - an **allowed set** — the wires the caller currently permits
//!
//! Masks are plain values; they carry no ordering of their own. The planner
//! compares groups only through its scoring rule, never by raw bit value.

use std::fmt;

/// Number of controllable wires in the bank. Fixed by the hardware.
pub const WIRE_COUNT: usize = 10;

/// A set of wire indices packed into the low 10 bits of a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WireMask(u16);

/// Bits above `WIRE_COUNT` are meaningless and masked off on entry.
const LOW_BITS: u16 = (1u16 << WIRE_COUNT) - 1;

impl WireMask {
    /// The empty set. Never a valid group, but the normal "nothing found"
    /// result of a selection.
    pub const EMPTY: WireMask = WireMask(0);

    /// All ten wires.
    pub const ALL: WireMask = WireMask(LOW_BITS);

    /// Total number of distinct nonempty masks (the selector's scan universe).
    pub const UNIVERSE: u16 = LOW_BITS;

    /// Build a mask from raw bits. Bits above the low 10 are discarded.
    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        WireMask(bits & LOW_BITS)
    }

    /// The single-wire mask for wire `index`.
    ///
    /// # Panics
    /// Panics if `index >= WIRE_COUNT`.
    #[inline]
    pub fn solo(index: usize) -> Self {
        assert!(index < WIRE_COUNT, "wire index out of range: {index}");
        WireMask(1u16 << index)
    }

    /// Raw bit pattern (low 10 bits).
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of wires in the set.
    #[inline]
    pub fn active_count(self) -> u32 {
        self.0.count_ones()
    }

    /// True if wire `index` is in the set.
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        index < WIRE_COUNT && (self.0 & (1u16 << index)) != 0
    }

    /// True if every wire in `self` is also in `other`.
    #[inline]
    pub fn is_subset_of(self, other: WireMask) -> bool {
        (self.0 & !other.0) == 0
    }

    /// Set intersection.
    #[inline]
    pub fn intersect(self, other: WireMask) -> WireMask {
        WireMask(self.0 & other.0)
    }

    /// Wires in `self` but not in `other`.
    #[inline]
    pub fn without(self, other: WireMask) -> WireMask {
        WireMask(self.0 & !other.0)
    }

    /// Set union.
    #[inline]
    pub fn union(self, other: WireMask) -> WireMask {
        WireMask(self.0 | other.0)
    }

    /// Add wire `index` to the set.
    #[inline]
    pub fn with(self, index: usize) -> WireMask {
        debug_assert!(index < WIRE_COUNT);
        WireMask(self.0 | (1u16 << index))
    }

    /// Iterate the wire indices in the set, ascending.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WIRE_COUNT).filter(move |&i| self.contains(i))
    }
}

impl fmt::Display for WireMask {
    /// Fixed-width binary, wire 9 leftmost (matches the device's debug output).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:010b}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bits_discards_high_bits() {
        let m = WireMask::from_bits(0xFFFF);
        assert_eq!(m, WireMask::ALL);
        assert_eq!(m.active_count(), 10);
    }

    #[test]
    fn solo_sets_one_bit() {
        for i in 0..WIRE_COUNT {
            let m = WireMask::solo(i);
            assert_eq!(m.active_count(), 1, "solo({i}) should have one wire");
            assert!(m.contains(i));
        }
    }

    #[test]
    #[should_panic]
    fn solo_out_of_range_panics() {
        let _ = WireMask::solo(10);
    }

    #[test]
    fn subset_and_without() {
        let a = WireMask::from_bits(0b0000_0110);
        let b = WireMask::from_bits(0b0000_0111);
        assert!(a.is_subset_of(b));
        assert!(!b.is_subset_of(a));
        assert_eq!(b.without(a), WireMask::solo(0));
        assert!(a.without(a).is_empty());
    }

    #[test]
    fn iter_yields_ascending_indices() {
        let m = WireMask::from_bits(0b10_0000_0101);
        let indices: Vec<usize> = m.iter().collect();
        assert_eq!(indices, vec![0, 2, 9]);
    }

    #[test]
    fn display_is_ten_bits_wide() {
        assert_eq!(WireMask::solo(0).to_string(), "0b0000000001");
        assert_eq!(WireMask::ALL.to_string(), "0b1111111111");
    }

    #[test]
    fn empty_is_subset_of_everything() {
        assert!(WireMask::EMPTY.is_subset_of(WireMask::EMPTY));
        assert!(WireMask::EMPTY.is_subset_of(WireMask::ALL));
    }
}
