//! A numeric-interval abstract domain for machine integers.
//!
//! A closed interval `[lower, upper]` over `i64`, with overflow-aware
//! transfer functions for `+`, `-`, `*`. Queries are cheap (interval
//! comparisons); refinements narrow the interval and never widen it.

use std::cmp::{max, min};

/// A closed interval `[lower, upper]` over the machine integer range.
///
/// `IntBound::unbounded()` is the top element of the lattice; a single
/// point (`lower == upper`) is the most precise non-bottom element this
/// domain represents. `lower > upper` never occurs; refinements that
/// would produce it are rejected by the caller (the order graph) before
/// they reach here, since this domain itself has no contradiction
/// signal of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntBound {
    lower: i64,
    upper: i64,
}

impl IntBound {
    /// The interval `[i64::MIN, i64::MAX]`: no information at all.
    pub fn unbounded() -> Self {
        IntBound {
            lower: i64::MIN,
            upper: i64::MAX,
        }
    }

    /// The interval containing only `k`.
    pub fn from_constant(k: i64) -> Self {
        IntBound { lower: k, upper: k }
    }

    /// A general interval. `lower` must be `<= upper`.
    pub fn new(lower: i64, upper: i64) -> Self {
        debug_assert!(lower <= upper, "empty IntBound: {lower} > {upper}");
        IntBound { lower, upper }
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Does the interval contain exactly one value?
    pub fn is_constant(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lower <= v && v <= self.upper
    }

    /// Provably `self < other` for every pair of values each interval
    /// contains.
    pub fn known_lt(&self, other: &IntBound) -> bool {
        self.upper < other.lower
    }

    /// Provably `self <= other` for every pair of values each interval
    /// contains.
    pub fn known_le(&self, other: &IntBound) -> bool {
        self.upper <= other.lower
    }

    /// Provably `self != other`: the intervals don't overlap.
    pub fn known_ne(&self, other: &IntBound) -> bool {
        self.known_lt(other) || other.known_lt(self)
    }

    pub fn known_gt_const(&self, k: i64) -> bool {
        self.lower > k
    }

    pub fn known_lt_const(&self, k: i64) -> bool {
        self.upper < k
    }

    /// Narrow `self` in place to also satisfy `self < other`, given that
    /// the caller has already established the fact holds. A no-op if
    /// already known.
    pub fn make_lt(&mut self, other: &IntBound) {
        if self.known_lt(other) {
            return;
        }
        if let Some(new_upper) = other.upper.checked_sub(1) {
            self.upper = min(self.upper, new_upper);
        }
    }

    /// Narrow `self` in place to also satisfy `self <= other`.
    pub fn make_le(&mut self, other: &IntBound) {
        if self.known_le(other) {
            return;
        }
        self.upper = min(self.upper, other.upper);
    }

    /// Narrow `self` in place to also satisfy `self < k`.
    pub fn make_lt_const(&mut self, k: i64) {
        if let Some(new_upper) = k.checked_sub(1) {
            self.upper = min(self.upper, new_upper);
        }
    }

    /// Narrow `self` in place to also satisfy `self > k`.
    pub fn make_gt_const(&mut self, k: i64) {
        if let Some(new_lower) = k.checked_add(1) {
            self.lower = max(self.lower, new_lower);
        }
    }

    /// Whether `self + other` is guaranteed not to overflow `i64`.
    pub fn add_bound_cannot_overflow(&self, other: &IntBound) -> bool {
        self.lower.checked_add(other.lower).is_some() && self.upper.checked_add(other.upper).is_some()
    }

    /// The interval of possible results of `self + other`, computed with
    /// wrapping (two's-complement) arithmetic so it remains a sound
    /// over-approximation even when the operation can overflow.
    pub fn add_bound(&self, other: &IntBound) -> IntBound {
        if self.add_bound_cannot_overflow(other) {
            IntBound::new(self.lower + other.lower, self.upper + other.upper)
        } else {
            IntBound::unbounded()
        }
    }

    pub fn sub_bound_cannot_overflow(&self, other: &IntBound) -> bool {
        self.lower.checked_sub(other.upper).is_some() && self.upper.checked_sub(other.lower).is_some()
    }

    pub fn sub_bound(&self, other: &IntBound) -> IntBound {
        if self.sub_bound_cannot_overflow(other) {
            IntBound::new(self.lower - other.upper, self.upper - other.lower)
        } else {
            IntBound::unbounded()
        }
    }

    pub fn mul_bound_cannot_overflow(&self, other: &IntBound) -> bool {
        self.mul_bound_corners(other).is_some()
    }

    pub fn mul_bound(&self, other: &IntBound) -> IntBound {
        match self.mul_bound_corners(other) {
            Some((lo, hi)) => IntBound::new(lo, hi),
            None => IntBound::unbounded(),
        }
    }

    /// The four corner products of the two intervals, or `None` if any
    /// of them overflows `i64`.
    fn mul_bound_corners(&self, other: &IntBound) -> Option<(i64, i64)> {
        let corners = [
            self.lower.checked_mul(other.lower)?,
            self.lower.checked_mul(other.upper)?,
            self.upper.checked_mul(other.lower)?,
            self.upper.checked_mul(other.upper)?,
        ];
        let lo = corners.iter().copied().min().unwrap();
        let hi = corners.iter().copied().max().unwrap();
        Some((lo, hi))
    }
}

impl std::fmt::Display for IntBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == IntBound::unbounded() {
            write!(f, "IntBound.unbounded()")
        } else if self.is_constant() {
            write!(f, "IntBound.from_constant({})", self.lower)
        } else {
            write!(f, "IntBound({}, {})", self.lower, self.upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_contains_everything_relevant() {
        let b = IntBound::unbounded();
        assert!(b.contains(0));
        assert!(b.contains(i64::MIN));
        assert!(b.contains(i64::MAX));
    }

    #[test]
    fn known_lt_is_interval_separation() {
        let a = IntBound::new(0, 10);
        let b = IntBound::new(11, 20);
        assert!(a.known_lt(&b));
        assert!(!b.known_lt(&a));
        let c = IntBound::new(10, 20);
        assert!(!a.known_lt(&c));
        assert!(a.known_le(&c));
    }

    #[test]
    fn add_overflow_detection() {
        let a = IntBound::new(i64::MAX - 1, i64::MAX);
        let one = IntBound::from_constant(1);
        assert!(!a.add_bound_cannot_overflow(&one));
        assert_eq!(a.add_bound(&one), IntBound::unbounded());

        let b = IntBound::new(0, 10);
        assert!(b.add_bound_cannot_overflow(&one));
        assert_eq!(b.add_bound(&one), IntBound::new(1, 11));
    }

    #[test]
    fn mul_corners_pick_extremes() {
        let a = IntBound::new(-10, -4);
        let b = IntBound::new(2, 10);
        let c = a.mul_bound(&b);
        assert_eq!(c, IntBound::new(-100, -8));
    }

    #[test]
    fn make_lt_narrows_upper_bound() {
        let mut a = IntBound::unbounded();
        let b = IntBound::from_constant(5);
        a.make_lt(&b);
        assert_eq!(a.upper(), 4);
    }
}
