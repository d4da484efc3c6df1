//! Overflow-aware transfer functions.
//!
//! Each of these constructs a fresh result node from `IntBound`'s own
//! transfer function, then, only when that transfer cannot overflow,
//! attaches whatever ordering edges the operand signs justify. Under
//! overflow possibility no edge is added, since the result may have
//! wrapped around.

use crate::bound::IntBound;
use crate::error::ContradictionInvalidLoop;
use crate::graph::{OrderGraph, OrderNode};

impl OrderGraph {
    /// `self + k` for a compile-time-constant `k`.
    pub fn add_const(&mut self, a: OrderNode, k: i64) -> Result<OrderNode, ContradictionInvalidLoop> {
        let a_bounds = *self.bounds(a);
        let k_bounds = IntBound::from_constant(k);
        let result_bounds = a_bounds.add_bound(&k_bounds);
        let res = self.new_node_with_bounds(result_bounds);
        if a_bounds.add_bound_cannot_overflow(&k_bounds) {
            if k > 0 {
                self.make_lt(a, res)?;
            } else if k < 0 {
                self.make_lt(res, a)?;
            }
            // k == 0: no edge. Equality would need make_le in both
            // directions, which would assert an alias fact this domain
            // doesn't track; only ordering facts are added here.
        }
        Ok(res)
    }

    /// `self + other`.
    pub fn add(&mut self, a: OrderNode, b: OrderNode) -> Result<OrderNode, ContradictionInvalidLoop> {
        let a_bounds = *self.bounds(a);
        let b_bounds = *self.bounds(b);
        let result_bounds = a_bounds.add_bound(&b_bounds);
        let res = self.new_node_with_bounds(result_bounds);
        if a_bounds.add_bound_cannot_overflow(&b_bounds) {
            if b_bounds.known_gt_const(0) {
                self.make_lt(a, res)?;
            } else if b_bounds.known_lt_const(0) {
                self.make_lt(res, a)?;
            }
            if a_bounds.known_gt_const(0) {
                self.make_lt(b, res)?;
            } else if a_bounds.known_lt_const(0) {
                self.make_lt(res, b)?;
            }
        }
        Ok(res)
    }

    /// `self - other`.
    pub fn sub(&mut self, a: OrderNode, b: OrderNode) -> Result<OrderNode, ContradictionInvalidLoop> {
        let a_bounds = *self.bounds(a);
        let b_bounds = *self.bounds(b);
        let mut result_bounds = a_bounds.sub_bound(&b_bounds);
        let cannot_overflow = a_bounds.sub_bound_cannot_overflow(&b_bounds);
        if cannot_overflow {
            // Refine the result's bounds against zero using facts the
            // order graph alone establishes about the operands, not the
            // combined bounds+graph known_lt, so a bound-only fact about
            // an unrelated node can't leak in through the operands.
            if self.known_lt_via_graph(a, b) {
                result_bounds.make_lt_const(0);
            } else if self.known_lt_via_graph(b, a) {
                result_bounds.make_gt_const(0);
            }
        }
        let res = self.new_node_with_bounds(result_bounds);
        if cannot_overflow {
            if b_bounds.known_gt_const(0) {
                self.make_lt(res, a)?;
            } else if b_bounds.known_lt_const(0) {
                self.make_lt(a, res)?;
            }
        }
        Ok(res)
    }

    /// `self * other`.
    ///
    /// Each sign case is guarded by both the no-overflow predicate and
    /// the operand-sign check; when a case is ambiguous (an operand
    /// interval straddling zero, say), no edge is added rather than
    /// risk an unsound one.
    pub fn mul(&mut self, a: OrderNode, b: OrderNode) -> Result<OrderNode, ContradictionInvalidLoop> {
        let a_bounds = *self.bounds(a);
        let b_bounds = *self.bounds(b);
        let result_bounds = a_bounds.mul_bound(&b_bounds);
        let res = self.new_node_with_bounds(result_bounds);
        if a_bounds.mul_bound_cannot_overflow(&b_bounds) {
            if b_bounds.known_gt_const(1) {
                if a_bounds.known_gt_const(0) {
                    self.make_lt(a, res)?;
                } else if a_bounds.known_lt_const(0) {
                    self.make_lt(res, a)?;
                }
            }
            if a_bounds.known_gt_const(1) {
                if b_bounds.known_gt_const(0) {
                    self.make_lt(b, res)?;
                } else if b_bounds.known_lt_const(0) {
                    self.make_lt(res, b)?;
                }
            }
        }
        Ok(res)
    }
}
