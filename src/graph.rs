//! The order graph arena and node handle, plus the monotonic refinement
//! and query operations that make up the bulk of this crate.
//!
//! `OrderGraph` owns every node created for one trace. `OrderNode` is a
//! small `Copy` handle into that arena, which sidesteps the
//! non-owning-reference problem a language without a tracing GC would
//! otherwise hit: instead of a raw pointer to another node, an edge just
//! stores an index that is only ever resolved through the owning
//! `OrderGraph`.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::bound::IntBound;
use crate::error::ContradictionInvalidLoop;
use crate::node::NodeData;
use crate::query;
use crate::relation::Relation;

/// A handle identifying one node in an [`OrderGraph`].
///
/// Two handles are equal iff they index the same node. Comparison is by
/// identity, not by structural equality: two nodes created with equal
/// bounds still compare unequal, because they represent distinct
/// program variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderNode(u32);

impl OrderNode {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// The arena owning every [`OrderNode`] created for one trace.
///
/// Dropping the `OrderGraph` (e.g. because the optimizer abandoned the
/// trace) drops every node it owns together; there is no way to destroy
/// a single node early. Nodes live and die with their enclosing trace.
#[derive(Clone, Debug, Default)]
pub struct OrderGraph {
    nodes: Vec<NodeData>,
}

impl OrderGraph {
    pub fn new() -> Self {
        OrderGraph { nodes: Vec::new() }
    }

    /// Create a fresh node with unbounded `IntBound` and no relations.
    pub fn new_node(&mut self) -> OrderNode {
        self.new_node_with_bounds(IntBound::unbounded())
    }

    /// Create a fresh node with the given bounds and no relations.
    pub fn new_node_with_bounds(&mut self, bounds: IntBound) -> OrderNode {
        let id = OrderNode(self.nodes.len() as u32);
        self.nodes.push(NodeData::new(bounds));
        id
    }

    pub fn bounds(&self, node: OrderNode) -> &IntBound {
        &self.nodes[node.index()].bounds
    }

    pub(crate) fn relations(&self, node: OrderNode) -> &[Relation] {
        &self.nodes[node.index()].relations
    }

    /// Number of outgoing edges currently stored on `node`. Exposed
    /// mainly for tests that assert idempotence and upgrade behavior:
    /// repeated or strengthened refinements must never grow the edge
    /// list beyond one entry per target.
    pub fn relation_count(&self, node: OrderNode) -> usize {
        self.nodes[node.index()].relations.len()
    }

    // --- queries -----------------------------------------------------

    /// Is `a` provably strictly less than `b`?
    ///
    /// Consults bounds first (cheap), then falls back to the transitive
    /// query engine.
    pub fn known_lt(&self, a: OrderNode, b: OrderNode) -> bool {
        if a == b {
            return false;
        }
        self.bounds(a).known_lt(self.bounds(b)) || self.known_lt_via_graph(a, b)
    }

    pub(crate) fn known_lt_via_graph(&self, a: OrderNode, b: OrderNode) -> bool {
        query::longest_strictness_cutoff(self, a, b, Some(1)) >= 1
    }

    /// Is `a` provably less than or equal to `b`? Always true when `a`
    /// and `b` are the same node: a node is trivially `<= itself`
    /// without needing any stored edge.
    pub fn known_le(&self, a: OrderNode, b: OrderNode) -> bool {
        a == b || self.bounds(a).known_le(self.bounds(b)) || self.known_le_via_graph(a, b)
    }

    pub(crate) fn known_le_via_graph(&self, a: OrderNode, b: OrderNode) -> bool {
        query::reachable(self, a, b)
    }

    /// Is `a` provably not equal to `b`?
    pub fn known_ne(&self, a: OrderNode, b: OrderNode) -> bool {
        self.bounds(a).known_ne(self.bounds(b)) || self.known_lt(a, b) || self.known_lt(b, a)
    }

    // --- refinements ---------------------------------------------------

    /// Strengthen the abstract state to record `a < b`.
    ///
    /// A no-op if already implied. Fails with
    /// [`ContradictionInvalidLoop`] if `a` and `b` are the same node, or
    /// if `b` is already known (via bounds or the graph) to be `< a`.
    /// Either would make the new edge close a strict cycle.
    pub fn make_lt(&mut self, a: OrderNode, b: OrderNode) -> Result<(), ContradictionInvalidLoop> {
        if self.bounds(a).known_lt(self.bounds(b)) {
            return Ok(());
        }
        self.refine_bounds_lt(a, b);
        self.make_lt_graph(a, b)
    }

    fn refine_bounds_lt(&mut self, a: OrderNode, b: OrderNode) {
        let other = *self.bounds(b);
        self.nodes[a.index()].bounds.make_lt(&other);
    }

    fn make_lt_graph(&mut self, a: OrderNode, b: OrderNode) -> Result<(), ContradictionInvalidLoop> {
        if a == b || self.known_lt(b, a) {
            return Err(ContradictionInvalidLoop);
        }
        if self.known_lt(a, b) {
            return Ok(());
        }
        let relations = &mut self.nodes[a.index()].relations;
        if let Some(existing) = relations.iter_mut().find(|r| r.target() == b) {
            *existing = Relation::Strict(b);
        } else {
            relations.push(Relation::Strict(b));
        }
        Ok(())
    }

    /// Strengthen the abstract state to record `a <= b`.
    ///
    /// A no-op if already implied. Fails with
    /// [`ContradictionInvalidLoop`] if `b` is already known to be `< a`.
    /// Equality cycles (`a <= b` and `b <= a`) are always permitted.
    pub fn make_le(&mut self, a: OrderNode, b: OrderNode) -> Result<(), ContradictionInvalidLoop> {
        if self.bounds(a).known_le(self.bounds(b)) {
            return Ok(());
        }
        self.refine_bounds_le(a, b);
        self.make_le_graph(a, b)
    }

    fn refine_bounds_le(&mut self, a: OrderNode, b: OrderNode) {
        let other = *self.bounds(b);
        self.nodes[a.index()].bounds.make_le(&other);
    }

    fn make_le_graph(&mut self, a: OrderNode, b: OrderNode) -> Result<(), ContradictionInvalidLoop> {
        if self.known_lt(b, a) {
            return Err(ContradictionInvalidLoop);
        }
        if self.known_le(a, b) {
            return Ok(());
        }
        self.nodes[a.index()].relations.push(Relation::NonStrict(b));
        Ok(())
    }

    // --- validation ----------------------------------------------------

    /// Validate a full concrete assignment: every node's bounds must
    /// contain its value, and every stored edge whose target is also
    /// present in `mapping` must hold for the two concrete values.
    pub fn contains_mapping(&self, mapping: &HashMap<OrderNode, i64>) -> bool {
        for (&node, &value) in mapping {
            if !self.bounds(node).contains(value) {
                return false;
            }
            for relation in self.relations(node) {
                let Some(&other_value) = mapping.get(&relation.target()) else {
                    continue;
                };
                if !relation.concrete_check(value, other_value) {
                    return false;
                }
            }
        }
        true
    }

    /// Validate a single node's bounds against one concrete value,
    /// without touching the relation graph.
    pub fn contains_value(&self, node: OrderNode, value: i64) -> bool {
        self.bounds(node).contains(value)
    }

    // --- pretty-printing -------------------------------------------------

    /// A deterministic, human-readable rendering of `node` and every
    /// node transitively reachable from it, for debugging and tests.
    /// Not a stable machine format.
    pub fn pp(&self, node: OrderNode) -> String {
        let mut seen = HashMap::new();
        let mut out = String::new();
        self.pp_into(&mut out, node, 0, 4, "", &mut seen);
        out
    }

    fn pp_into(
        &self,
        out: &mut String,
        node: OrderNode,
        indent: usize,
        indent_inc: usize,
        prefix: &str,
        seen: &mut HashMap<OrderNode, String>,
    ) {
        let indent_prefix = " ".repeat(indent);
        let op_pfx = if prefix.is_empty() {
            String::new()
        } else {
            format!("{prefix} ")
        };
        if let Some(name) = seen.get(&node) {
            let _ = write!(out, "{indent_prefix}{op_pfx}{name}");
            return;
        }
        let name = format!("i{}", seen.len());
        seen.insert(node, name.clone());

        let relations = self.relations(node);
        if relations.is_empty() {
            let _ = write!(out, "{indent_prefix}{op_pfx}{name} = OrderNode({})", self.bounds(node));
        } else {
            let _ = writeln!(out, "{indent_prefix}{op_pfx}{name} = OrderNode({}  {{", self.bounds(node));
            for (i, relation) in relations.iter().enumerate() {
                let child_prefix = if relation.is_strict() { "<" } else { "<=" };
                self.pp_into(out, relation.target(), indent + indent_inc, indent_inc, child_prefix, seen);
                if i + 1 != relations.len() {
                    out.push('\n');
                }
            }
            let _ = write!(out, "\n{}{}}})", indent_prefix, " ".repeat(op_pfx.len()));
        }
    }
}
