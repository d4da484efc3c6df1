//! The transitive query engine.
//!
//! Answers "is there a directed path from `source` to `target` whose
//! summed strictness is >= s?" for `s` in `{0, 1}`. Because paths may mix
//! strict (weight 1) and non-strict (weight 0) edges, this is a
//! longest-path-in-a-DAG search, not plain reachability: `a <= b <= c`
//! does not prove `a < c`, but `a <= b < c` does.

use std::collections::{BinaryHeap, HashMap};

use crate::graph::{OrderGraph, OrderNode};

/// The largest strictness sum (number of strict edges, net of
/// non-strict hops contributing 0) found on any directed path from
/// `source` to `target`, or `-1` if `target` is unreachable from
/// `source`.
///
/// This is a label-correcting search, not plain Dijkstra: a node may be
/// re-enqueued whenever a path through it is found with a *larger*
/// strictness sum than previously recorded, which is what lets the
/// search find `a <= b < c` after already having seen the weaker `a <=
/// b <= c`. Since edge weights are non-negative and the graph is acyclic
/// with respect to strict edges, this terminates: a node can only be
/// re-enqueued as many times as there are strict edges on a simple path
/// reaching it.
pub(crate) fn longest_strictness(graph: &OrderGraph, source: OrderNode, target: OrderNode) -> i64 {
    longest_strictness_cutoff(graph, source, target, None)
}

/// As [`longest_strictness`], but stops early once `best[target] >=
/// cutoff`.
pub(crate) fn longest_strictness_cutoff(
    graph: &OrderGraph,
    source: OrderNode,
    target: OrderNode,
    cutoff: Option<i64>,
) -> i64 {
    let mut best: HashMap<OrderNode, i64> = HashMap::new();
    best.insert(source, 0);
    let mut frontier = BinaryHeap::new();
    frontier.push((0i64, source));

    while let Some((dist, current)) = frontier.pop() {
        // A node may appear several times in the heap with different
        // (stale) scores; only act on the freshest one.
        if best.get(&current).copied().unwrap_or(i64::MIN) > dist {
            continue;
        }
        for relation in graph.relations(current) {
            let candidate = dist + relation.min_margin();
            let next = relation.target();
            let improves = match best.get(&next) {
                Some(&existing) => candidate > existing,
                None => true,
            };
            if improves {
                best.insert(next, candidate);
                frontier.push((candidate, next));
            }
        }
        if let Some(cutoff) = cutoff {
            if best.get(&target).copied().unwrap_or(-1) >= cutoff {
                break;
            }
        }
    }

    best.get(&target).copied().unwrap_or(-1)
}

/// Plain `<=` reachability: is there *any* directed path (of any length,
/// mixing strict and non-strict edges indiscriminately) from `source` to
/// `target`? Unlike [`longest_strictness`], a node is only ever visited
/// once here, since no weight needs maximizing.
pub(crate) fn reachable(graph: &OrderGraph, source: OrderNode, target: OrderNode) -> bool {
    let mut todo: Vec<OrderNode> = graph
        .relations(source)
        .iter()
        .map(|r| r.target())
        .collect();
    let mut seen = std::collections::HashSet::new();
    while let Some(node) = todo.pop() {
        if node == target {
            return true;
        }
        if !seen.insert(node) {
            continue;
        }
        todo.extend(graph.relations(node).iter().map(|r| r.target()));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OrderGraph;

    #[test]
    fn diamond_mixed_edges_proves_strict() {
        // a <= b, a < c, b <= d, c <= d  =>  a < d via a < c <= d
        let mut g = OrderGraph::new();
        let a = g.new_node();
        let b = g.new_node();
        let c = g.new_node();
        let d = g.new_node();
        g.make_le(a, b).unwrap();
        g.make_lt(a, c).unwrap();
        g.make_le(b, d).unwrap();
        g.make_le(c, d).unwrap();

        assert_eq!(longest_strictness(&g, a, d), 1);
        assert!(reachable(&g, a, d));
    }

    #[test]
    fn unreachable_returns_minus_one() {
        let mut g = OrderGraph::new();
        let a = g.new_node();
        let b = g.new_node();
        assert_eq!(longest_strictness(&g, a, b), -1);
        assert!(!reachable(&g, a, b));
    }
}
