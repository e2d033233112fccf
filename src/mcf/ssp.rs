/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The successive shortest path algorithm for minimum cost flows.
//!
//! Each iteration computes a shortest path from the source to the
//! sink in the residual network w.r.t. the reduced costs
//! `cost(u,v) + pi(u) - pi(v)`, updates the node potentials `pi` so
//! that all reduced costs stay non-negative (and the arcs on shortest
//! paths get reduced cost 0) and augments along the path. Because of
//! the potentials Dijkstra's algorithm can be used in every iteration.
//!
//! # Example
//!
//! ```
//! use rs_flow::mcf::successive_shortest_path;
//!
//! let arcs = vec![(0, 1, 1, 1), (1, 2, 1, 0), (0, 2, 2, 1)];
//! let (value, cost, flow) = successive_shortest_path(3, arcs, 0, 2);
//!
//! assert_eq!((value, cost), (3, 3));
//! assert_eq!(flow, vec![1, 1, 2]);
//! ```

use crate::collections::BinHeap;
use crate::residual::ResidualGraph;
use crate::traits::{Capacity, Cost};

use log::{debug, trace};
use std::cmp::min;

use super::MinCostFlowGraph;

/// The successive shortest path algorithm.
///
/// The node potentials must be feasible, i.e. all residual arcs must
/// have non-negative reduced cost.
pub(crate) struct SuccessiveShortestPath<'a, F, W> {
    g: &'a mut ResidualGraph<F, W>,
    potential: &'a mut [W],
    /// Reduced distance from the source.
    dist: Vec<W>,
    /// Whether the distance of a node is final.
    done: Vec<bool>,
    /// The incoming arc (node, slot) on the shortest path tree.
    pred: Vec<(usize, usize)>,
    heap: BinHeap<usize, W>,
    /// Nodes with the same distance as the node being scanned.
    ties: Vec<usize>,
}

impl<'a, F, W> SuccessiveShortestPath<'a, F, W>
where
    F: Capacity,
    W: Cost<F>,
{
    pub fn new(g: &'a mut ResidualGraph<F, W>, potential: &'a mut [W]) -> Self {
        let n = g.num_nodes();
        SuccessiveShortestPath {
            g,
            potential,
            dist: vec![W::zero(); n],
            done: vec![false; n],
            pred: vec![(0, 0); n],
            heap: BinHeap::new(),
            ties: vec![],
        }
    }

    /// Send at most `limit` units of flow from `src` to `snk`.
    ///
    /// Returns the breakpoints of the cost curve.
    pub fn solve(&mut self, src: usize, snk: usize, limit: F) -> Vec<(F, W)> {
        let mut flow = F::zero();
        let mut cost = W::zero();
        let mut last_slope = None;
        let mut result = vec![(flow, cost)];
        let mut npaths = 0;

        while flow < limit {
            if !self.search(src, snk) {
                break;
            }
            npaths += 1;

            let mut df = limit - flow;
            let mut v = snk;
            while v != src {
                let (u, slot) = self.pred[v];
                df = min(df, self.g.arc(u, slot).cap);
                v = u;
            }
            let mut v = snk;
            while v != src {
                let (u, slot) = self.pred[v];
                self.g.push(u, slot, df);
                v = u;
            }

            // all arcs on the path have reduced cost 0 now
            let d = self.potential[snk] - self.potential[src];
            flow += df;
            cost += W::from(df) * d;
            trace!("Path {}: augment {:?} at cost {:?} per unit", npaths, df, d);

            if last_slope == Some(d) {
                result.pop();
            }
            result.push((flow, cost));
            last_slope = Some(d);
        }

        // only differences of potentials matter, keep them small
        let ps = self.potential[src];
        if !ps.is_zero() {
            for p in self.potential.iter_mut() {
                *p -= ps;
            }
        }

        debug!(
            "Successive shortest path {} -> {}: flow {:?}, cost {:?}, {} paths, {} breakpoints",
            src,
            snk,
            flow,
            cost,
            npaths,
            result.len()
        );
        result
    }

    /// Compute shortest paths w.r.t. reduced costs and update the potentials.
    ///
    /// Returns `true` if `snk` is reachable. The search stops as soon as
    /// the distance of `snk` is final, only nodes with final distance
    /// get their potential updated.
    fn search(&mut self, src: usize, snk: usize) -> bool {
        let inf = W::max_value();
        for d in &mut self.dist {
            *d = inf;
        }
        for d in &mut self.done {
            *d = false;
        }
        self.heap.clear();
        self.ties.clear();

        self.dist[src] = W::zero();
        self.ties.push(src);

        loop {
            let u = if let Some(u) = self.ties.pop() {
                u
            } else if let Some((u, _)) = self.heap.pop_min() {
                u
            } else {
                break;
            };
            if self.done[u] {
                continue;
            }
            self.done[u] = true;
            if u == snk {
                break;
            }

            let du = self.dist[u];
            let pu = self.potential[u];
            for (slot, a) in self.g.outarcs(u).iter().enumerate() {
                if a.cap.is_zero() {
                    continue;
                }
                let v = a.to;
                let rcost = a.cost - self.potential[v] + pu;
                // dist[v] - du cannot overflow because du >= 0
                if self.dist[v] - du > rcost {
                    let dv = du + rcost;
                    self.dist[v] = dv;
                    self.pred[v] = (u, slot);
                    if dv == du {
                        self.ties.push(v);
                    } else {
                        self.heap.push(v, dv);
                    }
                }
            }
        }

        if !self.done[snk] {
            return false;
        }

        let dt = self.dist[snk];
        for u in 0..self.dist.len() {
            if self.done[u] {
                self.potential[u] -= dt - self.dist[u];
            }
        }

        true
    }
}

/// Solve the min-cost-flow problem with successive shortest paths.
///
/// The function sends as much flow as possible from `src` to `snk`
/// at minimal cost in a network with `n` nodes and the given `edges`
/// as `(from, to, capacity, cost)` tuples.
///
/// The function returns the flow value, its cost and the flow on each
/// edge (in the order of `edges`).
pub fn successive_shortest_path<F, W, Es>(n: usize, edges: Es, src: usize, snk: usize) -> (F, W, Vec<F>)
where
    F: Capacity,
    W: Cost<F>,
    Es: IntoIterator<Item = (usize, usize, F, W)>,
{
    let mut g = MinCostFlowGraph::new(n);
    for (u, v, c, w) in edges {
        g.add_edge(u, v, c, w);
    }
    let (value, cost) = g.flow(src, snk);
    (value, cost, g.edges().into_iter().map(|e| e.flow).collect())
}

#[cfg(test)]
mod tests {
    use crate::mcf::{Edge, MinCostFlowGraph};

    fn edge<F, W>(from: usize, to: usize, cap: F, flow: F, cost: W) -> Edge<F, W> {
        Edge {
            from,
            to,
            cap,
            flow,
            cost,
        }
    }

    #[test]
    fn test_simple() {
        let mut g = MinCostFlowGraph::new(4);
        g.add_edge(0, 1, 1, 1);
        g.add_edge(0, 2, 1, 1);
        g.add_edge(1, 3, 1, 1);
        g.add_edge(2, 3, 1, 1);
        g.add_edge(1, 2, 1, 1);
        assert_eq!(g.slope_with_limit(0, 3, 10), vec![(0, 0), (2, 4)]);

        assert_eq!(
            g.edges(),
            vec![
                edge(0, 1, 1, 1, 1),
                edge(0, 2, 1, 1, 1),
                edge(1, 3, 1, 1, 1),
                edge(2, 3, 1, 1, 1),
                edge(1, 2, 1, 0, 1),
            ]
        );
    }

    #[test]
    fn test_usage() {
        let mut g = MinCostFlowGraph::new(2);
        g.add_edge(0, 1, 1, 2);
        assert_eq!(g.flow(0, 1), (1, 2));

        let mut g = MinCostFlowGraph::new(2);
        g.add_edge(0, 1, 1, 2);
        assert_eq!(g.slope(0, 1), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_cast() {
        let mut g = MinCostFlowGraph::<i32, i64>::new(4);
        g.add_edge(0, 1, 1 << 28, 1 << 33);
        g.add_edge(0, 1, 1, 1);
        assert_eq!(g.slope(0, 1), vec![(0, 0), (1, 1), ((1 << 28) + 1, (1 << 61) + 1)]);
        assert_eq!(g.edge(0), edge(0, 1, 1 << 28, 1 << 28, 1 << 33));
        assert_eq!(g.edge(1), edge(0, 1, 1, 1, 1));
    }

    #[test]
    fn test_self_loop() {
        let mut g = MinCostFlowGraph::new(3);
        assert_eq!(g.add_edge(0, 0, 100, 123), 0);
        assert_eq!(g.edge(0), edge(0, 0, 100, 0, 123));
        g.add_edge(0, 1, 2, 0);
        assert_eq!(g.flow(0, 1), (2, 0));
        assert_eq!(g.edge(0), edge(0, 0, 100, 0, 123));
    }

    #[test]
    fn test_same_cost_paths() {
        let mut g = MinCostFlowGraph::new(3);
        assert_eq!(g.add_edge(0, 1, 1, 1), 0);
        assert_eq!(g.add_edge(1, 2, 1, 0), 1);
        assert_eq!(g.add_edge(0, 2, 2, 1), 2);
        assert_eq!(g.slope(0, 2), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_limit() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 2, 1);
        g.add_edge(1, 2, 2, 1);
        g.add_edge(0, 2, 1, 5);
        assert_eq!(g.slope_with_limit(0, 2, 1), vec![(0, 0), (1, 2)]);
        assert_eq!(g.flow_with_limit(0, 2, 0), (0, 0));
        // the second call continues from the current flow
        assert_eq!(g.slope(0, 2), vec![(0, 0), (1, 2), (2, 7)]);
        assert_eq!(g.flow(0, 2), (0, 0));
        assert_eq!(g.edges().iter().map(|e| e.flow * e.cost).sum::<i32>(), 9);
    }

    #[test]
    fn test_reverse_call() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 2, 1);
        g.add_edge(1, 2, 2, 4);
        g.add_edge(2, 0, 1, 1);
        assert_eq!(g.flow(0, 2), (2, 10));
        // sending back from 2 to 0 cancels flow first, at negative cost
        assert_eq!(g.slope(2, 0), vec![(0, 0), (2, -10), (3, -9)]);
        assert_eq!(g.edges(), vec![edge(0, 1, 2, 0, 1), edge(1, 2, 2, 0, 4), edge(2, 0, 1, 1, 1)]);
    }

    #[test]
    fn test_change_edge() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 1, 1);
        g.add_edge(0, 1, 1, 5);
        g.add_edge(1, 2, 1, 0);
        g.change_edge(0, 1, 1);
        g.change_edge(2, 1, 1);
        assert_eq!(g.flow(0, 2), (0, 0));

        g.change_edge(2, 2, 1);
        assert_eq!(g.flow(0, 2), (1, 5));
        assert_eq!(g.edges(), vec![edge(0, 1, 1, 1, 1), edge(0, 1, 1, 1, 5), edge(1, 2, 2, 2, 0)]);
    }

    #[test]
    fn test_add_edge_after_flow() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 1, 3);
        assert_eq!(g.flow(0, 1), (1, 3));
        // the new edges have negative reduced cost w.r.t. the current potentials
        g.add_edge(0, 2, 1, 2);
        g.add_edge(2, 1, 1, 2);
        assert_eq!(g.flow(0, 1), (1, 4));
    }

    #[test]
    fn test_cheaper_edge_after_flow() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 1, 3);
        assert_eq!(g.flow(0, 1), (1, 3));
        // the new path 0 -> 2 -> 1 is cheaper, the unit is rerouted
        g.add_edge(0, 2, 1, 1);
        g.add_edge(2, 1, 1, 1);
        assert_eq!(g.flow(0, 1), (1, 3));
        assert_eq!(g.edges(), vec![edge(0, 1, 1, 1, 3), edge(0, 2, 1, 1, 1), edge(2, 1, 1, 1, 1)]);
    }

    #[test]
    fn test_seeded_expensive_flow() {
        let mut g = MinCostFlowGraph::new(3);
        g.add_edge(0, 1, 1, 1);
        g.add_edge(0, 1, 1, 5);
        g.add_edge(1, 2, 1, 0);
        // the expensive edge carries flow although the cheap one is free
        g.change_edge(1, 1, 1);
        assert_eq!(g.flow(0, 2), (1, 5));
        assert_eq!(g.edges(), vec![edge(0, 1, 1, 1, 1), edge(0, 1, 1, 1, 5), edge(1, 2, 1, 1, 0)]);
    }

    #[test]
    fn test_potentials_stay_bounded() {
        let c = 1 << 28;
        let mut g = MinCostFlowGraph::<i32, i32>::new(2);
        g.add_edge(0, 1, 1, c);
        g.add_edge(1, 0, 1, c);
        assert_eq!(g.flow(0, 1), (1, c));
        // each call cancels the previous flow and sends a new unit
        for _ in 0..50 {
            assert_eq!(g.flow(1, 0), (2, 0));
            assert_eq!(g.flow(0, 1), (2, 0));
        }
    }

    #[test]
    #[should_panic(expected = "Source and sink node must not be equal")]
    fn test_same_terminals() {
        let mut g = MinCostFlowGraph::<i32, i32>::new(10);
        g.slope(3, 3);
    }

    #[test]
    #[should_panic(expected = "Invalid source node")]
    fn test_invalid_source() {
        let mut g = MinCostFlowGraph::<i32, i32>::new(10);
        g.slope(10, 3);
    }

    #[test]
    #[should_panic(expected = "Capacity must be non-negative")]
    fn test_negative_capacity() {
        let mut g = MinCostFlowGraph::<i32, i32>::new(2);
        g.add_edge(0, 0, -1, 0);
    }

    #[test]
    #[should_panic(expected = "Cost must be non-negative")]
    fn test_negative_cost() {
        let mut g = MinCostFlowGraph::<i32, i32>::new(2);
        g.add_edge(0, 0, 0, -1);
    }
}
