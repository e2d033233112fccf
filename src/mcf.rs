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

//! Minimum Cost Flow algorithms.
//!
//! A [`MinCostFlowGraph`] stores a network with non-negative arc costs
//! together with its current flow. [`MinCostFlowGraph::slope`] sends
//! flow from a source to a sink along successive shortest paths and
//! returns the minimal cost as a function of the flow value: a convex
//! piecewise linear function given by its breakpoints.
//!
//! # Example
//!
//! ```
//! use rs_flow::mcf::{Edge, MinCostFlowGraph};
//!
//! let mut g = MinCostFlowGraph::new(4);
//! g.add_edge(0, 1, 2, 1);
//! g.add_edge(0, 2, 1, 3);
//! g.add_edge(1, 3, 1, 1);
//! g.add_edge(2, 3, 2, 1);
//! g.add_edge(1, 2, 1, 1);
//!
//! // the marginal cost grows from 2 to 3 to 4
//! assert_eq!(g.slope(0, 3), vec![(0, 0), (1, 2), (2, 5), (3, 9)]);
//! assert_eq!(g.edge(4), Edge { from: 1, to: 2, cap: 1, flow: 1, cost: 1 });
//! ```
//!
//! Different types for capacities and costs can be used as long as
//! the capacity type converts into the cost type:
//!
//! ```
//! use rs_flow::mcf::MinCostFlowGraph;
//!
//! let mut g = MinCostFlowGraph::<u32, i64>::new(2);
//! g.add_edge(0, 1, u32::MAX, 1 << 20);
//! assert_eq!(g.flow(0, 1), (u32::MAX, (u32::MAX as i64) << 20));
//! ```

pub mod ssp;
pub use self::ssp::successive_shortest_path;

use self::ssp::SuccessiveShortestPath;
use crate::residual::ResidualGraph;
use crate::shortestpath::moorebellmanford;
use crate::traits::{Capacity, Cost};

use log::{debug, trace};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The public view of an edge of a min-cost-flow network.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<F, W> {
    /// The source node.
    pub from: usize,
    /// The sink node.
    pub to: usize,
    /// The capacity.
    pub cap: F,
    /// The current flow, always in `0..=cap`.
    pub flow: F,
    /// The cost per unit of flow.
    pub cost: W,
}

/// A network for minimum cost flow computations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MinCostFlowGraph<F, W> {
    g: ResidualGraph<F, W>,
    /// The node potentials.
    potential: Vec<W>,
    /// Whether all residual arcs have non-negative reduced cost w.r.t. `potential`.
    feasible: bool,
}

impl<F, W> MinCostFlowGraph<F, W>
where
    F: Capacity,
    W: Cost<F>,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        MinCostFlowGraph {
            g: ResidualGraph::new(n),
            potential: vec![W::zero(); n],
            feasible: true,
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.g.num_nodes()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.g.num_edges()
    }

    /// Return the underlying residual network.
    pub fn as_residual(&self) -> &ResidualGraph<F, W> {
        &self.g
    }

    /// Add an edge from `from` to `to` with capacity `cap`, cost `cost` and flow 0.
    ///
    /// Returns the index of the new edge, edges are numbered
    /// consecutively starting at 0.
    ///
    /// If edges are added after some flow has been computed, the
    /// current flow may no longer be cost-optimal. The next flow
    /// computation then reroutes it first (see `change_edge`).
    pub fn add_edge(&mut self, from: usize, to: usize, cap: F, cost: W) -> usize {
        assert!(cost >= W::zero(), "Cost must be non-negative");
        let e = self.g.add_edge(from, to, cap, cost, -cost);
        if cap > F::zero() && cost + self.potential[from] - self.potential[to] < W::zero() {
            self.feasible = false;
        }
        e
    }

    /// Return the current state of edge `i`.
    pub fn edge(&self, i: usize) -> Edge<F, W> {
        let (from, fwd, rev) = self.g.arc_pair(i);
        Edge {
            from,
            to: fwd.to,
            cap: fwd.cap + rev.cap,
            flow: rev.cap,
            cost: fwd.cost,
        }
    }

    /// Return the current state of all edges in insertion order.
    pub fn edges(&self) -> Vec<Edge<F, W>> {
        (0..self.num_edges()).map(|i| self.edge(i)).collect()
    }

    /// Change capacity and flow of edge `i`.
    ///
    /// Requires `0 <= new_flow <= new_cap`. The flow of the other
    /// edges is not changed.
    ///
    /// The next flow computation recomputes the node potentials. If
    /// the flow on the edges is not cost-optimal at that time, it is
    /// rerouted along negative cost cycles of the residual network
    /// until it is. The flow value of every node stays the same, the
    /// cost saved by the rerouting is not part of the returned cost.
    pub fn change_edge(&mut self, i: usize, new_cap: F, new_flow: F) {
        self.g.change_edge(i, new_cap, new_flow);
        self.feasible = false;
    }

    /// Send as much flow as possible from `src` to `snk` at minimal cost.
    ///
    /// Returns the amount of flow added and its cost.
    pub fn flow(&mut self, src: usize, snk: usize) -> (F, W) {
        self.flow_with_limit(src, snk, F::max_value())
    }

    /// Send at most `limit` units of flow from `src` to `snk` at minimal cost.
    ///
    /// Returns the amount of flow added and its cost.
    pub fn flow_with_limit(&mut self, src: usize, snk: usize, limit: F) -> (F, W) {
        let slope = self.slope_with_limit(src, snk, limit);
        slope[slope.len() - 1]
    }

    /// Send as much flow as possible from `src` to `snk` at minimal cost.
    ///
    /// Returns the breakpoints of the cost function, see `slope_with_limit`.
    pub fn slope(&mut self, src: usize, snk: usize) -> Vec<(F, W)> {
        self.slope_with_limit(src, snk, F::max_value())
    }

    /// Send at most `limit` units of flow from `src` to `snk` at minimal cost.
    ///
    /// Returns the breakpoints `(flow, cost)` of the minimal cost of
    /// sending a certain amount of flow. The first breakpoint is
    /// always `(0, 0)`, the last one is the total amount of flow
    /// added and its cost. The marginal cost changes at every
    /// breakpoint.
    pub fn slope_with_limit(&mut self, src: usize, snk: usize, limit: F) -> Vec<(F, W)> {
        let n = self.num_nodes();
        assert!(src < n, "Invalid source node {} (must be in 0..{})", src, n);
        assert!(snk < n, "Invalid sink node {} (must be in 0..{})", snk, n);
        assert_ne!(src, snk, "Source and sink node must not be equal");

        if !self.feasible {
            self.update_potentials();
        }

        SuccessiveShortestPath::new(&mut self.g, &mut self.potential).solve(src, snk, limit)
    }

    /// Recompute the node potentials, cancel negative cycles first.
    fn update_potentials(&mut self) {
        debug!("Recomputing node potentials");
        let mut ncycles = 0;
        loop {
            let (dist, cycle) = moorebellmanford::potentials(&self.g);
            let cycle = match cycle {
                Some(cycle) => cycle,
                None => {
                    self.potential = dist;
                    self.feasible = true;
                    break;
                }
            };

            let mut df = F::max_value();
            for &(u, slot) in &cycle {
                df = df.min(self.g.arc(u, slot).cap);
            }
            trace!("Cancel negative cycle of length {} by {:?}", cycle.len(), df);
            for &(u, slot) in &cycle {
                self.g.push(u, slot, df);
            }
            ncycles += 1;
        }
        if ncycles > 0 {
            debug!("Cancelled {} negative cycles", ncycles);
        }
    }
}
