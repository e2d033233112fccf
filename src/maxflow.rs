// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Maximum flow algorithms.
//!
//! A [`MaxFlowGraph`] stores a network together with its current flow.
//! Each call to [`MaxFlowGraph::flow`] increases the flow from some
//! source to some sink as much as possible and returns the amount
//! added, so calls can be combined (e.g. first send flow from `s` to
//! `t`, then cancel some of it by sending flow from `t` to `s`).
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::{Edge, MaxFlowGraph};
//!
//! let mut g = MaxFlowGraph::new(4);
//! g.add_edge(0, 1, 1);
//! g.add_edge(0, 2, 1);
//! g.add_edge(1, 3, 1);
//! g.add_edge(2, 3, 1);
//! g.add_edge(1, 2, 1);
//!
//! assert_eq!(g.flow(0, 3), 2);
//! assert_eq!(g.edge(4), Edge { from: 1, to: 2, cap: 1, flow: 0 });
//! assert_eq!(g.min_cut(0), vec![true, false, false, false]);
//!
//! // send one unit back
//! assert_eq!(g.flow_with_limit(3, 0, 1), 1);
//! assert_eq!(g.edges().iter().map(|e| e.flow).sum::<i32>(), 2);
//! ```

pub mod dinic;
pub use self::dinic::{dinic, Dinic};

use crate::residual::ResidualGraph;
use crate::traits::Capacity;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The public view of an edge of a max-flow network.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<F> {
    /// The source node.
    pub from: usize,
    /// The sink node.
    pub to: usize,
    /// The capacity.
    pub cap: F,
    /// The current flow, always in `0..=cap`.
    pub flow: F,
}

/// A network for maximum flow computations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MaxFlowGraph<F> {
    g: ResidualGraph<F>,
}

impl<F> MaxFlowGraph<F>
where
    F: Capacity,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        MaxFlowGraph {
            g: ResidualGraph::new(n),
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
    pub fn as_residual(&self) -> &ResidualGraph<F> {
        &self.g
    }

    /// Add an edge from `from` to `to` with capacity `cap` and flow 0.
    ///
    /// Returns the index of the new edge, edges are numbered
    /// consecutively starting at 0.
    pub fn add_edge(&mut self, from: usize, to: usize, cap: F) -> usize {
        self.g.add_edge(from, to, cap, (), ())
    }

    /// Return the current state of edge `i`.
    pub fn edge(&self, i: usize) -> Edge<F> {
        let (from, fwd, rev) = self.g.arc_pair(i);
        Edge {
            from,
            to: fwd.to,
            cap: fwd.cap + rev.cap,
            flow: rev.cap,
        }
    }

    /// Return the current state of all edges in insertion order.
    pub fn edges(&self) -> Vec<Edge<F>> {
        (0..self.num_edges()).map(|i| self.edge(i)).collect()
    }

    /// Change capacity and flow of edge `i`.
    ///
    /// Requires `0 <= new_flow <= new_cap`. The flow of the other
    /// edges is not changed.
    pub fn change_edge(&mut self, i: usize, new_cap: F, new_flow: F) {
        self.g.change_edge(i, new_cap, new_flow)
    }

    /// Augment the flow from `src` to `snk` as much as possible.
    ///
    /// Returns the amount of flow that has been added.
    pub fn flow(&mut self, src: usize, snk: usize) -> F {
        self.flow_with_limit(src, snk, F::max_value())
    }

    /// Augment the flow from `src` to `snk` by at most `limit`.
    ///
    /// Returns the amount of flow that has been added.
    pub fn flow_with_limit(&mut self, src: usize, snk: usize, limit: F) -> F {
        Dinic::new(&mut self.g).solve(src, snk, limit)
    }

    /// Return the nodes reachable from `src` in the residual network.
    ///
    /// If called directly after `flow(src, snk)` (without limit), the
    /// nodes marked `true` form the source side of a minimum cut. After
    /// other sequences of operations the result is merely the set of
    /// reachable nodes.
    pub fn min_cut(&self, src: usize) -> Vec<bool> {
        self.g.reachable(src)
    }
}
