/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The residual network shared by the flow algorithms.
//!
//! Each edge added to the network is represented by a pair of arcs:
//! the forward arc in the adjacency list of its source node carrying
//! the remaining capacity and the reverse arc in the adjacency list of
//! its sink node carrying the current flow. Each arc stores the slot
//! of its sibling, so augmenting along an arc is a constant time
//! operation.
//!
//! The external edge indices `0, 1, 2, ...` are assigned in insertion
//! order and map to the (node, slot) position of the forward arc.
//!
//! # Example
//!
//! ```
//! use rs_flow::residual::ResidualGraph;
//!
//! let mut g = ResidualGraph::<i32>::new(3);
//! let e = g.add_edge(0, 1, 5, (), ());
//! assert_eq!(e, 0);
//! assert_eq!(g.add_edge(1, 1, 7, (), ()), 1);
//!
//! g.change_edge(e, 5, 2);
//! let (u, fwd, rev) = g.arc_pair(e);
//! assert_eq!((u, fwd.to, fwd.cap, rev.cap), (0, 1, 3, 2));
//! ```

use crate::traits::Capacity;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The maximal number of nodes of a residual network.
pub const MAX_NODES: usize = 100_000_000;

/// An arc of the residual network.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arc<F, W> {
    /// The sink node of this arc.
    pub to: usize,
    /// The slot of the sibling arc in the adjacency list of `to`.
    pub rev: usize,
    /// The residual capacity.
    pub cap: F,
    /// The cost of sending one unit along this arc.
    pub cost: W,
}

/// A residual network with arc costs of type `W`.
///
/// Pure max-flow networks use `W = ()`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ResidualGraph<F, W = ()> {
    /// The position (node, slot) of the forward arc of each edge.
    pos: Vec<(usize, usize)>,
    /// The adjacency lists.
    adj: Vec<Vec<Arc<F, W>>>,
}

impl<F, W> ResidualGraph<F, W>
where
    F: Capacity,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        assert!(n <= MAX_NODES, "Too many nodes: {} (at most {} allowed)", n, MAX_NODES);
        ResidualGraph {
            pos: vec![],
            adj: (0..n).map(|_| vec![]).collect(),
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges (i.e. arc pairs).
    pub fn num_edges(&self) -> usize {
        self.pos.len()
    }

    /// Add a new edge from `from` to `to` with capacity `cap`.
    ///
    /// The forward arc gets cost `cost`, the reverse arc `rev_cost`.
    /// Returns the index of the new edge.
    ///
    /// Loops are allowed, the two arcs of a loop occupy distinct slots.
    pub fn add_edge(&mut self, from: usize, to: usize, cap: F, cost: W, rev_cost: W) -> usize {
        let n = self.num_nodes();
        assert!(from < n, "Invalid source node {} (must be in 0..{})", from, n);
        assert!(to < n, "Invalid sink node {} (must be in 0..{})", to, n);
        assert!(cap >= F::zero(), "Capacity must be non-negative");

        let m = self.pos.len();
        let from_slot = self.adj[from].len();
        let to_slot = self.adj[to].len() + usize::from(from == to);
        self.pos.push((from, from_slot));
        self.adj[from].push(Arc {
            to,
            rev: to_slot,
            cap,
            cost,
        });
        self.adj[to].push(Arc {
            to: from,
            rev: from_slot,
            cap: F::zero(),
            cost: rev_cost,
        });
        m
    }

    /// Return the source node, the forward arc and the reverse arc of edge `i`.
    ///
    /// The original capacity of the edge is `fwd.cap + rev.cap`, its
    /// current flow is `rev.cap`.
    pub fn arc_pair(&self, i: usize) -> (usize, &Arc<F, W>, &Arc<F, W>) {
        let m = self.num_edges();
        assert!(i < m, "Invalid edge index {} (must be in 0..{})", i, m);
        let (u, slot) = self.pos[i];
        let fwd = &self.adj[u][slot];
        (u, fwd, &self.adj[fwd.to][fwd.rev])
    }

    /// Overwrite capacity and flow of edge `i`.
    ///
    /// No other edge is touched, in particular flow conservation may be
    /// violated afterwards.
    pub fn change_edge(&mut self, i: usize, new_cap: F, new_flow: F) {
        let m = self.num_edges();
        assert!(i < m, "Invalid edge index {} (must be in 0..{})", i, m);
        assert!(
            F::zero() <= new_flow && new_flow <= new_cap,
            "Flow must be in 0..=capacity, got flow {:?} and capacity {:?}",
            new_flow,
            new_cap
        );
        let (u, slot) = self.pos[i];
        let (to, rev) = {
            let fwd = &mut self.adj[u][slot];
            fwd.cap = new_cap - new_flow;
            (fwd.to, fwd.rev)
        };
        self.adj[to][rev].cap = new_flow;
    }

    /// Return the arcs leaving node `u`.
    pub fn outarcs(&self, u: usize) -> &[Arc<F, W>] {
        &self.adj[u]
    }

    /// Return the arc in slot `slot` of node `u`.
    pub fn arc(&self, u: usize, slot: usize) -> &Arc<F, W> {
        &self.adj[u][slot]
    }

    /// Return the residual capacity of the sibling of the arc in slot `slot` of node `u`.
    pub fn rev_cap(&self, u: usize, slot: usize) -> F {
        let a = &self.adj[u][slot];
        self.adj[a.to][a.rev].cap
    }

    /// Send `amount` units of flow along the arc in slot `slot` of node `u`.
    ///
    /// The residual capacity of the arc decreases, the one of its
    /// sibling increases by `amount`.
    pub(crate) fn push(&mut self, u: usize, slot: usize, amount: F) {
        let (to, rev) = {
            let a = &mut self.adj[u][slot];
            a.cap -= amount;
            (a.to, a.rev)
        };
        self.adj[to][rev].cap += amount;
    }

    /// Return the nodes reachable from `src` via arcs with positive residual capacity.
    pub fn reachable(&self, src: usize) -> Vec<bool> {
        let n = self.num_nodes();
        assert!(src < n, "Invalid node {} (must be in 0..{})", src, n);
        let mut seen = vec![false; n];
        let mut queue = std::collections::VecDeque::with_capacity(n);
        seen[src] = true;
        queue.push_back(src);
        while let Some(u) = queue.pop_front() {
            for a in &self.adj[u] {
                if !a.cap.is_zero() && !seen[a.to] {
                    seen[a.to] = true;
                    queue.push_back(a.to);
                }
            }
        }
        seen
    }
}
