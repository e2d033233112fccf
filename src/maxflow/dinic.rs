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

//! This module implements Dinic' max flow algorithm
//!
//! Each phase computes the distance of every node from the source in
//! the residual network (breadth first) and then augments a blocking
//! flow along shortest paths only. The blocking flow is found by
//! depth-first searches from the sink back to the source, every node
//! keeps a cursor to the next arc to examine so that arcs found to be
//! saturated or blocked are never examined again in the same phase.
//! The search uses an explicit stack, hence long augmenting paths do
//! not exhaust the call stack.
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::dinic;
//!
//! let (s, t, v1, v2, v3, v4) = (0, 1, 2, 3, 4, 5);
//! let edges = vec![
//!     (s, v1, 15), (s, v3, 10), (v1, v2, 6), (v1, v3, 7), (v2, t, 5),
//!     (v2, v4, 2), (v3, v2, 11), (v3, v4, 4), (v4, v2, 4), (v4, t, 20),
//! ];
//!
//! let (value, flow, mincut) = dinic(6, edges.iter().cloned(), s, t);
//!
//! assert_eq!(value, 11);
//! assert!(edges.iter().zip(&flow).all(|(&(_, _, c), &f)| f >= 0 && f <= c));
//! assert!((0..6).filter(|&u| u != s && u != t).all(|u| {
//!     edges.iter().zip(&flow).filter(|(e, _)| e.0 == u).map(|(_, &f)| f).sum::<i32>() ==
//!     edges.iter().zip(&flow).filter(|(e, _)| e.1 == u).map(|(_, &f)| f).sum::<i32>()
//! }));
//!
//! let cut: i32 = edges.iter().filter(|e| mincut[e.0] && !mincut[e.1]).map(|e| e.2).sum();
//! assert_eq!(cut, value);
//! ```

use crate::residual::ResidualGraph;
use crate::traits::Capacity;

use log::{debug, trace};
use std::cmp::min;
use std::collections::VecDeque;

use super::MaxFlowGraph;

/// The dinic max-flow algorithm.
///
/// The solver works directly on the residual capacities of the
/// borrowed network.
pub struct Dinic<'a, F> {
    g: &'a mut ResidualGraph<F>,
    /// Distance from the source, `num_nodes()` if unreached or dead.
    level: Vec<usize>,
    /// The next arc to examine for each node.
    iter: Vec<usize>,
    queue: VecDeque<usize>,
    stack: Vec<Frame<F>>,
}

/// A node on the current search path.
#[derive(Clone, Copy)]
struct Frame<F> {
    /// The node.
    u: usize,
    /// The amount of flow requested from this node.
    up: F,
    /// The amount of flow already delivered.
    res: F,
}

impl<'a, F> Dinic<'a, F>
where
    F: Capacity,
{
    /// Create a new Dinic algorithm instance for a network.
    pub fn new(g: &'a mut ResidualGraph<F>) -> Self {
        let n = g.num_nodes();
        Dinic {
            g,
            level: vec![n; n],
            iter: vec![0; n],
            queue: VecDeque::with_capacity(n),
            stack: vec![],
        }
    }

    /// Augment the flow from `src` to `snk` by at most `limit`.
    ///
    /// Returns the amount of flow added.
    pub fn solve(&mut self, src: usize, snk: usize, limit: F) -> F {
        let n = self.g.num_nodes();
        assert!(src < n, "Invalid source node {} (must be in 0..{})", src, n);
        assert!(snk < n, "Invalid sink node {} (must be in 0..{})", snk, n);
        assert_ne!(src, snk, "Source and sink node must not be equal");

        let mut value = F::zero();
        let mut nphases = 0;
        while value < limit {
            if !self.search(src, snk) {
                break;
            }
            nphases += 1;
            let dist = self.level[snk];
            for it in &mut self.iter {
                *it = 0;
            }
            let df = self.augment(src, snk, limit - value);
            trace!("Phase {}: distance {}, augmented {:?}", nphases, dist, df);
            if df.is_zero() {
                break;
            }
            value += df;
        }

        debug!("Dinic {} -> {}: flow {:?} in {} phases", src, snk, value, nphases);
        value
    }

    /// Compute the distance labels from `src`.
    ///
    /// Returns `true` if `snk` is reachable. The search stops as soon
    /// as `snk` has been labelled.
    fn search(&mut self, src: usize, snk: usize) -> bool {
        let n = self.g.num_nodes();
        for l in &mut self.level {
            *l = n;
        }
        self.level[src] = 0;

        self.queue.clear();
        self.queue.push_back(src);
        while let Some(u) = self.queue.pop_front() {
            let d = self.level[u] + 1;
            for a in self.g.outarcs(u) {
                if a.cap.is_zero() || self.level[a.to] < n {
                    continue;
                }
                self.level[a.to] = d;
                if a.to == snk {
                    return true;
                }
                self.queue.push_back(a.to);
            }
        }

        false
    }

    /// Send a blocking flow of at most `target` from `src` to `snk`.
    ///
    /// Paths are searched backwards starting at the sink. An arc `(u,v)`
    /// in the adjacency list of `u` may be used if its sibling `(v,u)`
    /// has positive residual capacity and `v` has a smaller distance
    /// label than `u`.
    fn augment(&mut self, src: usize, snk: usize, target: F) -> F {
        let n = self.g.num_nodes();

        self.stack.clear();
        self.stack.push(Frame {
            u: snk,
            up: target,
            res: F::zero(),
        });
        // the amount delivered by the frame that has just been removed
        let mut delivered = None;

        while let Some(&Frame { u, up, mut res }) = self.stack.last() {
            if u == src {
                self.stack.pop();
                delivered = Some(up);
                continue;
            }

            if let Some(df) = delivered.take() {
                let slot = self.iter[u];
                if df > F::zero() {
                    // the flow arrives at `u` via the sibling of this arc
                    let to = self.g.arc(u, slot).to;
                    let rev = self.g.arc(u, slot).rev;
                    self.g.push(to, rev, df);
                    res += df;
                    if let Some(top) = self.stack.last_mut() {
                        top.res = res;
                    }
                    if res == up {
                        self.stack.pop();
                        delivered = Some(res);
                        continue;
                    }
                }
                // arc is saturated or blocked
                self.iter[u] += 1;
            }

            let mut next = None;
            let deg = self.g.outarcs(u).len();
            while self.iter[u] < deg {
                let slot = self.iter[u];
                let v = self.g.arc(u, slot).to;
                if self.level[v] < self.level[u] {
                    let rem_cap = self.g.rev_cap(u, slot);
                    if rem_cap > F::zero() {
                        next = Some(Frame {
                            u: v,
                            up: min(up - res, rem_cap),
                            res: F::zero(),
                        });
                        break;
                    }
                }
                self.iter[u] += 1;
            }

            match next {
                Some(frame) => self.stack.push(frame),
                None => {
                    // nothing more can be sent through this node, remove
                    // it from the layered network
                    self.level[u] = n;
                    self.stack.pop();
                    delivered = Some(res);
                }
            }
        }

        delivered.unwrap_or_else(F::zero)
    }
}

/// Solve the maxflow problem using the algorithm of Dinic.
///
/// The function solves the max flow problem on a network with `n`
/// nodes and the given `edges` as `(from, to, capacity)` triples from
/// the source node `src` to the sink node `snk`.
///
/// The function returns the flow value, the flow on each edge (in the
/// order of `edges`) and the source side of a minimal cut.
pub fn dinic<F, Es>(n: usize, edges: Es, src: usize, snk: usize) -> (F, Vec<F>, Vec<bool>)
where
    F: Capacity,
    Es: IntoIterator<Item = (usize, usize, F)>,
{
    let mut g = MaxFlowGraph::new(n);
    for (u, v, c) in edges {
        g.add_edge(u, v, c);
    }
    let value = g.flow(src, snk);
    (value, g.edges().into_iter().map(|e| e.flow).collect(), g.min_cut(src))
}
