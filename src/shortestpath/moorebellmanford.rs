/*
 * Copyright (c) 2017, 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The shortest-path algorithm by Moore-Bellman-Ford on a residual network.

use crate::residual::ResidualGraph;
use crate::traits::{Capacity, Cost};

/// Compute node potentials with non-negative reduced costs.
///
/// Only arcs with positive residual capacity are considered. The
/// distances are computed from a virtual root node connected to every
/// node by an arc of cost 0, so the returned distances `d` satisfy
/// `cost(u,v) + d[u] - d[v] >= 0` for all residual arcs `(u,v)`.
///
/// The function returns a pair. The first element is the vector of
/// distances. The second element is a cycle of negative cost, given by
/// its arcs as `(node, slot)` pairs, if it exists (in which case the
/// distances are meaningless), otherwise it is `None`.
///
/// # Example
///
/// ```
/// use rs_flow::residual::ResidualGraph;
/// use rs_flow::shortestpath::moorebellmanford;
///
/// let mut g = ResidualGraph::<i32, i32>::new(3);
/// g.add_edge(0, 1, 1, -4, 4);
/// g.add_edge(1, 2, 1, 2, -2);
/// g.add_edge(2, 0, 0, -1, 1);
///
/// let (dist, cycle) = moorebellmanford::potentials(&g);
/// assert_eq!(cycle, None);
/// assert_eq!(dist, vec![0, -4, -2]);
///
/// // the cycle 0 -> 1 -> 2 -> 0 has cost -3
/// g.change_edge(2, 1, 0);
/// let (_, cycle) = moorebellmanford::potentials(&g);
/// let mut cycle = cycle.unwrap();
/// cycle.sort();
/// assert_eq!(cycle, vec![(0, 0), (1, 1), (2, 1)]);
/// ```
pub fn potentials<F, W>(g: &ResidualGraph<F, W>) -> (Vec<W>, Option<Vec<(usize, usize)>>)
where
    F: Capacity,
    W: Cost<F>,
{
    let n = g.num_nodes();
    let mut dist = vec![W::zero(); n];
    let mut pred = vec![None; n];

    let mut npasses = 0;
    loop {
        let mut changed = false;
        for u in 0..n {
            let du = dist[u];
            for (slot, a) in g.outarcs(u).iter().enumerate() {
                if a.cap.is_zero() {
                    continue;
                }
                let newdist = du + a.cost;
                if dist[a.to] > newdist {
                    dist[a.to] = newdist;
                    pred[a.to] = Some((u, slot));
                    changed = true;
                }
            }
        }
        if !changed {
            return (dist, None);
        }

        // Without negative cycles the distances are final after n - 1
        // passes. Otherwise the predecessor graph eventually contains a
        // cycle, which has negative cost.
        npasses += 1;
        if npasses >= n {
            if let Some(cycle) = pred_cycle(&pred) {
                return (dist, Some(cycle));
            }
        }
    }
}

/// Return the arcs of a cycle in the predecessor graph.
fn pred_cycle(pred: &[Option<(usize, usize)>]) -> Option<Vec<(usize, usize)>> {
    let n = pred.len();
    let mut mark = vec![n; n];
    for start in 0..n {
        let mut v = start;
        while mark[v] == n {
            mark[v] = start;
            match pred[v] {
                Some((u, _)) => v = u,
                None => break,
            }
        }
        if mark[v] != start || pred[v].is_none() {
            continue;
        }

        // `v` lies on a cycle of the current walk
        let mut cycle = vec![];
        let mut u = v;
        while let Some((p, slot)) = pred[u] {
            cycle.push((p, slot));
            u = p;
            if u == v {
                break;
            }
        }
        return Some(cycle);
    }
    None
}
