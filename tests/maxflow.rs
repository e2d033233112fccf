/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flow::maxflow::{dinic, MaxFlowGraph};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A random network with loops and parallel edges.
fn random_network(rng: &mut StdRng) -> (usize, Vec<(usize, usize, i64)>) {
    let n = rng.random_range(2..30);
    let m = rng.random_range(0..4 * n);
    let edges = (0..m)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n), rng.random_range(0..20)))
        .collect();
    (n, edges)
}

fn build(n: usize, edges: &[(usize, usize, i64)]) -> MaxFlowGraph<i64> {
    let mut g = MaxFlowGraph::new(n);
    for &(u, v, c) in edges {
        g.add_edge(u, v, c);
    }
    g
}

/// Return the net outflow of each node.
fn excess(g: &MaxFlowGraph<i64>) -> Vec<i64> {
    let mut ex = vec![0; g.num_nodes()];
    for e in g.edges() {
        assert!(0 <= e.flow && e.flow <= e.cap);
        ex[e.from] += e.flow;
        ex[e.to] -= e.flow;
    }
    ex
}

#[test]
fn test_random_duality() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (n, edges) = random_network(&mut rng);
        let s = rng.random_range(0..n);
        let t = (s + rng.random_range(1..n)) % n;

        let mut g = build(n, &edges);
        let value = g.flow(s, t);

        let ex = excess(&g);
        for u in 0..n {
            if u == s {
                assert_eq!(ex[u], value);
            } else if u == t {
                assert_eq!(ex[u], -value);
            } else {
                assert_eq!(ex[u], 0);
            }
        }

        let cut = g.min_cut(s);
        assert!(cut[s]);
        assert!(!cut[t]);
        let cutvalue: i64 = g
            .edges()
            .iter()
            .filter(|e| cut[e.from] && !cut[e.to])
            .map(|e| e.cap)
            .sum();
        assert_eq!(cutvalue, value);

        // no augmenting path is left
        assert_eq!(g.flow(s, t), 0);
    }
}

#[test]
fn test_random_convenience() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let (n, edges) = random_network(&mut rng);
        let mut g = build(n, &edges);
        let value = g.flow(0, n - 1);

        let (value2, flows, cut) = dinic(n, edges.iter().cloned(), 0, n - 1);
        assert_eq!(value, value2);
        assert_eq!(flows.len(), edges.len());
        assert_eq!(cut, g.min_cut(0));
        for (f, &(_, _, c)) in flows.iter().zip(&edges) {
            assert!(0 <= *f && *f <= c);
        }
    }
}

#[test]
fn test_random_limits() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let (n, edges) = random_network(&mut rng);
        let value = build(n, &edges).flow(0, 1);

        let mut g = build(n, &edges);
        let mut total = 0;
        loop {
            let step = rng.random_range(0..5);
            let added = g.flow_with_limit(0, 1, step);
            assert!(added <= step);
            total += added;
            if added < step {
                break;
            }
        }
        assert_eq!(total, value);
        assert_eq!(g.flow(0, 1), 0);
    }
}

#[test]
fn test_random_reverse() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let (n, edges) = random_network(&mut rng);
        let forward = build(n, &edges).flow(0, 1);
        let backward = build(n, &edges).flow(1, 0);

        let mut g = build(n, &edges);
        assert_eq!(g.flow(0, 1), forward);
        // the flow can be cancelled completely and replaced by a maximal reverse flow
        assert_eq!(g.flow(1, 0), forward + backward);

        let ex = excess(&g);
        assert_eq!(ex[1], backward);
        assert_eq!(ex[0], -backward);
    }
}

#[test]
fn test_change_edge_restart() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let (n, edges) = random_network(&mut rng);
        if edges.is_empty() {
            continue;
        }
        let mut g = build(n, &edges);
        g.flow(0, n - 1);

        // reset all flows and solve again from scratch
        for (i, &(_, _, c)) in edges.iter().enumerate() {
            g.change_edge(i, c, 0);
        }
        assert!(g.edges().iter().all(|e| e.flow == 0));
        assert_eq!(g.flow(0, n - 1), build(n, &edges).flow(0, n - 1));
    }
}

#[test]
fn test_disconnected() {
    let mut g = MaxFlowGraph::<u8>::new(4);
    g.add_edge(0, 1, 200);
    g.add_edge(2, 3, 200);
    assert_eq!(g.flow(0, 3), 0);
    assert_eq!(g.min_cut(0), vec![true, true, false, false]);
}

#[cfg(feature = "serialize")]
#[test]
fn test_serialize() -> Result<(), Box<dyn std::error::Error>> {
    let mut g = MaxFlowGraph::new(3);
    g.add_edge(0, 1, 3);
    g.add_edge(1, 2, 2);
    g.add_edge(0, 2, 1);
    assert_eq!(g.flow_with_limit(0, 2, 2), 2);

    let json = serde_json::to_string(&g)?;
    let mut h: MaxFlowGraph<i32> = serde_json::from_str(&json)?;
    assert_eq!(h.edges(), g.edges());
    assert_eq!(h.flow(0, 2), g.flow(0, 2));
    assert_eq!(h.edges(), g.edges());

    Ok(())
}
