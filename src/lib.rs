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

#![forbid(unsafe_code)]

//! Network flow algorithms on residual graphs.
//!
//! The crate provides maximum flows (Dinic's algorithm, see
//! [`MaxFlowGraph`]) and minimum cost flows (successive shortest paths
//! with node potentials, see [`MinCostFlowGraph`]) on networks whose
//! capacities and costs are arbitrary integer types.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::{Capacity, Cost};

pub mod residual;
pub use self::residual::ResidualGraph;

mod collections;

// # Algorithms

pub mod maxflow;
pub use self::maxflow::MaxFlowGraph;

pub mod mcf;
pub use self::mcf::MinCostFlowGraph;

pub mod shortestpath;

