// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Numeric capabilities required from flow and cost values.
//!
//! Both traits are implemented automatically for every type providing
//! the required operations, in particular for all primitive integer
//! types (costs must be signed).
//!
//! The algorithms assume exact arithmetic. Overflow behaves as the
//! underlying type defines it, no additional checks are performed.
//! Node potentials are shifted to 0 at the source after every min-cost
//! flow call, so they stay within the total cost of a simple path.

use crate::num::traits::{Bounded, NumAssign};

use std::fmt::Debug;
use std::ops::Neg;

/// Value type of capacities and flows.
///
/// The largest representable value `Bounded::max_value()` is used as
/// the default flow limit.
pub trait Capacity: NumAssign + Bounded + Ord + Copy + Debug {}

impl<F> Capacity for F where F: NumAssign + Bounded + Ord + Copy + Debug {}

/// Value type of arc costs for capacities of type `F`.
///
/// The conversion `From<F>` is used to compute the cost of sending a
/// given amount of flow, i.e. it must be a (widening) cast from the
/// capacity type to the cost type.
pub trait Cost<F>: NumAssign + Bounded + Neg<Output = Self> + Ord + Copy + Debug + From<F> {}

impl<F, W> Cost<F> for W where W: NumAssign + Bounded + Neg<Output = W> + Ord + Copy + Debug + From<F> {}
