// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

/// Simple binary min-heap of `(key, value)` pairs ordered by value.
///
/// There is no `decrease_key`: an element whose value improves is
/// pushed again and stale copies must be skipped by the caller.
pub(crate) struct BinHeap<K, V> {
    heap: Vec<(K, V)>,
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> BinHeap<K, V>
where
    K: Copy,
    V: Ord + Copy,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// Remove all elements from the heap.
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Push the element with given `key` and `value` onto the heap.
    pub fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        let mut cur_pos = self.heap.len() - 1;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            if value >= self.heap[parent_pos].1 {
                break;
            }
            self.heap[cur_pos] = self.heap[parent_pos];
            cur_pos = parent_pos;
        }
        self.heap[cur_pos] = (key, value);
    }

    /// Remove and return the element with the smallest value from the heap or `None` if
    /// the heap is empty.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let min_item = self.heap.swap_remove(0);
        let n = self.heap.len();
        if n > 0 {
            let item = self.heap[0];
            let mut cur_pos = 0;
            loop {
                let left_pos = 2 * cur_pos + 1;
                let right_pos = left_pos + 1;
                let next_pos = if left_pos >= n {
                    break;
                } else if right_pos >= n || self.heap[left_pos].1 < self.heap[right_pos].1 {
                    left_pos
                } else {
                    right_pos
                };

                if item.1 <= self.heap[next_pos].1 {
                    break;
                }

                self.heap[cur_pos] = self.heap[next_pos];
                cur_pos = next_pos;
            }
            self.heap[cur_pos] = item;
        }
        Some(min_item)
    }
}
