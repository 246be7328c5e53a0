//! Combinations: unordered, no repetition, fixed width.

use super::{decoded, sorted_positions, to_positions, ArrangementSpace};
use crate::{
  arith::ncr_count,
  items::{write_universe, Arrangement, Item},
  Count,
};

use itertools::Itertools;

use std::fmt;

/// The space of all `r`-combinations of an item sequence, ordered
/// lexicographically by source position.
#[derive(Debug, Clone)]
pub struct Combinations<T: Item> {
  r: usize,
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Combinations<T> {
  pub fn new(r: usize, items: Vec<T>) -> Self {
    let len = ncr_count(items.len(), r);
    Self { r, items, len }
  }

  pub fn r(&self) -> usize {
    self.r
  }
}

impl<T: Item> ArrangementSpace<T> for Combinations<T> {
  fn items(&self) -> &[T] {
    &self.items
  }

  fn len(&self) -> &Count {
    &self.len
  }

  fn contains(&self, candidate: &[T]) -> bool {
    candidate.len() == self.r
      && to_positions(&self.items, candidate).is_some()
      && candidate.iter().all_unique()
  }

  fn arrangement_at(&self, rank: &Count) -> Arrangement<T> {
    decoded(&self.items, decode(rank, self.r, self.items.len()))
  }

  fn rank_of_valid(&self, candidate: &[T]) -> Count {
    let positions = sorted_positions(to_positions(&self.items, candidate).unwrap());
    encode(&positions, self.items.len())
  }
}

impl<T: Item> fmt::Display for Combinations<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}-combinations of ", self.len, self.r)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th combination, strictly increasing.
///
/// Combinatorial-number-system walk: advance the leading position past
/// whole blocks of `ncr(n - p - 1, r' - 1)` tail combinations until the
/// remaining rank falls inside the current block.
pub(super) fn decode(k: &Count, r: usize, n: usize) -> Vec<usize> {
  debug_assert!(*k < ncr_count(n, r));

  let mut k = k.clone();
  let mut positions = Vec::with_capacity(r);
  let mut position = 0;
  for i in 0..r {
    let remaining = r - i;
    loop {
      let block = ncr_count(n - position - 1, remaining - 1);
      if k < block {
        break;
      }
      k -= block;
      position += 1;
    }
    positions.push(position);
    position += 1;
  }
  positions
}

/// Rank of a combination given as strictly increasing positions.
pub(super) fn encode(positions: &[usize], n: usize) -> Count {
  let r = positions.len();

  let mut rank = Count::default();
  let mut candidate = 0;
  for (i, &position) in positions.iter().enumerate() {
    let remaining = r - i;
    while candidate < position {
      rank += ncr_count(n - candidate - 1, remaining - 1);
      candidate += 1;
    }
    candidate = position + 1;
  }
  rank
}
