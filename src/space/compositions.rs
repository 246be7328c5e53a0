//! Compositions: unordered, repetition allowed, fixed width.

use super::{decoded, sorted_positions, to_positions, ArrangementSpace};
use crate::{
  arith::ncr_count,
  items::{write_universe, Arrangement, Item},
  Count,
};

use std::fmt;

/// The space of all `r`-selections-with-repetition of an item sequence,
/// ordered lexicographically by source position.
#[derive(Debug, Clone)]
pub struct Compositions<T: Item> {
  r: usize,
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Compositions<T> {
  pub fn new(r: usize, items: Vec<T>) -> Self {
    let n = items.len();
    let len = if n == 0 {
      // Only the empty selection exists, and only at width zero.
      ncr_count(0, r)
    } else {
      ncr_count(n + r - 1, r)
    };
    Self { r, items, len }
  }

  pub fn r(&self) -> usize {
    self.r
  }
}

impl<T: Item> ArrangementSpace<T> for Compositions<T> {
  fn items(&self) -> &[T] {
    &self.items
  }

  fn len(&self) -> &Count {
    &self.len
  }

  fn contains(&self, candidate: &[T]) -> bool {
    candidate.len() == self.r && to_positions(&self.items, candidate).is_some()
  }

  fn arrangement_at(&self, rank: &Count) -> Arrangement<T> {
    decoded(&self.items, decode(rank, self.r, self.items.len()))
  }

  fn rank_of_valid(&self, candidate: &[T]) -> Count {
    let positions = sorted_positions(to_positions(&self.items, candidate).unwrap());
    encode(&positions, self.items.len())
  }
}

impl<T: Item> fmt::Display for Compositions<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}-compositions of ", self.len, self.r)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th composition, nondecreasing.
///
/// Same walk as the combination decode, except blocks count tails that may
/// reuse the current position, so the block size is
/// `ncr(n + r' - p - 2, r' - 1)` and the position is not advanced between
/// digits.
pub(super) fn decode(k: &Count, r: usize, n: usize) -> Vec<usize> {
  let mut k = k.clone();
  let mut positions = Vec::with_capacity(r);
  let mut position = 0;
  for i in 0..r {
    let remaining = r - i;
    loop {
      let block = ncr_count(n + remaining - position - 2, remaining - 1);
      if k < block {
        break;
      }
      k -= block;
      position += 1;
    }
    positions.push(position);
  }
  positions
}

/// Rank of a composition given as nondecreasing positions.
pub(super) fn encode(positions: &[usize], n: usize) -> Count {
  let r = positions.len();

  let mut rank = Count::default();
  let mut candidate = 0;
  for (i, &position) in positions.iter().enumerate() {
    let remaining = r - i;
    while candidate < position {
      rank += ncr_count(n + remaining - candidate - 2, remaining - 1);
      candidate += 1;
    }
  }
  rank
}
