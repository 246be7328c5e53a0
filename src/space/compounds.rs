//! Compounds: ordered, no repetition, any width.

use super::{decoded, permutations, to_positions, ArrangementSpace};
use crate::{
  arith::npr,
  items::{write_universe, Arrangement, Item},
  Count,
};

use itertools::Itertools;
use tracing::trace;

use std::fmt;

/// The space of all permutations of every width `0..=n`, concatenated by
/// increasing width.
#[derive(Debug, Clone)]
pub struct Compounds<T: Item> {
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Compounds<T> {
  pub fn new(items: Vec<T>) -> Self {
    let n = items.len();
    let len = (0..=n).map(|r| npr(n, r).unwrap()).sum();
    Self { items, len }
  }
}

impl<T: Item> ArrangementSpace<T> for Compounds<T> {
  fn items(&self) -> &[T] {
    &self.items
  }

  fn len(&self) -> &Count {
    &self.len
  }

  fn contains(&self, candidate: &[T]) -> bool {
    to_positions(&self.items, candidate).is_some() && candidate.iter().all_unique()
  }

  fn arrangement_at(&self, rank: &Count) -> Arrangement<T> {
    decoded(&self.items, decode(rank, self.items.len()))
  }

  fn rank_of_valid(&self, candidate: &[T]) -> Count {
    let positions = to_positions(&self.items, candidate).unwrap();
    encode(&positions, self.items.len())
  }
}

impl<T: Item> fmt::Display for Compounds<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} compounds of ", self.len)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th compound.
///
/// Skips the permutation blocks of increasing width until `k` falls inside
/// one, then decodes within it.
pub(super) fn decode(k: &Count, n: usize) -> Vec<usize> {
  let mut k = k.clone();
  let mut r = 0;
  loop {
    let block = npr(n, r).unwrap();
    if k < block {
      break;
    }
    k -= block;
    r += 1;
  }
  trace!(r, %k, "compound rank falls in width-{r} block");
  permutations::decode(&k, r, n)
}

/// Rank of a compound given as distinct positions in any order: the total
/// size of all narrower blocks plus the permutation rank at its own width.
pub(super) fn encode(positions: &[usize], n: usize) -> Count {
  let offset: Count = (0..positions.len()).map(|r| npr(n, r).unwrap()).sum();
  offset + permutations::encode(positions, n)
}
