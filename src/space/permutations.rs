//! Permutations: ordered, no repetition, fixed width.

use super::{combinations, decoded, sorted_positions, to_positions, ArrangementSpace};
use crate::{
  arith::{factorial, npr_count},
  items::{write_universe, Arrangement, Item},
  johnson_trotter, Count,
};

use itertools::Itertools;
use num_integer::Integer;

use std::fmt;

/// The space of all `r`-permutations of an item sequence.
///
/// Ranks factor into a combination group and a Johnson-Trotter ordering
/// within the group: within one group consecutive ranks differ by a single
/// adjacent transposition.
#[derive(Debug, Clone)]
pub struct Permutations<T: Item> {
  r: usize,
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Permutations<T> {
  pub fn new(r: usize, items: Vec<T>) -> Self {
    let len = npr_count(items.len(), r);
    Self { r, items, len }
  }

  pub fn r(&self) -> usize {
    self.r
  }
}

impl<T: Item> ArrangementSpace<T> for Permutations<T> {
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
    let positions = to_positions(&self.items, candidate).unwrap();
    encode(&positions, self.items.len())
  }
}

impl<T: Item> fmt::Display for Permutations<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}-permutations of ", self.len, self.r)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th permutation.
///
/// `k / r!` selects the underlying combination, `k mod r!` the
/// Johnson-Trotter ordering of its elements.
pub(super) fn decode(k: &Count, r: usize, n: usize) -> Vec<usize> {
  let (group, item) = k.div_rem(&factorial(r));
  let combination = combinations::decode(&group, r, n);
  johnson_trotter::permutation_at(&item, &combination)
}

/// Rank of a permutation given as distinct positions in any order.
pub(super) fn encode(positions: &[usize], n: usize) -> Count {
  let r = positions.len();
  if r == 0 {
    return Count::default();
  }
  let combination = sorted_positions(positions.to_vec());
  let group = combinations::encode(&combination, n);
  group * factorial(r) + johnson_trotter::rank_of(positions, &combination)
}
