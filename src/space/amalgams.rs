//! Amalgams: ordered, repetition allowed, fixed width.

use super::{decoded, to_positions, ArrangementSpace};
use crate::{
  items::{write_universe, Arrangement, Item},
  Count,
};

use num_integer::Integer;
use num_traits::{pow, ToPrimitive};

use std::fmt;

/// The space of all `r`-wide ordered selections with repetition, i.e. the
/// words of length `r` over the item alphabet, in radix-`n` order.
#[derive(Debug, Clone)]
pub struct Amalgams<T: Item> {
  r: usize,
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Amalgams<T> {
  pub fn new(r: usize, items: Vec<T>) -> Self {
    let len = pow(Count::from(items.len()), r);
    Self { r, items, len }
  }

  pub fn r(&self) -> usize {
    self.r
  }
}

impl<T: Item> ArrangementSpace<T> for Amalgams<T> {
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
    let positions = to_positions(&self.items, candidate).unwrap();
    encode(&positions, self.items.len())
  }
}

impl<T: Item> fmt::Display for Amalgams<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}-amalgams of ", self.len, self.r)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th amalgam: the `r` radix-`n` digits of `k`, most
/// significant first.
pub(super) fn decode(k: &Count, r: usize, n: usize) -> Vec<usize> {
  let mut k = k.clone();
  let mut positions = Vec::with_capacity(r);
  for i in 0..r {
    let base = pow(Count::from(n), r - i - 1);
    let (digit, rest) = k.div_rem(&base);
    positions.push(digit.to_usize().unwrap());
    k = rest;
  }
  positions
}

/// Rank of an amalgam given as positions: the radix-`n` weighted sum.
pub(super) fn encode(positions: &[usize], n: usize) -> Count {
  let r = positions.len();
  positions
    .iter()
    .enumerate()
    .map(|(i, &position)| pow(Count::from(n), r - i - 1) * position)
    .sum()
}
