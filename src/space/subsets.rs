//! Subsets: unordered, no repetition, any width.

use super::{decoded, sorted_positions, to_positions, ArrangementSpace};
use crate::{
  items::{write_universe, Arrangement, Item},
  Count,
};

use itertools::Itertools;
use num_traits::One;

use std::fmt;

/// The space of all `2^n` subsets of an item sequence, ordered by bitmask:
/// rank `k` includes item `j` exactly when bit `j` of `k` is set.
#[derive(Debug, Clone)]
pub struct Subsets<T: Item> {
  items: Vec<T>,
  len: Count,
}

impl<T: Item> Subsets<T> {
  pub fn new(items: Vec<T>) -> Self {
    let len = Count::one() << items.len();
    Self { items, len }
  }
}

impl<T: Item> ArrangementSpace<T> for Subsets<T> {
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
    let positions = sorted_positions(to_positions(&self.items, candidate).unwrap());
    encode(&positions)
  }
}

impl<T: Item> fmt::Display for Subsets<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} subsets of ", self.len)?;
    write_universe(&self.items, f)
  }
}

/// Positions of the `k`th subset: the set bits of `k`, low to high.
pub(super) fn decode(k: &Count, n: usize) -> Vec<usize> {
  (0..n).filter(|&j| k.bit(j as u64)).collect()
}

/// Rank of a subset given as distinct positions: the sum of `2^j`.
pub(super) fn encode(positions: &[usize]) -> Count {
  positions
    .iter()
    .map(|&position| Count::one() << position)
    .sum()
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{items::text_items, Rank};

  #[test]
  fn counts_are_powers_of_two() {
    assert_eq!(Subsets::new(text_items("abcde")).len(), &Count::from(32u32));
    // The empty universe still has the empty subset.
    assert_eq!(Subsets::<char>::new(vec![]).len(), &Count::from(1u32));
  }

  #[test]
  fn bitmask_order() {
    let space = Subsets::new(text_items("abcde"));
    assert_eq!(space.get(0).unwrap().to_string(), "");
    assert_eq!(space.get(1).unwrap().to_string(), "a");
    assert_eq!(space.get(2).unwrap().to_string(), "b");
    assert_eq!(space.get(3).unwrap().to_string(), "ab");
    assert_eq!(space.get(-1).unwrap().to_string(), "abcde");
  }

  #[test]
  fn any_width_is_a_member() {
    let space = Subsets::new(text_items("abcde"));
    assert_eq!(space.index_of(&[]), Rank::from(0));
    assert_eq!(space.index_of(&['e', 'a']), Rank::from(17));
    assert_eq!(space.index_of(&['a', 'a']), Rank::from(-1));
    assert_eq!(space.index_of(&['z']), Rank::from(-1));
  }
}
