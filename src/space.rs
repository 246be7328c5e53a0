//! Virtual, non-materialized spaces of arrangements, indexable by rank.

mod amalgams;
mod combinations;
mod compositions;
mod compounds;
mod permutations;
mod subsets;

pub use amalgams::Amalgams;
pub use combinations::Combinations;
pub use compositions::Compositions;
pub use compounds::Compounds;
pub use permutations::Permutations;
pub use subsets::Subsets;

use crate::{
  error::Error,
  items::{Arrangement, Item},
  Count, Rank,
};

use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use tracing::debug;

use std::marker::PhantomData;

/// Floor-mod normalization of a rank into `[0, len)`.
///
/// Out-of-range ranks wrap around, so `-1` denotes the last arrangement.
/// An empty space admits no rank at all.
pub fn adjusted_index(k: &Rank, len: &Count) -> Result<Count, Error> {
  if len.is_zero() {
    return Err(Error::EmptySpace);
  }
  let adjusted = k.mod_floor(&Rank::from(len.clone()));
  Ok(adjusted.to_biguint().unwrap())
}

/// A virtual ordered collection of every arrangement of one kind drawn from
/// a fixed item sequence.
///
/// The collection is never materialized: `len` is a closed-form count and
/// members are decoded from their rank on demand.
pub trait ArrangementSpace<T: Item> {
  /// The source item sequence.
  fn items(&self) -> &[T];

  /// Total number of arrangements in the space.
  fn len(&self) -> &Count;

  /// Whether the candidate is a valid member of this space.
  fn contains(&self, candidate: &[T]) -> bool;

  /// Decode the arrangement at an already-normalized rank (`rank < len`).
  fn arrangement_at(&self, rank: &Count) -> Arrangement<T>;

  /// Rank of a candidate that is already known to satisfy [`contains`].
  fn rank_of_valid(&self, candidate: &[T]) -> Count;

  fn is_empty(&self) -> bool {
    self.len().is_zero()
  }

  /// The arrangement at rank `k`, with wraparound normalization.
  fn get(&self, k: impl Into<Rank>) -> Result<Arrangement<T>, Error> {
    let rank = adjusted_index(&k.into(), self.len())?;
    Ok(self.arrangement_at(&rank))
  }

  /// Rank of `candidate` within this space, or `-1` if it is not a member.
  fn index_of(&self, candidate: &[T]) -> Rank {
    if self.contains(candidate) {
      Rank::from(self.rank_of_valid(candidate))
    } else {
      Rank::from(-1)
    }
  }

  /// The arrangements at ranks `start..stop` (defaults `0..len`), taking
  /// every `step`th rank. `start` and `stop` wrap around like single ranks,
  /// and a `stop` behind the `start` wraps the walk across the end of the
  /// space; a negative `step` walks backwards.
  fn range(
    &self,
    start: Option<Rank>,
    stop: Option<Rank>,
    step: Option<Rank>,
  ) -> Result<Vec<Arrangement<T>>, Error> {
    let step = step.unwrap_or_else(|| Rank::from(1));
    if step.is_zero() {
      return Err(Error::ZeroStep);
    }
    let len = Rank::from(self.len().clone());
    let start = match start {
      Some(k) => Rank::from(adjusted_index(&k, self.len())?),
      None => Rank::zero(),
    };
    let mut stop = match stop {
      Some(k) => Rank::from(adjusted_index(&k, self.len())?),
      None => len.clone(),
    };

    // Shift the stop onto the step's side of the start, so the walk wraps
    // the gap instead of returning nothing.
    if step.is_positive() {
      while stop < start {
        stop += &len;
      }
    } else {
      while stop > start {
        stop -= &len;
      }
    }

    let mut arrangements = Vec::new();
    let mut at = start;
    while (step.is_positive() && at < stop) || (step.is_negative() && at > stop) {
      arrangements.push(self.get(at.clone())?);
      at += &step;
    }
    Ok(arrangements)
  }

  /// Lazy, restartable traversal of the whole space in rank order.
  fn iter(&self) -> Iter<'_, T, Self>
  where
    Self: Sized,
  {
    Iter {
      space: self,
      next: Count::zero(),
      _items: PhantomData,
    }
  }

  /// A uniformly random member of the space.
  ///
  /// Sampling is unbiased: the rank is drawn below `len` by rejection, not
  /// by modulo reduction.
  fn random(&self, rng: &mut (impl rand::Rng + ?Sized)) -> Result<Arrangement<T>, Error> {
    if self.is_empty() {
      return Err(Error::EmptySpace);
    }
    let rank = rng.gen_biguint_below(self.len());
    debug!(%rank, len = %self.len(), "drew random arrangement");
    Ok(self.arrangement_at(&rank))
  }
}

/// Iterator over a space's arrangements in rank order.
pub struct Iter<'a, T: Item, S: ArrangementSpace<T>> {
  space: &'a S,
  next: Count,
  _items: PhantomData<T>,
}

impl<T: Item, S: ArrangementSpace<T>> Iterator for Iter<'_, T, S> {
  type Item = Arrangement<T>;

  fn next(&mut self) -> Option<Self::Item> {
    if &self.next >= self.space.len() {
      return None;
    }
    let arrangement = self.space.arrangement_at(&self.next);
    self.next += 1u32;
    Some(arrangement)
  }
}

/// First-index positions of the candidate's elements, or `None` if some
/// element is not drawn from the items.
fn to_positions<T: Item>(items: &[T], candidate: &[T]) -> Option<Vec<usize>> {
  candidate
    .iter()
    .map(|elem| items.iter().position(|item| item == elem))
    .collect()
}

/// Positions reordered as their elements appear in the item sequence.
fn sorted_positions(mut positions: Vec<usize>) -> Vec<usize> {
  positions.sort_unstable();
  positions
}

fn decoded<T: Item>(items: &[T], positions: Vec<usize>) -> Arrangement<T> {
  Arrangement::new(positions.into_iter().map(|p| items[p].clone()).collect())
}
