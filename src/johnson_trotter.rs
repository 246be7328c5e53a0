//! Johnson-Trotter minimal-change ordering of permutations.
//!
//! Ranks the `n!` orderings of a working set so that consecutive ranks
//! differ by exactly one adjacent transposition. [`permutation_at`] and
//! [`rank_of`] are exact inverses; the parity of the recursive `group`
//! quotient decides the insertion direction of the last element, which is
//! what produces the adjacent-swap property.

use crate::Count;

use num_integer::Integer;
use num_traits::ToPrimitive;

/// The permutation of `elements` at `k` in Johnson-Trotter order.
///
/// `k` must be below `n!` where `n = elements.len()`; larger ranks wrap.
pub fn permutation_at<T: Clone + PartialEq>(k: &Count, elements: &[T]) -> Vec<T> {
  let n = elements.len();
  if n <= 1 {
    return elements.to_vec();
  }
  let (group, item) = k.div_rem(&Count::from(n));
  let item = item.to_usize().unwrap();
  let position = if group.is_even() { n - item - 1 } else { item };

  let mut perm = permutation_at(&group, &elements[..n - 1]);
  perm.insert(position, elements[n - 1].clone());
  perm
}

/// The Johnson-Trotter rank of `permutation` among the orderings of
/// `elements`. Inverse of [`permutation_at`].
///
/// Panics unless `permutation` is a reordering of exactly the elements of
/// the working set.
pub fn rank_of<T: Clone + PartialEq>(permutation: &[T], elements: &[T]) -> Count {
  if permutation.len() <= 1 {
    return Count::default();
  }
  let n = elements.len();
  debug_assert_eq!(permutation.len(), n);

  let last = &elements[n - 1];
  let index = permutation
    .iter()
    .position(|elem| elem == last)
    .expect("permutation must contain every working-set element");
  let shortened: Vec<T> = permutation
    .iter()
    .filter(|&elem| elem != last)
    .cloned()
    .collect();
  let group = rank_of(&shortened, &elements[..n - 1]);

  let item = if group.is_even() { n - index - 1 } else { index };
  group * n + item
}
