//! Bidirectional mappings between integers and combinatorial arrangements.
//!
//! Six kinds of arrangement space over a finite ordered item sequence, each
//! a virtual ordered collection indexed by rank: amalgams, combinations,
//! compositions, permutations, subsets and compounds. Counts, rank decoding
//! and rank encoding are all closed-form in exact big-integer arithmetic, so
//! no space is ever materialized.

#![allow(clippy::len_without_is_empty)]

pub mod arith;
pub mod error;
pub mod items;
pub(crate) mod johnson_trotter;
pub mod space;

pub use error::Error;
pub use items::{text_items, Arrangement, Item};
pub use space::{
  adjusted_index, Amalgams, ArrangementSpace, Combinations, Compositions, Compounds, Iter,
  Permutations, Subsets,
};

/// A position of one arrangement within its space's total order. Signed:
/// negative ranks wrap around from the end, and `-1` doubles as the
/// not-a-member sentinel of [`ArrangementSpace::index_of`].
pub type Rank = num_bigint::BigInt;

/// An exact arrangement count.
pub type Count = num_bigint::BigUint;
