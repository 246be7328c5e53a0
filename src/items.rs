//! Item types and decoded arrangement values.

use std::fmt;
use std::hash::Hash;

/// An element type usable as a member of an item sequence.
///
/// Equality drives first-index lookup and membership tests, hashing drives
/// uniqueness checks. `JOINED_TEXT` is the renders-as-joined-text
/// capability: arrangements of such items display as one contiguous string
/// ("abc") instead of a bracketed list.
pub trait Item: Clone + Eq + Hash + fmt::Debug {
  const JOINED_TEXT: bool = false;

  fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{self:?}")
  }
}

impl Item for char {
  const JOINED_TEXT: bool = true;

  fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{self}")
  }
}

macro_rules! impl_item {
  ($($t:ty),* $(,)?) => {
    $(impl Item for $t {})*
  };
}
impl_item!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, String, &str);

/// The item sequence of a string, character by character.
pub fn text_items(text: &str) -> Vec<char> {
  text.chars().collect()
}

/// One concrete member of an arrangement space.
///
/// Produced on demand by rank decoding; owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement<T: Item> {
  elems: Vec<T>,
}

impl<T: Item> Arrangement<T> {
  pub(crate) fn new(elems: Vec<T>) -> Self {
    Self { elems }
  }

  pub fn as_slice(&self) -> &[T] {
    &self.elems
  }

  pub fn into_vec(self) -> Vec<T> {
    self.elems
  }
}

impl<T: Item> std::ops::Deref for Arrangement<T> {
  type Target = [T];
  fn deref(&self) -> &Self::Target {
    &self.elems
  }
}

impl<T: Item> IntoIterator for Arrangement<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;
  fn into_iter(self) -> Self::IntoIter {
    self.elems.into_iter()
  }
}

impl<'a, T: Item> IntoIterator for &'a Arrangement<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;
  fn into_iter(self) -> Self::IntoIter {
    self.elems.iter()
  }
}

impl<T: Item> PartialEq<[T]> for Arrangement<T> {
  fn eq(&self, other: &[T]) -> bool {
    self.elems == other
  }
}
impl<T: Item> PartialEq<&[T]> for Arrangement<T> {
  fn eq(&self, other: &&[T]) -> bool {
    self.elems == *other
  }
}
impl<T: Item> PartialEq<Vec<T>> for Arrangement<T> {
  fn eq(&self, other: &Vec<T>) -> bool {
    &self.elems == other
  }
}
impl<T: Item, const N: usize> PartialEq<[T; N]> for Arrangement<T> {
  fn eq(&self, other: &[T; N]) -> bool {
    self.elems == other
  }
}

impl<T: Item> fmt::Display for Arrangement<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_rendered(&self.elems, f)
  }
}

/// Joined text for character items, a bracketed list otherwise.
pub(crate) fn write_rendered<T: Item>(elems: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
  if T::JOINED_TEXT {
    for elem in elems {
      elem.write_text(f)?;
    }
    return Ok(());
  }
  write!(f, "[")?;
  for (i, elem) in elems.iter().enumerate() {
    if i > 0 {
      write!(f, ", ")?;
    }
    elem.write_text(f)?;
  }
  write!(f, "]")
}

/// Renders an item universe for a space summary: joined text is quoted to
/// read as a string, lists render bare.
pub(crate) fn write_universe<T: Item>(items: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
  if T::JOINED_TEXT {
    write!(f, "\"")?;
    write_rendered(items, f)?;
    write!(f, "\"")
  } else {
    write_rendered(items, f)
  }
}
