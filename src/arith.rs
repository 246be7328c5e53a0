//! Exact counting arithmetic: memoized factorials, `nPr` and `nCr`.
//!
//! Everything is computed in arbitrary precision, since arrangement counts
//! exceed the native integer range already for moderate universe sizes.

use crate::{error::Error, Count};

use num_traits::One;
use once_cell::sync::Lazy;

use std::sync::Mutex;

/// Append-only factorial memo table.
///
/// Grows monotonically and is never cleared. A process-wide instance backs
/// the free functions of this module; separate instances exist for
/// testability only.
#[derive(Debug, Default)]
pub struct FactorialCache {
  table: Mutex<Vec<Count>>,
}

impl FactorialCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn factorial(&self, n: usize) -> Count {
    let mut table = self.table.lock().unwrap();
    if table.is_empty() {
      table.push(Count::one());
    }
    while table.len() <= n {
      let next = table.last().unwrap() * table.len();
      table.push(next);
    }
    table[n].clone()
  }

  /// Number of entries computed so far.
  pub fn computed(&self) -> usize {
    self.table.lock().unwrap().len()
  }
}

static FACTORIALS: Lazy<FactorialCache> = Lazy::new(FactorialCache::new);

/// `n!`, memoized process-wide.
pub fn factorial(n: usize) -> Count {
  FACTORIALS.factorial(n)
}

/// Permutation count of `r` items taken from `n`, `n!/(n-r)!`.
pub fn npr(n: usize, r: usize) -> Result<Count, Error> {
  if r > n {
    return Err(Error::Domain { n, r });
  }
  Ok(factorial(n) / factorial(n - r))
}

/// Combination count of `r` items taken from `n`, `n!/(r!(n-r)!)`.
pub fn ncr(n: usize, r: usize) -> Result<Count, Error> {
  Ok(npr(n, r)? / factorial(r))
}

/// Like [`npr`], but an impossible selection simply counts zero.
pub fn npr_count(n: usize, r: usize) -> Count {
  npr(n, r).unwrap_or_default()
}

/// Like [`ncr`], but an impossible selection simply counts zero.
pub fn ncr_count(n: usize, r: usize) -> Count {
  ncr(n, r).unwrap_or_default()
}
