#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// A count was requested outside the domain of the counting functions,
  /// e.g. `npr(3, 5)`.
  #[error("selection width {r} exceeds universe size {n}")]
  Domain { n: usize, r: usize },

  /// Rank access into a space with no arrangements at all.
  #[error("cannot index into an empty arrangement space")]
  EmptySpace,

  /// A range was requested with a step of zero.
  #[error("range step must be nonzero")]
  ZeroStep,
}
