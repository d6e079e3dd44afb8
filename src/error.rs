//! Errors returned by fallible table operations.

use crate::probe::Probe;

/// A specialized [`Result`] type for table operations.
///
/// [`Result`]: core::result::Result
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The error type for table operations.
///
/// A failed operation never leaves the table partially modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// The key was empty.
  #[error("invalid key: keys must not be empty")]
  InvalidKey,
  /// No free slot was found within `attempts` probes.
  ///
  /// Only reachable with [`Probe::Quadratic`], whose sequence covers roughly
  /// half of the table.
  #[error("probe exhausted: no free slot after {attempts} {probe} probes (capacity {capacity})")]
  ProbeExhausted {
    /// The strategy that failed.
    probe: Probe,
    /// The table capacity at the time of the search.
    capacity: usize,
    /// The number of slots visited.
    attempts: usize,
  },
  /// Growing the table would exceed [`Capacity::MAX`].
  ///
  /// [`Capacity::MAX`]: crate::params::Capacity::MAX
  #[error("capacity overflow: cannot grow beyond {capacity} slots")]
  CapacityOverflow {
    /// The capacity that could not be grown.
    capacity: usize,
  },
}
