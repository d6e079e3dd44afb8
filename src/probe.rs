//! Collision resolution strategies.
//!
//! [`Probe`] selects how a key's candidate slots are generated; [`ProbeSeq`]
//! yields them. Every sequence starts at the key's home slot and is bounded
//! by the table capacity, so a search always terminates.

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result;
use core::iter::FusedIterator;

use crate::hash::KeyHash;
use crate::params::Capacity;
use crate::params::Params;
use crate::params::ParamsExt;

/// The probing strategy used to resolve collisions.
///
/// Fixed for the lifetime of an [`HTab`]. For a key with home slot `start`,
/// attempt `n` (counting from zero) visits:
///
/// | Strategy | Slot |
/// |---|---|
/// | [`Linear`] | `(start + n) % capacity` |
/// | [`Quadratic`] | `(start + n²) % capacity` |
/// | [`DoubleHash`] | `(start + n * stride) % capacity` |
///
/// where `stride = (hash % K) + 1` and `K` is [`Params::DOUBLE_HASH_MAX`].
///
/// # Coverage
///
/// Linear and double-hash sequences visit every slot of the (prime)
/// capacity. A quadratic sequence reaches only `(capacity + 1) / 2` distinct
/// slots, so an insertion into a table loaded above one half can fail with
/// [`Error::ProbeExhausted`].
///
/// [`HTab`]: crate::public::HTab
/// [`Linear`]: Self::Linear
/// [`Quadratic`]: Self::Quadratic
/// [`DoubleHash`]: Self::DoubleHash
/// [`Error::ProbeExhausted`]: crate::error::Error::ProbeExhausted
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Probe {
  /// Step to the adjacent slot.
  #[default]
  Linear,
  /// Step by the square of the attempt number from the home slot.
  Quadratic,
  /// Step by a key-dependent stride.
  DoubleHash,
}

impl Probe {
  /// All strategies, in declaration order.
  pub const ALL: [Self; 3] = [Self::Linear, Self::Quadratic, Self::DoubleHash];
}

impl Display for Probe {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(match self {
      Self::Linear => "linear",
      Self::Quadratic => "quadratic",
      Self::DoubleHash => "double-hash",
    })
  }
}

// -----------------------------------------------------------------------------
// Probe Sequence
// -----------------------------------------------------------------------------

/// The candidate slots for one key, in probe order.
///
/// Yields at most `capacity` indices. Arithmetic is done in [`u64`] since
/// [`Capacity::MAX`] is close to [`u32::MAX`].
#[derive(Clone, Debug)]
pub(crate) struct ProbeSeq {
  probe: Probe,
  start: u64,
  current: u64,
  stride: u64,
  attempt: u64,
  length: u64,
}

impl ProbeSeq {
  #[inline]
  pub(crate) fn new<P>(probe: Probe, hash: KeyHash, capacity: Capacity) -> Self
  where
    P: Params + ?Sized,
  {
    let start: u64 = hash.home(capacity) as u64;

    let stride: u64 = match probe {
      Probe::Linear | Probe::Quadratic => 1,
      Probe::DoubleHash => hash.stride(P::stride_bound(capacity)) as u64,
    };

    Self {
      probe,
      start,
      current: start,
      stride,
      attempt: 0,
      length: capacity.as_usize() as u64,
    }
  }

  /// Returns the number of candidates yielded so far.
  #[inline]
  pub(crate) const fn attempts(&self) -> usize {
    self.attempt as usize
  }

  /// Computes the candidate following `self.current` for the next attempt.
  #[inline]
  const fn advance(&self) -> u64 {
    match self.probe {
      Probe::Linear | Probe::DoubleHash => (self.current + self.stride) % self.length,
      Probe::Quadratic => {
        let offset: u64 = (self.attempt * self.attempt) % self.length;
        (self.start + offset) % self.length
      }
    }
  }
}

impl Iterator for ProbeSeq {
  type Item = usize;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.attempt >= self.length {
      return None;
    }

    let index: u64 = self.current;

    self.attempt += 1;
    self.current = self.advance();

    Some(index as usize)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining: usize = (self.length - self.attempt) as usize;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for ProbeSeq {}

impl FusedIterator for ProbeSeq {}
