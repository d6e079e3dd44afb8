//! Key hashing and home-slot mapping.
//!
//! Provides [`KeyHash`], the capacity-independent hash of a key. Slot indices
//! are always derived from the *current* capacity, so a resized table spreads
//! keys over its whole array.

use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result;
use core::num::NonZeroUsize;

use crate::params::Capacity;

/// Multiplier of the polynomial rolling hash.
const MULTIPLIER: i32 = 31;

/// The hash of a string key.
///
/// Computed as `hash = unit + 31 * hash` over the key's UTF-16 code units in
/// wrapping 32-bit arithmetic, then reduced to its absolute magnitude. The
/// intermediate value matches the JVM's `String::hashCode`.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct KeyHash {
  bits: u32,
}

impl KeyHash {
  #[inline]
  pub(crate) fn new(key: &str) -> Self {
    let hash: i32 = key.encode_utf16().fold(0_i32, |hash, unit| {
      i32::from(unit).wrapping_add(hash.wrapping_mul(MULTIPLIER))
    });

    Self {
      bits: hash.unsigned_abs(),
    }
  }

  #[cfg(test)]
  #[inline]
  pub(crate) const fn from_bits(bits: u32) -> Self {
    Self { bits }
  }

  /// Returns the first slot probed for this hash in a table of `capacity`.
  #[inline]
  pub(crate) const fn home(self, capacity: Capacity) -> usize {
    (self.bits as usize) % capacity.as_usize()
  }

  /// Returns the double-hash stride, `(hash % bound) + 1`.
  #[inline]
  pub(crate) const fn stride(self, bound: NonZeroUsize) -> usize {
    (self.bits as usize) % bound.get() + 1
  }
}

impl Debug for KeyHash {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Debug::fmt(&self.bits, f)
  }
}

impl Display for KeyHash {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(&self.bits, f)
  }
}
