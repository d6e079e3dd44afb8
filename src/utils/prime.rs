//! Primality helpers backing [`Capacity`].
//!
//! [`Capacity`]: crate::params::Capacity

/// Returns `true` if `value` is prime.
///
/// Trial division by every candidate up to `sqrt(value)`. `0` and `1` are not
/// prime.
#[inline]
pub(crate) const fn is_prime(value: usize) -> bool {
  if value < 2 {
    return false;
  }

  if value < 4 {
    return true;
  }

  if value.is_multiple_of(2) {
    return false;
  }

  let mut divisor: usize = 3;

  // `divisor <= value / divisor` avoids overflowing `divisor * divisor`.
  while divisor <= value / divisor {
    if value.is_multiple_of(divisor) {
      return false;
    }

    divisor += 2;
  }

  true
}

/// Returns the smallest prime `>= value`, or [`None`] if no such prime fits
/// in a [`usize`].
#[inline]
pub(crate) const fn next_prime(value: usize) -> Option<usize> {
  let mut value: usize = value;

  while !is_prime(value) {
    value = match value.checked_add(1) {
      Some(next) => next,
      None => return None,
    };
  }

  Some(value)
}
