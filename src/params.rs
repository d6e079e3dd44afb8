use core::any;
use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

use crate::utils::is_prime;
use crate::utils::next_prime;

// -----------------------------------------------------------------------------
// Configurable Params
// -----------------------------------------------------------------------------

/// Configuration parameters for an [`HTab`].
///
/// Fixes the growth policy and double-hash stride at compile time. The
/// simplest approach is [`ConstParams`]:
///
/// ```
/// use htab::{ConstParams, HTab};
///
/// // Grow at 50% load, double-hash strides in `1..=4`.
/// type HalfFull<V> = HTab<V, ConstParams<50, 4>>;
///
/// let table: HalfFull<u32> = HTab::with_capacity(7);
/// assert_eq!(table.capacity(), 7);
/// ```
///
/// # Implementing `Params`
///
/// ```
/// use htab::{HTab, LoadFactor, Params};
///
/// struct Sparse;
///
/// impl Params for Sparse {
///   const MAX_LOAD: LoadFactor = LoadFactor::new(25);
/// }
///
/// let table: HTab<u64, Sparse> = HTab::with_capacity(13);
/// assert_eq!(table.capacity(), 13);
/// ```
///
/// [`HTab`]: crate::public::HTab
pub trait Params {
  /// The load factor an insertion of a new key may not reach.
  ///
  /// The table grows before storing a new key whenever storing it would
  /// bring the load factor to this value or above.
  const MAX_LOAD: LoadFactor = DefaultParams::MAX_LOAD;

  /// Upper bound `K` of the double-hash stride `(hash % K) + 1`.
  const DOUBLE_HASH_MAX: NonZeroUsize = DefaultParams::DOUBLE_HASH_MAX;
}

// -----------------------------------------------------------------------------
// Configurable Params - Extensions
// -----------------------------------------------------------------------------

/// Derived behaviour computed from [`Params`].
///
/// Automatically implemented for all [`Params`] types.
///
/// # Example
///
/// ```
/// use htab::config::{DefaultParams, ParamsExt};
///
/// println!("{:#?}", <DefaultParams as ParamsExt>::debug());
/// ```
pub trait ParamsExt: Params + Sealed {
  /// Returns `true` if holding `entries` keys in `capacity` slots would reach
  /// [`Params::MAX_LOAD`].
  #[inline]
  fn exceeds_load(entries: usize, capacity: Capacity) -> bool {
    Self::MAX_LOAD.is_reached(entries, capacity.as_usize())
  }

  /// Returns the double-hash stride bound for a table of `capacity` slots.
  ///
  /// Clamped to `capacity - 1` so no stride is a multiple of the (prime)
  /// capacity.
  #[inline]
  fn stride_bound(capacity: Capacity) -> NonZeroUsize {
    let limit: usize = capacity.as_usize() - 1;

    match NonZeroUsize::new(limit) {
      Some(limit) if limit < Self::DOUBLE_HASH_MAX => limit,
      _ => Self::DOUBLE_HASH_MAX,
    }
  }

  #[inline]
  fn debug() -> DebugParams<Self> {
    DebugParams {
      marker: PhantomData,
    }
  }
}

// -----------------------------------------------------------------------------
// Debug Params
// -----------------------------------------------------------------------------

/// A helper type for displaying [`Params`] configuration.
///
/// Returned by [`ParamsExt::debug`].
#[derive(Clone, Copy)]
pub struct DebugParams<P>
where
  P: ?Sized,
{
  marker: PhantomData<fn(P)>,
}

impl<P> Debug for DebugParams<P>
where
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct(any::type_name::<P>())
      .field("MAX_LOAD", &P::MAX_LOAD)
      .field("DOUBLE_HASH_MAX", &P::DOUBLE_HASH_MAX)
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Default Params
// -----------------------------------------------------------------------------

/// The default table configuration.
///
/// Grows at [`LoadFactor::DEF`] (60%) and uses double-hash strides in
/// `1..=8`.
///
/// # Example
///
/// ```
/// use htab::{DefaultParams, HTab};
///
/// // These are equivalent:
/// let table1: HTab<u64> = HTab::with_capacity(5);
/// let table2: HTab<u64, DefaultParams> = HTab::with_capacity(5);
/// ```
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct DefaultParams;

impl Debug for DefaultParams {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(&<Self as ParamsExt>::debug(), f)
  }
}

impl Params for DefaultParams {
  const MAX_LOAD: LoadFactor = LoadFactor::DEF;
  const DOUBLE_HASH_MAX: NonZeroUsize = NonZeroUsize::new(8).unwrap();
}

// -----------------------------------------------------------------------------
// Const-Generic Params
// -----------------------------------------------------------------------------

/// A [`Params`] implementation configured through const generics.
///
/// `LOAD` is the maximum load in percent (clamped as by [`LoadFactor::new`]);
/// `STRIDE` is the double-hash bound `K` (`0` is treated as `1`).
///
/// ```
/// use htab::{ConstParams, HTab, Probe};
///
/// type Dense<V> = HTab<V, ConstParams<90, 16>>;
///
/// let table: Dense<&str> = HTab::new(101, Probe::DoubleHash);
/// assert_eq!(table.capacity(), 101);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConstParams<const LOAD: u8, const STRIDE: usize>;

impl<const LOAD: u8, const STRIDE: usize> Params for ConstParams<LOAD, STRIDE> {
  const MAX_LOAD: LoadFactor = LoadFactor::new(LOAD);
  const DOUBLE_HASH_MAX: NonZeroUsize = match NonZeroUsize::new(STRIDE) {
    Some(stride) => stride,
    None => NonZeroUsize::MIN,
  };
}

// -----------------------------------------------------------------------------
// Auto-implement Derive
// -----------------------------------------------------------------------------

mod private {
  pub trait Sealed {}
}

use private::Sealed;

impl<P> Sealed for P where P: Params + ?Sized {}
impl<P> ParamsExt for P where P: Params + ?Sized {}

// -----------------------------------------------------------------------------
// Load Factor
// -----------------------------------------------------------------------------

/// A validated maximum load factor, stored as a whole percentage.
///
/// ```
/// use htab::LoadFactor;
///
/// assert_eq!(LoadFactor::new(75).as_percent(), 75);
/// assert_eq!(LoadFactor::new(0), LoadFactor::MIN);
/// assert_eq!(LoadFactor::new(100), LoadFactor::MAX);
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LoadFactor(u8);

impl LoadFactor {
  /// The smallest supported load factor (1%).
  pub const MIN: Self = Self(1);

  /// The largest supported load factor (99%).
  pub const MAX: Self = Self(99);

  /// The default load factor (60%).
  pub const DEF: Self = Self(60);

  /// Creates a new [`LoadFactor`] from a percentage, clamped to
  /// <code>[MIN]..=[MAX]</code>.
  ///
  /// [MIN]: Self::MIN
  /// [MAX]: Self::MAX
  #[inline]
  pub const fn new(percent: u8) -> Self {
    if percent < Self::MIN.0 {
      Self::MIN
    } else if percent > Self::MAX.0 {
      Self::MAX
    } else {
      Self(percent)
    }
  }

  /// Returns the load factor as a whole percentage.
  #[inline]
  pub const fn as_percent(self) -> u8 {
    self.0
  }

  /// Returns the load factor as a fraction in `(0, 1)`.
  #[inline]
  pub fn as_f64(self) -> f64 {
    f64::from(self.0) / 100.0
  }

  /// Returns `true` if `entries / capacity` is at or above this factor.
  #[inline]
  pub const fn is_reached(self, entries: usize, capacity: usize) -> bool {
    (entries as u128) * 100 >= (capacity as u128) * (self.0 as u128)
  }
}

impl Debug for LoadFactor {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "{}%", self.0)
  }
}

impl Default for LoadFactor {
  #[inline]
  fn default() -> Self {
    Self::DEF
  }
}

// -----------------------------------------------------------------------------
// Capacity
// -----------------------------------------------------------------------------

/// A validated table capacity value.
///
/// Always a prime in the range <code>[MIN]..=[MAX]</code>. Prime sizes give
/// every double-hash stride full coverage of the table and spread the
/// quadratic sequence over distinct slots.
///
/// # Construction
///
/// Use [`new()`] to create from an arbitrary value; it rounds up to the next
/// prime and clamps to the valid range.
///
/// ```
/// use htab::Capacity;
///
/// // Already prime
/// assert_eq!(Capacity::new(13).as_usize(), 13);
///
/// // Rounded up
/// assert_eq!(Capacity::new(14).as_usize(), 17);
///
/// // Clamped to minimum
/// assert_eq!(Capacity::new(0), Capacity::MIN);
///
/// // Clamped to maximum
/// assert_eq!(Capacity::new(usize::MAX), Capacity::MAX);
/// ```
///
/// [MIN]: Self::MIN
/// [MAX]: Self::MAX
/// [`new()`]: Self::new
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
  /// The minimum supported capacity (the smallest prime).
  pub const MIN: Self = Self(NonZeroUsize::new(2).unwrap());

  /// The maximum supported capacity (the largest prime below 2³²).
  pub const MAX: Self = Self(NonZeroUsize::new(4_294_967_291).unwrap());

  /// The default capacity.
  pub const DEF: Self = Self(NonZeroUsize::new(11).unwrap());

  /// Creates a new [`Capacity`] from an arbitrary value.
  ///
  /// Returns `value` if it is prime, otherwise the next prime above it,
  /// clamped to <code>[MIN]..=[MAX]</code>.
  ///
  /// [MIN]: Self::MIN
  /// [MAX]: Self::MAX
  #[inline]
  pub const fn new(value: usize) -> Self {
    if value <= Self::MIN.as_usize() {
      return Self::MIN;
    }

    if value >= Self::MAX.as_usize() {
      return Self::MAX;
    }

    match next_prime(value) {
      Some(prime) => match NonZeroUsize::new(prime) {
        Some(prime) => Self(prime),
        None => Self::MIN,
      },
      None => Self::MAX,
    }
  }

  /// Returns `value` as a [`Capacity`] if it is a prime within
  /// <code>[MIN]..=[MAX]</code>.
  ///
  /// [MIN]: Self::MIN
  /// [MAX]: Self::MAX
  #[inline]
  pub const fn exact(value: usize) -> Option<Self> {
    if value > Self::MAX.as_usize() || !is_prime(value) {
      return None;
    }

    match NonZeroUsize::new(value) {
      Some(value) => Some(Self(value)),
      None => None,
    }
  }

  /// Returns the capacity a table grows into: the smallest prime at least
  /// twice as large, or [`None`] if that would exceed [`MAX`].
  ///
  /// ```
  /// use htab::Capacity;
  ///
  /// assert_eq!(Capacity::new(5).grow(), Some(Capacity::new(11)));
  /// assert_eq!(Capacity::MAX.grow(), None);
  /// ```
  ///
  /// [MAX]: Self::MAX
  #[inline]
  pub const fn grow(self) -> Option<Self> {
    match self.as_usize().checked_mul(2) {
      Some(value) if value <= Self::MAX.as_usize() => Some(Self::new(value)),
      _ => None,
    }
  }

  /// Returns the capacity as a [`usize`].
  #[inline]
  pub const fn as_usize(self) -> usize {
    self.0.get()
  }

  /// Returns the capacity as a [`NonZeroUsize`].
  #[inline]
  pub const fn as_nonzero(self) -> NonZeroUsize {
    self.0
  }
}

impl Debug for Capacity {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(&self.0, f)
  }
}

impl Default for Capacity {
  #[inline]
  fn default() -> Self {
    Self::DEF
  }
}

impl From<usize> for Capacity {
  #[inline]
  fn from(other: usize) -> Self {
    Self::new(other)
  }
}

impl From<Capacity> for NonZeroUsize {
  #[inline]
  fn from(other: Capacity) -> Self {
    other.as_nonzero()
  }
}

impl From<Capacity> for usize {
  #[inline]
  fn from(other: Capacity) -> Self {
    other.as_usize()
  }
}
