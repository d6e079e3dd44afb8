use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;

use crate::error::Result;
use crate::iter::Iter;
use crate::iter::Keys;
use crate::iter::Values;
use crate::params::Capacity;
use crate::params::DefaultParams;
use crate::params::Params;
use crate::params::ParamsExt;
use crate::probe::Probe;
use crate::table::Table;

/// A string-keyed hash table with open addressing.
///
/// `HTab` stores values of type `V` under string keys in a single slot array
/// whose length is always prime. Collisions are resolved by the [`Probe`]
/// strategy chosen at construction. Keys cannot be removed.
///
/// See the [crate-level documentation][crate] for an overview and examples.
///
/// # Type Parameters
///
/// - `V`: The type of values stored in the table.
/// - `P`: Configuration parameters implementing [`Params`]. Defaults to
///   [`DefaultParams`] (grow at 60% load).
///
/// # Examples
///
/// ```
/// use htab::{HTab, Probe};
///
/// let mut table: HTab<i32> = HTab::new(5, Probe::Linear);
///
/// table.put("a", 1)?;
/// table.put("b", 2)?;
/// table.put("a", 3)?;
///
/// assert_eq!(table.get("a"), Some(&3));
/// assert_eq!(table.get("b"), Some(&2));
/// assert!(!table.has_key("c"));
/// assert_eq!(table.keys().len(), 2);
/// # Ok::<(), htab::Error>(())
/// ```
pub struct HTab<V, P = DefaultParams>
where
  P: Params + ?Sized,
{
  inner: Table<V, P>,
}

impl<V, P> HTab<V, P>
where
  P: Params + ?Sized,
{
  /// Creates a new, empty table using the given probe strategy.
  ///
  /// `capacity` is rounded up to the next prime, as by [`Capacity::new`].
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::{HTab, Probe};
  ///
  /// let table: HTab<String> = HTab::new(100, Probe::Quadratic);
  ///
  /// assert_eq!(table.capacity(), 101);
  /// assert_eq!(table.probe(), Probe::Quadratic);
  /// ```
  #[inline]
  pub fn new(capacity: usize, probe: Probe) -> Self {
    Self {
      inner: Table::new(Capacity::new(capacity), probe),
    }
  }

  /// Creates a new, empty table using [`Probe::Linear`].
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::{HTab, Probe};
  ///
  /// let table: HTab<u8> = HTab::with_capacity(5);
  ///
  /// assert_eq!(table.capacity(), 5);
  /// assert_eq!(table.probe(), Probe::Linear);
  /// ```
  #[inline]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::new(capacity, Probe::Linear)
  }

  /// Returns the number of slots in the table.
  ///
  /// Always prime. Grows when inserting a new key would reach
  /// [`Params::MAX_LOAD`]; never shrinks.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<u32> = HTab::with_capacity(5);
  ///
  /// for (index, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
  ///   table.put(key, index as u32)?;
  /// }
  ///
  /// assert_eq!(table.capacity(), 11);
  /// # Ok::<(), htab::Error>(())
  /// ```
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.inner.cap()
  }

  /// Returns the number of keys stored in the table.
  #[inline]
  pub const fn len(&self) -> usize {
    self.inner.len()
  }

  /// Returns `true` if the table holds no keys.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<i32> = HTab::default();
  /// assert!(table.is_empty());
  ///
  /// table.put("answer", 42)?;
  /// assert!(!table.is_empty());
  /// # Ok::<(), htab::Error>(())
  /// ```
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Returns the probe strategy the table was created with.
  #[inline]
  pub const fn probe(&self) -> Probe {
    self.inner.probe()
  }

  /// Returns the ratio of stored keys to slots.
  ///
  /// Always below [`Params::MAX_LOAD`] once a [`put`] returns.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<()> = HTab::with_capacity(5);
  ///
  /// table.put("a", ())?;
  /// table.put("b", ())?;
  ///
  /// assert!((table.load_factor() - 0.4).abs() < f64::EPSILON);
  /// # Ok::<(), htab::Error>(())
  /// ```
  ///
  /// [`put`]: Self::put
  #[inline]
  pub fn load_factor(&self) -> f64 {
    self.inner.load_factor()
  }

  /// Stores `value` under `key`.
  ///
  /// Returns the value previously stored under `key`, if any. The table
  /// grows first when storing a new key would reach [`Params::MAX_LOAD`].
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidKey`] if `key` is empty.
  /// - [`Error::ProbeExhausted`] if the probe sequence of `key` has no free
  ///   slot. Only possible with [`Probe::Quadratic`].
  /// - [`Error::CapacityOverflow`] if the table cannot grow any further.
  ///
  /// The stored entries are unchanged when an error is returned.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::{Error, HTab};
  ///
  /// let mut table: HTab<&str> = HTab::default();
  ///
  /// assert_eq!(table.put("lang", "rust")?, None);
  /// assert_eq!(table.put("lang", "c")?, Some("rust"));
  /// assert_eq!(table.put("", "nothing"), Err(Error::InvalidKey));
  /// assert_eq!(table.len(), 1);
  /// # Ok::<(), Error>(())
  /// ```
  ///
  /// [`Error::InvalidKey`]: crate::error::Error::InvalidKey
  /// [`Error::ProbeExhausted`]: crate::error::Error::ProbeExhausted
  /// [`Error::CapacityOverflow`]: crate::error::Error::CapacityOverflow
  #[inline]
  pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>> {
    self.inner.insert(key, value)
  }

  /// Returns a reference to the value stored under `key`.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<u64> = HTab::default();
  /// table.put("one", 1)?;
  ///
  /// assert_eq!(table.get("one"), Some(&1));
  /// assert_eq!(table.get("two"), None);
  /// # Ok::<(), htab::Error>(())
  /// ```
  #[inline]
  pub fn get(&self, key: &str) -> Option<&V> {
    self.inner.get(key)
  }

  /// Returns a mutable reference to the value stored under `key`.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<Vec<u8>> = HTab::default();
  /// table.put("bytes", vec![1])?;
  ///
  /// if let Some(bytes) = table.get_mut("bytes") {
  ///   bytes.push(2);
  /// }
  ///
  /// assert_eq!(table.get("bytes"), Some(&vec![1, 2]));
  /// # Ok::<(), htab::Error>(())
  /// ```
  #[inline]
  pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
    self.inner.get_mut(key)
  }

  /// Returns `true` if a value is stored under `key`.
  #[inline]
  pub fn has_key(&self, key: &str) -> bool {
    self.inner.contains(key)
  }

  /// Returns an iterator over the stored keys, in no particular order.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<()> = HTab::default();
  /// table.put("x", ())?;
  /// table.put("y", ())?;
  ///
  /// let mut keys: Vec<&str> = table.keys().collect();
  /// keys.sort_unstable();
  ///
  /// assert_eq!(keys, ["x", "y"]);
  /// # Ok::<(), htab::Error>(())
  /// ```
  #[inline]
  pub fn keys(&self) -> Keys<'_, V> {
    Keys::new(self.inner.slots(), self.inner.len())
  }

  /// Returns an iterator over the stored values, in no particular order.
  #[inline]
  pub fn values(&self) -> Values<'_, V> {
    Values::new(self.inner.slots(), self.inner.len())
  }

  /// Returns an iterator over the stored key-value pairs, in no particular
  /// order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, V> {
    Iter::new(self.inner.slots(), self.inner.len())
  }

  /// Stores every pair produced by `iter`, stopping at the first error.
  ///
  /// # Errors
  ///
  /// Returns the first error reported by [`put`]; pairs stored before it
  /// remain in the table.
  ///
  /// # Examples
  ///
  /// ```
  /// use htab::HTab;
  ///
  /// let mut table: HTab<usize> = HTab::default();
  /// table.try_extend(["a", "bb", "ccc"].map(|key| (key, key.len())))?;
  ///
  /// assert_eq!(table.get("bb"), Some(&2));
  /// # Ok::<(), htab::Error>(())
  /// ```
  ///
  /// [`put`]: Self::put
  pub fn try_extend<I, K>(&mut self, iter: I) -> Result<()>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
  {
    for (key, value) in iter {
      self.put(key.as_ref(), value)?;
    }

    Ok(())
  }
}

impl<V, P> Clone for HTab<V, P>
where
  V: Clone,
  P: Params + ?Sized,
{
  #[inline]
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<V, P> Debug for HTab<V, P>
where
  V: Debug,
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("HTab")
      .field("params", &P::debug())
      .field("probe", &self.probe())
      .field("capacity", &self.capacity())
      .field("entries", &self.inner)
      .finish()
  }
}

impl<V, P> Default for HTab<V, P>
where
  P: Params + ?Sized,
{
  /// Creates an empty table of [`Capacity::DEF`] slots using
  /// [`Probe::Linear`].
  #[inline]
  fn default() -> Self {
    Self::with_capacity(Capacity::DEF.as_usize())
  }
}

impl<'table, V, P> IntoIterator for &'table HTab<V, P>
where
  P: Params + ?Sized,
{
  type Item = (&'table str, &'table V);
  type IntoIter = Iter<'table, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
