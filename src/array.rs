//! Slot storage.
//!
//! Provides [`Array`], the backing storage for table slots, and [`Slot`], the
//! tagged state of each position.

use core::mem;
use core::slice;

use crate::params::Capacity;

/// A stored key-value pair.
#[derive(Clone, Debug)]
pub(crate) struct Entry<V> {
  pub(crate) key: Box<str>,
  pub(crate) value: V,
}

/// The state of a single table position.
#[derive(Clone, Debug, Default)]
pub(crate) enum Slot<V> {
  #[default]
  Empty,
  Occupied(Entry<V>),
}

impl<V> Slot<V> {
  #[inline]
  pub(crate) const fn entry(&self) -> Option<&Entry<V>> {
    match self {
      Self::Empty => None,
      Self::Occupied(entry) => Some(entry),
    }
  }

  #[inline]
  pub(crate) const fn entry_mut(&mut self) -> Option<&mut Entry<V>> {
    match self {
      Self::Empty => None,
      Self::Occupied(entry) => Some(entry),
    }
  }

  #[inline]
  pub(crate) fn into_entry(self) -> Option<Entry<V>> {
    match self {
      Self::Empty => None,
      Self::Occupied(entry) => Some(entry),
    }
  }

  #[inline]
  pub(crate) const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }
}

/// A fixed-size array of slots, exactly [`Capacity`] long.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct Array<V> {
  slots: Box<[Slot<V>]>,
}

impl<V> Array<V> {
  /// Creates a new array, initializing each slot with the given function.
  #[inline]
  pub(crate) fn new<F>(capacity: Capacity, init: F) -> Self
  where
    F: FnMut(usize) -> Slot<V>,
  {
    Self {
      slots: (0..capacity.as_usize()).map(init).collect(),
    }
  }

  /// Creates a new array with every slot empty.
  #[inline]
  pub(crate) fn new_empty(capacity: Capacity) -> Self {
    Self::new(capacity, |_| Slot::Empty)
  }

  #[inline]
  pub(crate) const fn len(&self) -> usize {
    self.slots.len()
  }

  #[inline]
  pub(crate) const fn as_slice(&self) -> &[Slot<V>] {
    &self.slots
  }

  #[inline]
  pub(crate) fn iter(&self) -> slice::Iter<'_, Slot<V>> {
    self.slots.iter()
  }

  /// Returns a reference to the slot at the given index.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds; probe sequences never produce such
  /// an index.
  #[inline]
  pub(crate) fn get(&self, index: usize) -> &Slot<V> {
    &self.slots[index]
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, index: usize) -> &mut Slot<V> {
    &mut self.slots[index]
  }

  /// Stores `entry` at `index`, returning the previous slot state.
  #[inline]
  pub(crate) fn put(&mut self, index: usize, entry: Entry<V>) -> Slot<V> {
    mem::replace(self.get_mut(index), Slot::Occupied(entry))
  }

  /// Consumes the array, yielding every stored entry in slot order.
  #[inline]
  pub(crate) fn into_entries(self) -> impl Iterator<Item = Entry<V>> {
    self.slots.into_vec().into_iter().filter_map(Slot::into_entry)
  }
}
