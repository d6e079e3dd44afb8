//! Borrowing iterators over a table's contents.
//!
//! All iterators walk the slot array in storage order, which is unrelated to
//! insertion order and changes when the table grows.

use core::fmt::Debug;
use core::fmt::Formatter;
use core::fmt::Result;
use core::iter::FusedIterator;
use core::slice;

use crate::array::Entry;
use crate::array::Slot;

macro_rules! entry_iterator {
  ($(#[$meta:meta])* $name:ident<$lt:lifetime> => $item:ty, |$entry:ident| $map:expr) => {
    $(#[$meta])*
    pub struct $name<$lt, V> {
      slots: slice::Iter<$lt, Slot<V>>,
      remaining: usize,
    }

    impl<$lt, V> $name<$lt, V> {
      #[inline]
      pub(crate) fn new(slots: &$lt [Slot<V>], remaining: usize) -> Self {
        Self {
          slots: slots.iter(),
          remaining,
        }
      }
    }

    impl<V> Clone for $name<'_, V> {
      #[inline]
      fn clone(&self) -> Self {
        Self {
          slots: self.slots.clone(),
          remaining: self.remaining,
        }
      }
    }

    impl<$lt, V> Iterator for $name<$lt, V> {
      type Item = $item;

      #[inline]
      fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
          return None;
        }

        let $entry: &$lt Entry<V> = self.slots.by_ref().find_map(Slot::entry)?;

        self.remaining -= 1;

        Some($map)
      }

      #[inline]
      fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
      }
    }

    impl<V> ExactSizeIterator for $name<'_, V> {}

    impl<V> FusedIterator for $name<'_, V> {}
  };
}

entry_iterator! {
  /// An iterator over the keys of an [`HTab`].
  ///
  /// Created by [`HTab::keys`].
  ///
  /// [`HTab`]: crate::public::HTab
  /// [`HTab::keys`]: crate::public::HTab::keys
  Keys<'table> => &'table str, |entry| &*entry.key
}

entry_iterator! {
  /// An iterator over the values of an [`HTab`].
  ///
  /// Created by [`HTab::values`].
  ///
  /// [`HTab`]: crate::public::HTab
  /// [`HTab::values`]: crate::public::HTab::values
  Values<'table> => &'table V, |entry| &entry.value
}

entry_iterator! {
  /// An iterator over the key-value pairs of an [`HTab`].
  ///
  /// Created by [`HTab::iter`].
  ///
  /// [`HTab`]: crate::public::HTab
  /// [`HTab::iter`]: crate::public::HTab::iter
  Iter<'table> => (&'table str, &'table V), |entry| (&*entry.key, &entry.value)
}

impl<V> Debug for Keys<'_, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<V> Debug for Values<'_, V>
where
  V: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<V> Debug for Iter<'_, V>
where
  V: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_map().entries(self.clone()).finish()
  }
}
