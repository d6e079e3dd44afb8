//! Core table implementation.
//!
//! Every operation funnels through [`Table::search`], which walks the probe
//! sequence of a key until it finds the key, an empty slot, or runs out of
//! attempts.

use core::fmt::Debug;
use core::fmt::DebugMap;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use core::marker::PhantomData;
use core::mem;

use log::debug;
use log::trace;
use log::warn;

use crate::array::Array;
use crate::array::Entry;
use crate::array::Slot;
use crate::error::Error;
use crate::error::Result;
use crate::hash::KeyHash;
use crate::params::Capacity;
use crate::params::Params;
use crate::params::ParamsExt;
use crate::probe::Probe;
use crate::probe::ProbeSeq;

/// Outcome of walking a probe sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Search {
  /// The key is stored at this index.
  Occupied(usize),
  /// The key is absent; this is the first empty slot of its sequence.
  Vacant(usize),
  /// The sequence ended without reaching the key or an empty slot.
  Exhausted(usize),
}

// -----------------------------------------------------------------------------
// Table State
// -----------------------------------------------------------------------------

pub(crate) struct Table<V, P>
where
  P: Params + ?Sized,
{
  data: Array<V>,
  capacity: Capacity,
  entries: usize,
  probe: Probe,
  phantom: PhantomData<fn(P)>,
}

impl<V, P> Table<V, P>
where
  P: Params + ?Sized,
{
  #[inline]
  pub(crate) fn new(capacity: Capacity, probe: Probe) -> Self {
    Self {
      data: Array::new_empty(capacity),
      capacity,
      entries: 0,
      probe,
      phantom: PhantomData,
    }
  }

  #[inline]
  pub(crate) const fn cap(&self) -> usize {
    self.capacity.as_usize()
  }

  #[inline]
  pub(crate) const fn len(&self) -> usize {
    self.entries
  }

  #[inline]
  pub(crate) const fn is_empty(&self) -> bool {
    self.entries == 0
  }

  #[inline]
  pub(crate) const fn probe(&self) -> Probe {
    self.probe
  }

  #[allow(clippy::cast_precision_loss, reason = "an approximate ratio is expected")]
  #[inline]
  pub(crate) fn load_factor(&self) -> f64 {
    self.entries as f64 / self.cap() as f64
  }

  #[inline]
  pub(crate) const fn slots(&self) -> &[Slot<V>] {
    self.data.as_slice()
  }

  #[inline]
  pub(crate) fn get(&self, key: &str) -> Option<&V> {
    match self.search(key, KeyHash::new(key)) {
      Search::Occupied(index) => self.data.get(index).entry().map(|entry| &entry.value),
      Search::Vacant(_) | Search::Exhausted(_) => None,
    }
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
    match self.search(key, KeyHash::new(key)) {
      Search::Occupied(index) => self
        .data
        .get_mut(index)
        .entry_mut()
        .map(|entry| &mut entry.value),
      Search::Vacant(_) | Search::Exhausted(_) => None,
    }
  }

  #[inline]
  pub(crate) fn contains(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  /// Stores `value` under `key`, returning the value it replaced.
  pub(crate) fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
    if key.is_empty() {
      return Err(Error::InvalidKey);
    }

    let hash: KeyHash = KeyHash::new(key);
    let mut search: Search = self.search(key, hash);

    if let Search::Occupied(index) = search {
      return Ok(self.replace(index, value));
    }

    // The key is new; make room before choosing its slot.
    if P::exceeds_load(self.entries + 1, self.capacity) {
      self.grow()?;
      search = self.search(key, hash);
    }

    match search {
      Search::Occupied(index) => Ok(self.replace(index, value)),
      Search::Vacant(index) => {
        let entry: Entry<V> = Entry {
          key: Box::from(key),
          value,
        };

        let prev: Slot<V> = self.data.put(index, entry);

        debug_assert!(prev.is_empty(), "Vacant search returned an occupied slot");

        self.entries += 1;

        Ok(None)
      }
      Search::Exhausted(attempts) => Err(self.exhausted(key, hash, attempts)),
    }
  }

  /// Walks the probe sequence of `key`.
  pub(crate) fn search(&self, key: &str, hash: KeyHash) -> Search {
    let mut probe: ProbeSeq = ProbeSeq::new::<P>(self.probe, hash, self.capacity);

    for index in probe.by_ref() {
      match self.data.get(index) {
        Slot::Empty => return Search::Vacant(index),
        Slot::Occupied(entry) if *entry.key == *key => return Search::Occupied(index),
        Slot::Occupied(_) => {}
      }
    }

    trace!(
      "probe sequence exhausted (key = {key:?}, hash = {hash}, probe = {}, capacity = {})",
      self.probe,
      self.capacity.as_usize(),
    );

    Search::Exhausted(probe.attempts())
  }

  #[inline]
  fn replace(&mut self, index: usize, value: V) -> Option<V> {
    match self.data.get_mut(index).entry_mut() {
      Some(entry) => Some(mem::replace(&mut entry.value, value)),
      None => None,
    }
  }

  #[cold]
  #[inline(never)]
  fn exhausted(&self, key: &str, hash: KeyHash, attempts: usize) -> Error {
    warn!(
      "no free slot for key {key:?} (hash = {hash}) after {attempts} {} probes; {} of {} slots in use",
      self.probe,
      self.entries,
      self.capacity.as_usize(),
    );

    Error::ProbeExhausted {
      probe: self.probe,
      capacity: self.capacity.as_usize(),
      attempts,
    }
  }

  /// Grows the table until one more entry fits under [`Params::MAX_LOAD`].
  #[cold]
  #[inline(never)]
  fn grow(&mut self) -> Result<()> {
    let mut capacity: Capacity = self.capacity;

    while P::exceeds_load(self.entries + 1, capacity) {
      capacity = capacity.grow().ok_or(Error::CapacityOverflow {
        capacity: capacity.as_usize(),
      })?;
    }

    self.rehash(capacity)
  }

  /// Moves every entry into fresh storage of `capacity` slots.
  ///
  /// Placement is planned against the new capacity before anything moves, so
  /// a failure leaves the table untouched.
  pub(crate) fn rehash(&mut self, capacity: Capacity) -> Result<()> {
    let plan: Vec<usize> = self.plan(capacity)?;
    let prev: Array<V> = mem::replace(&mut self.data, Array::new_empty(capacity));

    debug!(
      "resizing table from {} to {} slots ({} entries, {} probing)",
      prev.len(),
      capacity.as_usize(),
      self.entries,
      self.probe,
    );

    for (entry, index) in prev.into_entries().zip(plan) {
      self.data.put(index, entry);
    }

    self.capacity = capacity;

    debug_assert_eq!(self.data.len(), self.cap());

    Ok(())
  }

  /// Assigns every stored entry, in slot order, a position in a table of
  /// `capacity` slots.
  fn plan(&self, capacity: Capacity) -> Result<Vec<usize>> {
    let mut taken: Vec<bool> = vec![false; capacity.as_usize()];
    let mut plan: Vec<usize> = Vec::with_capacity(self.entries);

    for entry in self.data.iter().filter_map(Slot::entry) {
      let hash: KeyHash = KeyHash::new(&entry.key);
      let mut probe: ProbeSeq = ProbeSeq::new::<P>(self.probe, hash, capacity);

      // Keys are distinct, so only emptiness matters here.
      let Some(index) = probe.by_ref().find(|index| !taken[*index]) else {
        return Err(Error::ProbeExhausted {
          probe: self.probe,
          capacity: capacity.as_usize(),
          attempts: probe.attempts(),
        });
      };

      taken[index] = true;
      plan.push(index);
    }

    debug_assert_eq!(plan.len(), self.entries);

    Ok(plan)
  }
}

impl<V, P> Clone for Table<V, P>
where
  V: Clone,
  P: Params + ?Sized,
{
  fn clone(&self) -> Self {
    Self {
      data: self.data.clone(),
      capacity: self.capacity,
      entries: self.entries,
      probe: self.probe,
      phantom: PhantomData,
    }
  }
}

impl<V, P> Debug for Table<V, P>
where
  V: Debug,
  P: Params + ?Sized,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let mut debug: DebugMap<'_, '_> = f.debug_map();

    for entry in self.data.iter().filter_map(Slot::entry) {
      debug.entry(&entry.key, &entry.value);
    }

    debug.finish()
  }
}
