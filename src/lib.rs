//! A string-keyed hash table with open addressing and prime capacities.
//!
//! `htab` provides [`HTab`], an associative container from string keys to
//! values of any type. Entries live in a single contiguous slot array;
//! collisions are resolved by probing other slots of the same array.
//!
//! # Overview
//!
//! - Keys are text and cannot be removed; re-inserting a key overwrites its
//!   value in place.
//! - The slot count is always prime and grows (to the next prime at least
//!   twice as large) before an insertion would reach the maximum load.
//! - The probing strategy is chosen once per table: [`Probe::Linear`],
//!   [`Probe::Quadratic`], or [`Probe::DoubleHash`].
//!
//! # Usage
//!
//! ```
//! use htab::{HTab, Probe};
//!
//! // Create a table with room for 5 slots using linear probing
//! let mut table: HTab<u32> = HTab::new(5, Probe::Linear);
//!
//! // Store a few values
//! table.put("a", 1)?;
//! table.put("b", 2)?;
//!
//! // Overwrite one of them
//! assert_eq!(table.put("a", 3)?, Some(1));
//!
//! // Look them up
//! assert_eq!(table.get("a"), Some(&3));
//! assert!(table.has_key("b"));
//! assert!(!table.has_key("c"));
//! assert_eq!(table.keys().len(), 2);
//! # Ok::<(), htab::Error>(())
//! ```
//!
//! # Configuration
//!
//! The growth threshold and the double-hash stride bound are fixed at compile
//! time through the [`Params`] trait. The default configuration
//! ([`DefaultParams`]) grows at 60% load:
//!
//! ```
//! use htab::{DefaultParams, HTab};
//!
//! // These are equivalent:
//! let table1: HTab<u64> = HTab::with_capacity(11);
//! let table2: HTab<u64, DefaultParams> = HTab::with_capacity(11);
//! ```
//!
//! For other settings, use [`ConstParams`]:
//!
//! ```
//! use htab::{ConstParams, HTab, Probe};
//!
//! // Grow at 40% load, double-hash strides in `1..=3`
//! let table: HTab<u64, ConstParams<40, 3>> = HTab::new(31, Probe::DoubleHash);
//! assert_eq!(table.capacity(), 31);
//! ```
//!
//! Capacity is always rounded up to the next prime and clamped to the range
//! <code>[Capacity::MIN]..=[Capacity::MAX]</code>.
//!
//! # Errors
//!
//! [`HTab::put`] is the only fallible operation. It rejects empty keys, and
//! reports a quadratic probe sequence that finds no free slot instead of
//! searching forever. See [`Error`].
//!
//! # Concurrency
//!
//! `HTab` is a plain single-threaded container: mutation requires `&mut`,
//! and shared use across threads goes through an external lock.
//!
//! ```
//! use std::sync::{Arc, RwLock};
//! use std::thread;
//!
//! use htab::HTab;
//!
//! let table: Arc<RwLock<HTab<usize>>> = Arc::new(RwLock::new(HTab::default()));
//!
//! let handles: Vec<_> = (0..4)
//!   .map(|thread_id| {
//!     let table = Arc::clone(&table);
//!     thread::spawn(move || {
//!       let key: String = format!("worker-{thread_id}");
//!       table.write().unwrap().put(&key, thread_id).unwrap();
//!     })
//!   })
//!   .collect();
//!
//! for handle in handles {
//!   handle.join().unwrap();
//! }
//!
//! assert_eq!(table.read().unwrap().len(), 4);
//! ```
//!
//! # Logging
//!
//! Resizes are reported at `debug` level and exhausted probe sequences at
//! `warn` level through the [`log`] facade. No logger is installed.
//!
//! [Capacity::MAX]: crate::config::Capacity::MAX
//! [Capacity::MIN]: crate::config::Capacity::MIN
//! [`ConstParams`]: crate::config::ConstParams
//! [`DefaultParams`]: crate::config::DefaultParams
//! [`Params`]: crate::config::Params
//! [`HTab::put`]: crate::public::HTab::put
//! [`Error`]: crate::error::Error
//! [`log`]: https://docs.rs/log
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod array;
mod error;
mod hash;
mod iter;
mod params;
mod probe;
mod public;
mod table;
mod utils;

#[cfg(test)]
mod tests;

pub mod implementation {
  #![doc = include_str!("../IMPLEMENTATION.md")]
}

pub mod config {
  //! Configuration parameters which can be used to override the default table
  //! settings.

  pub use crate::params::Capacity;
  pub use crate::params::ConstParams;
  pub use crate::params::DebugParams;
  pub use crate::params::DefaultParams;
  pub use crate::params::LoadFactor;
  pub use crate::params::Params;
  pub use crate::params::ParamsExt;
}

#[doc(inline)]
pub use self::config::Capacity;

#[doc(inline)]
pub use self::config::ConstParams;

#[doc(inline)]
pub use self::config::DefaultParams;

#[doc(inline)]
pub use self::config::LoadFactor;

#[doc(inline)]
pub use self::config::Params;

pub use self::error::Error;
pub use self::error::Result;

pub use self::iter::Iter;
pub use self::iter::Keys;
pub use self::iter::Values;

pub use self::probe::Probe;

pub use self::public::HTab;
