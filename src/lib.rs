#![deny(warnings, missing_docs, missing_debug_implementations)]

//! # slotpool
//!
//! This library provides [`SlotPool`], a container with persistent,
//! validity-checked keys to access stored values. Upon insertion a key is
//! returned that can be used to later access or remove the value. Insertion,
//! removal and access all take O(1) time with low overhead. Great for storing
//! collections of objects that need stable, safe references but have no clear
//! ownership otherwise, such as game entities, resources or graph nodes.
//!
//! The difference between a [`HashMap`] and a slot pool is that the slot pool
//! generates and returns the key when inserting a value. A key is always
//! unique and will only refer to the value that was inserted. A slot pool's
//! main purpose is to simply own things in a safe and efficient manner.
//!
//! Values are stored contiguously in removal-compacted order, so iterating
//! over the live values is as cache-friendly as iterating over a [`Vec`].
//! Each access through a key costs one extra array lookup to translate the
//! key into the current value position.
//!
//! # Examples
//!
//! ```
//! # use slotpool::*;
//! let mut pool = SlotPool::new();
//! let foo = pool.insert("foo");  // Key generated on insert.
//! let bar = pool.insert("bar");
//! assert_eq!(pool[foo], "foo");
//! assert_eq!(pool[bar], "bar");
//!
//! pool.remove(bar);
//! let reused = pool.insert("reuse");  // Space from bar reused.
//! assert_eq!(pool.contains_key(bar), false);  // After removal a key stays invalid.
//! assert_eq!(pool[reused], "reuse");
//! ```
//!
//! Besides owning keys, [`ItemRef`] provides a non-owning observer over a
//! pool: a `(pool, key)` pair that performs a fresh validity check on every
//! access instead of caching a reference.
//!
//! ```
//! # use slotpool::*;
//! let mut pool = SlotPool::new();
//! let key = pool.insert(42);
//! let item = ItemRef::new(Some(&pool), key);
//! assert_eq!(item.get(), Ok(&42));
//! ```
//!
//! # Performance characteristics and implementation details
//!
//! Each key contains an index into a slot table and a generation counter.
//! A slot remembers the generation of its current or most recent occupant;
//! the generation advances every time the slot is freed. Only when the stored
//! generation and the generation in a key match is the key valid, so storage
//! can be reused without letting removed keys point at spurious new values.
//! Values themselves live in a dense array with a parallel array recording
//! which key owns each position, which is what makes iteration fast and lets
//! a position be translated back into its key.
//!
//! A slot pool never shrinks - it needs to remember the latest generation of
//! every slot as to not hand out duplicate keys. The slot table grows by
//! doubling and growth only ever appends fresh slots, so outstanding keys
//! survive any number of insertions. A pool can hold up to
//! 2<sup>32</sup> - 1 values at a time.
//!
//! The pool is a single-threaded component: it performs no internal locking,
//! and exclusive access during mutation is exactly what `&mut self` already
//! expresses.
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html
//! [`HashMap`]: https://doc.rust-lang.org/std/collections/struct.HashMap.html
//! [`SlotPool`]: pool/struct.SlotPool.html
//! [`ItemRef`]: handle/struct.ItemRef.html

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod handle;
pub mod pool;

pub use crate::handle::{ItemRef, ResolveError};
pub use crate::pool::SlotPool;

/// Key used to access stored values in a slot pool.
///
/// Do not use a key from one pool in another. The behavior is safe but
/// non-sensical: lookups with a foreign key simply fail. Keys implement
/// `Ord` so they can be used in e.g.
/// [`BTreeMap`](https://doc.rust-lang.org/std/collections/struct.BTreeMap.html),
/// but their order is arbitrary. Equality and hashing cover both the index
/// and the generation, so keys also work as lookup keys in an external map
/// associating extra data with pool entries.
///
/// A key never holds a reference to its pool; whether it is valid is only
/// meaningful relative to a specific pool instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl Key {
    /// Creates a key from raw parts.
    ///
    /// Every pool operation validates the keys it is given, so a key built
    /// from arbitrary parts is safe to use; it just fails lookup unless a
    /// live entry happens to match both fields.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slotpool::*;
    /// let pool: SlotPool<i32> = SlotPool::new();
    /// let bogus = Key::new(12, 3);
    /// assert_eq!(pool.get(bogus), None);
    /// ```
    pub fn new(index: u32, generation: u32) -> Self {
        Self {
            idx: index,
            generation,
        }
    }

    /// Returns the slot index this key refers to.
    pub fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation at which this key was issued.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slotpool::*;
    /// let mut pool = SlotPool::new();
    /// let first = pool.insert("a");
    /// pool.remove(first);
    /// let second = pool.insert("b");
    /// // The freed slot is reused at the next generation.
    /// assert_eq!(second.index(), first.index());
    /// assert_eq!(second.generation(), first.generation() + 1);
    /// ```
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// Creates a key that is invalid in every pool and distinct from any key
    /// a pool hands out. Useful as an initial value for fields that do not
    /// point at anything yet.
    ///
    /// A null key is always invalid, but an invalid key (that is, a key that
    /// has been removed from a pool) does not become a null key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slotpool::*;
    /// let pool: SlotPool<i32> = SlotPool::new();
    /// let nk = Key::null();
    /// assert!(nk.is_null());
    /// assert_eq!(pool.get(nk), None);
    /// ```
    pub fn null() -> Self {
        Self {
            idx: u32::MAX,
            generation: 0,
        }
    }

    /// Checks if a key is null.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slotpool::*;
    /// let a = Key::null();
    /// let b = Key::default();
    /// assert_eq!(a, b);
    /// ```
    pub fn is_null(self) -> bool {
        self.idx == u32::MAX
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::null()
    }
}
