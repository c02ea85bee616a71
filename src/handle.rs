//! Contains the non-owning observer handle over a slot pool.

use std::error::Error;
use std::fmt;

use crate::pool::SlotPool;
use crate::Key;

/// Error returned when an [`ItemRef`](struct.ItemRef.html) fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The reference was constructed without a pool to look in.
    MissingPool,
    /// The pool holds no live value for the key: the entry was removed, the
    /// pool was cleared, or the key never belonged to this pool.
    KeyNotFound,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::MissingPool => write!(f, "item reference is not attached to a pool"),
            ResolveError::KeyNotFound => write!(f, "key is not present in the pool"),
        }
    }
}

impl Error for ResolveError {}

/// Non-owning observer over a single entry of a [`SlotPool`].
///
/// An `ItemRef` is a plain pair of an optional shared pool reference and a
/// key copy. It never caches a reference to the value itself: every call to
/// [`get`](#method.get) performs a fresh validated lookup, so the answer
/// always reflects the entry's current liveness. Construction with no pool
/// at all is legal; such a reference reports its unbound state on access.
///
/// The pool reference is a plain borrow, which ties the observer's lifetime
/// to the pool and keeps it read-only for as long as any `ItemRef` to it is
/// alive. `ItemRef` is `Copy` regardless of the value type, so handing
/// observers around is free.
///
/// # Examples
///
/// ```
/// # use slotpool::*;
/// let mut pool = SlotPool::new();
/// let live = pool.insert(1);
/// let stale = pool.insert(2);
/// pool.remove(stale);
///
/// assert_eq!(ItemRef::new(Some(&pool), live).get(), Ok(&1));
/// assert_eq!(
///     ItemRef::new(Some(&pool), stale).get(),
///     Err(ResolveError::KeyNotFound)
/// );
/// assert_eq!(
///     ItemRef::<i32>::new(None, live).get(),
///     Err(ResolveError::MissingPool)
/// );
/// ```
///
/// [`SlotPool`]: ../pool/struct.SlotPool.html
pub struct ItemRef<'a, T> {
    pool: Option<&'a SlotPool<T>>,
    key: Key,
}

// Copy and Clone are implemented manually because an ItemRef should be
// copyable even when T is not.
impl<'a, T> Copy for ItemRef<'a, T> {}

impl<'a, T> Clone for ItemRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> fmt::Debug for ItemRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ItemRef")
            .field("bound", &self.pool.is_some())
            .field("key", &self.key)
            .finish()
    }
}

impl<'a, T> ItemRef<'a, T> {
    /// Creates an observer over `pool` for `key`. Passing `None` for the
    /// pool is a legal construction state; resolving such a reference
    /// reports [`ResolveError::MissingPool`](enum.ResolveError.html).
    pub fn new(pool: Option<&'a SlotPool<T>>, key: Key) -> Self {
        Self { pool, key }
    }

    /// Returns a copy of the key this reference observes.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Returns whether this reference has a pool to look in.
    pub fn is_bound(&self) -> bool {
        self.pool.is_some()
    }

    /// Resolves the reference, validating it from scratch.
    ///
    /// An unbound reference reports `MissingPool`; a key with no live entry
    /// in the pool reports `KeyNotFound`; otherwise the live value is
    /// returned and further member access chains through the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slotpool::*;
    /// let mut pool = SlotPool::new();
    /// let key = pool.insert(String::from("resource"));
    ///
    /// let item = ItemRef::new(Some(&pool), key);
    /// assert_eq!(item.get().map(String::len), Ok(8));
    /// ```
    pub fn get(&self) -> Result<&'a T, ResolveError> {
        let pool = self.pool.ok_or(ResolveError::MissingPool)?;
        pool.get(self.key).ok_or(ResolveError::KeyNotFound)
    }
}

impl<'a, T> Default for ItemRef<'a, T> {
    fn default() -> Self {
        Self {
            pool: None,
            key: Key::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_live_value() {
        let mut pool = SlotPool::new();
        let key = pool.insert(42);

        let item = ItemRef::new(Some(&pool), key);
        assert_eq!(item.get(), Ok(&42));
    }

    #[test]
    fn chains_member_access() {
        let mut pool = SlotPool::new();
        let key = pool.insert(vec![1, 2, 3]);

        let item = ItemRef::new(Some(&pool), key);
        assert_eq!(item.get().map(Vec::len), Ok(3));
        assert_eq!(item.get().unwrap()[2], 3);
    }

    #[test]
    fn stale_key_reports_not_found() {
        let mut pool = SlotPool::new();
        let key = pool.insert(42);
        pool.remove(key);

        let item = ItemRef::new(Some(&pool), key);
        assert_eq!(item.get(), Err(ResolveError::KeyNotFound));
    }

    #[test]
    fn forged_key_reports_not_found() {
        let mut pool = SlotPool::new();
        pool.insert(42);

        let bogus = ItemRef::new(Some(&pool), Key::new(17, 4));
        assert_eq!(bogus.get(), Err(ResolveError::KeyNotFound));

        let null = ItemRef::new(Some(&pool), Key::null());
        assert_eq!(null.get(), Err(ResolveError::KeyNotFound));
    }

    #[test]
    fn unbound_reports_missing_pool() {
        let item: ItemRef<i32> = ItemRef::new(None, Key::new(0, 0));
        assert!(!item.is_bound());
        assert_eq!(item.get(), Err(ResolveError::MissingPool));
    }

    #[test]
    fn default_is_unbound_null() {
        let item: ItemRef<u8> = ItemRef::default();
        assert!(!item.is_bound());
        assert!(item.key().is_null());
        assert_eq!(item.get(), Err(ResolveError::MissingPool));
    }

    #[test]
    fn copyable_without_clonable_values() {
        let mut pool = SlotPool::new();
        let key = pool.insert(String::from("shared"));

        let a = ItemRef::new(Some(&pool), key);
        let b = a;
        assert_eq!(a.get(), b.get());
        assert_eq!(b.key(), key);
    }

    #[test]
    fn many_refs_resolve() {
        let mut pool = SlotPool::with_capacity(256);
        let keys: Vec<Key> = (0..256).map(|i| pool.insert(i)).collect();

        let refs: Vec<ItemRef<i32>> = keys
            .iter()
            .map(|&key| ItemRef::new(Some(&pool), key))
            .collect();

        for (i, item) in refs.iter().enumerate() {
            assert_eq!(item.get(), Ok(&(i as i32)));
        }
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            ResolveError::MissingPool.to_string(),
            "item reference is not attached to a pool"
        );
        assert_eq!(
            ResolveError::KeyNotFound.to_string(),
            "key is not present in the pool"
        );
    }
}
