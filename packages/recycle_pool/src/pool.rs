use tracing::debug;

/// A last-in-first-out free list of reusable items.
///
/// Released items are stored in order and [`get()`][1] always hands back the most recently
/// released one. The pool performs no identity tracking: releasing the same value twice (for
/// example, two clones of one `Rc`) stores it twice.
///
/// Every operation is total. Taking from an empty pool returns `None` and evicting more items
/// than are stored simply empties the pool.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
///
/// let mut pool = Pool::new();
///
/// pool.release("first");
/// pool.release("second");
/// assert_eq!(pool.count(), 2);
///
/// assert_eq!(pool.get(), Some("second"));
/// assert_eq!(pool.get(), Some("first"));
/// assert_eq!(pool.get(), None);
/// ```
///
/// [1]: Self::get
#[derive(Clone, Debug)]
pub struct Pool<T> {
    /// Stored items, most recently released at the tail.
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Creates a new empty [`Pool`].
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new empty [`Pool`] that can store at least `capacity` items
    /// without allocating.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let pool = Pool::<String>::with_capacity(16);
    ///
    /// assert!(pool.capacity() >= 16);
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns an item to the pool.
    ///
    /// The item becomes the next one handed out by [`get()`][1].
    ///
    /// [1]: Self::get
    pub fn release(&mut self, item: T) {
        self.items.push(item);
    }

    /// Takes the most recently released item out of the pool.
    ///
    /// Returns `None` if the pool is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool = Pool::new();
    /// assert_eq!(pool.get(), None::<u32>);
    ///
    /// pool.release(7_u32);
    /// assert_eq!(pool.get(), Some(7));
    /// assert_eq!(pool.count(), 0);
    /// ```
    #[must_use]
    pub fn get(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The number of items currently stored in the pool.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items the pool can store without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops up to `n` of the most recently released items.
    ///
    /// If `n` is greater than the number of stored items, the pool is emptied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool: Pool<u8> = (1..=5).collect();
    ///
    /// pool.evict(2);
    /// assert_eq!(pool.count(), 3);
    /// assert_eq!(pool.get(), Some(3));
    ///
    /// pool.evict(100);
    /// assert!(pool.is_empty());
    /// ```
    pub fn evict(&mut self, n: usize) {
        let remaining = self.items.len().saturating_sub(n);
        let removed = self.items.len().saturating_sub(remaining);

        if removed == 0 {
            return;
        }

        self.items.truncate(remaining);

        debug!(removed, remaining, "evicted items from pool");
    }

    /// Releases storage capacity that is not used by any stored item.
    ///
    /// Useful after a large [`evict()`][1] to give memory back to the allocator.
    ///
    /// [1]: Self::evict
    #[cfg_attr(test, mutants::skip)] // Capacity after shrinking is allocator-defined.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Pool<T> {
    /// Releases every item of the iterator into the pool, in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Pool<T> {
    /// Creates a pool as if every item of the iterator had been released in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
