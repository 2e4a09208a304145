use super::Bimap;
use crate::raw::RawBimap;

impl<L, R> Bimap<L, R> {
    /// Creates an empty map with room for at least `capacity` pairs before
    /// the record arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map: Bimap<i32, i32> = Bimap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Bimap {
            raw: RawBimap::with_capacity(capacity),
        }
    }

    /// Returns the current capacity of the record arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map: Bimap<i32, i32> = Bimap::with_capacity(32);
    /// assert_eq!(map.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
