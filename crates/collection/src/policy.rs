//! Capacity growth policy.
//!
//! A [`GrowthPolicy`] decides how many slots a [`GrowableArray`] allocates
//! when it is created and every time it runs out of room. Capacity at least
//! doubles on each growth, which keeps `n` sequential appends at `O(n)` total
//! copying. A bulk request that needs more than double is satisfied in one
//! step sized to fit.
//!
//! [`GrowableArray`]: crate::GrowableArray

/// Slot count of a freshly created array.
pub const DEFAULT_CAPACITY: usize = 16;

/// Growth configuration shared by every array created from it.
///
/// # Examples
///
/// ```
/// use collection::GrowthPolicy;
///
/// let policy = GrowthPolicy::new(4);
/// assert_eq!(policy.initial_capacity(), 4);
///
/// // Doubles when one more slot is needed.
/// assert_eq!(policy.grow(4, 5), 8);
/// // Jumps straight to the required size for large requests.
/// assert_eq!(policy.grow(4, 100), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    initial_capacity: usize,
}

impl GrowthPolicy {
    /// Creates a policy whose arrays start with `initial_capacity` slots.
    ///
    /// A zero initial capacity is raised to one so that an empty array always
    /// reports a non-zero capacity.
    #[must_use]
    pub const fn new(initial_capacity: usize) -> Self {
        let initial_capacity = if initial_capacity == 0 { 1 } else { initial_capacity };
        GrowthPolicy { initial_capacity }
    }

    /// Slot count a new or cleared array starts with.
    #[must_use]
    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the capacity to grow to when `required` slots are needed and
    /// `current` are allocated.
    ///
    /// The result is never below `required`, never below twice `current`
    /// (saturating), and never below the initial capacity.
    #[must_use]
    pub const fn grow(&self, current: usize, required: usize) -> usize {
        let doubled = current.saturating_mul(2);
        let mut target = if required > doubled { required } else { doubled };
        if target < self.initial_capacity {
            target = self.initial_capacity;
        }
        target
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::new(DEFAULT_CAPACITY)
    }
}
