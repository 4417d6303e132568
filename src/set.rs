/// A set of small non-negative integers backed by a single `u64` bitmask.
///
/// Every ordinal domain in this crate is tiny and bounded (occurrence ordinals
/// reach at most 53, weekday ordinals at most 6), so membership, insertion,
/// and intersection are all single bit operations and no allocation ever
/// happens. Iteration yields members in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrdinalSet(u64);

impl OrdinalSet {
    /// The largest value an `OrdinalSet` can hold.
    pub const MAX_ORDINAL: u32 = 63;

    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds `value` to the set. Inserting a member that is already present is
    /// a no-op, which is how duplicate ordinals in a specification collapse.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds [`OrdinalSet::MAX_ORDINAL`]. Callers validate
    /// ordinals against their (much smaller) domain ranges before inserting.
    pub fn insert(&mut self, value: u32) {
        assert!(value <= Self::MAX_ORDINAL);
        self.0 |= 1 << value;
    }

    /// Returns true if `value` is a member of the set.
    pub fn contains(&self, value: u32) -> bool {
        value <= Self::MAX_ORDINAL && self.0 & (1 << value) != 0
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of members.
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if `self` and `other` share at least one member.
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let bits = self.0;
        (0..=Self::MAX_ORDINAL).filter(move |value| bits & (1 << value) != 0)
    }
}

impl FromIterator<u32> for OrdinalSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = OrdinalSet::new();
        assert!(set.is_empty());

        set.insert(3);
        set.insert(53);
        set.insert(0);

        assert!(set.contains(0));
        assert!(set.contains(3));
        assert!(set.contains(53));
        assert!(!set.contains(4));
        assert_eq!(3, set.len());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: OrdinalSet = [2, 2, 2, 5].into_iter().collect();
        assert_eq!(2, set.len());
    }

    #[test]
    fn test_iter_is_ascending() {
        let set: OrdinalSet = [42, 1, 7, 3].into_iter().collect();
        let members: Vec<u32> = set.iter().collect();
        assert_eq!(vec![1, 3, 7, 42], members);
    }

    #[test]
    fn test_intersects() {
        let a: OrdinalSet = [1, 3].into_iter().collect();
        let b: OrdinalSet = [3, 5].into_iter().collect();
        let c: OrdinalSet = [2, 4].into_iter().collect();

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&OrdinalSet::new()));
    }

    #[test]
    #[should_panic]
    fn test_insert_out_of_range_panics() {
        let mut set = OrdinalSet::new();
        set.insert(64);
    }
}
