//! Cached sequences known to be non-decreasing.

use std::cmp::Ordering;
use std::fmt;

use crate::cache::{CachedIter, CachedSequence, Iter};
use crate::error::{Result, SequenceError};

/// Passes values through, checking in debug builds that they never decrease.
struct Ascending<I: Iterator> {
    inner: I,
    last: Option<I::Item>,
}

impl<I> Iterator for Ascending<I>
where
    I: Iterator,
    I::Item: Ord + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.next()?;
        debug_assert!(
            self.last.as_ref().is_none_or(|last| *last <= value),
            "ascending producer yielded a smaller value"
        );
        self.last = Some(value.clone());
        Some(value)
    }
}

/// Where a query lands within the values cached so far.
enum Lookup {
    Found(usize),
    Absent,
    Beyond(usize),
}

/// A [`CachedIter`] over a non-decreasing producer, with membership and
/// position queries that stop as soon as the sequence passes the query.
///
/// # Example
///
/// ```
/// use math::ascending::AscendingCachedIter;
///
/// let evens = AscendingCachedIter::new((1..).map(|n| n * 2));
/// assert!(evens.contains(&10));
/// assert!(!evens.contains(&11));
/// assert_eq!(evens.index_of(&10), Ok(4));
/// ```
pub struct AscendingCachedIter<T> {
    cache: CachedIter<T>,
}

impl<T> Clone for AscendingCachedIter<T> {
    fn clone(&self) -> Self {
        AscendingCachedIter {
            cache: self.cache.clone(),
        }
    }
}

impl<T> fmt::Debug for AscendingCachedIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AscendingCachedIter").field(&self.cache).finish()
    }
}

impl<T: Ord + Clone + Send + 'static> AscendingCachedIter<T> {
    pub fn new<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        AscendingCachedIter {
            cache: CachedIter::new(Ascending {
                inner: producer.into_iter(),
                last: None,
            }),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_ok()
    }

    /// Zero-based position of the first occurrence of `value`.
    ///
    /// Cached values are searched first. Past them the producer is pulled
    /// only until it yields something larger than `value`.
    pub fn index_of(&self, value: &T) -> Result<usize> {
        let lookup = self.cache.with_values(|seen| {
            let position = seen.partition_point(|v| v < value);
            match seen.get(position) {
                Some(found) if found == value => Lookup::Found(position),
                Some(_) => Lookup::Absent,
                None => Lookup::Beyond(position),
            }
        });

        let mut position = match lookup {
            Lookup::Found(position) => return Ok(position),
            Lookup::Absent => return Err(SequenceError::NotFound),
            Lookup::Beyond(position) => position,
        };

        loop {
            let candidate = self
                .cache
                .value_at(position)
                .ok_or(SequenceError::NotFound)?;
            match candidate.cmp(value) {
                Ordering::Equal => return Ok(position),
                Ordering::Greater => return Err(SequenceError::NotFound),
                Ordering::Less => position += 1,
            }
        }
    }

    /// Largest value produced so far, if any.
    pub fn cached_max(&self) -> Option<T> {
        self.cache.with_values(|seen| seen.last().cloned())
    }
}

/// Wraps a non-decreasing `producer` in a new [`AscendingCachedIter`].
pub fn make_ascending_cache<I>(producer: I) -> AscendingCachedIter<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone + Send + 'static,
    I::IntoIter: Send + 'static,
{
    AscendingCachedIter::new(producer)
}

impl<T: Ord + Clone + Send + 'static> CachedSequence<T> for AscendingCachedIter<T> {
    fn from_cache(cache: CachedIter<T>) -> Self {
        AscendingCachedIter { cache }
    }

    fn cache(&self) -> &CachedIter<T> {
        &self.cache
    }
}

impl<T: Ord + Clone + Send + 'static> IntoIterator for &AscendingCachedIter<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evens() -> AscendingCachedIter<i64> {
        AscendingCachedIter::new((1..).map(|n| n * 2))
    }

    #[test]
    fn test_finite() {
        let finite = make_ascending_cache(1..10);

        assert!(finite.contains(&2));
        assert!(!finite.contains(&-3));
        assert!(!finite.contains(&20));
        assert_eq!(finite.cached_len(), 9);
    }

    #[test]
    fn test_infinite() {
        let evens = evens();

        assert!(evens.contains(&2));
        assert!(!evens.contains(&3));
        assert!(!evens.contains(&1_001));
        assert!(evens.contains(&1_000));
    }

    #[test]
    fn test_index() {
        let evens = evens();

        assert_eq!(evens.get(4), Ok(10));
        assert_eq!(evens.index_of(&10), Ok(4));
        assert_eq!(evens.index_of(&3), Err(SequenceError::NotFound));
    }

    #[test]
    fn test_index_beyond_cache_stops_on_overshoot() {
        let evens = evens();

        assert_eq!(evens.index_of(&21), Err(SequenceError::NotFound));
        assert_eq!(evens.cached_len(), 11);
        assert_eq!(evens.cached_max(), Some(22));

        // Answered from the cache alone.
        assert_eq!(evens.index_of(&16), Ok(7));
        assert_eq!(evens.index_of(&15), Err(SequenceError::NotFound));
        assert_eq!(evens.cached_len(), 11);
    }

    #[test]
    fn test_index_finds_first_of_repeats() {
        let steps = make_ascending_cache(vec![1, 2, 2, 2, 5]);

        assert_eq!(steps.index_of(&2), Ok(1));
        assert_eq!(steps.index_of(&2), Ok(1));
        assert_eq!(steps.index_of(&5), Ok(4));
        assert_eq!(steps.index_of(&6), Err(SequenceError::NotFound));
    }

    #[test]
    fn test_open_slice_keeps_queries() {
        let evens = evens();

        let tail = evens.slice(5, None, 1).unwrap().into_view().unwrap();
        assert_eq!(tail.get(0), Ok(12));
        assert_eq!(tail.index_of(&20), Ok(4));
        assert!(!tail.contains(&10));
        assert!(!tail.contains(&13));
    }

    #[test]
    fn test_stepped_view_queries() {
        let evens = evens();
        let fours = evens.slice(1, None, 2).unwrap().into_view().unwrap();

        assert_eq!(fours.index_of(&12), Ok(2));
        assert_eq!(fours.index_of(&10), Err(SequenceError::NotFound));
        assert_eq!(fours.cached_max(), Some(12));

        // The parent sees the values the view pulled, and more.
        assert_eq!(evens.cached_len(), 6);
        assert_eq!(evens.cached_max(), Some(12));
        assert_eq!(evens.index_of(&10), Ok(4));
        assert_eq!(fours.cached_len(), 3);
    }

    #[test]
    #[should_panic(expected = "ascending producer yielded a smaller value")]
    #[cfg(debug_assertions)]
    fn test_descending_producer_is_rejected() {
        let broken = make_ascending_cache(vec![3, 1]);
        let _ = broken.get(1);
    }
}
