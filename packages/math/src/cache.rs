//! Lazily cached sequences.
//!
//! A [`CachedIter`] wraps a producer (any iterator) and remembers every value
//! it yields, so replaying or indexing the sequence never pulls the producer
//! twice for the same position. Clones and views are handles onto one store.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, SequenceError};

type Producer<T> = Box<dyn Iterator<Item = T> + Send>;

struct Store<T> {
    values: Vec<T>,
    producer: Option<Producer<T>>,
}

impl<T: Clone> Store<T> {
    /// Pulls the producer until `index` is filled. Returns `None` once the
    /// producer has run dry before reaching it.
    fn fill_to(&mut self, index: usize) -> Option<T> {
        while self.values.len() <= index {
            let producer = self.producer.as_mut()?;
            match producer.next() {
                Some(value) => self.values.push(value),
                None => {
                    tracing::trace!(len = self.values.len(), "producer exhausted");
                    self.producer = None;
                    return None;
                }
            }
        }
        Some(self.values[index].clone())
    }
}

/// Values already in the store, read through a handle's offset and stride.
pub(crate) struct Seen<'a, T> {
    values: &'a [T],
    start: usize,
    step: usize,
}

impl<'a, T> Seen<'a, T> {
    pub(crate) fn len(&self) -> usize {
        match self.values.len().checked_sub(self.start) {
            Some(0) | None => 0,
            Some(remaining) => (remaining - 1) / self.step + 1,
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len() {
            self.values.get(self.start + index * self.step)
        } else {
            None
        }
    }

    pub(crate) fn last(&self) -> Option<&'a T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Like `slice::partition_point`, over the strided values.
    pub(crate) fn partition_point(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let (mut low, mut high) = (0, self.len());
        while low < high {
            let mid = low + (high - low) / 2;
            if pred(&self.values[self.start + mid * self.step]) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}

/// Result of slicing a cached sequence.
///
/// A bounded slice is materialized into a `Vec`; an open-ended slice is a
/// live view onto the same store.
#[derive(Debug)]
pub enum Slice<T, V> {
    Values(Vec<T>),
    View(V),
}

impl<T, V> Slice<T, V> {
    pub fn into_values(self) -> Option<Vec<T>> {
        match self {
            Slice::Values(values) => Some(values),
            Slice::View(_) => None,
        }
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Slice::Values(_) => None,
            Slice::View(view) => Some(view),
        }
    }
}

/// Caches the output of a producer.
///
/// A handle reads the store from `start` every `step` positions. Handles
/// made by [`CachedIter::new`] see every value; views see a stride of them.
///
/// # Example
///
/// ```
/// use math::cache::{CachedIter, CachedSequence};
///
/// let evens = CachedIter::new((1..).map(|n| n * 2));
/// assert_eq!(evens.get(1), Ok(4));
/// assert_eq!(evens.slice(2, Some(5), 1).unwrap().into_values(), Some(vec![6, 8, 10]));
/// ```
pub struct CachedIter<T> {
    store: Arc<Mutex<Store<T>>>,
    start: usize,
    step: usize,
}

impl<T> Clone for CachedIter<T> {
    fn clone(&self) -> Self {
        CachedIter {
            store: Arc::clone(&self.store),
            start: self.start,
            step: self.step,
        }
    }
}

impl<T> fmt::Debug for CachedIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.lock();
        f.debug_struct("CachedIter")
            .field("cached", &store.values.len())
            .field("exhausted", &store.producer.is_none())
            .field("start", &self.start)
            .field("step", &self.step)
            .finish()
    }
}

impl<T: Clone + Send + 'static> CachedIter<T> {
    pub fn new<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        CachedIter {
            store: Arc::new(Mutex::new(Store {
                values: Vec::new(),
                producer: Some(Box::new(producer.into_iter())),
            })),
            start: 0,
            step: 1,
        }
    }

    /// Value at `index` of this handle, producing it if needed.
    pub(crate) fn value_at(&self, index: usize) -> Option<T> {
        let position = index
            .checked_mul(self.step)
            .and_then(|offset| offset.checked_add(self.start))?;
        self.store.lock().fill_to(position)
    }

    /// Runs `f` over the values this handle has seen so far.
    pub(crate) fn with_values<R>(&self, f: impl FnOnce(Seen<'_, T>) -> R) -> R {
        let store = self.store.lock();
        f(Seen {
            values: &store.values,
            start: self.start,
            step: self.step,
        })
    }

    /// A handle on the same store reading `start, start + step, ...` of this one.
    fn view(&self, start: usize, step: usize) -> Self {
        CachedIter {
            store: Arc::clone(&self.store),
            start: self.start.saturating_add(start.saturating_mul(self.step)),
            step: self.step.saturating_mul(step),
        }
    }
}

/// Wraps `producer` in a new [`CachedIter`].
pub fn make_cache<I>(producer: I) -> CachedIter<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + Send + 'static,
    I::IntoIter: Send + 'static,
{
    CachedIter::new(producer)
}

/// Iterator over a cached sequence. Each one keeps its own position.
pub struct Iter<T> {
    cache: CachedIter<T>,
    position: usize,
}

impl<T: Clone + Send + 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cache.value_at(self.position)?;
        self.position += 1;
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.position = self.position.saturating_add(n);
        self.next()
    }
}

fn position(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| SequenceError::InvalidIndex { index })
}

/// Operations shared by every kind of cached sequence.
pub trait CachedSequence<T>: Sized
where
    T: Clone + Send + 'static,
{
    /// Wraps a handle on an existing store as a sequence of this kind.
    fn from_cache(cache: CachedIter<T>) -> Self;

    /// The underlying store.
    fn cache(&self) -> &CachedIter<T>;

    /// Iterates every value from the start, replaying cached ones.
    fn iter(&self) -> Iter<T> {
        Iter {
            cache: self.cache().clone(),
            position: 0,
        }
    }

    fn get(&self, index: isize) -> Result<T> {
        let index = position(index)?;
        self.cache()
            .value_at(index)
            .ok_or_else(|| SequenceError::OutOfRange {
                index,
                len: self.cached_len(),
            })
    }

    /// Selects `start, start + step, ...`.
    ///
    /// With a `stop` the selected values below it are collected. Without one
    /// the result is a view of the same kind over the same store, so values
    /// pulled through it are stored once and seen by every handle.
    fn slice(&self, start: isize, stop: Option<isize>, step: isize) -> Result<Slice<T, Self>> {
        let start = position(start)?;
        let step = usize::try_from(step)
            .ok()
            .filter(|&step| step > 0)
            .ok_or(SequenceError::InvalidStep { step })?;

        match stop {
            Some(stop) => {
                let stop = position(stop)?;
                let values = (start..stop)
                    .step_by(step)
                    .map_while(|index| self.cache().value_at(index))
                    .collect();
                Ok(Slice::Values(values))
            }
            None => Ok(Slice::View(Self::from_cache(self.cache().view(start, step)))),
        }
    }

    /// How many of this sequence's values have been produced so far.
    fn cached_len(&self) -> usize {
        self.cache().with_values(|seen| seen.len())
    }
}

impl<T: Clone + Send + 'static> CachedSequence<T> for CachedIter<T> {
    fn from_cache(cache: CachedIter<T>) -> Self {
        cache
    }

    fn cache(&self) -> &CachedIter<T> {
        self
    }
}

impl<T: Clone + Send + 'static> IntoIterator for &CachedIter<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
