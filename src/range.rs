use core::iter::Rev;

use alloc::vec::Vec;

use crate::index::Index;
use crate::iter::CountingIter;

/// A sequence paired with counter configuration, ready for traversal.
///
/// Created by [`count`], [`rcount`], [`count_owned`] or [`rcount_owned`].
/// The range is lazy: nothing is traversed until it is consumed by a `for`
/// loop or an explicit `into_iter()` call. Whether the range borrows or owns
/// the underlying sequence is decided by the entry point that built it (see
/// the crate-level docs).
///
/// The two knobs are independent of each other and of the element direction:
///
/// - [`offset`](Counted::offset) sets the base value of the counter
///   (default 0).
/// - [`reverse_index`](Counted::reverse_index) makes the counter decrement
///   per step, starting at `offset + len - 1` so that the final element sees
///   `offset`.
#[derive(Debug, Clone)]
#[must_use = "ranges are lazy and do nothing unless consumed"]
pub struct Counted<I> {
    iter: I,
    offset: Index,
    reverse_index: bool,
    // Length recorded when `reverse_index` is enabled; needed to compute the
    // starting value of a decrementing counter.
    len: usize,
}

impl<I: Iterator> Counted<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            offset: 0,
            reverse_index: false,
            len: 0,
        }
    }

    /// Sets the base value of the counter.
    ///
    /// ```
    /// use countrange::count;
    ///
    /// let list = ["L1", "L2", "L3", "L4", "L5"];
    /// let pairs: Vec<_> = count(&list).offset(100).into_iter().collect();
    /// assert_eq!(pairs[0], (&"L1", 100));
    /// assert_eq!(pairs[4], (&"L5", 104));
    /// ```
    pub fn offset(mut self, offset: Index) -> Self {
        self.offset = offset;
        self
    }

    /// Makes the counter decrement per step instead of incrementing.
    ///
    /// The counter starts at `offset + len - 1` and reaches `offset` at the
    /// final element. Element order is unaffected; combine with [`rcount`]
    /// to reverse both. Requires the underlying iterator to report an exact
    /// length, which all container and slice iterators do.
    ///
    /// ```
    /// use countrange::count;
    ///
    /// let letters = ["A", "B", "C", "D", "E"];
    /// let pairs: Vec<_> = count(&letters).reverse_index().into_iter().collect();
    /// assert_eq!(pairs.first(), Some(&(&"A", 4)));
    /// assert_eq!(pairs.last(), Some(&(&"E", 0)));
    /// ```
    pub fn reverse_index(mut self) -> Self
    where
        I: ExactSizeIterator,
    {
        self.len = self.iter.len();
        self.reverse_index = true;
        self
    }
}

impl<I: Iterator> IntoIterator for Counted<I> {
    type Item = (I::Item, Index);
    type IntoIter = CountingIter<I>;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn into_iter(self) -> Self::IntoIter {
        // Wrapping: an empty sequence with a decrementing counter yields no
        // pairs, so its (wrapped) starting value is never observed.
        let start = if self.reverse_index {
            self.offset.wrapping_add(self.len as Index).wrapping_sub(1)
        } else {
            self.offset
        };
        CountingIter::new(self.iter, start, self.reverse_index)
    }
}

/// Counted traversal in forward element order.
///
/// Accepts anything iterable. Pass a reference to borrow the sequence, or a
/// value to move it into the range:
///
/// ```
/// use countrange::count;
///
/// let arr = [42, 43, 44, 45, 46, 47];
/// for (value, index) in count(&arr) {
///     assert_eq!(*value, 42 + index as i32);
/// }
/// ```
pub fn count<S: IntoIterator>(seq: S) -> Counted<S::IntoIter> {
    Counted::new(seq.into_iter())
}

/// Counted traversal in reverse element order.
///
/// The counter still starts at `offset` and increments per step unless
/// `reverse_index` is also set.
///
/// ```
/// use countrange::rcount;
///
/// let letters = ["A", "B", "C"];
/// let pairs: Vec<_> = rcount(&letters).into_iter().collect();
/// assert_eq!(pairs, vec![(&"C", 0), (&"B", 1), (&"A", 2)]);
/// ```
pub fn rcount<S>(seq: S) -> Counted<Rev<S::IntoIter>>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
{
    Counted::new(seq.into_iter().rev())
}

/// Counted traversal over an internally owned copy, forward element order.
///
/// Collects the source into an owned vector before building the range, so
/// the source may lend its elements only transiently: once this function
/// returns, the original can be mutated or dropped without affecting the
/// traversal.
///
/// ```
/// use countrange::count_owned;
///
/// let mut source = vec![1, 2, 3];
/// let range = count_owned(source.iter().copied());
/// source.clear();
/// let pairs: Vec<_> = range.into_iter().collect();
/// assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
/// ```
pub fn count_owned<S: IntoIterator>(seq: S) -> Counted<alloc::vec::IntoIter<S::Item>> {
    let items: Vec<S::Item> = seq.into_iter().collect();
    Counted::new(items.into_iter())
}

/// Counted traversal over an internally owned copy, reverse element order.
pub fn rcount_owned<S: IntoIterator>(seq: S) -> Counted<Rev<alloc::vec::IntoIter<S::Item>>> {
    let items: Vec<S::Item> = seq.into_iter().collect();
    Counted::new(items.into_iter().rev())
}
