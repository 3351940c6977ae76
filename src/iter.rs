use crate::index::Index;

/// Iterator yielding `(element, index)` pairs.
///
/// Produced by consuming a [`Counted`](crate::Counted) range. The index moves
/// in lockstep with the elements: +1 per step by default, -1 per step when the
/// range was configured with `reverse_index`. The underlying iterator alone
/// decides when iteration stops; the index never participates in termination.
///
/// This iterator implements `Clone` when the underlying iterator does.
#[derive(Debug, Clone)]
pub struct CountingIter<I> {
    iter: I,
    index: Index,
    reverse_index: bool,
}

impl<I> CountingIter<I> {
    pub(crate) fn new(iter: I, start: Index, reverse_index: bool) -> Self {
        Self {
            iter,
            index: start,
            reverse_index,
        }
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = (I::Item, Index);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        // Wrapping: the step past the last yielded index is never observed,
        // and must not panic for unsigned index types counting down to 0.
        self.index = if self.reverse_index {
            self.index.wrapping_sub(1)
        } else {
            self.index.wrapping_add(1)
        };
        Some((value, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for CountingIter<I> {}
