use std::{cmp::Ordering, fmt};

use log::{debug, trace};

use crate::error::{HeapError, Result};

/// Comparator type used by the [`PriorityHeap::min_heap`] and
/// [`PriorityHeap::max_heap`] constructors.
pub type OrdComparator<P> = fn(&P, &P) -> Ordering;

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

fn left(parent: usize) -> usize {
    2 * parent + 1
}

fn right(parent: usize) -> usize {
    2 * parent + 2
}

fn reverse_cmp<P: Ord>(a: &P, b: &P) -> Ordering {
    b.cmp(a)
}

/// A binary heap over a `Vec`, ordered by a comparator supplied at construction.
///
/// The element comparing as `Ordering::Less` is the one with the higher
/// priority, so `PriorityHeap::new(i32::cmp)` keeps the smallest value at the
/// root. Besides the usual insert and pop, any element can be removed by its
/// index in the backing array (see [`as_slice`](Self::as_slice)).
pub struct PriorityHeap<P, C> {
    data: Vec<P>,
    comparator: C,
}

impl<P, C> PriorityHeap<P, C>
where
    C: Fn(&P, &P) -> Ordering,
{
    pub fn new(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    /// Preallocates room for `capacity` elements. The heap still grows past it.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a heap out of an arbitrary vector in O(n).
    pub fn from_vec(mut data: Vec<P>, comparator: C) -> Self {
        let l = data.len();
        for i in (0..l / 2).rev() {
            Self::sift_down(&mut data, &comparator, i, l);
        }
        debug!("heapified {} elements", l);
        Self { data, comparator }
    }

    pub fn insert(&mut self, element: P) {
        self.data.push(element);
        let last = self.data.len() - 1;
        let i = self.sift_up(last);
        trace!("inserted at {}, settled at {}", last, i);
    }

    /// Removes and returns the element at `index` of the backing array.
    ///
    /// The last element takes its place and is sifted down, or up when it
    /// outranks its new parent. Fails with [`HeapError::InvalidIndex`] without
    /// touching the heap when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<P> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::InvalidIndex { index, len });
        }
        let removed = self.data.swap_remove(index);
        let len = self.data.len();
        if index < len {
            let mut i = Self::sift_down(&mut self.data, &self.comparator, index, len);
            if i == index {
                i = self.sift_up(index);
            }
            trace!("removed at {}, moved last element to {}", index, i);
        }
        Ok(removed)
    }

    /// Removes the highest priority element.
    pub fn pop(&mut self) -> Option<P> {
        self.remove_at(0).ok()
    }

    /// Returns the highest priority element, or [`HeapError::EmptyHeap`].
    pub fn peek(&self) -> Result<&P> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The tree in array order: the children of `i` live at `2i + 1` and `2i + 2`.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<P> {
        self.data
    }

    /// Sorts the elements in place and returns them in reverse priority
    /// order, so the highest priority element ends up last.
    pub fn into_sorted_vec(self) -> Vec<P> {
        let Self {
            mut data,
            comparator,
        } = self;
        let l = data.len();
        for end in (1..l).rev() {
            data.swap(0, end);
            Self::sift_down(&mut data, &comparator, 0, end);
        }
        debug!("sorted {} elements", l);
        data
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = parent(i);
            if (self.comparator)(&self.data[i], &self.data[p]) != Ordering::Less {
                break;
            }
            self.data.swap(i, p);
            i = p;
        }
        i
    }

    // Only `data[..end]` belongs to the tree. Returns where the element starting
    // at `start` came to rest.
    fn sift_down(data: &mut [P], comparator: &C, start: usize, end: usize) -> usize {
        let mut i = start;
        loop {
            let l = left(i);
            if l >= end {
                return i;
            }
            let r = right(i);
            // ties go to the left child
            if r < end
                && comparator(&data[r], &data[l]) == Ordering::Less
                && comparator(&data[r], &data[i]) == Ordering::Less
            {
                data.swap(i, r);
                i = r;
                continue;
            }
            if comparator(&data[l], &data[i]) == Ordering::Less {
                data.swap(i, l);
                i = l;
                continue;
            }
            return i;
        }
    }
}

impl<P: Ord> PriorityHeap<P, OrdComparator<P>> {
    /// Smallest value first.
    pub fn min_heap() -> Self {
        Self::new(P::cmp)
    }

    /// Largest value first.
    pub fn max_heap() -> Self {
        Self::new(reverse_cmp)
    }
}

impl<P, C> Extend<P> for PriorityHeap<P, C>
where
    C: Fn(&P, &P) -> Ordering,
{
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

impl<P: fmt::Debug, C> fmt::Debug for PriorityHeap<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cur in self.data.iter() {
            write!(f, "{:?} ", cur)?;
        }
        Ok(())
    }
}
