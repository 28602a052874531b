//! A random-access collection of `(A, B)` pairs, stored so as to avoid internal fragmentation.
//!
//! A `Vec<(A, B)>` pads every element to the alignment of its largest half,
//! so a `(u8, u64)` takes up 16 bytes even though it only holds 9 bytes of data.
//! [PairVec] stores all the first halves in one vector and all the second halves
//! in another, which keeps both of them densely packed.

use std::{collections::TryReserveError, fmt};

use error_derive::Error;

/// A growable sequence of `(A, B)` pairs with columnar storage
#[derive(Clone, PartialEq, Eq)]
pub struct PairVec<A, B> {
    /// The first part of each element.
    firsts: Vec<A>,

    /// The second part of each element.
    ///
    /// Always exactly as long as `firsts`.
    seconds: Vec<B>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[msg = "index {index} is out of range for a pair vector of length {len}"]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PushError {
    #[msg = "failed to reserve space for another element"]
    Reserve(TryReserveError),
}

impl<A, B> Default for PairVec<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> PairVec<A, B> {
    /// Creates an empty instance
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            firsts: Vec::new(),
            seconds: Vec::new(),
        }
    }

    /// Creates an empty instance that can hold `capacity` elements before it reallocates
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            firsts: Vec::with_capacity(capacity),
            seconds: Vec::with_capacity(capacity),
        }
    }

    /// Return the number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.firsts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of elements that can be pushed without reallocating either half
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.firsts.capacity().min(self.seconds.capacity())
    }

    /// Return the `index`th element
    ///
    /// The pair is assembled from the two halves, so it is returned as a pair
    /// of references rather than a reference to a pair.
    pub fn get(&self, index: usize) -> Result<(&A, &B), IndexOutOfRange> {
        match (self.firsts.get(index), self.seconds.get(index)) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    /// Add `pair` to the end
    ///
    /// # Panics
    /// This function panics if memory for the new element cannot be allocated.
    pub fn push(&mut self, pair: (A, B)) {
        if let Err(error) = self.try_push(pair) {
            panic!("Failed to push element: {error}");
        }
    }

    /// Try to add `pair` to the end
    ///
    /// If there is no space for the element, an error is returned and `self`
    /// is left unchanged.
    pub fn try_push(&mut self, pair: (A, B)) -> Result<(), PushError> {
        self.try_reserve(1)?;

        // Neither of these can reallocate anymore, so the lengths stay in sync
        let (first, second) = pair;
        self.firsts.push(first);
        self.seconds.push(second);

        Ok(())
    }

    /// Make room for `additional` more elements in both halves
    ///
    /// Nothing is pushed here, so a failure halfway through only
    /// leaves behind some unused capacity.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let previous_capacity = self.capacity();

        self.firsts.try_reserve(additional)?;
        self.seconds.try_reserve(additional)?;

        if self.capacity() != previous_capacity {
            log::trace!(
                "Grew pair vector from {previous_capacity} to {} elements",
                self.capacity()
            );
        }

        Ok(())
    }
}

impl<A, B> Extend<(A, B)> for PairVec<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        // The size hint is only an optimization, a failed reservation will
        // resurface (and panic) in push
        let (lower_bound, _) = iter.size_hint();
        if let Err(error) = self.try_reserve(lower_bound) {
            log::trace!("Could not reserve space for {lower_bound} pairs upfront: {error}");
        }

        for pair in iter {
            self.push(pair);
        }
    }
}

impl<A, B> FromIterator<(A, B)> for PairVec<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut pairs = Self::new();
        pairs.extend(iter);
        pairs
    }
}

impl<A, B> fmt::Debug for PairVec<A, B>
where
    A: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.firsts.iter().zip(self.seconds.iter()))
            .finish()
    }
}
