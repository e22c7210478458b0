// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::{Dimension, IntoDimension};

/// Iterator over the multi-indices of some extents, in row major order.
///
/// Iterator element type is `D`.
#[derive(Clone, Debug)]
pub(crate) struct IndexIter<D>
{
    dim: D,
    index: Option<D>,
    remaining: usize,
}

impl<D: Dimension> IndexIter<D>
{
    pub(crate) fn new(dim: D) -> Self
    {
        IndexIter {
            index: dim.first_index(),
            remaining: dim.size(),
            dim,
        }
    }
}

impl<D: Dimension> Iterator for IndexIter<D>
{
    type Item = D;

    #[inline]
    fn next(&mut self) -> Option<D>
    {
        let index = self.index.take()?;
        self.index = self.dim.next_for(index.clone());
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let l = if self.index.is_some() { self.remaining } else { 0 };
        (l, Some(l))
    }
}

impl<D: Dimension> ExactSizeIterator for IndexIter<D> {}

/// An iterator over the indices of a tensor shape.
///
/// Iterator element type is `D::Pattern`.
#[derive(Clone, Debug)]
pub struct Indices<D>
{
    inner: IndexIter<D>,
}

/// Create an iterable of the tensor shape `shape`.
///
/// *Note:* prefer higher order methods, arithmetic operations and
/// non-indexed iteration when possible.
///
/// ```
/// use ndtensor::indices;
///
/// let idx: Vec<_> = indices((2, 2)).collect();
/// assert_eq!(idx, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
/// ```
pub fn indices<E>(shape: E) -> Indices<E::Dim>
where E: IntoDimension
{
    Indices {
        inner: IndexIter::new(shape.into_dimension()),
    }
}

impl<D: Dimension> Iterator for Indices<D>
{
    type Item = D::Pattern;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        self.inner.next().map(Dimension::into_pattern)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl<D: Dimension> ExactSizeIterator for Indices<D> {}
