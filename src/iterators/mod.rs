// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element iterators of containers and views, in logical (row major)
//! order.

use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice::{self, Iter as SliceIter, IterMut as SliceIterMut};

use rawpointer::PointerExt;

use crate::Dimension;

/// Base for tensor iterators
///
/// Iterator element type is `NonNull<A>`.
#[derive(Debug)]
pub(crate) struct Baseiter<A, D>
{
    ptr: NonNull<A>,
    dim: D,
    strides: D,
    index: Option<D>,
}

impl<A, D: Dimension> Baseiter<A, D>
{
    /// Creating a Baseiter is unsafe because shape and stride parameters
    /// need to be correct to avoid performing an unsafe pointer offset while
    /// iterating.
    #[inline]
    pub(crate) unsafe fn new(ptr: NonNull<A>, len: D, stride: D) -> Baseiter<A, D>
    {
        Baseiter {
            ptr,
            index: len.first_index(),
            dim: len,
            strides: stride,
        }
    }

    #[inline]
    fn next_with_index(&mut self) -> Option<(D, NonNull<A>)>
    {
        let index = self.index.take()?;
        let offset = D::stride_offset(&index, &self.strides);
        self.index = self.dim.next_for(index.clone());
        unsafe { Some((index, self.ptr.offset(offset))) }
    }

    #[inline]
    fn next(&mut self) -> Option<NonNull<A>>
    {
        self.next_with_index().map(|(_, ptr)| ptr)
    }

    fn len(&self) -> usize
    {
        match self.index {
            None => 0,
            Some(ref ix) => {
                let gone = self
                    .dim
                    .default_strides()
                    .slice()
                    .iter()
                    .zip(ix.slice())
                    .fold(0, |s, (&a, &b)| s + a * b);
                self.dim.size() - gone
            }
        }
    }
}

impl<A, D: Clone> Clone for Baseiter<A, D>
{
    fn clone(&self) -> Baseiter<A, D>
    {
        Baseiter {
            ptr: self.ptr,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            index: self.index.clone(),
        }
    }
}

#[derive(Debug)]
enum ElementsRepr<S, C>
{
    Slice(S),
    Counted(C),
}

/// An iterator over the elements of a tensor, in row major order.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](crate::TensorView::iter) for more information.
#[derive(Debug)]
pub struct Iter<'a, A, D>
{
    inner: ElementsRepr<SliceIter<'a, A>, Baseiter<A, D>>,
    life: PhantomData<&'a A>,
}

/// An iterator over the elements of a tensor, in row major order.
///
/// Iterator element type is `&'a mut A`.
///
/// See [`.iter_mut()`](crate::TensorViewMut::iter_mut) for more information.
#[derive(Debug)]
pub struct IterMut<'a, A, D>
{
    inner: ElementsRepr<SliceIterMut<'a, A>, Baseiter<A, D>>,
    life: PhantomData<&'a mut A>,
}

/// An iterator over the indices and elements of a tensor, in row major
/// order.
///
/// Iterator element type is `(D::Pattern, &'a A)`.
///
/// See [`.indexed_iter()`](crate::TensorView::indexed_iter) for more
/// information.
#[derive(Debug)]
pub struct IndexedIter<'a, A, D>
{
    inner: Baseiter<A, D>,
    life: PhantomData<&'a A>,
}

impl<'a, A, D: Dimension> Iter<'a, A, D>
{
    /// ## Safety
    ///
    /// `ptr`, `dim` and `strides` must describe elements valid for reads
    /// during `'a`.
    pub(crate) unsafe fn new(ptr: NonNull<A>, dim: D, strides: D) -> Self
    {
        let inner = if D::is_standard_layout(&dim, &strides) {
            ElementsRepr::Slice(slice::from_raw_parts(ptr.as_ptr(), dim.size()).iter())
        } else {
            ElementsRepr::Counted(Baseiter::new(ptr, dim, strides))
        };
        Iter { inner, life: PhantomData }
    }
}

impl<'a, A, D: Dimension> IterMut<'a, A, D>
{
    /// ## Safety
    ///
    /// `ptr`, `dim` and `strides` must describe elements valid for reads and
    /// writes during `'a`, with no other access to them.
    pub(crate) unsafe fn new(ptr: NonNull<A>, dim: D, strides: D) -> Self
    {
        let inner = if D::is_standard_layout(&dim, &strides) {
            ElementsRepr::Slice(slice::from_raw_parts_mut(ptr.as_ptr(), dim.size()).iter_mut())
        } else {
            ElementsRepr::Counted(Baseiter::new(ptr, dim, strides))
        };
        IterMut { inner, life: PhantomData }
    }
}

impl<'a, A, D: Dimension> IndexedIter<'a, A, D>
{
    /// ## Safety
    ///
    /// As for [`Iter::new`].
    pub(crate) unsafe fn new(ptr: NonNull<A>, dim: D, strides: D) -> Self
    {
        IndexedIter {
            inner: Baseiter::new(ptr, dim, strides),
            life: PhantomData,
        }
    }
}

impl<'a, A, D: Dimension> Iterator for Iter<'a, A, D>
{
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A>
    {
        match self.inner {
            ElementsRepr::Slice(ref mut iter) => iter.next(),
            ElementsRepr::Counted(ref mut iter) => iter.next().map(|ptr| unsafe { &*ptr.as_ptr() }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, A, D: Dimension> ExactSizeIterator for Iter<'a, A, D>
{
    fn len(&self) -> usize
    {
        match self.inner {
            ElementsRepr::Slice(ref iter) => iter.len(),
            ElementsRepr::Counted(ref iter) => iter.len(),
        }
    }
}

impl<'a, A, D: Dimension> Clone for Iter<'a, A, D>
{
    fn clone(&self) -> Self
    {
        let inner = match self.inner {
            ElementsRepr::Slice(ref iter) => ElementsRepr::Slice(iter.clone()),
            ElementsRepr::Counted(ref iter) => ElementsRepr::Counted(iter.clone()),
        };
        Iter { inner, life: PhantomData }
    }
}

impl<'a, A, D: Dimension> Iterator for IterMut<'a, A, D>
{
    type Item = &'a mut A;

    #[inline]
    fn next(&mut self) -> Option<&'a mut A>
    {
        match self.inner {
            ElementsRepr::Slice(ref mut iter) => iter.next(),
            ElementsRepr::Counted(ref mut iter) => iter.next().map(|ptr| unsafe { &mut *ptr.as_ptr() }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, A, D: Dimension> ExactSizeIterator for IterMut<'a, A, D>
{
    fn len(&self) -> usize
    {
        match self.inner {
            ElementsRepr::Slice(ref iter) => iter.len(),
            ElementsRepr::Counted(ref iter) => iter.len(),
        }
    }
}

impl<'a, A, D: Dimension> Iterator for IndexedIter<'a, A, D>
{
    type Item = (D::Pattern, &'a A);

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        self.inner
            .next_with_index()
            .map(|(index, ptr)| (index.into_pattern(), unsafe { &*ptr.as_ptr() }))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a, A, D: Dimension> ExactSizeIterator for IndexedIter<'a, A, D> {}

unsafe impl<A: Sync, D: Send> Send for Iter<'_, A, D> {}
unsafe impl<A: Sync, D: Sync> Sync for Iter<'_, A, D> {}
unsafe impl<A: Send, D: Send> Send for IterMut<'_, A, D> {}
unsafe impl<A: Sync, D: Sync> Sync for IterMut<'_, A, D> {}
unsafe impl<A: Sync, D: Send> Send for IndexedIter<'_, A, D> {}
unsafe impl<A: Sync, D: Sync> Sync for IndexedIter<'_, A, D> {}

#[cfg(test)]
mod tests
{
    use super::Baseiter;
    use crate::{Dimension, Ix2};
    use std::ptr::NonNull;

    #[test]
    fn baseiter_len_counts_down()
    {
        let data = [0u8; 12];
        let dim = Ix2(2, 3);
        // every other column of a 2 x 6 buffer
        let strides = Ix2(6, 2);
        let mut it = unsafe { Baseiter::new(NonNull::from(&data[0]), dim, strides) };
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        assert_eq!(it.len(), 4);
        while it.next().is_some() {}
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn baseiter_offsets_follow_strides()
    {
        let data: Vec<u32> = (0..12).collect();
        let dim = Ix2(2, 3);
        let strides = Ix2(6, 2);
        let mut it = unsafe { Baseiter::new(NonNull::from(&data[0]), dim.clone(), strides) };
        let mut seen = Vec::new();
        while let Some(p) = it.next() {
            seen.push(unsafe { *p.as_ptr() });
        }
        assert_eq!(seen, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(dim.size(), 6);
    }
}
