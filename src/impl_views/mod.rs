// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod constructors;
mod conversions;

use rawpointer::PointerExt;

use crate::error::incompatible_shapes;
use crate::imp_prelude::*;
use crate::iterators::{IndexedIter, Iter, IterMut};
use crate::slice::{slice_region, SliceArg};
use crate::NdIndex;

/// # Methods for Read-Only Views
///
/// Element references and subviews obtained from a `TensorView<'a, ..>`
/// borrow from the underlying data for `'a`, independently of the view
/// value itself.
impl<'a, A, D> TensorView<'a, A, D>
where D: Dimension
{
    /// Return the shape of the view as it's stored in the view.
    ///
    /// ```
    /// use ndtensor::{dr2, MatrixView};
    ///
    /// let m = dr2(&[[1, 2, 3], [4, 5, 6]]);
    /// let v: MatrixView<i32> = m.view();
    /// assert_eq!(v.dim(), (2, 3));
    /// ```
    pub fn dim(&self) -> D::Pattern
    {
        self.dim.clone().into_pattern()
    }

    /// Return the extents as a `Dim` value.
    pub fn raw_dim(&self) -> D
    {
        self.dim.clone()
    }

    /// Return the shape of the view as a slice.
    pub fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }

    /// Return the strides of the view, in elements, as a slice.
    pub fn strides(&self) -> &[usize]
    {
        self.strides.slice()
    }

    /// Return the number of axes.
    pub fn ndim(&self) -> usize
    {
        self.dim.ndim()
    }

    /// Return the total number of elements.
    pub fn len(&self) -> usize
    {
        self.dim.size()
    }

    /// Return whether the view has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return `true` if the elements are contiguous and in row major order.
    pub fn is_standard_layout(&self) -> bool
    {
        D::is_standard_layout(&self.dim, &self.strides)
    }

    /// Return a pointer to the first element.
    pub fn as_ptr(&self) -> *const A
    {
        self.ptr.as_ptr()
    }

    /// Return a reference to the element at `index`, or return `None` if
    /// the index is out of bounds.
    ///
    /// ```
    /// use ndtensor::dr2;
    ///
    /// let a = dr2(&[[1., 2.],
    ///               [3., 4.]]);
    /// let v = a.view();
    ///
    /// assert!(
    ///     v.get((0, 1)) == Some(&2.) &&
    ///     v.get((0, 2)) == None
    /// );
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&'a A>
    where I: NdIndex<D>
    {
        let offset = index.index_checked(&self.dim, &self.strides)?;
        unsafe { Some(&*self.ptr.offset(offset).as_ptr()) }
    }

    /// Perform *unchecked* indexing of the view.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &'a A
    where I: NdIndex<D>
    {
        debug_assert!(index.index_checked(&self.dim, &self.strides).is_some());
        let offset = index.index_unchecked(&self.strides);
        &*self.ptr.offset(offset).as_ptr()
    }

    /// Unchecked access through an index already in `D` form.
    #[inline]
    pub(crate) unsafe fn uget_dim(&self, index: &D) -> &'a A
    {
        &*self.ptr.offset(D::stride_offset(index, &self.strides)).as_ptr()
    }

    /// Return an iterator of references to the elements of the view.
    ///
    /// Elements are visited in row major order.
    pub fn iter(&self) -> Iter<'a, A, D>
    {
        unsafe { Iter::new(self.ptr, self.dim.clone(), self.strides.clone()) }
    }

    /// Return an iterator of indexes and references to the elements of the
    /// view.
    ///
    /// Elements are visited in row major order.
    pub fn indexed_iter(&self) -> IndexedIter<'a, A, D>
    {
        unsafe { IndexedIter::new(self.ptr, self.dim.clone(), self.strides.clone()) }
    }

    /// Return the elements as a slice if they are contiguous and in row
    /// major order, otherwise return `None`.
    pub fn as_slice(&self) -> Option<&'a [A]>
    {
        if self.is_standard_layout() {
            unsafe { Some(std::slice::from_raw_parts(self.ptr.as_ptr(), self.len())) }
        } else {
            None
        }
    }

    /// Return a sliced view of the tensor.
    ///
    /// See [*Slicing*](crate::s!) for full documentation.
    ///
    /// **Panics** if the slice specification does not match the rank of the
    /// view or any bound is out of range.
    pub fn slice<I>(&self, info: I) -> TensorView<'a, A, I::OutDim>
    where I: SliceArg<D>
    {
        match self.try_slice(info) {
            Ok(v) => v,
            Err(e) => panic!("slice: {}", e),
        }
    }

    /// Return a sliced view of the tensor, or an error if the slice
    /// specification does not fit.
    ///
    /// Errors with `IncompatibleShape` on a rank mismatch and with
    /// `OutOfBounds` when a bound is negative, exceeds the axis length, or a
    /// range starts after it ends.
    pub fn try_slice<I>(&self, info: I) -> Result<TensorView<'a, A, I::OutDim>, ShapeError>
    where I: SliceArg<D>
    {
        let (offset, dim, strides) = slice_region(&self.dim, &self.strides, &info)?;
        unsafe { Ok(TensorView::new(self.ptr.offset(offset), dim, strides)) }
    }

    /// Convert the view into a view with a shorter lifetime.
    pub fn reborrow<'b>(self) -> TensorView<'b, A, D>
    where 'a: 'b
    {
        unsafe { TensorView::new(self.ptr, self.dim, self.strides) }
    }

    /// Return an owned copy of the elements, as a row major `DrTensor`.
    pub fn to_owned(&self) -> DrTensor<A, D>
    where A: Clone
    {
        self.map(A::clone)
    }

    /// Call `f` by reference on each element and create a new `DrTensor`
    /// with the new values.
    ///
    /// Elements are visited in row major order.
    ///
    /// **Panics** if the allocation fails.
    pub fn map<B, F>(&self, mut f: F) -> DrTensor<B, D>
    where F: FnMut(&'a A) -> B
    {
        let view = self.clone();
        let built = DrTensor::build_in(
            self.dim.clone(),
            self.dim.clone(),
            Default::default(),
            Global,
            |index: &D| unsafe { f(view.uget_dim(index)) },
        );
        match built {
            Ok(t) => t,
            Err(e) => panic!("map: {}", e),
        }
    }
}

/// # Methods for Read-Write Views
impl<'a, A, D> TensorViewMut<'a, A, D>
where D: Dimension
{
    /// Return the strides of the view, in elements, as a slice.
    pub fn strides(&self) -> &[usize]
    {
        self.strides.slice()
    }

    /// Return `true` if the elements are contiguous and in row major order.
    pub fn is_standard_layout(&self) -> bool
    {
        D::is_standard_layout(&self.dim, &self.strides)
    }

    /// Return a pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut A
    {
        self.ptr.as_ptr()
    }

    /// Convert into a read-only view with the same lifetime.
    pub fn into_view(self) -> TensorView<'a, A, D>
    {
        unsafe { TensorView::new(self.ptr, self.dim, self.strides) }
    }

    /// Return a mutable reference to the element at `index` with the full
    /// lifetime of the view, consuming the view.
    pub fn into_get_mut<I>(self, index: I) -> Option<&'a mut A>
    where I: NdIndex<D>
    {
        let offset = index.index_checked(&self.dim, &self.strides)?;
        unsafe { Some(&mut *self.ptr.offset(offset).as_ptr()) }
    }

    /// Unchecked version of [`.into_get_mut()`](Self::into_get_mut).
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    pub unsafe fn into_uget_mut<I>(self, index: I) -> &'a mut A
    where I: NdIndex<D>
    {
        debug_assert!(index.index_checked(&self.dim, &self.strides).is_some());
        let offset = index.index_unchecked(&self.strides);
        &mut *self.ptr.offset(offset).as_ptr()
    }

    /// Return the elements as a mutable slice if they are contiguous and
    /// in row major order, otherwise return `None`.
    pub fn into_slice(self) -> Option<&'a mut [A]>
    {
        if self.is_standard_layout() {
            unsafe { Some(std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.dim.size())) }
        } else {
            None
        }
    }

    /// Slice the view, keeping its lifetime.
    ///
    /// **Panics** if the slice specification does not fit (see
    /// [`.try_slice_move()`](Self::try_slice_move)).
    pub fn slice_move<I>(self, info: I) -> TensorViewMut<'a, A, I::OutDim>
    where I: SliceArg<D>
    {
        match self.try_slice_move(info) {
            Ok(v) => v,
            Err(e) => panic!("slice_move: {}", e),
        }
    }

    /// Slice the view, keeping its lifetime, or return an error if the
    /// slice specification does not fit.
    pub fn try_slice_move<I>(self, info: I) -> Result<TensorViewMut<'a, A, I::OutDim>, ShapeError>
    where I: SliceArg<D>
    {
        let (offset, dim, strides) = slice_region(&self.dim, &self.strides, &info)?;
        unsafe { Ok(TensorViewMut::new(self.ptr.offset(offset), dim, strides)) }
    }

    /// Return an owned copy of the elements, as a row major `DrTensor`.
    pub fn to_owned(&self) -> DrTensor<A, D>
    where A: Clone
    {
        self.view().to_owned()
    }

    /// Copy every element of `src` into the view.
    ///
    /// Errors with `IncompatibleShape` unless `src` has exactly the extents
    /// of the view; the view is unchanged in that case.
    ///
    /// ```
    /// use ndtensor::{dr2, s, ErrorKind};
    ///
    /// let mut m = dr2(&[[0, 0, 0], [0, 0, 0]]);
    /// let mut corner = m.slice_mut(s![.., 1..]);
    /// corner.assign(&dr2(&[[1, 2], [3, 4]])).unwrap();
    /// assert_eq!(m, dr2(&[[0, 1, 2], [0, 3, 4]]));
    ///
    /// let mut corner = m.slice_mut(s![.., 1..]);
    /// let err = corner.assign(&dr2(&[[1, 2, 3], [4, 5, 6]])).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    /// ```
    pub fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        self.view_mut().zip_mut_with_(&src.view(), |a, b| a.clone_from(b))
    }

    /// Apply `f` to each element in place, in row major order.
    pub(crate) fn map_inplace_<F>(self, mut f: F)
    where F: FnMut(&mut A)
    {
        match self.into_slice_() {
            Ok(slc) => slc.iter_mut().for_each(f),
            Err(v) => {
                for elt in v.into_iter_() {
                    f(elt);
                }
            }
        }
    }

    /// Apply `f` to each element of `self` and the element of `rhs` at the
    /// same index.
    ///
    /// Errors with `IncompatibleShape` when the extents differ; nothing is
    /// written then.
    pub(crate) fn zip_mut_with_<B, F>(self, rhs: &TensorView<'_, B, D>, mut f: F) -> Result<(), ShapeError>
    where F: FnMut(&mut A, &B)
    {
        if self.dim != rhs.dim {
            return Err(incompatible_shapes(&self.dim, &rhs.dim));
        }
        if let (true, Some(rs)) = (self.is_standard_layout(), rhs.as_slice()) {
            if let Ok(ls) = self.into_slice_() {
                ls.iter_mut().zip(rs).for_each(|(a, b)| f(a, b));
            }
            return Ok(());
        }
        let mut index = self.dim.first_index();
        while let Some(ix) = index {
            unsafe {
                let a = &mut *self.ptr.offset(D::stride_offset(&ix, &self.strides)).as_ptr();
                f(a, rhs.uget_dim(&ix));
            }
            index = self.dim.next_for(ix);
        }
        Ok(())
    }

    fn into_slice_(self) -> Result<&'a mut [A], Self>
    {
        if self.is_standard_layout() {
            unsafe { Ok(std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.dim.size())) }
        } else {
            Err(self)
        }
    }

    pub(crate) fn into_iter_(self) -> IterMut<'a, A, D>
    {
        unsafe { IterMut::new(self.ptr, self.dim, self.strides) }
    }
}
