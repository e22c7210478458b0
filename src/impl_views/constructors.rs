// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::dimension;
use crate::imp_prelude::*;
use crate::StrideShape;

/// # Methods for Read-Only Views
impl<'a, A, D> TensorView<'a, A, D>
where D: Dimension
{
    /// Create a read-only view borrowing its data from a slice.
    ///
    /// Checks whether `shape` is compatible with the slice's length and that
    /// the strides do not alias, returning an `Err` if not compatible.
    ///
    /// ```
    /// use ndtensor::{dr3, ShapeBuilder, TensorView};
    ///
    /// let s = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let a = TensorView::from_shape((2, 3, 2).strides((1, 4, 2)),
    ///                                &s).unwrap();
    ///
    /// assert!(
    ///     a == dr3(&[[[0, 2],
    ///                 [4, 6],
    ///                 [8, 10]],
    ///                [[1, 3],
    ///                 [5, 7],
    ///                 [9, 11]]])
    /// );
    /// assert!(a.strides() == &[1, 4, 2]);
    /// ```
    pub fn from_shape<Sh>(shape: Sh, xs: &'a [A]) -> Result<Self, ShapeError>
    where Sh: Into<StrideShape<D>>
    {
        let shape = shape.into();
        let strides = shape.strides.strides_for_dim(&shape.dim);
        dimension::can_index_slice_len(xs.len(), &shape.dim, &strides)?;
        unsafe { Ok(Self::new_(xs.as_ptr(), shape.dim, strides)) }
    }

    /// Create a `TensorView<A, D>` from shape information and a raw pointer
    /// to the elements.
    ///
    /// # Safety
    ///
    /// The caller is responsible for ensuring all of the following:
    ///
    /// * The elements seen by moving `ptr` according to the shape and
    ///   strides must live at least as long as `'a` and must not be
    ///   modified for the duration of `'a`.
    /// * `ptr` must be non-null and aligned, and the strides must not lead
    ///   to aliasing elements or offsets beyond `isize::MAX` bytes.
    pub unsafe fn from_shape_ptr<Sh>(shape: Sh, ptr: *const A) -> Self
    where Sh: Into<StrideShape<D>>
    {
        let shape = shape.into();
        let strides = shape.strides.strides_for_dim(&shape.dim);
        Self::new_(ptr, shape.dim, strides)
    }

    /// Create a new `TensorView`
    ///
    /// Unsafe because: `ptr` must be valid for the given dimension and strides.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<A>, dim: D, strides: D) -> Self
    {
        TensorView {
            ptr,
            dim,
            strides,
            life: PhantomData,
        }
    }

    /// Unsafe because: `ptr` must be valid for the given dimension and strides.
    #[inline]
    pub(crate) unsafe fn new_(ptr: *const A, dim: D, strides: D) -> Self
    {
        Self::new(nonnull_from_ptr(ptr), dim, strides)
    }
}

/// # Methods for Read-Write Views
impl<'a, A, D> TensorViewMut<'a, A, D>
where D: Dimension
{
    /// Create a read-write view borrowing its data from a slice.
    ///
    /// Checks whether `shape` is compatible with the slice's length and that
    /// the strides do not alias, returning an `Err` if not compatible.
    ///
    /// ```
    /// use ndtensor::{dr3, ShapeBuilder, TensorViewMut};
    ///
    /// let mut s = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let mut a = TensorViewMut::from_shape((2, 3, 2).strides((1, 4, 2)),
    ///                                       &mut s).unwrap();
    ///
    /// a[[0, 0, 0]] = 1;
    /// assert!(
    ///     a == dr3(&[[[1, 2],
    ///                 [4, 6],
    ///                 [8, 10]],
    ///                [[1, 3],
    ///                 [5, 7],
    ///                 [9, 11]]])
    /// );
    /// assert!(a.strides() == &[1, 4, 2]);
    /// ```
    pub fn from_shape<Sh>(shape: Sh, xs: &'a mut [A]) -> Result<Self, ShapeError>
    where Sh: Into<StrideShape<D>>
    {
        let shape = shape.into();
        let strides = shape.strides.strides_for_dim(&shape.dim);
        dimension::can_index_slice_len(xs.len(), &shape.dim, &strides)?;
        unsafe { Ok(Self::new_(xs.as_mut_ptr(), shape.dim, strides)) }
    }

    /// Create a `TensorViewMut<A, D>` from shape information and a raw
    /// pointer to the elements.
    ///
    /// # Safety
    ///
    /// As for [`TensorView::from_shape_ptr`], and in addition no other
    /// pointer or reference may access the elements during `'a`.
    pub unsafe fn from_shape_ptr<Sh>(shape: Sh, ptr: *mut A) -> Self
    where Sh: Into<StrideShape<D>>
    {
        let shape = shape.into();
        let strides = shape.strides.strides_for_dim(&shape.dim);
        Self::new_(ptr, shape.dim, strides)
    }

    /// Create a new `TensorViewMut`
    ///
    /// Unsafe because: `ptr` must be valid for the given dimension and strides.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<A>, dim: D, strides: D) -> Self
    {
        TensorViewMut {
            ptr,
            dim,
            strides,
            life: PhantomData,
        }
    }

    /// Unsafe because: `ptr` must be valid for the given dimension and strides.
    #[inline]
    pub(crate) unsafe fn new_(ptr: *mut A, dim: D, strides: D) -> Self
    {
        Self::new(nonnull_from_ptr(ptr), dim, strides)
    }
}

/// Return a NonNull<T> pointer, asserting non-null
fn nonnull_from_ptr<T>(ptr: *const T) -> NonNull<T>
{
    debug_assert!(!ptr.is_null(), "view pointer must be non-null");
    unsafe { NonNull::new_unchecked(ptr as *mut T) }
}
