// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ErrorKind};
use crate::imp_prelude::*;
use crate::iterators::{Iter, IterMut};

/// Methods for read-only views.
impl<'a, A, D> TensorView<'a, A, D>
where D: Dimension
{
    /// Convert the view into a view with a different extents type.
    ///
    /// Errors with `IncompatibleShape` if the ranks differ.
    ///
    /// ```
    /// use ndtensor::{dr2, Ix2, IxDyn, TensorView};
    ///
    /// let m = dr2(&[[1, 2], [3, 4]]);
    /// let dynamic: TensorView<i32, IxDyn> = m.view().into_dyn();
    /// let back = dynamic.into_dimensionality::<Ix2>().unwrap();
    /// assert_eq!(back[(1, 0)], 3);
    /// ```
    pub fn into_dimensionality<D2>(self) -> Result<TensorView<'a, A, D2>, ShapeError>
    where D2: Dimension
    {
        match (D2::from_dimension(&self.dim), D2::from_dimension(&self.strides)) {
            (Some(dim), Some(strides)) => unsafe { Ok(TensorView::new(self.ptr, dim, strides)) },
            _ => Err(from_kind(ErrorKind::IncompatibleShape)),
        }
    }

    /// Convert into a dynamic rank view.
    pub fn into_dyn(self) -> TensorView<'a, A, IxDyn>
    {
        unsafe { TensorView::new(self.ptr, self.dim.into_dyn(), self.strides.into_dyn()) }
    }
}

/// Methods for read-write views.
impl<'a, A, D> TensorViewMut<'a, A, D>
where D: Dimension
{
    /// Convert the view into a view with a different extents type.
    ///
    /// Errors with `IncompatibleShape` if the ranks differ.
    pub fn into_dimensionality<D2>(self) -> Result<TensorViewMut<'a, A, D2>, ShapeError>
    where D2: Dimension
    {
        match (D2::from_dimension(&self.dim), D2::from_dimension(&self.strides)) {
            (Some(dim), Some(strides)) => unsafe { Ok(TensorViewMut::new(self.ptr, dim, strides)) },
            _ => Err(from_kind(ErrorKind::IncompatibleShape)),
        }
    }

    /// Convert into a dynamic rank view.
    pub fn into_dyn(self) -> TensorViewMut<'a, A, IxDyn>
    {
        unsafe { TensorViewMut::new(self.ptr, self.dim.into_dyn(), self.strides.into_dyn()) }
    }
}

impl<'a, A, D> Clone for TensorView<'a, A, D>
where D: Clone
{
    fn clone(&self) -> Self
    {
        TensorView {
            ptr: self.ptr,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            life: self.life,
        }
    }
}

impl<'a, A, D> Copy for TensorView<'a, A, D> where D: Copy {}

/// Implementation of `TensorView::from(&S)` where `S` is a slice or sliceable.
///
/// **Panics** if the length of the slice overflows `isize`. (This can only
/// occur if `A` is zero-sized, because slices cannot contain more than
/// `isize::MAX` number of bytes.)
impl<'a, A, Slice: ?Sized> From<&'a Slice> for TensorView<'a, A, Ix1>
where Slice: AsRef<[A]>
{
    fn from(slice: &'a Slice) -> Self
    {
        let xs = slice.as_ref();
        if std::mem::size_of::<A>() == 0 {
            assert!(xs.len() <= isize::MAX as usize, "Slice length must fit in `isize`.");
        }
        unsafe { TensorView::new_(xs.as_ptr(), Ix1(xs.len()), Ix1(1)) }
    }
}

/// Implementation of `TensorViewMut::from(&mut S)` where `S` is a slice or
/// sliceable.
impl<'a, A, Slice: ?Sized> From<&'a mut Slice> for TensorViewMut<'a, A, Ix1>
where Slice: AsMut<[A]>
{
    fn from(slice: &'a mut Slice) -> Self
    {
        let xs = slice.as_mut();
        if std::mem::size_of::<A>() == 0 {
            assert!(xs.len() <= isize::MAX as usize, "Slice length must fit in `isize`.");
        }
        unsafe { TensorViewMut::new_(xs.as_mut_ptr(), Ix1(xs.len()), Ix1(1)) }
    }
}

impl<'a, A, D> IntoIterator for TensorView<'a, A, D>
where D: Dimension
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, A, D> IntoIterator for TensorViewMut<'a, A, D>
where D: Dimension
{
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.into_iter_()
    }
}

impl<'a, 'b, A, D> IntoIterator for &'b TensorView<'a, A, D>
where D: Dimension
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
