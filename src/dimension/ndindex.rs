// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use super::stride_offset;
use crate::{Dim, Dimension, IntoDimension, Ix, Ix0, Ix1, IxDyn};

/// Tuples, arrays and `usize` that can be used to index a tensor.
///
/// ```
/// use ndtensor::dr2;
///
/// let mut m = dr2(&[[0, 1],
///                   [2, 3]]);
/// assert_eq!(m[[0, 1]], 1);
/// assert_eq!(m[[1, 1]], 3);
/// m[[1, 1]] += 1;
/// assert_eq!(m[(1, 1)], 4);
/// ```
///
/// **Note** that `NdIndex` is implemented for all `D where D: Dimension`.
///
/// # Safety
///
/// `index_checked` must only return offsets of in-bounds indices.
pub unsafe trait NdIndex<E>: Debug
{
    #[doc(hidden)]
    fn index_checked(&self, dim: &E, strides: &E) -> Option<isize>;
    #[doc(hidden)]
    fn index_unchecked(&self, strides: &E) -> isize;
}

unsafe impl<D> NdIndex<D> for D
where D: Dimension
{
    fn index_checked(&self, dim: &D, strides: &D) -> Option<isize>
    {
        dim.stride_offset_checked(strides, self)
    }
    fn index_unchecked(&self, strides: &D) -> isize
    {
        D::stride_offset(self, strides)
    }
}

unsafe impl NdIndex<Ix0> for ()
{
    #[inline]
    fn index_checked(&self, _dim: &Ix0, _strides: &Ix0) -> Option<isize>
    {
        Some(0)
    }
    #[inline(always)]
    fn index_unchecked(&self, _strides: &Ix0) -> isize
    {
        0
    }
}

unsafe impl NdIndex<Ix1> for Ix
{
    #[inline]
    fn index_checked(&self, dim: &Ix1, strides: &Ix1) -> Option<isize>
    {
        if *self < dim[0] {
            Some(stride_offset(*self, strides[0]))
        } else {
            None
        }
    }
    #[inline(always)]
    fn index_unchecked(&self, strides: &Ix1) -> isize
    {
        stride_offset(*self, strides[0])
    }
}

unsafe impl<const N: usize> NdIndex<Dim<[Ix; N]>> for [Ix; N]
where Dim<[Ix; N]>: Dimension
{
    #[inline]
    fn index_checked(&self, dim: &Dim<[Ix; N]>, strides: &Dim<[Ix; N]>) -> Option<isize>
    {
        dim.stride_offset_checked(strides, &Dim::new(*self))
    }
    #[inline]
    fn index_unchecked(&self, strides: &Dim<[Ix; N]>) -> isize
    {
        self.iter()
            .zip(strides.ix())
            .map(|(&i, &s)| stride_offset(i, s))
            .sum()
    }
}

macro_rules! ndindex_with_tuple {
    ($n:expr; $($index:tt)*) => {
        unsafe impl NdIndex<Dim<[Ix; $n]>> for ($(ndindex_with_tuple!(@ix $index),)*)
        {
            #[inline]
            fn index_checked(&self, dim: &Dim<[Ix; $n]>, strides: &Dim<[Ix; $n]>) -> Option<isize>
            {
                dim.stride_offset_checked(strides, &self.into_dimension())
            }

            #[inline]
            fn index_unchecked(&self, strides: &Dim<[Ix; $n]>) -> isize
            {
                0 $(+ stride_offset(self.$index, strides[$index]))*
            }
        }
    };
    (@ix $index:tt) => { Ix };
}

ndindex_with_tuple! { 2; 0 1 }
ndindex_with_tuple! { 3; 0 1 2 }
ndindex_with_tuple! { 4; 0 1 2 3 }
ndindex_with_tuple! { 5; 0 1 2 3 4 }
ndindex_with_tuple! { 6; 0 1 2 3 4 5 }

unsafe impl<'a> NdIndex<IxDyn> for &'a [Ix]
{
    fn index_checked(&self, dim: &IxDyn, strides: &IxDyn) -> Option<isize>
    {
        dim.stride_offset_checked(strides, &IxDyn(self))
    }
    fn index_unchecked(&self, strides: &IxDyn) -> isize
    {
        self.iter()
            .zip(strides.slice())
            .map(|(&i, &s)| stride_offset(i, s))
            .sum()
    }
}
