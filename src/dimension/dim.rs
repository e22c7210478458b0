// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::IntoDimension;
use super::IxDynImpl;
use crate::Ix;

/// Extents or index of a tensor.
///
/// `Dim` carries the number of axes and the length of each axis. The same
/// type is used as a multi-index.
///
/// Constructors accept anything that implements [`IntoDimension`], so a
/// tuple such as `(3, 2)` is converted to `Dim([3, 2])` on the way in.
///
/// ```
/// use ndtensor::{Dim, DrMatrix};
///
/// let mut m = DrMatrix::<f64>::zeros((3, 2));
/// m[[0, 0]] = 1.;
/// assert_eq!(m.raw_dim(), Dim([3, 2]));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dim<I: ?Sized>
{
    index: I,
}

impl<I> Dim<I>
{
    pub(crate) fn new(index: I) -> Dim<I>
    {
        Dim { index }
    }

    #[inline(always)]
    pub(crate) fn ix(&self) -> &I
    {
        &self.index
    }

    #[inline(always)]
    pub(crate) fn ixm(&mut self) -> &mut I
    {
        &mut self.index
    }
}

/// Create a new dimension value.
#[allow(non_snake_case)]
pub fn Dim<T>(index: T) -> T::Dim
where T: IntoDimension
{
    index.into_dimension()
}

impl<I: ?Sized> PartialEq<I> for Dim<I>
where I: PartialEq
{
    fn eq(&self, rhs: &I) -> bool
    {
        self.index == *rhs
    }
}

impl<I> fmt::Debug for Dim<I>
where I: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:?}", self.index)
    }
}

impl<const N: usize> Index<usize> for Dim<[Ix; N]>
{
    type Output = usize;
    #[inline(always)]
    fn index(&self, index: usize) -> &usize
    {
        &self.ix()[index]
    }
}

impl<const N: usize> IndexMut<usize> for Dim<[Ix; N]>
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut usize
    {
        &mut self.ixm()[index]
    }
}

impl Index<usize> for Dim<IxDynImpl>
{
    type Output = usize;
    #[inline]
    fn index(&self, index: usize) -> &usize
    {
        &self.ix()[index]
    }
}

impl IndexMut<usize> for Dim<IxDynImpl>
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut usize
    {
        &mut self.ixm()[index]
    }
}
