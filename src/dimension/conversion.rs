// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple and array conversion into extents.

use crate::{Dim, Dimension, Ix, Ix1, IxDyn, IxDynImpl};

/// Argument conversion into extents.
///
/// Tuples, arrays and plain `usize` values all convert, so constructors can
/// be called as `DrMatrix::zeros((2, 3))` or `DrMatrix::zeros([2, 3])`.
pub trait IntoDimension
{
    type Dim: Dimension;
    fn into_dimension(self) -> Self::Dim;
}

impl IntoDimension for Ix
{
    type Dim = Ix1;
    #[inline(always)]
    fn into_dimension(self) -> Ix1
    {
        Ix1(self)
    }
}

impl<D> IntoDimension for D
where D: Dimension
{
    type Dim = D;
    #[inline(always)]
    fn into_dimension(self) -> Self
    {
        self
    }
}

impl IntoDimension for IxDynImpl
{
    type Dim = IxDyn;
    #[inline(always)]
    fn into_dimension(self) -> Self::Dim
    {
        Dim::new(self)
    }
}

impl<'a> IntoDimension for &'a [Ix]
{
    type Dim = IxDyn;
    fn into_dimension(self) -> Self::Dim
    {
        Dim::new(IxDynImpl::from(self))
    }
}

impl IntoDimension for Vec<Ix>
{
    type Dim = IxDyn;
    #[inline(always)]
    fn into_dimension(self) -> Self::Dim
    {
        Dim::new(IxDynImpl::from(self))
    }
}

impl<const N: usize> IntoDimension for [Ix; N]
where Dim<[Ix; N]>: Dimension
{
    type Dim = Dim<[Ix; N]>;
    #[inline(always)]
    fn into_dimension(self) -> Self::Dim
    {
        Dim::new(self)
    }
}

macro_rules! tuple_into_dimension {
    ($n:expr; $($t:ident $i:tt),*) => {
        impl IntoDimension for ($($t,)*)
        {
            type Dim = Dim<[Ix; $n]>;
            #[inline(always)]
            #[allow(clippy::unused_unit)]
            fn into_dimension(self) -> Self::Dim
            {
                Dim::new([$(self.$i,)*])
            }
        }
    };
}

tuple_into_dimension!(0;);
tuple_into_dimension!(2; Ix 0, Ix 1);
tuple_into_dimension!(3; Ix 0, Ix 1, Ix 2);
tuple_into_dimension!(4; Ix 0, Ix 1, Ix 2, Ix 3);
tuple_into_dimension!(5; Ix 0, Ix 1, Ix 2, Ix 3, Ix 4);
tuple_into_dimension!(6; Ix 0, Ix 1, Ix 2, Ix 3, Ix 4, Ix 5);

impl IntoDimension for (Ix,)
{
    type Dim = Ix1;
    #[inline(always)]
    fn into_dimension(self) -> Ix1
    {
        Ix1(self.0)
    }
}
