// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::IndexMut;

use super::stride_offset;
use super::IntoDimension;
use crate::{Dim, Ix, Ix0, Ix1, Ix2, Ix3, Ix4, Ix5, Ix6, IxDyn};

/// Tensor extents and multi-index trait.
///
/// Implemented by the static rank extents `Ix0` to `Ix6` and the dynamic
/// rank extents `IxDyn`. All indexing, slicing and iteration algorithms are
/// written once against this trait, whatever representation backs the
/// extents.
///
/// **Note:** *This trait can not be implemented outside the crate*
pub trait Dimension:
    Clone + Eq + Debug + Hash + Send + Sync + IndexMut<usize, Output = usize> + 'static
{
    /// `Some(rank)` for static rank extents (e.g. `Ix2`), `None` for `IxDyn`.
    const NDIM: Option<usize>;
    /// Pattern matching friendly form of the extents.
    ///
    /// - For `Ix1`: `usize`,
    /// - For `Ix2`: `(usize, usize)`
    /// - and so on..
    /// - For `IxDyn`: `IxDyn`
    type Pattern: IntoDimension<Dim = Self> + Clone + Debug + PartialEq + Eq;
    /// Extents with one axis fewer.
    type Smaller: Dimension;
    /// Extents with one axis more.
    type Larger: Dimension;

    /// Returns the number of axes.
    fn ndim(&self) -> usize;

    /// Convert the extents into a pattern matching friendly value.
    fn into_pattern(self) -> Self::Pattern;

    /// Number of elements described by the extents.
    fn size(&self) -> usize
    {
        self.slice().iter().product()
    }

    /// Number of elements, or `None` on overflow.
    fn size_checked(&self) -> Option<usize>
    {
        self.slice()
            .iter()
            .try_fold(1usize, |s, &a| s.checked_mul(a))
    }

    #[doc(hidden)]
    fn slice(&self) -> &[Ix];

    #[doc(hidden)]
    fn slice_mut(&mut self) -> &mut [Ix];

    /// Creates extents of all zeros with the specified rank.
    ///
    /// **Panics** if `Self` has a static rank that is not `ndim`.
    fn zeros(ndim: usize) -> Self;

    /// Zero-length extents of the natural rank of `Self`; one axis for
    /// `IxDyn`.
    fn empty() -> Self
    {
        Self::zeros(Self::NDIM.unwrap_or(1))
    }

    /// Row major strides for these extents.
    ///
    /// Shape `(a, b, c)` gives strides `(b * c, c, 1)`. If any axis is empty
    /// the strides are all zero.
    #[doc(hidden)]
    fn default_strides(&self) -> Self
    {
        let mut strides = Self::zeros(self.ndim());
        if self.slice().iter().all(|&d| d != 0) {
            let mut it = strides.slice_mut().iter_mut().rev();
            if let Some(rs) = it.next() {
                *rs = 1;
            }
            let mut cum_prod = 1;
            for (rs, dim) in it.zip(self.slice().iter().rev()) {
                cum_prod *= *dim;
                *rs = cum_prod;
            }
        }
        strides
    }

    /// Column major strides for these extents.
    ///
    /// Shape `(a, b, c)` gives strides `(1, a, a * b)`.
    #[doc(hidden)]
    fn fortran_strides(&self) -> Self
    {
        let mut strides = Self::zeros(self.ndim());
        if self.slice().iter().all(|&d| d != 0) {
            let mut it = strides.slice_mut().iter_mut();
            if let Some(rs) = it.next() {
                *rs = 1;
            }
            let mut cum_prod = 1;
            for (rs, dim) in it.zip(self.slice()) {
                cum_prod *= *dim;
                *rs = cum_prod;
            }
        }
        strides
    }

    #[doc(hidden)]
    #[inline]
    fn first_index(&self) -> Option<Self>
    {
        if self.slice().iter().any(|&ax| ax == 0) {
            return None;
        }
        Some(Self::zeros(self.ndim()))
    }

    /// Row major iteration: use `self` as the extents and return the index
    /// that follows `index`, or `None` when done.
    #[doc(hidden)]
    #[inline]
    fn next_for(&self, index: Self) -> Option<Self>
    {
        let mut index = index;
        for (&dim, ix) in self.slice().iter().zip(index.slice_mut()).rev() {
            *ix += 1;
            if *ix == dim {
                *ix = 0;
            } else {
                return Some(index);
            }
        }
        None
    }

    /// Offset of `index` under `strides`.
    #[doc(hidden)]
    fn stride_offset(index: &Self, strides: &Self) -> isize
    {
        index
            .slice()
            .iter()
            .zip(strides.slice())
            .map(|(&i, &s)| stride_offset(i, s))
            .sum()
    }

    /// Offset of `index` under `strides`, or `None` if `index` is outside
    /// the extents `self`.
    #[doc(hidden)]
    fn stride_offset_checked(&self, strides: &Self, index: &Self) -> Option<isize>
    {
        if index.ndim() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for ((&d, &s), &i) in self.slice().iter().zip(strides.slice()).zip(index.slice()) {
            if i >= d {
                return None;
            }
            offset += stride_offset(i, s);
        }
        Some(offset)
    }

    /// True if `index` lies inside the extents `self`.
    #[doc(hidden)]
    fn contains(&self, index: &Self) -> bool
    {
        self.slice().iter().zip(index.slice()).all(|(&d, &i)| i < d)
    }

    /// True if `strides` describe a row major contiguous layout of `dim`.
    ///
    /// Axes of length one may carry any stride.
    #[doc(hidden)]
    fn is_standard_layout(dim: &Self, strides: &Self) -> bool
    {
        if dim.slice().iter().any(|&d| d == 0) {
            return true;
        }
        let mut contig = 1;
        for (&d, &s) in dim.slice().iter().zip(strides.slice()).rev() {
            if d != 1 && s != contig {
                return false;
            }
            contig *= d;
        }
        true
    }

    /// Axis order by increasing stride.
    #[doc(hidden)]
    fn _fastest_varying_stride_order(&self) -> Self
    {
        let mut indices = self.clone();
        for (i, elt) in indices.slice_mut().iter_mut().enumerate() {
            *elt = i;
        }
        let strides = self.slice();
        indices.slice_mut().sort_by_key(|&i| strides[i]);
        indices
    }

    /// Convert into dynamic rank extents.
    fn into_dyn(self) -> IxDyn
    {
        IxDyn(self.slice())
    }

    /// Convert from other extents of the same rank, `None` if the ranks
    /// differ.
    #[doc(hidden)]
    fn from_dimension<D2: Dimension>(d: &D2) -> Option<Self>
    {
        match Self::NDIM {
            Some(n) if n != d.ndim() => None,
            _ => {
                let mut s = Self::zeros(d.ndim());
                s.slice_mut().copy_from_slice(d.slice());
                Some(s)
            }
        }
    }

    private_decl! {}
}

macro_rules! impl_dimension_array {
    ($n:expr, $pattern:ty, $smaller:ty, $larger:ty, |$ix:ident| $to_pattern:expr) => {
        impl Dimension for Dim<[Ix; $n]>
        {
            const NDIM: Option<usize> = Some($n);
            type Pattern = $pattern;
            type Smaller = $smaller;
            type Larger = $larger;

            #[inline]
            fn ndim(&self) -> usize
            {
                $n
            }

            #[inline]
            #[allow(unused_variables)]
            fn into_pattern(self) -> Self::Pattern
            {
                let $ix = *self.ix();
                $to_pattern
            }

            #[inline]
            fn slice(&self) -> &[Ix]
            {
                self.ix()
            }

            #[inline]
            fn slice_mut(&mut self) -> &mut [Ix]
            {
                self.ixm()
            }

            #[inline]
            fn zeros(ndim: usize) -> Self
            {
                assert_eq!(ndim, $n, "zeros: rank mismatch for static rank extents");
                Dim::new([0; $n])
            }

            private_impl! {}
        }
    };
}

impl_dimension_array!(0, (), Ix0, Ix1, |ix| ());
impl_dimension_array!(1, Ix, Ix0, Ix2, |ix| ix[0]);
impl_dimension_array!(2, (Ix, Ix), Ix1, Ix3, |ix| (ix[0], ix[1]));
impl_dimension_array!(3, (Ix, Ix, Ix), Ix2, Ix4, |ix| (ix[0], ix[1], ix[2]));
impl_dimension_array!(4, (Ix, Ix, Ix, Ix), Ix3, Ix5, |ix| (ix[0], ix[1], ix[2], ix[3]));
impl_dimension_array!(5, (Ix, Ix, Ix, Ix, Ix), Ix4, Ix6, |ix| (ix[0], ix[1], ix[2], ix[3], ix[4]));
impl_dimension_array!(6, (Ix, Ix, Ix, Ix, Ix, Ix), Ix5, IxDyn, |ix| (ix[0], ix[1], ix[2], ix[3], ix[4], ix[5]));

impl Dimension for IxDyn
{
    const NDIM: Option<usize> = None;
    type Pattern = Self;
    type Smaller = Self;
    type Larger = Self;

    #[inline]
    fn ndim(&self) -> usize
    {
        self.ix().len()
    }

    #[inline]
    fn into_pattern(self) -> Self::Pattern
    {
        self
    }

    #[inline]
    fn slice(&self) -> &[Ix]
    {
        self.ix()
    }

    #[inline]
    fn slice_mut(&mut self) -> &mut [Ix]
    {
        self.ixm()
    }

    #[inline]
    fn zeros(ndim: usize) -> Self
    {
        IxDyn::zeros(ndim)
    }

    #[inline]
    fn into_dyn(self) -> IxDyn
    {
        self
    }

    private_impl! {}
}
