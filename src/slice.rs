// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Slice specifications and the subview engine.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Dimension, Ix0, Ix1, Ix2, Ix3, Ix4, Ix5, Ix6, IxDyn};

/// One axis of a slice specification: a half-open range that keeps the axis,
/// or a single index that removes it.
///
/// `end == None` means the range extends to the end of the axis. Bounds are
/// signed only so that malformed (negative) bounds can be reported as
/// errors instead of wrapping.
///
/// ```
/// use ndtensor::SliceInfoElem;
///
/// assert_eq!(SliceInfoElem::from(1..3), SliceInfoElem::Slice { start: 1, end: Some(3) });
/// assert_eq!(SliceInfoElem::from(..), SliceInfoElem::Slice { start: 0, end: None });
/// assert_eq!(SliceInfoElem::from(2), SliceInfoElem::Index(2));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliceInfoElem
{
    /// Keep the axis, restricted to `start..end`.
    Slice
    {
        /// start index, inclusive
        start: isize,
        /// end index, exclusive; `None` for the axis length
        end: Option<isize>,
    },
    /// Fix the axis at one index and remove it.
    Index(isize),
}

impl SliceInfoElem
{
    /// Returns `true` if `self` is a `Slice` value.
    pub fn is_slice(&self) -> bool
    {
        matches!(self, SliceInfoElem::Slice { .. })
    }

    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool
    {
        matches!(self, SliceInfoElem::Index(_))
    }
}

impl fmt::Display for SliceInfoElem
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            SliceInfoElem::Index(index) => write!(f, "{}", index)?,
            SliceInfoElem::Slice { start, end } => {
                if start != 0 {
                    write!(f, "{}", start)?;
                }
                write!(f, "..")?;
                if let Some(i) = end {
                    write!(f, "{}", i)?;
                }
            }
        }
        Ok(())
    }
}

macro_rules! impl_sliceinfoelem_from_index_type {
    ($index:ty) => {
        impl From<$index> for SliceInfoElem
        {
            #[inline]
            fn from(r: $index) -> SliceInfoElem
            {
                SliceInfoElem::Index(r as isize)
            }
        }

        impl From<Range<$index>> for SliceInfoElem
        {
            #[inline]
            fn from(r: Range<$index>) -> SliceInfoElem
            {
                SliceInfoElem::Slice {
                    start: r.start as isize,
                    end: Some(r.end as isize),
                }
            }
        }

        impl From<RangeFrom<$index>> for SliceInfoElem
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> SliceInfoElem
            {
                SliceInfoElem::Slice {
                    start: r.start as isize,
                    end: None,
                }
            }
        }

        impl From<RangeTo<$index>> for SliceInfoElem
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> SliceInfoElem
            {
                SliceInfoElem::Slice {
                    start: 0,
                    end: Some(r.end as isize),
                }
            }
        }
    };
}

impl_sliceinfoelem_from_index_type!(isize);
impl_sliceinfoelem_from_index_type!(usize);
impl_sliceinfoelem_from_index_type!(i32);

impl From<RangeFull> for SliceInfoElem
{
    #[inline]
    fn from(_: RangeFull) -> SliceInfoElem
    {
        SliceInfoElem::Slice { start: 0, end: None }
    }
}

/// A slice specification together with its input and output extents types.
///
/// `Din` is the extents type of the tensor being sliced and `Dout` the
/// extents type of the resulting view. Usually created by the
/// [`s![]`](crate::s!) macro.
#[derive(Debug)]
pub struct SliceInfo<T, Din: Dimension, Dout: Dimension>
{
    in_dim: PhantomData<Din>,
    out_dim: PhantomData<Dout>,
    indices: T,
}

impl<T, Din, Dout> Deref for SliceInfo<T, Din, Dout>
where
    Din: Dimension,
    Dout: Dimension,
{
    type Target = T;
    fn deref(&self) -> &Self::Target
    {
        &self.indices
    }
}

fn slices_in_ndim(indices: &[SliceInfoElem]) -> usize
{
    indices.len()
}

fn slices_out_ndim(indices: &[SliceInfoElem]) -> usize
{
    indices.iter().filter(|s| s.is_slice()).count()
}

impl<T, Din, Dout> SliceInfo<T, Din, Dout>
where
    Din: Dimension,
    Dout: Dimension,
{
    /// Returns a new `SliceInfo` instance.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `in_dim` and `out_dim` are consistent
    /// with `indices`: the rank of `Din` (if static) equals the number of
    /// entries, and the rank of `Dout` (if static) equals the number of
    /// ranges.
    #[doc(hidden)]
    pub unsafe fn new_unchecked(indices: T, in_dim: PhantomData<Din>, out_dim: PhantomData<Dout>) -> SliceInfo<T, Din, Dout>
    {
        SliceInfo {
            in_dim,
            out_dim,
            indices,
        }
    }
}

impl<T, Din, Dout> SliceInfo<T, Din, Dout>
where
    T: AsRef<[SliceInfoElem]>,
    Din: Dimension,
    Dout: Dimension,
{
    /// Returns a new `SliceInfo` instance.
    ///
    /// Errors with `IncompatibleShape` if `Din` or `Dout` has a static rank
    /// that does not match `indices`.
    pub fn try_new(indices: T) -> Result<SliceInfo<T, Din, Dout>, ShapeError>
    {
        if let Some(ndim) = Din::NDIM {
            if ndim != slices_in_ndim(indices.as_ref()) {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
        }
        if let Some(ndim) = Dout::NDIM {
            if ndim != slices_out_ndim(indices.as_ref()) {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
        }
        Ok(SliceInfo {
            in_dim: PhantomData,
            out_dim: PhantomData,
            indices,
        })
    }

    /// Rank of the tensors this specification applies to.
    pub fn in_ndim(&self) -> usize
    {
        Din::NDIM.unwrap_or_else(|| slices_in_ndim(self.indices.as_ref()))
    }

    /// Rank of the resulting view.
    pub fn out_ndim(&self) -> usize
    {
        Dout::NDIM.unwrap_or_else(|| slices_out_ndim(self.indices.as_ref()))
    }
}

impl<T, Din, Dout> AsRef<[SliceInfoElem]> for SliceInfo<T, Din, Dout>
where
    T: AsRef<[SliceInfoElem]>,
    Din: Dimension,
    Dout: Dimension,
{
    fn as_ref(&self) -> &[SliceInfoElem]
    {
        self.indices.as_ref()
    }
}

impl<T, Din, Dout> Copy for SliceInfo<T, Din, Dout>
where
    T: Copy,
    Din: Dimension,
    Dout: Dimension,
{
}

impl<T, Din, Dout> Clone for SliceInfo<T, Din, Dout>
where
    T: Clone,
    Din: Dimension,
    Dout: Dimension,
{
    fn clone(&self) -> Self
    {
        SliceInfo {
            in_dim: PhantomData,
            out_dim: PhantomData,
            indices: self.indices.clone(),
        }
    }
}

/// A type that can slice a tensor with extents `D`.
///
/// Implemented for [`SliceInfo`] values (what [`s![]`](crate::s!) builds),
/// references to them, and for `[SliceInfoElem]` when slicing dynamic rank
/// tensors.
///
/// **Note:** *This trait can not be implemented outside the crate*
pub trait SliceArg<D: Dimension>: AsRef<[SliceInfoElem]>
{
    /// Extents type of the resulting view.
    type OutDim: Dimension;

    /// Rank of the tensors this argument applies to.
    fn in_ndim(&self) -> usize;

    /// Rank of the resulting view.
    fn out_ndim(&self) -> usize;

    private_decl! {}
}

impl<T, D> SliceArg<D> for &T
where
    T: SliceArg<D> + ?Sized,
    D: Dimension,
{
    type OutDim = T::OutDim;

    fn in_ndim(&self) -> usize
    {
        T::in_ndim(self)
    }

    fn out_ndim(&self) -> usize
    {
        T::out_ndim(self)
    }

    private_impl! {}
}

macro_rules! impl_slicearg_samedim {
    ($in_dim:ty) => {
        impl<T, Dout> SliceArg<$in_dim> for SliceInfo<T, $in_dim, Dout>
        where
            T: AsRef<[SliceInfoElem]>,
            Dout: Dimension,
        {
            type OutDim = Dout;

            fn in_ndim(&self) -> usize
            {
                SliceInfo::in_ndim(self)
            }

            fn out_ndim(&self) -> usize
            {
                SliceInfo::out_ndim(self)
            }

            private_impl! {}
        }
    };
}
impl_slicearg_samedim!(Ix0);
impl_slicearg_samedim!(Ix1);
impl_slicearg_samedim!(Ix2);
impl_slicearg_samedim!(Ix3);
impl_slicearg_samedim!(Ix4);
impl_slicearg_samedim!(Ix5);
impl_slicearg_samedim!(Ix6);

// Static rank specifications also apply to dynamic rank tensors; the rank
// is checked when slicing.
impl<T, Din, Dout> SliceArg<IxDyn> for SliceInfo<T, Din, Dout>
where
    T: AsRef<[SliceInfoElem]>,
    Din: Dimension,
    Dout: Dimension,
{
    type OutDim = Dout;

    fn in_ndim(&self) -> usize
    {
        SliceInfo::in_ndim(self)
    }

    fn out_ndim(&self) -> usize
    {
        SliceInfo::out_ndim(self)
    }

    private_impl! {}
}

impl SliceArg<IxDyn> for [SliceInfoElem]
{
    type OutDim = IxDyn;

    fn in_ndim(&self) -> usize
    {
        slices_in_ndim(self)
    }

    fn out_ndim(&self) -> usize
    {
        slices_out_ndim(self)
    }

    private_impl! {}
}

/// Compute the subview of a region with extents `dim` and `strides`.
///
/// Returns the element offset of the subview origin together with the
/// extents and strides of the subview. The region itself is not touched.
///
/// Errors:
///
/// - `IncompatibleShape` if the number of entries differs from the rank of
///   `dim`
/// - `OutOfBounds` for a negative bound, a range with `start > end`, a
///   range ending past the axis length, or an index not below it
pub(crate) fn slice_region<D, I>(dim: &D, strides: &D, info: &I) -> Result<(isize, I::OutDim, I::OutDim), ShapeError>
where
    D: Dimension,
    I: SliceArg<D> + ?Sized,
{
    let elems = info.as_ref();
    if info.in_ndim() != dim.ndim() || elems.len() != dim.ndim() {
        tracing::debug!(
            spec_rank = elems.len(),
            tensor_rank = dim.ndim(),
            "slice specification rank mismatch"
        );
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    let out_ndim = info.out_ndim();
    if let Some(n) = <I::OutDim as Dimension>::NDIM {
        if n != out_ndim {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
    }
    let mut new_dim = I::OutDim::zeros(out_ndim);
    let mut new_strides = I::OutDim::zeros(out_ndim);
    let mut offset = 0isize;
    let mut out_axis = 0;
    for (axis, elem) in elems.iter().enumerate() {
        let len = dim[axis];
        let stride = strides[axis];
        match *elem {
            SliceInfoElem::Index(i) => {
                let i = checked_bound(i)?;
                if i >= len {
                    tracing::debug!(axis, index = i, len, "slice index out of bounds");
                    return Err(from_kind(ErrorKind::OutOfBounds));
                }
                offset += crate::dimension::stride_offset(i, stride);
            }
            SliceInfoElem::Slice { start, end } => {
                let start = checked_bound(start)?;
                let end = match end {
                    Some(e) => checked_bound(e)?,
                    None => len,
                };
                if start > end || end > len {
                    tracing::debug!(axis, start, end, len, "slice range out of bounds");
                    return Err(from_kind(ErrorKind::OutOfBounds));
                }
                // an empty range may start at the axis length, so the origin
                // can be one past the last element
                offset += crate::dimension::stride_offset(start, stride);
                new_dim[out_axis] = end - start;
                new_strides[out_axis] = stride;
                out_axis += 1;
            }
        }
    }
    Ok((offset, new_dim, new_strides))
}

fn checked_bound(b: isize) -> Result<usize, ShapeError>
{
    if b < 0 {
        tracing::debug!(bound = b, "negative slice bound");
        Err(from_kind(ErrorKind::OutOfBounds))
    } else {
        Ok(b as usize)
    }
}

#[doc(hidden)]
pub trait SliceNextDim<D1, D2>
{
    fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D2>;
}

macro_rules! impl_slicenextdim_for_index_type {
    ($index:ty) => {
        impl<D1: Dimension> SliceNextDim<D1, D1> for $index
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1>
            {
                PhantomData
            }
        }

        impl<D1: Dimension> SliceNextDim<D1, D1::Larger> for Range<$index>
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger>
            {
                PhantomData
            }
        }

        impl<D1: Dimension> SliceNextDim<D1, D1::Larger> for RangeFrom<$index>
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger>
            {
                PhantomData
            }
        }

        impl<D1: Dimension> SliceNextDim<D1, D1::Larger> for RangeTo<$index>
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger>
            {
                PhantomData
            }
        }
    };
}

impl_slicenextdim_for_index_type!(isize);
impl_slicenextdim_for_index_type!(usize);
impl_slicenextdim_for_index_type!(i32);

impl<D1: Dimension> SliceNextDim<D1, D1::Larger> for RangeFull
{
    fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger>
    {
        PhantomData
    }
}

/// Input extents after one more slice entry.
#[doc(hidden)]
#[inline(always)]
pub fn next_in_dim<D: Dimension>(_: PhantomData<D>) -> PhantomData<D::Larger>
{
    PhantomData
}

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/indices, separated by comma, and builds a
/// [`SliceInfo`] for the `.slice()` family of methods. Each entry is one of:
///
/// - *range*: a range (`a..b`, `a..`, `..b` or `..`) keeps the axis,
///   restricted to that range
/// - *index*: an integer removes the axis, fixed at that index
///
/// The number of entries must equal the rank of the tensor being sliced,
/// and the rank of the view is the number of ranges. Bounds are `usize`,
/// `isize` or `i32`; negative bounds are rejected when slicing.
///
/// ```
/// use ndtensor::{dr2, s, MatrixView, VectorView};
///
/// let m = dr2(&[[1, 2, 3],
///               [4, 5, 6]]);
/// let col: VectorView<i32> = m.slice(s![.., 1]);
/// assert_eq!(col, [2, 5]);
/// let corner: MatrixView<i32> = m.slice(s![1.., 1..3]);
/// assert_eq!(corner, dr2(&[[5, 6]]));
/// ```
#[macro_export]
macro_rules! s(
    // convert a..b into @convert(a..b), final item
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr) => {
        unsafe {
            $crate::SliceInfo::new_unchecked(
                [$($stack)* $crate::s!(@convert $r)],
                $crate::slice::next_in_dim($in_dim),
                $crate::SliceNextDim::next_dim(&$r, $out_dim),
            )
        }
    };
    // convert a..b into @convert(a..b), final item, trailing comma
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr ,) => {
        $crate::s![@parse $in_dim, $out_dim, [$($stack)*] $r]
    };
    // convert a..b into @convert(a..b)
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::s![@parse
            $crate::slice::next_in_dim($in_dim),
            $crate::SliceNextDim::next_dim(&$r, $out_dim),
            [$($stack)* $crate::s!(@convert $r),]
            $($t)*
        ]
    };
    // convert range/index into SliceInfoElem
    (@convert $r:expr) => {
        <$crate::SliceInfoElem as ::core::convert::From<_>>::from($r)
    };
    ($($t:tt)*) => {
        $crate::s![@parse
            ::core::marker::PhantomData::<$crate::Ix0>,
            ::core::marker::PhantomData::<$crate::Ix0>,
            []
            $($t)*
        ]
    };
);

#[cfg(test)]
mod tests
{
    use super::{slice_region, SliceInfo, SliceInfoElem};
    use crate::error::ErrorKind;
    use crate::{Dimension, Ix1, Ix2, Ix3, IxDyn};

    #[test]
    fn region_of_row_range()
    {
        let dim = Ix2(3, 4);
        let strides = dim.default_strides();
        let info = s![1..3, 2];
        let (offset, d, st) = slice_region(&dim, &strides, &info).unwrap();
        assert_eq!(offset, 6);
        assert_eq!(d, Ix1(2));
        assert_eq!(st, Ix1(4));
    }

    #[test]
    fn region_errors()
    {
        let dim = Ix2(3, 4);
        let strides = dim.default_strides();
        let err = |info: &[SliceInfoElem]| {
            let info = SliceInfo::<_, IxDyn, IxDyn>::try_new(info).unwrap();
            slice_region(&dim.clone().into_dyn(), &strides.clone().into_dyn(), &info)
                .unwrap_err()
                .kind()
        };
        assert_eq!(err(&[SliceInfoElem::from(..)]), ErrorKind::IncompatibleShape);
        assert_eq!(err(&[(..).into(), (0..5).into()]), ErrorKind::OutOfBounds);
        assert_eq!(err(&[(2..1).into(), (..).into()]), ErrorKind::OutOfBounds);
        assert_eq!(err(&[3.into(), (..).into()]), ErrorKind::OutOfBounds);
        assert_eq!(err(&[(-1..).into(), (..).into()]), ErrorKind::OutOfBounds);
    }

    #[test]
    fn empty_range_at_end_is_allowed()
    {
        let dim = Ix3(2, 3, 4);
        let strides = dim.default_strides();
        let (offset, d, _): (isize, Ix3, Ix3) = slice_region(&dim, &strides, &s![2..2, .., 4..]).unwrap();
        assert_eq!(offset, 28);
        assert_eq!(d.size(), 0);
    }

    #[test]
    fn try_new_checks_static_ranks()
    {
        let r = SliceInfo::<_, Ix2, Ix1>::try_new([SliceInfoElem::from(..), SliceInfoElem::from(1)]);
        assert!(r.is_ok());
        let r = SliceInfo::<_, Ix2, Ix2>::try_new([SliceInfoElem::from(..), SliceInfoElem::from(1)]);
        assert_eq!(r.unwrap_err().kind(), ErrorKind::IncompatibleShape);
    }

    #[test]
    fn display_elems()
    {
        assert_eq!(SliceInfoElem::from(1..3).to_string(), "1..3");
        assert_eq!(SliceInfoElem::from(..).to_string(), "..");
        assert_eq!(SliceInfoElem::from(4).to_string(), "4");
    }
}
