// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{ErrorKind, ShapeError};
use crate::Ix;

pub use self::conversion::IntoDimension;
pub use self::dim::*;
pub use self::dimension_trait::Dimension;
pub use self::dynindeximpl::IxDynImpl;
pub use self::fixed::{Extents, Fixed1, Fixed2, Fixed3, Fixed4, FixedExtents, FixedShape};
pub use self::ndindex::NdIndex;

mod conversion;
pub mod dim;
mod dimension_trait;
mod dynindeximpl;
mod fixed;
mod ndindex;

/// Offset of index `n` along an axis with `stride`.
#[inline(always)]
pub fn stride_offset(n: Ix, stride: Ix) -> isize
{
    (n as isize) * (stride as isize)
}

/// Number of elements of `dim`, checked against `isize::MAX`.
///
/// Element offsets are computed in `isize`, so every tensor must stay below
/// that many elements.
pub fn size_of_shape_checked<D: Dimension>(dim: &D) -> Result<usize, ShapeError>
{
    let size = dim
        .size_checked()
        .ok_or_else(|| ShapeError::from_kind(ErrorKind::Overflow))?;
    if size > isize::MAX as usize {
        Err(ShapeError::from_kind(ErrorKind::Overflow))
    } else {
        Ok(size)
    }
}

/// Check whether `dim` and `strides` lead to overlapping elements.
///
/// Walking the axes from the smallest stride up, each stride must be at
/// least the span of all faster varying axes. Axes of length one may carry
/// any stride.
pub fn dim_stride_overlap<D: Dimension>(dim: &D, strides: &D) -> bool
{
    let order = strides._fastest_varying_stride_order();

    let dim = dim.slice();
    let strides = strides.slice();
    let mut prev_offset = 1;
    for &index in order.slice() {
        let d = dim[index];
        let s = strides[index];
        if d != 1 && (s as isize) < prev_offset {
            return true;
        }
        if d != 1 {
            prev_offset = stride_offset(d, s);
        }
    }
    false
}

/// Check that `dim` and `strides` can index a buffer of `len` elements
/// safely: the largest offset is in bounds and no two indices alias.
pub fn can_index_slice_len<D: Dimension>(len: usize, dim: &D, strides: &D) -> Result<(), ShapeError>
{
    if dim.ndim() != strides.ndim() {
        return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
    }
    let size = size_of_shape_checked(dim)?;
    if size == 0 {
        return Ok(());
    }
    let mut max_offset: usize = 0;
    for (&d, &s) in dim.slice().iter().zip(strides.slice()) {
        let span = (d - 1)
            .checked_mul(s)
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::Overflow))?;
        max_offset = max_offset
            .checked_add(span)
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::Overflow))?;
    }
    if max_offset >= len {
        return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
    }
    if dim_stride_overlap(dim, strides) {
        return Err(ShapeError::from_kind(ErrorKind::Unsupported));
    }
    Ok(())
}

/// Per-axis maximum of two extents of the same rank.
pub(crate) fn max_extents<D: Dimension>(a: &D, b: &D) -> D
{
    let mut out = a.clone();
    for (o, &x) in out.slice_mut().iter_mut().zip(b.slice()) {
        *o = (*o).max(x);
    }
    out
}

/// Per-axis minimum of two extents of the same rank.
pub(crate) fn min_extents<D: Dimension>(a: &D, b: &D) -> D
{
    let mut out = a.clone();
    for (o, &x) in out.slice_mut().iter_mut().zip(b.slice()) {
        *o = (*o).min(x);
    }
    out
}

/// True if `inner` fits inside `outer` along every axis.
pub(crate) fn fits_within<D: Dimension>(inner: &D, outer: &D) -> bool
{
    inner.slice().iter().zip(outer.slice()).all(|(&i, &o)| i <= o)
}

#[cfg(test)]
mod tests
{
    use super::{can_index_slice_len, dim_stride_overlap, size_of_shape_checked, Dimension};
    use crate::error::ErrorKind;
    use crate::{Dim, IntoDimension, Ix2, IxDyn};

    #[test]
    fn slice_indexing_uncommon_strides()
    {
        let dim = (2, 3, 2).into_dimension();
        let strides = (1, 2, 6).into_dimension();
        assert!(can_index_slice_len(12, &dim, &strides).is_ok());

        let strides = (2, 4, 12).into_dimension();
        assert_eq!(
            can_index_slice_len(12, &dim, &strides).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
    }

    #[test]
    fn overlapping_strides_dim()
    {
        let dim = (2, 3, 2).into_dimension();
        let strides = (5, 2, 1).into_dimension();
        assert!(dim_stride_overlap(&dim, &strides));
        let strides = (6, 2, 1).into_dimension();
        assert!(!dim_stride_overlap(&dim, &strides));
        let strides = (6, 0, 1).into_dimension();
        assert!(dim_stride_overlap(&dim, &strides));
    }

    #[test]
    fn size_overflow()
    {
        let dim = Dim([usize::MAX, 2]);
        assert_eq!(size_of_shape_checked(&dim).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(size_of_shape_checked(&Dim([3, 4])).unwrap(), 12);
    }

    #[test]
    fn row_major_index_order()
    {
        let dim = Ix2(2, 3);
        let mut seen = Vec::new();
        let mut index = dim.first_index();
        while let Some(ix) = index {
            seen.push(ix.clone().into_pattern());
            index = dim.next_for(ix);
        }
        assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn empty_extents_have_no_first_index()
    {
        assert!(Ix2(0, 3).first_index().is_none());
        assert!(IxDyn(&[2, 0]).first_index().is_none());
        assert_eq!(IxDyn(&[]).first_index(), Some(IxDyn(&[])));
    }

    #[test]
    fn dimension_conversion_checks_rank()
    {
        assert_eq!(Ix2::from_dimension(&IxDyn(&[2, 3])), Some(Ix2(2, 3)));
        assert_eq!(Ix2::from_dimension(&IxDyn(&[2, 3, 4])), None);
        assert_eq!(IxDyn::from_dimension(&Ix2(2, 3)), Some(IxDyn(&[2, 3])));
    }

    #[test]
    fn strides()
    {
        assert_eq!(Dim([2, 3, 4]).default_strides(), Dim([12, 4, 1]));
        assert_eq!(Dim([2, 3, 4]).fortran_strides(), Dim([1, 2, 6]));
        assert!(Dimension::is_standard_layout(&Dim([2, 3]), &Dim([3, 1])));
        assert!(!Dimension::is_standard_layout(&Dim([2, 3]), &Dim([5, 1])));
        assert!(Dimension::is_standard_layout(&Dim([1, 3]), &Dim([7, 1])));
    }
}
