// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallel in-place elementwise kernels.
//!
//! The kernels are based on the crate [rayon] and its parallel slice
//! iterators. They split the work across threads only when the destination
//! holds at least [`PARALLEL_THRESHOLD`] elements and every operand is
//! contiguous and in row major order; otherwise they run the same
//! sequential loop as the operators.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! # Examples
//!
//! ```
//! use ndtensor::DrMatrix;
//! use ndtensor::parallel::prelude::*;
//!
//! let mut a = DrMatrix::<f64>::zeros((128, 128));
//! let b = DrMatrix::from_elem((128, 128), 2.);
//!
//! a.par_map_inplace(|x| *x = x.exp());
//! a.par_add_assign(&b).unwrap();
//! a.par_mul_scalar_assign(&0.5);
//! assert_eq!(a[(3, 7)], 1.5);
//! ```

use std::ops::{AddAssign, MulAssign, SubAssign};

use rayon::prelude::*;

use crate::error::{incompatible_shapes, ShapeError};
use crate::{TensorData, TensorDataMut};

/// Traits for the parallel kernels and rayon's parallel iterators.
pub mod prelude
{
    #[doc(no_inline)]
    pub use rayon::prelude::{
        IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator,
        ParallelIterator,
    };

    pub use super::ParallelAssign;
}

/// Destinations with fewer elements than this are updated on the calling
/// thread.
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Parallel versions of the in-place elementwise operations.
///
/// Implemented for every writable container and view. Elements are visited
/// in arbitrary order.
///
/// **Requires crate feature `"rayon"`**
pub trait ParallelAssign: TensorDataMut
{
    /// Modify the elements in place by calling `f` on each of them.
    fn par_map_inplace<F>(&mut self, f: F)
    where
        F: Fn(&mut Self::Elem) + Sync + Send,
        Self::Elem: Send,
    {
        let view = self.view_mut();
        if view.len() < PARALLEL_THRESHOLD || !view.is_standard_layout() {
            return view.map_inplace_(f);
        }
        if let Some(slc) = view.into_slice() {
            slc.par_iter_mut().for_each(f);
        }
    }

    /// Call `f` on each element of `self` and the element of `rhs` at the
    /// same index.
    ///
    /// Errors with `IncompatibleShape` when the extents differ; `self` is
    /// unchanged then.
    fn par_zip_mut_with<R, F>(&mut self, rhs: &R, f: F) -> Result<(), ShapeError>
    where
        R: TensorData<Dim = Self::Dim> + ?Sized,
        F: Fn(&mut Self::Elem, &R::Elem) + Sync + Send,
        Self::Elem: Send,
        R::Elem: Sync,
    {
        let lhs = self.view_mut();
        let rhs = rhs.view();
        if lhs.shape() != rhs.shape() {
            return Err(incompatible_shapes(&lhs.raw_dim(), &rhs.raw_dim()));
        }
        match rhs.as_slice() {
            Some(rs) if lhs.len() >= PARALLEL_THRESHOLD && lhs.is_standard_layout() => {
                if let Some(ls) = lhs.into_slice() {
                    ls.par_iter_mut().zip(rs.par_iter()).for_each(|(a, b)| f(a, b));
                }
                Ok(())
            }
            _ => lhs.zip_mut_with_(&rhs, f),
        }
    }

    /// Parallel `self += rhs`.
    fn par_add_assign<R>(&mut self, rhs: &R) -> Result<(), ShapeError>
    where
        R: TensorData<Dim = Self::Dim> + ?Sized,
        Self::Elem: AddAssign<R::Elem> + Send,
        R::Elem: Clone + Sync,
    {
        self.par_zip_mut_with(rhs, |a, b| *a += b.clone())
    }

    /// Parallel `self -= rhs`.
    fn par_sub_assign<R>(&mut self, rhs: &R) -> Result<(), ShapeError>
    where
        R: TensorData<Dim = Self::Dim> + ?Sized,
        Self::Elem: SubAssign<R::Elem> + Send,
        R::Elem: Clone + Sync,
    {
        self.par_zip_mut_with(rhs, |a, b| *a -= b.clone())
    }

    /// Parallel `self *= k` for a scalar `k`.
    fn par_mul_scalar_assign<K>(&mut self, k: &K)
    where
        K: Clone + Sync,
        Self::Elem: MulAssign<K> + Send,
    {
        self.par_map_inplace(|a| *a *= k.clone())
    }
}

impl<T> ParallelAssign for T where T: TensorDataMut + ?Sized {}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{dr2, s, DrMatrix, DrVector};

    #[test]
    fn large_contiguous_matches_sequential()
    {
        let n = PARALLEL_THRESHOLD + 7;
        let mut a = DrVector::from_shape_fn(n, |i| i as u64);
        let b = DrVector::from_elem(n, 3u64);
        a.par_add_assign(&b).unwrap();
        a.par_mul_scalar_assign(&2);
        assert!(a.iter().enumerate().all(|(i, &x)| x == 2 * (i as u64 + 3)));
    }

    #[test]
    fn strided_destination_falls_back()
    {
        let mut m = DrMatrix::from_shape_fn((4, 4), |(i, j)| (i * 4 + j) as i32);
        let ones = DrVector::from_elem(4, 1);
        let mut col = m.slice_mut(s![.., 1]);
        col.par_sub_assign(&ones).unwrap();
        assert_eq!(m.column(1), [0, 4, 8, 12]);
        assert_eq!(m[(0, 0)], 0);
    }

    #[test]
    fn shape_mismatch_is_reported()
    {
        let mut a = dr2(&[[1, 2], [3, 4]]);
        let b = dr2(&[[1, 2, 3]]);
        assert!(a.par_add_assign(&b).is_err());
        assert_eq!(a, dr2(&[[1, 2], [3, 4]]));
    }
}
