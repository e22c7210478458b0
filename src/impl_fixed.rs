// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Zero;

use crate::dimension::{FixedExtents, FixedShape};
use crate::error::incompatible_shapes;
use crate::imp_prelude::*;
use crate::{Fixed1, Fixed2, Fixed3, Fixed4};

/// Pattern form of the extents of `S`.
type PatternOf<S> = <<S as FixedExtents>::Dim as Dimension>::Pattern;

/// # Constructor Methods for Fixed Size Tensors
impl<A, S> FsTensor<A, S>
where S: FixedShape<A>
{
    /// Create a tensor with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create, in pattern
    /// form, exactly once per element and in row major order.
    ///
    /// ```
    /// use ndtensor::FsMatrix;
    ///
    /// let m = FsMatrix::<usize, 2, 3>::from_shape_fn(|(i, j)| 10 * i + j);
    /// assert_eq!(m, [[0, 1, 2], [10, 11, 12]]);
    /// ```
    pub fn from_shape_fn<F>(mut f: F) -> Self
    where F: FnMut(PatternOf<S>) -> A
    {
        FsTensor {
            data: S::build(|index| f(index.into_pattern())),
        }
    }

    /// Create a tensor with copies of `elem`.
    pub fn from_elem(elem: A) -> Self
    where A: Clone
    {
        FsTensor {
            data: S::build(|_| elem.clone()),
        }
    }

    /// Create a tensor of zeros.
    pub fn zeros() -> Self
    where A: Clone + Zero
    {
        Self::from_elem(A::zero())
    }

    /// Create a copy of any tensor or view with the same extents.
    ///
    /// ***Errors*** with `IncompatibleShape` if the extents of `src` differ
    /// from the fixed extents.
    ///
    /// ```
    /// use ndtensor::{dr2, ErrorKind, FsMatrix};
    ///
    /// let d = dr2(&[[1, 2], [3, 4]]);
    /// let f = FsMatrix::<i32, 2, 2>::from_data(&d).unwrap();
    /// assert_eq!(f, d);
    ///
    /// let err = FsMatrix::<i32, 3, 2>::from_data(&d).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    /// ```
    pub fn from_data<T>(src: &T) -> Result<Self, ShapeError>
    where
        T: TensorData<Elem = A, Dim = S::Dim> + ?Sized,
        A: Clone,
    {
        let view = src.view();
        let dim = S::dim();
        if view.raw_dim() != dim {
            return Err(incompatible_shapes(&dim, &view.raw_dim()));
        }
        Ok(FsTensor {
            data: S::build(|index| unsafe { view.uget_dim(&index).clone() }),
        })
    }

    /// Copy the elements of `src` into `self`.
    ///
    /// ***Errors*** with `IncompatibleShape` unless `src` has exactly the
    /// fixed extents; `self` is unchanged then.
    pub fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = S::Dim> + ?Sized,
        A: Clone,
    {
        self.view_mut().zip_mut_with_(&src.view(), |a, b| a.clone_from(b))
    }

    /// The capacity, which always equals the extents.
    pub fn capacity(&self) -> PatternOf<S>
    {
        S::dim().into_pattern()
    }

    /// Return the elements as a slice, in row major order.
    pub fn as_slice(&self) -> &[A]
    {
        S::as_slice(&self.data)
    }

    /// Return the elements as a mutable slice, in row major order.
    pub fn as_slice_mut(&mut self) -> &mut [A]
    {
        S::as_mut_slice(&mut self.data)
    }

    /// Consume the tensor and return its (nested) array storage.
    ///
    /// ```
    /// use ndtensor::FsVector;
    ///
    /// let v = FsVector::<u8, 3>::from([1, 2, 3]);
    /// assert_eq!(v.into_inner(), [1, 2, 3]);
    /// ```
    pub fn into_inner(self) -> S::Storage
    {
        self.data
    }
}

impl<A, S> Default for FsTensor<A, S>
where
    A: Default,
    S: FixedShape<A>,
{
    fn default() -> Self
    {
        FsTensor {
            data: S::build(|_| A::default()),
        }
    }
}

impl<A, S> Clone for FsTensor<A, S>
where
    S: FixedShape<A>,
    S::Storage: Clone,
{
    fn clone(&self) -> Self
    {
        FsTensor { data: self.data.clone() }
    }
}

impl<A, S> Copy for FsTensor<A, S>
where
    S: FixedShape<A>,
    S::Storage: Copy,
{
}

impl<A, const N: usize> From<[A; N]> for FsTensor<A, Fixed1<N>>
{
    fn from(data: [A; N]) -> Self
    {
        FsTensor { data }
    }
}

impl<A, const R: usize, const C: usize> From<[[A; C]; R]> for FsTensor<A, Fixed2<R, C>>
{
    fn from(data: [[A; C]; R]) -> Self
    {
        FsTensor { data }
    }
}

impl<A, const I: usize, const J: usize, const K: usize> From<[[[A; K]; J]; I]> for FsTensor<A, Fixed3<I, J, K>>
{
    fn from(data: [[[A; K]; J]; I]) -> Self
    {
        FsTensor { data }
    }
}

impl<A, const I: usize, const J: usize, const K: usize, const L: usize> From<[[[[A; L]; K]; J]; I]>
    for FsTensor<A, Fixed4<I, J, K, L>>
{
    fn from(data: [[[[A; L]; K]; J]; I]) -> Self
    {
        FsTensor { data }
    }
}

#[cfg(test)]
mod tests
{
    use crate::{FsMatrix, FsTensor3, FsVector};

    #[test]
    fn fixed_layout_is_row_major()
    {
        let t = FsTensor3::<u32, 2, 3, 4>::from_shape_fn(|(i, j, k)| (i * 100 + j * 10 + k) as u32);
        assert_eq!(&t.as_slice()[..5], &[0, 1, 2, 3, 10]);
        assert_eq!(t.as_slice()[12], 100);
    }

    #[test]
    fn fixed_capacity_equals_shape()
    {
        let m = FsMatrix::<f32, 3, 5>::zeros();
        assert_eq!(m.capacity(), (3, 5));
        let v = FsVector::<f32, 0>::default();
        assert_eq!(v.capacity(), 0);
        assert!(v.as_slice().is_empty());
    }
}
