// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::imp_prelude::*;
use crate::{DrMatrix, DrVector, Ix3, MatrixView, VectorView, VectorViewMut};

/// Create a [`DrTensor`] with one, two or three dimensions.
///
/// ```
/// use ndtensor::dr;
/// let a1 = dr![1, 2, 3, 4];
///
/// let a2 = dr![[1, 2],
///              [3, 4]];
///
/// let a3 = dr![[[1, 2], [3, 4]],
///              [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.shape(), &[4]);
/// assert_eq!(a2.shape(), &[2, 2]);
/// assert_eq!(a3.shape(), &[2, 2, 2]);
/// ```
///
/// The one-dimensional form moves its elements; the others clone them.
#[macro_export]
macro_rules! dr {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::dr3(&[$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::dr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::DrVector::from(vec![$($x,)*])
    }};
}

/// Create a dynamic vector with elements from `xs`.
pub fn dr1<A: Clone>(xs: &[A]) -> DrVector<A>
{
    DrVector::from(xs.to_vec())
}

/// Create a dynamic matrix with the rows `xs`.
///
/// ```
/// use ndtensor::dr2;
///
/// let a = dr2(&[[1, 2, 3],
///               [4, 5, 6]]);
/// assert!(a.shape() == [2, 3]);
/// ```
pub fn dr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> DrMatrix<A>
{
    DrMatrix::from_shape_fn((xs.len(), N), |(i, j)| xs[i][j].clone())
}

/// Create a dynamic three-dimensional tensor with elements from `xs`.
///
/// ```
/// use ndtensor::dr3;
///
/// let a = dr3(&[[[1, 2],
///                [3, 4]],
///               [[5, 6],
///                [7, 8]],
///               [[9, 0],
///                [1, 2]]]);
/// assert!(a.shape() == [3, 2, 2]);
/// ```
pub fn dr3<A: Clone, const M: usize, const N: usize>(xs: &[[[A; N]; M]]) -> DrTensor<A, Ix3>
{
    DrTensor::from_shape_fn((xs.len(), M, N), |(i, j, k)| xs[i][j][k].clone())
}

/// Create a read-only vector view borrowing `xs`.
pub fn view1<A>(xs: &[A]) -> VectorView<'_, A>
{
    TensorView::from(xs)
}

/// Create a read-only matrix view borrowing the rows `xs`.
///
/// ```
/// use ndtensor::view2;
///
/// let data = [[1, 2], [3, 4], [5, 6]];
/// let m = view2(&data);
/// assert_eq!(m.column(1), [2, 4, 6]);
/// ```
pub fn view2<A, const N: usize>(xs: &[[A; N]]) -> MatrixView<'_, A>
{
    let dim = Ix2(xs.len(), N);
    // nested arrays are contiguous and row major
    unsafe { TensorView::new_(xs.as_ptr() as *const A, dim, dim.default_strides()) }
}

/// Create a read-write vector view borrowing `xs`.
///
/// ```
/// use ndtensor::{view_mut1, s};
///
/// let mut data = [0; 6];
/// view_mut1(&mut data).slice_mut(s![1..4]).fill(5);
/// assert_eq!(data, [0, 5, 5, 5, 0, 0]);
/// ```
pub fn view_mut1<A>(xs: &mut [A]) -> VectorViewMut<'_, A>
{
    TensorViewMut::from(xs)
}
