// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for matrices.

use crate::dimension::FixedShape;
use crate::imp_prelude::*;
use crate::linalg::Conj;
use crate::{s, DrMatrix, Fixed2, FsMatrix, MatrixView, MatrixViewMut, VectorView, VectorViewMut};

/// # Methods For Matrix Views
impl<'a, A> TensorView<'a, A, Ix2>
{
    /// Return the number of rows (length of the first axis).
    pub fn nrows(&self) -> usize
    {
        self.dim[0]
    }

    /// Return the number of columns (length of the second axis).
    pub fn ncols(&self) -> usize
    {
        self.dim[1]
    }

    /// Return a view of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row(&self, index: Ix) -> VectorView<'a, A>
    {
        match self.try_slice(s![index, ..]) {
            Ok(v) => v,
            Err(e) => panic!("row: {}", e),
        }
    }

    /// Return a view of column `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column(&self, index: Ix) -> VectorView<'a, A>
    {
        match self.try_slice(s![.., index]) {
            Ok(v) => v,
            Err(e) => panic!("column: {}", e),
        }
    }

    /// Return a view of the rows `start.0..end.0` and columns
    /// `start.1..end.1`.
    ///
    /// **Panics** if a bound exceeds the matrix or a start exceeds its end.
    ///
    /// ```
    /// use ndtensor::dr2;
    ///
    /// let m = dr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(m.submatrix((1, 0), (3, 2)), dr2(&[[4, 5], [7, 8]]));
    /// ```
    pub fn submatrix(&self, start: (Ix, Ix), end: (Ix, Ix)) -> MatrixView<'a, A>
    {
        match self.try_slice(s![start.0..end.0, start.1..end.1]) {
            Ok(v) => v,
            Err(e) => panic!("submatrix: {}", e),
        }
    }

    /// Return the transposed view; no element is copied.
    ///
    /// ```
    /// use ndtensor::dr2;
    ///
    /// let m = dr2(&[[1, 2, 3], [4, 5, 6]]);
    /// let t = m.t();
    /// assert_eq!(t.dim(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn t(&self) -> MatrixView<'a, A>
    {
        let mut dim = self.dim;
        let mut strides = self.strides;
        dim.slice_mut().reverse();
        strides.slice_mut().reverse();
        unsafe { TensorView::new(self.ptr, dim, strides) }
    }

    /// Return a transposed copy.
    pub fn transpose(&self) -> DrMatrix<A>
    where A: Clone
    {
        self.t().to_owned()
    }

    /// Return the conjugate transpose.
    ///
    /// For real element types this is the transpose.
    pub fn conj_t(&self) -> DrMatrix<A>
    where A: Conj
    {
        self.t().map(Conj::conj)
    }
}

/// # Methods For Read-Write Matrix Views
impl<'a, A> TensorViewMut<'a, A, Ix2>
{
    /// Return a read-write view of row `index`, consuming the view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn into_row(self, index: Ix) -> VectorViewMut<'a, A>
    {
        match self.try_slice_move(s![index, ..]) {
            Ok(v) => v,
            Err(e) => panic!("row: {}", e),
        }
    }

    /// Return a read-write view of column `index`, consuming the view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn into_column(self, index: Ix) -> VectorViewMut<'a, A>
    {
        match self.try_slice_move(s![.., index]) {
            Ok(v) => v,
            Err(e) => panic!("column: {}", e),
        }
    }

    /// Return a read-write view of a block, consuming the view.
    ///
    /// **Panics** under the same conditions as
    /// [`TensorView::submatrix`].
    pub fn into_submatrix(self, start: (Ix, Ix), end: (Ix, Ix)) -> MatrixViewMut<'a, A>
    {
        match self.try_slice_move(s![start.0..end.0, start.1..end.1]) {
            Ok(v) => v,
            Err(e) => panic!("submatrix: {}", e),
        }
    }

    /// Return the transposed read-write view, consuming the view.
    pub fn into_t(self) -> MatrixViewMut<'a, A>
    {
        let mut dim = self.dim;
        let mut strides = self.strides;
        dim.slice_mut().reverse();
        strides.slice_mut().reverse();
        unsafe { TensorViewMut::new(self.ptr, dim, strides) }
    }
}

macro_rules! matrix_methods {
    ([$($gen:tt)*] $self_ty:ty, [$($bounds:tt)*]) => {
/// # Methods For Matrices
impl<$($gen)*> $self_ty
where $($bounds)*
{
    /// Return the number of rows (length of the first axis).
    pub fn nrows(&self) -> usize
    {
        self.view().nrows()
    }

    /// Return the number of columns (length of the second axis).
    pub fn ncols(&self) -> usize
    {
        self.view().ncols()
    }

    /// Return a view of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row(&self, index: Ix) -> VectorView<'_, A>
    {
        self.view().row(index)
    }

    /// Return a read-write view of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row_mut(&mut self, index: Ix) -> VectorViewMut<'_, A>
    {
        self.view_mut().into_row(index)
    }

    /// Return a view of column `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column(&self, index: Ix) -> VectorView<'_, A>
    {
        self.view().column(index)
    }

    /// Return a read-write view of column `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column_mut(&mut self, index: Ix) -> VectorViewMut<'_, A>
    {
        self.view_mut().into_column(index)
    }

    /// Return a view of the rows `start.0..end.0` and columns
    /// `start.1..end.1`.
    ///
    /// **Panics** if a bound exceeds the matrix or a start exceeds its end.
    pub fn submatrix(&self, start: (Ix, Ix), end: (Ix, Ix)) -> MatrixView<'_, A>
    {
        self.view().submatrix(start, end)
    }

    /// Return a read-write view of the rows `start.0..end.0` and columns
    /// `start.1..end.1`.
    ///
    /// **Panics** if a bound exceeds the matrix or a start exceeds its end.
    pub fn submatrix_mut(&mut self, start: (Ix, Ix), end: (Ix, Ix)) -> MatrixViewMut<'_, A>
    {
        self.view_mut().into_submatrix(start, end)
    }

    /// Return the transposed view; no element is copied.
    pub fn t(&self) -> MatrixView<'_, A>
    {
        self.view().t()
    }
}
    };
}

matrix_methods!([A, Al] DrTensor<A, Ix2, Al>, [Al: Allocator]);
matrix_methods!([A, const R: usize, const C: usize] FsTensor<A, Fixed2<R, C>>, []);
matrix_methods!(['a, A] TensorViewMut<'a, A, Ix2>, []);

impl<A, Al> DrTensor<A, Ix2, Al>
where Al: Allocator + Clone
{
    /// Return a transposed copy in the same allocator.
    ///
    /// **Panics** if the allocation fails.
    pub fn transpose(&self) -> DrMatrix<A, Al>
    where A: Clone
    {
        self.transposed_map("transpose", A::clone)
    }

    /// Return the conjugate transpose in the same allocator.
    ///
    /// **Panics** if the allocation fails.
    ///
    /// ```
    /// use ndtensor::dr2;
    /// use num_complex::Complex;
    ///
    /// let m = dr2(&[[Complex::new(1., 2.), Complex::new(3., -1.)]]);
    /// let h = m.conj_t();
    /// assert_eq!(h, dr2(&[[Complex::new(1., -2.)], [Complex::new(3., 1.)]]));
    /// ```
    pub fn conj_t(&self) -> DrMatrix<A, Al>
    where A: Conj
    {
        self.transposed_map("conj_t", Conj::conj)
    }

    fn transposed_map<F>(&self, name: &str, mut f: F) -> DrMatrix<A, Al>
    where F: FnMut(&A) -> A
    {
        let t = self.t();
        let built = DrTensor::build_in(t.raw_dim(), t.raw_dim(), self.order(), self.allocator().clone(), |index| {
            f(unsafe { t.uget_dim(index) })
        });
        match built {
            Ok(m) => m,
            Err(e) => panic!("{}: {}", name, e),
        }
    }
}

impl<A, const R: usize, const C: usize> FsTensor<A, Fixed2<R, C>>
{
    /// Return the transpose, a `C × R` fixed matrix.
    ///
    /// ```
    /// use ndtensor::FsMatrix;
    ///
    /// let m = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
    /// let t: FsMatrix<i32, 3, 2> = m.transpose();
    /// assert_eq!(t.into_inner(), [[1, 4], [2, 5], [3, 6]]);
    /// ```
    pub fn transpose(&self) -> FsMatrix<A, C, R>
    where A: Clone
    {
        self.transposed_map(A::clone)
    }

    /// Return the conjugate transpose, a `C × R` fixed matrix.
    pub fn conj_t(&self) -> FsMatrix<A, C, R>
    where A: Conj
    {
        self.transposed_map(Conj::conj)
    }

    fn transposed_map<F>(&self, mut f: F) -> FsMatrix<A, C, R>
    where F: FnMut(&A) -> A
    {
        let t = self.t();
        FsTensor {
            data: <Fixed2<C, R> as FixedShape<A>>::build(|index| f(unsafe { t.uget_dim(&index) })),
        }
    }
}

impl<'a, A> TensorViewMut<'a, A, Ix2>
{
    /// Return a transposed copy.
    pub fn transpose(&self) -> DrMatrix<A>
    where A: Clone
    {
        self.view().transpose()
    }

    /// Return the conjugate transpose.
    pub fn conj_t(&self) -> DrMatrix<A>
    where A: Conj
    {
        self.view().conj_t()
    }
}

#[cfg(test)]
mod tests
{
    use crate::{dr1, dr2, DrMatrix, FsMatrix};

    #[test]
    fn rows_and_columns_are_views()
    {
        let mut m = DrMatrix::from_shape_fn((3, 4), |(i, j)| i * 4 + j);
        assert_eq!(m.row(1), dr1(&[4, 5, 6, 7]));
        assert_eq!(m.column(2), dr1(&[2, 6, 10]));
        m.column_mut(0).fill(0);
        assert_eq!(m.column(0), dr1(&[0, 0, 0]));
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
    }

    #[test]
    fn transpose_of_padded_dynamic_matrix()
    {
        let mut m = DrMatrix::<i32>::with_capacity((2, 2), (4, 4)).unwrap();
        m.assign(&dr2(&[[1, 2], [3, 4]])).unwrap();
        assert_eq!(m.transpose(), dr2(&[[1, 3], [2, 4]]));
        assert_eq!(m.transpose().capacity(), (2, 2));
    }

    #[test]
    fn fixed_submatrix_mut()
    {
        let mut f = FsMatrix::<i32, 3, 3>::zeros();
        f.submatrix_mut((1, 1), (3, 3)).fill(1);
        assert_eq!(f.into_inner(), [[0, 0, 0], [0, 1, 1], [0, 1, 1]]);
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds()
    {
        let m = dr2(&[[1, 2]]);
        m.row(1);
    }
}
