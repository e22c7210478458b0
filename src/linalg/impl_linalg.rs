// Copyright 2014-2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::TypeId;
use std::ops::Mul;

use num_complex::Complex;
use num_traits::Zero;

use super::{OuterProduct, Product, ProductAssign};
use crate::error::incompatible_shapes;
use crate::imp_prelude::*;
use crate::{AssignFrom, MatrixView, Order, VectorView};

type ProductElem<A, B> = <A as Mul<B>>::Output;

/// The shape rule and kernel of [`Product`] for operands of extents `Self`
/// (left) and `E` (right), with elements `A` and `B`.
///
/// Implemented for the vector and matrix extents [`Ix1`] and [`Ix2`]; the
/// extents of fixed size tensors map to these, so fixed and dynamic operands
/// mix freely.
pub trait ProductRule<E, A, B>: Dimension
where E: Dimension
{
    /// The product type.
    type Output;

    /// Multiply `lhs` by `rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the inner dimensions differ.
    fn product(
        lhs: &TensorView<'_, A, Self>, rhs: &TensorView<'_, B, E>,
    ) -> Result<<Self as ProductRule<E, A, B>>::Output, ShapeError>;
}

/// Inner product.
impl<A, B> ProductRule<Ix1, A, B> for Ix1
where
    A: Clone + Mul<B>,
    B: Clone,
    ProductElem<A, B>: Zero,
{
    type Output = ProductElem<A, B>;

    fn product(lhs: &VectorView<'_, A>, rhs: &VectorView<'_, B>) -> Result<ProductElem<A, B>, ShapeError>
    {
        if lhs.len() != rhs.len() {
            return Err(incompatible_shapes(&lhs.raw_dim(), &rhs.raw_dim()));
        }
        let mut sum = <ProductElem<A, B> as Zero>::zero();
        for i in 0..lhs.len() {
            unsafe {
                sum = sum + lhs.uget(i).clone() * rhs.uget(i).clone();
            }
        }
        Ok(sum)
    }
}

/// Matrix-vector product.
impl<A, B> ProductRule<Ix1, A, B> for Ix2
where
    A: Clone + Mul<B> + 'static,
    B: Clone + 'static,
    ProductElem<A, B>: Zero + 'static,
{
    type Output = DrTensor<ProductElem<A, B>, Ix1>;

    fn product(lhs: &MatrixView<'_, A>, rhs: &VectorView<'_, B>) -> Result<DrTensor<ProductElem<A, B>, Ix1>, ShapeError>
    {
        if lhs.ncols() != rhs.len() {
            return Err(incompatible_shapes(&lhs.raw_dim(), &rhs.raw_dim()));
        }
        mat_mul(lhs, &as_column(rhs), Ix1(lhs.nrows()))
    }
}

/// Vector-matrix product.
impl<A, B> ProductRule<Ix2, A, B> for Ix1
where
    A: Clone + Mul<B> + 'static,
    B: Clone + 'static,
    ProductElem<A, B>: Zero + 'static,
{
    type Output = DrTensor<ProductElem<A, B>, Ix1>;

    fn product(lhs: &VectorView<'_, A>, rhs: &MatrixView<'_, B>) -> Result<DrTensor<ProductElem<A, B>, Ix1>, ShapeError>
    {
        if lhs.len() != rhs.nrows() {
            return Err(incompatible_shapes(&lhs.raw_dim(), &rhs.raw_dim()));
        }
        mat_mul(&as_row(lhs), rhs, Ix1(rhs.ncols()))
    }
}

/// Matrix-matrix product.
impl<A, B> ProductRule<Ix2, A, B> for Ix2
where
    A: Clone + Mul<B> + 'static,
    B: Clone + 'static,
    ProductElem<A, B>: Zero + 'static,
{
    type Output = DrTensor<ProductElem<A, B>, Ix2>;

    fn product(lhs: &MatrixView<'_, A>, rhs: &MatrixView<'_, B>) -> Result<DrTensor<ProductElem<A, B>, Ix2>, ShapeError>
    {
        if lhs.ncols() != rhs.nrows() {
            return Err(incompatible_shapes(&lhs.raw_dim(), &rhs.raw_dim()));
        }
        mat_mul(lhs, rhs, Ix2(lhs.nrows(), rhs.ncols()))
    }
}

impl<L, R> Product<R> for L
where
    L: TensorData + ?Sized,
    R: TensorData + ?Sized,
    L::Dim: ProductRule<R::Dim, L::Elem, R::Elem>,
{
    type Output = <L::Dim as ProductRule<R::Dim, L::Elem, R::Elem>>::Output;

    fn try_mul(&self, rhs: &R) -> Result<Self::Output, ShapeError>
    {
        <L::Dim as ProductRule<R::Dim, L::Elem, R::Elem>>::product(&self.view(), &rhs.view())
    }
}

impl<L, R> ProductAssign<R> for L
where
    L: AssignFrom + Product<R> + ?Sized,
    R: TensorData + ?Sized,
    <L as Product<R>>::Output: TensorData<Elem = <L as TensorData>::Elem, Dim = <L as TensorData>::Dim>,
    <L as TensorData>::Elem: Clone,
{
    fn try_mul_assign(&mut self, rhs: &R) -> Result<(), ShapeError>
    {
        let product = self.try_mul(rhs)?;
        if product.shape() != self.shape() {
            tracing::debug!(dest = ?self.shape(), product = ?product.shape(), "product does not fit the destination");
        }
        self.assign(&product)
    }
}

impl<L, R> OuterProduct<R> for L
where
    L: TensorData<Dim = Ix1> + ?Sized,
    R: TensorData<Dim = Ix1> + ?Sized,
    L::Elem: Clone + Mul<R::Elem>,
    R::Elem: Clone,
{
    type Output = DrTensor<ProductElem<L::Elem, R::Elem>, Ix2>;

    fn try_outer(&self, rhs: &R) -> Result<Self::Output, ShapeError>
    {
        let (l, r) = (self.view(), rhs.view());
        let dim = Ix2(l.len(), r.len());
        DrTensor::build_in(dim, dim, Order::RowMajor, Global, |ix| unsafe {
            l.uget(ix[0]).clone() * r.uget(ix[1]).clone()
        })
    }
}

/// View a vector as an `n × 1` matrix.
pub(crate) fn as_column<'a, A>(v: &VectorView<'a, A>) -> MatrixView<'a, A>
{
    unsafe { TensorView::new(v.ptr, Ix2(v.dim[0], 1), Ix2(v.strides[0], 1)) }
}

/// View a vector as a `1 × n` matrix.
pub(crate) fn as_row<'a, A>(v: &VectorView<'a, A>) -> MatrixView<'a, A>
{
    unsafe { TensorView::new(v.ptr, Ix2(1, v.dim[0]), Ix2(1, v.strides[0])) }
}

/// Compute the `m × n` product of `lhs` and `rhs` (inner dimensions already
/// checked) into a row major tensor of extents `out_dim`, which has
/// `m * n` elements.
fn mat_mul<A, B, C, D>(lhs: &MatrixView<'_, A>, rhs: &MatrixView<'_, B>, out_dim: D) -> Result<DrTensor<C, D>, ShapeError>
where
    A: Clone + Mul<B, Output = C> + 'static,
    B: Clone + 'static,
    C: Zero + 'static,
    D: Dimension,
{
    let ((m, k), (_, n)) = (lhs.dim(), rhs.dim());
    debug_assert_eq!(out_dim.size(), m * n);

    if m > 0 && n > 0 && k > 0 && has_gemm::<A, B, C>() {
        let mut out = DrTensor::build_in(out_dim.clone(), out_dim, Order::RowMajor, Global, |_| C::zero())?;
        unsafe {
            gemm(lhs, rhs, out.as_mut_ptr());
        }
        return Ok(out);
    }

    let strides = out_dim.default_strides();
    DrTensor::build_in(out_dim.clone(), out_dim, Order::RowMajor, Global, |ix| {
        let flat = D::stride_offset(ix, &strides) as usize;
        dot_at(lhs, rhs, flat / n, flat % n)
    })
}

/// Row `i` of `lhs` times column `j` of `rhs`, summed in index order.
pub(crate) fn dot_at<A, B, C>(lhs: &MatrixView<'_, A>, rhs: &MatrixView<'_, B>, i: usize, j: usize) -> C
where
    A: Clone + Mul<B, Output = C>,
    B: Clone,
    C: Zero,
{
    debug_assert!(i < lhs.nrows() && j < rhs.ncols());
    (0..lhs.ncols()).fold(C::zero(), |sum, x| unsafe { sum + lhs.uget((i, x)).clone() * rhs.uget((x, j)).clone() })
}

#[inline(always)]
/// Return `true` if `A` and `B` are the same type
fn same_type<A: 'static, B: 'static>() -> bool
{
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Return `true` if `A`, `B` and `C` all are `T`.
fn all_are<A: 'static, B: 'static, C: 'static, T: 'static>() -> bool
{
    same_type::<A, T>() && same_type::<B, T>() && same_type::<C, T>()
}

fn has_gemm<A: 'static, B: 'static, C: 'static>() -> bool
{
    all_are::<A, B, C, f32>()
        || all_are::<A, B, C, f64>()
        || all_are::<A, B, C, Complex<f32>>()
        || all_are::<A, B, C, Complex<f64>>()
}

/// C ← A B, with `c` the row major `m × n` output buffer.
///
/// # Safety
///
/// `has_gemm::<A, B, C>()` must hold and `c` must point to `m * n`
/// initialized elements.
unsafe fn gemm<A, B, C>(lhs: &MatrixView<'_, A>, rhs: &MatrixView<'_, B>, c: *mut C)
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    let ((m, k), (_, n)) = (lhs.dim(), rhs.dim());

    // common parameters for gemm
    let ap = lhs.as_ptr();
    let bp = rhs.as_ptr();
    let (rsa, csa) = (lhs.strides()[0] as isize, lhs.strides()[1] as isize);
    let (rsb, csb) = (rhs.strides()[0] as isize, rhs.strides()[1] as isize);
    let (rsc, csc) = (n as isize, 1);
    if all_are::<A, B, C, f32>() {
        tracing::trace!(m, k, n, "matrixmultiply::sgemm");
        matrixmultiply::sgemm(m, k, n, 1., ap as *const _, rsa, csa, bp as *const _, rsb, csb, 0., c as *mut _, rsc, csc);
    } else if all_are::<A, B, C, f64>() {
        tracing::trace!(m, k, n, "matrixmultiply::dgemm");
        matrixmultiply::dgemm(m, k, n, 1., ap as *const _, rsa, csa, bp as *const _, rsb, csb, 0., c as *mut _, rsc, csc);
    } else if all_are::<A, B, C, Complex<f32>>() {
        tracing::trace!(m, k, n, "matrixmultiply::cgemm");
        matrixmultiply::cgemm(
            matrixmultiply::CGemmOption::Standard,
            matrixmultiply::CGemmOption::Standard,
            m,
            k,
            n,
            [1., 0.],
            ap as *const _,
            rsa,
            csa,
            bp as *const _,
            rsb,
            csb,
            [0., 0.],
            c as *mut _,
            rsc,
            csc,
        );
    } else if all_are::<A, B, C, Complex<f64>>() {
        tracing::trace!(m, k, n, "matrixmultiply::zgemm");
        matrixmultiply::zgemm(
            matrixmultiply::CGemmOption::Standard,
            matrixmultiply::CGemmOption::Standard,
            m,
            k,
            n,
            [1., 0.],
            ap as *const _,
            rsa,
            csa,
            bp as *const _,
            rsb,
            csb,
            [0., 0.],
            c as *mut _,
            rsc,
            csc,
        );
    } else {
        unreachable!("gemm called without a kernel for {}", std::any::type_name::<C>());
    }
}
