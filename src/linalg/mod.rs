// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra capabilities.
//!
//! Each operation is a trait with a blanket implementation over
//! [`TensorData`]: whatever tensor or view satisfies the element and extents
//! requirements has the capability, and the matching operator exists
//! exactly where it holds.
//!
//! The `try_*` methods report shape mismatches as a [`ShapeError`] with
//! `ErrorKind::IncompatibleShape`; the operators panic with the same
//! message.
//!
//! | capability | value form | in-place form |
//! |---|---|---|
//! | [`Addition`] | `try_add`, `&a + &b` | [`AdditionAssign::try_add_assign`], `a += &b` |
//! | [`Subtraction`] | `try_sub`, `&a - &b` | [`SubtractionAssign::try_sub_assign`], `a -= &b` |
//! | [`ScalarAddition`] | `try_add_scalar`, `&a + k` | `a += k` |
//! | [`ScalarSubtraction`] | `try_sub_scalar`, `&a - k` | `a -= k` |
//! | [`ScalarProduct`] | `try_mul_scalar`, `&a * k`, `k * &a` | [`ScalarProductAssign::mul_scalar_assign`], `a *= k` |
//! | [`ScalarDivision`] | `try_div_scalar`, `&a / k` | [`ScalarDivisionAssign::div_scalar_assign`], `a /= k` |
//! | [`Negation`] | `try_neg`, `-&a` | |
//! | [`Product`] | `try_mul`, `&a * &b` | [`ProductAssign::try_mul_assign`], `a *= &b` |
//! | [`OuterProduct`] | `try_outer` | |
//!
//! [`Product`] covers the inner product (vector · vector, a scalar), the
//! matrix-vector, vector-matrix and matrix-matrix products.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let a = dr2(&[[1, 2], [3, 4]]);
//! let v = dr1(&[1, 1]);
//! assert_eq!(a.try_mul(&v).unwrap(), dr1(&[3, 7]));
//! assert_eq!(v.try_mul(&v).unwrap(), 2);
//!
//! let w = dr1(&[1, 2, 3]);
//! assert!(a.try_mul(&w).is_err());
//! ```

mod elementwise;
mod impl_linalg;

use num_complex::Complex;
use std::ops::Neg;

use crate::error::ShapeError;
use crate::{TensorData, TensorDataMut};

pub use self::impl_linalg::ProductRule;
pub(crate) use self::impl_linalg::{as_column, as_row, dot_at};

/// Elementwise sum of two tensors of identical extents.
///
/// The result belongs to the family of `self`: see [`Rebind`](crate::Rebind).
pub trait Addition<Rhs: ?Sized = Self>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self + rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the extents differ.
    fn try_add(&self, rhs: &Rhs) -> Result<Self::Output, ShapeError>;
}

/// Elementwise difference of two tensors of identical extents.
pub trait Subtraction<Rhs: ?Sized = Self>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self - rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the extents differ.
    fn try_sub(&self, rhs: &Rhs) -> Result<Self::Output, ShapeError>;
}

/// In-place elementwise sum.
pub trait AdditionAssign<Rhs: ?Sized = Self>: TensorDataMut
{
    /// Perform `self += rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the extents differ; `self`
    /// is unchanged then.
    fn try_add_assign(&mut self, rhs: &Rhs) -> Result<(), ShapeError>;
}

/// In-place elementwise difference.
pub trait SubtractionAssign<Rhs: ?Sized = Self>: TensorDataMut
{
    /// Perform `self -= rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the extents differ; `self`
    /// is unchanged then.
    fn try_sub_assign(&mut self, rhs: &Rhs) -> Result<(), ShapeError>;
}

/// Sum of every element with a scalar.
pub trait ScalarAddition<K>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self + k`, elementwise.
    ///
    /// ***Errors*** only if the result can not be allocated.
    fn try_add_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>;
}

/// Difference of every element and a scalar.
pub trait ScalarSubtraction<K>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self - k`, elementwise.
    ///
    /// ***Errors*** only if the result can not be allocated.
    fn try_sub_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>;
}

/// Product of every element with a scalar.
pub trait ScalarProduct<K>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self * k`, elementwise.
    ///
    /// ***Errors*** only if the result can not be allocated.
    fn try_mul_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>;
}

/// Quotient of every element by a scalar.
pub trait ScalarDivision<K>: TensorData
{
    /// The result type.
    type Output;

    /// Return `self / k`, elementwise.
    ///
    /// ***Errors*** only if the result can not be allocated.
    fn try_div_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>;
}

/// In-place product with a scalar.
pub trait ScalarProductAssign<K>: TensorDataMut
{
    /// Perform `self *= k`, elementwise.
    fn mul_scalar_assign(&mut self, k: &K);
}

/// In-place quotient by a scalar.
pub trait ScalarDivisionAssign<K>: TensorDataMut
{
    /// Perform `self /= k`, elementwise.
    fn div_scalar_assign(&mut self, k: &K);
}

/// Elementwise negation.
pub trait Negation: TensorData
{
    /// The result type.
    type Output;

    /// Return `-self`.
    ///
    /// ***Errors*** only if the result can not be allocated.
    fn try_neg(&self) -> Result<Self::Output, ShapeError>;
}

/// Inner, matrix-vector, vector-matrix and matrix-matrix products.
///
/// The shape rules are those of linear algebra:
///
/// | `self` | `rhs` | result |
/// |---|---|---|
/// | vector of length *n* | vector of length *n* | scalar |
/// | *m* × *n* matrix | vector of length *n* | vector of length *m* |
/// | vector of length *m* | *m* × *n* matrix | vector of length *n* |
/// | *m* × *k* matrix | *k* × *n* matrix | *m* × *n* matrix |
///
/// Vector and matrix results are row major `DrTensor`s in the global
/// allocator. Sums accumulate in index order, starting from zero.
pub trait Product<Rhs: ?Sized = Self>: TensorData
{
    /// The result type.
    type Output;

    /// Return the product `self · rhs`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the inner dimensions differ.
    fn try_mul(&self, rhs: &Rhs) -> Result<Self::Output, ShapeError>;
}

/// In-place product: `self = self · rhs`.
///
/// The product is computed into a temporary first and then taken in like
/// [`AssignFrom::assign`](crate::AssignFrom::assign): a `DrTensor` resizes
/// to the product's extents, while an `FsTensor` or a view fails with
/// `IncompatibleShape` unless the product has exactly its extents.
pub trait ProductAssign<Rhs: ?Sized = Self>: TensorDataMut
{
    /// Perform `self = self · rhs`.
    fn try_mul_assign(&mut self, rhs: &Rhs) -> Result<(), ShapeError>;
}

/// Outer product of two vectors.
///
/// Vectors of lengths *m* and *n* give the *m* × *n* matrix with elements
/// `self[i] * rhs[j]`.
pub trait OuterProduct<Rhs: ?Sized = Self>: TensorData
{
    /// The result type.
    type Output;

    /// Return the outer product of `self` and `rhs`.
    fn try_outer(&self, rhs: &Rhs) -> Result<Self::Output, ShapeError>;
}

/// Complex conjugation of an element.
///
/// The identity for real numbers.
pub trait Conj: Clone
{
    /// Return the complex conjugate.
    fn conj(&self) -> Self;
}

macro_rules! impl_conj_real {
    ($($t:ty),*) => {
        $(
            impl Conj for $t
            {
                #[inline]
                fn conj(&self) -> Self
                {
                    *self
                }
            }
        )*
    };
}

impl_conj_real!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64);

impl<T> Conj for Complex<T>
where T: Clone + Neg<Output = T>
{
    #[inline]
    fn conj(&self) -> Self
    {
        Complex::new(self.re.clone(), -self.im.clone())
    }
}
