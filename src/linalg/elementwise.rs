// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Blanket implementations of the elementwise capabilities.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{
    Addition, AdditionAssign, Negation, ScalarAddition, ScalarDivision, ScalarDivisionAssign, ScalarProduct,
    ScalarProductAssign, ScalarSubtraction, Subtraction, SubtractionAssign,
};
use crate::error::{incompatible_shapes, ShapeError};
use crate::{Rebind, TensorData, TensorDataMut};

/// Build `f(l[i], r[i])` for every index `i` into the family of `lhs`.
fn zip_build<L, R, C, F>(lhs: &L, rhs: &R, mut f: F) -> Result<<L as Rebind<C>>::Output, ShapeError>
where
    L: Rebind<C>,
    R: TensorData<Dim = <L as TensorData>::Dim> + ?Sized,
    F: FnMut(&<L as TensorData>::Elem, &<R as TensorData>::Elem) -> C,
{
    let (l, r) = (lhs.view(), rhs.view());
    if l.raw_dim() != r.raw_dim() {
        return Err(incompatible_shapes(&l.raw_dim(), &r.raw_dim()));
    }
    lhs.build_like(|index| unsafe { f(l.uget_dim(index), r.uget_dim(index)) })
}

/// Build `f(l[i])` for every index `i` into the family of `lhs`.
fn map_build<L, C, F>(lhs: &L, mut f: F) -> Result<<L as Rebind<C>>::Output, ShapeError>
where
    L: Rebind<C>,
    F: FnMut(&<L as TensorData>::Elem) -> C,
{
    let l = lhs.view();
    lhs.build_like(|index| unsafe { f(l.uget_dim(index)) })
}

/// Element type of `T`.
type ElemOf<T> = <T as TensorData>::Elem;
/// Extents type of `T`.
type DimOf<T> = <T as TensorData>::Dim;

impl<L, R> Addition<R> for L
where
    L: Rebind<<ElemOf<L> as Add<ElemOf<R>>>::Output>,
    R: TensorData<Dim = DimOf<L>> + ?Sized,
    ElemOf<L>: Clone + Add<ElemOf<R>>,
    ElemOf<R>: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Add<ElemOf<R>>>::Output>>::Output;

    fn try_add(&self, rhs: &R) -> Result<Self::Output, ShapeError>
    {
        zip_build(self, rhs, |a, b| a.clone() + b.clone())
    }
}

impl<L, R> Subtraction<R> for L
where
    L: Rebind<<ElemOf<L> as Sub<ElemOf<R>>>::Output>,
    R: TensorData<Dim = DimOf<L>> + ?Sized,
    ElemOf<L>: Clone + Sub<ElemOf<R>>,
    ElemOf<R>: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Sub<ElemOf<R>>>::Output>>::Output;

    fn try_sub(&self, rhs: &R) -> Result<Self::Output, ShapeError>
    {
        zip_build(self, rhs, |a, b| a.clone() - b.clone())
    }
}

impl<L, R> AdditionAssign<R> for L
where
    L: TensorDataMut + ?Sized,
    R: TensorData<Dim = DimOf<L>> + ?Sized,
    ElemOf<L>: AddAssign<ElemOf<R>>,
    ElemOf<R>: Clone,
{
    fn try_add_assign(&mut self, rhs: &R) -> Result<(), ShapeError>
    {
        self.view_mut().zip_mut_with_(&rhs.view(), |a, b| *a += b.clone())
    }
}

impl<L, R> SubtractionAssign<R> for L
where
    L: TensorDataMut + ?Sized,
    R: TensorData<Dim = DimOf<L>> + ?Sized,
    ElemOf<L>: SubAssign<ElemOf<R>>,
    ElemOf<R>: Clone,
{
    fn try_sub_assign(&mut self, rhs: &R) -> Result<(), ShapeError>
    {
        self.view_mut().zip_mut_with_(&rhs.view(), |a, b| *a -= b.clone())
    }
}

impl<L, K> ScalarAddition<K> for L
where
    L: Rebind<<ElemOf<L> as Add<K>>::Output>,
    ElemOf<L>: Clone + Add<K>,
    K: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Add<K>>::Output>>::Output;

    fn try_add_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>
    {
        map_build(self, |a| a.clone() + k.clone())
    }
}

impl<L, K> ScalarSubtraction<K> for L
where
    L: Rebind<<ElemOf<L> as Sub<K>>::Output>,
    ElemOf<L>: Clone + Sub<K>,
    K: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Sub<K>>::Output>>::Output;

    fn try_sub_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>
    {
        map_build(self, |a| a.clone() - k.clone())
    }
}

impl<L, K> ScalarProduct<K> for L
where
    L: Rebind<<ElemOf<L> as Mul<K>>::Output>,
    ElemOf<L>: Clone + Mul<K>,
    K: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Mul<K>>::Output>>::Output;

    fn try_mul_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>
    {
        map_build(self, |a| a.clone() * k.clone())
    }
}

impl<L, K> ScalarDivision<K> for L
where
    L: Rebind<<ElemOf<L> as Div<K>>::Output>,
    ElemOf<L>: Clone + Div<K>,
    K: Clone,
{
    type Output = <L as Rebind<<ElemOf<L> as Div<K>>::Output>>::Output;

    fn try_div_scalar(&self, k: &K) -> Result<Self::Output, ShapeError>
    {
        map_build(self, |a| a.clone() / k.clone())
    }
}

impl<L, K> ScalarProductAssign<K> for L
where
    L: TensorDataMut + ?Sized,
    ElemOf<L>: MulAssign<K>,
    K: Clone,
{
    fn mul_scalar_assign(&mut self, k: &K)
    {
        self.view_mut().map_inplace_(|a| *a *= k.clone())
    }
}

impl<L, K> ScalarDivisionAssign<K> for L
where
    L: TensorDataMut + ?Sized,
    ElemOf<L>: DivAssign<K>,
    K: Clone,
{
    fn div_scalar_assign(&mut self, k: &K)
    {
        self.view_mut().map_inplace_(|a| *a /= k.clone())
    }
}

impl<L> Negation for L
where
    L: Rebind<<ElemOf<L> as Neg>::Output>,
    ElemOf<L>: Clone + Neg,
{
    type Output = <L as Rebind<<ElemOf<L> as Neg>::Output>>::Output;

    fn try_neg(&self) -> Result<Self::Output, ShapeError>
    {
        map_build(self, |a| -a.clone())
    }
}
