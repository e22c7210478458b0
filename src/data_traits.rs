// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The read and write access traits shared by containers and views.

use allocator_api2::alloc::{Allocator, Global};

use crate::dimension::{FixedExtents, FixedShape};
use crate::error::ShapeError;
use crate::{Dimension, DrTensor, FsTensor, TensorView, TensorViewMut};

/// Read access to a tensor: its extents and a view of its elements.
///
/// Implemented by [`DrTensor`], [`FsTensor`], [`TensorView`] and
/// [`TensorViewMut`]. The operations in [`linalg`](crate::linalg) are
/// written against this trait, so they accept any mix of containers and
/// views.
pub trait TensorData
{
    /// The element type.
    type Elem;
    /// The extents type.
    type Dim: Dimension;

    /// A read-only view of all elements.
    fn view(&self) -> TensorView<'_, Self::Elem, Self::Dim>;

    /// The length of each axis.
    fn shape(&self) -> &[usize];

    /// The extents as a `Dim` value.
    fn raw_dim(&self) -> Self::Dim
    {
        self.view().dim
    }

    /// Number of axes.
    fn ndim(&self) -> usize
    {
        self.shape().len()
    }

    /// Number of elements.
    fn len(&self) -> usize
    {
        self.shape().iter().product()
    }

    /// True if there are no elements.
    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// Write access to a tensor's elements.
pub trait TensorDataMut: TensorData
{
    /// A read-write view of all elements.
    fn view_mut(&mut self) -> TensorViewMut<'_, Self::Elem, Self::Dim>;
}

/// Tensors that can take in the elements of another tensor.
///
/// The acceptance rule depends on the destination:
///
/// - a [`DrTensor`] resizes itself to the source extents, reallocating if
///   needed, and copies every element
/// - an [`FsTensor`] or a view requires identical extents and fails with
///   `IncompatibleShape` otherwise
///
/// On error the destination is unchanged.
pub trait AssignFrom: TensorDataMut
{
    /// Copy the elements of `src` into `self`.
    fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = Self::Elem, Dim = Self::Dim> + ?Sized,
        Self::Elem: Clone;
}

/// The owning tensor family of `Self`, rebound to element type `B`.
///
/// Value producing operations build their result with `build_like` on the
/// left operand: a [`DrTensor`] produces a `DrTensor` using a clone of its
/// allocator, an [`FsTensor`] produces an `FsTensor` of the same fixed
/// extents, and views produce a `DrTensor` in the global allocator.
pub trait Rebind<B>: TensorData
{
    /// The result type.
    type Output: TensorData<Elem = B, Dim = Self::Dim>;

    /// Build a tensor with the extents of `self`, calling `f` once per
    /// index in row major order.
    fn build_like<F>(&self, f: F) -> Result<Self::Output, ShapeError>
    where F: FnMut(&Self::Dim) -> B;
}

impl<A, D, Al> TensorData for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    type Elem = A;
    type Dim = D;

    fn view(&self) -> TensorView<'_, A, D>
    {
        unsafe { TensorView::new(self.data.as_nonnull(), self.dim.clone(), self.strides.clone()) }
    }

    fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }
}

impl<A, D, Al> TensorDataMut for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    fn view_mut(&mut self) -> TensorViewMut<'_, A, D>
    {
        unsafe { TensorViewMut::new(self.data.as_nonnull(), self.dim.clone(), self.strides.clone()) }
    }
}

impl<A, D, Al> AssignFrom for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        DrTensor::assign(self, src)
    }
}

impl<A, B, D, Al> Rebind<B> for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator + Clone,
{
    type Output = DrTensor<B, D, Al>;

    fn build_like<F>(&self, f: F) -> Result<DrTensor<B, D, Al>, ShapeError>
    where F: FnMut(&D) -> B
    {
        DrTensor::build_in(self.dim.clone(), self.dim.clone(), self.order, self.allocator().clone(), f)
    }
}

impl<A, S> TensorData for FsTensor<A, S>
where S: FixedShape<A>
{
    type Elem = A;
    type Dim = S::Dim;

    fn view(&self) -> TensorView<'_, A, S::Dim>
    {
        let dim = S::dim();
        let strides = dim.default_strides();
        unsafe { TensorView::new_(S::as_slice(&self.data).as_ptr(), dim, strides) }
    }

    fn shape(&self) -> &[usize]
    {
        S::SHAPE
    }
}

impl<A, S> TensorDataMut for FsTensor<A, S>
where S: FixedShape<A>
{
    fn view_mut(&mut self) -> TensorViewMut<'_, A, S::Dim>
    {
        let dim = S::dim();
        let strides = dim.default_strides();
        unsafe { TensorViewMut::new_(S::as_mut_slice(&mut self.data).as_mut_ptr(), dim, strides) }
    }
}

impl<A, S> AssignFrom for FsTensor<A, S>
where S: FixedShape<A>
{
    fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = S::Dim> + ?Sized,
        A: Clone,
    {
        FsTensor::assign(self, src)
    }
}

impl<A, B, S> Rebind<B> for FsTensor<A, S>
where S: FixedShape<A> + FixedShape<B>
{
    type Output = FsTensor<B, S>;

    fn build_like<F>(&self, mut f: F) -> Result<FsTensor<B, S>, ShapeError>
    where F: FnMut(&<S as FixedExtents>::Dim) -> B
    {
        Ok(FsTensor {
            data: <S as FixedShape<B>>::build(|index| f(&index)),
        })
    }
}

impl<'a, A, D> TensorData for TensorView<'a, A, D>
where D: Dimension
{
    type Elem = A;
    type Dim = D;

    fn view(&self) -> TensorView<'_, A, D>
    {
        unsafe { TensorView::new(self.ptr, self.dim.clone(), self.strides.clone()) }
    }

    fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }
}

impl<'a, A, B, D> Rebind<B> for TensorView<'a, A, D>
where D: Dimension
{
    type Output = DrTensor<B, D, Global>;

    fn build_like<F>(&self, f: F) -> Result<DrTensor<B, D>, ShapeError>
    where F: FnMut(&D) -> B
    {
        DrTensor::build_in(self.dim.clone(), self.dim.clone(), Default::default(), Global, f)
    }
}

impl<'a, A, D> TensorData for TensorViewMut<'a, A, D>
where D: Dimension
{
    type Elem = A;
    type Dim = D;

    fn view(&self) -> TensorView<'_, A, D>
    {
        unsafe { TensorView::new(self.ptr, self.dim.clone(), self.strides.clone()) }
    }

    fn shape(&self) -> &[usize]
    {
        self.dim.slice()
    }
}

impl<'a, A, D> TensorDataMut for TensorViewMut<'a, A, D>
where D: Dimension
{
    fn view_mut(&mut self) -> TensorViewMut<'_, A, D>
    {
        unsafe { TensorViewMut::new(self.ptr, self.dim.clone(), self.strides.clone()) }
    }
}

impl<'a, A, D> AssignFrom for TensorViewMut<'a, A, D>
where D: Dimension
{
    fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        TensorViewMut::assign(self, src)
    }
}

impl<'a, A, B, D> Rebind<B> for TensorViewMut<'a, A, D>
where D: Dimension
{
    type Output = DrTensor<B, D, Global>;

    fn build_like<F>(&self, f: F) -> Result<DrTensor<B, D>, ShapeError>
    where F: FnMut(&D) -> B
    {
        DrTensor::build_in(self.dim.clone(), self.dim.clone(), Default::default(), Global, f)
    }
}
