// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for dynamic tensors.

use std::ptr;

use num_traits::Zero;

use crate::data_repr::OwnedRepr;
use crate::dimension::size_of_shape_checked;
use crate::error::{from_kind, ErrorKind};
use crate::imp_prelude::*;
use crate::impl_owned_array::check_owned_rank;
use crate::order::Order;
use crate::{IntoDimension, Shape, ShapeBuilder};

/// # Constructor Methods for Dynamic Tensors
///
/// These use the global allocator. Each has an `_in` form taking an explicit
/// allocator; those return a `Result` since a bounded allocator may fail.
///
/// Shapes may be given as `usize`, tuples, arrays or `Dim` values, and call
/// [`.f()`](ShapeBuilder::f) on them for column major memory order.
impl<A, D> DrTensor<A, D, Global>
where D: Dimension
{
    /// Create an empty tensor: every axis has length zero and nothing is
    /// allocated.
    ///
    /// `IxDyn` tensors are created with one axis.
    ///
    /// ```
    /// use ndtensor::DrMatrix;
    ///
    /// let m = DrMatrix::<f32>::new();
    /// assert_eq!(m.dim(), (0, 0));
    /// assert!(m.is_empty());
    /// ```
    pub fn new() -> Self
    {
        Self::new_in(Global)
    }

    /// Create a tensor with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the rank is zero or the number of elements overflows.
    ///
    /// ```
    /// use ndtensor::{dr3, DrTensor, Ix3};
    ///
    /// let a = DrTensor::<f64, Ix3>::from_elem((2, 2, 2), 1.);
    ///
    /// assert!(
    ///     a == dr3(&[[[1., 1.],
    ///                 [1., 1.]],
    ///                [[1., 1.],
    ///                 [1., 1.]]])
    /// );
    /// assert!(a.strides() == &[4, 2, 1]);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: ShapeBuilder<Dim = D>,
    {
        Self::from_shape_fn_unwrap("from_elem", shape, |_| elem.clone())
    }

    /// Create a tensor with zeros, shape `shape`.
    ///
    /// **Panics** if the rank is zero or the number of elements overflows.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: ShapeBuilder<Dim = D>,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create a tensor with default values, shape `shape`.
    ///
    /// **Panics** if the rank is zero or the number of elements overflows.
    pub fn default<Sh>(shape: Sh) -> Self
    where
        A: Default,
        Sh: ShapeBuilder<Dim = D>,
    {
        Self::from_shape_fn_unwrap("default", shape, |_| A::default())
    }

    /// Create a tensor with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create, in pattern
    /// form; it is called exactly once per element, in row major order,
    /// before this method returns. If `f` panics, the elements created so
    /// far are dropped.
    ///
    /// **Panics** if the rank is zero or the number of elements overflows.
    ///
    /// ```
    /// use ndtensor::{dr2, DrMatrix};
    ///
    /// let m = DrMatrix::from_shape_fn((2, 3), |(i, j)| i * 3 + j);
    /// assert_eq!(m, dr2(&[[0, 1, 2], [3, 4, 5]]));
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, f: F) -> Self
    where
        Sh: ShapeBuilder<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        Self::from_shape_fn_unwrap("from_shape_fn", shape, f)
    }

    /// Like [`from_shape_fn`](Self::from_shape_fn), returning an error
    /// instead of panicking.
    pub fn try_from_shape_fn<Sh, F>(shape: Sh, f: F) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        Self::from_shape_fn_in(shape, Global, f)
    }

    fn from_shape_fn_unwrap<Sh, F>(name: &str, shape: Sh, f: F) -> Self
    where
        Sh: ShapeBuilder<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        match Self::from_shape_fn_in(shape, Global, f) {
            Ok(t) => t,
            Err(e) => panic!("{}: {}", name, e),
        }
    }

    /// Create a tensor from a vector of elements in memory order: row major
    /// unless the shape asks for column major.
    ///
    /// ***Errors*** with `IncompatibleShape` if the rank is zero or the
    /// vector length does not match the number of elements.
    ///
    /// ```
    /// use ndtensor::{dr2, DrMatrix, ShapeBuilder};
    ///
    /// let m = DrMatrix::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(m, dr2(&[[1., 2.], [3., 4.]]));
    ///
    /// let f = DrMatrix::from_shape_vec((2, 2).f(), vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(f, dr2(&[[1., 3.], [2., 4.]]));
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, mut v: Vec<A>) -> Result<Self, ShapeError>
    where Sh: ShapeBuilder<Dim = D>
    {
        let Shape { dim, order } = shape.into_shape();
        check_owned_rank(&dim)?;
        let len = size_of_shape_checked(&dim)?;
        if len != v.len() {
            tracing::debug!(dim = ?dim, len = v.len(), "vector length does not match shape");
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let data = OwnedRepr::with_capacity_in(len, Global)?;
        unsafe {
            ptr::copy_nonoverlapping(v.as_ptr(), data.as_ptr_mut(), len);
            // the elements moved into `data`
            v.set_len(0);
            Ok(Self::from_filled_repr(data, dim, order))
        }
    }

    /// Create a tensor of shape `shape` inside a buffer of capacity
    /// `capacity`, filled with default values.
    ///
    /// ***Errors*** with `CapacityViolation` if the capacity is smaller than
    /// the shape along any axis, `IncompatibleShape` if the ranks differ.
    ///
    /// ```
    /// use ndtensor::DrMatrix;
    ///
    /// let m = DrMatrix::<i32>::with_capacity((2, 2), (4, 8)).unwrap();
    /// assert_eq!(m.dim(), (2, 2));
    /// assert_eq!(m.capacity(), (4, 8));
    /// assert!(DrMatrix::<i32>::with_capacity((2, 2), (1, 8)).is_err());
    /// ```
    pub fn with_capacity<Sh, C>(shape: Sh, capacity: C) -> Result<Self, ShapeError>
    where
        A: Default,
        Sh: ShapeBuilder<Dim = D>,
        C: IntoDimension<Dim = D>,
    {
        Self::with_capacity_in(shape, capacity, Global)
    }

    /// Like [`with_capacity`](Self::with_capacity), with elements created by
    /// `f` as in [`from_shape_fn`](Self::from_shape_fn).
    pub fn from_shape_fn_with_capacity<Sh, C, F>(shape: Sh, capacity: C, f: F) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<Dim = D>,
        C: IntoDimension<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        Self::from_shape_fn_with_capacity_in(shape, capacity, Global, f)
    }

    /// Create a row major copy of any tensor or view with the same extents
    /// type.
    ///
    /// ```
    /// use ndtensor::{DrMatrix, FsMatrix};
    ///
    /// let f = FsMatrix::<u8, 2, 2>::from([[1, 2], [3, 4]]);
    /// let d = DrMatrix::from_data(&f);
    /// assert_eq!(d, f);
    /// ```
    ///
    /// **Panics** if the source has rank zero.
    pub fn from_data<T>(src: &T) -> Self
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        match Self::from_data_in(src, Global) {
            Ok(t) => t,
            Err(e) => panic!("from_data: {}", e),
        }
    }
}

/// # Constructor Methods With an Explicit Allocator
impl<A, D, Al> DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    /// Create an empty tensor using `alloc`; nothing is allocated until the
    /// tensor grows.
    pub fn new_in(alloc: Al) -> Self
    {
        let dim = D::empty();
        let order = Order::default();
        let strides = order.strides_for(&dim);
        DrTensor {
            data: OwnedRepr::new_in(alloc),
            cap: dim.clone(),
            dim,
            strides,
            order,
        }
    }

    /// Create a tensor in `alloc` with values created by `f`, as
    /// [`DrTensor::from_shape_fn`] does.
    ///
    /// ***Errors*** with `AllocationFailure` if `alloc` can not provide the
    /// buffer.
    pub fn from_shape_fn_in<Sh, F>(shape: Sh, alloc: Al, mut f: F) -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        let Shape { dim, order } = shape.into_shape();
        Self::build_in(dim.clone(), dim, order, alloc, |index| f(index.clone().into_pattern()))
    }

    /// Create a tensor in `alloc` with shape `shape`, capacity `capacity` and
    /// default values.
    pub fn with_capacity_in<Sh, C>(shape: Sh, capacity: C, alloc: Al) -> Result<Self, ShapeError>
    where
        A: Default,
        Sh: ShapeBuilder<Dim = D>,
        C: IntoDimension<Dim = D>,
    {
        Self::from_shape_fn_with_capacity_in(shape, capacity, alloc, |_| A::default())
    }

    /// Create a tensor in `alloc` with shape `shape`, capacity `capacity` and
    /// values created by `f`.
    pub fn from_shape_fn_with_capacity_in<Sh, C, F>(shape: Sh, capacity: C, alloc: Al, mut f: F)
        -> Result<Self, ShapeError>
    where
        Sh: ShapeBuilder<Dim = D>,
        C: IntoDimension<Dim = D>,
        F: FnMut(D::Pattern) -> A,
    {
        let Shape { dim, order } = shape.into_shape();
        let cap = capacity.into_dimension();
        Self::build_in(dim, cap, order, alloc, |index| f(index.clone().into_pattern()))
    }

    /// Create a row major copy of `src` in `alloc`.
    ///
    /// ***Errors*** with `IncompatibleShape` if the source has rank zero,
    /// `AllocationFailure` if `alloc` can not provide the buffer.
    pub fn from_data_in<T>(src: &T, alloc: Al) -> Result<Self, ShapeError>
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        let view = src.view();
        let dim = view.raw_dim();
        Self::build_in(dim.clone(), dim, Order::RowMajor, alloc, |index| unsafe {
            view.uget_dim(index).clone()
        })
    }
}

impl<A, D, Al> Default for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator + Default,
{
    /// An empty tensor, see [`DrTensor::new`].
    fn default() -> Self
    {
        Self::new_in(Al::default())
    }
}
