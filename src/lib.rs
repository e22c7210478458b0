// Copyright 2014-2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndtensor"]
#![doc(html_root_url = "https://docs.rs/ndtensor/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
    clippy::incompatible_msrv, // false positive PointerExt::offset
)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![doc(test(attr(allow(deprecated))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndtensor` crate provides allocator-aware vectors, matrices and
//! tensors with compile-time or runtime extents, non-owning strided views,
//! slicing, and linear algebra operators between all of them.
//!
//! - [`DrTensor`]: an owning tensor with runtime extents, a separate
//!   per-axis capacity and an allocator (`allocator_api2::alloc::Allocator`).
//!   Aliases [`DrVector`] and [`DrMatrix`].
//! - [`FsTensor`]: an owning tensor with compile-time extents and inline
//!   storage. Aliases [`FsVector`] and [`FsMatrix`].
//! - [`TensorView`] and [`TensorViewMut`]: read-only and read-write views
//!   with arbitrary strides. Aliases [`VectorView`], [`MatrixView`] and
//!   friends.
//!
//! ## Highlights
//!
//! - Extents are either fixed ([`Fixed2<2, 3>`](Fixed2)) or dynamic
//!   ([`Ix2`], [`IxDyn`]); the same algorithms serve both.
//! - Dynamic containers keep a capacity next to their size: shrinking never
//!   releases memory and growing within capacity never reallocates. When a
//!   reallocation happens, elements keep their multi-index.
//! - Slicing with the [`s![]`](s!) macro, `row`, `column`, `submatrix` and
//!   `subvector`, all producing views.
//! - Operations are gated on capability traits (see [`linalg`]); operators
//!   exist only where the capability holds, and the `try_*` forms report a
//!   [`ShapeError`] instead of panicking.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let mut v = dr1(&[1, 2, 3]);
//! {
//!     let mut tail = v.slice_mut(s![1..3]);
//!     tail += 10;
//! }
//! assert_eq!(v, dr1(&[1, 12, 13]));
//!
//! let a = dr2(&[[1., 2.], [3., 4.]]);
//! let b = FsMatrix::<f64, 2, 1>::from([[1.], [1.]]);
//! assert_eq!(&a * &b, dr2(&[[3.], [7.]]));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `approx`: implementations of the `approx` comparison traits.
//! - `rayon`: parallel in-place elementwise kernels.
//! - `matrixmultiply-threading`: threading inside the `matrixmultiply`
//!   matrix multiplication kernels.

#[macro_use]
mod private;

mod aliases;
mod arrayformat;
#[cfg(feature = "approx")]
mod array_approx;
mod arraytraits;
mod data_repr;
mod data_traits;
mod dimension;
pub mod error;
mod free_functions;
mod impl_1d;
mod impl_2d;
mod impl_constructors;
mod impl_fixed;
mod impl_methods;
mod impl_ops;
mod impl_owned_array;
mod impl_views;
mod indexes;
mod iterators;
pub mod linalg;
mod order;
#[cfg(feature = "rayon")]
pub mod parallel;
mod partial;
pub mod prelude;
mod shape_builder;
#[doc(hidden)]
pub mod slice;

use std::marker::PhantomData;
use std::ptr::NonNull;

use allocator_api2::alloc::{Allocator, Global};

pub use crate::aliases::*;
pub use crate::data_traits::{AssignFrom, Rebind, TensorData, TensorDataMut};
pub use crate::dimension::dim::*;
pub use crate::dimension::{
    Dimension, Extents, Fixed1, Fixed2, Fixed3, Fixed4, FixedExtents, FixedShape, IntoDimension, IxDynImpl,
    NdIndex,
};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::free_functions::*;
pub use crate::impl_ops::ScalarOperand;
pub use crate::indexes::{indices, Indices};
pub use crate::iterators::{IndexedIter, Iter, IterMut};
pub use crate::linalg::Conj;
pub use crate::order::Order;
pub use crate::shape_builder::{Shape, ShapeBuilder, StrideShape};
pub use crate::slice::{SliceArg, SliceInfo, SliceInfoElem, SliceNextDim};

use crate::data_repr::OwnedRepr;

mod imp_prelude
{
    pub use crate::error::{ErrorKind, ShapeError};
    pub use crate::{
        Dimension, DrTensor, FsTensor, Ix, Ix0, Ix1, Ix2, IxDyn, TensorData, TensorDataMut, TensorView, TensorViewMut,
    };
    pub use allocator_api2::alloc::{Allocator, Global};
}

/// An owning tensor with dynamic extents, a per-axis capacity and an
/// allocator.
///
/// - `A`: element type
/// - `D`: extents type, [`Ix1`] to [`Ix6`] or [`IxDyn`]; the rank is at
///   least one
/// - `Al`: allocator, [`Global`] by default
///
/// The buffer holds `capacity` slots laid out (row major unless built with a
/// column major [`Shape`]) by the *capacity* extents, so the element at a
/// multi-index lives at the same offset whatever the current size. Only the
/// slots inside the current extents hold live elements.
///
/// [`.resize()`](DrTensor::resize) within capacity never reallocates;
/// growing beyond it reallocates and migrates every element to its
/// multi-index in the new layout.
///
/// ```
/// use ndtensor::{DrMatrix, s};
///
/// let mut m = DrMatrix::from_shape_fn((2, 2), |(i, j)| 10 * i + j);
/// m.resize((3, 3)).unwrap();
/// assert_eq!(m[(1, 1)], 11);
/// assert_eq!(m[(2, 2)], 0);
/// m.resize((1, 2)).unwrap();
/// assert_eq!(m.capacity(), (4, 4));
/// assert_eq!(m.slice(s![0, ..]), [0, 1]);
/// ```
pub struct DrTensor<A, D: Dimension, Al: Allocator = Global>
{
    data: OwnedRepr<A, Al>,
    dim: D,
    cap: D,
    strides: D,
    order: Order,
}

/// An owning tensor whose extents are part of its type.
///
/// `S` is one of [`Fixed1`] to [`Fixed4`]; the elements live inline in a
/// (nested) array, so an `FsTensor` never allocates and is `Copy` when the
/// element type is.
///
/// ```
/// use ndtensor::FsMatrix;
///
/// let m = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m.shape(), &[2, 3]);
/// assert_eq!(m[(1, 0)], 4);
/// ```
pub struct FsTensor<A, S: FixedShape<A>>
{
    data: S::Storage,
}

/// A read-only tensor view.
///
/// A view borrows its elements from a container, another view or a slice
/// and addresses them through arbitrary (non-aliasing) strides. Slicing a
/// view never copies.
///
/// `TensorView` is `Copy` for the static ranks, and its element references
/// live as long as the borrow `'a`, not as long as the view value.
pub struct TensorView<'a, A, D>
{
    ptr: NonNull<A>,
    dim: D,
    strides: D,
    life: PhantomData<&'a A>,
}

/// A read-write tensor view.
///
/// Like [`TensorView`], but with exclusive access to its elements.
pub struct TensorViewMut<'a, A, D>
{
    ptr: NonNull<A>,
    dim: D,
    strides: D,
    life: PhantomData<&'a mut A>,
}

unsafe impl<A, D> Send for TensorView<'_, A, D>
where
    A: Sync,
    D: Send,
{
}
unsafe impl<A, D> Sync for TensorView<'_, A, D>
where
    A: Sync,
    D: Sync,
{
}
unsafe impl<A, D> Send for TensorViewMut<'_, A, D>
where
    A: Send,
    D: Send,
{
}
unsafe impl<A, D> Sync for TensorViewMut<'_, A, D>
where
    A: Sync,
    D: Sync,
{
}
