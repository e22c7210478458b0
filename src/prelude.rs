// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndtensor prelude.
//!
//! This module contains the most used types, type aliases, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let m = dr2(&[[1, 2], [3, 4]]);
//! assert_eq!(m.try_add(&m).unwrap(), dr2(&[[2, 4], [6, 8]]));
//! ```

#[doc(no_inline)]
pub use crate::{DrTensor, FsTensor, TensorView, TensorViewMut};

#[doc(no_inline)]
pub use crate::{Dim, Dimension, Fixed1, Fixed2, Fixed3, Fixed4, Order};

#[doc(no_inline)]
pub use crate::{DrMatrix, DrTensorD, DrVector, FsMatrix, FsTensor3, FsVector};

#[doc(no_inline)]
pub use crate::{MatrixView, TensorView0, TensorView3, TensorViewD, VectorView};

#[doc(no_inline)]
pub use crate::{MatrixViewMut, TensorViewMut0, TensorViewMut3, TensorViewMutD, VectorViewMut};

#[doc(no_inline)]
pub use crate::{Ix0, Ix1, Ix2, Ix3, Ix4, Ix5, Ix6, IxDyn};

#[doc(no_inline)]
pub use crate::{dr1, dr2, dr3, view1, view2, view_mut1};

pub use crate::{dr, s};

#[doc(no_inline)]
pub use crate::{AssignFrom, Rebind, ShapeBuilder, TensorData, TensorDataMut};

#[doc(no_inline)]
pub use crate::linalg::{
    Addition, AdditionAssign, Conj, Negation, OuterProduct, Product, ProductAssign, ScalarAddition, ScalarDivision,
    ScalarDivisionAssign, ScalarProduct, ScalarProductAssign, ScalarSubtraction, Subtraction, SubtractionAssign,
};
