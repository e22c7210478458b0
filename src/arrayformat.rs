// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension::FixedShape;
use crate::imp_prelude::*;

/// Write the elements of `view` as nested, bracketed rows in row major
/// order, using `format` for each element.
fn format_tensor<A, D, F>(view: &TensorView<'_, A, D>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    D: Dimension,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let view = view.clone().into_dyn();
    let mut index = IxDyn::zeros(view.ndim());
    if view.ndim() == 0 {
        return format(unsafe { view.uget_dim(&index) }, f);
    }
    format_axis(&view, f, &mut format, &mut index, 0)
}

fn format_axis<A, F>(
    view: &TensorView<'_, A, IxDyn>, f: &mut fmt::Formatter<'_>, format: &mut F, index: &mut IxDyn, axis: usize,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let ndim = view.ndim();
    let innermost = axis + 1 == ndim;
    f.write_str("[")?;
    for i in 0..view.shape()[axis] {
        if i > 0 {
            if innermost {
                f.write_str(", ")?;
            } else {
                // a blank line between blocks of rank two and more
                f.write_str(",\n")?;
                for _ in 0..ndim - axis - 2 {
                    f.write_str("\n")?;
                }
                write!(f, "{:width$}", "", width = axis + 1)?;
            }
        }
        index[axis] = i;
        if innermost {
            format(unsafe { view.uget_dim(index) }, f)?;
        } else {
            format_axis(view, f, format, index, axis + 1)?;
        }
    }
    f.write_str("]")
}

/// Append the `Debug` details common to all families.
fn debug_tail<D: Dimension>(f: &mut fmt::Formatter<'_>, shape: &[usize], strides: &[usize]) -> fmt::Result
{
    write!(f, " shape={:?}, strides={:?}", shape, strides)?;
    match D::NDIM {
        Some(ndim) => write!(f, ", const ndim={}", ndim),
        None => write!(f, ", dynamic ndim={}", shape.len()),
    }
}

macro_rules! impl_display {
    ([$($gen:tt)*] $self_ty:ty, [$($bounds:tt)*]) => {
/// Format the tensor using `Display` and apply the formatting parameters
/// used to each element.
///
/// The tensor is shown in multiline style.
impl<$($gen)*> fmt::Display for $self_ty
where
    A: fmt::Display,
    $($bounds)*
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_tensor(&TensorData::view(self), f, fmt::Display::fmt)
    }
}

/// Format the tensor using `LowerExp` and apply the formatting parameters
/// used to each element.
impl<$($gen)*> fmt::LowerExp for $self_ty
where
    A: fmt::LowerExp,
    $($bounds)*
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_tensor(&TensorData::view(self), f, fmt::LowerExp::fmt)
    }
}
    };
}

impl_display!([A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,]);
impl_display!([A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
impl_display!(['a, A, D] TensorView<'a, A, D>, [D: Dimension,]);
impl_display!(['a, A, D] TensorViewMut<'a, A, D>, [D: Dimension,]);

/// Format the tensor using `Debug`, followed by its shape, strides,
/// capacity and memory order.
impl<A, D, Al> fmt::Debug for DrTensor<A, D, Al>
where
    A: fmt::Debug,
    D: Dimension,
    Al: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_tensor(&self.view(), f, fmt::Debug::fmt)?;
        debug_tail::<D>(f, self.shape(), self.strides())?;
        write!(f, ", capacity={:?}, order={:?}", self.cap.slice(), self.order())
    }
}

/// Format the tensor using `Debug`, followed by its shape and strides.
impl<A, S> fmt::Debug for FsTensor<A, S>
where
    A: fmt::Debug,
    S: FixedShape<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let view = self.view();
        format_tensor(&view, f, fmt::Debug::fmt)?;
        debug_tail::<S::Dim>(f, view.shape(), view.strides())
    }
}

/// Format the view using `Debug`, followed by its shape and strides.
impl<'a, A, D> fmt::Debug for TensorView<'a, A, D>
where
    A: fmt::Debug,
    D: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_tensor(self, f, fmt::Debug::fmt)?;
        debug_tail::<D>(f, self.shape(), self.strides())
    }
}

/// Format the view using `Debug`, followed by its shape and strides.
impl<'a, A, D> fmt::Debug for TensorViewMut<'a, A, D>
where
    A: fmt::Debug,
    D: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_tensor(&self.view(), f, fmt::Debug::fmt)?;
        debug_tail::<D>(f, self.shape(), self.strides())
    }
}

#[cfg(test)]
mod tests
{
    use crate::{dr1, dr2, DrTensor, FsMatrix, Ix3};

    #[test]
    fn display_vectors_and_matrices()
    {
        assert_eq!(format!("{}", dr1(&[1, 2, 3])), "[1, 2, 3]");
        assert_eq!(format!("{}", dr2(&[[1, 2], [3, 4]])), "[[1, 2],\n [3, 4]]");
        assert_eq!(format!("{:.1}", dr1(&[1., 2.5])), "[1.0, 2.5]");
        assert_eq!(format!("{}", dr1::<i32>(&[])), "[]");
    }

    #[test]
    fn display_three_axes()
    {
        let t = DrTensor::<i32, Ix3>::from_shape_fn((2, 1, 2), |(i, _, k)| (i * 2 + k) as i32);
        assert_eq!(format!("{}", t), "[[[0, 1]],\n\n [[2, 3]]]");
    }

    #[test]
    fn debug_shows_layout()
    {
        let m = FsMatrix::<i32, 1, 2>::from([[1, 2]]);
        assert_eq!(format!("{:?}", m), "[[1, 2]] shape=[1, 2], strides=[2, 1], const ndim=2");
        let v = dr2(&[[1, 2], [3, 4]]);
        let col = v.column(1);
        assert_eq!(format!("{:?}", col), "[2, 4] shape=[2], strides=[2], const ndim=1");
    }
}
