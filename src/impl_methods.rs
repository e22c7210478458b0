// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The element access, iteration and slicing surface shared by the owning
//! tensors and the read-write view.
//!
//! Everything here goes through a view of `self`, so the algorithms live in
//! `impl_views` once.

use crate::dimension::FixedShape;
use crate::imp_prelude::*;
use crate::iterators::{IndexedIter, Iter, IterMut};
use crate::slice::SliceArg;
use crate::NdIndex;

macro_rules! tensor_methods {
    ([$($gen:tt)*] $self_ty:ty, $dim:ty, [$($bounds:tt)*]) => {
impl<$($gen)*> $self_ty
where $($bounds)*
{
    /// Return a read-only view of the tensor.
    pub fn view(&self) -> TensorView<'_, A, $dim>
    {
        TensorData::view(self)
    }

    /// Return a read-write view of the tensor.
    pub fn view_mut(&mut self) -> TensorViewMut<'_, A, $dim>
    {
        TensorDataMut::view_mut(self)
    }

    /// Return the extents in pattern form (`usize` for vectors, a tuple for
    /// matrices and so on).
    pub fn dim(&self) -> <$dim as Dimension>::Pattern
    {
        self.raw_dim().into_pattern()
    }

    /// Return the extents as a `Dim` value.
    pub fn raw_dim(&self) -> $dim
    {
        TensorData::raw_dim(self)
    }

    /// Return the length of each axis as a slice.
    pub fn shape(&self) -> &[usize]
    {
        TensorData::shape(self)
    }

    /// Return the number of axes.
    pub fn ndim(&self) -> usize
    {
        TensorData::ndim(self)
    }

    /// Return the total number of elements.
    pub fn len(&self) -> usize
    {
        TensorData::len(self)
    }

    /// Return whether the tensor has any elements
    pub fn is_empty(&self) -> bool
    {
        TensorData::is_empty(self)
    }

    /// Return a reference to the element at `index`, or return `None` if the
    /// index is out of bounds.
    ///
    /// Tensors also support indexing syntax: `tensor[index]`, which panics
    /// when out of bounds.
    pub fn get<I>(&self, index: I) -> Option<&A>
    where I: NdIndex<$dim>
    {
        self.view().get(index)
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where I: NdIndex<$dim>
    {
        self.view_mut().into_get_mut(index)
    }

    /// Perform *unchecked* indexing of the tensor.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &A
    where I: NdIndex<$dim>
    {
        self.view().uget(index)
    }

    /// Perform *unchecked* indexing of the tensor, returning a mutable
    /// reference.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget_mut<I>(&mut self, index: I) -> &mut A
    where I: NdIndex<$dim>
    {
        self.view_mut().into_uget_mut(index)
    }

    /// Return an iterator of references to the elements, in row major order.
    pub fn iter(&self) -> Iter<'_, A, $dim>
    {
        self.view().iter()
    }

    /// Return an iterator of mutable references to the elements, in row
    /// major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, A, $dim>
    {
        self.view_mut().into_iter_()
    }

    /// Return an iterator of indexes and references to the elements, in row
    /// major order.
    pub fn indexed_iter(&self) -> IndexedIter<'_, A, $dim>
    {
        self.view().indexed_iter()
    }

    /// Return a sliced view of the tensor.
    ///
    /// See [*Slicing*](crate::s!) for full documentation.
    ///
    /// **Panics** if the slice specification does not match the rank or a
    /// bound is out of range.
    pub fn slice<I>(&self, info: I) -> TensorView<'_, A, I::OutDim>
    where I: SliceArg<$dim>
    {
        self.view().slice(info)
    }

    /// Return a sliced view of the tensor, or an error if the slice
    /// specification does not fit.
    pub fn try_slice<I>(&self, info: I) -> Result<TensorView<'_, A, I::OutDim>, ShapeError>
    where I: SliceArg<$dim>
    {
        self.view().try_slice(info)
    }

    /// Return a sliced read-write view of the tensor.
    ///
    /// **Panics** if the slice specification does not match the rank or a
    /// bound is out of range.
    pub fn slice_mut<I>(&mut self, info: I) -> TensorViewMut<'_, A, I::OutDim>
    where I: SliceArg<$dim>
    {
        self.view_mut().slice_move(info)
    }

    /// Return a sliced read-write view of the tensor, or an error if the
    /// slice specification does not fit.
    pub fn try_slice_mut<I>(&mut self, info: I) -> Result<TensorViewMut<'_, A, I::OutDim>, ShapeError>
    where I: SliceArg<$dim>
    {
        self.view_mut().try_slice_move(info)
    }

    /// Set every element to a clone of `x`.
    pub fn fill(&mut self, x: A)
    where A: Clone
    {
        self.map_inplace(move |elt| elt.clone_from(&x))
    }

    /// Modify the elements in place by calling `f` on each of them, in row
    /// major order.
    pub fn map_inplace<F>(&mut self, f: F)
    where F: FnMut(&mut A)
    {
        self.view_mut().map_inplace_(f)
    }
}
    };
}

tensor_methods!([A, D, Al] DrTensor<A, D, Al>, D, [D: Dimension, Al: Allocator]);
tensor_methods!([A, S] FsTensor<A, S>, S::Dim, [S: FixedShape<A>]);
tensor_methods!(['a, A, D] TensorViewMut<'a, A, D>, D, [D: Dimension]);

impl<A, D, Al> DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator + Clone,
{
    /// Call `f` by reference on each element and build a new tensor with the
    /// results, in a clone of the allocator and with the same order.
    ///
    /// **Panics** if the allocation fails.
    pub fn map<'s, B, F>(&'s self, mut f: F) -> DrTensor<B, D, Al>
    where F: FnMut(&'s A) -> B
    {
        let view = self.view();
        let built = DrTensor::build_in(
            self.dim.clone(),
            self.dim.clone(),
            self.order,
            self.allocator().clone(),
            |index: &D| unsafe { f(view.uget_dim(index)) },
        );
        match built {
            Ok(t) => t,
            Err(e) => panic!("map: {}", e),
        }
    }
}

impl<A, S> FsTensor<A, S>
where S: FixedShape<A>
{
    /// Call `f` by reference on each element and build a new tensor of the
    /// same fixed extents with the results.
    pub fn map<'s, B, F>(&'s self, mut f: F) -> FsTensor<B, S>
    where
        S: FixedShape<B>,
        F: FnMut(&'s A) -> B,
    {
        let view = self.view();
        FsTensor {
            data: <S as FixedShape<B>>::build(|index| unsafe { f(view.uget_dim(&index)) }),
        }
    }
}

impl<'a, A, D> TensorViewMut<'a, A, D>
where D: Dimension
{
    /// Call `f` by reference on each element and build a new row major
    /// `DrTensor` with the results.
    ///
    /// **Panics** if the allocation fails.
    pub fn map<'s, B, F>(&'s self, f: F) -> DrTensor<B, D>
    where F: FnMut(&'s A) -> B
    {
        self.view().map(f)
    }
}

#[cfg(test)]
mod tests
{
    use crate::{dr1, dr2, s, DrMatrix, DrTensor, FsMatrix, FsVector, Ix2, Order, ShapeBuilder};

    #[test]
    fn get_mut_through_every_family()
    {
        let mut d = dr2(&[[1, 2], [3, 4]]);
        *d.get_mut((1, 0)).unwrap() = 30;
        assert_eq!(d.get((1, 0)), Some(&30));
        assert_eq!(d.get((2, 0)), None);

        let mut f = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
        *f.get_mut([0, 1]).unwrap() = 20;
        assert_eq!(f.get((0, 1)), Some(&20));

        let mut v = d.view_mut();
        let mut col = v.slice_mut(s![.., 1]);
        col.fill(0);
        assert_eq!(d, dr2(&[[1, 0], [30, 0]]));
    }

    #[test]
    fn map_keeps_the_family()
    {
        let f = FsMatrix::<i32, 1, 3>::from([[1, 2, 3]]);
        let g: FsMatrix<f64, 1, 3> = f.map(|&x| x as f64 / 2.);
        assert_eq!(g.as_slice(), &[0.5, 1., 1.5]);

        let d = DrMatrix::from_shape_fn((2, 3).f(), |(i, j)| (i * 3 + j) as u8);
        let e: DrTensor<u32, Ix2> = d.map(|&x| x as u32 * 100);
        assert_eq!(e.order(), Order::ColumnMajor);
        assert_eq!(e, dr2(&[[0, 100, 200], [300, 400, 500]]));

        let mut m = dr2(&[[1, 2], [3, 4]]);
        let row = m.row_mut(1);
        assert_eq!(row.map(|x| x.to_string()), dr1(&["3".to_string(), "4".to_string()]));
    }

    #[test]
    fn vector_transpose_and_conj_keep_the_family()
    {
        let d = dr1(&[1, 2, 3]);
        assert_eq!(d.transpose(), d);
        assert_eq!(d.conj(), d);

        let f = FsVector::<i32, 2>::from([5, 6]);
        let ft: FsVector<i32, 2> = f.transpose();
        assert_eq!(ft, [5, 6]);

        let mut m = dr2(&[[1, 2], [3, 4]]);
        let col = m.column_mut(0);
        assert_eq!(col.transpose(), dr1(&[1, 3]));
    }
}
