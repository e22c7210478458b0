// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for vectors.

use crate::imp_prelude::*;
use crate::linalg::Conj;
use crate::{s, DrVector, Fixed1, FsVector, VectorView, VectorViewMut};

/// # Methods For Vector Views
impl<'a, A> TensorView<'a, A, Ix1>
{
    /// Return a view of the elements `start..end`.
    ///
    /// **Panics** if `end` exceeds the length or `start` exceeds `end`.
    ///
    /// ```
    /// use ndtensor::dr1;
    ///
    /// let v = dr1(&[1, 2, 3, 4]);
    /// assert_eq!(v.subvector(1, 3), [2, 3]);
    /// ```
    pub fn subvector(&self, start: Ix, end: Ix) -> VectorView<'a, A>
    {
        match self.try_slice(s![start..end]) {
            Ok(v) => v,
            Err(e) => panic!("subvector: {}", e),
        }
    }

    /// Return the vector itself: a vector is its own transpose.
    pub fn t(&self) -> VectorView<'a, A>
    {
        *self
    }

    /// Return a copy of the vector (its own transpose).
    pub fn transpose(&self) -> DrVector<A>
    where A: Clone
    {
        self.to_owned()
    }

    /// Return the elementwise conjugate.
    pub fn conj(&self) -> DrVector<A>
    where A: Conj
    {
        self.map(Conj::conj)
    }

    /// Return a vector with the elements of the view.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        if let Some(slc) = self.as_slice() {
            slc.to_vec()
        } else {
            self.iter().cloned().collect()
        }
    }
}

impl<'a, A> TensorViewMut<'a, A, Ix1>
{
    /// Return a read-write view of the elements `start..end`, consuming the
    /// view.
    ///
    /// **Panics** if `end` exceeds the length or `start` exceeds `end`.
    pub fn into_subvector(self, start: Ix, end: Ix) -> VectorViewMut<'a, A>
    {
        match self.try_slice_move(s![start..end]) {
            Ok(v) => v,
            Err(e) => panic!("subvector: {}", e),
        }
    }
}

macro_rules! vector_methods {
    ([$($gen:tt)*] $self_ty:ty, $owned:ty, [$($bounds:tt)*], [$($map_bounds:tt)*]) => {
/// # Methods For Vectors
impl<$($gen)*> $self_ty
where $($bounds)*
{
    /// Return a view of the elements `start..end`.
    ///
    /// **Panics** if `end` exceeds the length or `start` exceeds `end`.
    pub fn subvector(&self, start: Ix, end: Ix) -> VectorView<'_, A>
    {
        self.view().subvector(start, end)
    }

    /// Return a read-write view of the elements `start..end`.
    ///
    /// **Panics** if `end` exceeds the length or `start` exceeds `end`.
    pub fn subvector_mut(&mut self, start: Ix, end: Ix) -> VectorViewMut<'_, A>
    {
        self.view_mut().into_subvector(start, end)
    }

    /// Return a view of the vector: a vector is its own transpose.
    pub fn t(&self) -> VectorView<'_, A>
    {
        self.view()
    }

    /// Return a copy of the vector (its own transpose), of the same family.
    ///
    /// **Panics** if the allocation fails.
    pub fn transpose(&self) -> $owned
    where
        A: Clone,
        $($map_bounds)*
    {
        self.map(A::clone)
    }

    /// Return the elementwise conjugate, of the same family.
    ///
    /// **Panics** if the allocation fails.
    ///
    /// ```
    /// use ndtensor::FsVector;
    /// use num_complex::Complex;
    ///
    /// let v = FsVector::from([Complex::new(0., 1.), Complex::new(2., 0.)]);
    /// assert_eq!(v.conj(), [Complex::new(0., -1.), Complex::new(2., 0.)]);
    /// ```
    pub fn conj(&self) -> $owned
    where
        A: Conj,
        $($map_bounds)*
    {
        self.map(Conj::conj)
    }

    /// Return a vector with the elements.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.view().to_vec()
    }
}
    };
}

vector_methods!([A, Al] DrTensor<A, Ix1, Al>, DrTensor<A, Ix1, Al>, [Al: Allocator], [Al: Clone]);
vector_methods!([A, const N: usize] FsTensor<A, Fixed1<N>>, FsVector<A, N>, [], []);
vector_methods!(['a, A] TensorViewMut<'a, A, Ix1>, DrVector<A>, [], []);

#[cfg(test)]
mod tests
{
    use crate::{dr1, s, DrVector};

    #[test]
    fn subvector_of_slice_view()
    {
        let v = DrVector::from_shape_fn(8, |i| i as i32);
        let tail = v.slice(s![2..8]);
        assert_eq!(tail.subvector(1, 4).to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn subvector_mut_writes_through()
    {
        let mut v = dr1(&[1, 2, 3]);
        v.subvector_mut(0, 2).map_inplace(|x| *x *= -1);
        assert_eq!(v, dr1(&[-1, -2, 3]));
    }

    #[test]
    fn empty_subvector_at_end()
    {
        let v = dr1(&[1, 2, 3]);
        assert!(v.subvector(3, 3).is_empty());
    }
}
