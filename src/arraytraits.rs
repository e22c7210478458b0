// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::dimension::FixedShape;
use crate::imp_prelude::*;
use crate::iterators::{Iter, IterMut};
use crate::{DrVector, Fixed1, Fixed2, NdIndex};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> !
{
    panic!("ndtensor: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<A, D, Al, I> Index<I> for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
    I: NdIndex<D>,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A
    {
        match self.get(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<A, D, Al, I> IndexMut<I> for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
    I: NdIndex<D>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        match self.get_mut(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

impl<A, S, I> Index<I> for FsTensor<A, S>
where
    S: FixedShape<A>,
    I: NdIndex<S::Dim>,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A
    {
        match self.get(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

impl<A, S, I> IndexMut<I> for FsTensor<A, S>
where
    S: FixedShape<A>,
    I: NdIndex<S::Dim>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        match self.get_mut(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

impl<'a, A, D, I> Index<I> for TensorView<'a, A, D>
where
    D: Dimension,
    I: NdIndex<D>,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A
    {
        match self.get(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

impl<'a, A, D, I> Index<I> for TensorViewMut<'a, A, D>
where
    D: Dimension,
    I: NdIndex<D>,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A
    {
        match self.get(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

impl<'a, A, D, I> IndexMut<I> for TensorViewMut<'a, A, D>
where
    D: Dimension,
    I: NdIndex<D>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        match self.get_mut(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

/// Shapes first, then every pair of elements in row major order.
fn tensors_eq<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: TensorData + ?Sized,
    R: TensorData<Dim = L::Dim> + ?Sized,
    L::Elem: PartialEq<R::Elem>,
{
    if lhs.shape() != rhs.shape() {
        return false;
    }
    let (l, r) = (lhs.view(), rhs.view());
    if let (Some(ls), Some(rs)) = (l.as_slice(), r.as_slice()) {
        return ls == rs;
    }
    l.iter().zip(r.iter()).all(|(a, b)| a == b)
}

macro_rules! impl_tensor_eq {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty, [$($bounds:tt)*]) => {
        /// Return `true` if the extents match and all elements of `self`
        /// and `rhs` are equal. Return `false` otherwise.
        impl<$($gen)*> PartialEq<$rhs> for $lhs
        where
            A: PartialEq<B>,
            $($bounds)*
        {
            fn eq(&self, rhs: &$rhs) -> bool
            {
                tensors_eq(self, rhs)
            }
        }
    };
}

impl_tensor_eq!([A, B, D, Al, Bl] DrTensor<A, D, Al>, DrTensor<B, D, Bl>,
                [D: Dimension, Al: Allocator, Bl: Allocator]);
impl_tensor_eq!([A, B, D, Al, S] DrTensor<A, D, Al>, FsTensor<B, S>,
                [D: Dimension, Al: Allocator, S: FixedShape<B, Dim = D>]);
impl_tensor_eq!(['b, A, B, D, Al] DrTensor<A, D, Al>, TensorView<'b, B, D>, [D: Dimension, Al: Allocator]);
impl_tensor_eq!(['b, A, B, D, Al] DrTensor<A, D, Al>, TensorViewMut<'b, B, D>, [D: Dimension, Al: Allocator]);

impl_tensor_eq!([A, B, S] FsTensor<A, S>, FsTensor<B, S>, [S: FixedShape<A> + FixedShape<B>]);
impl_tensor_eq!([A, B, D, S, Bl] FsTensor<A, S>, DrTensor<B, D, Bl>,
                [D: Dimension, Bl: Allocator, S: FixedShape<A, Dim = D>]);
impl_tensor_eq!(['b, A, B, D, S] FsTensor<A, S>, TensorView<'b, B, D>, [D: Dimension, S: FixedShape<A, Dim = D>]);
impl_tensor_eq!(['b, A, B, D, S] FsTensor<A, S>, TensorViewMut<'b, B, D>,
                [D: Dimension, S: FixedShape<A, Dim = D>]);

impl_tensor_eq!(['a, A, B, D, Bl] TensorView<'a, A, D>, DrTensor<B, D, Bl>, [D: Dimension, Bl: Allocator]);
impl_tensor_eq!(['a, A, B, D, S] TensorView<'a, A, D>, FsTensor<B, S>, [D: Dimension, S: FixedShape<B, Dim = D>]);
impl_tensor_eq!(['a, 'b, A, B, D] TensorView<'a, A, D>, TensorView<'b, B, D>, [D: Dimension]);
impl_tensor_eq!(['a, 'b, A, B, D] TensorView<'a, A, D>, TensorViewMut<'b, B, D>, [D: Dimension]);

impl_tensor_eq!(['a, A, B, D, Bl] TensorViewMut<'a, A, D>, DrTensor<B, D, Bl>, [D: Dimension, Bl: Allocator]);
impl_tensor_eq!(['a, A, B, D, S] TensorViewMut<'a, A, D>, FsTensor<B, S>,
                [D: Dimension, S: FixedShape<B, Dim = D>]);
impl_tensor_eq!(['a, 'b, A, B, D] TensorViewMut<'a, A, D>, TensorView<'b, B, D>, [D: Dimension]);
impl_tensor_eq!(['a, 'b, A, B, D] TensorViewMut<'a, A, D>, TensorViewMut<'b, B, D>, [D: Dimension]);

macro_rules! impl_array_eq {
    ([$($gen:tt)*] $vector:ty, $matrix:ty, [$($bounds:tt)*]) => {
        /// Compare a vector with an array of the same length.
        impl<$($gen)*, B, const N: usize> PartialEq<[B; N]> for $vector
        where
            A: PartialEq<B>,
            $($bounds)*
        {
            fn eq(&self, rhs: &[B; N]) -> bool
            {
                let v = TensorData::view(self);
                v.len() == N && v.iter().zip(rhs).all(|(a, b)| a == b)
            }
        }

        /// Compare a matrix with a nested array of the same shape.
        impl<$($gen)*, B, const R: usize, const C: usize> PartialEq<[[B; C]; R]> for $matrix
        where
            A: PartialEq<B>,
            $($bounds)*
        {
            fn eq(&self, rhs: &[[B; C]; R]) -> bool
            {
                let v = TensorData::view(self);
                v.dim() == (R, C) && v.iter().zip(rhs.iter().flatten()).all(|(a, b)| a == b)
            }
        }
    };
}

impl_array_eq!([A, Al] DrTensor<A, Ix1, Al>, DrTensor<A, Ix2, Al>, [Al: Allocator]);
impl_array_eq!(['a, A] TensorView<'a, A, Ix1>, TensorView<'a, A, Ix2>, []);
impl_array_eq!(['a, A] TensorViewMut<'a, A, Ix1>, TensorViewMut<'a, A, Ix2>, []);

impl<A, B, const M: usize, const N: usize> PartialEq<[B; N]> for FsTensor<A, Fixed1<M>>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &[B; N]) -> bool
    {
        M == N && self.as_slice().iter().zip(rhs).all(|(a, b)| a == b)
    }
}

impl<A, B, const R: usize, const C: usize, const R2: usize, const C2: usize> PartialEq<[[B; C2]; R2]>
    for FsTensor<A, Fixed2<R, C>>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &[[B; C2]; R2]) -> bool
    {
        (R, C) == (R2, C2) && self.as_slice().iter().zip(rhs.iter().flatten()).all(|(a, b)| a == b)
    }
}

impl<A, D, Al> Eq for DrTensor<A, D, Al>
where
    A: Eq,
    D: Dimension,
    Al: Allocator,
{
}

impl<A, S> Eq for FsTensor<A, S>
where
    A: Eq,
    S: FixedShape<A>,
{
}

impl<A, D, Al> hash::Hash for DrTensor<A, D, Al>
where
    A: hash::Hash,
    D: Dimension,
    Al: Allocator,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<A, S> hash::Hash for FsTensor<A, S>
where
    A: hash::Hash,
    S: FixedShape<A>,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<'a, A, D, Al> IntoIterator for &'a DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, A, D, Al> IntoIterator for &'a mut DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter_mut()
    }
}

impl<'a, A, S> IntoIterator for &'a FsTensor<A, S>
where S: FixedShape<A>
{
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.as_slice().iter()
    }
}

impl<'a, A, S> IntoIterator for &'a mut FsTensor<A, S>
where S: FixedShape<A>
{
    type Item = &'a mut A;
    type IntoIter = std::slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.as_slice_mut().iter_mut()
    }
}

/// Create a vector from the elements of an iterator.
///
/// ```
/// use ndtensor::{dr1, DrVector};
///
/// let v: DrVector<u32> = (1..4).map(|x| x * x).collect();
/// assert_eq!(v, dr1(&[1, 4, 9]));
/// ```
impl<A> FromIterator<A> for DrVector<A>
{
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = A>
    {
        Self::from(iterable.into_iter().collect::<Vec<A>>())
    }
}

/// Create a vector from a `Vec`, moving its elements.
impl<A> From<Vec<A>> for DrVector<A>
{
    fn from(v: Vec<A>) -> Self
    {
        let len = v.len();
        match DrTensor::from_shape_vec(len, v) {
            Ok(t) => t,
            Err(e) => panic!("from: {}", e),
        }
    }
}

/// Create a dynamic vector or matrix from an array of matching shape.
impl<A, const N: usize> From<FsTensor<A, Fixed1<N>>> for DrVector<A>
{
    fn from(f: FsTensor<A, Fixed1<N>>) -> Self
    {
        Self::from(Vec::from(f.into_inner()))
    }
}

impl<A, const R: usize, const C: usize> From<FsTensor<A, Fixed2<R, C>>> for DrTensor<A, Ix2>
{
    fn from(f: FsTensor<A, Fixed2<R, C>>) -> Self
    {
        let v: Vec<A> = f.into_inner().into_iter().flatten().collect();
        match DrTensor::from_shape_vec((R, C), v) {
            Ok(t) => t,
            Err(e) => panic!("from: {}", e),
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    use crate::{dr1, dr2, DrMatrix, DrVector, FsMatrix, FsVector};

    #[test]
    fn equality_across_families()
    {
        let d = dr2(&[[1, 2], [3, 4]]);
        let f = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
        assert_eq!(d, f);
        assert_eq!(f, d.view());
        assert_eq!(d.t(), dr2(&[[1, 3], [2, 4]]));
        assert_ne!(d, dr2(&[[1, 2, 0], [3, 4, 0]]));
        assert_eq!(d, [[1, 2], [3, 4]]);
    }

    #[test]
    fn equal_tensors_hash_alike()
    {
        let mut set = HashSet::new();
        set.insert(dr1(&[1, 2, 3]));
        let mut padded = DrVector::with_capacity(0, 8).unwrap();
        padded.assign(&dr1(&[1, 2, 3])).unwrap();
        assert!(set.contains(&padded));
    }

    fn hash_of<T: Hash>(t: &T) -> u64
    {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_fixed_and_dynamic_tensors_hash_alike()
    {
        let d = dr2(&[[1, 2], [3, 4]]);
        let f = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
        assert_eq!(d, f);
        assert_eq!(hash_of(&d), hash_of(&f));

        let v = FsVector::<u8, 3>::from([7, 8, 9]);
        assert_eq!(hash_of(&v), hash_of(&dr1(&[7u8, 8, 9])));
    }

    #[test]
    fn fixed_to_dynamic()
    {
        let m = DrMatrix::from(FsMatrix::<u8, 2, 3>::from([[1, 2, 3], [4, 5, 6]]));
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[(1, 2)], 6);
        let v = DrVector::from(FsVector::<u8, 2>::from([7, 8]));
        assert_eq!(v, [7, 8]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds_panics()
    {
        let m = FsMatrix::<i32, 2, 2>::zeros();
        let _ = m[(0, 2)];
    }
}
