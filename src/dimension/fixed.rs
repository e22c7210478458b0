// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compile-time extents and the uniform `Extents` interface.

use std::slice;

use crate::{Dim, Dimension, Ix1, Ix2, Ix3, Ix4, IxDyn};

/// Uniform read access to extents, whether they are known at compile time
/// (`Fixed2<2, 3>`) or only at runtime (`Ix2`, `IxDyn`).
///
/// ```
/// use ndtensor::{Extents, Fixed2, Ix2, IxDyn};
///
/// assert!(Fixed2::<2, 3>.equal_extents(&Ix2(2, 3)));
/// assert!(IxDyn(&[2, 3]).equal_extents(&Fixed2::<2, 3>));
/// assert!(!Fixed2::<2, 3>.equal_extents(&IxDyn(&[2, 3, 1])));
/// ```
pub trait Extents
{
    /// Number of axes.
    fn rank(&self) -> usize;

    /// Length of `axis`.
    ///
    /// **Panics** if `axis` is not smaller than the rank.
    fn extent(&self, axis: usize) -> usize;

    /// True iff the ranks match and every axis has the same length.
    fn equal_extents<E>(&self, other: &E) -> bool
    where E: Extents + ?Sized
    {
        self.rank() == other.rank() && (0..self.rank()).all(|ax| self.extent(ax) == other.extent(ax))
    }
}

impl<D> Extents for D
where D: Dimension
{
    #[inline]
    fn rank(&self) -> usize
    {
        self.ndim()
    }

    #[inline]
    fn extent(&self, axis: usize) -> usize
    {
        self[axis]
    }
}

/// Compile-time extents.
///
/// Implemented by the zero sized markers [`Fixed1`], [`Fixed2`], [`Fixed3`]
/// and [`Fixed4`].
///
/// **Note:** *This trait can not be implemented outside the crate*
pub trait FixedExtents: Copy + Default + 'static
{
    /// The runtime extents type with the same rank.
    type Dim: Dimension;
    /// Number of elements.
    const SIZE: usize;
    /// The axis lengths.
    const SHAPE: &'static [usize];

    /// The extents as a runtime value.
    fn dim() -> Self::Dim;

    private_decl! {}
}

/// Inline element storage of the compile-time extents `Self`.
///
/// The storage is a (possibly nested) array laid out in row major order.
pub trait FixedShape<A>: FixedExtents
{
    type Storage;

    /// Build the storage by calling `f` once per index in row major order.
    fn build<F>(f: F) -> Self::Storage
    where F: FnMut(Self::Dim) -> A;

    fn as_slice(storage: &Self::Storage) -> &[A];

    fn as_mut_slice(storage: &mut Self::Storage) -> &mut [A];
}

/// Compile-time extents of a vector of length `N`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fixed1<const N: usize>;

/// Compile-time extents of an `R × C` matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fixed2<const R: usize, const C: usize>;

/// Compile-time extents of an `I × J × K` tensor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fixed3<const I: usize, const J: usize, const K: usize>;

/// Compile-time extents of an `I × J × K × L` tensor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fixed4<const I: usize, const J: usize, const K: usize, const L: usize>;

impl<const N: usize> FixedExtents for Fixed1<N>
{
    type Dim = Ix1;
    const SIZE: usize = N;
    const SHAPE: &'static [usize] = &[N];
    #[inline]
    fn dim() -> Ix1
    {
        Dim::new([N])
    }
    private_impl! {}
}

impl<const R: usize, const C: usize> FixedExtents for Fixed2<R, C>
{
    type Dim = Ix2;
    const SIZE: usize = R * C;
    const SHAPE: &'static [usize] = &[R, C];
    #[inline]
    fn dim() -> Ix2
    {
        Dim::new([R, C])
    }
    private_impl! {}
}

impl<const I: usize, const J: usize, const K: usize> FixedExtents for Fixed3<I, J, K>
{
    type Dim = Ix3;
    const SIZE: usize = I * J * K;
    const SHAPE: &'static [usize] = &[I, J, K];
    #[inline]
    fn dim() -> Ix3
    {
        Dim::new([I, J, K])
    }
    private_impl! {}
}

impl<const I: usize, const J: usize, const K: usize, const L: usize> FixedExtents for Fixed4<I, J, K, L>
{
    type Dim = Ix4;
    const SIZE: usize = I * J * K * L;
    const SHAPE: &'static [usize] = &[I, J, K, L];
    #[inline]
    fn dim() -> Ix4
    {
        Dim::new([I, J, K, L])
    }
    private_impl! {}
}

/// View nested row major arrays as one flat slice.
///
/// # Safety
///
/// `T` must be a (nested) array type holding exactly `len` elements of `A`.
#[inline]
unsafe fn flatten<T, A>(storage: &T, len: usize) -> &[A]
{
    slice::from_raw_parts(storage as *const T as *const A, len)
}

#[inline]
unsafe fn flatten_mut<T, A>(storage: &mut T, len: usize) -> &mut [A]
{
    slice::from_raw_parts_mut(storage as *mut T as *mut A, len)
}

impl<A, const N: usize> FixedShape<A> for Fixed1<N>
{
    type Storage = [A; N];

    fn build<F>(mut f: F) -> [A; N]
    where F: FnMut(Ix1) -> A
    {
        std::array::from_fn(|i| f(Dim::new([i])))
    }

    #[inline]
    fn as_slice(storage: &[A; N]) -> &[A]
    {
        storage
    }

    #[inline]
    fn as_mut_slice(storage: &mut [A; N]) -> &mut [A]
    {
        storage
    }
}

impl<A, const R: usize, const C: usize> FixedShape<A> for Fixed2<R, C>
{
    type Storage = [[A; C]; R];

    fn build<F>(mut f: F) -> [[A; C]; R]
    where F: FnMut(Ix2) -> A
    {
        std::array::from_fn(|i| std::array::from_fn(|j| f(Dim::new([i, j]))))
    }

    #[inline]
    fn as_slice(storage: &[[A; C]; R]) -> &[A]
    {
        unsafe { flatten(storage, R * C) }
    }

    #[inline]
    fn as_mut_slice(storage: &mut [[A; C]; R]) -> &mut [A]
    {
        unsafe { flatten_mut(storage, R * C) }
    }
}

impl<A, const I: usize, const J: usize, const K: usize> FixedShape<A> for Fixed3<I, J, K>
{
    type Storage = [[[A; K]; J]; I];

    fn build<F>(mut f: F) -> [[[A; K]; J]; I]
    where F: FnMut(Ix3) -> A
    {
        std::array::from_fn(|i| std::array::from_fn(|j| std::array::from_fn(|k| f(Dim::new([i, j, k])))))
    }

    #[inline]
    fn as_slice(storage: &Self::Storage) -> &[A]
    {
        unsafe { flatten(storage, I * J * K) }
    }

    #[inline]
    fn as_mut_slice(storage: &mut Self::Storage) -> &mut [A]
    {
        unsafe { flatten_mut(storage, I * J * K) }
    }
}

impl<A, const I: usize, const J: usize, const K: usize, const L: usize> FixedShape<A> for Fixed4<I, J, K, L>
{
    type Storage = [[[[A; L]; K]; J]; I];

    fn build<F>(mut f: F) -> Self::Storage
    where F: FnMut(Ix4) -> A
    {
        std::array::from_fn(|i| {
            std::array::from_fn(|j| std::array::from_fn(|k| std::array::from_fn(|l| f(Dim::new([i, j, k, l])))))
        })
    }

    #[inline]
    fn as_slice(storage: &Self::Storage) -> &[A]
    {
        unsafe { flatten(storage, I * J * K * L) }
    }

    #[inline]
    fn as_mut_slice(storage: &mut Self::Storage) -> &mut [A]
    {
        unsafe { flatten_mut(storage, I * J * K * L) }
    }
}

macro_rules! fixed_extents_cmp {
    ($fixed:ident < $(const $c:ident),* >, $dim:ty) => {
        impl<$(const $c: usize),*> Extents for $fixed<$($c),*>
        {
            #[inline]
            fn rank(&self) -> usize
            {
                <Self as FixedExtents>::Dim::NDIM.unwrap_or(0)
            }

            #[inline]
            fn extent(&self, axis: usize) -> usize
            {
                <Self as FixedExtents>::dim()[axis]
            }
        }

        impl<$(const $c: usize),*> PartialEq<$dim> for $fixed<$($c),*>
        {
            fn eq(&self, rhs: &$dim) -> bool
            {
                self.equal_extents(rhs)
            }
        }

        impl<$(const $c: usize),*> PartialEq<IxDyn> for $fixed<$($c),*>
        {
            fn eq(&self, rhs: &IxDyn) -> bool
            {
                self.equal_extents(rhs)
            }
        }

        impl<$(const $c: usize),*> PartialEq<$fixed<$($c),*>> for $dim
        {
            fn eq(&self, rhs: &$fixed<$($c),*>) -> bool
            {
                self.equal_extents(rhs)
            }
        }

        impl<$(const $c: usize),*> PartialEq<$fixed<$($c),*>> for IxDyn
        {
            fn eq(&self, rhs: &$fixed<$($c),*>) -> bool
            {
                self.equal_extents(rhs)
            }
        }
    };
}

fixed_extents_cmp!(Fixed1<const N>, Ix1);
fixed_extents_cmp!(Fixed2<const R, const C>, Ix2);
fixed_extents_cmp!(Fixed3<const I, const J, const K>, Ix3);
fixed_extents_cmp!(Fixed4<const I, const J, const K, const L>, Ix4);
