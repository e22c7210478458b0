// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem;
use std::ptr;

use crate::data_repr::OwnedRepr;
use crate::dimension::{fits_within, max_extents, min_extents, size_of_shape_checked};
use crate::error::{from_kind, ErrorKind};
use crate::imp_prelude::*;
use crate::order::Order;
use crate::partial::Partial;
use crate::IntoDimension;

/// # Storage Management
///
/// A `DrTensor` keeps a capacity next to its extents. The buffer is laid
/// out by the capacity, so growing or shrinking within it only constructs
/// or drops elements at the edges; every other element stays where it is.
impl<A, D, Al> DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    /// Build a tensor of extents `dim` inside a buffer laid out by `cap`,
    /// calling `f` once per index in row major order.
    ///
    /// If `f` panics, the elements built so far are dropped and the buffer
    /// is released.
    pub(crate) fn build_in<F>(dim: D, cap: D, order: Order, alloc: Al, f: F) -> Result<Self, ShapeError>
    where F: FnMut(&D) -> A
    {
        check_owned_rank(&dim)?;
        if cap.ndim() != dim.ndim() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        if !fits_within(&dim, &cap) {
            tracing::debug!(dim = ?dim, capacity = ?cap, "capacity smaller than extents");
            return Err(from_kind(ErrorKind::CapacityViolation));
        }
        size_of_shape_checked(&dim)?;
        let len = size_of_shape_checked(&cap)?;
        let data = OwnedRepr::with_capacity_in(len, alloc)?;
        let strides = order.strides_for(&cap);
        unsafe {
            let mut partial = Partial::new(data.as_ptr_mut(), &dim, &strides);
            partial.fill(f);
            partial.release_ownership();
        }
        Ok(DrTensor {
            data,
            dim,
            cap,
            strides,
            order,
        })
    }

    /// Wrap a freshly filled contiguous buffer.
    ///
    /// ## Safety
    ///
    /// Every slot of `data` must hold a live element, and `data` must have
    /// exactly `dim.size()` slots.
    pub(crate) unsafe fn from_filled_repr(data: OwnedRepr<A, Al>, dim: D, order: Order) -> Self
    {
        let strides = order.strides_for(&dim);
        DrTensor {
            data,
            cap: dim.clone(),
            dim,
            strides,
            order,
        }
    }

    /// Return the capacity in pattern form (`usize` for vectors, a tuple
    /// for matrices and so on).
    ///
    /// The capacity is at least the extents along every axis.
    pub fn capacity(&self) -> D::Pattern
    {
        self.cap.clone().into_pattern()
    }

    /// Return the capacity as a `Dim` value.
    pub fn raw_capacity(&self) -> D
    {
        self.cap.clone()
    }

    /// Return the strides of the buffer layout, in elements.
    ///
    /// They follow from the capacity and the memory order, not from the
    /// current extents.
    pub fn strides(&self) -> &[usize]
    {
        self.strides.slice()
    }

    /// Return the memory order of the buffer.
    pub fn order(&self) -> Order
    {
        self.order
    }

    /// Return a reference to the allocator.
    pub fn allocator(&self) -> &Al
    {
        self.data.allocator()
    }

    /// Return a pointer to the element at index zero.
    pub fn as_ptr(&self) -> *const A
    {
        self.data.as_ptr()
    }

    /// Return a mutable pointer to the element at index zero.
    pub fn as_mut_ptr(&mut self) -> *mut A
    {
        self.data.as_ptr_mut()
    }

    /// Return the elements as a slice if they are contiguous and in row
    /// major order, otherwise `None`.
    ///
    /// A row major tensor whose capacity exceeds its extents along any axis
    /// but the first is not contiguous.
    pub fn as_slice(&self) -> Option<&[A]>
    {
        self.view().as_slice()
    }

    /// Return the elements as a mutable slice under the same condition as
    /// [`.as_slice()`](Self::as_slice).
    pub fn as_slice_mut(&mut self) -> Option<&mut [A]>
    {
        self.view_mut().into_slice()
    }

    /// Grow or shrink the tensor to the extents `shape`.
    ///
    /// Elements whose index is inside both the old and the new extents keep
    /// their values. New elements are `A::default()`, and elements outside
    /// the new extents are dropped.
    ///
    /// Shrinking never releases memory. Growing within the capacity does
    /// not reallocate. Growing beyond it reallocates, at least doubling each
    /// axis that has to grow, and moves every element to its index in the
    /// new layout.
    ///
    /// ***Errors*** with `IncompatibleShape` if the rank differs, with
    /// `Overflow` or `AllocationFailure` when the new buffer can not be
    /// obtained. The tensor is unchanged on error.
    ///
    /// ```
    /// use ndtensor::DrMatrix;
    ///
    /// let mut m = DrMatrix::from_elem((2, 2), 1);
    /// m.resize((2, 3)).unwrap();
    /// assert_eq!(m.capacity(), (2, 4));
    /// assert_eq!(m.row(0), [1, 1, 0]);
    /// ```
    pub fn resize<Sh>(&mut self, shape: Sh) -> Result<(), ShapeError>
    where
        Sh: IntoDimension<Dim = D>,
        A: Default,
    {
        let new_dim = shape.into_dimension();
        self.check_same_rank(&new_dim)?;
        size_of_shape_checked(&new_dim)?;
        if !fits_within(&new_dim, &self.cap) {
            let new_cap = grown_capacity(&self.cap, &new_dim);
            self.reallocate(new_cap)?;
        }
        unsafe { self.refill(new_dim, |_| A::default()) };
        Ok(())
    }

    /// Make sure the capacity is at least `capacity` along every axis.
    ///
    /// The capacity never shrinks. A reallocation moves every element to its
    /// index in the new layout; the extents and values do not change.
    ///
    /// ***Errors*** with `IncompatibleShape` if the rank differs, with
    /// `Overflow` or `AllocationFailure` when the new buffer can not be
    /// obtained.
    pub fn reserve<Sh>(&mut self, capacity: Sh) -> Result<(), ShapeError>
    where Sh: IntoDimension<Dim = D>
    {
        let requested = capacity.into_dimension();
        self.check_same_rank(&requested)?;
        let new_cap = max_extents(&self.cap, &requested);
        if new_cap == self.cap {
            return Ok(());
        }
        self.reallocate(new_cap)
    }

    /// Move the buffer into memory obtained from `alloc`.
    ///
    /// Extents, capacity and element values are unchanged; the old memory
    /// goes back to the old allocator.
    ///
    /// ***Errors*** with `AllocationFailure` if `alloc` can not provide the
    /// buffer, leaving the tensor in its old allocator.
    pub fn set_allocator(&mut self, alloc: Al) -> Result<(), ShapeError>
    {
        tracing::trace!(capacity = self.data.capacity(), "moving tensor buffer to a new allocator");
        self.data.rehome(alloc)
    }

    /// Copy the extents and elements of `src` into `self`.
    ///
    /// The tensor resizes to the extents of `src`, reallocating when the
    /// capacity is too small, and clones every element of `src` in.
    ///
    /// ***Errors*** with `IncompatibleShape` if the rank differs, with
    /// `Overflow` or `AllocationFailure` when a larger buffer can not be
    /// obtained. The tensor is unchanged on error.
    ///
    /// ```
    /// use ndtensor::{dr2, DrMatrix};
    ///
    /// let mut m = DrMatrix::<i32>::zeros((2, 2));
    /// let src = dr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// m.assign(&src).unwrap();
    /// assert_eq!(m, src);
    /// ```
    pub fn assign<T>(&mut self, src: &T) -> Result<(), ShapeError>
    where
        T: TensorData<Elem = A, Dim = D> + ?Sized,
        A: Clone,
    {
        let view = src.view();
        let new_dim = view.raw_dim();
        self.check_same_rank(&new_dim)?;
        if new_dim == self.dim {
            return self.view_mut().zip_mut_with_(&view, |a, b| a.clone_from(b));
        }
        size_of_shape_checked(&new_dim)?;
        if !fits_within(&new_dim, &self.cap) {
            let new_cap = max_extents(&self.cap, &new_dim);
            self.reallocate(new_cap)?;
        }
        let empty = D::zeros(new_dim.ndim());
        unsafe {
            self.drop_outside(&empty);
            self.dim = empty;
            self.refill(new_dim, |index| view.uget_dim(index).clone());
        }
        Ok(())
    }

    fn check_same_rank(&self, other: &D) -> Result<(), ShapeError>
    {
        if other.ndim() != self.dim.ndim() {
            tracing::debug!(expected = self.dim.ndim(), got = other.ndim(), "rank mismatch");
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(())
    }

    /// Change the extents to `new_dim`, dropping elements outside of it and
    /// building the new ones with `f`.
    ///
    /// ## Safety
    ///
    /// `new_dim` must fit within the capacity.
    unsafe fn refill<F>(&mut self, new_dim: D, f: F)
    where F: FnMut(&D) -> A
    {
        debug_assert!(fits_within(&new_dim, &self.cap));
        self.drop_outside(&new_dim);
        let keep = min_extents(&self.dim, &new_dim);
        // if `f` panics the tensor holds exactly the kept elements
        self.dim = keep;
        let mut partial = Partial::new(self.data.as_ptr_mut(), &new_dim, &self.strides).skipping(&self.dim);
        partial.fill(f);
        partial.release_ownership();
        self.dim = new_dim;
    }

    /// Drop the live elements whose index is not inside `keep`.
    ///
    /// ## Safety
    ///
    /// The caller must shrink `self.dim` to the kept box afterwards.
    unsafe fn drop_outside(&mut self, keep: &D)
    {
        if !mem::needs_drop::<A>() {
            return;
        }
        let base = self.data.as_ptr_mut();
        let mut index = self.dim.first_index();
        while let Some(ix) = index {
            if !keep.contains(&ix) {
                ptr::drop_in_place(base.offset(D::stride_offset(&ix, &self.strides)));
            }
            index = self.dim.next_for(ix);
        }
    }

    /// Move every live element into a new buffer laid out by `new_cap`.
    fn reallocate(&mut self, new_cap: D) -> Result<(), ShapeError>
    {
        let len = size_of_shape_checked(&new_cap)?;
        let new_strides = self.order.strides_for(&new_cap);
        tracing::debug!(old = ?self.cap, new = ?new_cap, "reallocating dynamic tensor");
        let dim = &self.dim;
        let old_strides = &self.strides;
        unsafe {
            self.data.reallocate_with(len, |old, new| {
                let mut index = dim.first_index();
                while let Some(ix) = index {
                    let src = old.offset(D::stride_offset(&ix, old_strides));
                    let dst = new.offset(D::stride_offset(&ix, &new_strides));
                    ptr::copy_nonoverlapping(src, dst, 1);
                    index = dim.next_for(ix);
                }
            })?;
        }
        self.cap = new_cap;
        self.strides = new_strides;
        Ok(())
    }
}

/// Owning tensors have at least one axis.
pub(crate) fn check_owned_rank<D: Dimension>(dim: &D) -> Result<(), ShapeError>
{
    if dim.ndim() == 0 {
        tracing::debug!("owning tensors need at least one axis");
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    Ok(())
}

/// Capacity after growing `cap` to hold `new`: every axis that must grow at
/// least doubles. Falls back to the exact size when doubling overflows.
fn grown_capacity<D: Dimension>(cap: &D, new: &D) -> D
{
    let mut grown = cap.clone();
    for (g, &n) in grown.slice_mut().iter_mut().zip(new.slice()) {
        if n > *g {
            *g = n.max(g.saturating_mul(2));
        }
    }
    if size_of_shape_checked(&grown).is_err() {
        return max_extents(cap, new);
    }
    grown
}

impl<A, D, Al> Drop for DrTensor<A, D, Al>
where
    D: Dimension,
    Al: Allocator,
{
    fn drop(&mut self)
    {
        let empty = D::zeros(self.dim.ndim());
        unsafe {
            self.drop_outside(&empty);
        }
    }
}

impl<A, D, Al> Clone for DrTensor<A, D, Al>
where
    A: Clone,
    D: Dimension,
    Al: Allocator + Clone,
{
    /// A deep copy with the same extents, capacity, memory order and a clone
    /// of the allocator.
    ///
    /// **Panics** if the allocation fails.
    fn clone(&self) -> Self
    {
        let view = self.view();
        let built = DrTensor::build_in(
            self.dim.clone(),
            self.cap.clone(),
            self.order,
            self.allocator().clone(),
            |index| unsafe { view.uget_dim(index).clone() },
        );
        match built {
            Ok(t) => t,
            Err(e) => panic!("clone: {}", e),
        }
    }

    /// Copy the elements of `other` into `self`, reusing the buffer when the
    /// capacity allows.
    fn clone_from(&mut self, other: &Self)
    {
        if let Err(e) = self.assign(other) {
            panic!("clone_from: {}", e);
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::grown_capacity;
    use crate::{Ix2, IxDyn};

    #[test]
    fn growth_doubles_only_growing_axes()
    {
        assert_eq!(grown_capacity(&Ix2(2, 3), &Ix2(3, 3)), Ix2(4, 3));
        assert_eq!(grown_capacity(&Ix2(2, 3), &Ix2(9, 1)), Ix2(9, 3));
        assert_eq!(grown_capacity(&Ix2(0, 3), &Ix2(1, 3)), Ix2(1, 3));
    }

    #[test]
    fn growth_falls_back_to_exact_on_overflow()
    {
        let huge = usize::MAX / 4;
        assert_eq!(grown_capacity(&IxDyn(&[huge]), &IxDyn(&[huge + 1])), IxDyn(&[huge + 1]));
    }
}
