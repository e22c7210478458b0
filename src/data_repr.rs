use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use allocator_api2::alloc::{Allocator, Layout};

use crate::error::{from_kind, ErrorKind, ShapeError};

/// Raw element buffer of a dynamic container.
///
/// *Don’t use this type directly, use [`DrTensor`](crate::DrTensor).*
///
/// Like the buffer of a `Vec`, but it never tracks which slots are
/// initialized: the owning container knows which slots hold live elements
/// (those inside its logical extents) and drops them itself. Dropping an
/// `OwnedRepr` only returns the memory to the allocator.
pub struct OwnedRepr<A, Al: Allocator>
{
    ptr: NonNull<A>,
    capacity: usize,
    alloc: Al,
    marker: PhantomData<A>,
}

fn allocate<A, Al: Allocator>(alloc: &Al, capacity: usize) -> Result<NonNull<A>, ShapeError>
{
    let layout = Layout::array::<A>(capacity).map_err(|_| from_kind(ErrorKind::Overflow))?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    match alloc.allocate(layout) {
        Ok(block) => Ok(block.cast::<A>()),
        Err(_) => {
            tracing::debug!(capacity, bytes = layout.size(), "allocator refused request");
            Err(from_kind(ErrorKind::AllocationFailure))
        }
    }
}

/// ## Safety
///
/// `ptr` must come from `allocate` with the same allocator and capacity.
unsafe fn deallocate<A, Al: Allocator>(alloc: &Al, ptr: NonNull<A>, capacity: usize)
{
    if let Ok(layout) = Layout::array::<A>(capacity) {
        if layout.size() != 0 {
            alloc.deallocate(ptr.cast::<u8>(), layout);
        }
    }
}

impl<A, Al: Allocator> OwnedRepr<A, Al>
{
    /// An empty buffer that owns no memory.
    pub(crate) fn new_in(alloc: Al) -> Self
    {
        OwnedRepr {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
            marker: PhantomData,
        }
    }

    /// A buffer of `capacity` uninitialized slots.
    pub(crate) fn with_capacity_in(capacity: usize, alloc: Al) -> Result<Self, ShapeError>
    {
        let ptr = allocate::<A, Al>(&alloc, capacity)?;
        Ok(OwnedRepr {
            ptr,
            capacity,
            alloc,
            marker: PhantomData,
        })
    }

    /// Number of slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize
    {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const A
    {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_ptr_mut(&self) -> *mut A
    {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_nonnull(&self) -> NonNull<A>
    {
        self.ptr
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &Al
    {
        &self.alloc
    }

    /// Swap in a fresh buffer of `capacity` slots from the same allocator.
    ///
    /// `relocate(old, new)` is called once both buffers exist and must move
    /// every live element from the old buffer into the new one; the old
    /// buffer is released afterwards. On allocation failure nothing changes.
    ///
    /// ## Safety
    ///
    /// `relocate` must leave no live element behind in the old buffer.
    pub(crate) unsafe fn reallocate_with<F>(&mut self, capacity: usize, relocate: F) -> Result<(), ShapeError>
    where F: FnOnce(*mut A, *mut A)
    {
        let new_ptr = allocate::<A, Al>(&self.alloc, capacity)?;
        relocate(self.ptr.as_ptr(), new_ptr.as_ptr());
        deallocate(&self.alloc, self.ptr, self.capacity);
        self.ptr = new_ptr;
        self.capacity = capacity;
        Ok(())
    }

    /// Move the whole buffer under `alloc`, slot for slot.
    ///
    /// Slot contents are copied bitwise, initialized or not, so offsets of
    /// live elements are preserved. The old memory is returned to the old
    /// allocator.
    pub(crate) fn rehome(&mut self, alloc: Al) -> Result<(), ShapeError>
    {
        let fresh = Self::with_capacity_in(self.capacity, alloc)?;
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.ptr.as_ptr(), self.capacity);
        }
        // The old value only frees memory on drop.
        drop(mem::replace(self, fresh));
        Ok(())
    }
}

impl<A, Al: Allocator> Drop for OwnedRepr<A, Al>
{
    fn drop(&mut self)
    {
        unsafe {
            deallocate(&self.alloc, self.ptr, self.capacity);
        }
    }
}

unsafe impl<A, Al> Sync for OwnedRepr<A, Al>
where
    A: Sync,
    Al: Allocator + Sync,
{
}
unsafe impl<A, Al> Send for OwnedRepr<A, Al>
where
    A: Send,
    Al: Allocator + Send,
{
}
