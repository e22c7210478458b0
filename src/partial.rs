// Copyright 2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ptr;

use crate::Dimension;

/// Partial is a partially written strided region of a buffer.
///
/// The region is the index space `dim` laid out with `strides`, minus an
/// optional box `skip` of indices that are not ours (they hold elements that
/// were live before, e.g. when a resize grows a container in place). Slots
/// are written in row major index order; the first `len` of them are owned
/// by the Partial and dropped on drop, which rolls back a construction that
/// was interrupted by a panic.
#[must_use]
pub(crate) struct Partial<'a, A, D: Dimension>
{
    ptr: *mut A,
    dim: &'a D,
    strides: &'a D,
    skip: Option<&'a D>,
    /// Number of slots written so far
    len: usize,
}

impl<'a, A, D: Dimension> Partial<'a, A, D>
{
    /// Create an empty partial for this data pointer
    ///
    /// ## Safety
    ///
    /// Every slot addressed by `dim` and `strides` from `ptr` must be
    /// writable and not hold a live element, except those inside `skip`.
    pub(crate) unsafe fn new(ptr: *mut A, dim: &'a D, strides: &'a D) -> Self
    {
        Partial {
            ptr,
            dim,
            strides,
            skip: None,
            len: 0,
        }
    }

    /// Leave the indices inside the box `inner` alone.
    pub(crate) fn skipping(mut self, inner: &'a D) -> Self
    {
        self.skip = Some(inner);
        self
    }

    /// Write `f(index)` into every slot of the region, in order.
    pub(crate) fn fill<F>(&mut self, mut f: F)
    where F: FnMut(&D) -> A
    {
        let (ptr, strides) = (self.ptr, self.strides);
        let len = &mut self.len;
        visit_region(self.dim, self.skip, |index| {
            let elt = f(index);
            unsafe {
                ptr.offset(D::stride_offset(index, strides)).write(elt);
            }
            *len += 1;
            true
        });
    }

    /// Release Partial's ownership of the written elements, and return the
    /// current length
    pub(crate) fn release_ownership(mut self) -> usize
    {
        let ret = self.len;
        self.len = 0;
        ret
    }
}

/// Call `f` on each index of `dim` outside `skip`, in row major order,
/// until it returns false.
fn visit_region<D, F>(dim: &D, skip: Option<&D>, mut f: F)
where
    D: Dimension,
    F: FnMut(&D) -> bool,
{
    let mut index = dim.first_index();
    while let Some(ix) = index {
        let owned = match skip {
            Some(inner) => !inner.contains(&ix),
            None => true,
        };
        if owned && !f(&ix) {
            return;
        }
        index = dim.next_for(ix);
    }
}

impl<'a, A, D: Dimension> Drop for Partial<'a, A, D>
{
    fn drop(&mut self)
    {
        if self.len == 0 || !std::mem::needs_drop::<A>() {
            return;
        }
        let (ptr, strides) = (self.ptr, self.strides);
        let mut remaining = self.len;
        visit_region(self.dim, self.skip, |index| {
            unsafe {
                ptr::drop_in_place(ptr.offset(D::stride_offset(index, strides)));
            }
            remaining -= 1;
            remaining != 0
        });
    }
}

#[cfg(test)]
mod tests
{
    use std::cell::Cell;
    use std::mem::MaybeUninit;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::Partial;
    use crate::{Dimension, Ix2};

    struct Counted<'a>(&'a Cell<usize>);

    impl Drop for Counted<'_>
    {
        fn drop(&mut self)
        {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn partial_drops_written_slots_on_panic()
    {
        let drops = Cell::new(0);
        let mut buf: Vec<MaybeUninit<Counted<'_>>> = (0..12).map(|_| MaybeUninit::uninit()).collect();
        // 2 x 3 region inside a 3 x 4 capacity layout
        let dim = Ix2(2, 3);
        let strides = Ix2(3, 4).default_strides();
        let ptr = buf.as_mut_ptr() as *mut Counted<'_>;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut partial = unsafe { Partial::new(ptr, &dim, &strides) };
            let mut n = 0;
            partial.fill(|_| {
                n += 1;
                if n == 5 {
                    panic!("generator failure");
                }
                Counted(&drops)
            });
            partial.release_ownership();
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn partial_skips_inner_box()
    {
        let mut buf = vec![0; 9];
        let dim = Ix2(3, 3);
        let strides = dim.default_strides();
        let inner = Ix2(2, 2);
        let mut partial = unsafe { Partial::new(buf.as_mut_ptr(), &dim, &strides) }.skipping(&inner);
        partial.fill(|_| 7);
        assert_eq!(partial.release_ownership(), 5);
        assert_eq!(buf, vec![0, 0, 7, 0, 0, 7, 7, 7, 7]);
    }
}
