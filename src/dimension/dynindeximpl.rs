// Copyright 2017 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::{Dim, Ix, IxDyn};

const CAP: usize = 4;

/// Extents of up to `CAP` axes live inline.
#[derive(Debug)]
enum IxDynRepr
{
    Inline(u32, [Ix; CAP]),
    Alloc(Box<[Ix]>),
}

impl Deref for IxDynRepr
{
    type Target = [Ix];
    fn deref(&self) -> &[Ix]
    {
        match *self {
            IxDynRepr::Inline(len, ref ar) => &ar[..len as usize],
            IxDynRepr::Alloc(ref ar) => ar,
        }
    }
}

impl DerefMut for IxDynRepr
{
    fn deref_mut(&mut self) -> &mut [Ix]
    {
        match *self {
            IxDynRepr::Inline(len, ref mut ar) => &mut ar[..len as usize],
            IxDynRepr::Alloc(ref mut ar) => ar,
        }
    }
}

impl IxDynRepr
{
    fn copy_from(x: &[Ix]) -> Self
    {
        if x.len() <= CAP {
            let mut arr = [0; CAP];
            arr[..x.len()].copy_from_slice(x);
            IxDynRepr::Inline(x.len() as u32, arr)
        } else {
            IxDynRepr::Alloc(x.to_vec().into_boxed_slice())
        }
    }
}

impl Clone for IxDynRepr
{
    fn clone(&self) -> Self
    {
        match *self {
            IxDynRepr::Inline(len, arr) => IxDynRepr::Inline(len, arr),
            IxDynRepr::Alloc(ref ar) => IxDynRepr::Alloc(ar.clone()),
        }
    }
}

impl PartialEq for IxDynRepr
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self[..] == rhs[..]
    }
}

impl Eq for IxDynRepr {}

impl Hash for IxDynRepr
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        Hash::hash(&self[..], state)
    }
}

/// Storage of the dynamic rank extents [`IxDyn`].
///
/// Extents of rank four or less need no heap allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IxDynImpl(IxDynRepr);

/// The default is a single axis of length zero, the empty vector.
impl Default for IxDynImpl
{
    fn default() -> Self
    {
        IxDynImpl(IxDynRepr::copy_from(&[0]))
    }
}

impl<'a> From<&'a [Ix]> for IxDynImpl
{
    #[inline]
    fn from(ix: &'a [Ix]) -> Self
    {
        IxDynImpl(IxDynRepr::copy_from(ix))
    }
}

impl From<Vec<Ix>> for IxDynImpl
{
    #[inline]
    fn from(ix: Vec<Ix>) -> Self
    {
        if ix.len() <= CAP {
            IxDynImpl(IxDynRepr::copy_from(&ix))
        } else {
            IxDynImpl(IxDynRepr::Alloc(ix.into_boxed_slice()))
        }
    }
}

impl Deref for IxDynImpl
{
    type Target = [Ix];
    #[inline]
    fn deref(&self) -> &[Ix]
    {
        &self.0
    }
}

impl DerefMut for IxDynImpl
{
    #[inline]
    fn deref_mut(&mut self) -> &mut [Ix]
    {
        &mut self.0
    }
}

impl IxDyn
{
    /// Create dynamic extents with `n` axes, all zero.
    #[inline]
    pub fn zeros(n: usize) -> IxDyn
    {
        if n <= CAP {
            Dim::new(IxDynImpl(IxDynRepr::Inline(n as u32, [0; CAP])))
        } else {
            Dim::new(IxDynImpl::from(vec![0; n]))
        }
    }
}
