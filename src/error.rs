// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::Dimension;

/// An error related to tensor extents, bounds, capacity or allocation.
#[derive(Clone)]
pub struct ShapeError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        ShapeError { repr: error }
    }
}

/// Error code for a `ShapeError`.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// operand or assignment extents are incompatible
    IncompatibleShape = 1,
    /// slice bound or index outside the valid range
    OutOfBounds,
    /// explicit capacity smaller than the requested size
    CapacityViolation,
    /// the allocator failed to provide memory
    AllocationFailure,
    /// element count or byte size overflows
    Overflow,
    /// strides alias tensor elements
    Unsupported,
}

impl PartialEq for ShapeError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Eq for ShapeError {}

impl Error for ShapeError {}

impl fmt::Display for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::OutOfBounds => "out of bounds indexing",
            ErrorKind::CapacityViolation => "capacity is smaller than the requested size",
            ErrorKind::AllocationFailure => "memory allocation failed",
            ErrorKind::Overflow => "arithmetic overflow",
            ErrorKind::Unsupported => "stride leads to aliasing tensor elements",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}

impl fmt::Debug for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError
{
    ShapeError::from_kind(k)
}

/// Shape mismatch between two extents.
pub fn incompatible_shapes<D, E>(a: &D, b: &E) -> ShapeError
where
    D: Dimension,
    E: Dimension,
{
    tracing::debug!(lhs = ?a, rhs = ?b, "incompatible shapes");
    from_kind(ErrorKind::IncompatibleShape)
}
