//! Type aliases for common extents and tensor shapes.

use crate::dimension::Dim;
use crate::{DrTensor, Fixed1, Fixed2, Fixed3, FsTensor, IxDynImpl, TensorView, TensorViewMut};

/// Array index type.
pub type Ix = usize;

/// Create a zero-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix0() -> Ix0
{
    Dim::new([])
}
/// Create a one-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix1(i0: Ix) -> Ix1
{
    Dim::new([i0])
}
/// Create a two-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix2(i0: Ix, i1: Ix) -> Ix2
{
    Dim::new([i0, i1])
}
/// Create a three-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix3(i0: Ix, i1: Ix, i2: Ix) -> Ix3
{
    Dim::new([i0, i1, i2])
}
/// Create a four-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix4(i0: Ix, i1: Ix, i2: Ix, i3: Ix) -> Ix4
{
    Dim::new([i0, i1, i2, i3])
}
/// Create a five-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix5(i0: Ix, i1: Ix, i2: Ix, i3: Ix, i4: Ix) -> Ix5
{
    Dim::new([i0, i1, i2, i3, i4])
}
/// Create a six-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn Ix6(i0: Ix, i1: Ix, i2: Ix, i3: Ix, i4: Ix, i5: Ix) -> Ix6
{
    Dim::new([i0, i1, i2, i3, i4, i5])
}

/// Create a dynamic-dimensional index
#[allow(non_snake_case)]
#[inline(always)]
pub fn IxDyn(ix: &[Ix]) -> IxDyn
{
    Dim::new(IxDynImpl::from(ix))
}

/// zero-dimensional
pub type Ix0 = Dim<[Ix; 0]>;
/// one-dimensional
pub type Ix1 = Dim<[Ix; 1]>;
/// two-dimensional
pub type Ix2 = Dim<[Ix; 2]>;
/// three-dimensional
pub type Ix3 = Dim<[Ix; 3]>;
/// four-dimensional
pub type Ix4 = Dim<[Ix; 4]>;
/// five-dimensional
pub type Ix5 = Dim<[Ix; 5]>;
/// six-dimensional
pub type Ix6 = Dim<[Ix; 6]>;
/// dynamic-dimensional
///
/// The rank is only known at runtime.
pub type IxDyn = Dim<IxDynImpl>;

/// dynamic vector
pub type DrVector<A, Al = allocator_api2::alloc::Global> = DrTensor<A, Ix1, Al>;
/// dynamic matrix
pub type DrMatrix<A, Al = allocator_api2::alloc::Global> = DrTensor<A, Ix2, Al>;
/// dynamic rank tensor
pub type DrTensorD<A, Al = allocator_api2::alloc::Global> = DrTensor<A, IxDyn, Al>;

/// fixed-size vector of length `N`
pub type FsVector<A, const N: usize> = FsTensor<A, Fixed1<N>>;
/// fixed-size `R × C` matrix
pub type FsMatrix<A, const R: usize, const C: usize> = FsTensor<A, Fixed2<R, C>>;
/// fixed-size `I × J × K` tensor
pub type FsTensor3<A, const I: usize, const J: usize, const K: usize> = FsTensor<A, Fixed3<I, J, K>>;

/// zero-dimensional tensor view (a single element)
pub type TensorView0<'a, A> = TensorView<'a, A, Ix0>;
/// vector view
pub type VectorView<'a, A> = TensorView<'a, A, Ix1>;
/// matrix view
pub type MatrixView<'a, A> = TensorView<'a, A, Ix2>;
/// three-dimensional tensor view
pub type TensorView3<'a, A> = TensorView<'a, A, Ix3>;
/// dynamic rank tensor view
pub type TensorViewD<'a, A> = TensorView<'a, A, IxDyn>;

/// zero-dimensional read-write tensor view
pub type TensorViewMut0<'a, A> = TensorViewMut<'a, A, Ix0>;
/// read-write vector view
pub type VectorViewMut<'a, A> = TensorViewMut<'a, A, Ix1>;
/// read-write matrix view
pub type MatrixViewMut<'a, A> = TensorViewMut<'a, A, Ix2>;
/// three-dimensional read-write tensor view
pub type TensorViewMut3<'a, A> = TensorViewMut<'a, A, Ix3>;
/// dynamic rank read-write tensor view
pub type TensorViewMutD<'a, A> = TensorViewMut<'a, A, IxDyn>;
