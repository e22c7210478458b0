// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex;

/// Elements that can be used as direct operands in arithmetic with tensors.
///
/// For example, `f64` is a `ScalarOperand` which means that for a tensor
/// `a`, arithmetic like `&a + 1.0`, `&a * 2.` and `a += 3.` is allowed.
///
/// `ScalarOperand` determines for which scalars `K` the operations `&T @ K`
/// and `T @= K` are defined, as ***right hand side operands***.
///
/// ***Left hand side*** scalar products `K * &T` need one `impl` per
/// concrete scalar type; they exist for the primitive numeric types and
/// `Complex<f32>`, `Complex<f64>`.
///
/// This trait ***does not*** limit which elements can be stored in a
/// tensor: any element type takes part in tensor-tensor arithmetic.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

// Every tensor family is described by one token tree:
//
//     ([lifetimes] [generics] Type, [bounds,])
//
// so that the operator impls below can be generated for each pair of
// families. Lifetimes are listed apart since they must precede the type
// parameters in the impl header.

macro_rules! impl_binary_op {
    (($trt:ident, $mth:ident, $cap:ident, $try_mth:ident, $doc:expr);
     ([$($llt:lifetime),*] [$($lgen:tt)*] $lhs:ty, [$($lb:tt)*]);
     ([$($rlt:lifetime),*] [$($rgen:tt)*] $rhs:ty, [$($rb:tt)*])) => {
/// Perform
#[doc=$doc]
/// between references `self` and `rhs`, and return the result.
///
/// **Panics** if the shapes are incompatible.
impl<'l, 'r, $($llt,)* $($rlt,)* $($lgen)*, $($rgen)*> $trt<&'r $rhs> for &'l $lhs
where
    $($lb)*
    $($rb)*
    $lhs: $cap<$rhs>,
{
    type Output = <$lhs as $cap<$rhs>>::Output;

    fn $mth(self, rhs: &'r $rhs) -> Self::Output
    {
        match <$lhs as $cap<$rhs>>::$try_mth(self, rhs) {
            Ok(out) => out,
            Err(e) => panic!("{}: {}", stringify!($mth), e),
        }
    }
}
    };
}

macro_rules! impl_assign_op {
    (($trt:ident, $mth:ident, $cap:ident, $try_mth:ident, $doc:expr);
     ([$($llt:lifetime),*] [$($lgen:tt)*] $lhs:ty, [$($lb:tt)*]);
     ([$($rlt:lifetime),*] [$($rgen:tt)*] $rhs:ty, [$($rb:tt)*])) => {
/// Perform
#[doc=$doc]
/// in place.
///
/// **Panics** if the shapes are incompatible; `self` is unchanged then.
impl<'r, $($llt,)* $($rlt,)* $($lgen)*, $($rgen)*> $trt<&'r $rhs> for $lhs
where
    $($lb)*
    $($rb)*
    $lhs: $cap<$rhs>,
{
    fn $mth(&mut self, rhs: &'r $rhs)
    {
        if let Err(e) = <$lhs as $cap<$rhs>>::$try_mth(self, rhs) {
            panic!("{}: {}", stringify!($mth), e);
        }
    }
}
    };
}

// Expand `$mac` for one left family and each of the right families.
macro_rules! for_each_rhs {
    ($mac:ident; $op:tt; $lhs:tt; $($rhs:tt)*) => {
        $(
            $mac!($op; $lhs; $rhs);
        )*
    };
}

macro_rules! for_each_family {
    ($mac:ident; $op:tt; $($family:tt)*) => {
        $(
            $mac!($op; $family);
        )*
    };
}

macro_rules! impl_scalar_op {
    (($trt:ident, $mth:ident, $cap:ident, $try_mth:ident, $doc:expr);
     ([$($llt:lifetime),*] [$($lgen:tt)*] $lhs:ty, [$($lb:tt)*])) => {
/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `k`, and return the result.
impl<'l, $($llt,)* $($lgen)*, K> $trt<K> for &'l $lhs
where
    $($lb)*
    K: ScalarOperand,
    $lhs: $cap<K>,
{
    type Output = <$lhs as $cap<K>>::Output;

    fn $mth(self, k: K) -> Self::Output
    {
        match <$lhs as $cap<K>>::$try_mth(self, &k) {
            Ok(out) => out,
            Err(e) => panic!("{}: {}", stringify!($mth), e),
        }
    }
}
    };
}

macro_rules! impl_scalar_assign_ops {
    (([$($llt:lifetime),*] [$($lgen:tt)*] $lhs:ty, [$($lb:tt)*])) => {
/// Perform `self += k` elementwise (in place).
impl<$($llt,)* $($lgen)*, K> AddAssign<K> for $lhs
where
    $($lb)*
    K: ScalarOperand,
    A: AddAssign<K>,
{
    fn add_assign(&mut self, k: K)
    {
        TensorDataMut::view_mut(self).map_inplace_(|elt| *elt += k.clone());
    }
}

/// Perform `self -= k` elementwise (in place).
impl<$($llt,)* $($lgen)*, K> SubAssign<K> for $lhs
where
    $($lb)*
    K: ScalarOperand,
    A: SubAssign<K>,
{
    fn sub_assign(&mut self, k: K)
    {
        TensorDataMut::view_mut(self).map_inplace_(|elt| *elt -= k.clone());
    }
}

/// Perform `self *= k` elementwise (in place).
impl<$($llt,)* $($lgen)*, K> MulAssign<K> for $lhs
where
    $($lb)*
    K: ScalarOperand,
    $lhs: ScalarProductAssign<K>,
{
    fn mul_assign(&mut self, k: K)
    {
        <$lhs as ScalarProductAssign<K>>::mul_scalar_assign(self, &k);
    }
}

/// Perform `self /= k` elementwise (in place).
impl<$($llt,)* $($lgen)*, K> DivAssign<K> for $lhs
where
    $($lb)*
    K: ScalarOperand,
    $lhs: ScalarDivisionAssign<K>,
{
    fn div_assign(&mut self, k: K)
    {
        <$lhs as ScalarDivisionAssign<K>>::div_scalar_assign(self, &k);
    }
}
    };
}

macro_rules! impl_neg {
    (([$($llt:lifetime),*] [$($lgen:tt)*] $lhs:ty, [$($lb:tt)*])) => {
/// Perform an elementwise negation of the reference `self` and return the
/// result.
impl<'l, $($llt,)* $($lgen)*> Neg for &'l $lhs
where
    $($lb)*
    $lhs: Negation,
{
    type Output = <$lhs as Negation>::Output;

    fn neg(self) -> Self::Output
    {
        match <$lhs as Negation>::try_neg(self) {
            Ok(out) => out,
            Err(e) => panic!("neg: {}", e),
        }
    }
}
    };
}

macro_rules! impl_scalar_lhs_mul {
    ($scalar:ty;
     ([$($rlt:lifetime),*] [$($rgen:tt)*] $rhs:ty, [$($rb:tt)*])) => {
// Perform elementwise multiplication between the scalar `self` and the
// tensor `rhs`, and return the result.
impl<'r, $($rlt,)* $($rgen)*> Mul<&'r $rhs> for $scalar
where
    $($rb)*
    $rhs: ScalarProduct<$scalar>,
{
    type Output = <$rhs as ScalarProduct<$scalar>>::Output;

    fn mul(self, rhs: &'r $rhs) -> Self::Output
    {
        rhs * self
    }
}
    };
}

macro_rules! impl_scalar_lhs_muls {
    ($($scalar:ty),*) => {
        $(
            for_each_family!(impl_scalar_lhs_mul; $scalar;
                ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,])
                (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
        )*
    };
}

mod arithmetic_ops
{
    use super::*;
    use crate::dimension::FixedShape;
    use crate::imp_prelude::*;
    use crate::linalg::{
        Addition, Negation, Product, ScalarAddition, ScalarDivision, ScalarProduct, ScalarSubtraction, Subtraction,
    };

    use std::ops::*;

    macro_rules! impl_family_binary_ops {
        ($op:tt) => {
            for_each_rhs!(impl_binary_op; $op;
                ([] [A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,]);
                ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,])
                (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
            for_each_rhs!(impl_binary_op; $op;
                ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
                ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
            for_each_rhs!(impl_binary_op; $op;
                (['a] [A, D] TensorView<'a, A, D>, [D: Dimension,]);
                ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,])
                (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
            for_each_rhs!(impl_binary_op; $op;
                (['a] [A, D] TensorViewMut<'a, A, D>, [D: Dimension,]);
                ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,])
                (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
        };
    }

    impl_family_binary_ops!((Add, add, Addition, try_add, "elementwise addition"));
    impl_family_binary_ops!((Sub, sub, Subtraction, try_sub, "elementwise subtraction"));
    impl_family_binary_ops!((Mul, mul, Product, try_mul, "the inner, matrix-vector, vector-matrix or matrix product"));

    // Fixed operands of the same fixed extents.
    impl_binary_op!((Add, add, Addition, try_add, "elementwise addition");
        ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
        ([] [B] FsTensor<B, S>, [S: FixedShape<B>,]));
    impl_binary_op!((Sub, sub, Subtraction, try_sub, "elementwise subtraction");
        ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
        ([] [B] FsTensor<B, S>, [S: FixedShape<B>,]));

    macro_rules! impl_family_unary_ops {
        ($($lhs:tt)*) => {
            $(
                impl_scalar_op!((Mul, mul, ScalarProduct, try_mul_scalar, "multiplication"); $lhs);
                impl_scalar_op!((Div, div, ScalarDivision, try_div_scalar, "division"); $lhs);
                impl_scalar_op!((Add, add, ScalarAddition, try_add_scalar, "addition"); $lhs);
                impl_scalar_op!((Sub, sub, ScalarSubtraction, try_sub_scalar, "subtraction"); $lhs);
                impl_neg!($lhs);
            )*
        };
    }

    impl_family_unary_ops!(
        ([] [A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,])
        ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,])
        (['a] [A, D] TensorView<'a, A, D>, [D: Dimension,])
        (['a] [A, D] TensorViewMut<'a, A, D>, [D: Dimension,])
    );

    impl_scalar_lhs_muls!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64);
    impl_scalar_lhs_muls!(Complex<f32>, Complex<f64>);
}

mod fixed_products
{
    use num_traits::Zero;
    use std::ops::{Mul, MulAssign};

    use crate::linalg::{as_column, as_row, dot_at};
    use crate::{Fixed1, Fixed2, FsMatrix, FsTensor, FsVector};

    /// Multiply an `M × K` by a `K × N` fixed matrix; the inner dimensions
    /// agree by type.
    ///
    /// ```
    /// use ndtensor::FsMatrix;
    ///
    /// let a = FsMatrix::<i32, 1, 2>::from([[1, 2]]);
    /// let b = FsMatrix::<i32, 2, 3>::from([[1, 0, 1], [0, 1, 1]]);
    /// let c: FsMatrix<i32, 1, 3> = &a * &b;
    /// assert_eq!(c, [[1, 2, 3]]);
    /// ```
    impl<'l, 'r, A, B, const M: usize, const K: usize, const N: usize> Mul<&'r FsTensor<B, Fixed2<K, N>>>
        for &'l FsTensor<A, Fixed2<M, K>>
    where
        A: Clone + Mul<B>,
        B: Clone,
        <A as Mul<B>>::Output: Zero,
    {
        type Output = FsMatrix<<A as Mul<B>>::Output, M, N>;

        fn mul(self, rhs: &'r FsTensor<B, Fixed2<K, N>>) -> Self::Output
        {
            let (l, r) = (self.view(), rhs.view());
            FsTensor::from_shape_fn(|(i, j)| dot_at(&l, &r, i, j))
        }
    }

    /// Multiply an `M × K` fixed matrix by a fixed vector of length `K`.
    impl<'l, 'r, A, B, const M: usize, const K: usize> Mul<&'r FsTensor<B, Fixed1<K>>> for &'l FsTensor<A, Fixed2<M, K>>
    where
        A: Clone + Mul<B>,
        B: Clone,
        <A as Mul<B>>::Output: Zero,
    {
        type Output = FsVector<<A as Mul<B>>::Output, M>;

        fn mul(self, rhs: &'r FsTensor<B, Fixed1<K>>) -> Self::Output
        {
            let (l, r) = (self.view(), rhs.view());
            let r = as_column(&r);
            FsTensor::from_shape_fn(|i| dot_at(&l, &r, i, 0))
        }
    }

    /// Multiply a fixed vector of length `M` by an `M × N` fixed matrix.
    impl<'l, 'r, A, B, const M: usize, const N: usize> Mul<&'r FsTensor<B, Fixed2<M, N>>> for &'l FsTensor<A, Fixed1<M>>
    where
        A: Clone + Mul<B>,
        B: Clone,
        <A as Mul<B>>::Output: Zero,
    {
        type Output = FsVector<<A as Mul<B>>::Output, N>;

        fn mul(self, rhs: &'r FsTensor<B, Fixed2<M, N>>) -> Self::Output
        {
            let (l, r) = (self.view(), rhs.view());
            let l = as_row(&l);
            FsTensor::from_shape_fn(|j| dot_at(&l, &r, 0, j))
        }
    }

    /// Inner product of two fixed vectors of length `N`.
    impl<'l, 'r, A, B, const N: usize> Mul<&'r FsTensor<B, Fixed1<N>>> for &'l FsTensor<A, Fixed1<N>>
    where
        A: Clone + Mul<B>,
        B: Clone,
        <A as Mul<B>>::Output: Zero,
    {
        type Output = <A as Mul<B>>::Output;

        fn mul(self, rhs: &'r FsTensor<B, Fixed1<N>>) -> Self::Output
        {
            let (l, r) = (self.view(), rhs.view());
            dot_at(&as_row(&l), &as_column(&r), 0, 0)
        }
    }

    /// Perform `self = self · rhs` for an `M × K` fixed matrix and a square
    /// `K × K` fixed matrix.
    impl<'r, A, const M: usize, const K: usize> MulAssign<&'r FsTensor<A, Fixed2<K, K>>> for FsTensor<A, Fixed2<M, K>>
    where A: Clone + Mul<Output = A> + Zero
    {
        fn mul_assign(&mut self, rhs: &'r FsTensor<A, Fixed2<K, K>>)
        {
            *self = &*self * rhs;
        }
    }

    /// Perform `self = self · rhs` for a fixed vector of length `K` and a
    /// square `K × K` fixed matrix.
    impl<'r, A, const K: usize> MulAssign<&'r FsTensor<A, Fixed2<K, K>>> for FsTensor<A, Fixed1<K>>
    where A: Clone + Mul<Output = A> + Zero
    {
        fn mul_assign(&mut self, rhs: &'r FsTensor<A, Fixed2<K, K>>)
        {
            *self = &*self * rhs;
        }
    }
}

mod assign_ops
{
    use super::*;
    use crate::dimension::FixedShape;
    use crate::imp_prelude::*;
    use crate::linalg::{AdditionAssign, ProductAssign, ScalarDivisionAssign, ScalarProductAssign, SubtractionAssign};

    use std::ops::*;

    macro_rules! impl_family_assign_ops {
        ($op:tt; $($lhs:tt)*) => {
            $(
                for_each_rhs!(impl_assign_op; $op; $lhs;
                    ([] [B, E, Bl] DrTensor<B, E, Bl>, [E: Dimension, Bl: Allocator,])
                    (['b] [B, E] TensorView<'b, B, E>, [E: Dimension,])
                    (['b] [B, E] TensorViewMut<'b, B, E>, [E: Dimension,]));
            )*
        };
    }

    macro_rules! impl_all_assign_ops {
        ($op:tt) => {
            impl_family_assign_ops!($op;
                ([] [A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,])
                ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,])
                (['a] [A, D] TensorViewMut<'a, A, D>, [D: Dimension,]));
            impl_assign_op!($op;
                ([] [A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,]);
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,]));
            impl_assign_op!($op;
                (['a] [A, D] TensorViewMut<'a, A, D>, [D: Dimension,]);
                ([] [B, T] FsTensor<B, T>, [T: FixedShape<B>,]));
        };
    }

    impl_all_assign_ops!((AddAssign, add_assign, AdditionAssign, try_add_assign, "`self += rhs` as elementwise addition"));
    impl_all_assign_ops!((SubAssign, sub_assign, SubtractionAssign, try_sub_assign, "`self -= rhs` as elementwise subtraction"));
    impl_all_assign_ops!((MulAssign, mul_assign, ProductAssign, try_mul_assign, "`self = self · rhs` as a product"));

    // Fixed operands of the same fixed extents.
    impl_assign_op!((AddAssign, add_assign, AdditionAssign, try_add_assign, "`self += rhs` as elementwise addition");
        ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
        ([] [B] FsTensor<B, S>, [S: FixedShape<B>,]));
    impl_assign_op!((SubAssign, sub_assign, SubtractionAssign, try_sub_assign, "`self -= rhs` as elementwise subtraction");
        ([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]);
        ([] [B] FsTensor<B, S>, [S: FixedShape<B>,]));

    impl_scalar_assign_ops!(([] [A, D, Al] DrTensor<A, D, Al>, [D: Dimension, Al: Allocator,]));
    impl_scalar_assign_ops!(([] [A, S] FsTensor<A, S>, [S: FixedShape<A>,]));
    impl_scalar_assign_ops!((['a] [A, D] TensorViewMut<'a, A, D>, [D: Dimension,]));
}
