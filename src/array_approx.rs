//! `approx` comparisons between containers and views.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::dimension::FixedShape;
use crate::imp_prelude::*;

/// Return `true` if the extents match and `cmp` holds for every pair of
/// elements at the same index.
fn all_close<L, R, F>(lhs: &L, rhs: &R, mut cmp: F) -> bool
where
    L: TensorData + ?Sized,
    R: TensorData<Dim = L::Dim> + ?Sized,
    F: FnMut(&L::Elem, &R::Elem) -> bool,
{
    if lhs.shape() != rhs.shape() {
        return false;
    }
    let (l, r) = (lhs.view(), rhs.view());
    l.iter().zip(r.iter()).all(|(a, b)| cmp(a, b))
}

macro_rules! impl_approx_traits {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty, [$($bounds:tt)*]) => {
/// **Requires crate feature `"approx"`**
impl<$($gen)*> AbsDiffEq<$rhs> for $lhs
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
    $($bounds)*
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon
    {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &$rhs, epsilon: A::Epsilon) -> bool
    {
        all_close(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<$($gen)*> RelativeEq<$rhs> for $lhs
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
    $($bounds)*
{
    fn default_max_relative() -> A::Epsilon
    {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &$rhs, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    {
        all_close(self, other, |a, b| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<$($gen)*> UlpsEq<$rhs> for $lhs
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
    $($bounds)*
{
    fn default_max_ulps() -> u32
    {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &$rhs, epsilon: A::Epsilon, max_ulps: u32) -> bool
    {
        all_close(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}
    };
}

impl_approx_traits!([A, B, D, Al, Bl] DrTensor<A, D, Al>, DrTensor<B, D, Bl>,
                    [D: Dimension, Al: Allocator, Bl: Allocator]);
impl_approx_traits!([A, B, D, Al, S] DrTensor<A, D, Al>, FsTensor<B, S>,
                    [D: Dimension, Al: Allocator, S: FixedShape<B, Dim = D>]);
impl_approx_traits!(['b, A, B, D, Al] DrTensor<A, D, Al>, TensorView<'b, B, D>, [D: Dimension, Al: Allocator]);

impl_approx_traits!([A, B, S] FsTensor<A, S>, FsTensor<B, S>, [S: FixedShape<A> + FixedShape<B>]);
impl_approx_traits!([A, B, D, S, Bl] FsTensor<A, S>, DrTensor<B, D, Bl>,
                    [D: Dimension, Bl: Allocator, S: FixedShape<A, Dim = D>]);
impl_approx_traits!(['b, A, B, D, S] FsTensor<A, S>, TensorView<'b, B, D>, [D: Dimension, S: FixedShape<A, Dim = D>]);

impl_approx_traits!(['a, A, B, D, Bl] TensorView<'a, A, D>, DrTensor<B, D, Bl>, [D: Dimension, Bl: Allocator]);
impl_approx_traits!(['a, A, B, D, S] TensorView<'a, A, D>, FsTensor<B, S>, [D: Dimension, S: FixedShape<B, Dim = D>]);
impl_approx_traits!(['a, 'b, A, B, D] TensorView<'a, A, D>, TensorView<'b, B, D>, [D: Dimension]);

#[cfg(test)]
mod tests
{
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    use crate::{dr1, dr2, FsMatrix};

    #[test]
    fn abs_diff_eq()
    {
        let a = dr2(&[[0., 2.], [-0.000010001, 100000000.]]);
        let mut b = dr2(&[[0., 1.], [-0.000010002, 100000001.]]);
        assert_abs_diff_ne!(a, b);
        b[(0, 1)] = 2.;
        assert_abs_diff_eq!(a, b, epsilon = 1.);
    }

    #[test]
    fn mixed_families()
    {
        let f = FsMatrix::<f64, 1, 2>::from([[1., 2.]]);
        let d = dr2(&[[1. + 1e-12, 2.]]);
        assert_relative_eq!(d, f, max_relative = 1e-10);
        assert_ulps_eq!(f, d, max_ulps = 1 << 16);
        assert_abs_diff_ne!(dr1(&[1., 2.]).view(), dr1(&[1., 2., 3.]).view());
    }
}
