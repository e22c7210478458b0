use approx::assert_abs_diff_eq;
use itertools::iproduct;
use ndtensor::prelude::*;
use ndtensor::ErrorKind;
use num_complex::Complex;

fn reference_mat_mul(a: &DrMatrix<f64>, b: &DrMatrix<f64>) -> DrMatrix<f64>
{
    let ((m, k), (_, n)) = (a.dim(), b.dim());
    let mut c = DrMatrix::zeros((m, n));
    for (i, j) in iproduct!(0..m, 0..n) {
        for x in 0..k {
            c[(i, j)] += a[(i, x)] * b[(x, j)];
        }
    }
    c
}

fn range_mat(m: usize, n: usize) -> DrMatrix<f64>
{
    DrMatrix::from_shape_fn((m, n), |(i, j)| (i * n + j) as f64 * 0.5 - 3.)
}

#[test]
fn mat_mul_shapes()
{
    let a = dr2(&[[1., 2.], [3., 4.], [5., 6.]]);
    let b = dr2(&[[1., 0., 2., 0.], [0., 1., 0., 2.]]);
    let c = &a * &b;
    assert_eq!(c.dim(), (3, 4));
    assert_eq!(c, dr2(&[[1., 2., 2., 4.], [3., 4., 6., 8.], [5., 6., 10., 12.]]));

    let err = b.try_mul(&a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn mat_vec_and_vec_mat()
{
    let m = dr2(&[[1, 2, 3], [4, 5, 6]]);
    let x = dr1(&[1, 0, -1]);
    let y = dr1(&[2, 1]);
    assert_eq!(&m * &x, dr1(&[-2, -2]));
    assert_eq!(&y * &m, dr1(&[6, 9, 12]));
    assert!(x.try_mul(&m).is_err());
    assert!(m.try_mul(&y).is_err());
}

#[test]
fn inner_product_is_a_scalar()
{
    let a = dr1(&[1, 2, 3]);
    let b = FsVector::<i32, 3>::from([4, 5, 6]);
    let dot: i32 = &a * &b;
    assert_eq!(dot, 32);
    assert_eq!(&b * &b, 77);
    assert_eq!(a.try_mul(&dr1(&[1, 2])).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn gemm_matches_reference()
{
    for &(m, k, n) in &[(1, 1, 1), (4, 3, 5), (17, 9, 13), (32, 32, 32)] {
        let a = range_mat(m, k);
        let b = range_mat(k, n);
        let c = &a * &b;
        let expected = reference_mat_mul(&a, &b);
        for (x, y) in c.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
        }
    }
}

#[test]
fn gemm_on_strided_views()
{
    let big = range_mat(6, 8);
    let a: MatrixView<f64> = big.slice(s![1..5, 2..5]);
    let b: MatrixView<f64> = big.slice(s![..3, 4..]);
    let c = &a * &b.t().t();
    let expected = reference_mat_mul(&a.to_owned(), &b.to_owned());
    for (x, y) in c.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
    }

    let ct = &b.t() * &a.t();
    assert_eq!(ct.dim(), (4, 4));
    for (i, j) in iproduct!(0..4, 0..4) {
        assert_abs_diff_eq!(ct[(i, j)], c[(j, i)], epsilon = 1e-9);
    }
}

#[test]
fn products_of_fixed_tensors()
{
    let a = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
    let b = FsMatrix::<i32, 3, 2>::from([[1, 0], [0, 1], [1, 1]]);
    let c: FsMatrix<i32, 2, 2> = &a * &b;
    assert_eq!(c, [[4, 5], [10, 11]]);

    let v = FsVector::<i32, 3>::from([1, 1, 1]);
    let av: FsVector<i32, 2> = &a * &v;
    assert_eq!(av, [6, 15]);
    let w = FsVector::<i32, 2>::from([1, -1]);
    let wa: FsVector<i32, 3> = &w * &a;
    assert_eq!(wa, [-3, -3, -3]);

    let mixed = &a * &dr2(&[[1, 0], [0, 1], [1, 1]]);
    assert_eq!(mixed, c);
}

#[test]
fn fixed_product_assign()
{
    let mut a = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
    let swap = FsMatrix::<i32, 2, 2>::from([[0, 1], [1, 0]]);
    a *= &swap;
    assert_eq!(a, [[2, 1], [4, 3]]);

    let mut v = FsVector::<i32, 2>::from([5, 7]);
    v *= &swap;
    assert_eq!(v, [7, 5]);
}

#[test]
fn product_assign_by_family()
{
    let mut d = dr2(&[[1, 2]]);
    d *= &dr2(&[[1, 0, 1], [0, 1, 1]]);
    assert_eq!(d, dr2(&[[1, 2, 3]]));

    let mut f = FsMatrix::<i32, 1, 2>::from([[1, 2]]);
    let err = f.try_mul_assign(&dr2(&[[1, 0, 1], [0, 1, 1]])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(f, [[1, 2]]);

    let mut m = dr2(&[[1, 2, 0], [3, 4, 0]]);
    {
        let mut left = m.slice_mut(s![.., ..2]);
        left *= &dr2(&[[0, 1], [1, 0]]);
    }
    assert_eq!(m, dr2(&[[2, 1, 0], [4, 3, 0]]));
    let err = m.slice_mut(s![.., ..2]).try_mul_assign(&dr2(&[[1], [1]])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
}

#[test]
#[should_panic(expected = "mul: ShapeError/IncompatibleShape")]
fn product_operator_panics_on_mismatch()
{
    let a = dr2(&[[1, 2, 3]]);
    let _ = &a * &a;
}

#[test]
fn outer_products()
{
    let u = dr1(&[1, 2, 3]);
    let v = view1(&[1, -1]);
    let o = u.try_outer(&v).unwrap();
    assert_eq!(o, dr2(&[[1, -1], [2, -2], [3, -3]]));
    let empty = u.try_outer(&dr1::<i32>(&[])).unwrap();
    assert_eq!(empty.dim(), (3, 0));
}

#[test]
fn conjugate_transpose()
{
    let m = dr2(&[[Complex::new(1., 1.), Complex::new(2., -3.)], [Complex::new(0., 2.), Complex::new(4., 0.)]]);
    let h = m.conj_t();
    assert_eq!(h[(0, 1)], Complex::new(0., -2.));
    assert_eq!(h[(1, 0)], Complex::new(2., 3.));
    assert_eq!(h.conj_t(), m);

    let product = &m * &h;
    for i in 0..2 {
        assert_abs_diff_eq!(product[(i, i)].im, 0., epsilon = 1e-12);
    }
    assert_abs_diff_eq!(product[(0, 1)].re, product[(1, 0)].re, epsilon = 1e-12);
    assert_abs_diff_eq!(product[(0, 1)].im, -product[(1, 0)].im, epsilon = 1e-12);

    let real = dr2(&[[1, 2], [3, 4]]);
    assert_eq!(real.conj_t(), real.transpose());
}

#[test]
fn complex_gemm_matches_generic_sum()
{
    let a = DrMatrix::from_shape_fn((3, 2), |(i, j)| Complex::new(i as f32, j as f32 - 1.));
    let b = DrMatrix::from_shape_fn((2, 3), |(i, j)| Complex::new(1. + j as f32, i as f32));
    let c = &a * &b;
    for (i, j) in iproduct!(0..3, 0..3) {
        let expected = a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)];
        assert_abs_diff_eq!(c[(i, j)].re, expected.re, epsilon = 1e-5);
        assert_abs_diff_eq!(c[(i, j)].im, expected.im, epsilon = 1e-5);
    }
}
