use std::fmt;

use defmac::defmac;
use ndtensor::prelude::*;
use ndtensor::ErrorKind;
use num_complex::Complex;

fn test_oper(op: &str, a: &[f32], b: &[f32], c: &[f32])
{
    let aa = dr1(a);
    let bb = dr1(b);
    let cc = dr1(c);
    test_oper_arr(op, aa.clone(), bb.clone(), cc.clone());
    let dim = (2, 2);
    let aa = DrMatrix::from_shape_vec(dim, a.to_vec()).unwrap();
    let bb = DrMatrix::from_shape_vec(dim, b.to_vec()).unwrap();
    let cc = DrMatrix::from_shape_vec(dim, c.to_vec()).unwrap();
    test_oper_arr(op, aa, bb, cc);
}

fn test_oper_arr<D: Dimension>(op: &str, mut aa: DrTensor<f32, D>, bb: DrTensor<f32, D>, cc: DrTensor<f32, D>)
where DrTensor<f32, D>: fmt::Debug
{
    match op {
        "+" => {
            assert_eq!(&aa + &bb, cc);
            assert_eq!(&aa.view() + &bb, cc);
            aa += &bb;
            assert_eq!(aa, cc);
        }
        "-" => {
            assert_eq!(&aa - &bb, cc);
            assert_eq!(&aa.view() - &bb.view(), cc);
            aa -= &bb.view();
            assert_eq!(aa, cc);
        }
        "neg" => {
            assert_eq!(-&aa, cc);
            assert_eq!(-&aa.view(), cc);
        }
        _ => panic!("unknown operator {}", op),
    }
}

#[test]
fn operations()
{
    test_oper("+", &[1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
    test_oper("-", &[1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0]);
    test_oper("neg", &[1.0, 2.0, 3.0, 4.0], &[0.0; 4], &[-1.0, -2.0, -3.0, -4.0]);
}

#[test]
fn add_then_subtract_is_identity()
{
    let a = DrMatrix::from_shape_fn((3, 4), |(i, j)| (i * 4 + j) as i64);
    let b = DrMatrix::from_shape_fn((3, 4), |(i, j)| (i as i64 - j as i64) * 7);
    assert_eq!(&(&a + &b) - &b, a);

    let f = FsMatrix::<i64, 3, 4>::from_data(&b).unwrap();
    assert_eq!(&(&a + &f) - &f, a);
    assert_eq!(&(&f + &a) - &a, f);
}

#[test]
fn result_family_follows_the_left_operand()
{
    let d = dr1(&[1, 2, 3]);
    let f = FsVector::<i32, 3>::from([10, 20, 30]);

    let fd: FsVector<i32, 3> = &f + &d;
    assert_eq!(fd, [11, 22, 33]);
    let df: DrVector<i32> = &d + &f;
    assert_eq!(df, [11, 22, 33]);
    let ff: FsVector<i32, 3> = &f - &f;
    assert_eq!(ff, [0, 0, 0]);
    let vf: DrVector<i32> = &d.view() + &f;
    assert_eq!(vf, [11, 22, 33]);
}

#[test]
fn mixed_element_types()
{
    let re = dr1(&[1.0_f64, 2.0]);
    let z = dr1(&[Complex::new(0.0_f64, 1.0), Complex::new(1.0, 1.0)]);
    let sum: DrVector<Complex<f64>> = &z + &re;
    assert_eq!(sum, dr1(&[Complex::new(1.0, 1.0), Complex::new(3.0, 1.0)]));
}

#[test]
fn scalar_operands()
{
    let a = dr2(&[[1., 2.], [3., 4.]]);
    assert_eq!(&a * 2., dr2(&[[2., 4.], [6., 8.]]));
    assert_eq!(2.0_f64 * &a, &a * 2.);
    assert_eq!(&a / 2., dr2(&[[0.5, 1.], [1.5, 2.]]));
    assert_eq!(&a + 1., dr2(&[[2., 3.], [4., 5.]]));
    assert_eq!(&a - 1., dr2(&[[0., 1.], [2., 3.]]));

    let f = FsVector::<i32, 2>::from([3, 4]);
    let doubled: FsVector<i32, 2> = 2_i32 * &f;
    assert_eq!(doubled, [6, 8]);
    assert_eq!(&f.view() * 3, dr1(&[9, 12]));

    let z = dr1(&[Complex::new(1.0_f64, 1.0)]);
    assert_eq!(&z * Complex::new(0.0_f64, 1.0), dr1(&[Complex::new(-1.0, 1.0)]));
    assert_eq!(Complex::new(2.0_f64, 0.0) * &z, dr1(&[Complex::new(2.0, 2.0)]));
}

#[test]
fn scalar_sum_and_difference_on_every_family()
{
    let mut d = dr2(&[[1, 2, 3], [4, 5, 6]]);
    let tail = d.slice(s![.., 1..]);
    assert_eq!(&tail + 10, dr2(&[[12, 13], [15, 16]]));
    assert_eq!(&tail - 1, dr2(&[[1, 2], [4, 5]]));
    assert_eq!(tail.try_add_scalar(&10).unwrap(), &tail + 10);
    assert_eq!(tail.try_sub_scalar(&1).unwrap(), &tail - 1);

    let f = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
    let shifted: FsMatrix<i32, 2, 2> = &f + 1;
    assert_eq!(shifted, [[2, 3], [4, 5]]);
    let lowered: FsMatrix<i32, 2, 2> = &f - 1;
    assert_eq!(lowered, [[0, 1], [2, 3]]);

    let grown: DrMatrix<i32> = &d + 100;
    assert_eq!(grown[(1, 2)], 106);

    let col = d.column_mut(0);
    assert_eq!(&col - 1, dr1(&[0, 3]));
    assert_eq!(&col + 1, dr1(&[2, 5]));
}

#[test]
fn scalar_assign_operators()
{
    let mut a = dr1(&[1, 2, 3]);
    a += 1;
    a *= 3;
    a -= 2;
    assert_eq!(a, dr1(&[4, 7, 10]));
    a /= 2;
    assert_eq!(a, dr1(&[2, 3, 5]));

    let mut f = FsMatrix::<f64, 1, 2>::from([[1., 2.]]);
    f *= 0.5;
    f += 1.;
    assert_eq!(f, [[1.5, 2.]]);

    let mut m = dr2(&[[1, 2], [3, 4]]);
    {
        let mut col = m.column_mut(1);
        col *= 10;
        col -= 1;
    }
    assert_eq!(m, dr2(&[[1, 19], [3, 39]]));
}

#[test]
fn in_place_elementwise_between_families()
{
    let mut m = dr2(&[[1, 2], [3, 4]]);
    let f = FsMatrix::<i32, 2, 2>::from([[1, 1], [1, 1]]);
    m += &f;
    assert_eq!(m, dr2(&[[2, 3], [4, 5]]));

    let mut g = f;
    g -= &m;
    assert_eq!(g, [[-1, -2], [-3, -4]]);
    g += &f;
    assert_eq!(g, [[0, -1], [-2, -3]]);

    {
        let mut row = m.row_mut(0);
        row += &dr1(&[10, 20]);
    }
    assert_eq!(m, dr2(&[[12, 23], [4, 5]]));
}

#[test]
fn shape_mismatch_reports_and_preserves()
{
    let a = dr2(&[[1, 2], [3, 4]]);
    let b = dr2(&[[1, 2, 3]]);
    assert_eq!(a.try_add(&b).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(a.try_sub(&b).unwrap_err().kind(), ErrorKind::IncompatibleShape);

    let mut c = a.clone();
    assert!(c.try_add_assign(&b).is_err());
    assert!(c.try_sub_assign(&b).is_err());
    assert_eq!(c, a);

    let mut f = FsMatrix::<i32, 2, 2>::zeros();
    assert!(f.try_add_assign(&b).is_err());
    assert_eq!(f, [[0, 0], [0, 0]]);
}

#[test]
#[should_panic(expected = "add: ShapeError/IncompatibleShape")]
fn operator_panics_on_mismatch()
{
    let a = dr1(&[1, 2]);
    let b = dr1(&[1, 2, 3]);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "add_assign")]
fn assign_operator_panics_on_mismatch()
{
    let mut a = dr1(&[1, 2]);
    a += &dr1(&[1, 2, 3]);
}

#[test]
fn try_forms_match_operators()
{
    defmac!(check a, b => {
        assert_eq!(a.try_add(&b).unwrap(), &a + &b);
        assert_eq!(a.try_sub(&b).unwrap(), &a - &b);
        assert_eq!(a.try_mul_scalar(&3).unwrap(), &a * 3);
        assert_eq!(a.try_div_scalar(&3).unwrap(), &a / 3);
        assert_eq!(a.try_neg().unwrap(), -&a);
    });
    let a = dr2(&[[1, -2], [30, 4]]);
    let b = dr2(&[[5, 6], [7, -8]]);
    check!(a.clone(), b.clone());
    check!(a.view(), b.view());
    let fa = FsMatrix::<i32, 2, 2>::from_data(&a).unwrap();
    check!(fa, b);
}

#[test]
fn scalar_capability_in_place()
{
    let mut a = dr1(&[2.0, 4.0]);
    a.mul_scalar_assign(&1.5);
    assert_eq!(a, dr1(&[3.0, 6.0]));
    a.div_scalar_assign(&3.0);
    assert_eq!(a, dr1(&[1.0, 2.0]));

    let mut f = FsVector::<f32, 2>::from([1., 2.]);
    f.view_mut().mul_scalar_assign(&2.);
    assert_eq!(f, [2., 4.]);
}
