use ndtensor::prelude::*;
use ndtensor::ErrorKind;

#[test]
fn construct_and_index()
{
    let mut m = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.shape(), &[2, 3]);
    assert_eq!(m.dim(), (2, 3));
    assert_eq!(m.len(), 6);
    assert_eq!(m[(1, 2)], 6);
    m[[0, 0]] = 10;
    assert_eq!(m, [[10, 2, 3], [4, 5, 6]]);
    assert_eq!(m.get((2, 0)), None);
}

#[test]
fn generators_are_row_major()
{
    let mut calls = Vec::new();
    let v = FsVector::<usize, 4>::from_shape_fn(|i| {
        calls.push(i);
        i * i
    });
    assert_eq!(v, [0, 1, 4, 9]);
    assert_eq!(calls, [0, 1, 2, 3]);

    let t = FsTensor3::<u8, 2, 2, 2>::from_elem(3);
    assert!(t.iter().all(|&x| x == 3));
    assert_eq!(FsMatrix::<f64, 2, 2>::zeros(), [[0., 0.], [0., 0.]]);
}

#[test]
fn copy_semantics()
{
    let a = FsVector::<f32, 3>::from([1., 2., 3.]);
    let mut b = a;
    b[0] = 9.;
    assert_eq!(a, [1., 2., 3.]);
    assert_eq!(b, [9., 2., 3.]);
}

#[test]
fn assign_requires_exact_extents()
{
    let mut f = FsMatrix::<i32, 2, 2>::zeros();
    let d = dr2(&[[1, 2], [3, 4]]);
    f.assign(&d).unwrap();
    assert_eq!(f, d);

    let big = dr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let err = f.assign(&big).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(f, [[1, 2], [3, 4]]);

    f.assign(&big.slice(s![1.., ..2])).unwrap();
    assert_eq!(f, [[4, 5], [7, 8]]);
}

#[test]
fn views_of_fixed_tensors()
{
    let mut m = FsMatrix::<i32, 3, 3>::from_shape_fn(|(i, j)| (3 * i + j) as i32);
    assert_eq!(m.row(1), [3, 4, 5]);
    assert_eq!(m.column(2), [2, 5, 8]);
    m.slice_mut(s![.., 0]).fill(-1);
    assert_eq!(m.column(0), [-1, -1, -1]);
    assert_eq!(m.submatrix((1, 1), (3, 3)), dr2(&[[4, 5], [7, 8]]));
}

#[test]
fn conversions()
{
    let f = FsMatrix::<u8, 2, 2>::from([[1, 2], [3, 4]]);
    let d = DrMatrix::from(f);
    assert_eq!(d, f);
    let back = FsMatrix::<u8, 2, 2>::from_data(&d).unwrap();
    assert_eq!(back.into_inner(), [[1, 2], [3, 4]]);

    let v = DrVector::from(FsVector::<u8, 2>::from([5, 6]));
    assert_eq!(v, dr1(&[5, 6]));
}

#[test]
fn transpose_fixed()
{
    let m = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
    let t: FsMatrix<i32, 3, 2> = m.transpose();
    assert_eq!(t, [[1, 4], [2, 5], [3, 6]]);
    assert_eq!(m.t(), t);
}
