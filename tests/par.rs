#![cfg(feature = "rayon")]

use ndtensor::parallel::prelude::*;
use ndtensor::parallel::PARALLEL_THRESHOLD;
use ndtensor::prelude::*;
use ndtensor::ErrorKind;

const M: usize = 256;
const N: usize = 100;

#[test]
fn par_kernels_match_operators()
{
    assert!(M * N >= PARALLEL_THRESHOLD);
    let a = DrMatrix::from_shape_fn((M, N), |(i, j)| (i * N + j) as f64);
    let b = DrMatrix::from_shape_fn((M, N), |(i, j)| (i + j) as f64 * 0.25);

    let mut par = a.clone();
    par.par_add_assign(&b).unwrap();
    par.par_mul_scalar_assign(&3.);
    par.par_sub_assign(&a).unwrap();
    let seq = &(&(&a + &b) * 3.) - &a;
    assert_eq!(par, seq);
}

#[test]
fn par_map_inplace_on_views()
{
    let mut m = DrMatrix::<u32>::zeros((M, N));
    m.par_map_inplace(|x| *x += 1);
    m.slice_mut(s![..M / 2, ..]).par_map_inplace(|x| *x *= 10);
    m.column_mut(0).par_map_inplace(|x| *x = 0);
    assert_eq!(m[(0, 1)], 10);
    assert_eq!(m[(M - 1, 1)], 1);
    assert!(m.column(0).iter().all(|&x| x == 0));
    assert_eq!(m.iter().map(|&x| x as usize).sum::<usize>(), (M / 2) * (N - 1) * 10 + (M / 2) * (N - 1));
}

#[test]
fn par_zip_with_mixed_layouts()
{
    let mut dest = DrMatrix::<i64>::zeros((M, N));
    let src = DrMatrix::from_shape_fn((N, M), |(i, j)| (i * M + j) as i64);
    dest.par_zip_mut_with(&src.t(), |d, &s| *d = s).unwrap();
    assert_eq!(dest, src.t());

    let mut fixed = FsMatrix::<i64, 2, 2>::zeros();
    let err = fixed.par_add_assign(&dest).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    fixed.par_add_assign(&dest.slice(s![..2, ..2])).unwrap();
    assert_eq!(fixed, [[0, M as i64], [1, M as i64 + 1]]);
}

#[test]
fn rayon_iterators_are_reexported()
{
    let m = DrMatrix::from_elem((4, 4), 2);
    let total: i32 = m.as_slice().unwrap().par_iter().sum();
    assert_eq!(total, 32);
}
