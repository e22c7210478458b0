use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use allocator_api2::alloc::Global;
use defmac::defmac;
use ndtensor::prelude::*;
use ndtensor::ErrorKind;
use tracing_subscriber::EnvFilter;

fn init_logging()
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn new_is_empty()
{
    let v = DrVector::<f64>::new();
    assert_eq!(v.dim(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());

    let d = DrTensorD::<u8>::new();
    assert_eq!(d.ndim(), 1);
    assert_eq!(d.len(), 0);
}

#[test]
fn constructors()
{
    let m = DrMatrix::from_elem((2, 3), 7u8);
    assert_eq!(m, dr2(&[[7, 7, 7], [7, 7, 7]]));
    assert_eq!(m.strides(), &[3, 1]);
    assert_eq!(m.order(), Order::RowMajor);

    let z = DrMatrix::<f32>::zeros((3, 1));
    assert!(z.iter().all(|&x| x == 0.));

    let d = DrMatrix::<String>::default((1, 2));
    assert_eq!(d[(0, 1)], "");

    let f = DrMatrix::from_shape_fn((2, 3).f(), |(i, j)| i * 3 + j);
    assert_eq!(f, dr2(&[[0, 1, 2], [3, 4, 5]]));
    assert_eq!(f.strides(), &[1, 2]);
    assert_eq!(f.order(), Order::ColumnMajor);
    assert!(f.as_slice().is_none());
}

#[test]
fn from_shape_vec_checks_length()
{
    let err = DrMatrix::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    let v = DrVector::from_shape_vec(3, vec![1, 2, 3]).unwrap();
    assert_eq!(v, dr1(&[1, 2, 3]));
}

#[test]
fn capacity_constructors()
{
    let m = DrMatrix::<i32>::with_capacity((1, 2), (3, 3)).unwrap();
    assert_eq!(m.dim(), (1, 2));
    assert_eq!(m.capacity(), (3, 3));
    assert_eq!(m.strides(), &[3, 1]);

    let err = DrMatrix::<i32>::with_capacity((4, 2), (3, 3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityViolation);

    let err = DrMatrix::from_shape_fn_with_capacity((1, 1), (1, 0), |_| 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityViolation);
}

#[test]
fn grow_then_shrink_preserves_values()
{
    init_logging();
    let mut m = DrMatrix::from_shape_fn((2, 3), |(i, j)| (10 * i + j) as i64);
    let before = m.clone();
    m.resize((4, 5)).unwrap();
    assert_eq!(m.dim(), (4, 5));
    assert_eq!(m.slice(s![..2, ..3]), before);
    assert!(m.slice(s![2.., ..]).iter().all(|&x| x == 0));
    assert!(m.slice(s![.., 3..]).iter().all(|&x| x == 0));

    m.resize((2, 3)).unwrap();
    assert_eq!(m, before);
    assert_eq!(m.capacity(), (4, 6));
}

#[test]
fn shrink_keeps_capacity()
{
    let mut v = dr1(&[1, 2, 3, 4, 5]);
    let ptr = v.as_ptr();
    v.resize(2).unwrap();
    assert_eq!(v, dr1(&[1, 2]));
    assert_eq!(v.capacity(), 5);
    v.resize(4).unwrap();
    assert_eq!(v, dr1(&[1, 2, 0, 0]));
    assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn growth_doubles_the_capacity()
{
    let mut v = DrVector::<u32>::new();
    v.resize(1).unwrap();
    assert_eq!(v.capacity(), 1);
    v.resize(2).unwrap();
    assert_eq!(v.capacity(), 2);
    v.resize(3).unwrap();
    assert_eq!(v.capacity(), 4);
    v.resize(9).unwrap();
    assert_eq!(v.capacity(), 9);
}

#[test]
fn resize_checks_rank()
{
    let mut d = DrTensorD::<u8>::zeros(IxDyn(&[2, 2]));
    let err = d.resize(IxDyn(&[2, 2, 2])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(d.shape(), &[2, 2]);
}

#[test]
fn reserve_grows_exactly()
{
    let mut m = dr2(&[[1, 2], [3, 4]]);
    m.reserve((3, 2)).unwrap();
    assert_eq!(m.capacity(), (3, 2));
    assert_eq!(m, dr2(&[[1, 2], [3, 4]]));
    m.reserve((1, 1)).unwrap();
    assert_eq!(m.capacity(), (3, 2));
    m.reserve((3, 7)).unwrap();
    assert_eq!(m.capacity(), (3, 7));
    assert_eq!(m.strides(), &[7, 1]);
    assert_eq!(m, dr2(&[[1, 2], [3, 4]]));
}

#[test]
fn column_major_reallocation_keeps_indices()
{
    init_logging();
    let mut m = DrMatrix::from_shape_fn((2, 2).f(), |(i, j)| 10 * i + j);
    m.resize((3, 3)).unwrap();
    assert_eq!(m, dr2(&[[0, 1, 0], [10, 11, 0], [0, 0, 0]]));
    assert_eq!(m.order(), Order::ColumnMajor);
    assert_eq!(m.strides(), &[1, 4]);
}

#[test]
fn assign_resizes()
{
    let mut m = DrMatrix::<i32>::zeros((2, 2));
    let src = dr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    m.assign(&src).unwrap();
    assert_eq!(m.dim(), (3, 3));
    assert_eq!(m, src);

    m.assign(&dr2(&[[1]])).unwrap();
    assert_eq!(m, dr2(&[[1]]));
    assert_eq!(m.capacity(), (3, 3));
}

#[test]
fn assign_from_other_families()
{
    let mut m = DrMatrix::<i32>::new();
    let f = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
    m.assign(&f).unwrap();
    assert_eq!(m, f);

    let big = dr2(&[[1, 2, 3], [4, 5, 6]]);
    m.assign(&big.slice(s![.., 1..])).unwrap();
    assert_eq!(m, dr2(&[[2, 3], [5, 6]]));
}

#[test]
fn copy_is_independent()
{
    let a = dr2(&[[1, 2], [3, 4]]);
    let mut b = a.clone();
    b[(0, 0)] = 100;
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(b[(0, 0)], 100);
    assert_eq!(b.capacity(), a.capacity());

    let mut c = dr2(&[[0; 5]; 5]);
    c.clone_from(&a);
    assert_eq!(c, a);
    assert_eq!(c.capacity(), (5, 5));
}

#[test]
fn set_allocator_keeps_values()
{
    let mut m = DrMatrix::from_shape_fn_with_capacity((2, 2), (3, 3), |(i, j)| i + j).unwrap();
    m.set_allocator(Global).unwrap();
    assert_eq!(m, dr2(&[[0, 1], [1, 2]]));
    assert_eq!(m.capacity(), (3, 3));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_out_of_bounds_panics()
{
    let m = dr2(&[[1, 2], [3, 4]]);
    let _ = m[(2, 0)];
}

#[test]
fn get_is_checked()
{
    let mut m = dr2(&[[1, 2], [3, 4]]);
    assert_eq!(m.get((1, 1)), Some(&4));
    assert_eq!(m.get((0, 2)), None);
    *m.get_mut((0, 1)).unwrap() = 9;
    assert_eq!(m, dr2(&[[1, 9], [3, 4]]));
}

#[test]
fn map_and_fill()
{
    let mut m = dr2(&[[1, 2], [3, 4]]);
    let doubled = m.map(|&x| 2 * x);
    assert_eq!(doubled, dr2(&[[2, 4], [6, 8]]));
    m.map_inplace(|x| *x -= 1);
    assert_eq!(m, dr2(&[[0, 1], [2, 3]]));
    m.fill(5);
    assert!(m.iter().all(|&x| x == 5));
}

thread_local! {
    static LIVE: Cell<isize> = Cell::new(0);
}

struct Counted;

impl Counted
{
    fn new() -> Self
    {
        LIVE.with(|c| c.set(c.get() + 1));
        Counted
    }
}

impl Default for Counted
{
    fn default() -> Self
    {
        Counted::new()
    }
}

impl Clone for Counted
{
    fn clone(&self) -> Self
    {
        Counted::new()
    }
}

impl Drop for Counted
{
    fn drop(&mut self)
    {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}

fn live() -> isize
{
    LIVE.with(|c| c.get())
}

#[test]
fn generator_panic_drops_built_elements()
{
    defmac!(build_until n => catch_unwind(AssertUnwindSafe(|| {
        let mut count = 0;
        DrMatrix::from_shape_fn((3, 3), |_| {
            count += 1;
            if count > n {
                panic!("generator failed");
            }
            Counted::new()
        })
    })));
    assert!(build_until!(4).is_err());
    assert_eq!(live(), 0);
    assert!(build_until!(0).is_err());
    assert_eq!(live(), 0);
    let ok = build_until!(9).unwrap();
    assert_eq!(live(), 9);
    drop(ok);
    assert_eq!(live(), 0);
}

#[test]
fn resize_drops_and_builds_elements()
{
    let mut m = DrMatrix::<Counted>::default((2, 2));
    assert_eq!(live(), 4);
    m.resize((3, 1)).unwrap();
    assert_eq!(live(), 3);
    m.resize((5, 5)).unwrap();
    assert_eq!(live(), 25);
    m.assign(&DrMatrix::<Counted>::default((1, 1))).unwrap();
    assert_eq!(live(), 1);
    drop(m);
    assert_eq!(live(), 0);
}
