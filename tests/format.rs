use ndtensor::prelude::*;

#[test]
fn formatting()
{
    let a = dr1(&[1., 2., 3., 4.]);
    assert_eq!(format!("{}", a), "[1, 2, 3, 4]");
    assert_eq!(format!("{:4}", a), "[   1,    2,    3,    4]");

    let m = DrMatrix::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    assert_eq!(format!("{}", m), "[[1, 2],\n [3, 4]]");
    assert_eq!(format!("{:4}", m), "[[   1,    2],\n [   3,    4]]");

    let t = DrTensor::<f32, Ix3>::from_shape_fn((4, 1, 1), |(i, _, _)| (i + 1) as f32);
    assert_eq!(format!("{:4}", t), "[[[   1]],\n\n [[   2]],\n\n [[   3]],\n\n [[   4]]]");

    let scalar = t.slice(s![2, 0, 0]);
    assert_eq!(format!("{}", scalar), "3");
}

#[test]
fn formatting_of_every_family()
{
    let f = FsMatrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(format!("{}", f), "[[1, 2, 3],\n [4, 5, 6]]");
    assert_eq!(format!("{}", f.view()), format!("{}", f));
    assert_eq!(format!("{}", f.column(1)), "[2, 5]");

    let mut d = DrMatrix::from(f);
    assert_eq!(format!("{}", d.view_mut()), "[[1, 2, 3],\n [4, 5, 6]]");
    assert_eq!(format!("{:e}", dr1(&[1500.0_f64])), "[1.5e3]");
}

#[test]
fn debug_format()
{
    let mut m = DrMatrix::<i32>::with_capacity((1, 2), (3, 4)).unwrap();
    m[(0, 1)] = 5;
    assert_eq!(
        format!("{:?}", m),
        "[[0, 5]] shape=[1, 2], strides=[4, 1], const ndim=2, capacity=[3, 4], order=RowMajor"
    );

    let d = DrTensorD::<u8>::zeros(IxDyn(&[1, 2]));
    assert_eq!(format!("{:?}", d.view()), "[[0, 0]] shape=[1, 2], strides=[2, 1], dynamic ndim=2");

    let f = FsVector::<u8, 2>::from([7, 8]);
    assert_eq!(format!("{:?}", f), "[7, 8] shape=[2], strides=[1], const ndim=1");
}

#[test]
fn empty_tensors()
{
    assert_eq!(format!("{}", DrVector::<i32>::new()), "[]");
    assert_eq!(format!("{}", DrMatrix::<i32>::zeros((0, 3))), "[]");
    assert_eq!(format!("{}", DrMatrix::<i32>::zeros((2, 0))), "[[],\n []]");
}
