use ndtensor::prelude::*;
use ndtensor::ErrorKind;

#[test]
fn view_from_slice_with_strides()
{
    let data: Vec<i32> = (0..12).collect();
    let m = MatrixView::from_shape((3, 2).strides((4, 2)), &data).unwrap();
    assert_eq!(m, dr2(&[[0, 2], [4, 6], [8, 10]]));
    assert!(!m.is_standard_layout());
    assert!(m.as_slice().is_none());

    let c = MatrixView::from_shape((2, 6), &data).unwrap();
    assert_eq!(c.as_slice(), Some(&data[..]));
}

#[test]
fn view_constructor_errors()
{
    let data = [0u8; 6];
    let err = MatrixView::from_shape((4, 2), &data[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);

    let err = MatrixView::from_shape((2, 3).strides((1, 1)), &data[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);

    let empty = MatrixView::from_shape((0, 3), &data[..0]).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn views_alias_their_source()
{
    let mut v = dr1(&[1, 2, 3]);
    {
        let mut tail = v.slice_mut(s![1..3]);
        tail += 10;
    }
    assert_eq!(v, dr1(&[1, 12, 13]));
}

#[test]
fn subviews()
{
    let m = dr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let v = m.view();
    assert_eq!(v.row(2), [7, 8, 9]);
    assert_eq!(v.column(0), [1, 4, 7]);
    assert_eq!(v.submatrix((0, 1), (2, 3)), dr2(&[[2, 3], [5, 6]]));
    assert_eq!(v.row(1).subvector(1, 3), [5, 6]);

    let t = v.t();
    assert_eq!(t.strides(), &[1, 3]);
    assert_eq!(t.row(0), [1, 4, 7]);
    assert_eq!(v.transpose(), dr2(&[[1, 4, 7], [2, 5, 8], [3, 6, 9]]));
}

#[test]
fn view_of_view_keeps_lifetime()
{
    let m = dr2(&[[1, 2], [3, 4]]);
    let first = {
        let v = m.view();
        let row = v.row(0);
        row.get(1)
    };
    assert_eq!(first, Some(&2));
}

#[test]
fn mutable_subviews()
{
    let mut m = DrMatrix::<i32>::zeros((3, 3));
    m.row_mut(0).fill(1);
    m.column_mut(2).fill(2);
    m.submatrix_mut((1, 0), (3, 2)).map_inplace(|x| *x = 7);
    assert_eq!(m, dr2(&[[1, 1, 2], [7, 7, 2], [7, 7, 2]]));

    let mut sub = m.slice_mut(s![.., 1]);
    sub[0] = -1;
    let row: VectorViewMut<'_, i32> = m.view_mut().into_row(2);
    assert_eq!(row, [7, 7, 2]);
    assert_eq!(m[(0, 1)], -1);
}

#[test]
fn slice_errors()
{
    let m = dr2(&[[1, 2, 3], [4, 5, 6]]);
    let err = m.try_slice(s![.., 1..4]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    let err = m.try_slice(s![2, ..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    let err = m.try_slice(s![2..1, ..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);

    let empty: MatrixView<i32> = m.slice(s![2.., ..]);
    assert_eq!(empty.dim(), (0, 3));
}

#[test]
fn view_assign()
{
    let mut m = dr2(&[[0, 0, 0], [0, 0, 0]]);
    let src = FsMatrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
    m.slice_mut(s![.., 1..]).assign(&src).unwrap();
    assert_eq!(m, dr2(&[[0, 1, 2], [0, 3, 4]]));

    let err = m.slice_mut(s![.., 1..]).assign(&dr2(&[[1, 2, 3]])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(m, dr2(&[[0, 1, 2], [0, 3, 4]]));
}

#[test]
fn view_to_owned_is_row_major_copy()
{
    let m = DrMatrix::from_shape_fn((2, 3).f(), |(i, j)| i * 3 + j);
    let t = m.view().t().to_owned();
    assert_eq!(t.order(), Order::RowMajor);
    assert_eq!(t, dr2(&[[0, 3], [1, 4], [2, 5]]));
}

#[test]
fn free_view_functions()
{
    let mut data = [1, 2, 3, 4];
    assert_eq!(view1(&data).len(), 4);
    view_mut1(&mut data).slice_mut(s![1..3]).fill(0);
    assert_eq!(data, [1, 0, 0, 4]);

    let rows = [[1, 2], [3, 4], [5, 6]];
    let m = view2(&rows);
    assert_eq!(m.dim(), (3, 2));
    assert_eq!(m.column(1), [2, 4, 6]);
}

#[test]
fn dynamic_rank_views()
{
    let t = DrTensorD::from_shape_fn(IxDyn(&[2, 3, 4]), |ix| ix[0] * 100 + ix[1] * 10 + ix[2]);
    let v = t.view();
    let d: TensorViewD<'_, usize> = v.into_dyn();
    assert_eq!(d.ndim(), 3);
    let fixed = d.clone().into_dimensionality::<Ix3>().unwrap();
    assert_eq!(fixed[(1, 2, 3)], 123);
    assert!(d.into_dimensionality::<Ix2>().is_err());
}
