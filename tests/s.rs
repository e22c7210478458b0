use ndtensor::{dr2, s, DrTensor, DrTensorD, Ix3, IxDyn, SliceInfo, SliceInfoElem};

#[test]
fn test_s()
{
    let a = DrTensor::<usize, _>::zeros([3, 4]);
    let vi = a.slice(s![1.., ..2]);
    assert_eq!(vi.shape(), &[2, 2]);

    // trailing comma
    let vi = a.slice(s![1.., ..2, ]);
    assert_eq!(vi.shape(), &[2, 2]);
}

#[test]
fn index_entries_drop_axes()
{
    let t = DrTensor::<usize, Ix3>::from_shape_fn((2, 3, 4), |(i, j, k)| 100 * i + 10 * j + k);
    let row = t.slice(s![1, 2, ..]);
    assert_eq!(row, [120, 121, 122, 123]);
    let m = t.slice(s![.., 0, 1..3]);
    assert_eq!(m, dr2(&[[1, 2], [101, 102]]));
    let x = t.slice(s![0, 1, 2]);
    assert_eq!(x.ndim(), 0);
    assert_eq!(x[()], 12);
}

#[test]
fn bound_types()
{
    let a = dr2(&[[1, 2, 3], [4, 5, 6]]);
    let (i, j): (usize, isize) = (1, 2);
    assert_eq!(a.slice(s![i, ..j]), [4, 5]);
    assert_eq!(a.slice(s![0..2usize, 2]), [3, 6]);
}

#[test]
fn slice_dynamic_rank()
{
    let t = DrTensorD::from_shape_fn(IxDyn(&[2, 3]), |ix| ix[0] * 3 + ix[1]);
    let v = t.slice(s![.., 1..]);
    assert_eq!(v.shape(), &[2, 2]);
    assert_eq!(v[(1, 0)], 4);

    let elems = [SliceInfoElem::from(1), SliceInfoElem::from(..)];
    let info = SliceInfo::<_, IxDyn, IxDyn>::try_new(elems).unwrap();
    let row = t.slice(&info);
    assert_eq!(row.shape(), &[3]);
    assert_eq!(row[&[2][..]], 5);

    assert!(t.try_slice(s![.., .., ..]).is_err());
}

#[test]
fn slice_mut_then_slice_again()
{
    let mut a = DrTensor::<i32, _>::zeros((4, 4));
    {
        let mut inner = a.slice_mut(s![1..3, 1..3]);
        inner.slice_mut(s![0, ..]).fill(1);
        let mut col = inner.slice_move(s![.., 1]);
        col[1] = 2;
    }
    assert_eq!(a.slice(s![1, ..]), [0, 1, 1, 0]);
    assert_eq!(a[(2, 2)], 2);
    assert_eq!(a.iter().sum::<i32>(), 4);
}
