use itertools::iproduct;
use ndtensor::prelude::*;
use quickcheck::quickcheck;

fn from_seed(rows: usize, cols: usize, seed: &[i16]) -> DrMatrix<i32>
{
    DrMatrix::from_shape_fn((rows, cols), |(i, j)| {
        if seed.is_empty() {
            (i * cols + j) as i32
        } else {
            seed[(i * cols + j) % seed.len()] as i32
        }
    })
}

fn ordered(x: u8, y: u8, len: usize) -> (usize, usize)
{
    let (x, y) = (x as usize % (len + 1), y as usize % (len + 1));
    (x.min(y), x.max(y))
}

quickcheck! {
    fn add_then_sub_is_identity(m: u8, n: u8, seed: Vec<i16>) -> bool {
        let (m, n) = (m as usize % 7, n as usize % 7);
        let a = from_seed(m, n, &seed);
        let rev: Vec<i16> = seed.iter().rev().cloned().collect();
        let b = from_seed(m, n, &rev);
        let sum = &a + &b;
        &sum - &b == a && &(-&b) + &sum == a
    }

    fn resize_preserves_the_overlap(m: u8, n: u8, p: u8, q: u8) -> bool {
        let (m, n, p, q) = (m as usize % 9, n as usize % 9, p as usize % 9, q as usize % 9);
        let mut a = DrMatrix::from_shape_fn((m, n), |(i, j)| 1 + 100 * i + j);
        if a.resize((p, q)).is_err() {
            return false;
        }
        let cap = a.capacity();
        a.dim() == (p, q)
            && cap.0 >= p && cap.1 >= q
            && iproduct!(0..p, 0..q).all(|(i, j)| {
                let expected = if i < m && j < n { 1 + 100 * i + j } else { 0 };
                a[(i, j)] == expected
            })
    }

    fn slices_agree_with_indexing(m: u8, n: u8, r: (u8, u8), c: (u8, u8)) -> bool {
        let (m, n) = (m as usize % 8, n as usize % 8);
        let a = DrMatrix::from_shape_fn((m, n), |(i, j)| (i, j));
        let (r0, r1) = ordered(r.0, r.1, m);
        let (c0, c1) = ordered(c.0, c.1, n);
        let v = a.slice(s![r0..r1, c0..c1]);
        v.dim() == (r1 - r0, c1 - c0)
            && v.indexed_iter().all(|((i, j), &x)| x == (r0 + i, c0 + j))
            && v.t().to_owned() == a.t().slice(s![c0..c1, r0..r1])
    }

    fn identity_is_neutral_for_products(m: u8, n: u8, seed: Vec<i16>) -> bool {
        let (m, n) = (m as usize % 6, n as usize % 6);
        let a = from_seed(m, n, &seed);
        let left = DrMatrix::from_shape_fn((m, m), |(i, j)| (i == j) as i32);
        let right = DrMatrix::from_shape_fn((n, n), |(i, j)| (i == j) as i32);
        &(&left * &a) * &right == a
    }

    fn column_major_resize_matches_row_major(m: u8, n: u8, p: u8, q: u8) -> bool {
        let (m, n, p, q) = (m as usize % 6, n as usize % 6, p as usize % 6, q as usize % 6);
        let mut rows = DrMatrix::from_shape_fn((m, n), |(i, j)| 10 * i + j);
        let mut cols = DrMatrix::from_shape_fn((m, n).f(), |(i, j)| 10 * i + j);
        rows.resize((p, q)).is_ok() && cols.resize((p, q)).is_ok() && rows == cols
    }
}
