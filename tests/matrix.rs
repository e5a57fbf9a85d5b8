use mathplus::error::AlgebraError;
use mathplus::linalg::{Matrix, Matrix2, Matrix3};
use mathplus::primitives::U256;

fn close<const N: usize>(a: &Matrix<f64, N, N>, b: &Matrix<f64, N, N>) -> bool {
    a.rows()
        .zip(b.rows())
        .all(|(x, y)| x.iter().zip(y.iter()).all(|(p, q)| (p - q).abs() < 1e-10))
}

#[test]
fn construction_and_indexing() {
    let mut m = Matrix::new([[1, 2, 3], [4, 5, 6]]);

    assert_eq!(m[0][2], 3);
    assert_eq!(m[(1, 0)], 4);
    assert_eq!(m.row(1), [4, 5, 6]);
    assert_eq!(m.column(1), [2, 5]);
    assert_eq!(Matrix::<i32, 2, 3>::ROWS, 2);
    assert_eq!(Matrix::<i32, 2, 3>::COLS, 3);

    m[1][1] = 50;
    m[(0, 0)] = 10;
    assert_eq!(m, Matrix::new([[10, 2, 3], [4, 50, 6]]));
}

#[test]
fn zeros_identity_and_from_fn() {
    assert_eq!(Matrix::<i32, 2, 2>::zeros(), Matrix::new([[0, 0], [0, 0]]));
    assert_eq!(Matrix3::<i32>::identity(), Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
    assert_eq!(
        Matrix::<usize, 2, 3>::from_fn(|i, j| 10 * i + j),
        Matrix::new([[0, 1, 2], [10, 11, 12]])
    );
    assert_eq!(Matrix::<i32, 2, 2>::default(), Matrix::zeros());
}

#[test]
fn rows_iterate_top_to_bottom() {
    let m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
    let sums: Vec<i32> = m.rows().map(|r| r.iter().sum()).collect();

    assert_eq!(sums, vec![3, 7, 11]);
}

#[test]
fn transpose() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);

    assert_eq!(m.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn map_and_mask() {
    let m = Matrix::new([[1, 2], [3, 4]]);

    assert_eq!(m.map(|x| x * x), Matrix::new([[1, 4], [9, 16]]));
    assert_eq!(m.map(|x| x as f64 / 2.0), Matrix::new([[0.5, 1.0], [1.5, 2.0]]));

    let mask = Matrix::new([[1, 0], [0, 1]]);
    assert_eq!(m.masked(&mask), Matrix::new([[1, 0], [0, 4]]));

    let mut n = m;
    n.mask(&mask).mask(&Matrix::new([[3, 3], [3, 3]]));
    assert_eq!(n, Matrix::new([[3, 0], [0, 12]]));
}

#[test]
fn entrywise_arithmetic() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[4, 3], [2, 1]]);

    assert_eq!(a + b, Matrix::new([[5, 5], [5, 5]]));
    assert_eq!(a - b, Matrix::new([[-3, -1], [1, 3]]));
    assert_eq!(-a, Matrix::new([[-1, -2], [-3, -4]]));

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
}

#[test]
fn scalar_arithmetic() {
    let a: Matrix2<f64> = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);

    assert_eq!(a * 0.5, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(0.5 * a, a * 0.5);
    assert_eq!(a / 2.0, a * 0.5);

    let mut b = a;
    b *= 2.0;
    b /= 4.0;
    assert_eq!(b, a / 2.0);
}

#[test]
fn matrix_product() {
    let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);

    assert_eq!(a * b, Matrix::new([[58, 64], [139, 154]]));
    assert_eq!(a * Matrix3::identity(), a);
}

#[test]
fn in_place_product_by_square() {
    let mut a = Matrix::new([[1, 2], [3, 4], [5, 6]]);
    a *= Matrix::new([[0, 1], [1, 0]]);

    assert_eq!(a, Matrix::new([[2, 1], [4, 3], [6, 5]]));
}

#[test]
fn trace() {
    assert_eq!(Matrix::new([[1, 2], [3, 4]]).trace(), 5);
}

#[test]
fn cofactor_determinant() {
    assert_eq!(Matrix::new([[3]]).det(), 3);
    assert_eq!(Matrix::new([[1, 2], [3, 4]]).det(), -2);
    assert_eq!(Matrix::new([[2, 1, 1], [1, 3, 2], [1, 0, 0]]).det(), -1);
    assert_eq!(Matrix::new([[2, 0, 1], [1, 3, 2], [1, 1, 1]]).det(), 0);
    assert_eq!(Matrix::<i64, 0, 0>::new([]).det(), 1);
    assert_eq!(
        Matrix::new([[1, 2, 3, 4], [5, 6, 7, 8], [2, 6, 4, 8], [3, 1, 1, 2]]).det(),
        72
    );
}

#[test]
fn cofactor_determinant_is_exact_for_uint() {
    let m = Matrix::new([
        [U256::from(2u8), U256::from(3u8)],
        [U256::from(1u8), U256::from(4u8)],
    ]);
    assert_eq!(m.det(), U256::from(5u8));

    // 1·1 − 2·3 = −5, which wraps.
    let m = Matrix::new([
        [U256::from(1u8), U256::from(2u8)],
        [U256::from(3u8), U256::from(1u8)],
    ]);
    assert_eq!(m.det(), U256::ZERO - U256::from(5u8));
}

#[test]
fn pivoted_determinant() {
    let m = Matrix::new([[0.0_f64, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]]);

    assert!((m.det_pivoted() - m.det()).abs() < 1e-12);
    assert!((m.det_pivoted() + 5.0).abs() < 1e-12);
    assert_eq!(Matrix::new([[1.0, 2.0], [2.0, 4.0]]).det_pivoted(), 0.0);
}

#[test]
fn pivoted_determinant_swaps_sign() {
    let m = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
    assert_eq!(m.det_pivoted(), -1.0);
}

#[test]
fn inverse() {
    let m = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
    let inv = m.inverse().unwrap();

    assert!(close(&inv, &Matrix::new([[0.6, -0.7], [-0.2, 0.4]])));
    assert!(close(&(m * inv), &Matrix2::identity()));
}

#[test]
fn inverse_needs_pivoting() {
    let m = Matrix::new([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
    let inv = m.inverse().unwrap();

    assert!(close(&(inv * m), &Matrix3::identity()));
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
    assert_eq!(m.inverse(), Err(AlgebraError::SingularMatrix));
}
