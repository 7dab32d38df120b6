//! Fixed size Gaussian elimination
use nalgebra::{Matrix4, Vector4};

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Pivots whose magnitude is below `epsilon` are not eliminated: the matching
/// component of `x` is set to zero instead of dividing by a near null value.
/// This never fails; rank deficient systems simply return a partial solution.
pub fn solve4(mut a: Matrix4<f64>, mut b: Vector4<f64>, epsilon: f64) -> Vector4<f64> {
    let mut x = Vector4::<f64>::zeros();

    for col in 0..4 {
        // largest magnitude in active column
        let mut pivot = col;
        for row in col + 1..4 {
            if a[(row, col)].abs() > a[(pivot, col)].abs() {
                pivot = row;
            }
        }

        if pivot != col {
            a.swap_rows(col, pivot);
            b.swap_rows(col, pivot);
        }

        if a[(col, col)].abs() < epsilon {
            continue;
        }

        for row in col + 1..4 {
            let factor = a[(row, col)] / a[(col, col)];
            for k in col..4 {
                a[(row, k)] -= factor * a[(col, k)];
            }
            b[row] -= factor * b[col];
        }
    }

    for row in (0..4).rev() {
        if a[(row, row)].abs() < epsilon {
            continue;
        }
        let mut acc = b[row];
        for k in row + 1..4 {
            acc -= a[(row, k)] * x[k];
        }
        x[row] = acc / a[(row, row)];
    }

    x
}
