//! Index paths followed by the naive matrix product `out = a · b`.
//!
//! For `out[i][j] += a[i][k] * b[k][j]` with the loops nested as
//! `i`, `k`, `j`, each operand is visited along a path of `(row, col)`
//! pairs.  Plotting the three paths side by side shows the access
//! pattern of each matrix.

use ndarray::indices;

use crate::project::Coordinates;

/// A `(row, col)` position inside a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPair {
    pub row: usize,
    pub col: usize,
}

impl IndexPair {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Visit order of the left operand, right operand and result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixPaths {
    pub a: Vec<IndexPair>,
    pub b: Vec<IndexPair>,
    pub out: Vec<IndexPair>,
}

/// Enumerate `(i, k, j)` over `[0, n)³`, `i` outermost and `j` innermost.
pub fn matrix_paths(n: usize) -> MatrixPaths {
    let len = n.pow(3);
    let mut paths = MatrixPaths {
        a: Vec::with_capacity(len),
        b: Vec::with_capacity(len),
        out: Vec::with_capacity(len),
    };
    for (i, k, j) in indices((n, n, n)) {
        paths.a.push(IndexPair::new(i, k));
        paths.b.push(IndexPair::new(k, j));
        paths.out.push(IndexPair::new(i, j));
    }
    paths
}

/// Screen coordinates of a path: the column goes along x and the row
/// along y.
pub fn path_coordinates(path: &[IndexPair]) -> Coordinates {
    path.iter().map(|p| (p.col as f64, p.row as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_four_pairs_for_four_by_four() {
        let p = matrix_paths(4);
        assert_eq!(p.a.len(), 64);
        assert_eq!(p.b.len(), 64);
        assert_eq!(p.out.len(), 64);
    }

    #[test]
    fn row_major_enumeration() {
        let p = matrix_paths(4);
        let mut n = 0;
        for i in 0..4 {
            for k in 0..4 {
                for j in 0..4 {
                    assert_eq!(p.a[n], IndexPair::new(i, k));
                    assert_eq!(p.b[n], IndexPair::new(k, j));
                    assert_eq!(p.out[n], IndexPair::new(i, j));
                    n += 1;
                }
            }
        }
    }

    #[test]
    fn first_steps() {
        let p = matrix_paths(2);
        assert_eq!(&p.b[..3], &[IndexPair::new(0, 0),
                                IndexPair::new(0, 1),
                                IndexPair::new(1, 0)]);
    }

    #[test]
    fn empty_matrix() {
        assert_eq!(matrix_paths(0), MatrixPaths::default());
    }

    #[test]
    fn column_is_x() {
        let c = path_coordinates(&[IndexPair::new(2, 0), IndexPair::new(1, 3)]);
        assert_eq!(c.x, [0., 3.]);
        assert_eq!(c.y, [2., 1.]);
    }
}
