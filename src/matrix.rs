//! Kernel–cube matrix (§4.C)
//!
//! Rows are the distinct co-kernels observed across all kernel pairs; columns
//! are the distinct *cubes* that appear across all kernels (not whole
//! kernels). `M[i][j] = 1` iff the kernel produced from co-kernel `row_i`
//! contains column cube `j`. Stored sparsely: row/column label arrays (first
//! occurrence wins the index, via `IndexSet` so lookup stays O(1)) plus a
//! set of `(row, col)` pairs, indexed both ways for the rectangle enumerator.

use crate::cube::Cube;
use crate::expr::Expr;
use indexmap::IndexSet;
use std::collections::BTreeSet;

/// A sparse Boolean matrix indexed by co-kernel rows and cube columns.
#[derive(Debug, Clone)]
pub struct KernelMatrix {
    rows: IndexSet<Cube>,
    cols: IndexSet<Cube>,
    /// `(row, col)` pairs with a 1 entry.
    cells: BTreeSet<(usize, usize)>,
    /// For each row, the set of columns with a 1 entry.
    row_cols: Vec<BTreeSet<usize>>,
    /// For each column, the set of rows with a 1 entry.
    col_rows: Vec<BTreeSet<usize>>,
}

impl KernelMatrix {
    /// Build the matrix from kernel/co-kernel pairs (§4.C).
    pub fn build(pairs: &[(Cube, Expr)]) -> Self {
        let mut rows: IndexSet<Cube> = IndexSet::new();
        let mut cols: IndexSet<Cube> = IndexSet::new();
        let mut cells = BTreeSet::new();

        for (co_kernel, kernel) in pairs {
            let (row_idx, _) = rows.insert_full(co_kernel.clone());
            for cube in kernel.cubes() {
                let (col_idx, _) = cols.insert_full(cube.clone());
                cells.insert((row_idx, col_idx));
            }
        }

        let mut row_cols = vec![BTreeSet::new(); rows.len()];
        let mut col_rows = vec![BTreeSet::new(); cols.len()];
        for &(r, c) in &cells {
            row_cols[r].insert(c);
            col_rows[c].insert(r);
        }

        KernelMatrix {
            rows,
            cols,
            cells,
            row_cols,
            col_rows,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    pub fn row_label(&self, row: usize) -> &Cube {
        &self.rows[row]
    }

    pub fn col_label(&self, col: usize) -> &Cube {
        &self.cols[col]
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Rows with a 1 entry in column `col`.
    pub fn rows_of_col(&self, col: usize) -> &BTreeSet<usize> {
        &self.col_rows[col]
    }

    /// Columns with a 1 entry in row `row`.
    pub fn cols_of_row(&self, row: usize) -> &BTreeSet<usize> {
        &self.row_cols[row]
    }

    pub fn col_literal_count(&self, col: usize) -> usize {
        self.cols[col].len()
    }

    pub fn row_literal_count(&self, row: usize) -> usize {
        self.rows[row].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::kernels;
    use crate::literal::Literal;

    fn cube(lits: &[&str]) -> Cube {
        Cube::from_literals(lits.iter().map(|s| Literal::new(*s)))
    }

    fn expr(cubes: &[&[&str]]) -> Expr {
        Expr::from_cubes(cubes.iter().map(|c| cube(c)))
    }

    #[test]
    fn matrix_has_one_row_per_distinct_co_kernel() {
        let e = expr(&[&["a", "b"], &["a", "c"], &["b", "d"], &["c", "d"]]);
        let pairs = kernels(&e);
        let m = KernelMatrix::build(&pairs);
        assert_eq!(m.num_rows(), pairs.len());
    }

    #[test]
    fn every_kernel_cube_becomes_a_column_flagged_in_its_row() {
        let e = expr(&[&["a", "b"], &["a", "c"], &["a", "d"]]);
        let pairs = kernels(&e);
        let m = KernelMatrix::build(&pairs);
        // Single kernel (b + c + d) with co-kernel a: 3 columns, one row.
        assert_eq!(m.num_rows(), 1);
        assert_eq!(m.num_cols(), 3);
        for col in 0..m.num_cols() {
            assert!(m.is_set(0, col));
        }
    }
}
