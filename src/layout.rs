use serde::Serialize;

// ---------------------------------------------------------------------------
// Grid sizing
// ---------------------------------------------------------------------------

/// How many rows to reserve for a given number of panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowRule {
    /// `count / columns + 1`: always one row more than a full grid needs
    /// when `count` is a multiple of `columns`.
    #[default]
    ExtraRow,
    /// `ceil(count / columns)`, at least one row.
    Tight,
}

/// Rectangular grid holding `count` panels, filled left-to-right then
/// top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub count: usize,
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// `columns` must be non-zero.
    pub fn new(count: usize, columns: usize, rule: RowRule) -> Self {
        debug_assert!(columns > 0, "grid needs at least one column");
        let rows = match rule {
            RowRule::ExtraRow => count / columns + 1,
            RowRule::Tight => count.div_ceil(columns).max(1),
        };
        GridLayout {
            count,
            columns,
            rows,
        }
    }

    /// Zero-based (row, column) cell for the zero-based panel `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// One-based subplot position for the zero-based panel `index`.
    pub fn position(&self, index: usize) -> usize {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_row_sizing() {
        let rows = |n| GridLayout::new(n, 3, RowRule::ExtraRow).rows;
        assert_eq!(rows(0), 1);
        assert_eq!(rows(1), 1);
        assert_eq!(rows(3), 2);
        assert_eq!(rows(5), 2);
        assert_eq!(rows(6), 3);
    }

    #[test]
    fn tight_sizing() {
        let rows = |n| GridLayout::new(n, 3, RowRule::Tight).rows;
        assert_eq!(rows(0), 1);
        assert_eq!(rows(3), 1);
        assert_eq!(rows(4), 2);
        assert_eq!(rows(6), 2);
    }

    #[test]
    fn cells_fill_rows_first() {
        let grid = GridLayout::new(5, 3, RowRule::ExtraRow);
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(2), (0, 2));
        assert_eq!(grid.cell(3), (1, 0));
        assert_eq!(grid.position(4), 5);
        assert!(grid.rows * grid.columns >= grid.count);
    }
}
