use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}, column {column}: '{token}' is not an unsigned 32-bit integer")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line}: expected {expected} values, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Matrix – dense row-major u32 grid
// ---------------------------------------------------------------------------

/// A rectangular matrix of unsigned 32-bit values, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Matrix {
    /// Build from explicit rows. Returns `None` if the rows are not all the
    /// same non-zero length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Matrix {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (`row`, `col`), `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.cols)
    }

    /// Smallest and largest value; a matrix always holds at least one value.
    pub fn min_max(&self) -> (u32, u32) {
        self.data
            .iter()
            .fold((u32::MAX, u32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Serialize with `sep` between values and a newline after each row.
    pub fn to_delimited(&self, sep: &str) -> String {
        let mut out = String::new();
        for row in self.row_iter() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join(sep));
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a whitespace-separated matrix file.
pub fn load_matrix(path: &Path) -> Result<Matrix, MatrixError> {
    let text = std::fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&text)
}

/// Parse matrix text: one row per line, values separated by any whitespace.
///
/// Everything from a `#` to the end of its line is a comment, and lines
/// left blank are skipped. Line and column numbers in errors are 1-based.
pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    let mut cols: Option<usize> = None;
    let mut rows = 0usize;
    let mut data = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let before = data.len();
        for (j, tok) in line.split_whitespace().enumerate() {
            let value = tok.parse::<u32>().map_err(|_| MatrixError::Parse {
                line: line_no,
                column: j + 1,
                token: tok.to_string(),
            })?;
            data.push(value);
        }
        let found = data.len() - before;

        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(MatrixError::Ragged {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    match cols {
        Some(cols) => Ok(Matrix { rows, cols, data }),
        None => Err(MatrixError::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_by_three() {
        let m = parse_matrix("1 2 3\n4 5 6\n").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m, Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap());
        assert_eq!(m.get(1, 2), Some(6));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn reserializes_to_same_text() {
        let text = "1 2 3\n4 5 6\n";
        assert_eq!(parse_matrix(text).unwrap().to_delimited(" "), text);
    }

    #[test]
    fn accepts_producer_trailing_tabs() {
        let m = parse_matrix("7\t8\t9\t\n10\t11\t12\t\n").unwrap();
        assert_eq!(m.to_delimited("\t"), "7\t8\t9\n10\t11\t12\n");
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let m = parse_matrix("# header\n\n1 2\n   \n3 4\n").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
    }

    #[test]
    fn strips_trailing_comments() {
        let m = parse_matrix("1 2 # note\n3 4#x\n").unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
        match parse_matrix("1 2\n3 # 4\n") {
            Err(MatrixError::Ragged { line, found, .. }) => assert_eq!((line, found), (2, 1)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn keeps_full_u32_range() {
        let m = parse_matrix("0 4294967295\n").unwrap();
        assert_eq!(m.min_max(), (0, u32::MAX));
    }

    #[test]
    fn rejects_non_numeric_token() {
        match parse_matrix("1 2\n3 x\n") {
            Err(MatrixError::Parse { line, column, token }) => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(parse_matrix("-1\n"), Err(MatrixError::Parse { .. })));
        assert!(matches!(
            parse_matrix("4294967296\n"),
            Err(MatrixError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        match parse_matrix("1 2 3\n\n4 5\n") {
            Err(MatrixError::Ragged {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (3, 3, 2)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_matrix(""), Err(MatrixError::Empty)));
        assert!(matches!(parse_matrix("# only\n\n"), Err(MatrixError::Empty)));
    }

    #[test]
    fn from_rows_requires_rectangle() {
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Matrix::from_rows(vec![]).is_none());
        assert!(Matrix::from_rows(vec![vec![]]).is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_matrix(&dir.path().join("nope.tsv")).unwrap_err();
        assert!(matches!(err, MatrixError::Io { .. }));
    }
}
