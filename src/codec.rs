//! Text format for matrices.
//!
//! One row per line, values separated by whitespace. Reading accepts any
//! run of whitespace between values and skips blank lines; writing uses a
//! single space and terminates every row with `\n`. Values are written with
//! `f64`'s `Display`, which is the shortest form that parses back to the
//! same bits.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{MatfileError, Result};
use crate::matrix::Matrix;

/// Parse a matrix from a buffered reader.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Matrix> {
    let mut data = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let start = data.len();

        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| MatfileError::Parse {
                line: line_no,
                token: token.to_string(),
            })?;
            data.push(value);
        }

        let found = data.len() - start;
        if found == 0 {
            continue;
        }
        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(MatfileError::Shape {
                line: line_no,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    Ok(Matrix::from_vec(rows, cols, data))
}

/// Parse a matrix from an in-memory string.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    read_matrix(text.as_bytes())
}

/// Read a matrix file.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatfileError::file(path, e))?;
    let matrix = read_matrix(BufReader::new(file)).map_err(|e| match e {
        MatfileError::Io(source) => MatfileError::file(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), shape = ?matrix.shape(), "loaded matrix");
    Ok(matrix)
}

/// Text form of the matrix: one line per row, so an `m x 0` matrix is
/// `m` empty lines.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write a matrix in the text format.
pub fn write_matrix<W: Write>(matrix: &Matrix, mut writer: W) -> Result<()> {
    write!(writer, "{}", matrix)?;
    writer.flush()?;
    Ok(())
}

/// Serialize a matrix to a `String`.
pub fn to_text(matrix: &Matrix) -> String {
    matrix.to_string()
}

/// Write a matrix file, replacing any existing contents.
pub fn save_matrix(matrix: &Matrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MatfileError::file(path, e))?;
    write_matrix(matrix, BufWriter::new(file)).map_err(|e| match e {
        MatfileError::Io(source) => MatfileError::file(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), shape = ?matrix.shape(), "saved matrix");
    Ok(())
}
