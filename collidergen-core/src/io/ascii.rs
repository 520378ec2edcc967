//! ASCII grid adapter, mostly for fixtures and hand-authored test maps.
//!
//! One line per row; `#` is solid, `.` is empty. Blank lines and lines
//! starting with `;` are skipped. Rows must all have the same length.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::grid::{Grid, GridError};

#[derive(Debug, Error)]
pub enum AsciiError {
    #[error("unexpected character '{ch}' at line {line}, column {col}")]
    UnexpectedChar { ch: char, line: usize, col: usize },
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse(text: &str) -> Result<Grid, AsciiError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }
        let mut row = Vec::with_capacity(trimmed.len());
        for (col_idx, ch) in trimmed.chars().enumerate() {
            match ch {
                '#' => row.push(true),
                '.' => row.push(false),
                ch => {
                    return Err(AsciiError::UnexpectedChar {
                        ch,
                        line: line_idx + 1,
                        col: col_idx + 1,
                    })
                }
            }
        }
        rows.push(row);
    }
    Ok(Grid::from_rows(&rows)?)
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Grid, AsciiError> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse(&text)?;
    log::info!(
        "loaded ASCII map: {}x{} tiles, {} solid",
        grid.width(),
        grid.height(),
        grid.solid_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_map() {
        let grid = parse("###\n##.\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.solid_count(), 5);
        assert!(!grid.is_solid(1, 2));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let grid = parse("; fixture\n\n#.\n.#\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.solid_count(), 2);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = parse("##\n#\n").unwrap_err();
        assert!(matches!(err, AsciiError::Grid(GridError::RaggedRow { .. })));
    }

    #[test]
    fn test_unexpected_char_is_reported_with_position() {
        let err = parse("#.\n#x\n").unwrap_err();
        match err {
            AsciiError::UnexpectedChar { ch, line, col } => {
                assert_eq!((ch, line, col), ('x', 2, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_an_empty_grid() {
        let grid = parse("").unwrap();
        assert_eq!((grid.width(), grid.height()), (0, 0));
    }
}
