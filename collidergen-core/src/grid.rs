use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("solidity data length {len} does not match {width}x{height} grid")]
    LengthMismatch {
        width: u32,
        height: u32,
        len: usize,
    },
    #[error("non-rectangular grid: row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A fixed-size boolean solidity map plus per-cell visited state.
///
/// Storage is flat and row-major (`row * width + col`). The visited map is
/// the mechanism enforcing the disjointness of decomposition output; it is
/// mutated only during a single decomposition pass.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    solid: Vec<bool>,
    visited: Vec<bool>,
}

impl Grid {
    /// Build a grid from a row-major solidity buffer of length
    /// `width * height`.
    pub fn from_row_major(width: u32, height: u32, solid: Vec<bool>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if solid.len() != expected {
            return Err(GridError::LengthMismatch {
                width,
                height,
                len: solid.len(),
            });
        }
        Ok(Self {
            width,
            height,
            visited: vec![false; solid.len()],
            solid,
        })
    }

    /// Build a grid from per-row slices, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        let mut solid = Vec::with_capacity(width as usize * height as usize);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return Err(GridError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                    expected: width as usize,
                });
            }
            solid.extend_from_slice(row);
        }
        Self::from_row_major(width, height, solid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Out-of-range cells read as not solid, so run lookahead can probe
    /// one past the edge without a separate bound check.
    pub fn is_solid(&self, row: u32, col: u32) -> bool {
        self.index(row, col).map_or(false, |i| self.solid[i])
    }

    pub fn is_visited(&self, row: u32, col: u32) -> bool {
        self.index(row, col).map_or(false, |i| self.visited[i])
    }

    /// Idempotent; out-of-range marks are ignored.
    pub fn mark_visited(&mut self, row: u32, col: u32) {
        if let Some(i) = self.index(row, col) {
            self.visited[i] = true;
        }
    }

    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|&&s| s).count()
    }
}
