use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of tiles, the output unit of a decomposition.
///
/// Coordinates and extents are in tile units: `x` is the leftmost column,
/// `y` the topmost row. A rectangle produced by the decomposer always has
/// `width >= 1` and `height >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    /// Iterate the covered cells as `(row, col)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |row| (x..right).map(move |col| (row, col)))
    }
}

/// The serializable result of one decomposition run, as consumed by
/// physics tooling. Dimensions are in tiles, `tile_size` in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliderSet {
    pub map_width: u32,
    pub map_height: u32,
    pub tile_size: u32,
    pub colliders: Vec<Rect>,
}

impl ColliderSet {
    pub fn new(map_width: u32, map_height: u32, tile_size: u32, colliders: Vec<Rect>) -> Self {
        Self {
            map_width,
            map_height,
            tile_size,
            colliders,
        }
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Total number of tiles covered by all colliders.
    pub fn covered_area(&self) -> u64 {
        self.colliders.iter().map(Rect::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_extents() {
        let r = Rect::new(2, 1, 3, 2);
        assert_eq!(r.right(), 5);
        assert_eq!(r.bottom(), 3);
        assert_eq!(r.area(), 6);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(2, 1, 3, 2);
        assert!(r.contains(1, 2));
        assert!(r.contains(2, 4));
        assert!(!r.contains(0, 2));
        assert!(!r.contains(1, 5));
        assert!(!r.contains(3, 2));
    }

    #[test]
    fn test_rect_cells_row_major() {
        let r = Rect::new(1, 0, 2, 2);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_collider_set_area() {
        let set = ColliderSet::new(4, 3, 32, vec![Rect::new(0, 0, 4, 1), Rect::new(0, 1, 1, 2)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.covered_area(), 6);
    }
}
