//! The board grid: a fixed-size table assigning every (row, col) position
//! a unique cell id, row-major starting at 1.

/// Unique integer id of one board position.
pub type Cell = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Immutable coordinate -> cell-id table. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| (row * size + col + 1) as Cell)
                    .collect()
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell id at an in-bounds coordinate. Check bounds first.
    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.cells[coord.row as usize][coord.col as usize]
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        coord.row < 0
            || coord.col < 0
            || coord.row >= self.size as i32
            || coord.col >= self.size as i32
    }
}
