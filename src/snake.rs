//! The snake body: an ordered chain of segments with the head at the
//! front, plus a cell-id set kept in lockstep for O(1) collision checks.

use std::collections::{HashSet, VecDeque};

use crate::board::{Cell, Coord};
use crate::direction::Direction;

/// One unit of snake body occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub coord: Coord,
    pub cell: Cell,
}

impl Segment {
    pub fn new(coord: Coord, cell: Cell) -> Self {
        Self { coord, cell }
    }
}

/// Ordered chain of segments, head at the front, tail at the back.
/// Every mutation updates the occupied-cell set in the same call, so the
/// set always equals the chain's cells exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Segment>,
    occupied: HashSet<Cell>,
}

impl SnakeBody {
    pub fn new(start: Segment) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);
        let mut occupied = HashSet::new();
        occupied.insert(start.cell);
        Self { segments, occupied }
    }

    pub fn head(&self) -> Segment {
        *self.segments.front().unwrap()
    }

    pub fn tail(&self) -> Segment {
        *self.segments.back().unwrap()
    }

    /// The segment one step head-ward of the tail, if the chain has one.
    pub fn tail_next(&self) -> Option<Segment> {
        let len = self.segments.len();
        if len < 2 {
            None
        } else {
            Some(self.segments[len - 2])
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Advance by one step: the new segment becomes the head and the old
    /// tail is dropped. Net length unchanged; with a single segment, head
    /// and tail both become the new segment.
    pub fn move_head(&mut self, new_head: Segment) {
        self.segments.push_front(new_head);
        self.occupied.insert(new_head.cell);
        if let Some(dropped) = self.segments.pop_back() {
            self.occupied.remove(&dropped.cell);
        }
    }

    /// Where a new tail segment would go: one step beyond the current
    /// tail, opposite to the direction the tail is travelling. `None`
    /// when the tail pair is not axis-adjacent.
    pub fn growth_coord(&self, fallback: Direction) -> Option<Coord> {
        let tail = self.tail();
        let next = self.tail_next().map(|s| s.coord);
        let tail_dir = Direction::between(tail.coord, next, fallback)?;
        Some(tail_dir.opposite().step(tail.coord))
    }

    /// Append a segment at the tail end. Length grows by one.
    pub fn grow_tail(&mut self, new_tail: Segment) {
        self.occupied.insert(new_tail.cell);
        self.segments.push_back(new_tail);
    }

    /// Invert the chain's order of traversal: the tail becomes the head
    /// and vice versa. One bulk operation; coordinates, cell ids, and the
    /// occupied set are unchanged.
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(row: i32, col: i32, cell: Cell) -> Segment {
        Segment::new(Coord::new(row, col), cell)
    }

    #[test]
    fn single_segment_head_and_tail_coincide() {
        let body = SnakeBody::new(seg(5, 5, 81));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), body.tail());
        assert_eq!(body.tail_next(), None);
        assert!(body.occupies(81));
    }

    #[test]
    fn move_head_keeps_length_and_set_in_sync() {
        let mut body = SnakeBody::new(seg(5, 5, 81));
        body.move_head(seg(5, 6, 82));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), seg(5, 6, 82));
        assert!(!body.occupies(81));
        assert!(body.occupies(82));

        body.grow_tail(seg(5, 5, 81));
        body.move_head(seg(5, 7, 83));
        assert_eq!(body.len(), 2);
        assert_eq!(body.head(), seg(5, 7, 83));
        assert_eq!(body.tail(), seg(5, 6, 82));
        let chain: HashSet<Cell> = body.segments().map(|s| s.cell).collect();
        assert_eq!(&chain, body.cells());
    }

    #[test]
    fn growth_coord_extends_away_from_travel() {
        // Tail at (5,5), next toward head at (5,6): travelling right, so
        // growth goes left to (5,4).
        let mut body = SnakeBody::new(seg(5, 6, 82));
        body.grow_tail(seg(5, 5, 81));
        assert_eq!(body.growth_coord(Direction::Right), Some(Coord::new(5, 4)));
    }

    #[test]
    fn growth_coord_single_segment_uses_fallback() {
        let body = SnakeBody::new(seg(5, 5, 81));
        // Travelling right by fallback; growth extends left.
        assert_eq!(body.growth_coord(Direction::Right), Some(Coord::new(5, 4)));
    }

    #[test]
    fn grow_tail_lengthens_and_records_cell() {
        let mut body = SnakeBody::new(seg(5, 6, 82));
        body.grow_tail(seg(5, 5, 81));
        assert_eq!(body.len(), 2);
        assert_eq!(body.tail(), seg(5, 5, 81));
        assert_eq!(body.tail_next(), Some(seg(5, 6, 82)));
        assert!(body.occupies(81) && body.occupies(82));
    }

    #[test]
    fn reverse_swaps_head_and_tail_only() {
        let mut body = SnakeBody::new(seg(5, 7, 83));
        body.grow_tail(seg(5, 6, 82));
        body.grow_tail(seg(5, 5, 81));
        let cells_before = body.cells().clone();

        body.reverse();

        assert_eq!(body.head(), seg(5, 5, 81));
        assert_eq!(body.tail(), seg(5, 7, 83));
        assert_eq!(body.cells(), &cells_before);
        assert_eq!(body.len(), 3);
        // Middle neighbor of the new tail is unchanged in coordinates.
        assert_eq!(body.tail_next(), Some(seg(5, 6, 82)));
    }
}
