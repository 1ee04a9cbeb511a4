//! Pure direction arithmetic: stepping a coordinate, key decoding,
//! opposites, and the direction between two adjacent segments.

use crossterm::event::KeyCode;

use crate::board::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Coordinate one step in this direction. No bounds checking; the
    /// caller validates the result against the board.
    pub fn step(self, coord: Coord) -> Coord {
        match self {
            Direction::Up => Coord::new(coord.row - 1, coord.col),
            Direction::Right => Coord::new(coord.row, coord.col + 1),
            Direction::Down => Coord::new(coord.row + 1, coord.col),
            Direction::Left => Coord::new(coord.row, coord.col - 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Decode a key press into a direction request. Arrows and WASD;
    /// anything else is not a direction.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            _ => None,
        }
    }

    /// Direction from `from` to an orthogonally adjacent `to`. Returns
    /// `None` when the pair is not one step apart along an axis, and the
    /// fallback when `to` is absent (the chain ends at `from`).
    pub fn between(from: Coord, to: Option<Coord>, fallback: Direction) -> Option<Direction> {
        let Some(to) = to else {
            return Some(fallback);
        };
        if to.row == from.row && to.col == from.col + 1 {
            Some(Direction::Right)
        } else if to.row == from.row && to.col == from.col - 1 {
            Some(Direction::Left)
        } else if to.col == from.col && to.row == from.row + 1 {
            Some(Direction::Down)
        } else if to.col == from.col && to.row == from.row - 1 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_unit() {
        let coord = Coord::new(5, 5);
        assert_eq!(Direction::Up.step(coord), Coord::new(4, 5));
        assert_eq!(Direction::Down.step(coord), Coord::new(6, 5));
        assert_eq!(Direction::Left.step(coord), Coord::new(5, 4));
        assert_eq!(Direction::Right.step(coord), Coord::new(5, 6));
    }

    #[test]
    fn step_can_leave_the_board() {
        assert_eq!(Direction::Up.step(Coord::new(0, 0)), Coord::new(-1, 0));
        assert_eq!(Direction::Left.step(Coord::new(0, 0)), Coord::new(0, -1));
    }

    #[test]
    fn opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn key_decoding() {
        assert_eq!(Direction::from_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Char('S')), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::Char('x')), None);
        assert_eq!(Direction::from_key(KeyCode::Enter), None);
    }

    #[test]
    fn between_adjacent_coords() {
        let from = Coord::new(5, 5);
        let fb = Direction::Up;
        assert_eq!(
            Direction::between(from, Some(Coord::new(5, 6)), fb),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(from, Some(Coord::new(5, 4)), fb),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::between(from, Some(Coord::new(6, 5)), fb),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::between(from, Some(Coord::new(4, 5)), fb),
            Some(Direction::Up)
        );
    }

    #[test]
    fn between_non_adjacent_is_none() {
        let from = Coord::new(5, 5);
        assert_eq!(Direction::between(from, Some(Coord::new(6, 6)), Direction::Up), None);
        assert_eq!(Direction::between(from, Some(Coord::new(5, 7)), Direction::Up), None);
        assert_eq!(Direction::between(from, Some(from), Direction::Up), None);
    }

    #[test]
    fn between_missing_neighbor_uses_fallback() {
        let from = Coord::new(5, 5);
        assert_eq!(Direction::between(from, None, Direction::Left), Some(Direction::Left));
    }
}
