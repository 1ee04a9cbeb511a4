//! Food placement: rejection sampling over the board's cell ids, with a
//! chance for the food to reverse the snake's direction when eaten.

use std::collections::HashSet;

use rand::Rng;

use crate::board::Cell;

/// Chance that a newly placed food reverses the snake on consumption.
pub const REVERSAL_FOOD_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    /// Drawn at placement time; eating this food reverses the snake.
    pub reverses: bool,
}

impl Food {
    pub fn new(cell: Cell, reverses: bool) -> Self {
        Self { cell, reverses }
    }
}

/// Pick a food cell uniformly from [1, size²], rejecting cells occupied
/// by the snake and the previous food cell. Returns `None` when no such
/// cell exists (snake fills the board up to the reserved previous cell),
/// which callers treat as a cleared board rather than looping forever.
pub fn place<R: Rng>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    previous: Cell,
    board_size: usize,
) -> Option<Food> {
    let total = (board_size * board_size) as Cell;
    let mut free = total as usize - occupied.len();
    if !occupied.contains(&previous) && previous >= 1 && previous <= total {
        free -= 1;
    }
    if free == 0 {
        return None;
    }

    let cell = loop {
        let candidate = rng.gen_range(1..=total);
        if occupied.contains(&candidate) || candidate == previous {
            continue;
        }
        break candidate;
    };
    let reverses = rng.gen_bool(REVERSAL_FOOD_PROBABILITY);
    Some(Food::new(cell, reverses))
}
