//! The game engine: one struct owning the whole simulation state, advanced
//! one tick at a time by the host's timer. Wall hits and self-collisions
//! are not errors; they reset the game to its starting configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Cell, Coord};
use crate::direction::Direction;
use crate::food::{self, Food};
use crate::snake::{Segment, SnakeBody};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved one cell, nothing eaten.
    Moved,
    /// Ate the food (the snake may also have grown and reversed).
    Ate,
    /// Hit a wall or itself; the game was reset.
    GameOver,
    /// Ate the food and no free cell remained for the next one; the
    /// board was cleared and the game was reset.
    Won,
}

/// Visual classification of one cell, for the renderer. Snake membership
/// wins over food styling if both would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Snake,
    Food,
    ReversalFood,
}

pub struct Game {
    board: Board,
    snake: SnakeBody,
    food: Food,
    direction: Direction,
    // Single-slot pending direction, consumed at the start of each tick.
    pending_direction: Direction,
    score: u32,
    rng: StdRng,
}

impl Game {
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Deterministic game for tests and reproducible runs.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, rng: StdRng) -> Self {
        assert!(size >= 5, "board size must be at least 5");
        let board = Board::new(size);
        let snake = SnakeBody::new(Self::starting_segment(&board));
        let food = Self::starting_food(&snake);
        Self {
            board,
            snake,
            food,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            rng,
        }
    }

    // One segment roughly a third of the way into the board.
    fn starting_segment(board: &Board) -> Segment {
        let third = ((board.size() + 1) / 3) as i32;
        let coord = Coord::new(third, third);
        Segment::new(coord, board.cell_at(coord))
    }

    // Starting food sits a fixed 5 cell ids past the starting segment.
    fn starting_food(snake: &SnakeBody) -> Food {
        Food::new(snake.head().cell + 5, false)
    }

    fn reset(&mut self) {
        self.snake = SnakeBody::new(Self::starting_segment(&self.board));
        self.food = Self::starting_food(&self.snake);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
    }

    /// Record a direction request; it takes effect on the next tick.
    /// Reversing into the body (the opposite of the current direction
    /// while longer than one segment) is ignored.
    pub fn request_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() && self.snake.len() > 1 {
            return;
        }
        self.pending_direction = requested;
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        self.direction = self.pending_direction;

        let candidate = self.direction.step(self.snake.head().coord);
        if self.board.is_out_of_bounds(candidate) {
            self.reset();
            return TickOutcome::GameOver;
        }
        let candidate_cell = self.board.cell_at(candidate);
        if self.snake.occupies(candidate_cell) {
            self.reset();
            return TickOutcome::GameOver;
        }

        self.snake.move_head(Segment::new(candidate, candidate_cell));

        if candidate_cell != self.food.cell {
            return TickOutcome::Moved;
        }

        self.grow();
        if self.food.reverses {
            self.reverse();
        }
        self.score += 1;

        match food::place(
            &mut self.rng,
            self.snake.cells(),
            self.food.cell,
            self.board.size(),
        ) {
            Some(next) => {
                self.food = next;
                TickOutcome::Ate
            }
            None => {
                self.reset();
                TickOutcome::Won
            }
        }
    }

    // Extend the tail by one segment, away from its direction of travel.
    // Skipped when the growth coordinate falls off the board.
    fn grow(&mut self) {
        let Some(coord) = self.snake.growth_coord(self.direction) else {
            return;
        };
        if self.board.is_out_of_bounds(coord) {
            return;
        }
        self.snake
            .grow_tail(Segment::new(coord, self.board.cell_at(coord)));
    }

    // The old tail becomes the head; travel continues out the far end.
    fn reverse(&mut self) {
        let tail = self.snake.tail();
        let tail_ward = Direction::between(
            tail.coord,
            self.snake.tail_next().map(|s| s.coord),
            self.direction,
        );
        if let Some(dir) = tail_ward {
            self.direction = dir.opposite();
            // A stale pending request must not undo the reversal.
            self.pending_direction = self.direction;
        }
        self.snake.reverse();
    }

    /// How a cell should be drawn.
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if self.snake.occupies(cell) {
            CellKind::Snake
        } else if cell == self.food.cell {
            if self.food.reverses {
                CellKind::ReversalFood
            } else {
                CellKind::Food
            }
        } else {
            CellKind::Empty
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
