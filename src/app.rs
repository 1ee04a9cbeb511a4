//! Terminal host: raw-mode key polling, the fixed-interval tick timer,
//! and drawing. The engine itself never touches the terminal.

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::board::Coord;
use crate::direction::Direction;
use crate::engine::{CellKind, Game, TickOutcome};

pub struct App {
    game: Game,
    tick_period: Duration,
    status: &'static str,
}

impl App {
    pub fn new(size: usize, tick_ms: u64) -> Self {
        Self {
            game: Game::new(size),
            tick_period: Duration::from_millis(tick_ms),
            status: "",
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), Hide)?;

        let result = self.event_loop();

        terminal::disable_raw_mode()?;
        execute!(stdout(), Show)?;
        println!("\nThanks for playing! Final score: {}", self.game.score());
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut last_update = Instant::now();
        self.draw()?;

        loop {
            // Handle input between ticks; requests only set the pending
            // direction, consumed at the start of the next tick.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c');
                    if key.code == KeyCode::Char('q') || ctrl_c {
                        return Ok(());
                    }
                    if let Some(direction) = Direction::from_key(key.code) {
                        self.game.request_direction(direction);
                    }
                }
            }

            if last_update.elapsed() >= self.tick_period {
                match self.game.tick() {
                    TickOutcome::Moved => {}
                    TickOutcome::Ate => self.status = "",
                    TickOutcome::GameOver => self.status = "Crashed! Starting over",
                    TickOutcome::Won => self.status = "Board cleared! Starting over",
                }
                self.draw()?;
                last_update = Instant::now();
            }
        }
    }

    fn draw(&self) -> Result<()> {
        let mut stdout = stdout();
        let size = self.game.board().size() as u16;
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        // Border rows above and below the playfield.
        for x in 0..size + 2 {
            execute!(stdout, MoveTo(x, 0), Print("#"))?;
            execute!(stdout, MoveTo(x, size + 1), Print("#"))?;
        }

        let head = self.game.snake().head().coord;
        for row in 0..size {
            execute!(stdout, MoveTo(0, row + 1), Print("#"))?;
            for col in 0..size {
                let coord = Coord::new(row as i32, col as i32);
                let cell = self.game.board().cell_at(coord);
                let (glyph, color) = match self.game.cell_kind(cell) {
                    CellKind::Snake if coord == head => ('O', Color::Green),
                    CellKind::Snake => ('o', Color::Green),
                    CellKind::Food => ('*', Color::Red),
                    CellKind::ReversalFood => ('*', Color::Magenta),
                    CellKind::Empty => (' ', Color::Reset),
                };
                execute!(
                    stdout,
                    MoveTo(col + 1, row + 1),
                    SetForegroundColor(color),
                    Print(glyph),
                    ResetColor
                )?;
            }
            execute!(stdout, MoveTo(size + 1, row + 1), Print("#"))?;
        }

        execute!(
            stdout,
            MoveTo(0, size + 2),
            Print(format!("Score: {}  {}", self.game.score(), self.status)),
            MoveTo(0, size + 3),
            Print("Arrow keys or WASD to move, 'q' to quit")
        )?;

        stdout.flush()?;
        Ok(())
    }
}
