use std::{process::exit, thread::sleep, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

use crate::arena::Arena;
use crate::config::{Config, ConfigError};
use crate::grid::CellKind;
use crate::snake::Direction::{self, *};
use crate::term::Screen;

/// The frame clock runs at 100 Hz; the simulation gates its own grid-steps
/// internally, so this rate is independent of the step interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(10);

const BORDER_CHAR: char = '▒';
const EMPTY_CHAR: char = ' ';
const APPLE_CHAR: char = 'O';
const SNAKE_BODY_CHAR: char = '█';

pub struct Game {
    arena: Arena,
    screen: Screen,
    paused: bool,
}

impl Game {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let arena = Arena::new(config)?;
        let (rows, cols) = config.dimensions()?;
        let screen = Screen::new(cols, rows)?;

        Ok(Game { arena, screen, paused: false })
    }

    /// Runs until the user hits CTRL+C. Every frame: drain input, advance
    /// the simulation by the nominal frame time, repaint.
    pub fn run(&mut self) {
        self.screen.setup();
        self.show_intro();

        loop {
            sleep(FRAME_INTERVAL);

            for key_ev in self.screen.read_key_events_queue() {
                self.handle_key(&key_ev);
            }

            if self.paused {
                continue;
            }

            self.arena.update(FRAME_INTERVAL);
            self.draw_frame();
        }
    }

    fn handle_key(&mut self, ev: &KeyEvent) {
        if is_ctrl_c(ev) {
            self.clean_exit();
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => self.change_direction(Up),
            KeyCode::Char('a') | KeyCode::Left => self.change_direction(Left),
            KeyCode::Char('s') | KeyCode::Down => self.change_direction(Down),
            KeyCode::Char('d') | KeyCode::Right => self.change_direction(Right),
            KeyCode::Char(' ') => self.arena.restart(),
            KeyCode::Esc => self.toggle_pause(),
            _ => {}
        }
    }

    fn change_direction(&mut self, dir: Direction) {
        if !self.paused {
            self.arena.change_direction(dir);
        }
    }

    fn draw_frame(&mut self) {
        let snap = self.arena.snapshot();

        for row in 0..snap.grid.rows() {
            for col in 0..snap.grid.cols() {
                let ch = match snap.grid.kind_at((col, row)) {
                    CellKind::Border => BORDER_CHAR,
                    CellKind::Empty => EMPTY_CHAR,
                    CellKind::Apple => APPLE_CHAR,
                };
                self.screen.draw_cell((col, row), ch);
            }
        }

        for seg in snap.snake.body() {
            self.screen.draw_cell(seg.pos, SNAKE_BODY_CHAR);
        }
        self.screen.draw_cell(snap.snake.head().pos, head_char(snap.snake.head().dir));

        self.screen.draw_score(snap.score);
        self.screen.flush();
    }

    fn show_intro(&mut self) {
        self.screen.show_overlay(&[
            "Arrow keys or WASD to move",
            "Space to restart",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ]);

        if is_ctrl_c(&self.screen.read_key_blocking()) {
            self.clean_exit();
        }

        self.screen.clear();
    }

    fn toggle_pause(&mut self) {
        if !self.paused {
            self.screen.show_overlay(&["Paused", "Press Esc to resume", "or CTRL+C to quit"]);
        } else {
            // The next frame repaints the whole board over the overlay.
            self.screen.clear();
        }

        self.paused = !self.paused;
    }

    fn clean_exit(&mut self) {
        info!("exiting");
        self.screen.restore();
        exit(0);
    }
}

fn head_char(dir: Direction) -> char {
    match dir {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
