use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::config::ConfigError;
use crate::{Coords, GridInt};

/// Terminal backend for the renderer. Knows the board dimensions so callers
/// draw in grid coordinates; grid Y grows upward while the terminal's grows
/// downward, so rows are flipped on the way out.
pub struct Screen {
    board_cols: GridInt,
    board_rows: GridInt,
    stdout: Stdout,
}

impl Screen {
    /// Fails when the terminal window cannot fit the whole board.
    pub fn new(board_cols: GridInt, board_rows: GridInt) -> Result<Self, ConfigError> {
        let (term_cols, term_rows) = terminal::size().expect("Error reading size.");

        if term_cols < board_cols || term_rows < board_rows {
            return Err(ConfigError::TerminalTooSmall {
                need: (board_cols, board_rows),
                have: (term_cols, term_rows),
            });
        }

        Ok(Screen {
            board_cols,
            board_rows,
            stdout: stdout(),
        })
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Queues one character at a grid cell; call `flush` once per frame.
    pub fn draw_cell(&mut self, (col, row): Coords, ch: char) {
        let screen_row = self.board_rows - 1 - row;
        queue!(self.stdout, cursor::MoveTo(col, screen_row), style::Print(ch)).unwrap();
    }

    /// The score sits on the top border row, like the original's label.
    pub fn draw_score(&mut self, score: u32) {
        let text = format!(" Score: {} ", score);
        queue!(self.stdout, cursor::MoveTo(2, 0), style::Print(text)).unwrap();
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    /// Centered text overlay on top of the board. Nothing is saved under it;
    /// the next full frame repaints whatever it covered.
    pub fn show_overlay(&mut self, lines: &[&str]) {
        let height = lines.len() as GridInt + 2;
        let width = (lines.iter().map(|x| x.len()).max().unwrap() + 2) as GridInt;
        let left = self.board_cols.saturating_sub(width) / 2;
        let top = self.board_rows.saturating_sub(height) / 2;

        for (i, line) in std::iter::once(&"").chain(lines).chain(std::iter::once(&"")).enumerate() {
            let padded = format!("{: ^width$}", line, width = width as usize);
            queue!(
                self.stdout,
                cursor::MoveTo(left, top + i as GridInt),
                style::Print(padded)
            )
            .unwrap();
        }

        self.flush();
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    /// Drains every key event currently pending, without blocking.
    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
