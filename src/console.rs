#![cfg(feature = "std")]

//! Console host: line-based input and text rendering of boards.

use std::fmt::Write as _;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::board::{Board, CellView};
use crate::common::{InputClosed, PlacementError};
use crate::input::InputSource;
use crate::placement::PlacementStrategy;
use crate::ship::{Orientation, ShipId};

/// [`InputSource`] reading answers line by line and writing prompts and feedback.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, InputClosed> {
        let _ = write!(self.writer, "{}", prompt);
        let _ = self.writer.flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }
}

/// Accepts `h`/`horizontal`/`2` and `v`/`vertical`/`1`, case-insensitive.
pub fn parse_orientation(text: &str) -> Option<Orientation> {
    match text.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" | "2" => Some(Orientation::Horizontal),
        "v" | "vertical" | "1" => Some(Orientation::Vertical),
        _ => None,
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn request_int(&mut self, prompt: &str) -> Result<i64, InputClosed> {
        loop {
            let line = self.ask(prompt)?;
            match line.parse() {
                Ok(v) => return Ok(v),
                Err(_) => self.notify(&format!("✗ '{}' is not a number", line)),
            }
        }
    }

    fn request_orientation(&mut self, prompt: &str) -> Result<Orientation, InputClosed> {
        loop {
            let line = self.ask(prompt)?;
            match parse_orientation(&line) {
                Some(o) => return Ok(o),
                None => self.notify(&format!("✗ Invalid orientation '{}' - use H or V", line)),
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{}", message);
    }
}

fn cell_char(view: CellView) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Ship => 'S',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
    }
}

/// Render a board as text using only [`Board::cell_view`]. Columns are `x`, rows are `y`.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..size {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{:>3} ", y);
        for x in 0..size {
            let ch = board.cell_view(x, y).map_or(' ', cell_char);
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    if board.is_hidden() {
        out.push_str("Legend: X=Hit  o=Miss  .=Unknown\n");
    } else {
        out.push_str("Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    }
    out
}

/// The opponent's board (top) and the player's own board (bottom), with ship status.
pub fn render_player_view(own: &Board, opponent: &Board) -> String {
    let mut out = String::from("Opponent board:\n");
    out.push_str(&render_board(opponent));
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(own));
    out.push_str("\nShips:\n");
    for ship in own.fleet() {
        let status = if ship.is_destroyed() { "SUNK" } else { "Active" };
        let _ = writeln!(out, "  {} ({}): {}", ship.kind(), ship.length(), status);
    }
    out
}

/// Wraps a placement strategy and sends the rendered board to `input` after every
/// ship it places, so a human sees their fleet grow.
pub struct BoardEcho<P, I> {
    inner: P,
    input: I,
}

impl<P: PlacementStrategy, I: InputSource> BoardEcho<P, I> {
    pub fn new(inner: P, input: I) -> Self {
        Self { inner, input }
    }

    pub fn into_inner(self) -> (P, I) {
        (self.inner, self.input)
    }
}

impl<P: PlacementStrategy, I: InputSource> PlacementStrategy for BoardEcho<P, I> {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<(), PlacementError> {
        self.inner.place_ship(rng, board, ship)?;
        self.input.notify(&render_board(board));
        Ok(())
    }
}
