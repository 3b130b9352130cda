use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use chess::{Color, Piece};
use log::{debug, info};
use utils::{piece_symbol, square_at, total_value};

use crate::frame::Frame;

const RESET: &str = "\x1b[0m";
const LIGHT_SQUARE: &str = "\x1b[48;5;180m";
const DARK_SQUARE: &str = "\x1b[48;5;137m";
const HIGHLIGHT_SQUARE: &str = "\x1b[48;5;143m";
const CHECK_SQUARE: &str = "\x1b[48;5;167m";
const PIECE_COLOR: &str = "\x1b[38;5;16m";
const BELL: char = '\x07';

const EVAL_BAR_WIDTH: usize = 24;
const HISTORY_PLIES: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Ring the terminal bell on captures, checks and game end.
    pub sound: bool,
    /// Log one line per ply instead of drawing the board.
    pub quiet: bool,
}

pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Draws frames as they arrive until the sending side hangs up.
    pub fn spawn(self, frames: Receiver<Frame>) -> JoinHandle<()> {
        thread::spawn(move || {
            while let Ok(frame) = frames.recv() {
                if let Err(e) = self.present(&frame) {
                    debug!("Render failed: {}", e);
                }
            }
        })
    }

    fn present(&self, frame: &Frame) -> io::Result<()> {
        if let Some(cue) = frame.cue {
            debug!("Sound cue: {:?}", cue);
        }

        if self.options.quiet {
            self.log_frame(frame);
            return Ok(());
        }

        if let Err(e) = clearscreen::clear() {
            debug!("Failed to clear screen: {}", e);
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(self.draw(frame).as_bytes())?;

        if self.options.sound && frame.cue.map_or(false, |cue| cue.rings()) {
            write!(stdout, "{}", BELL)?;
        }

        stdout.flush()
    }

    fn log_frame(&self, frame: &Frame) {
        for line in quiet_lines(frame) {
            info!("{}", line);
        }
    }

    pub fn draw(&self, frame: &Frame) -> String {
        let mut out = String::with_capacity(2048);

        out.push_str(&format!(
            "Gambit · Game {} · Speed: {}\n\n",
            frame.game_number, frame.speed
        ));

        out.push_str(&player_line(frame, Color::Black));
        out.push_str(&board_lines(frame));
        out.push_str(&player_line(frame, Color::White));
        out.push('\n');

        out.push_str(&eval_bar(frame.white_material, frame.black_material));
        out.push_str(&format!("Opening: {}\n", frame.opening));
        out.push_str(&format!("Status:  {}\n", frame.status));
        out.push_str(&format!("Moves:   {}\n", history_line(&frame.history)));
        out.push_str("\n[r] reset  [s] speed  [q] quit\n");

        out
    }
}

/// Log lines for a frame in quiet mode. Only ply frames carry a cue, so
/// frames republished for a speed change or a new game log nothing.
fn quiet_lines(frame: &Frame) -> Vec<String> {
    let mut lines = Vec::new();
    if frame.cue.is_none() {
        return lines;
    }

    if let Some(san) = frame.history.last() {
        let ply = frame.history.len();
        let prefix = if ply % 2 == 1 {
            format!("{}.", ply.div_ceil(2))
        } else {
            format!("{}...", ply / 2)
        };
        lines.push(format!("[game {}] {} {}", frame.game_number, prefix, san));
    }
    if frame.game_over {
        lines.push(format!(
            "[game {}] {} ({} vs {}, {})",
            frame.game_number, frame.status, frame.white, frame.black, frame.opening
        ));
    }

    lines
}

fn player_line(frame: &Frame, color: Color) -> String {
    let (name, personality, captured) = match color {
        Color::White => ("White", frame.white, &frame.captured_by_white),
        Color::Black => ("Black", frame.black, &frame.captured_by_black),
    };
    let marker = if frame.turn == color && !frame.game_over {
        "▶"
    } else {
        " "
    };

    format!(
        "{} {} ({})  {}\n",
        marker,
        name,
        personality,
        captured_line(captured, !color)
    )
}

/// Pieces taken from `owner`, most valuable first, plus their total.
fn captured_line(captured: &[Piece], owner: Color) -> String {
    if captured.is_empty() {
        return String::new();
    }

    let mut sorted = captured.to_vec();
    sorted.sort_by_key(|&piece| std::cmp::Reverse(utils::piece_value(piece)));

    let symbols: String = sorted
        .iter()
        .map(|&piece| piece_symbol(piece, owner))
        .collect();
    format!("{} +{}", symbols, total_value(captured))
}

fn board_lines(frame: &Frame) -> String {
    let mut out = String::new();

    for (row, cells) in frame.grid.iter().enumerate() {
        out.push_str(&format!("  {} ", 8 - row));
        for (col, cell) in cells.iter().enumerate() {
            let square = square_at(row, col);
            let background = if frame.checked_king == Some(square) {
                CHECK_SQUARE
            } else if frame.is_highlighted(square) {
                HIGHLIGHT_SQUARE
            } else if (row + col) % 2 == 0 {
                LIGHT_SQUARE
            } else {
                DARK_SQUARE
            };

            let glyph = cell
                .map(|(piece, color)| piece_symbol(piece, color))
                .unwrap_or(' ');
            out.push_str(&format!("{}{} {} {}", background, PIECE_COLOR, glyph, RESET));
        }
        out.push('\n');
    }
    out.push_str("     a  b  c  d  e  f  g  h\n");

    out
}

fn eval_bar(white: i16, black: i16) -> String {
    let total = (white + black).max(1) as f32;
    let filled = ((white as f32 / total) * EVAL_BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(EVAL_BAR_WIDTH);

    format!(
        "Eval:    {:.1} {}{} {:.1}\n",
        white as f32,
        "█".repeat(filled),
        "░".repeat(EVAL_BAR_WIDTH - filled),
        black as f32
    )
}

/// Numbered SAN for the most recent plies.
fn history_line(history: &[String]) -> String {
    let skip = history.len().saturating_sub(HISTORY_PLIES);
    // Always start on a white move so numbering stays readable
    let skip = skip + skip % 2;

    let mut line = String::new();
    if skip > 0 {
        line.push_str("… ");
    }
    for (i, san) in history.iter().enumerate().skip(skip) {
        if i % 2 == 0 {
            line.push_str(&format!("{}. ", i / 2 + 1));
        }
        line.push_str(san);
        line.push(' ');
    }

    line.trim_end().to_string()
}
