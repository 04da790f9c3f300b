use crossterm::style::{Color, Stylize};

use crate::config::{DisplayConfig, TokenColor};
use crate::game::{Board, Cell, Token, COLS};

const FILLED: &str = "\u{25cf}";
const EMPTY: &str = "\u{25cb}";

/// Glyph styling for the two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
    first: Color,
    second: Color,
}

impl Palette {
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Palette {
            color: false,
            first: Color::Reset,
            second: Color::Reset,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Palette {
            color: config.color,
            first: to_color(config.first_color),
            second: to_color(config.second_color),
        }
    }

    /// Glyph for one cell. Without colour the tokens are told apart by letter.
    pub fn glyph(&self, cell: Cell) -> String {
        match (cell, self.color) {
            (Cell::Empty, _) => EMPTY.to_string(),
            (Cell::Occupied(Token::First), true) => FILLED.with(self.first).to_string(),
            (Cell::Occupied(Token::Second), true) => FILLED.with(self.second).to_string(),
            (Cell::Occupied(Token::First), false) => "X".to_string(),
            (Cell::Occupied(Token::Second), false) => "O".to_string(),
        }
    }
}

fn to_color(color: TokenColor) -> Color {
    match color {
        TokenColor::Yellow => Color::Yellow,
        TokenColor::Blue => Color::Blue,
        TokenColor::Red => Color::Red,
        TokenColor::Green => Color::Green,
        TokenColor::Magenta => Color::Magenta,
        TokenColor::Cyan => Color::Cyan,
        TokenColor::White => Color::White,
    }
}

/// Render the board as text: a column header, then the rows top to bottom.
pub fn render_board(board: &Board, palette: &Palette) -> String {
    let header: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
    let mut lines = vec![header.join(" ")];

    for row in board.rows() {
        let glyphs: Vec<String> = row.iter().map(|&cell| palette.glyph(cell)).collect();
        lines.push(glyphs.join(" "));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
