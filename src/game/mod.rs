//! Core Connect Four game logic: the board engine with gravity placement and
//! win/tie detection, player identities, and the turn controller.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Direction, Position, Window, COLS, ROWS};
pub use player::{is_valid_name, Player, Token, MAX_NAME_LEN};
pub use state::{parse_column, Game, GameState, MoveSource, Renderer};
