use std::io;

use log::{debug, info};

use super::{Board, Player, Token};
use crate::error::{GameError, MoveError, PlaceError};

/// Result of the most recent move, derived from the board after each placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(Player),
    Tied,
}

/// Supplies raw column input for the active player.
pub trait MoveSource {
    /// Ask `player` for a column. `retry` is set after a rejected move.
    /// Returns `None` once the input is exhausted.
    fn next_column(&mut self, player: &Player, retry: bool) -> io::Result<Option<String>>;
}

/// Read-only view of the game as it progresses.
pub trait Renderer {
    fn turn_started(&mut self, board: &Board, player: &Player) -> io::Result<()>;

    fn move_rejected(&mut self, player: &Player, error: &PlaceError) -> io::Result<()>;

    fn game_finished(&mut self, board: &Board, state: &GameState) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    AwaitingMove(Token),
    Finished(GameState),
}

/// Turn controller: two players taking turns on one board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    phase: Phase,
}

/// Parse raw move input into a one-based column.
///
/// Only the leading integer counts, so `"3abc"` and `"4.0"` both yield a
/// column. Input without leading digits, or with a negative value, maps to 0,
/// which the board rejects as out of range.
pub fn parse_column(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse() {
        Ok(column) if !negative => column,
        _ => 0,
    }
}

impl Game {
    /// Set up a game between two named players. The first player moves first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let players = [
            Player::new(first, Token::First),
            Player::new(second, Token::Second),
        ];
        info!(
            "new game: {} (first) vs {} (second)",
            players[0].name(),
            players[1].name()
        );

        Game {
            board: Board::new(),
            players,
            phase: Phase::AwaitingMove(Token::First),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get the player owning `token`
    pub fn player(&self, token: Token) -> &Player {
        match token {
            Token::First => &self.players[0],
            Token::Second => &self.players[1],
        }
    }

    /// The player to move, or `None` once the game is over
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::AwaitingMove(token) => Some(self.player(token)),
            Phase::Finished(_) => None,
        }
    }

    pub fn state(&self) -> GameState {
        match &self.phase {
            Phase::AwaitingMove(_) => GameState::InProgress,
            Phase::Finished(state) => state.clone(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Play the active player's raw column input.
    ///
    /// A rejected placement leaves the turn with the same player. A winning
    /// or board-filling placement finishes the game, after which every
    /// further move is refused with [`MoveError::GameOver`].
    pub fn play_column(&mut self, raw: &str) -> Result<GameState, MoveError> {
        let Phase::AwaitingMove(token) = self.phase else {
            return Err(MoveError::GameOver);
        };

        let column = parse_column(raw);
        let last_move = self.board.place(column, token)?;
        debug!(
            "{} placed at row {} col {}",
            self.player(token).name(),
            last_move.row,
            last_move.col
        );

        let state = if self.board.has_four_in_a_row(Some(last_move), token) {
            GameState::Won(self.player(token).clone())
        } else if self.board.is_full() {
            GameState::Tied
        } else {
            GameState::InProgress
        };

        self.phase = match &state {
            GameState::InProgress => Phase::AwaitingMove(token.other()),
            finished => Phase::Finished(finished.clone()),
        };

        Ok(state)
    }

    /// Drive the game to completion, asking `input` for moves and reporting
    /// progress to `renderer`.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<GameState, GameError>
    where
        I: MoveSource + ?Sized,
        R: Renderer + ?Sized,
    {
        while let Phase::AwaitingMove(token) = self.phase {
            let player = self.player(token).clone();
            renderer.turn_started(&self.board, &player)?;

            let mut retry = false;
            loop {
                let raw = input
                    .next_column(&player, retry)?
                    .ok_or(GameError::InputClosed)?;

                match self.play_column(&raw) {
                    Ok(_) => break,
                    Err(MoveError::Place(err)) => {
                        debug!("{} rejected: {}", player.name(), err);
                        renderer.move_rejected(&player, &err)?;
                        retry = true;
                    }
                    Err(MoveError::GameOver) => break,
                }
            }
        }

        let state = self.state();
        match &state {
            GameState::Won(winner) => info!("{} won the game", winner.name()),
            GameState::Tied => info!("game tied"),
            GameState::InProgress => {}
        }
        renderer.game_finished(&self.board, &state)?;

        Ok(state)
    }
}
