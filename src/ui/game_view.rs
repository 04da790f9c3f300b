use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use super::board_widget::{render_board, Palette};
use crate::config::DisplayConfig;
use crate::error::PlaceError;
use crate::game::{Board, GameState, Player, Renderer};

/// Line-oriented game view writing to any terminal-like sink.
pub struct ConsoleView<W: Write> {
    out: W,
    palette: Palette,
    clear_screen: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, config: &DisplayConfig) -> Self {
        ConsoleView {
            out,
            palette: Palette::from_config(config),
            clear_screen: config.clear_screen,
        }
    }

    /// Plain text output without colours or screen clearing.
    #[cfg(test)]
    pub(crate) fn plain(out: W) -> Self {
        ConsoleView {
            out,
            palette: Palette::plain(),
            clear_screen: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    /// Write a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.out, "{}", render_board(board, &self.palette))
    }
}

impl<W: Write> Renderer for ConsoleView<W> {
    fn turn_started(&mut self, board: &Board, player: &Player) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "{} is playing!", player.name())?;
        self.board(board)?;
        self.prompt("Insert column: ")
    }

    fn move_rejected(&mut self, _player: &Player, error: &PlaceError) -> io::Result<()> {
        log::trace!("rejected move shown to player: {error}");
        self.prompt("Invalid input! Try again: ")
    }

    fn game_finished(&mut self, board: &Board, state: &GameState) -> io::Result<()> {
        self.clear()?;
        self.board(board)?;
        match state {
            GameState::Won(winner) => writeln!(self.out, "{} won the game!", winner.name())?,
            GameState::Tied => writeln!(self.out, "It's a tie!")?,
            GameState::InProgress => {}
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_turn_started_shows_player_board_and_prompt() {
        let mut view = ConsoleView::plain(Vec::new());
        let player = Player::new("Ada", Token::First);
        view.turn_started(&Board::new(), &player).unwrap();

        let text = output(view);
        assert!(text.starts_with("Ada is playing!\n1 2 3 4 5 6 7\n"));
        assert!(text.ends_with("Insert column: "));
    }

    #[test]
    fn test_move_rejected_reprompts() {
        let mut view = ConsoleView::plain(Vec::new());
        let player = Player::new("Ada", Token::First);
        view.move_rejected(&player, &PlaceError::ColumnFull(2)).unwrap();
        assert_eq!(output(view), "Invalid input! Try again: ");
    }

    #[test]
    fn test_game_finished_messages() {
        let board = Board::new();

        let mut view = ConsoleView::plain(Vec::new());
        let winner = Player::new("Bob", Token::Second);
        view.game_finished(&board, &GameState::Won(winner)).unwrap();
        assert!(output(view).ends_with("Bob won the game!\n"));

        let mut view = ConsoleView::plain(Vec::new());
        view.game_finished(&board, &GameState::Tied).unwrap();
        assert!(output(view).ends_with("It's a tie!\n"));
    }

    #[test]
    fn test_clear_screen_emits_escape() {
        let config = DisplayConfig {
            color: false,
            ..DisplayConfig::default()
        };
        let mut view = ConsoleView::new(Vec::new(), &config);
        view.game_finished(&Board::new(), &GameState::Tied).unwrap();
        assert!(output(view).starts_with('\u{1b}'));
    }
}
