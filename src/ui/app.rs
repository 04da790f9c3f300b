use std::io::{BufRead, Write};

use super::console::ConsoleInput;
use super::game_view::ConsoleView;
use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{is_valid_name, Game, GameState};

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App { config }
    }

    /// Set up both players and play one game to completion.
    pub fn run<R, W>(&self, reader: R, writer: W) -> Result<GameState, GameError>
    where
        R: BufRead,
        W: Write,
    {
        let mut input = ConsoleInput::new(reader);
        let mut view = ConsoleView::new(writer, &self.config.display);

        view.message("Welcome to Connect Four Game!")?;
        let first = read_name(&mut input, &mut view)?;
        let second = read_name(&mut input, &mut view)?;

        let mut game = Game::new(first, second);
        game.run(&mut input, &mut view)
    }
}

/// Prompt until a name of 1 to 12 characters is entered.
fn read_name<R: BufRead, W: Write>(
    input: &mut ConsoleInput<R>,
    view: &mut ConsoleView<W>,
) -> Result<String, GameError> {
    view.prompt("Input player name [max 12 characters]: ")?;
    loop {
        let name = input.read_line()?.ok_or(GameError::InputClosed)?;
        if is_valid_name(&name) {
            return Ok(name);
        }
        view.prompt("Invalid name! Try again: ")?;
    }
}
