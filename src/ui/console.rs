use std::io::{self, BufRead};

use crate::game::{MoveSource, Player};

/// Reads one line per request from a buffered source such as stdin.
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        ConsoleInput { reader }
    }

    /// Next line without its line ending, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> MoveSource for ConsoleInput<R> {
    fn next_column(&mut self, _player: &Player, _retry: bool) -> io::Result<Option<String>> {
        self.read_line()
    }
}
