/// Marker identifying which player occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    First,
    Second,
}

impl Token {
    /// Get the other token
    pub fn other(self) -> Token {
        match self {
            Token::First => Token::Second,
            Token::Second => Token::First,
        }
    }
}

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 12;

/// Check a player name against the 1..=12 character rule.
pub fn is_valid_name(name: &str) -> bool {
    (1..=MAX_NAME_LEN).contains(&name.chars().count())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }
}
