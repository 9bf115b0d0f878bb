//! Terminal classification values.

use std::fmt;

use crate::game_state::chess_types::Color;

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Side(Color),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Side(color) => write!(f, "{color}"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// State of play as seen by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    FiftyMoveRule,
}

impl GameOutcome {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub const fn winner(self) -> Option<Winner> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Checkmate { winner } => Some(Winner::Side(winner)),
            GameOutcome::Stalemate | GameOutcome::FiftyMoveRule => Some(Winner::Draw),
        }
    }

    /// PGN result token.
    pub const fn result_token(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "*",
            GameOutcome::Checkmate { winner: Color::White } => "1-0",
            GameOutcome::Checkmate { winner: Color::Black } => "0-1",
            GameOutcome::Stalemate | GameOutcome::FiftyMoveRule => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "game in progress"),
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate, draw"),
            GameOutcome::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
        }
    }
}
