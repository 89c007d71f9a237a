use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates ({0}, {1}) are outside the board")]
    OutOfBounds(Coord, Coord),
}

pub type Result<T> = std::result::Result<T, GameError>;
