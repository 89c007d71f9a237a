//! The interactive session: prompt, parse, act, repeat until the board is
//! won or a mine goes off. The board itself never touches I/O.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use demine_core::{Board, CellCount, Coord, FlagOutcome, Pos, RevealOutcome, Status};
use thiserror::Error;

pub const ROWS: Coord = 10;
pub const COLS: Coord = 10;
pub const MINES: CellCount = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Pos),
    Flag(Pos),
}

impl Command {
    const fn pos(self) -> Pos {
        match self {
            Self::Reveal(pos) | Self::Flag(pos) => pos,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid choice. Try again.")]
    Choice,
    #[error("Invalid coordinates. Try again.")]
    Coordinates,
}

/// One turn of input: `<op> <x> <y>` with `op` either `r` or `f`.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let op = parts.next().ok_or(CommandError::Choice)?;
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CommandError::Choice);
        };

        let x = x.parse().map_err(|_| CommandError::Coordinates)?;
        let y = y.parse().map_err(|_| CommandError::Coordinates)?;

        match op {
            "r" => Ok(Self::Reveal((x, y))),
            "f" => Ok(Self::Flag((x, y))),
            _ => Err(CommandError::Choice),
        }
    }
}

pub fn play(mut board: Board) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Minesweeper!");

    loop {
        println!("\n{}", board.render(false));
        println!("Mines left: {}", board.mines_left());
        println!("\nOptions:");
        println!("1. Reveal a cell (r x y)");
        println!("2. Place a flag (f x y)");
        print!("Enter your choice: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let (x, y) = command.pos();
        if x >= ROWS || y >= COLS {
            println!("{}", CommandError::Coordinates);
            continue;
        }

        match command {
            Command::Reveal(pos) => match board.reveal(pos)? {
                RevealOutcome::Mine => println!("BOOM! You hit a mine. Game over!"),
                RevealOutcome::AlreadyRevealed => println!("That cell is already revealed."),
                RevealOutcome::Flagged => println!("That cell is flagged. Unflag it first."),
                RevealOutcome::Cleared => {}
            },
            Command::Flag(pos) => match board.toggle_flag(pos)? {
                FlagOutcome::Placed => println!("Flag placed at ({x}, {y})."),
                FlagOutcome::Removed => println!("Flag removed at ({x}, {y})."),
                FlagOutcome::Rejected => println!("Cannot place a flag on a revealed cell."),
            },
        }

        match board.status() {
            Status::InProgress => {}
            Status::Won => {
                println!("Congratulations! You cleared the board!");
                println!("{}", board.render(true));
                return Ok(());
            }
            Status::Lost => {
                println!("{}", board.render(true));
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveal_and_flag() {
        assert_eq!("r 3 4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!("f 0 9".parse(), Ok(Command::Flag((0, 9))));
    }

    #[test]
    fn tolerates_surplus_whitespace() {
        assert_eq!("  r  1   2 ".parse(), Ok(Command::Reveal((1, 2))));
    }

    #[test]
    fn rejects_unknown_operations() {
        assert_eq!("x 1 2".parse::<Command>(), Err(CommandError::Choice));
        assert_eq!("rr 1 2".parse::<Command>(), Err(CommandError::Choice));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!("r 1".parse::<Command>(), Err(CommandError::Choice));
        assert_eq!("r 1 2 3".parse::<Command>(), Err(CommandError::Choice));
        assert_eq!("".parse::<Command>(), Err(CommandError::Choice));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert_eq!("r a b".parse::<Command>(), Err(CommandError::Coordinates));
        assert_eq!("r -1 2".parse::<Command>(), Err(CommandError::Coordinates));
        assert_eq!("f 1 300".parse::<Command>(), Err(CommandError::Coordinates));
    }
}
