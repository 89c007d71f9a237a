use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod render;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Pos,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Pos, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps to a playable configuration: a board of at least 1×1 with at
    /// least one safe cell, so mine placement always terminates.
    pub fn new((rows, cols): Pos, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.min(mult(rows, cols) - 1);
        Self::new_unchecked((rows, cols), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Immutable mine placement for one game: the mine mask plus the adjacency
/// counts derived from it.
///
/// Counts are fixed when the layout is built, after every mine is planted,
/// and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    counts: Array2<u8>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        let counts = adjacency_counts(&mines);
        Self {
            mines,
            counts,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Pos, mine_coords: &[Pos]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.as_index());

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds(pos.0, pos.1));
            }
            mines[pos.as_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Pos {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        self.mines[pos.as_index()]
    }

    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        self.counts[pos.as_index()]
    }

    pub(crate) fn validate(&self, pos: Pos) -> Result<Pos> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds(pos.0, pos.1))
        }
    }
}

fn adjacency_counts(mines: &Array2<bool>) -> Array2<u8> {
    let dim = mines.dim();
    let size: Pos = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
    let mut counts: Array2<u8> = Array2::default(dim);

    for x in 0..size.0 {
        for y in 0..size.1 {
            counts[(x, y).as_index()] = neighbors((x, y), size)
                .filter(|&pos| mines[pos.as_index()])
                .count()
                .try_into()
                .unwrap();
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_to_playable_values() {
        let config = GameConfig::new((0, 5), 200);
        assert_eq!(config.size, (1, 5));
        assert_eq!(config.mines, 4);

        let config = GameConfig::new((10, 10), 20);
        assert_eq!(config.mines, 20);
    }

    #[test]
    fn layout_counts_match_mask() {
        let field = Minefield::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.safe_cells(), 7);
        assert!(field.is_mine((0, 0)));
        assert!(!field.is_mine((1, 1)));
        assert_eq!(field.adjacent_mines((1, 1)), 2);
        assert_eq!(field.adjacent_mines((0, 1)), 1);
        assert_eq!(field.adjacent_mines((2, 0)), 0);
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let field = Minefield::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn out_of_range_mine_coords_are_rejected() {
        let err = Minefield::from_mine_coords((2, 2), &[(2, 0)]).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds(2, 0));
    }
}
