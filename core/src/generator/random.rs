use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform random placement: positions are drawn from a seeded [`SmallRng`]
/// and re-drawn on collision until the requested number of distinct cells is
/// mined.
///
/// The same seed and config always produce the same layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        let (rows, cols) = config.size;
        let total = config.total_cells();
        let mut mines: Array2<bool> = Array2::default(config.size.as_index());

        // resampling cannot terminate on a board with no free cell left
        if config.mines >= total {
            if config.mines > total {
                log::warn!(
                    "requested {} mines but the board only fits {}",
                    config.mines,
                    total
                );
            }
            mines.fill(true);
            return Minefield::from_mine_mask(mines);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut planted: CellCount = 0;
        while planted < config.mines {
            let pos: Pos = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mines[pos.as_index()];
            if !*cell {
                *cell = true;
                planted += 1;
            }
        }

        Minefield::from_mine_mask(mines)
    }
}
