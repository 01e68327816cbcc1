use ndarray::Array2;
use rand::prelude::*;

use super::{MineGenerator, kinds_from_mask};
use crate::{CellKind, Coord2, GameConfig, ToNdIndex};

/// Mine placement by repeated row-major scans with a shrinking modulus `k`.
///
/// `k` starts at `round(sqrt(width * height))`; each cell of a pass receives
/// a mine with probability `1/k`, skipping the safe cell and cells already
/// mined. A pass that leaves budget unplaced lowers `k` by one, raising the
/// odds toward certainty, so the scan always terminates. Mine positions are
/// not uniformly distributed and depend on the seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanGenerator {
    seed: u64,
}

impl ScanGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ScanGenerator {
    fn generate(self, config: GameConfig, safe: Coord2) -> Array2<CellKind> {
        let (rows, cols) = config.dim();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.dim().to_nd_index());
        let mut remaining = config.mines;
        let mut k = (f64::from(config.total_cells()).sqrt()).round() as u32;
        let mut passes = 0u32;

        while remaining > 0 {
            passes += 1;
            for row in 0..rows {
                for col in 0..cols {
                    let coords = (row, col);
                    if rng.random_range(0..k) == 0
                        && !mines[coords.to_nd_index()]
                        && remaining > 0
                        && coords != safe
                    {
                        mines[coords.to_nd_index()] = true;
                        remaining -= 1;
                    }
                }
            }
            // k = 1 mines every eligible cell, so the budget is always spent
            // before the modulus could reach zero.
            if remaining > 0 && k > 1 {
                k -= 1;
            }
        }

        log::debug!(
            "placed {} mines on {}x{} board in {} pass(es)",
            config.mines,
            config.width,
            config.height,
            passes
        );
        kinds_from_mask(config.dim(), &mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors;

    fn generate(width: i32, height: i32, mines: i32, safe: Coord2, seed: u64) -> Array2<CellKind> {
        let config = GameConfig::new(width, height, mines).unwrap();
        ScanGenerator::new(seed).generate(config, safe)
    }

    fn mine_total(kinds: &Array2<CellKind>) -> usize {
        kinds.iter().filter(|kind| kind.is_mine()).count()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..10 {
            let kinds = generate(10, 10, 10, (4, 4), seed);
            assert_eq!(mine_total(&kinds), 10, "seed = {seed}");
        }
    }

    #[test]
    fn safe_cell_never_receives_a_mine() {
        for seed in 0..20 {
            let kinds = generate(6, 6, 20, (3, 2), seed);
            assert!(!kinds[[3, 2]].is_mine(), "seed = {seed}");
            assert_eq!(mine_total(&kinds), 20, "seed = {seed}");
        }
    }

    #[test]
    fn maximum_density_mines_everything_but_the_safe_cell() {
        let kinds = generate(5, 5, 24, (2, 2), 7);
        assert_eq!(mine_total(&kinds), 24);
        assert_eq!(kinds[[2, 2]], CellKind::Count(8));
    }

    #[test]
    fn zero_mines_yields_an_all_zero_board() {
        let kinds = generate(4, 4, 0, (0, 0), 3);
        assert!(kinds.iter().all(|&kind| kind == CellKind::Count(0)));
    }

    #[test]
    fn every_cell_is_a_mine_or_a_valid_count() {
        let kinds = generate(9, 7, 15, (0, 0), 42);
        assert!(kinds.iter().all(|kind| match kind {
            CellKind::Mine => true,
            CellKind::Count(n) => *n <= 8,
            CellKind::Unknown => false,
        }));
    }

    #[test]
    fn counts_match_a_brute_force_recount() {
        let config = GameConfig::new(8, 8, 12).unwrap();
        let kinds = ScanGenerator::new(99).generate(config, (4, 4));
        for row in 0..8 {
            for col in 0..8 {
                let kind = kinds[[row as usize, col as usize]];
                if kind.is_mine() {
                    continue;
                }
                let expected = neighbors((row, col), config.dim())
                    .filter(|&pos| kinds[pos.to_nd_index()].is_mine())
                    .count() as u8;
                assert_eq!(kind, CellKind::Count(expected), "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn single_cell_board_generates_without_mines() {
        let kinds = generate(1, 1, 0, (0, 0), 0);
        assert_eq!(kinds[[0, 0]], CellKind::Count(0));
    }
}
