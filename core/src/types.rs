/// Single board axis, used for width, height, and cell positions.
pub type Coord = u16;

/// Count type used for mine totals and whole-board cell counts.
pub type CellCount = u32;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn cell_count(width: Coord, height: Coord) -> CellCount {
    (width as CellCount) * (height as CellCount)
}

const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the 8-connected Moore neighborhood of `center`, clamped to a
/// `(rows, cols)` board.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = bounds;
    DISPLACEMENTS.iter().filter_map(move |&(dr, dc)| {
        let nr = i32::from(row) + dr;
        let nc = i32::from(col) + dc;
        (nr >= 0 && nc >= 0 && nr < i32::from(rows) && nc < i32::from(cols))
            .then_some((nr as Coord, nc as Coord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let mut found: Vec<_> = neighbors((0, 0), (3, 3)).collect();
        found.sort_unstable();
        assert_eq!(found, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn edge_is_clamped_on_both_axes() {
        let mut found: Vec<_> = neighbors((2, 0), (3, 2)).collect();
        found.sort_unstable();
        assert_eq!(found, vec![(1, 0), (1, 1), (2, 1)]);
    }
}
