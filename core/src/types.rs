/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Grid position `(x, y)`: `x` is the row, `y` the column.
pub type Pos = (Coord, Coord);

pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Pos {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 in-bounds compass neighbors of `pos` on a `size`
/// grid. Edges are clipped, never wrapped.
pub fn neighbors(pos: Pos, size: Pos) -> impl Iterator<Item = Pos> {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let x = pos.0.checked_add_signed(dx)?;
        let y = pos.1.checked_add_signed(dy)?;
        (x < size.0 && y < size.1).then_some((x, y))
    })
}
