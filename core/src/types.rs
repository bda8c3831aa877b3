/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(y, x)`, row first.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Up, down, left, right.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal neighbors of `center` inside a board of `bounds`, never wrapping around the edges.
pub fn orthogonal_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (y, x) = center;
    let (nrows, ncols) = bounds;

    ORTHOGONAL.into_iter().filter_map(move |(dy, dx)| {
        let next_y = y.checked_add_signed(dy).filter(|&next_y| next_y < nrows)?;
        let next_x = x.checked_add_signed(dx).filter(|&next_x| next_x < ncols)?;
        Some((next_y, next_x))
    })
}
