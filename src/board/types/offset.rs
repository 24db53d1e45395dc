//! Step vectors used to walk the board.

/// A (file, rank) displacement applied one step at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub file: i8,
    pub rank: i8,
}

impl Offset {
    pub const NORTH: Offset = Offset::new(0, 1);
    pub const SOUTH: Offset = Offset::new(0, -1);
    pub const EAST: Offset = Offset::new(1, 0);
    pub const WEST: Offset = Offset::new(-1, 0);
    pub const NORTH_EAST: Offset = Offset::new(1, 1);
    pub const NORTH_WEST: Offset = Offset::new(-1, 1);
    pub const SOUTH_EAST: Offset = Offset::new(1, -1);
    pub const SOUTH_WEST: Offset = Offset::new(-1, -1);

    /// Rook directions
    pub const ORTHOGONAL: [Offset; 4] = [Offset::NORTH, Offset::EAST, Offset::SOUTH, Offset::WEST];

    /// Bishop directions
    pub const DIAGONAL: [Offset; 4] = [
        Offset::NORTH_EAST,
        Offset::SOUTH_EAST,
        Offset::SOUTH_WEST,
        Offset::NORTH_WEST,
    ];

    /// Queen and king directions
    pub const ROYAL: [Offset; 8] = [
        Offset::NORTH,
        Offset::EAST,
        Offset::SOUTH,
        Offset::WEST,
        Offset::NORTH_EAST,
        Offset::SOUTH_EAST,
        Offset::SOUTH_WEST,
        Offset::NORTH_WEST,
    ];

    pub const KNIGHT: [Offset; 8] = [
        Offset::new(1, 2),
        Offset::new(2, 1),
        Offset::new(2, -1),
        Offset::new(1, -2),
        Offset::new(-1, -2),
        Offset::new(-2, -1),
        Offset::new(-2, 1),
        Offset::new(-1, 2),
    ];

    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Offset { file, rank }
    }

    /// True for steps along a rank or file.
    #[inline]
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        self.file == 0 || self.rank == 0
    }
}
