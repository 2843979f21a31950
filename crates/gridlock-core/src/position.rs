//! Board positions and peer enumeration.

use tinyvec::ArrayVec;

/// The peers of a cell: every other cell sharing its row, column, or box.
///
/// Always holds exactly 20 positions (8 row + 8 column + 4 box cells not
/// already counted), in a stable row → column → box order.
pub type PeerList = ArrayVec<[Position; 20]>;

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` the row (0-8, top to
/// bottom), matching the screen layout of a printed grid.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// assert_eq!(pos.peers().len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Iterates over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self::new(x, y)))
    }

    /// Returns the 20 peers of this cell in a stable order: the rest of its
    /// row, the rest of its column, then the box cells not already listed.
    ///
    /// The order is not semantically meaningful, but it is fixed so that
    /// propagation and search visit arcs deterministically.
    #[must_use]
    pub fn peers(self) -> PeerList {
        let mut peers = PeerList::new();
        for x in 0..9 {
            if x != self.x {
                peers.push(Self::new(x, self.y));
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers.push(Self::new(self.x, y));
            }
        }
        let bx = (self.x / 3) * 3;
        let by = (self.y / 3) * 3;
        for y in by..by + 3 {
            for x in bx..bx + 3 {
                // Box cells in the same row or column are already listed.
                if x != self.x && y != self.y {
                    peers.push(Self::new(x, y));
                }
            }
        }
        peers
    }
}
