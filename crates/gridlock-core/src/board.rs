//! The 9×9 sudoku board.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9×9 sudoku board.
///
/// Each cell holds either a [`Digit`] or nothing. The board itself enforces
/// no constraints: it will happily hold contradictory digits, which is what
/// lets a search engine assign speculatively and undo. Legality questions go
/// through [`permits`](Self::permits).
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Digit, Position};
///
/// let board: Board = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.first_empty(), Some(Position::new(2, 0)));
/// # Ok::<(), gridlock_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// `cells[y][x]`, row-major.
    cells: [[Option<Digit>; 9]; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at `pos`, or `None` if the cell is unfilled.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Writes `digit` into the cell at `pos`, overwriting any previous value.
    pub const fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.y() as usize][pos.x() as usize] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.y() as usize][pos.x() as usize] = None;
    }

    /// Returns `true` if `digit` does not already appear in the row, column,
    /// or 3×3 box of `pos`.
    ///
    /// This is the sole legality primitive; domains, lookahead, and the
    /// heuristics are all defined in terms of it. The cell at `pos` itself is
    /// part of the scan, so the check is intended for unfilled cells.
    #[must_use]
    pub fn permits(&self, pos: Position, digit: Digit) -> bool {
        let (x, y) = (usize::from(pos.x()), usize::from(pos.y()));
        for i in 0..9 {
            if self.cells[y][i] == Some(digit) || self.cells[i][x] == Some(digit) {
                return false;
            }
        }
        let bx = x / 3 * 3;
        let by = y / 3 * 3;
        for row in &self.cells[by..by + 3] {
            if row[bx..bx + 3].contains(&Some(digit)) {
                return false;
            }
        }
        true
    }

    /// Returns the set of digits that [`permits`](Self::permits) allows at
    /// `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.permits(pos, digit))
            .collect()
    }

    /// Returns the first unfilled cell in row-major order, or `None` if the
    /// board is completely filled.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Iterates over all unfilled cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::all().filter(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if every cell is filled and no digit repeats within a
    /// row, column, or box.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && Position::all().all(|pos| {
                let digit = self.get(pos);
                pos.peers().iter().all(|&peer| self.get(peer) != digit)
            })
    }
}

/// An error produced when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text contained a character that is neither a cell nor layout.
    #[display("unexpected character {ch:?} in board text")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text did not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    CellCount {
        /// Number of cell characters found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from text.
    ///
    /// `1`-`9` fill cells; `0`, `.`, and `_` leave them blank. Whitespace,
    /// commas, and the `|`/`-` box separators emitted by [`Display`] are
    /// layout and ignored. Exactly 81 cell characters are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0usize;
        for ch in s.chars() {
            let digit = match ch {
                '0' | '.' | '_' => None,
                _ if ch.is_ascii_digit() => Digit::new(ch as u8 - b'0'),
                _ if ch.is_whitespace() || matches!(ch, ',' | '|' | '-') => continue,
                _ => return Err(ParseBoardError::UnexpectedCharacter { ch }),
            };
            if count < 81 {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new((count % 9) as u8, (count / 9) as u8);
                if let Some(digit) = digit {
                    board.place(pos, digit);
                }
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::CellCount { count });
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board with `|` and `-` box separators, `.` for blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y % 3 == 0 && y != 0 {
                writeln!(f, "- - - - - - - - - - -")?;
            }
            for x in 0..9 {
                if x % 3 == 0 && x != 0 {
                    f.write_str("| ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
                if x != 8 {
                    f.write_char(' ')?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
