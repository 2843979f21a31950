//! Per-cell candidate domains.

use gridlock_core::{Board, Digit, DigitSet, Position};

/// The candidate domains of every cell on the board.
///
/// A filled cell's domain is the singleton of its value; an empty cell's
/// domain starts as the set of values the board's legality check allows and
/// only ever shrinks from there. The grid is a plain value: MAC branches
/// isolate themselves by cloning it, so a failed branch can simply be
/// dropped without touching its parent.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Digit, Position};
/// use gridlock_solver::DomainGrid;
///
/// let mut board = Board::new();
/// board.place(Position::new(0, 0), Digit::D7);
///
/// let domains = DomainGrid::from_board(&board);
/// assert_eq!(domains.get(Position::new(0, 0)).as_single(), Some(Digit::D7));
/// assert!(!domains.get(Position::new(5, 0)).contains(Digit::D7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGrid {
    /// `cells[y][x]`, row-major.
    cells: [[DigitSet; 9]; 9],
}

impl DomainGrid {
    /// Builds domains from a board: singletons for filled cells, the set of
    /// permitted values for empty ones.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut cells = [[DigitSet::EMPTY; 9]; 9];
        for pos in Position::all() {
            cells[usize::from(pos.y())][usize::from(pos.x())] = match board.get(pos) {
                Some(digit) => DigitSet::singleton(digit),
                None => board.candidates_at(pos),
            };
        }
        Self { cells }
    }

    /// Returns the domain of the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> DigitSet {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Replaces the domain of the cell at `pos`.
    pub const fn set(&mut self, pos: Position, domain: DigitSet) {
        self.cells[pos.y() as usize][pos.x() as usize] = domain;
    }

    /// Collapses the domain of `pos` to the single assigned digit.
    pub const fn assign(&mut self, pos: Position, digit: Digit) {
        self.set(pos, DigitSet::singleton(digit));
    }

    /// Writes every singleton domain of a still-empty board cell into the
    /// board. Used once after AC-3 preprocessing to fill forced cells; the
    /// search itself never calls this.
    pub fn write_singles_to(&self, board: &mut Board) {
        for pos in Position::all() {
            if board.get(pos).is_none()
                && let Some(digit) = self.get(pos).as_single()
            {
                board.place(pos, digit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_board_empty_cells_get_legal_values() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D1);
        board.place(Position::new(1, 0), Digit::D2);

        let domains = DomainGrid::from_board(&board);
        let open = domains.get(Position::new(8, 0));
        assert_eq!(open.len(), 7);
        assert!(!open.contains(Digit::D1));
        assert!(!open.contains(Digit::D2));

        let unrelated = domains.get(Position::new(8, 8));
        assert_eq!(unrelated, DigitSet::FULL);
    }

    #[test]
    fn test_assign_collapses() {
        let board = Board::new();
        let mut domains = DomainGrid::from_board(&board);
        domains.assign(Position::new(4, 4), Digit::D3);
        assert_eq!(
            domains.get(Position::new(4, 4)).as_single(),
            Some(Digit::D3)
        );
    }

    #[test]
    fn test_write_singles_to_fills_only_forced_cells() {
        let mut board = Board::new();
        let mut domains = DomainGrid::from_board(&board);
        domains.assign(Position::new(2, 2), Digit::D8);

        domains.write_singles_to(&mut board);
        assert_eq!(board.get(Position::new(2, 2)), Some(Digit::D8));
        assert_eq!(board.get(Position::new(3, 2)), None);
    }

    #[test]
    fn test_write_singles_to_leaves_filled_cells_alone() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D5);

        let mut domains = DomainGrid::from_board(&board);
        // A stale singleton must not overwrite the board.
        domains.assign(Position::new(0, 0), Digit::D6);
        domains.write_singles_to(&mut board);
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
    }

    #[test]
    fn test_clone_is_isolated() {
        let board = Board::new();
        let parent = DomainGrid::from_board(&board);

        let mut branch = parent.clone();
        branch.assign(Position::new(0, 0), Digit::D1);
        branch.set(Position::new(8, 8), DigitSet::EMPTY);

        assert_eq!(parent.get(Position::new(0, 0)), DigitSet::FULL);
        assert_eq!(parent.get(Position::new(8, 8)), DigitSet::FULL);
    }
}
