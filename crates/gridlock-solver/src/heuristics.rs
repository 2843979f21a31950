//! Variable-selection and value-ordering policies.
//!
//! Each policy comes in two flavors: one that works straight off the board's
//! legality check (used by pruning and forward checking), and a domain-aware
//! one that reads already-pruned domains (used under MAC, where recomputing
//! full validity scans would waste the propagation work).
//!
//! All of them are read-only projections: nothing in here ever mutates the
//! board or the domains, so they can run mid-search without aliasing the
//! engine's state.

use gridlock_core::{Board, Digit, Position};

use crate::{
    config::{ValueOrdering, VariableOrdering},
    domains::DomainGrid,
};

/// Extra weight for a value whose assignment would leave a peer with a lone
/// remaining candidate.
const NEAR_SINGLETON_PENALTY: usize = 100;

impl VariableOrdering {
    /// Selects the next cell to assign, or `None` when no empty cell
    /// remains.
    #[must_use]
    pub fn select(self, board: &Board) -> Option<Position> {
        match self {
            Self::FirstEmpty => board.first_empty(),
            Self::MinimumRemainingValues => {
                minimum_remaining(board, |pos| board.candidates_at(pos).len())
            }
        }
    }

    /// Domain-aware variant: MRV reads precomputed domain sizes instead of
    /// re-running validity scans.
    #[must_use]
    pub fn select_in_domains(self, board: &Board, domains: &DomainGrid) -> Option<Position> {
        match self {
            Self::FirstEmpty => board.first_empty(),
            Self::MinimumRemainingValues => {
                minimum_remaining(board, |pos| domains.get(pos).len())
            }
        }
    }
}

impl ValueOrdering {
    /// Orders the legal candidate values for `pos`.
    #[must_use]
    pub fn order(self, board: &Board, pos: Position) -> Vec<Digit> {
        match self {
            Self::Natural => board.candidates_at(pos).iter().collect(),
            Self::LeastConstrainingValue => least_constraining(board, pos),
        }
    }

    /// Domain-aware variant: candidates come from the cell's pruned domain,
    /// and LCV scores are approximated from peer domains.
    #[must_use]
    pub fn order_in_domains(
        self,
        board: &Board,
        domains: &DomainGrid,
        pos: Position,
    ) -> Vec<Digit> {
        match self {
            Self::Natural => domains.get(pos).iter().collect(),
            Self::LeastConstrainingValue => least_constraining_in_domains(board, domains, pos),
        }
    }
}

/// Row-major scan for the empty cell with the fewest remaining values.
///
/// Only a strictly smaller count replaces the current best, so ties keep the
/// earliest cell. A count of 0 or 1 cannot be improved on and short-circuits
/// the scan.
fn minimum_remaining(board: &Board, count_at: impl Fn(Position) -> usize) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in board.empty_positions() {
        let count = count_at(pos);
        if best.is_none_or(|(_, best_count)| count < best_count) {
            best = Some((pos, count));
            if count <= 1 {
                break;
            }
        }
    }
    best.map(|(pos, _)| pos)
}

/// Orders candidates by how much freedom they leave the rest of the unit
/// cells, least first, via a stable ascending insertion sort (ties keep
/// discovery order, i.e. ascending digit).
fn least_constraining(board: &Board, pos: Position) -> Vec<Digit> {
    let mut scored: Vec<(Digit, usize)> = Vec::new();
    for digit in Digit::ALL {
        if !board.permits(pos, digit) {
            continue;
        }
        let freedom = unit_freedom(board, pos, digit);
        let at = scored
            .iter()
            .position(|&(_, f)| f > freedom)
            .unwrap_or(scored.len());
        scored.insert(at, (digit, freedom));
    }
    scored.into_iter().map(|(digit, _)| digit).collect()
}

/// Total number of legal values the empty cells of `pos`'s row, column, and
/// box would retain if `digit` were placed at `pos`.
///
/// The row, column, and box are scanned separately; box cells that also share
/// the row or column are counted twice. The placement is simulated rather
/// than applied: every scanned cell shares a unit with `pos`, so placing
/// `digit` there forbids exactly `digit` and nothing else.
fn unit_freedom(board: &Board, pos: Position, digit: Digit) -> usize {
    let mut freedom = 0;
    for i in 0..9 {
        let row_cell = Position::new(i, pos.y());
        if i != pos.x() && board.get(row_cell).is_none() {
            freedom += projected_count(board, row_cell, digit);
        }
        let column_cell = Position::new(pos.x(), i);
        if i != pos.y() && board.get(column_cell).is_none() {
            freedom += projected_count(board, column_cell, digit);
        }
    }
    let bx = pos.x() / 3 * 3;
    let by = pos.y() / 3 * 3;
    for y in by..by + 3 {
        for x in bx..bx + 3 {
            let box_cell = Position::new(x, y);
            if box_cell != pos && board.get(box_cell).is_none() {
                freedom += projected_count(board, box_cell, digit);
            }
        }
    }
    freedom
}

/// Legal values at `cell` once `placed` is hypothetically assigned to a cell
/// sharing one of its units.
fn projected_count(board: &Board, cell: Position, placed: Digit) -> usize {
    Digit::ALL
        .into_iter()
        .filter(|&d| d != placed && board.permits(cell, d))
        .count()
}

/// Cheap LCV approximation over pruned domains.
///
/// Each empty peer that would lose `digit` contributes its remaining support
/// count; a peer that would be driven down to a single remaining option
/// contributes a large fixed penalty instead. Lower totals sort first, via
/// the same stable insertion as [`least_constraining`].
fn least_constraining_in_domains(
    board: &Board,
    domains: &DomainGrid,
    pos: Position,
) -> Vec<Digit> {
    let mut scored: Vec<(Digit, usize)> = Vec::new();
    for digit in domains.get(pos) {
        let mut score = 0;
        for peer in pos.peers() {
            if board.get(peer).is_some() {
                continue;
            }
            let domain = domains.get(peer);
            if !domain.contains(digit) {
                continue;
            }
            score += if domain.len() <= 2 {
                NEAR_SINGLETON_PENALTY
            } else {
                domain.len() - 1
            };
        }
        let at = scored
            .iter()
            .position(|&(_, s)| s > score)
            .unwrap_or(scored.len());
        scored.insert(at, (digit, score));
    }
    scored.into_iter().map(|(digit, _)| digit).collect()
}

#[cfg(test)]
mod tests {
    use gridlock_core::DigitSet;

    use super::*;

    #[test]
    fn test_first_empty_scans_row_major() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D1);
        board.place(Position::new(1, 0), Digit::D2);

        assert_eq!(
            VariableOrdering::FirstEmpty.select(&board),
            Some(Position::new(2, 0))
        );
    }

    #[test]
    fn test_select_returns_none_on_full_board() {
        let mut board = Board::new();
        for pos in Position::all() {
            board.place(pos, Digit::D1); // contradictory, but full
        }
        assert_eq!(VariableOrdering::FirstEmpty.select(&board), None);
        assert_eq!(VariableOrdering::MinimumRemainingValues.select(&board), None);
    }

    #[test]
    fn test_mrv_prefers_most_constrained_cell() {
        let mut board = Board::new();
        // (8, 8) sees seven distinct digits; every other empty cell sees at
        // most a handful.
        for (i, digit) in Digit::ALL.into_iter().take(7).enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            board.place(Position::new(i as u8, 8), digit);
        }

        assert_eq!(
            VariableOrdering::MinimumRemainingValues.select(&board),
            Some(Position::new(7, 8))
        );
    }

    #[test]
    fn test_mrv_tie_keeps_scan_order() {
        let board = Board::new();
        // Every cell has nine candidates; the first scanned cell wins.
        assert_eq!(
            VariableOrdering::MinimumRemainingValues.select(&board),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_mrv_in_domains_reads_domain_sizes() {
        let board = Board::new();
        let mut domains = DomainGrid::from_board(&board);
        domains.set(
            Position::new(6, 6),
            DigitSet::from_iter([Digit::D2, Digit::D3]),
        );

        assert_eq!(
            VariableOrdering::MinimumRemainingValues.select_in_domains(&board, &domains),
            Some(Position::new(6, 6))
        );
    }

    #[test]
    fn test_natural_order_is_ascending_legal_values() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D1);
        board.place(Position::new(4, 0), Digit::D4);

        let order = ValueOrdering::Natural.order(&board, Position::new(8, 0));
        let expected: Vec<_> = Digit::ALL
            .into_iter()
            .filter(|&d| d != Digit::D1 && d != Digit::D4)
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_lcv_ties_keep_ascending_order() {
        // On an empty board every value scores the same, so LCV degrades to
        // the natural order.
        let board = Board::new();
        let order =
            ValueOrdering::LeastConstrainingValue.order(&board, Position::new(4, 4));
        assert_eq!(order, Digit::ALL.to_vec());
    }

    #[test]
    fn test_lcv_puts_freer_value_last() {
        let mut board = Board::new();
        // A 9 at (1, 8) already removes 9 from several cells scanned around
        // (0, 0); choosing 9 there therefore removes less remaining freedom
        // than any other value, and the ascending-by-freedom sort puts the
        // freer 9 at the end.
        board.place(Position::new(1, 8), Digit::D9);

        let order =
            ValueOrdering::LeastConstrainingValue.order(&board, Position::new(0, 0));
        assert_eq!(order.len(), 9);
        assert_eq!(*order.last().unwrap(), Digit::D9);
        assert_eq!(order[..8], Digit::ALL[..8]);
    }

    #[test]
    fn test_domain_lcv_penalizes_near_singletons() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D1);
        let mut domains = DomainGrid::from_board(&board);

        // Candidate cell (4, 0) with choices {2, 3}; a row peer is down to
        // {2, 9}, so picking 2 would strand it on a single option.
        domains.set(
            Position::new(4, 0),
            DigitSet::from_iter([Digit::D2, Digit::D3]),
        );
        domains.set(
            Position::new(8, 0),
            DigitSet::from_iter([Digit::D2, Digit::D9]),
        );

        let order = ValueOrdering::LeastConstrainingValue.order_in_domains(
            &board,
            &domains,
            Position::new(4, 0),
        );
        assert_eq!(order, vec![Digit::D3, Digit::D2]);
    }
}
