//! AC-3 arc-consistency propagation.
//!
//! An *arc* is an ordered pair of peer cells (A, B) read as "A's domain must
//! be consistent with B's". The worklist starts with every arc on the board
//! and drains to a fixed point; whenever a revision shrinks A's domain, all
//! arcs pointing at A are re-queued so the change propagates backward.
//!
//! The revision rule is weaker than textbook arc-revise: a value `v` stays
//! in A's domain as long as B's domain contains any value other than `v`.
//! Only a singleton (or empty) peer domain ever removes anything, so the
//! fixed point amounts to exhaustively eliminating the values of forced
//! cells from their peers; pair and wider reasoning is left to the search.

use std::collections::VecDeque;

use gridlock_core::{DigitSet, Position};
use log::trace;

use crate::domains::DomainGrid;

/// Propagates all-different constraints across every pair of peers until a
/// fixed point is reached.
///
/// Returns `false` as soon as any domain becomes empty (the puzzle state is
/// inconsistent); domains not yet visited are left as they were at that
/// moment. Returns `true` once the worklist drains.
pub fn enforce_arc_consistency(domains: &mut DomainGrid) -> bool {
    let mut worklist: VecDeque<(Position, Position)> = Position::all()
        .flat_map(|cell| cell.peers().into_iter().map(move |peer| (cell, peer)))
        .collect();

    while let Some((a, b)) = worklist.pop_front() {
        if !revise(domains, a, b) {
            continue;
        }
        if domains.get(a).is_empty() {
            trace!("domain of {a:?} emptied against {b:?}");
            return false;
        }
        for peer in a.peers() {
            worklist.push_back((peer, a));
        }
    }
    true
}

/// Shrinks A's domain against B's, returning `true` if it changed.
///
/// A value stays iff B's domain contains at least one value different from
/// it, i.e. only `dom(B) ⊆ {v}` removes `v`.
fn revise(domains: &mut DomainGrid, a: Position, b: Position) -> bool {
    let support = domains.get(b);
    let before = domains.get(a);
    let after: DigitSet = before
        .iter()
        .filter(|&v| !support.without(v).is_empty())
        .collect();
    if after == before {
        return false;
    }
    domains.set(a, after);
    true
}
