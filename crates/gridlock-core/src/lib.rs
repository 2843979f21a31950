//! Core data structures for the gridlock sudoku solver.
//!
//! This crate provides the pure data layer the search engine is built on:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a compact bitset of candidate digits
//! - [`position`]: board coordinates, box membership, and peer enumeration
//! - [`board`]: the 9×9 value matrix with its legality primitive
//!
//! Nothing in here searches or propagates; those live in `gridlock-solver`.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! let pos = Position::new(4, 4);
//! board.place(pos, Digit::D5);
//!
//! // 5 may no longer be placed anywhere in the same column
//! assert!(!board.permits(Position::new(4, 0), Digit::D5));
//! assert!(board.permits(Position::new(3, 0), Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    position::{PeerList, Position},
};
