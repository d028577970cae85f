//! Game rules for truth-table checkers.
//!
//! Pure functions over a [`Board`](crate::Board): move legality, move
//! application and end-of-game detection. Rules are kept apart from board
//! storage so contracts can compose them.

pub mod apply;
pub mod end;
pub mod movement;

pub use apply::{AppliedMove, apply_move};
pub use end::check_outcome;
pub use movement::{check_move, is_legal_move, legal_destinations, legal_moves};
