//! Move legality for a mailbox board.
//!
//! A move is legal when the piece has the shape to reach the destination
//! (`geometry`), the destination does not hold a friendly piece and, for
//! sliding pieces, nothing stands in between (`path`), and the move does not
//! leave the mover's own king attacked (`legality`, using `check`).

pub mod check;
pub mod geometry;
pub mod legality;
pub mod path;

pub use check::{attackers, is_attacked, is_in_check, RulesError};
pub use legality::{
    has_legal_move, is_legal_move, is_pseudo_legal, legal_destinations, legal_moves,
    would_cause_own_check, Probe,
};
