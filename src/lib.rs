//! Chess rules and search engine core.
//!
//! The rules layer (`game_state`, `move_generation`) enforces legality and
//! tracks draw conditions; the search layer (`search`, `engines`) picks
//! moves with a bounded-depth negamax. Front-ends consume `GameState` for
//! play and `Engine` for the computer opponent.

pub mod chess_move;
pub mod engines;
pub mod errors;
pub mod game_state;
pub mod move_generation;
pub mod search;

pub use chess_move::Move;
pub use engines::{Difficulty, Engine};
pub use errors::{ChessError, ChessResult};
pub use game_state::{Board, Color, GameState, MoveKind, Piece, PieceKind, Square, Status};
pub use move_generation::{legal_moves, pseudo_legal_moves_from};
pub use search::{Searcher, StandardScorer};
