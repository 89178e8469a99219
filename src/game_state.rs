pub mod board;
pub mod chess_types;
pub mod game_state;

pub use board::Board;
pub use chess_types::{Color, MoveKind, Piece, PieceKind, Square};
pub use game_state::{GameState, Status};
