//! Pseudo-legal knight moves over the eight fixed offsets.

use crate::chess_move::Move;
use crate::game_state::board::{Board, KNIGHT_OFFSETS};
use crate::game_state::chess_types::{MoveKind, Piece, Square};

pub(crate) fn generate_knight_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            None => out.push(Move::new(from, target, piece, None, MoveKind::Normal, None)),
            Some(victim) if victim.color != piece.color => out.push(Move::new(
                from,
                target,
                piece,
                Some(victim),
                MoveKind::Normal,
                None,
            )),
            Some(_) => {}
        }
    }
}
