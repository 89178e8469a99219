//! Pseudo-legal king moves and castling eligibility.

use crate::chess_move::Move;
use crate::game_state::board::{Board, KING_OFFSETS};
use crate::game_state::chess_types::{Color, MoveKind, Piece, PieceKind, Square};

pub(crate) fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KING_OFFSETS {
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

    generate_castling_moves(board, from, piece, out);
}

/// Castling requires an unmoved king that is not currently attacked, an
/// unmoved rook on the relevant corner, empty squares between them, and the
/// two squares the king crosses (destination included) to be safe. The
/// queenside b-file square must be empty but may be attacked.
fn generate_castling_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if piece.has_moved {
        return;
    }
    let enemy = piece.color.opposite();
    if board.square_attacked(from, enemy) {
        return;
    }

    let back = piece.color.back_rank();

    if rook_ready(board, piece.color, Square::at(back, 7)) {
        let f_file = Square::at(back, 5);
        let g_file = Square::at(back, 6);
        if board.piece_at(f_file).is_none()
            && board.piece_at(g_file).is_none()
            && !board.square_attacked(f_file, enemy)
            && !board.square_attacked(g_file, enemy)
        {
            out.push(Move::new(
                from,
                g_file,
                piece,
                None,
                MoveKind::CastleKingside,
                None,
            ));
        }
    }

    if rook_ready(board, piece.color, Square::at(back, 0)) {
        let d_file = Square::at(back, 3);
        let c_file = Square::at(back, 2);
        let b_file = Square::at(back, 1);
        if board.piece_at(d_file).is_none()
            && board.piece_at(c_file).is_none()
            && board.piece_at(b_file).is_none()
            && !board.square_attacked(d_file, enemy)
            && !board.square_attacked(c_file, enemy)
        {
            out.push(Move::new(
                from,
                c_file,
                piece,
                None,
                MoveKind::CastleQueenside,
                None,
            ));
        }
    }
}

#[inline]
fn rook_ready(board: &Board, color: Color, corner: Square) -> bool {
    matches!(
        board.piece_at(corner),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
    )
}
