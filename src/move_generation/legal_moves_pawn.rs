//! Pseudo-legal pawn moves: pushes, double pushes, captures, en passant,
//! and promotion expansion on the last rank.

use crate::chess_move::Move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{MoveKind, Piece, PieceKind, Square};

pub(crate) fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let direction = piece.color.pawn_direction();
    let start_row = piece.color.pawn_start_row();
    let promotion_row = piece.color.promotion_row();

    // Single push, expanding to four promotions on the last rank.
    if let Some(one_ahead) = from.offset(direction, 0) {
        if board.piece_at(one_ahead).is_none() {
            if one_ahead.row() == promotion_row {
                for promotion in PieceKind::PROMOTIONS {
                    out.push(Move::new(
                        from,
                        one_ahead,
                        piece,
                        None,
                        MoveKind::Promotion,
                        Some(promotion),
                    ));
                }
            } else {
                out.push(Move::new(from, one_ahead, piece, None, MoveKind::Normal, None));

                // Double push only through an empty intermediate square.
                if from.row() == start_row {
                    if let Some(two_ahead) = from.offset(direction * 2, 0) {
                        if board.piece_at(two_ahead).is_none() {
                            out.push(Move::new(
                                from,
                                two_ahead,
                                piece,
                                None,
                                MoveKind::DoublePawnPush,
                                None,
                            ));
                        }
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };

        if let Some(victim) = board.piece_at(target) {
            if victim.color != piece.color {
                if target.row() == promotion_row {
                    for promotion in PieceKind::PROMOTIONS {
                        out.push(Move::new(
                            from,
                            target,
                            piece,
                            Some(victim),
                            MoveKind::Promotion,
                            Some(promotion),
                        ));
                    }
                } else {
                    out.push(Move::new(
                        from,
                        target,
                        piece,
                        Some(victim),
                        MoveKind::Normal,
                        None,
                    ));
                }
            }
        } else if board.en_passant_target() == Some(target) {
            // The bypassed pawn sits beside the origin, not on the target.
            let victim = board.piece_at(Square::at(from.row(), target.col()));
            out.push(Move::new(
                from,
                target,
                piece,
                victim,
                MoveKind::EnPassant,
                None,
            ));
        }
    }
}
