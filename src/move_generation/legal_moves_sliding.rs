//! Pseudo-legal sliding moves for bishops, rooks, and queens.
//!
//! Each ray extends until blocked: empty squares accumulate, the first enemy
//! piece is added as a capture and ends the ray, an own piece ends the ray
//! silently.

use crate::chess_move::Move;
use crate::game_state::board::{Board, BISHOP_DIRECTIONS, KING_OFFSETS, ROOK_DIRECTIONS};
use crate::game_state::chess_types::{MoveKind, Piece, Square};

pub(crate) fn generate_bishop_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    walk_rays(board, from, piece, &BISHOP_DIRECTIONS, out);
}

pub(crate) fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    walk_rays(board, from, piece, &ROOK_DIRECTIONS, out);
}

pub(crate) fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    // The queen's ray set is the eight king directions.
    walk_rays(board, from, piece, &KING_OFFSETS, out);
}

fn walk_rays(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            current = next;
            match board.piece_at(current) {
                None => out.push(Move::new(from, current, piece, None, MoveKind::Normal, None)),
                Some(victim) => {
                    if victim.color != piece.color {
                        out.push(Move::new(
                            from,
                            current,
                            piece,
                            Some(victim),
                            MoveKind::Normal,
                            None,
                        ));
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    fn lone_piece_board(kind: PieceKind, at: &str) -> (Board, Piece, Square) {
        let mut board = Board::empty();
        board.set_piece(square("a1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("h8"), Some(Piece::new(PieceKind::King, Color::Black)));
        let piece = Piece::new(kind, Color::White);
        let from = square(at);
        board.set_piece(from, Some(piece));
        (board, piece, from)
    }

    #[test]
    fn rook_on_open_board_has_fourteen_moves() {
        let (board, piece, from) = lone_piece_board(PieceKind::Rook, "d4");
        let mut out = Vec::new();
        generate_rook_moves(&board, from, piece, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn bishop_ray_stops_at_first_enemy_piece() {
        let (mut board, piece, from) = lone_piece_board(PieceKind::Bishop, "c1");
        board.set_piece(square("f4"), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let mut out = Vec::new();
        generate_bishop_moves(&board, from, piece, &mut out);

        assert!(out.iter().any(|m| m.to == square("f4") && m.is_capture()));
        assert!(!out.iter().any(|m| m.to == square("g5")), "ray must stop at capture");
    }

    #[test]
    fn own_piece_blocks_without_being_captured() {
        let (mut board, piece, from) = lone_piece_board(PieceKind::Rook, "a8");
        board.set_piece(square("a5"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = Vec::new();
        generate_rook_moves(&board, from, piece, &mut out);

        assert!(out.iter().any(|m| m.to == square("a6")));
        assert!(!out.iter().any(|m| m.to == square("a5")));
        assert!(!out.iter().any(|m| m.to == square("a4")));
    }

    #[test]
    fn queen_covers_both_ray_sets() {
        let (board, piece, from) = lone_piece_board(PieceKind::Queen, "d4");
        let mut out = Vec::new();
        generate_queen_moves(&board, from, piece, &mut out);
        // 14 rook-like plus 12 bishop-like targets from d4 on an otherwise
        // empty board (the a1 king blocks one diagonal square).
        assert!(out.iter().any(|m| m.to == square("d8")));
        assert!(out.iter().any(|m| m.to == square("h4")));
        assert!(out.iter().any(|m| m.to == square("g7")));
        assert!(out.iter().any(|m| m.to == square("b2")));
        assert!(!out.iter().any(|m| m.to == square("a1")), "own king blocks");
    }
}
