//! Full legal move generation pipeline.
//!
//! Piece-wise pseudo-legal generation, apply-and-reject king-safety
//! filtering, then optional check/checkmate annotation. The annotating pass
//! recurses through the non-annotating one, so it always bottoms out.

use crate::chess_move::Move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Pseudo-legal moves for the piece on `from`, empty if the square is bare.
/// King safety is not considered here.
pub fn pseudo_legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }
    out
}

/// All legal moves for `color`, annotated with check and checkmate flags.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    generate(board, color, true)
}

/// Annotation-free variant for search and perft inner nodes, where the
/// flags would only be recomputed work.
pub(crate) fn legal_moves_unannotated(board: &Board, color: Color) -> Vec<Move> {
    generate(board, color, false)
}

fn generate(board: &Board, color: Color, annotate: bool) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        pseudo.extend(pseudo_legal_moves_from(board, from));
    }

    let mut legal = Vec::with_capacity(pseudo.len());
    for mut mv in pseudo {
        let mut after = board.clone();
        after.apply(&mv);

        // Illegal if our own king can be taken afterwards.
        if after.is_in_check(color) {
            continue;
        }

        if annotate && after.is_in_check(color.opposite()) {
            mv.gives_check = true;
            if legal_moves_unannotated(&after, color.opposite()).is_empty() {
                mv.gives_checkmate = true;
            }
        }

        legal.push(mv);
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::Move;
    use crate::game_state::chess_types::{MoveKind, Piece};

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Color::White).len(), 20);
        assert_eq!(legal_moves(&board, Color::Black).len(), 20);
        assert_eq!(legal_moves_unannotated(&board, Color::White).len(), 20);
    }

    #[test]
    fn no_legal_move_leaves_own_king_in_check() {
        let board = Board::new();
        for mv in legal_moves(&board, Color::White) {
            let mut after = board.clone();
            after.apply(&mv);
            assert!(!after.is_in_check(Color::White), "{mv} exposes the king");
        }
    }

    #[test]
    fn pinned_piece_may_not_move_off_the_line() {
        let mut board = Board::empty();
        board.set_piece(square("e1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("e4"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("e8"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(square("a8"), Some(Piece::new(PieceKind::King, Color::Black)));

        let rook_moves: Vec<_> = legal_moves(&board, Color::White)
            .into_iter()
            .filter(|m| m.from == square("e4"))
            .collect();
        assert!(!rook_moves.is_empty());
        assert!(
            rook_moves.iter().all(|m| m.to.col() == 4),
            "pinned rook may only slide along the e-file"
        );
    }

    #[test]
    fn check_evasions_only_while_in_check() {
        // Back-rank check: the white king on e1 faces a rook on e8 with no
        // blockers; every legal reply must resolve the check.
        let mut board = Board::empty();
        board.set_piece(square("e1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("a2"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("e8"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(square("g8"), Some(Piece::new(PieceKind::King, Color::Black)));
        assert!(board.is_in_check(Color::White));

        for mv in legal_moves(&board, Color::White) {
            let mut after = board.clone();
            after.apply(&mv);
            assert!(!after.is_in_check(Color::White));
        }
        // Blocking with the rook on e2 is one of the evasions.
        assert!(legal_moves(&board, Color::White)
            .iter()
            .any(|m| m.from == square("a2") && m.to == square("e2")));
    }

    #[test]
    fn checking_moves_are_annotated() {
        let mut board = Board::empty();
        board.set_piece(square("a1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("h1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("e8"), Some(Piece::new(PieceKind::King, Color::Black)));

        let check = legal_moves(&board, Color::White)
            .into_iter()
            .find(|m| m.from == square("h1") && m.to == square("h8"))
            .expect("Rh8 should be legal");
        assert!(check.gives_check);
        assert!(!check.gives_checkmate, "the king can step off the back rank");
    }

    #[test]
    fn mating_move_is_annotated_as_checkmate() {
        // Two-rook ladder: Rh8 delivers mate with the black king confined to
        // the back rank by the rook on g7.
        let mut board = Board::empty();
        board.set_piece(square("a1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("g7"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("h1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("e8"), Some(Piece::new(PieceKind::King, Color::Black)));

        let mate = legal_moves(&board, Color::White)
            .into_iter()
            .find(|m| m.from == square("h1") && m.to == square("h8"))
            .expect("Rh8 should be legal");
        assert!(mate.gives_check);
        assert!(mate.gives_checkmate);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        // King e5, pawn e5-adjacent: capturing en passant would clear two
        // pawns off the fifth rank and expose the king to the h5 rook.
        let mut board = Board::empty();
        board.set_piece(square("e5"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("f5"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(square("h5"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(square("a8"), Some(Piece::new(PieceKind::King, Color::Black)));
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        board.set_piece(square("g7"), Some(black_pawn));
        board.apply(&Move::new(
            square("g7"),
            square("g5"),
            black_pawn,
            None,
            MoveKind::DoublePawnPush,
            None,
        ));
        assert_eq!(board.en_passant_target(), Some(square("g6")));

        let moves = legal_moves(&board, Color::White);
        assert!(
            !moves.iter().any(|m| m.kind == MoveKind::EnPassant),
            "fxg6 en passant would leave the king on a bare fifth rank"
        );
    }
}
