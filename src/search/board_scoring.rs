//! Static position evaluation.
//!
//! Centipawn-like scores from the side to move's perspective: material,
//! piece-square tables, centre control, and a pawn-shield king-safety term.
//! Endgame status is a pure function of the board and is recomputed at every
//! evaluation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Mate scores sit far outside any material evaluation.
pub const MATE_SCORE: i32 = 100_000;

/// The board counts as an endgame once at most 12 pieces remain.
#[inline]
pub fn is_endgame(board: &Board) -> bool {
    board.piece_count() <= 12
}

/// Static scorer interface; search stays independent of the heuristics.
pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `side_to_move`.
    fn score(&self, board: &Board, side_to_move: Color) -> i32;
}

/// Material + piece-square tables + centre control + king safety.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board, side_to_move: Color) -> i32 {
        let endgame = is_endgame(board);
        let mut score = 0i32;

        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = Square::at(row, col);
                let Some(piece) = board.piece_at(square) else {
                    continue;
                };
                let value = piece.value() * 100 + table_bonus(piece.kind, piece.color, square, endgame);
                match piece.color {
                    Color::White => score += value,
                    Color::Black => score -= value,
                }
            }
        }

        score += centre_control(board);
        score += king_safety(board);

        match side_to_move {
            Color::White => score,
            Color::Black => -score,
        }
    }
}

/// The four centre squares reward occupation: pawns 20, anything else 10.
fn centre_control(board: &Board) -> i32 {
    let mut bonus = 0;
    for (row, col) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        if let Some(piece) = board.piece_at(Square::at(row, col)) {
            let value = if piece.kind == PieceKind::Pawn { 20 } else { 10 };
            match piece.color {
                Color::White => bonus += value,
                Color::Black => bonus -= value,
            }
        }
    }
    bonus
}

/// Each friendly pawn on the three squares in front of the king is worth 15,
/// counted only while the opponent still has more than 10 pawn units of
/// non-pawn material to attack with.
fn king_safety(board: &Board) -> i32 {
    let mut safety = 0;
    if board.heavy_material(Color::Black) > 10 {
        safety += pawn_shield(board, Color::White);
    }
    if board.heavy_material(Color::White) > 10 {
        safety -= pawn_shield(board, Color::Black);
    }
    safety
}

fn pawn_shield(board: &Board, side: Color) -> i32 {
    let king = board.king_square(side);
    let direction = side.pawn_direction();
    let mut shield = 0;
    for d_col in [-1, 0, 1] {
        let Some(square) = king.offset(direction, d_col) else {
            continue;
        };
        if matches!(
            board.piece_at(square),
            Some(piece) if piece.kind == PieceKind::Pawn && piece.color == side
        ) {
            shield += 15;
        }
    }
    shield
}

/// Piece-square bonus. Tables are written from White's perspective with the
/// back rank last, so White indexes with the row mirrored and Black reads
/// rows directly.
fn table_bonus(kind: PieceKind, color: Color, square: Square, endgame: bool) -> i32 {
    let row = match color {
        Color::White => 7 - square.row(),
        Color::Black => square.row(),
    } as usize;
    let col = square.col() as usize;
    match kind {
        PieceKind::Pawn => PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => {
            if endgame {
                KING_ENDGAME_TABLE[row][col]
            } else {
                KING_MIDDLEGAME_TABLE[row][col]
            }
        }
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_MIDDLEGAME_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-20,-20,-30,-40,-50],
    [-30,-20,-10,  0,  0,-10,-20,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-30,  0,  0,  0,  0,-30,-30],
    [-50,-30,-30,-30,-30,-30,-30,-50],
];
