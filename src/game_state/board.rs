//! Placement grid and move execution.
//!
//! The board is a plain 8×8 grid of piece values plus two caches: the king
//! squares (kept accurate across every `apply`) and the en-passant target.
//! `apply` executes a move without validating it; legality is the move
//! generator's job.

use crate::chess_move::Move;
use crate::game_state::chess_types::{Color, MoveKind, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    en_passant_target: Option<Square>,
    white_king_square: Square,
    black_king_square: Square,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back.into_iter().enumerate() {
            board.set_piece(Square::at(0, col as u8), Some(Piece::new(kind, Color::White)));
            board.set_piece(Square::at(7, col as u8), Some(Piece::new(kind, Color::Black)));
        }
        for col in 0..8 {
            board.set_piece(
                Square::at(1, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set_piece(
                Square::at(6, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
        }

        board
    }

    /// An empty grid. Both kings must be placed before attack queries or
    /// `king_square` are meaningful; the caches default to e1/e8.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            en_passant_target: None,
            white_king_square: Square::at(0, 4),
            black_king_square: Square::at(7, 4),
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Place or clear a square, keeping the king caches accurate.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
        if let Some(piece) = piece {
            if piece.kind == PieceKind::King {
                match piece.color {
                    Color::White => self.white_king_square = square,
                    Color::Black => self.black_king_square = square,
                }
            }
        }
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    /// Execute a move without validation. Side effects per move kind:
    /// castling relocates the rook, en passant removes the bypassed pawn,
    /// promotion replaces the pawn, a double push records the skipped square
    /// as the en-passant target, and any other move clears it.
    pub fn apply(&mut self, mv: &Move) {
        let Some(mut piece) = self.piece_at(mv.from) else {
            return;
        };
        piece.has_moved = true;

        match mv.kind {
            MoveKind::CastleKingside => {
                let back = piece.color.back_rank();
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(piece));
                if let Some(mut rook) = self.piece_at(Square::at(back, 7)) {
                    rook.has_moved = true;
                    self.set_piece(Square::at(back, 7), None);
                    self.set_piece(Square::at(back, 5), Some(rook));
                }
            }
            MoveKind::CastleQueenside => {
                let back = piece.color.back_rank();
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(piece));
                if let Some(mut rook) = self.piece_at(Square::at(back, 0)) {
                    rook.has_moved = true;
                    self.set_piece(Square::at(back, 0), None);
                    self.set_piece(Square::at(back, 3), Some(rook));
                }
            }
            MoveKind::EnPassant => {
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(piece));
                self.set_piece(Square::at(mv.from.row(), mv.to.col()), None);
            }
            MoveKind::Promotion => {
                let promoted_kind = mv.promotion.unwrap_or(PieceKind::Queen);
                let promoted = Piece {
                    kind: promoted_kind,
                    color: piece.color,
                    has_moved: true,
                };
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(promoted));
            }
            MoveKind::DoublePawnPush => {
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(piece));
                let skipped_row = (mv.from.row() as i8 + piece.color.pawn_direction()) as u8;
                self.en_passant_target = Some(Square::at(skipped_row, mv.from.col()));
            }
            MoveKind::Normal => {
                self.set_piece(mv.from, None);
                self.set_piece(mv.to, Some(piece));
            }
        }

        if mv.kind != MoveKind::DoublePawnPush {
            self.en_passant_target = None;
        }
    }

    /// Is `square` attacked by any piece of `attacker`? Probes pawn attack
    /// origins, knight and king offsets, then the bishop and rook rays
    /// (queens match both ray sets).
    pub fn square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A pawn of `attacker` attacks `square` from one row behind it.
        let towards_pawn = attacker.opposite().pawn_direction();
        for d_col in [-1, 1] {
            if let Some(origin) = square.offset(towards_pawn, d_col) {
                if self.has_piece(origin, attacker, PieceKind::Pawn) {
                    return true;
                }
            }
        }

        for (d_row, d_col) in KNIGHT_OFFSETS {
            if let Some(origin) = square.offset(d_row, d_col) {
                if self.has_piece(origin, attacker, PieceKind::Knight) {
                    return true;
                }
            }
        }

        for (d_row, d_col) in KING_OFFSETS {
            if let Some(origin) = square.offset(d_row, d_col) {
                if self.has_piece(origin, attacker, PieceKind::King) {
                    return true;
                }
            }
        }

        for direction in BISHOP_DIRECTIONS {
            if self.ray_attacked(square, direction, attacker, PieceKind::Bishop) {
                return true;
            }
        }
        for direction in ROOK_DIRECTIONS {
            if self.ray_attacked(square, direction, attacker, PieceKind::Rook) {
                return true;
            }
        }

        false
    }

    fn ray_attacked(
        &self,
        square: Square,
        (d_row, d_col): (i8, i8),
        attacker: Color,
        slider: PieceKind,
    ) -> bool {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            current = next;
            if let Some(piece) = self.piece_at(current) {
                return piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen);
            }
        }
        false
    }

    #[inline]
    fn has_piece(&self, square: Square, color: Color, kind: PieceKind) -> bool {
        matches!(
            self.piece_at(square),
            Some(piece) if piece.color == color && piece.kind == kind
        )
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.square_attacked(self.king_square(color), color.opposite())
    }

    /// All occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        let mut found = Vec::with_capacity(16);
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::at(row, col);
                if let Some(piece) = self.piece_at(square) {
                    if piece.color == color {
                        found.push((square, piece));
                    }
                }
            }
        }
        found
    }

    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Material balance in pawn units, positive when White is ahead.
    pub fn material_balance(&self) -> i32 {
        let mut balance = 0;
        for slot in self.squares.iter().flatten().flatten() {
            match slot.color {
                Color::White => balance += slot.value(),
                Color::Black => balance -= slot.value(),
            }
        }
        balance
    }

    /// Non-pawn, non-king material of one side in pawn units. Feeds the
    /// evaluator's king-safety gate.
    pub(crate) fn heavy_material(&self, color: Color) -> i32 {
        let mut total = 0;
        for slot in self.squares.iter().flatten().flatten() {
            if slot.color == color
                && !matches!(slot.kind, PieceKind::Pawn | PieceKind::King)
            {
                total += slot.value();
            }
        }
        total
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
