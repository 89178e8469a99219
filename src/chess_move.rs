//! Move representation and standard algebraic notation.
//!
//! A `Move` is a value: it carries snapshots of the moving and captured
//! pieces rather than references into any board, so applying it to one board
//! copy never aliases another. Equality and hashing cover only the identity
//! quadruple `(from, to, kind, promotion)`; snapshots and check annotations
//! are payload, not identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{MoveKind, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Snapshot of the moving piece as it stood before the move.
    pub piece: Piece,
    /// Snapshot of the captured piece, if any (including en passant).
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
    pub gives_check: bool,
    pub gives_checkmate: bool,
}

impl Move {
    pub fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
        promotion: Option<PieceKind>,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            kind,
            promotion,
            gives_check: false,
            gives_checkmate: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.kind == MoveKind::Promotion
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }

    /// Render the move in SAN. Disambiguation beyond the pawn-capture origin
    /// file is not attempted.
    pub fn to_algebraic(&self) -> String {
        let suffix = if self.gives_checkmate {
            "#"
        } else if self.gives_check {
            "+"
        } else {
            ""
        };

        match self.kind {
            MoveKind::CastleKingside => return format!("O-O{suffix}"),
            MoveKind::CastleQueenside => return format!("O-O-O{suffix}"),
            _ => {}
        }

        let mut out = String::new();
        out.push_str(self.piece.kind.notation());
        if self.piece.kind == PieceKind::Pawn && self.is_capture() {
            out.push(char::from(b'a' + self.from.col()));
        }
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&self.to.to_algebraic());
        if let Some(promotion) = self.promotion {
            out.push('=');
            out.push_str(promotion.notation());
        }
        out.push_str(suffix);
        out
    }

    /// Bare `from`-`to` coordinates, e.g. `e2e4`.
    pub fn to_coordinates(&self) -> String {
        format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.kind == other.kind
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.kind.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use std::collections::hash_map::DefaultHasher;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    fn hash_of(mv: &Move) -> u64 {
        let mut hasher = DefaultHasher::new();
        mv.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_snapshots_and_annotations() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let mut a = Move::new(square("g1"), square("f3"), knight, None, MoveKind::Normal, None);
        let mut b = a;
        b.piece.has_moved = true;
        b.captured = Some(Piece::new(PieceKind::Pawn, Color::Black));
        a.gives_check = true;
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn promotion_kind_is_part_of_identity() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let queen = Move::new(
            square("a7"),
            square("a8"),
            pawn,
            None,
            MoveKind::Promotion,
            Some(PieceKind::Queen),
        );
        let rook = Move::new(
            square("a7"),
            square("a8"),
            pawn,
            None,
            MoveKind::Promotion,
            Some(PieceKind::Rook),
        );
        assert_ne!(queen, rook);
    }

    #[test]
    fn san_for_plain_and_capturing_moves() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let quiet = Move::new(square("g1"), square("f3"), knight, None, MoveKind::Normal, None);
        assert_eq!(quiet.to_algebraic(), "Nf3");

        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let capture = Move::new(
            square("e4"),
            square("d5"),
            pawn,
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
            MoveKind::Normal,
            None,
        );
        assert_eq!(capture.to_algebraic(), "exd5");
    }

    #[test]
    fn san_for_castling_promotion_and_check_suffixes() {
        let king = Piece::new(PieceKind::King, Color::White);
        let mut short = Move::new(
            square("e1"),
            square("g1"),
            king,
            None,
            MoveKind::CastleKingside,
            None,
        );
        assert_eq!(short.to_algebraic(), "O-O");
        short.gives_check = true;
        assert_eq!(short.to_algebraic(), "O-O+");

        let long = Move::new(
            square("e1"),
            square("c1"),
            king,
            None,
            MoveKind::CastleQueenside,
            None,
        );
        assert_eq!(long.to_algebraic(), "O-O-O");

        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let mut promo = Move::new(
            square("b7"),
            square("a8"),
            pawn,
            Some(Piece::new(PieceKind::Rook, Color::Black)),
            MoveKind::Promotion,
            Some(PieceKind::Queen),
        );
        promo.gives_checkmate = true;
        assert_eq!(promo.to_algebraic(), "bxa8=Q#");
    }
}
