//! Zobrist hashing for position identity.
//!
//! One 64-bit key serves both the repetition history and the transposition
//! table. The random tables come from a fixed-seed xorshift64* stream, so
//! keys are identical across runs; tests and saved diagnostics can rely on
//! them.

use std::sync::OnceLock;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

struct ZobristTables {
    // [color][piece_kind][square]
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

/// Deterministic xorshift64* stream for table generation. Any nonzero seed
/// works; this one is fixed so position keys never change between builds.
struct KeyStream {
    state: u64,
}

impl KeyStream {
    const SEED: u64 = 0x71E6_4DE5_2D0B_95C1;

    fn new() -> Self {
        Self { state: Self::SEED }
    }

    fn next_key(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn fill(&mut self, keys: &mut [u64]) {
        for key in keys {
            *key = self.next_key();
        }
    }
}

fn build_tables() -> ZobristTables {
    let mut stream = KeyStream::new();

    let mut tables = ZobristTables {
        piece_square: [[[0; 64]; 6]; 2],
        side_to_move: 0,
        castling: [0; 16],
        en_passant_file: [0; 8],
    };
    for color in &mut tables.piece_square {
        for piece in color.iter_mut() {
            stream.fill(piece);
        }
    }
    tables.side_to_move = stream.next_key();
    stream.fill(&mut tables.castling);
    stream.fill(&mut tables.en_passant_file);
    tables
}

const CASTLE_WHITE_KINGSIDE: u8 = 1 << 0;
const CASTLE_WHITE_QUEENSIDE: u8 = 1 << 1;
const CASTLE_BLACK_KINGSIDE: u8 = 1 << 2;
const CASTLE_BLACK_QUEENSIDE: u8 = 1 << 3;

/// Castling-rights mask derived from the board: a side keeps a right while
/// its king is unmoved and the corresponding rook still sits unmoved on its
/// home corner.
fn castling_rights_mask(board: &Board) -> u8 {
    let mut mask = 0u8;
    for color in [Color::White, Color::Black] {
        let king_square = board.king_square(color);
        let king_unmoved = matches!(
            board.piece_at(king_square),
            Some(piece) if piece.kind == PieceKind::King && piece.color == color && !piece.has_moved
        );
        if !king_unmoved {
            continue;
        }

        let back = color.back_rank();
        let (kingside_bit, queenside_bit) = match color {
            Color::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
            Color::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
        };
        if rook_at_home(board, color, Square::at(back, 7)) {
            mask |= kingside_bit;
        }
        if rook_at_home(board, color, Square::at(back, 0)) {
            mask |= queenside_bit;
        }
    }
    mask
}

#[inline]
fn rook_at_home(board: &Board, color: Color, square: Square) -> bool {
    matches!(
        board.piece_at(square),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
    )
}

/// Compute the full position key: piece placement, side to move, castling
/// rights, and en-passant file.
pub fn position_key(board: &Board, side_to_move: Color) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square::at(row, col);
            if let Some(piece) = board.piece_at(square) {
                let index = (row * 8 + col) as usize;
                key ^= tables.piece_square[piece.color.index()][piece.kind.index()][index];
            }
        }
    }

    if side_to_move == Color::Black {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[castling_rights_mask(board) as usize];

    if let Some(target) = board.en_passant_target() {
        key ^= tables.en_passant_file[target.col() as usize];
    }

    key
}
