//! Perft validation counters.
//!
//! Recursively explores the legal move tree to verify generation
//! correctness. `perft_nodes` counts leaves only; `perft_counts` also
//! tallies tactical events at the leaves.

use crate::chess_move::Move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, MoveKind};
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_unannotated};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Leaf count only, via the non-annotating generator.
pub fn perft_nodes(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in legal_moves_unannotated(board, color) {
        let mut after = board.clone();
        after.apply(&mv);
        nodes += perft_nodes(&after, color.opposite(), depth - 1);
    }
    nodes
}

/// Leaf count plus per-kind tactical event totals.
pub fn perft_counts(board: &Board, color: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    recurse(board, color, depth, &mut counts);
    counts
}

fn recurse(board: &Board, color: Color, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(board, color) {
        if depth == 1 {
            tally_leaf(&mv, counts);
            continue;
        }
        let mut after = board.clone();
        after.apply(&mv);
        recurse(&after, color.opposite(), depth - 1, counts);
    }
}

fn tally_leaf(mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.kind == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if mv.is_castling() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if mv.gives_check {
        counts.checks += 1;
    }
    if mv.gives_checkmate {
        counts.checkmates += 1;
    }
}
