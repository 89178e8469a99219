//! Engine façade: difficulty selection and the best-move entry point.
//!
//! One `Engine` owns one `Searcher`, so its transposition table and killer
//! slots are private to it; callers wanting concurrent searches create one
//! engine per thread. `best_move` is a pure CPU-bound computation over a
//! board copy and runs to completion.

use tracing::debug;

use crate::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::StandardScorer;
use crate::search::iterative_deepening::Searcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed-depth search budget for each level.
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }
}

pub struct Engine {
    difficulty: Difficulty,
    searcher: Searcher,
    scorer: StandardScorer,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            searcher: Searcher::new(),
            scorer: StandardScorer,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Nodes visited by the most recent `best_move` call.
    #[inline]
    pub fn nodes_searched(&self) -> u64 {
        self.searcher.nodes_searched()
    }

    /// Compute the best move for the side to move, or `None` when the game
    /// is over. The returned move is the annotated copy from the game's
    /// legal-move cache.
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_game_over() || state.legal_moves().is_empty() {
            return None;
        }

        let result = self.searcher.best_move(
            state.board(),
            state.current_turn(),
            self.difficulty.depth(),
            &self.scorer,
        );
        let chosen = result.best_move?;
        debug!(
            best_move = %chosen,
            score = result.best_score,
            depth = result.reached_depth,
            nodes = result.nodes,
            "engine chose a move"
        );

        // Hand back the annotated equivalent so check/checkmate flags and
        // snapshots match what `GameState::apply` will record.
        state
            .legal_moves()
            .iter()
            .find(|legal| **legal == chosen)
            .copied()
            .or(Some(chosen))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::{GameState, Status};

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn difficulty_maps_to_search_depth() {
        assert_eq!(Difficulty::Easy.depth(), 2);
        assert_eq!(Difficulty::Medium.depth(), 4);
        assert_eq!(Difficulty::Hard.depth(), 5);
        let mut engine = Engine::new();
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn engine_move_is_legal_and_applies() {
        let mut engine = Engine::new();
        engine.set_difficulty(Difficulty::Easy);
        let mut state = GameState::new();
        let mv = engine.best_move(&state).expect("engine should move");
        assert!(state.legal_moves().contains(&mv));
        state.apply(&mv).expect("engine move should apply");
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn engine_returns_none_when_game_is_over() {
        let mut engine = Engine::new();
        let mut state = GameState::new();
        state.resign().expect("resign should succeed");
        assert!(engine.best_move(&state).is_none());
    }

    #[test]
    fn engine_mates_in_one_at_medium() {
        let mut board = Board::empty();
        board.set_piece(square("h1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(square("a1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("b7"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(square("e8"), Some(Piece::new(PieceKind::King, Color::Black)));
        let mut state = GameState::from_board(board, Color::White);

        let mut engine = Engine::new();
        let mv = engine.best_move(&state).expect("mate should be found");
        assert!(mv.gives_checkmate, "returned move should carry annotations");
        state.apply(&mv).expect("mating move should apply");
        assert_eq!(state.status(), Status::WhiteWinsCheckmate);
    }
}
