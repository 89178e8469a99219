//! Live game state: side to move, histories, clocks, and terminal status.
//!
//! `GameState` owns the single authoritative `Board`. It is mutated only by
//! `apply`, `reset`, `resign`, and `agree_draw`; search works on board
//! copies and never touches it.

use crate::chess_move::Move;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::zobrist::position_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    WhiteWinsCheckmate,
    BlackWinsCheckmate,
    Stalemate,
    DrawFiftyMove,
    DrawThreefold,
    DrawInsufficientMaterial,
    DrawAgreement,
    WhiteResigned,
    BlackResigned,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_history: Vec<Move>,
    /// Position fingerprints after each applied move, for repetition.
    position_history: Vec<u64>,
    half_move_clock: u16,
    full_move_number: u16,
    legal_moves: Vec<Move>,
    status: Status,
}

impl GameState {
    /// Fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Adopt an externally prepared position. Histories start empty; legal
    /// moves and status are computed for the given side.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            move_history: Vec::new(),
            position_history: Vec::new(),
            half_move_clock: 0,
            full_move_number: 1,
            legal_moves: Vec::new(),
            status: Status::InProgress,
        };
        state.refresh_legal_moves();
        state.refresh_status();
        state
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status != Status::InProgress
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves
            .iter()
            .filter(|mv| mv.from == from)
            .copied()
            .collect()
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    #[inline]
    pub fn move_number(&self) -> u16 {
        self.full_move_number
    }

    #[inline]
    pub fn half_move_clock(&self) -> u16 {
        self.half_move_clock
    }

    /// Apply a move. The move must match one of the cached legal moves by
    /// identity `(from, to, kind, promotion)`; the cached, annotated copy is
    /// the one recorded in history. The state is unchanged on error.
    pub fn apply(&mut self, mv: &Move) -> ChessResult<()> {
        if self.status != Status::InProgress {
            return Err(ChessError::GameOver);
        }
        let Some(chosen) = self.legal_moves.iter().find(|legal| *legal == mv).copied() else {
            return Err(ChessError::IllegalMove {
                notation: mv.to_coordinates(),
            });
        };

        if chosen.piece.kind == PieceKind::Pawn || chosen.is_capture() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }

        self.board.apply(&chosen);
        self.move_history.push(chosen);

        if self.side_to_move == Color::Black {
            self.full_move_number += 1;
        }
        self.side_to_move = self.side_to_move.opposite();

        self.position_history
            .push(position_key(&self.board, self.side_to_move));

        self.refresh_legal_moves();
        self.refresh_status();
        Ok(())
    }

    /// The side to move resigns.
    pub fn resign(&mut self) -> ChessResult<()> {
        if self.status != Status::InProgress {
            return Err(ChessError::GameOver);
        }
        self.status = match self.side_to_move {
            Color::White => Status::WhiteResigned,
            Color::Black => Status::BlackResigned,
        };
        Ok(())
    }

    /// Both players agree to a draw.
    pub fn agree_draw(&mut self) -> ChessResult<()> {
        if self.status != Status::InProgress {
            return Err(ChessError::GameOver);
        }
        self.status = Status::DrawAgreement;
        Ok(())
    }

    pub fn status_message(&self) -> String {
        match self.status {
            Status::InProgress => {
                if self.board.is_in_check(self.side_to_move) {
                    format!("{} is in check!", self.side_to_move)
                } else {
                    format!("{} to move", self.side_to_move)
                }
            }
            Status::WhiteWinsCheckmate => "Checkmate! White wins!".to_owned(),
            Status::BlackWinsCheckmate => "Checkmate! Black wins!".to_owned(),
            Status::Stalemate => "Stalemate! Draw.".to_owned(),
            Status::DrawFiftyMove => "Draw by fifty-move rule.".to_owned(),
            Status::DrawThreefold => "Draw by threefold repetition.".to_owned(),
            Status::DrawInsufficientMaterial => "Draw by insufficient material.".to_owned(),
            Status::DrawAgreement => "Draw by agreement.".to_owned(),
            Status::WhiteResigned => "White resigned. Black wins!".to_owned(),
            Status::BlackResigned => "Black resigned. White wins!".to_owned(),
        }
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = legal_moves(&self.board, self.side_to_move);
    }

    /// First matching rule wins: mate/stalemate, fifty-move, threefold,
    /// insufficient material.
    fn refresh_status(&mut self) {
        if self.legal_moves.is_empty() {
            self.status = if self.board.is_in_check(self.side_to_move) {
                match self.side_to_move {
                    Color::White => Status::BlackWinsCheckmate,
                    Color::Black => Status::WhiteWinsCheckmate,
                }
            } else {
                Status::Stalemate
            };
            return;
        }

        if self.half_move_clock >= 100 {
            self.status = Status::DrawFiftyMove;
            return;
        }

        let current = position_key(&self.board, self.side_to_move);
        let repetitions = self
            .position_history
            .iter()
            .filter(|key| **key == current)
            .count();
        if repetitions >= 3 {
            self.status = Status::DrawThreefold;
            return;
        }

        if self.is_insufficient_material() {
            self.status = Status::DrawInsufficientMaterial;
            return;
        }

        self.status = Status::InProgress;
    }

    /// FIDE insufficient material: K vs K, K+minor vs K, and K+B vs K+B with
    /// both bishops on same-colored squares. Any pawn, rook, queen, or a
    /// second minor on either side keeps the game alive.
    fn is_insufficient_material(&self) -> bool {
        let mut minors: [Vec<(PieceKind, Square)>; 2] = [Vec::new(), Vec::new()];

        for color in [Color::White, Color::Black] {
            for (square, piece) in self.board.pieces_of(color) {
                match piece.kind {
                    PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                    PieceKind::Bishop | PieceKind::Knight => {
                        minors[color.index()].push((piece.kind, square));
                    }
                    PieceKind::King => {}
                }
            }
            if minors[color.index()].len() > 1 {
                return false;
            }
        }

        match (&minors[0][..], &minors[1][..]) {
            ([], []) => true,
            ([_], []) | ([], [_]) => true,
            ([(PieceKind::Bishop, white)], [(PieceKind::Bishop, black)]) => {
                white.is_light_square() == black.is_light_square()
            }
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
