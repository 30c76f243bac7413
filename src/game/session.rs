//! Game session
//!
//! A [`Session`] owns everything about one sitting at the board: the engine board, the modal
//! [`SessionState`], who plays which side, the move history and the captured pieces. All moves,
//! human or AI, go through the same validating path so they follow the same rules.
//!
//! # Turn Flow
//!
//! ```text
//! start() ─→ Running ─→ play()/autoplay_step() ... ─→ Over(outcome)
//!               ↑                                          │
//!               └────────────── new_game() / undo_last() ──┘
//! ```

use jungle_engine::{
    apply_move, available_cells, game_outcome, game_status, reset_game, undo_move, Board,
    CaptureRecord, GameStatus, JungleEngineError, Move, Position,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::core::{transition, SessionState};
use crate::game::ai::{compute_ai_move, AiConfig, AiReply, GameMode};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{CapturedPieces, MoveHistory, MoveRecord};

pub struct Session {
    board: Board,
    state: SessionState,
    config: AiConfig,
    history: MoveHistory,
    captured: CapturedPieces,
    selected: Option<Position>,
    rng: StdRng,
    /// Bumped by every move, undo and new game
    revision: u64,
    /// Autoplay stops after this many plies in computer-vs-computer games
    max_plies: usize,
}

impl Session {
    /// Create a session waiting on the "new game" screen
    ///
    /// `seed` makes AI choices reproducible; without it the AI draws from OS entropy.
    pub fn new(config: AiConfig, max_plies: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            board: Board::standard(),
            state: SessionState::AwaitingStart,
            config,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            selected: None,
            rng,
            revision: 0,
            max_plies,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Identifies the current position for [`AiWorker`](crate::game::ai::AiWorker) requests
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Engine status of the current position
    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    /// Leave the "new game" screen. Does nothing once a game has started.
    pub fn start(&mut self) -> GameResult<()> {
        if self.state == SessionState::AwaitingStart {
            transition(&mut self.state, SessionState::Running)?;
            info!("[SESSION] Game started ({:?})", self.config.mode);
        }
        Ok(())
    }

    /// Reset to the opening position and start playing
    pub fn new_game(&mut self) -> GameResult<()> {
        reset_game(&mut self.board);
        self.history.clear();
        self.captured.clear();
        self.selected = None;
        self.revision += 1;

        transition(&mut self.state, SessionState::Running)?;
        info!("[SESSION] New game");
        Ok(())
    }

    /// Select a piece of the side to move and return the cells it may move to
    pub fn select(&mut self, position: Position) -> GameResult<Vec<Position>> {
        self.ensure_running()?;

        let to_move = self.board.side_to_move();
        let piece = match self.board.cell(position).and_then(|cell| cell.piece()) {
            Some(piece) if piece.side == to_move => *piece,
            _ => {
                self.selected = None;
                return Err(GameError::InvalidSelection { position });
            }
        };

        self.selected = Some(position);
        Ok(available_cells(&self.board, &piece))
    }

    /// Destinations of the selected piece; empty when nothing is selected
    pub fn selected_moves(&self) -> Vec<Position> {
        self.selected
            .and_then(|position| self.board.piece_at(position))
            .map(|piece| available_cells(&self.board, piece))
            .unwrap_or_default()
    }

    /// Play a human move
    ///
    /// # Errors
    ///
    /// - [`GameError::NotRunning`] outside a running game
    /// - [`GameError::NotYourTurn`] when the side to move is AI controlled
    /// - [`GameError::Engine`] when the engine rejects the move
    pub fn play(&mut self, from: Position, to: Position) -> GameResult<CaptureRecord> {
        self.ensure_running()?;

        let side = self.board.side_to_move();
        if self.config.mode.is_ai_controlled(side) {
            return Err(GameError::NotYourTurn { side });
        }

        let played = self.commit(from, to).inspect_err(|e| {
            warn!("[SESSION] Rejected {} {}: {}", from, to, e);
        })?;
        Ok(played.record)
    }

    /// Let the AI move if the side to move is AI controlled
    ///
    /// Returns `Ok(None)` when it is a human's turn, the game is not running, or a
    /// computer-vs-computer game has reached its ply limit.
    pub fn autoplay_step(&mut self) -> GameResult<Option<MoveRecord>> {
        if !self.state.is_running() || !self.is_ai_turn() {
            return Ok(None);
        }
        if self.ply_limit_reached() {
            info!("[SESSION] Ply limit {} reached, autoplay stopped", self.max_plies);
            return Ok(None);
        }

        let side = self.board.side_to_move();
        let Some(mv) = compute_ai_move(&self.board, side, &self.config, &mut self.rng) else {
            warn!("[SESSION] AI found no move for {}", side);
            return Ok(None);
        };

        self.commit(mv.from, mv.to).map(Some)
    }

    /// Apply a move computed by an [`AiWorker`](crate::game::ai::AiWorker)
    ///
    /// # Errors
    ///
    /// [`GameError::StaleAiReply`] if the position changed since the request was sent.
    pub fn apply_ai_reply(&mut self, reply: AiReply) -> GameResult<Option<MoveRecord>> {
        self.ensure_running()?;

        if reply.revision != self.revision
            || reply.ply != self.history.len()
            || reply.side != self.board.side_to_move()
        {
            return Err(GameError::StaleAiReply { ply: reply.ply });
        }
        if !self.config.mode.is_ai_controlled(reply.side) {
            return Err(GameError::NotYourTurn { side: reply.side });
        }

        match reply.mv {
            Some(mv) => self.commit(mv.from, mv.to).map(Some),
            None => Ok(None),
        }
    }

    /// Take back the last move
    ///
    /// Against the computer this also takes back the AI's reply, so the human is to move again.
    /// Returns the number of plies undone.
    pub fn undo_last(&mut self) -> GameResult<usize> {
        if self.state == SessionState::AwaitingStart {
            return Err(GameError::NotRunning { state: self.state });
        }

        self.undo_one()?;
        let mut undone = 1;
        while matches!(self.config.mode, GameMode::PvC { .. })
            && self.is_ai_turn()
            && !self.history.is_empty()
        {
            self.undo_one()?;
            undone += 1;
        }

        if self.state.outcome().is_some() {
            transition(&mut self.state, SessionState::Running)?;
        }
        self.selected = None;

        info!("[SESSION] Undid {} ply(s)", undone);
        Ok(undone)
    }

    /// Whether the side to move is played by the AI
    pub fn is_ai_turn(&self) -> bool {
        self.config.mode.is_ai_controlled(self.board.side_to_move())
    }

    pub fn ply_limit_reached(&self) -> bool {
        self.config.mode == GameMode::CvC && self.history.len() >= self.max_plies
    }

    fn ensure_running(&self) -> GameResult<()> {
        if self.state.is_running() {
            Ok(())
        } else {
            Err(GameError::NotRunning { state: self.state })
        }
    }

    fn commit(&mut self, from: Position, to: Position) -> GameResult<MoveRecord> {
        let record = apply_move(&mut self.board, from, to)?;
        let mover = *self
            .board
            .piece_at(to)
            .ok_or(JungleEngineError::NoPieceAtPosition { position: to })?;

        let played = MoveRecord {
            side: mover.side,
            kind: mover.kind,
            mv: Move::new(from, to),
            captured: record.captured.map(|piece| piece.kind),
            record,
        };
        if let Some(taken) = record.captured {
            self.captured.add_capture(taken.side, taken.kind);
        }
        self.history.add_move(played);
        self.selected = None;
        self.revision += 1;
        info!("[SESSION] {}", played);

        if let Some(outcome) = game_outcome(&self.board) {
            transition(&mut self.state, SessionState::Over(outcome))?;
            info!("[SESSION] {} wins: {}", outcome.winner, outcome.reason);
        }

        Ok(played)
    }

    fn undo_one(&mut self) -> GameResult<()> {
        let last = self.history.pop().ok_or(GameError::NothingToUndo)?;
        undo_move(&mut self.board, last.mv.from, last.mv.to, last.record);
        self.revision += 1;
        if last.captured.is_some() {
            self.captured.undo_capture(last.side.opponent());
        }
        debug!("[SESSION] Took back {}", last);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jungle_engine::Side;

    fn pos(col: i8, row: i8) -> Position {
        Position::new(col, row)
    }

    fn pvp() -> Session {
        let config = AiConfig {
            mode: GameMode::PvP,
            ..AiConfig::default()
        };
        Session::new(config, 100, Some(1))
    }

    #[test]
    fn test_moves_rejected_before_start() {
        let mut session = pvp();
        assert!(matches!(
            session.play(pos(5, 7), pos(5, 6)),
            Err(GameError::NotRunning { .. })
        ));
        assert!(matches!(session.undo_last(), Err(GameError::NotRunning { .. })));
    }

    #[test]
    fn test_select_own_piece_only() {
        let mut session = pvp();
        session.start().expect("start");

        let targets = session.select(pos(5, 7)).expect("light dog");
        assert!(targets.contains(&pos(5, 6)));
        assert_eq!(session.selected_moves(), targets);

        assert!(matches!(
            session.select(pos(1, 1)),
            Err(GameError::InvalidSelection { .. })
        ));
        assert_eq!(session.selected(), None);
        assert!(session.selected_moves().is_empty());
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let config = AiConfig {
            mode: GameMode::PvC {
                ai_side: Side::Light,
            },
            ..AiConfig::default()
        };
        let mut session = Session::new(config, 100, Some(4));
        session.start().expect("start");

        assert!(matches!(
            session.play(pos(5, 7), pos(5, 6)),
            Err(GameError::NotYourTurn { side: Side::Light })
        ));

        let played = session.autoplay_step().expect("ai move").expect("light moved");
        assert_eq!(played.side, Side::Light);
        assert_eq!(session.board().side_to_move(), Side::Dark);
        assert_eq!(session.autoplay_step().expect("human turn"), None);
    }

    #[test]
    fn test_stale_reply_rejected() {
        let config = AiConfig {
            mode: GameMode::CvC,
            ..AiConfig::default()
        };
        let mut session = Session::new(config, 100, Some(4));
        session.start().expect("start");

        let reply = AiReply {
            side: Side::Light,
            revision: 0,
            ply: 3,
            mv: None,
            thinking_time: std::time::Duration::ZERO,
        };
        assert!(matches!(
            session.apply_ai_reply(reply),
            Err(GameError::StaleAiReply { ply: 3 })
        ));
    }

    #[test]
    fn test_reply_from_previous_game_rejected() {
        //! Same ply, same side, but the board was reset in between
        let config = AiConfig {
            mode: GameMode::CvC,
            ..AiConfig::default()
        };
        let mut session = Session::new(config, 100, Some(4));
        session.start().expect("start");

        let reply = AiReply {
            side: Side::Light,
            revision: session.revision(),
            ply: 0,
            mv: Some(Move::new(pos(5, 7), pos(5, 6))),
            thinking_time: std::time::Duration::ZERO,
        };
        session.new_game().expect("new game");
        assert!(matches!(
            session.apply_ai_reply(reply),
            Err(GameError::StaleAiReply { ply: 0 })
        ));
        assert!(session.history().is_empty());

        let fresh = AiReply {
            revision: session.revision(),
            ..reply
        };
        assert!(session.apply_ai_reply(fresh).expect("fresh reply").is_some());
    }

    #[test]
    fn test_off_board_selection_is_an_error() {
        let mut session = pvp();
        session.start().expect("start");

        let err = session.select(pos(-1, 3)).expect_err("off the board");
        assert!(matches!(err, GameError::InvalidSelection { .. }));
        assert!(err.to_string().contains("(-1, 3)"));

        assert!(matches!(
            session.play(pos(7, 9), pos(6, 8)),
            Err(GameError::Engine(_))
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_ply_limit_stops_autoplay() {
        let config = AiConfig {
            mode: GameMode::CvC,
            ..AiConfig::default()
        };
        let mut session = Session::new(config, 2, Some(8));
        session.start().expect("start");

        assert!(session.autoplay_step().expect("ply 1").is_some());
        assert!(session.autoplay_step().expect("ply 2").is_some());
        assert_eq!(session.autoplay_step().expect("limit"), None);
        assert!(session.ply_limit_reached());
        assert_eq!(session.history().len(), 2);
    }
}
