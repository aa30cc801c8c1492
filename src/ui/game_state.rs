//! Game state management for the Othello GUI

use crate::config::{AgentConfig, Difficulty};
use crate::{AIEngine, Board, GameOutcome, MoveRecord, MoveResult, Pos, Side};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Side },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Dark }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// One entry of the game history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Move(MoveRecord),
    /// The given side had no legal move
    Pass(Side),
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub history: Vec<Turn>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    time_budget: Duration,
}

/// Wall-clock time of the last AI reply
#[derive(Debug, Default)]
pub struct MoveTimer {
    pub ai_thinking_time: Option<Duration>,
}

impl MoveTimer {
    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameState {
    pub fn new(mode: GameMode, difficulty: Difficulty, time_budget: Duration) -> Self {
        Self::with_board(Board::new(), mode, difficulty, time_budget)
    }

    /// Start from an arbitrary position
    pub fn with_board(board: Board, mode: GameMode, difficulty: Difficulty, time_budget: Duration) -> Self {
        info!(?mode, %difficulty, "new game");
        let mut state = Self {
            board,
            mode,
            difficulty,
            game_over: None,
            last_move: None,
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            time_budget,
        };
        state.settle_turn();
        state
    }

    /// Fresh game with the same mode, difficulty and time budget
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.difficulty, self.time_budget);
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.board.side_to_move()
    }

    #[inline]
    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Agent settings for the selected difficulty
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig::from_difficulty(self.difficulty).with_time_budget(self.time_budget)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legality of a hovered or clicked cell for the side to move
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.game_over.is_none() && self.board.is_legal(pos)
    }

    /// Attempt to play a human move at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::GameError> {
        let record = self.board.try_apply_move(pos)?;
        debug!(side = %record.side, %pos, flipped = record.flipped.len(), "move applied");

        self.history.push(Turn::Move(record));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        self.settle_turn();
        Ok(())
    }

    /// Detect the end of the game, or pass for a side that cannot move.
    fn settle_turn(&mut self) {
        if let Some(outcome) = self.board.outcome() {
            info!(dark = outcome.dark, light = outcome.light, "game over: {}", outcome);
            self.game_over = Some(outcome);
            return;
        }

        let side = self.current_turn();
        if !self.board.has_legal_move(side) {
            // Not terminal, so the opponent can move
            info!(%side, "no legal move, passing");
            self.board.pass_turn();
            self.history.push(Turn::Pass(side));
            self.message = Some(format!("{} has no move and passes", side));
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let config = self.agent_config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            let applied = move_result
                .best_move
                .map(|pos| self.execute_move(pos).is_ok())
                .unwrap_or(false);
            if !applied {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for the side to move (quick, depth 1)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
        let result = engine.get_move_with_stats(&self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move; in PvE, back to the human's previous turn.
    ///
    /// In PvE only human moves count as undoable, so an AI opening move that
    /// precedes every human move stays on the board.
    pub fn undo(&mut self) {
        let human = match self.mode {
            GameMode::PvE { human } => Some(human),
            GameMode::PvP => None,
        };

        let undoable = self.history.iter().any(|t| match t {
            Turn::Move(record) => human.map_or(true, |h| record.side == h),
            Turn::Pass(_) => false,
        });
        if self.is_ai_thinking() || !undoable {
            return;
        }

        while let Some(turn) = self.history.pop() {
            let undone_side = match turn {
                Turn::Move(record) => {
                    self.board.undo_move(&record);
                    Some(record.side)
                }
                Turn::Pass(side) => {
                    self.board.set_side_to_move(side);
                    None
                }
            };

            let Some(side) = undone_side else { continue };
            match human {
                Some(human) if side != human => continue,
                _ => break,
            }
        }

        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.last_move = self.history.iter().rev().find_map(|t| match t {
            Turn::Move(record) => Some(record.pos),
            Turn::Pass(_) => None,
        });
    }

    /// Number of disks placed so far
    pub fn move_count(&self) -> usize {
        self.history
            .iter()
            .filter(|t| matches!(t, Turn::Move(_)))
            .count()
    }
}
