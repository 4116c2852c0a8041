//! Session state for the checkers GUI: game mode, AI thread and pacing

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{Color, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::game::{ClickOutcome, GameState};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::Light,
        }
    }
}

/// Runtime settings for the computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Depth always searched in full
    pub min_depth: u8,
    /// Budget for deepening past the minimum depth
    pub time_limit_ms: u64,
    /// Pause after a computer move before the next search may start
    pub move_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_depth: 3,
            time_limit_ms: 2000,
            move_delay_ms: 500,
        }
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

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game as seen by the GUI
pub struct Session {
    pub game: GameState,
    pub mode: GameMode,
    pub config: SessionConfig,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// When the computer's last move was applied
    last_ai_move_at: Option<Instant>,
}

impl Session {
    pub fn new(mode: GameMode, config: SessionConfig) -> Self {
        Self {
            game: GameState::new(),
            mode,
            config,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            last_ai_move_at: None,
        }
    }

    /// Start over with the same mode and settings
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    /// Start over in another mode
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(mode, self.config);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Time left before the computer may start its next search
    pub fn pacing_remaining(&self) -> Duration {
        let delay = Duration::from_millis(self.config.move_delay_ms);
        self.last_ai_move_at
            .map_or(Duration::ZERO, |at| delay.saturating_sub(at.elapsed()))
    }

    /// True when the computer should start searching now
    pub fn ai_should_start(&self) -> bool {
        self.is_ai_turn()
            && !self.is_ai_thinking()
            && !self.game.is_over()
            && self.pacing_remaining().is_zero()
    }

    /// Handle a click on a board cell
    pub fn handle_click(&mut self, row: i32, col: i32) {
        if self.game.is_over() {
            return;
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            self.message = Some("Not your turn".to_string());
            return;
        }

        match self.game.click(row, col) {
            Ok(ClickOutcome::Selected { .. }) => {
                self.message = None;
            }
            Ok(ClickOutcome::Moved(applied)) => {
                self.message = None;
                if !applied.must_continue {
                    self.move_timer.stop();
                    self.move_timer.start();
                }
            }
            Err(err) => {
                warn!(row, col, error = %err, "click rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let board = *self.game.board();
        let color = self.game.turn();
        let engine = AIEngine::with_config(self.config.min_depth, self.config.time_limit_ms);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&board, color);
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
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.last_ai_move_at = Some(Instant::now());

            match move_result.board {
                Some(board) => {
                    if let Err(err) = self.game.adopt_computer_board(board) {
                        warn!(error = %err, "computer move rejected");
                        self.message = Some(err.to_string());
                    } else {
                        self.move_timer.stop();
                        self.move_timer.start();
                    }
                }
                None => {
                    info!(color = %self.game.turn(), "no legal move, conceding");
                    self.game.concede_no_move();
                }
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last turn; against the AI, back to the human's last turn.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || !self.game.undo() {
            return;
        }
        if let GameMode::PvE { human_color } = self.mode {
            while self.game.turn() != human_color {
                if !self.game.undo() {
                    break;
                }
            }
        }
        self.message = None;
        self.move_timer.start();
    }

    /// Currently selected piece, if any
    pub fn selected(&self) -> Option<Pos> {
        self.game.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TurnPhase;

    fn quick_config() -> SessionConfig {
        SessionConfig {
            min_depth: 1,
            time_limit_ms: 50,
            move_delay_ms: 0,
        }
    }

    fn wait_for_ai(session: &mut Session) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while session.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            session.check_ai_result();
        }
    }

    #[test]
    fn test_default_mode_and_config() {
        let session = Session::new(GameMode::default(), SessionConfig::default());
        assert_eq!(
            session.mode,
            GameMode::PvE {
                human_color: Color::Light
            }
        );
        assert_eq!(session.config.move_delay_ms, 500);
        assert!(session.is_human_turn());
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn test_pvp_clicks_move_both_sides() {
        let mut session = Session::new(GameMode::PvP, quick_config());
        session.handle_click(6, 1);
        session.handle_click(5, 0);
        assert_eq!(session.game.turn(), Color::Dark);
        assert!(session.is_human_turn());

        session.handle_click(3, 0);
        session.handle_click(4, 1);
        assert_eq!(session.game.turn(), Color::Light);
        assert_eq!(session.message, None);
    }

    #[test]
    fn test_rejected_click_sets_message() {
        let mut session = Session::new(GameMode::PvP, quick_config());
        session.handle_click(3, 0);
        assert!(session.message.is_some());
        assert_eq!(session.game.phase(), &TurnPhase::AwaitingSelection);
    }

    #[test]
    fn test_ai_replies_in_pve() {
        let mut session = Session::new(GameMode::default(), quick_config());
        session.handle_click(6, 1);
        session.handle_click(5, 0);
        assert!(session.ai_should_start());

        session.start_ai_thinking();
        assert!(session.is_ai_thinking());
        wait_for_ai(&mut session);

        assert!(!session.is_ai_thinking());
        assert!(session.last_ai_result.is_some());
        assert_eq!(session.game.turn(), Color::Light);
        assert_eq!(session.game.moves_played(), 2);
    }

    #[test]
    fn test_pacing_after_ai_move() {
        let config = SessionConfig {
            move_delay_ms: 60_000,
            ..quick_config()
        };
        let mut session = Session::new(
            GameMode::PvE {
                human_color: Color::Dark,
            },
            config,
        );

        // Light (the computer) opens
        assert!(session.ai_should_start());
        session.start_ai_thinking();
        wait_for_ai(&mut session);
        assert_eq!(session.game.turn(), Color::Dark);

        session.handle_click(3, 0);
        session.handle_click(4, 1);
        assert!(session.is_ai_turn());
        assert!(!session.pacing_remaining().is_zero());
        assert!(!session.ai_should_start());
    }

    #[test]
    fn test_undo_returns_to_human_turn() {
        let mut session = Session::new(GameMode::default(), quick_config());
        session.handle_click(6, 1);
        session.handle_click(5, 0);
        session.start_ai_thinking();
        wait_for_ai(&mut session);

        session.undo();
        assert_eq!(session.game.turn(), Color::Light);
        assert_eq!(session.game.moves_played(), 0);
        assert_eq!(session.game.board(), &crate::board::Board::new());
    }

    #[test]
    fn test_click_ignored_on_ai_turn() {
        let mut session = Session::new(
            GameMode::PvE {
                human_color: Color::Dark,
            },
            quick_config(),
        );
        session.handle_click(6, 1);
        assert_eq!(session.message.as_deref(), Some("Not your turn"));
        assert_eq!(session.selected(), None);
    }
}
