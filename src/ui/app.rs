use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, warn};

use crate::ai::MoveSelector;
use crate::config::{AppConfig, PacingConfig};
use crate::game::{Player, WinLine, COLS};
use crate::session::{GameEvent, GameSession, TurnOutcome};

use super::game_view::{self, ViewState};
use super::notification::{Notification, NotificationKind};

const START_COLUMN: usize = COLS / 2;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Work the app has scheduled for later, for presentation pacing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    ComputerMove,
    Reset,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    action: PendingAction,
    due: Instant,
}

pub struct App {
    session: GameSession,
    selector: MoveSelector,
    pacing: PacingConfig,
    selected_column: usize,
    should_quit: bool,
    notification: Option<Notification>,
    pending: Option<Pending>,
    last_move: Option<(usize, usize)>,
    win_line: Option<WinLine>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = App {
            session: GameSession::new(),
            selector: MoveSelector::from_seed(config.ai.seed),
            pacing: config.pacing.clone(),
            selected_column: START_COLUMN,
            should_quit: false,
            notification: None,
            pending: None,
            last_move: None,
            win_line: None,
        };
        app.notify("Game Start!", NotificationKind::Info, Instant::now());
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(now);
            }
            KeyCode::Char('r') => {
                self.reset(now);
            }
            _ => {}
        }
    }

    /// Advance timers: expire the notification and run any scheduled action
    /// that has come due.
    fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }

        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.due {
            return;
        }
        self.pending = None;
        match pending.action {
            PendingAction::ComputerMove => self.computer_move(now),
            PendingAction::Reset => self.reset(now),
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self, now: Instant) {
        // Input is ignored while the computer is thinking or a reset is due
        if self.pending.is_some() || self.session.is_over() {
            return;
        }
        if self.session.is_stalled() {
            self.notify("Board is full! Press 'r' to restart.", NotificationKind::Info, now);
            return;
        }

        match self.session.play(self.selected_column, Player::Human) {
            Ok(TurnOutcome::ColumnFull) => {
                self.notify("Column is full!", NotificationKind::Info, now);
            }
            Ok(TurnOutcome::Continue { .. }) => {
                if self.session.is_stalled() {
                    self.notify("Board is full! Press 'r' to restart.", NotificationKind::Info, now);
                } else {
                    self.schedule(PendingAction::ComputerMove, now + self.pacing.computer_delay());
                }
            }
            Ok(TurnOutcome::Won(_)) => {
                self.notify("Player wins!", NotificationKind::Success, now);
                self.schedule(PendingAction::Reset, now + self.pacing.reset_delay());
            }
            Err(err) => {
                warn!(error = %err, "human move rejected");
                self.notify(err.to_string(), NotificationKind::Error, now);
            }
        }
        self.consume_events();
    }

    fn computer_move(&mut self, now: Instant) {
        match self.session.play_computer(&mut self.selector) {
            Ok(TurnOutcome::Won(_)) => {
                self.notify("Computer wins!", NotificationKind::Error, now);
                self.schedule(PendingAction::Reset, now + self.pacing.reset_delay());
            }
            Ok(TurnOutcome::Continue { .. }) => {
                if self.session.is_stalled() {
                    self.notify("Board is full! Press 'r' to restart.", NotificationKind::Info, now);
                }
            }
            Ok(TurnOutcome::ColumnFull) => {
                warn!("computer picked a full column");
            }
            Err(err) => {
                warn!(error = %err, "computer move failed");
                self.notify(err.to_string(), NotificationKind::Error, now);
            }
        }
        self.consume_events();
    }

    fn reset(&mut self, now: Instant) {
        self.pending = None;
        self.session.reset();
        self.selected_column = START_COLUMN;
        self.notify("Game Start!", NotificationKind::Info, now);
        self.consume_events();
    }

    /// Fold session events into what the board view highlights.
    fn consume_events(&mut self) {
        for event in self.session.drain_events() {
            debug!(?event, "game event");
            match event {
                GameEvent::MoveApplied { row, col, .. } => {
                    self.last_move = Some((row, col));
                }
                GameEvent::WinDetected { line, .. } => {
                    self.win_line = Some(line);
                }
                GameEvent::BoardReset => {
                    self.last_move = None;
                    self.win_line = None;
                }
            }
        }
    }

    fn schedule(&mut self, action: PendingAction, due: Instant) {
        self.pending = Some(Pending { action, due });
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.notification = Some(Notification::new(
            message,
            kind,
            now,
            self.pacing.notification(),
        ));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = ViewState {
            session: &self.session,
            selected_column: self.selected_column,
            last_move: self.last_move,
            win_line: self.win_line.as_ref(),
            notification: self.notification.as_ref(),
            computer_thinking: matches!(
                self.pending,
                Some(Pending {
                    action: PendingAction::ComputerMove,
                    ..
                })
            ),
        };
        game_view::render(frame, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
