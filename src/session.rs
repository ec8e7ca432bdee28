//! One human-vs-computer match: the board, whose turn it is, the running
//! score, and the events the front end reacts to.

use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{Board, Player, WinLine};

/// Something the presentation layer may want to animate, sound or log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied {
        row: usize,
        col: usize,
        player: Player,
    },
    WinDetected {
        line: WinLine,
        player: Player,
    },
    BoardReset,
}

/// Result of a single `play` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Column was full; nothing changed and it is still the same turn.
    ColumnFull,
    /// Piece landed in `row`; the turn passed to the other player.
    Continue { row: usize },
    /// Piece completed a run; the game is over until `reset`.
    Won(WinLine),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub human: u32,
    pub computer: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::Human => self.human += 1,
            Player::Computer => self.computer += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    winner: Option<(Player, WinLine)>,
    scores: Scores,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Empty board, human to move, no score.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: Player::Human,
            winner: None,
            scores: Scores::default(),
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Winner of the current board and the run that won it.
    pub fn winner(&self) -> Option<(Player, WinLine)> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Board filled up without a winner. No draw is scored; the board just
    /// needs a reset.
    pub fn is_stalled(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Drop a piece for `player` into `col`.
    pub fn play(&mut self, col: usize, player: Player) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if player != self.current_player {
            return Err(SessionError::NotYourTurn(player));
        }

        let Some(row) = self.board.drop_piece(col, player)? else {
            debug!(col, player = player.name(), "column full, move ignored");
            return Ok(TurnOutcome::ColumnFull);
        };
        debug!(row, col, player = player.name(), "move applied");
        self.events.push(GameEvent::MoveApplied { row, col, player });

        if let Some(line) = self.board.check_win(player) {
            self.scores.record_win(player);
            self.winner = Some((player, line));
            self.events.push(GameEvent::WinDetected { line, player });
            info!(
                player = player.name(),
                start = ?line.start(),
                end = ?line.end(),
                human = self.scores.human,
                computer = self.scores.computer,
                "win detected"
            );
            return Ok(TurnOutcome::Won(line));
        }

        self.current_player = player.other();
        Ok(TurnOutcome::Continue { row })
    }

    /// Let `agent` pick a column on the live board, then play it for the
    /// computer.
    pub fn play_computer(&mut self, agent: &mut dyn Agent) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.current_player != Player::Computer {
            return Err(SessionError::NotYourTurn(Player::Computer));
        }

        let col = agent.select_column(&mut self.board)?;
        debug!(col, agent = agent.name(), "computer chose column");
        self.play(col, Player::Computer)
    }

    /// Clear the board for a new game. Scores carry over and the human moves
    /// first.
    pub fn reset(&mut self) {
        self.board.reset();
        self.winner = None;
        self.current_player = Player::Human;
        self.events.push(GameEvent::BoardReset);
        info!(
            human = self.scores.human,
            computer = self.scores.computer,
            "board reset"
        );
    }

    /// Take all events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
