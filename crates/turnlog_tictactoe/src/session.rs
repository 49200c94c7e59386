//! Game session: the owner of the canonical move log.
//!
//! The session stores only two pieces of state — the append-only move
//! log (newest first) and the player-name registry — and re-derives
//! board, active player, and outcome from the log on every query.
//! Nothing derived is ever cached or incrementally patched.
//!
//! The session is single-threaded: no operation blocks or suspends,
//! and no internal locking is provided. Integrators sharing a session
//! across threads must serialize access externally.

use crate::action::{Move, MoveError};
use crate::players::{NameError, PlayerNames};
use crate::position::Position;
use crate::rules::{active_player, check_winner, is_draw, project, winning_lines};
use crate::types::{Board, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Error that can occur when constructing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SizeError {
    /// The requested board side length is below [`MIN_BOARD_SIZE`].
    #[display("Board size {} is too small (minimum {})", _0, MIN_BOARD_SIZE)]
    TooSmall(usize),
}

impl std::error::Error for SizeError {}

/// A single game of tic-tac-toe driven by an append-only move log.
///
/// The log is ordered most-recent-first: index 0 is always the latest
/// move, and [`play`] prepends. This ordering is part of the API
/// contract — [`active_player`] derives the turn in O(1) from the log
/// head, and callers reading [`turns`] see the newest move first, the
/// natural order for rendering a move history.
///
/// [`play`]: GameSession::play
/// [`active_player`]: GameSession::active_player
/// [`turns`]: GameSession::turns
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Board side length.
    size: usize,
    /// Winning-line catalog, computed once for this board size.
    lines: Vec<Vec<Position>>,
    /// Move log, newest first.
    turns: Vec<Move>,
    /// Display names, kept across rematches.
    names: PlayerNames,
}

impl GameSession {
    /// Creates a session on the default 3x3 board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            size: MIN_BOARD_SIZE,
            lines: winning_lines(MIN_BOARD_SIZE),
            turns: Vec::new(),
            names: PlayerNames::new(),
        }
    }

    /// Creates a session on a `size x size` board.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::TooSmall`] if `size < 3`.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, SizeError> {
        if size < MIN_BOARD_SIZE {
            return Err(SizeError::TooSmall(size));
        }
        info!(size, "Creating new game session");
        Ok(Self {
            size,
            lines: winning_lines(size),
            turns: Vec::new(),
            names: PlayerNames::new(),
        })
    }

    /// Board side length.
    pub fn board_size(&self) -> usize {
        self.size
    }

    /// Number of moves played so far this round.
    pub fn move_count(&self) -> usize {
        self.turns.len()
    }

    /// The move log, newest first.
    pub fn turns(&self) -> &[Move] {
        &self.turns
    }

    /// The display name for the given mark.
    pub fn player_name(&self, player: Player) -> &str {
        self.names.name(player)
    }

    /// Derives the player whose turn it is.
    pub fn active_player(&self) -> Player {
        active_player(&self.turns)
    }

    /// Derives a fresh board snapshot from the move log.
    ///
    /// Each call returns an independently owned board; snapshots taken
    /// before a move remain valid and unchanged afterwards.
    pub fn current_board(&self) -> Board {
        // Every logged position was bounds-checked by play, so
        // projection of the session's own log cannot fail.
        project(&self.turns, self.size)
            .expect("session log positions are bounds-checked at play")
    }

    /// Derives the current outcome from the board and move count.
    pub fn outcome(&self) -> Outcome {
        let board = self.current_board();
        match check_winner(&board, &self.lines) {
            Some(player) => Outcome::Won {
                player,
                name: self.names.name(player).to_string(),
            },
            None if is_draw(self.turns.len(), self.size, None) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// On success the move is prepended to the log and the freshly
    /// derived outcome is returned, so callers learn immediately
    /// whether the move ended the game. Every rejection leaves the
    /// session untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already been won or
    ///   drawn.
    /// - [`MoveError::OutOfBounds`] if `(row, col)` lies outside the
    ///   board.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a
    ///   mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if !self.outcome().is_in_progress() {
            warn!("Rejecting move: game is over");
            return Err(MoveError::GameOver);
        }

        let position = Position::new(row, col);
        if !position.in_bounds(self.size) {
            warn!(%position, "Rejecting move: out of bounds");
            return Err(MoveError::OutOfBounds {
                position,
                size: self.size,
            });
        }

        if !self.current_board().is_empty(position) {
            warn!(%position, "Rejecting move: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.active_player();
        self.turns.insert(0, Move::new(position, player));
        debug!(%player, %position, move_count = self.turns.len(), "Move accepted");

        Ok(self.outcome())
    }

    /// Sets the display name for the given mark.
    ///
    /// Allowed in any state; never touches the move log or outcome.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for empty or whitespace-only names.
    pub fn rename_player(&mut self, player: Player, name: &str) -> Result<(), NameError> {
        self.names.rename(player, name)
    }

    /// Starts a new round: clears the move log, keeps player names.
    ///
    /// Valid in any state. Resetting an unfinished game simply discards
    /// the moves played so far.
    #[instrument(skip(self))]
    pub fn rematch(&mut self) {
        info!(discarded = self.turns.len(), "Rematch: clearing move log");
        self.turns.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
