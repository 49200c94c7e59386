//! Tic-tac-toe engine where all game state derives from an append-only
//! move log.
//!
//! The only owned state is the move log (newest first) and the player
//! name registry; board, active player, and outcome are recomputed from
//! the log on every read instead of being mutated in place.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the log and registry and exposes
//!   the mutation API (`play`, `rename_player`, `rematch`)
//! - **Rules**: pure derivation functions — projection, turn
//!   resolution, win and draw detection — in [`rules`]
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Outcome`],
//!   [`Move`], [`Position`]
//!
//! # Example
//!
//! ```
//! use turnlog_tictactoe::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! session.rename_player(Player::X, "Alice")?;
//!
//! session.play(0, 0)?; // X
//! session.play(1, 1)?; // O
//! session.play(0, 1)?; // X
//! session.play(2, 2)?; // O
//! let outcome = session.play(0, 2)?; // X completes the top row
//!
//! assert_eq!(outcome.winner(), Some(Player::X));
//! assert_eq!(session.player_name(Player::X), "Alice");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod players;
mod position;
mod session;
mod types;

// Rules are public: presentation and test harnesses may derive state
// from a move log without holding a session.
pub mod rules;

// Crate-level exports - moves and their errors
pub use action::{Move, MoveError};

// Crate-level exports - player names
pub use players::{DEFAULT_NAME_O, DEFAULT_NAME_X, NameError, PlayerNames};

// Crate-level exports - coordinates
pub use position::Position;

// Crate-level exports - session
pub use session::{GameSession, MIN_BOARD_SIZE, SizeError};

// Crate-level exports - core types
pub use types::{Board, Outcome, Player, Square};
