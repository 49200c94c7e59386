//! Derivation rules for the move-log game model.
//!
//! Everything here is a pure function over the move log or a board
//! snapshot: projection, turn resolution, win and draw detection, and
//! the winning-line catalog they scan against. The session owns no
//! derived state; it calls back into this module on every query.

pub mod draw;
pub mod lines;
pub mod project;
pub mod turn;
pub mod win;

pub use draw::is_draw;
pub use lines::winning_lines;
pub use project::project;
pub use turn::active_player;
pub use win::check_winner;
