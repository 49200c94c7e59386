//! Display-name registry for the two players.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Default display name for player X.
pub const DEFAULT_NAME_X: &str = "Player 1";
/// Default display name for player O.
pub const DEFAULT_NAME_O: &str = "Player 2";

/// Error that can occur when renaming a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NameError {
    /// The new name was empty or whitespace-only.
    #[display("Player name must not be empty")]
    Empty,
}

impl std::error::Error for NameError {}

/// Mapping from player mark to display name.
///
/// Names are mutable independently of the move log and survive a
/// rematch; only the log is cleared when a new round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Creates the registry with the default names.
    pub fn new() -> Self {
        Self {
            x: DEFAULT_NAME_X.to_string(),
            o: DEFAULT_NAME_O.to_string(),
        }
    }

    /// Returns the display name for the given mark.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Sets the display name for the given mark.
    ///
    /// The stored name is the trimmed input; a name that trims to the
    /// empty string is rejected and the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for empty or whitespace-only names.
    #[instrument(skip(self))]
    pub fn rename(&mut self, player: Player, name: &str) -> Result<(), NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        info!(%player, name = %trimmed, "Renaming player");
        match player {
            Player::X => self.x = trimmed.to_string(),
            Player::O => self.o = trimmed.to_string(),
        }
        Ok(())
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_names() {
        let names = PlayerNames::new();
        assert_eq!(names.name(Player::X), "Player 1");
        assert_eq!(names.name(Player::O), "Player 2");
    }

    #[test]
    fn test_rename() {
        let mut names = PlayerNames::new();
        names.rename(Player::X, "Alice").unwrap();
        assert_eq!(names.name(Player::X), "Alice");
        assert_eq!(names.name(Player::O), "Player 2");
    }

    #[test]
    fn test_rename_trims_whitespace() {
        let mut names = PlayerNames::new();
        names.rename(Player::O, "  Bob ").unwrap();
        assert_eq!(names.name(Player::O), "Bob");
    }

    #[test]
    fn test_rename_rejects_blank_names() {
        let mut names = PlayerNames::new();
        for player in Player::iter() {
            assert_eq!(names.rename(player, ""), Err(NameError::Empty));
            assert_eq!(names.rename(player, "   "), Err(NameError::Empty));
        }
        // Registry unchanged after rejections.
        assert_eq!(names, PlayerNames::new());
    }
}
