//! Session configuration.
//!
//! The presentation layer supplies a `GameConfig` when it creates a session:
//! board dimensions, the line length that wins, the two seat labels, and
//! whether the second seat is computer-controlled.
//!
//! Only the second seat can be automated, so at most one player is ever
//! driven by an opponent policy.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};
use crate::error::ConfigError;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 6;

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 7;

/// Default winning line length.
pub const DEFAULT_CONNECT_LENGTH: usize = 4;

/// Label used for the automated seat when the second name is left blank.
pub const COMPUTER_LABEL: &str = "Computer";

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 64;

const MIN_DIMENSION: usize = 4;
const MIN_CONNECT_LENGTH: usize = 2;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board height (4..=64).
    pub rows: usize,

    /// Board width (4..=64).
    pub columns: usize,

    /// Pieces in a row needed to win (>= 2).
    pub connect_length: usize,

    /// Label of the opening seat.
    pub player1_label: String,

    /// Label of the second seat.
    pub player2_label: String,

    /// Second seat is computer-controlled.
    pub ai_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            connect_length: DEFAULT_CONNECT_LENGTH,
            player1_label: "Player 1".to_string(),
            player2_label: "Player 2".to_string(),
            ai_enabled: false,
        }
    }
}

impl GameConfig {
    /// Create the default 6x7 connect-four configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the two name fields of a start menu.
    ///
    /// A blank first name becomes "Player 1". A blank second name becomes
    /// "Computer", and a second name of "computer" in any case turns on the
    /// automated opponent.
    ///
    /// ```
    /// use connect_four::core::GameConfig;
    ///
    /// let config = GameConfig::from_entries("Ada", "  ");
    /// assert_eq!(config.player2_label, "Computer");
    /// assert!(config.ai_enabled);
    /// ```
    pub fn from_entries(player1: &str, player2: &str) -> Self {
        let player1 = player1.trim();
        let player2 = player2.trim();

        let player1_label = if player1.is_empty() { "Player 1" } else { player1 };
        let player2_label = if player2.is_empty() { COMPUTER_LABEL } else { player2 };

        Self {
            player1_label: player1_label.to_string(),
            ai_enabled: player2_label.eq_ignore_ascii_case(COMPUTER_LABEL),
            player2_label: player2_label.to_string(),
            ..Self::default()
        }
    }

    /// Set board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the winning line length.
    #[must_use]
    pub fn with_connect_length(mut self, length: usize) -> Self {
        self.connect_length = length;
        self
    }

    /// Set both seat labels.
    #[must_use]
    pub fn with_labels(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_label = player1.into();
        self.player2_label = player2.into();
        self
    }

    /// Make the second seat computer-controlled.
    #[must_use]
    pub fn with_ai(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    /// Check the dimension and line-length constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "rows must be >= {MIN_DIMENSION}, got {}",
                self.rows
            )));
        }
        if self.columns < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "columns must be >= {MIN_DIMENSION}, got {}",
                self.columns
            )));
        }
        if self.rows > MAX_DIMENSION || self.columns > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board sides must be <= {MAX_DIMENSION}, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.connect_length < MIN_CONNECT_LENGTH {
            return Err(ConfigError::Validation(format!(
                "connect_length must be >= {MIN_CONNECT_LENGTH}, got {}",
                self.connect_length
            )));
        }
        // A line longer than both sides can never be completed.
        if self.connect_length > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(format!(
                "connect_length {} does not fit on a {}x{} board",
                self.connect_length, self.rows, self.columns
            )));
        }
        Ok(())
    }

    /// Seat records with zero wins.
    pub(crate) fn players(&self) -> PlayerMap<Player> {
        let first = Player::human(self.player1_label.clone());
        let second = if self.ai_enabled {
            Player::automated(self.player2_label.clone())
        } else {
            Player::human(self.player2_label.clone())
        };
        PlayerMap::from_pair(first, second)
    }
}
