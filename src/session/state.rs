//! Session: one explicitly-owned game between two seats.
//!
//! ## Lifecycle
//!
//! - `Session::new` validates a `GameConfig` and starts an empty board with
//!   the first seat to move.
//! - `drop` (and its gated variants `drop_as`, `human_drop`,
//!   `play_automated`) is the only way a piece reaches the board.
//! - `reset` clears the board and history but keeps the win tallies.
//! - `restart` discards the session for a new configuration.
//!
//! A rejected move leaves every field exactly as it was.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::snapshot::Snapshot;
use crate::board::{Board, Columns};
use crate::core::{GameConfig, GameRng, Placement, Player, PlayerId, PlayerMap};
use crate::error::{ConfigError, MoveError};
use crate::opponent::OpponentPolicy;
use crate::rules::{judge, Outcome, Status};

/// Result of an accepted drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DropResult {
    /// Where the piece landed and who dropped it.
    pub placement: Placement,
    /// Board outcome after the drop.
    pub outcome: Outcome,
}

impl DropResult {
    /// Row the piece landed in.
    #[must_use]
    pub fn row(&self) -> usize {
        self.placement.row
    }
}

/// Board + turn cursor + seats + history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    config: GameConfig,
    board: Board,
    turn: PlayerId,
    players: PlayerMap<Player>,
    history: Vec<Placement>,
}

impl Session {
    /// Start a session from a configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Start a standard 6x7 connect-four session.
    ///
    /// ```
    /// use connect_four::session::Session;
    /// use connect_four::rules::Status;
    /// use connect_four::core::PlayerId;
    ///
    /// let mut session = Session::with_players("Ada", "Computer", true);
    /// assert_eq!(session.status(), Status::AwaitingMove(PlayerId::FIRST));
    ///
    /// let result = session.drop(3).unwrap();
    /// assert_eq!(result.row(), 5);
    /// assert!(session.awaiting_automated());
    /// ```
    pub fn with_players(
        player1: impl Into<String>,
        player2: impl Into<String>,
        player2_automated: bool,
    ) -> Self {
        Self::from_valid(
            GameConfig::default()
                .with_labels(player1, player2)
                .with_ai(player2_automated),
        )
    }

    fn from_valid(config: GameConfig) -> Self {
        debug!(
            rows = config.rows,
            columns = config.columns,
            connect = config.connect_length,
            ai = config.ai_enabled,
            "new session"
        );
        Self {
            board: Board::new(config.rows, config.columns),
            turn: PlayerId::FIRST,
            players: config.players(),
            history: Vec::new(),
            config,
        }
    }

    /// Throw this session away and start over with new seats.
    ///
    /// Win tallies start from zero.
    pub fn restart(self, config: GameConfig) -> Result<Self, ConfigError> {
        Self::new(config)
    }

    // === Queries ===

    /// The configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The turn cursor.
    ///
    /// After a win this still names the winner, who made the last move.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Both seats.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One seat.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Win tallies.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|player| player.score)
    }

    /// Accepted drops since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// The most recent drop.
    #[must_use]
    pub fn last_move(&self) -> Option<&Placement> {
        self.history.last()
    }

    /// Evaluate the board as it stands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let mover = self.last_move().map_or(self.turn, |placement| placement.player);
        judge(&self.board, self.config.connect_length, mover)
    }

    /// Where the session stands.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_outcome(self.outcome(), self.turn)
    }

    /// Check if the session accepts no further drops.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Columns the player to move may choose. Empty once the game is over.
    #[must_use]
    pub fn legal_columns(&self) -> Columns {
        if self.is_terminal() {
            Columns::new()
        } else {
            self.board.legal_columns()
        }
    }

    /// Landing row for a drop into `column`, without dropping.
    pub fn preview(&self, column: usize) -> Result<Option<usize>, MoveError> {
        self.board.next_open_row(column)
    }

    /// Check if the player to move is computer-controlled.
    #[must_use]
    pub fn awaiting_automated(&self) -> bool {
        match self.status() {
            Status::AwaitingMove(player) => self.players[player].automated,
            _ => false,
        }
    }

    /// Everything a presentation layer needs to draw the session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let outcome = self.outcome();
        Snapshot {
            board: self.board.clone(),
            status: Status::from_outcome(outcome, self.turn),
            outcome,
            players: self.players.clone(),
            scores: self.scores(),
            legal_columns: self.legal_columns(),
            last_move: self.last_move().copied(),
            winning_line: outcome
                .winner()
                .and_then(|winner| self.board.find_line(winner, self.config.connect_length)),
        }
    }

    /// Status line: whose turn, who won, or a draw.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.status() {
            Status::AwaitingMove(player) => {
                format!("{}'s Turn ({})", self.players[player].label, player.colour())
            }
            Status::Won(player) => format!("{} wins!", self.players[player].label),
            Status::Drawn => "It's a Draw!".to_string(),
        }
    }

    /// Score line: both labels with their win counts.
    #[must_use]
    pub fn score_text(&self) -> String {
        let first = &self.players[PlayerId::FIRST];
        let second = &self.players[PlayerId::SECOND];
        format!(
            "{}: {}    {}: {}",
            first.label, first.score, second.label, second.score
        )
    }

    // === Moves ===

    /// Drop a piece for the player to move.
    ///
    /// Fails with `GameOver` once the game is won or drawn, `InvalidColumn`
    /// off the board and `ColumnFull` when the column has no open row.
    #[instrument(level = "debug", skip(self))]
    pub fn drop(&mut self, column: usize) -> Result<DropResult, MoveError> {
        let mover = self.status().to_move().ok_or(MoveError::GameOver)?;

        let row = self.board.drop_piece(column, mover).map_err(|err| {
            debug!(%err, "drop rejected");
            err
        })?;

        let placement = Placement::new(mover, row, column, self.history.len() as u32 + 1);
        self.history.push(placement);
        debug!(player = %mover, row, column, ply = placement.ply, "piece dropped");

        let outcome = judge(&self.board, self.config.connect_length, mover);
        match outcome {
            Outcome::Won(winner) => {
                let seat = &mut self.players[winner];
                seat.score += 1;
                info!(winner = %seat.label, score = seat.score, "game won");
            }
            Outcome::Drawn => info!(ply = placement.ply, "game drawn"),
            Outcome::InProgress => self.turn = mover.other(),
        }

        Ok(DropResult { placement, outcome })
    }

    /// Drop a piece on behalf of `player`, rejecting out-of-turn calls.
    pub fn drop_as(&mut self, player: PlayerId, column: usize) -> Result<DropResult, MoveError> {
        let expected = self.status().to_move().ok_or(MoveError::GameOver)?;
        if player != expected {
            return Err(MoveError::NotYourTurn {
                expected,
                attempted: player,
            });
        }
        self.drop(column)
    }

    /// Drop a piece for a person, rejecting input while the computer is to
    /// move.
    pub fn human_drop(&mut self, column: usize) -> Result<DropResult, MoveError> {
        let expected = self.status().to_move().ok_or(MoveError::GameOver)?;
        if self.players[expected].automated {
            return Err(MoveError::NotYourTurn {
                expected,
                attempted: expected.other(),
            });
        }
        self.drop(column)
    }

    /// Ask `policy` for the automated player's column without dropping.
    ///
    /// Fails with `NoColumnChosen` if the policy returns `None` while the
    /// game is live.
    pub fn automated_move<P>(&self, policy: &P, rng: &mut GameRng) -> Result<usize, MoveError>
    where
        P: OpponentPolicy + ?Sized,
    {
        let mover = self.status().to_move().ok_or(MoveError::GameOver)?;
        if !self.players[mover].automated {
            return Err(MoveError::NotAutomatedTurn);
        }
        policy.choose_column(self, rng).ok_or(MoveError::NoColumnChosen)
    }

    /// Choose and apply the automated player's move.
    #[instrument(level = "debug", skip_all)]
    pub fn play_automated<P>(&mut self, policy: &P, rng: &mut GameRng) -> Result<DropResult, MoveError>
    where
        P: OpponentPolicy + ?Sized,
    {
        let column = self.automated_move(policy, rng)?;
        debug!(column, "automated opponent chose");
        self.drop(column)
    }

    /// Clear the board and give the first seat the move. Scores survive.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turn = PlayerId::FIRST;
        info!(scores = %self.score_text(), "board reset");
    }
}
