use super::board::{Board, BoardError, DEFAULT_COLS, DEFAULT_ROWS};
use super::player::Player;
use super::win::{find_win, WinningLine};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won(WinningLine),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Where the game stands after a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveVerdict {
    Continues,
    Won(WinningLine),
    Drawn,
}

/// A successfully placed piece and its consequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub verdict: MoveVerdict,
}

/// The full state of one game: grid, whose turn it is, and whether the
/// game has ended. Rejected moves leave every field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with the given board dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(width, height)?,
            current_player: Player::Red, // Red starts
            outcome: None,
        })
    }

    /// A standard 7x6 game.
    pub fn default_size() -> Self {
        GameState::new(DEFAULT_COLS, DEFAULT_ROWS).expect("default dimensions are valid")
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// The winning cells, once the game has been won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.outcome {
            Some(GameOutcome::Won(line)) => Some(line),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full); empty once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop a piece for the active player and advance the state machine.
    ///
    /// On success the placed piece is evaluated for a win of the mover
    /// only; a win or a full board ends the game, otherwise the turn
    /// passes. Full columns, nonexistent columns, and finished games are
    /// rejected without changing the board or the active player.
    pub fn attempt_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .map_err(|e| match e {
                BoardError::ColumnFull(col) => MoveError::ColumnFull(col),
                BoardError::InvalidColumn(col) => MoveError::InvalidColumn(col),
                BoardError::InvalidDimensions { .. } | BoardError::OutOfBounds { .. } => {
                    unreachable!("drop_piece only reports column errors")
                }
            })?;

        let verdict = if let Some(line) = find_win(&self.board, player) {
            self.outcome = Some(GameOutcome::Won(line.clone()));
            MoveVerdict::Won(line)
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            MoveVerdict::Drawn
        } else {
            // The turn only passes while the game is live
            self.current_player = player.other();
            MoveVerdict::Continues
        };

        Ok(Placement {
            row,
            column,
            player,
            verdict,
        })
    }

    /// Apply a move and return the successor state, leaving `self` as is.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.attempt_move(column)?;
        Ok(next)
    }

    /// Start over: same dimensions, empty board, Red to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::Red;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::default_size()
    }
}
