/// Standard board width.
pub const DEFAULT_COLS: usize = 7;
/// Standard board height.
pub const DEFAULT_ROWS: usize = 6;
/// Smallest dimension along either axis that can geometrically hold a
/// four-in-a-row.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} are too small (minimum is 4x4)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// The grid of dropped pieces. Dimensions are fixed at construction; cells
/// are stored row-major with row 0 at the top and row `height - 1` at the
/// bottom. A per-column fill counter answers full-column and full-board
/// queries without rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    fill: Vec<usize>,
}

impl Board {
    /// Create a new empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            fill: vec![0; width],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.fill[col] == self.height
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// A full column is rejected with no mutation; no other column is ever
    /// touched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, BoardError> {
        if col >= self.width {
            return Err(BoardError::InvalidColumn(col));
        }

        if self.fill[col] == self.height {
            return Err(BoardError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            let idx = row * self.width + col;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = cell;
                self.fill[col] += 1;
                return Ok(row);
            }
        }

        unreachable!("fill counter says column {col} has room");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.fill.iter().all(|&count| count == self.height)
    }

    /// Clear every cell and counter, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.fill.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_COLS, DEFAULT_ROWS).expect("default dimensions are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 6),
            Err(BoardError::InvalidDimensions { width: 3, height: 6 })
        );
        assert_eq!(
            Board::new(7, 3),
            Err(BoardError::InvalidDimensions { width: 7, height: 3 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_piece_stacks_upward() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Ok(Cell::Red));

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Ok(Cell::Yellow));
    }

    #[test]
    fn test_drop_leaves_other_columns_alone() {
        let mut board = Board::default();
        board.drop_piece(2, Cell::Red).unwrap();

        for col in [0, 1, 3, 4, 5, 6] {
            for row in 0..board.height() {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_column_full_is_a_no_op() {
        let mut board = Board::default();

        for _ in 0..board.height() {
            board.drop_piece(0, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(0));

        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Cell::Yellow),
            Err(BoardError::ColumnFull(0))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Cell::Red),
            Err(BoardError::InvalidColumn(7))
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::default();
        assert_eq!(
            board.get(6, 0),
            Err(BoardError::OutOfBounds { row: 6, col: 0 })
        );
        assert_eq!(
            board.get(0, 7),
            Err(BoardError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..board.width() {
            assert!(!board.is_full());
            for _ in 0..board.height() {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut board = Board::new(8, 5).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.reset();

        assert_eq!(board.width(), 8);
        assert_eq!(board.height(), 5);
        assert_eq!(board, Board::new(8, 5).unwrap());
    }

    #[test]
    fn test_custom_dimensions_drop() {
        let mut board = Board::new(4, 9).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 8);
        assert_eq!(
            board.drop_piece(4, Cell::Red),
            Err(BoardError::InvalidColumn(4))
        );
    }
}
