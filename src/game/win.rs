//! Four-in-a-row detection.
//!
//! A pure function of the board and the player who just moved: it never
//! mutates anything and reports the exact cells of the winning line so the
//! UI can highlight them.

use super::board::Board;
use super::player::Player;

/// Number of connected pieces that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Step offsets tried at every start cell, in tie-break order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A completed four-in-a-row: the owning player and the four cells as
/// `(row, col)` pairs, ordered from the scan-start cell outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [(usize, usize); WIN_LENGTH],
}

/// Find a four-in-a-row for `player`, if one exists.
///
/// Every cell is tried as a line start, rows top-to-bottom and columns
/// left-to-right, with the four directions probed in the fixed
/// [`DIRECTIONS`] order. The first satisfying line in that order is
/// returned, which makes the result deterministic when several lines
/// complete on the same move.
pub fn find_win(board: &Board, player: Player) -> Option<WinningLine> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(cells) = line_from(board, row, col, dr, dc, player) {
                    return Some(WinningLine { player, cells });
                }
            }
        }
    }
    None
}

/// Whether `player` has any four-in-a-row on `board`.
pub fn has_win(board: &Board, player: Player) -> bool {
    find_win(board, player).is_some()
}

/// Build the four-cell line starting at `(row, col)` along `(dr, dc)`,
/// if all four cells are on the board and owned by `player`.
///
/// Bounds are checked before the occupant is read for every cell; the
/// down-left diagonal walks off the left edge with a negative column.
fn line_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: i64,
    dc: i64,
    player: Player,
) -> Option<[(usize, usize); WIN_LENGTH]> {
    let piece = player.to_cell();
    let mut cells = [(0, 0); WIN_LENGTH];

    for (i, slot) in cells.iter_mut().enumerate() {
        let r = row as i64 + dr * i as i64;
        let c = col as i64 + dc * i as i64;
        if r < 0 || c < 0 {
            return None;
        }

        let (r, c) = (r as usize, c as usize);
        match board.get(r, c) {
            Ok(cell) if cell == piece => *slot = (r, c),
            _ => return None,
        }
    }

    Some(cells)
}
