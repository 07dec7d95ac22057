use std::fmt;

use super::Color;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Empty,
    Occupied(Color),
}

/// A `(column, row)` position. Row 0 is the bottom row.
///
/// Components are signed so that a coordinate can step off the board while
/// walking a line; such coordinates are simply never in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub column: i32,
    pub row: i32,
}

impl Coordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Coordinate { column, row }
    }

    /// Move `steps` times along the unit direction `(dx, dy)`.
    /// Saturates at the `i32` bounds, which are far off the board.
    pub fn offset(self, (dx, dy): (i32, i32), steps: i32) -> Self {
        Coordinate::new(
            self.column.saturating_add(dx.saturating_mul(steps)),
            self.row.saturating_add(dy.saturating_mul(steps)),
        )
    }

    /// Check whether the coordinate addresses a slot of the board
    pub fn in_range(self) -> bool {
        (0..COLS as i32).contains(&self.column) && (0..ROWS as i32).contains(&self.row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A placed piece: where it landed and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub coordinate: Coordinate,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Indexed [column][row], row 0 at the bottom.
    slots: [[Slot; ROWS]; COLS],
    // Number of pieces in each column; the next piece lands at this row.
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            slots: [[Slot::Empty; ROWS]; COLS],
            heights: [0; COLS],
        }
    }

    /// Get the slot at a coordinate, or `None` if it is off the board
    pub fn get(&self, coord: Coordinate) -> Option<Slot> {
        if !coord.in_range() {
            return None;
        }
        Some(self.slots[coord.column as usize][coord.row as usize])
    }

    /// Color of the piece at a coordinate, if any
    pub fn color_at(&self, coord: Coordinate) -> Option<Color> {
        match self.get(coord)? {
            Slot::Occupied(color) => Some(color),
            Slot::Empty => None,
        }
    }

    /// True iff the coordinate is on the board and holds no piece.
    /// Off-board coordinates are never empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(Slot::Empty)
    }

    /// Number of pieces stacked in a column (0 for an invalid column)
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Check if a column is full; invalid columns count as full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a piece into a column and return the coordinate where it landed.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, column: i32, color: Color) -> Result<Coordinate, MoveError> {
        if !(0..COLS as i32).contains(&column) {
            return Err(MoveError::InvalidColumn(column));
        }
        let col = column as usize;
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.slots[col][row] = Slot::Occupied(color);
        self.heights[col] += 1;

        Ok(Coordinate::new(column, row as i32))
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Slots row by row, top row first, each row from column 0 to 6.
    pub fn rows_top_down(&self) -> impl Iterator<Item = [Slot; COLS]> + '_ {
        (0..ROWS).rev().map(move |row| {
            let mut line = [Slot::Empty; COLS];
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = self.slots[col][row];
            }
            line
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering: `.` for empty, `R` / `Y` for pieces, column numbers below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.rows_top_down() {
            let glyphs: Vec<&str> = line
                .iter()
                .map(|slot| match slot {
                    Slot::Empty => ".",
                    Slot::Occupied(Color::Red) => "R",
                    Slot::Occupied(Color::Yellow) => "Y",
                })
                .collect();
            writeln!(f, "{}", glyphs.join(" "))?;
        }
        write!(f, "1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coords() -> impl Iterator<Item = Coordinate> {
        (0..COLS as i32).flat_map(|c| (0..ROWS as i32).map(move |r| Coordinate::new(c, r)))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for coord in all_coords() {
            assert_eq!(board.get(coord), Some(Slot::Empty));
        }
    }

    #[test]
    fn test_place_lands_at_bottom() {
        let mut board = Board::new();

        let coord = board.place(3, Color::Red).unwrap();
        assert_eq!(coord, Coordinate::new(3, 0));
        assert_eq!(board.color_at(coord), Some(Color::Red));

        // Second piece stacks on top of the first
        let coord = board.place(3, Color::Yellow).unwrap();
        assert_eq!(coord, Coordinate::new(3, 1));
        assert_eq!(board.color_at(coord), Some(Color::Yellow));
    }

    #[test]
    fn test_gravity_kth_piece_lands_at_row_k_minus_one() {
        for col in 0..COLS as i32 {
            let mut board = Board::new();
            for k in 0..ROWS as i32 {
                let color = if k % 2 == 0 { Color::Red } else { Color::Yellow };
                assert_eq!(board.place(col, color).unwrap(), Coordinate::new(col, k));
            }
            assert_eq!(board.height(col as usize), ROWS);
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(0, Color::Red).unwrap();
        }
        let before = board.clone();

        assert!(board.is_column_full(0));
        assert_eq!(board.place(0, Color::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.place(7, Color::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.place(-1, Color::Red), Err(MoveError::InvalidColumn(-1)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_empty_out_of_range() {
        let board = Board::new();
        assert!(board.is_empty(Coordinate::new(0, 0)));
        assert!(!board.is_empty(Coordinate::new(-1, 0)));
        assert!(!board.is_empty(Coordinate::new(0, 6)));
        assert!(!board.is_empty(Coordinate::new(7, 5)));
        assert_eq!(board.get(Coordinate::new(3, -1)), None);
    }

    #[test]
    fn test_is_empty_after_place() {
        let mut board = Board::new();
        let coord = board.place(4, Color::Yellow).unwrap();
        assert!(!board.is_empty(coord));
        assert!(board.is_empty(coord.offset((0, 1), 1)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS as i32 {
            for _ in 0..ROWS {
                board.place(col, Color::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        for col in 0..COLS as i32 {
            board.place(col, Color::Red).unwrap();
            board.place(col, Color::Yellow).unwrap();
        }

        board.reset();

        for coord in all_coords() {
            assert!(board.is_empty(coord));
        }
        for col in 0..COLS as i32 {
            assert_eq!(board.place(col, Color::Yellow).unwrap(), Coordinate::new(col, 0));
        }
    }

    #[test]
    fn test_rows_top_down_order() {
        let mut board = Board::new();
        board.place(0, Color::Red).unwrap();
        board.place(6, Color::Yellow).unwrap();
        board.place(6, Color::Red).unwrap();

        let rows: Vec<_> = board.rows_top_down().collect();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[5][0], Slot::Occupied(Color::Red));
        assert_eq!(rows[5][6], Slot::Occupied(Color::Yellow));
        assert_eq!(rows[4][6], Slot::Occupied(Color::Red));
        assert_eq!(rows[0][0], Slot::Empty);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Color::Red).unwrap();
        board.place(1, Color::Yellow).unwrap();

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[0], ". . . . . . .");
        assert_eq!(lines[5], "R Y . . . . .");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_coordinate_offset() {
        let origin = Coordinate::new(3, 2);
        assert_eq!(origin.offset((1, -1), 2), Coordinate::new(5, 0));
        assert_eq!(origin.offset((-1, 0), 4), Coordinate::new(-1, 2));
        assert!(!origin.offset((-1, 0), 4).in_range());
    }

    #[test]
    fn test_coordinate_offset_saturates() {
        let edge = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset((1, -1), 1), edge);
        assert_eq!(
            Coordinate::new(0, 0).offset((-1, 1), i32::MAX),
            Coordinate::new(-i32::MAX, i32::MAX)
        );
        assert!(!edge.offset((1, 1), 3).in_range());
    }
}
