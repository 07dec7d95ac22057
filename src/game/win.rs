use super::{Board, Color, Coordinate};

/// Number of aligned pieces needed to win.
pub const LINE_LEN: usize = 4;

/// The 8 unit directions around a slot.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One representative per undirected line: horizontal, vertical, `/` and `\`.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Read-only view of a board that looks for four-in-a-row.
pub struct WinDetector<'a> {
    board: &'a Board,
}

impl<'a> WinDetector<'a> {
    pub fn new(board: &'a Board) -> Self {
        WinDetector { board }
    }

    /// Check whether the piece at `origin` completes a line of four `color` pieces.
    ///
    /// `origin` must be the coordinate of the most recent placement. Every
    /// earlier position was non-winning, so a new line can only pass through
    /// the newest piece; this is not a general full-board scan.
    ///
    /// Returns four contiguous coordinates of the line, ordered along the line
    /// direction and always including `origin`.
    pub fn check(&self, origin: Coordinate, color: Color) -> Option<[Coordinate; LINE_LEN]> {
        if self.board.color_at(origin) != Some(color) {
            return None;
        }

        let neighbors = self.matching_neighbors(origin, color);

        for dir in LINE_DIRECTIONS {
            let back_dir = (-dir.0, -dir.1);
            if !neighbors.contains(&dir) && !neighbors.contains(&back_dir) {
                continue;
            }

            let forward = self.run_length(origin, dir);
            // Excludes origin so it isn't counted twice
            let backward = self.run_length(origin, back_dir) - 1;
            if forward + backward < LINE_LEN {
                continue;
            }

            // Start as far back as possible while keeping origin in the window
            let start = origin.offset(back_dir, backward.min(LINE_LEN - 1) as i32);
            let mut line = [start; LINE_LEN];
            for (step, coord) in line.iter_mut().enumerate() {
                *coord = start.offset(dir, step as i32);
            }
            return Some(line);
        }

        None
    }

    /// Directions whose adjacent slot holds a piece of `color`.
    pub fn matching_neighbors(&self, origin: Coordinate, color: Color) -> Vec<(i32, i32)> {
        if !origin.in_range() {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .copied()
            .filter(|&dir| self.board.color_at(origin.offset(dir, 1)) == Some(color))
            .collect()
    }

    /// Count consecutive pieces matching origin's color, origin included,
    /// stopping at the board edge or the first mismatch.
    fn run_length(&self, origin: Coordinate, dir: (i32, i32)) -> usize {
        let color = self.board.color_at(origin);
        let mut count = 0;
        let mut coord = origin;
        while color.is_some() && self.board.color_at(coord) == color {
            count += 1;
            coord = coord.offset(dir, 1);
        }
        count
    }
}
