use crossterm::style::{Colored, StyledContent, Stylize};

use crate::game::{Board, Color, Coordinate, Slot, COLS, ROWS};

/// Column numbers printed under the board.
pub const COLUMN_HEADER: &str = "1 2 3 4 5 6 7";

/// How pieces are drawn on the console.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colors
    pub color: bool,
    pub red_glyph: String,
    pub yellow_glyph: String,
    pub empty_glyph: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            red_glyph: "●".to_string(),
            yellow_glyph: "●".to_string(),
            empty_glyph: "○".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Plain glyphs, no escape codes.
    pub fn plain() -> Self {
        DisplayConfig {
            color: false,
            red_glyph: "R".to_string(),
            yellow_glyph: "Y".to_string(),
            empty_glyph: ".".to_string(),
        }
    }

    /// Turn colors off. Identical piece glyphs are replaced by `R` and `Y`
    /// so the players stay distinguishable.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        if self.red_glyph == self.yellow_glyph {
            self.red_glyph = "R".to_string();
            self.yellow_glyph = "Y".to_string();
        }
        self
    }

    /// Settings for the current terminal: colors are dropped when `no_color`
    /// is requested or the `NO_COLOR` environment variable is set, since
    /// crossterm then emits no color escapes.
    pub fn for_terminal(self, no_color: bool) -> Self {
        if no_color || Colored::ansi_color_disabled() {
            self.without_color()
        } else {
            self
        }
    }

    fn glyph(&self, slot: Slot, highlighted: bool) -> String {
        let glyph = match slot {
            Slot::Empty => self.empty_glyph.as_str(),
            Slot::Occupied(Color::Red) => self.red_glyph.as_str(),
            Slot::Occupied(Color::Yellow) => self.yellow_glyph.as_str(),
        };
        if !self.color {
            return glyph.to_string();
        }

        let styled: StyledContent<&str> = match slot {
            Slot::Empty => glyph.dark_grey(),
            Slot::Occupied(Color::Red) => glyph.red(),
            Slot::Occupied(Color::Yellow) => glyph.yellow(),
        };
        if highlighted {
            styled.bold().underlined().to_string()
        } else {
            styled.to_string()
        }
    }

    /// Color name as shown in prompts.
    pub fn color_name(&self, color: Color) -> String {
        if !self.color {
            return color.name().to_string();
        }
        match color {
            Color::Red => color.name().red().bold().to_string(),
            Color::Yellow => color.name().yellow().bold().to_string(),
        }
    }
}

/// Render the board as lines of text, top row first, followed by the column
/// header. With colors on, pieces in `highlight` (a winning line) are drawn
/// bold and underlined; plain output ignores `highlight`.
pub fn render_board(board: &Board, display: &DisplayConfig, highlight: &[Coordinate]) -> Vec<String> {
    let mut lines = Vec::with_capacity(ROWS + 1);

    for (top_index, slots) in board.rows_top_down().enumerate() {
        let row = (ROWS - 1 - top_index) as i32;
        let glyphs: Vec<String> = slots
            .iter()
            .enumerate()
            .map(|(col, &slot)| {
                let highlighted = highlight.contains(&Coordinate::new(col as i32, row));
                display.glyph(slot, highlighted)
            })
            .collect();
        debug_assert_eq!(glyphs.len(), COLS);
        lines.push(glyphs.join(" "));
    }

    lines.push(COLUMN_HEADER.to_string());
    lines
}
