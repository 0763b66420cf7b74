use colored::{Color, Colorize};
use liblife::{color::CellColor, grid::Cell, pos::Position};

pub const LIVE_GLYPH: &str = "*";
pub const DEAD_GLYPH: &str = " ";

/// Terminal output for a single frame, collected in memory so it can be written out in one go.
#[derive(Debug, Default)]
pub struct RenderFrame {
    buffer: String,
    drawn_cells: usize,
}

impl RenderFrame {
    pub fn clear_screen(&mut self) {
        self.buffer.push_str("\x1b[H\x1b[2J");
    }

    /// Terminal rows and columns are 1-indexed, grid positions are not.
    pub fn move_to(&mut self, row: usize, column: usize) {
        self.buffer.push_str(&format!("\x1b[{row};{column}H"));
    }

    pub fn draw_cell(&mut self, pos: Position, cell: &Cell) {
        self.move_to(pos.y + 1, pos.x + 1);

        match (cell.alive, cell.color) {
            (true, Some(color)) => {
                let glyph = LIVE_GLYPH.color(terminal_color(color));
                self.buffer.push_str(&glyph.to_string());
            }
            (true, None) => self.buffer.push_str(LIVE_GLYPH),
            (false, _) => self.buffer.push_str(DEAD_GLYPH),
        }

        self.drawn_cells += 1;
    }

    pub fn drawn_cells(&self) -> usize {
        self.drawn_cells
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}

fn terminal_color(color: CellColor) -> Color {
    match color {
        CellColor::Red => Color::Red,
        CellColor::Green => Color::Green,
        CellColor::Yellow => Color::Yellow,
        CellColor::Blue => Color::Blue,
        CellColor::Magenta => Color::Magenta,
        CellColor::Cyan => Color::Cyan,
        CellColor::White => Color::White,
    }
}
