use crate::grid::{CellPos, GRID_CELLS_X, GRID_CELLS_Y};
use crate::screen::{rgb5, Color, PixelSurface};

// Rows/columns reserved for clue numbers above and left of the coloring area.
pub const MAX_HINT_X: u32 = 7;
pub const MAX_HINT_Y: u32 = 7;

pub const GRID_COLOR: Color = rgb5(10, 10, 10);
pub const GRID_FIVE_COLOR: Color = rgb5(24, 24, 24);
pub const BG_COLOR: Color = rgb5(31, 31, 31);
pub const HINT_COLOR: Color = rgb5(28, 28, 28);
pub const SELECT_CELL_COLOR: Color = rgb5(24, 0, 0);
pub const FILLED_COLOR: Color = GRID_COLOR;

/// Largest square cell that fits hint margin plus coloring area on both axes.
pub fn compute_cell_size(screen_width: u32, screen_height: u32) -> u32 {
    let width_cells = MAX_HINT_X + GRID_CELLS_X;
    let height_cells = MAX_HINT_Y + GRID_CELLS_Y;
    (screen_width / width_cells).min(screen_height / height_cells)
}

/// Draws the board onto a pixel surface. Holds only the layout, never pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRenderer {
    cell_size: u32,
}

impl GridRenderer {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    pub fn for_surface(surface: &impl PixelSurface) -> Self {
        Self::new(compute_cell_size(surface.width(), surface.height()))
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn grid_origin(&self) -> (u32, u32) {
        (MAX_HINT_X * self.cell_size, MAX_HINT_Y * self.cell_size)
    }

    /// Top-left pixel of a cell's border.
    pub fn cell_origin(&self, pos: CellPos) -> (u32, u32) {
        let (ox, oy) = self.grid_origin();
        (ox + (pos.x - 1) * self.cell_size, oy + (pos.y - 1) * self.cell_size)
    }

    fn is_thick_x(&self, x: u32) -> bool {
        let (ox, _) = self.grid_origin();
        x == ox + 5 * self.cell_size || x == ox + 10 * self.cell_size
    }

    fn is_thick_y(&self, y: u32) -> bool {
        let (_, oy) = self.grid_origin();
        y == oy + 5 * self.cell_size || y == oy + 10 * self.cell_size
    }

    /// Full repaint of margins, lines and empty cells.
    pub fn draw_grid(&self, surface: &mut impl PixelSurface) {
        let cs = self.cell_size;
        if cs == 0 {
            return;
        }
        let total_width = (MAX_HINT_X + GRID_CELLS_X) * cs;
        let total_height = (MAX_HINT_Y + GRID_CELLS_Y) * cs;
        let (hint_w, hint_h) = self.grid_origin();

        for y in 0..=total_height {
            for x in 0..=total_width {
                let color = if x < hint_w || y < hint_h {
                    HINT_COLOR
                } else if x % cs == 0 || y % cs == 0 {
                    if self.is_thick_x(x) || self.is_thick_y(y) {
                        GRID_FIVE_COLOR
                    } else {
                        GRID_COLOR
                    }
                } else {
                    BG_COLOR
                };
                surface.put_pixel(x, y, color);
            }
        }
    }

    /// Repaints a cell's inside, leaving its border alone.
    pub fn draw_cell(&self, surface: &mut impl PixelSurface, pos: CellPos, filled: bool) {
        let (sx, sy) = self.cell_origin(pos);
        let color = if filled { FILLED_COLOR } else { BG_COLOR };
        for i in 1..self.cell_size {
            for j in 1..self.cell_size {
                surface.put_pixel(sx + i, sy + j, color);
            }
        }
    }

    /// Highlights a cell's border, or restores the grid lines under it.
    pub fn draw_cursor(&self, surface: &mut impl PixelSurface, pos: CellPos, highlighted: bool) {
        let cs = self.cell_size;
        let (sx, sy) = self.cell_origin(pos);
        let color = if highlighted { SELECT_CELL_COLOR } else { GRID_COLOR };

        for i in 0..=cs {
            surface.put_pixel(sx + i, sy, color);
            surface.put_pixel(sx + i, sy + cs, color);
            surface.put_pixel(sx, sy + i, color);
            surface.put_pixel(sx + cs, sy + i, color);
        }

        if highlighted {
            return;
        }

        // Sides lying on a five-cell boundary get the thick color back.
        for i in 0..=cs {
            if pos.x == 5 || pos.x == 10 {
                surface.put_pixel(sx + cs, sy + i, GRID_FIVE_COLOR);
            }
            if pos.x == 6 || pos.x == 11 {
                surface.put_pixel(sx, sy + i, GRID_FIVE_COLOR);
            }
            if pos.y == 5 || pos.y == 10 {
                surface.put_pixel(sx + i, sy + cs, GRID_FIVE_COLOR);
            }
            if pos.y == 6 || pos.y == 11 {
                surface.put_pixel(sx + i, sy, GRID_FIVE_COLOR);
            }
        }
    }
}
