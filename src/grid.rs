pub const GRID_CELLS_X: u32 = 15;
pub const GRID_CELLS_Y: u32 = 15;

/// 1-based cell coordinate on the coloring area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub x: u32,
    pub y: u32,
}

impl CellPos {
    /// Top-left cell, where the cursor starts.
    pub const ORIGIN: CellPos = CellPos { x: 1, y: 1 };

    pub fn new(x: u32, y: u32) -> Option<Self> {
        if (1..=GRID_CELLS_X).contains(&x) && (1..=GRID_CELLS_Y).contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// One step in `direction`, or `None` if that would leave the grid.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y)
    }

    fn index(self) -> usize {
        ((self.y - 1) * GRID_CELLS_X + (self.x - 1)) as usize
    }
}

impl Default for CellPos {
    fn default() -> Self {
        Self::ORIGIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Fill state of every cell in the coloring area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillGrid {
    cells: [bool; (GRID_CELLS_X * GRID_CELLS_Y) as usize],
}

impl FillGrid {
    pub fn new() -> Self {
        Self {
            cells: [false; (GRID_CELLS_X * GRID_CELLS_Y) as usize],
        }
    }

    pub fn get(&self, pos: CellPos) -> bool {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: CellPos, filled: bool) {
        self.cells[pos.index()] = filled;
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, pos: CellPos) -> bool {
        let cell = &mut self.cells[pos.index()];
        *cell = !*cell;
        *cell
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }
}

impl Default for FillGrid {
    fn default() -> Self {
        Self::new()
    }
}
