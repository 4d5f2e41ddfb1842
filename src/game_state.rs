use crate::grid::{CellPos, Direction, FillGrid};
use crate::grid_renderer::GridRenderer;
use crate::input::{Button, KeyState};
use crate::screen::PixelSurface;

/// What a held fill button writes into cells the cursor drags over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintColor {
    Filled,
    Empty,
    #[default]
    Inactive,
}

impl PaintColor {
    fn from_fill(filled: bool) -> Self {
        if filled {
            PaintColor::Filled
        } else {
            PaintColor::Empty
        }
    }

    fn as_fill(self) -> Option<bool> {
        match self {
            PaintColor::Filled => Some(true),
            PaintColor::Empty => Some(false),
            PaintColor::Inactive => None,
        }
    }
}

/// Everything the board remembers between frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub cursor: CellPos,
    pub cells: FillGrid,
    pub paint: PaintColor,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints the whole board and the starting cursor.
    pub fn draw_initial(&self, renderer: &GridRenderer, surface: &mut impl PixelSurface) {
        renderer.draw_grid(surface);
        renderer.draw_cursor(surface, self.cursor, true);
    }

    /// Runs one frame: move the cursor, toggle or paint, and redraw what changed.
    pub fn update(
        mut self,
        keys: &KeyState,
        renderer: &GridRenderer,
        surface: &mut impl PixelSurface,
    ) -> Self {
        let previous = self.cursor;
        self.cursor = move_cursor(previous, keys);
        let moved = self.cursor != previous;

        if moved {
            log::debug!("cursor ({}, {}) -> ({}, {})", previous.x, previous.y, self.cursor.x, self.cursor.y);
            renderer.draw_cursor(surface, previous, false);
            renderer.draw_cursor(surface, self.cursor, true);
        }

        if keys.is_down(Button::A) {
            let filled = self.cells.toggle(self.cursor);
            renderer.draw_cell(surface, self.cursor, filled);
            self.paint = PaintColor::from_fill(filled);
            log::debug!(
                "toggled ({}, {}) to {}, {} filled",
                self.cursor.x,
                self.cursor.y,
                filled,
                self.cells.filled_count()
            );
        } else if moved && keys.is_held(Button::A) {
            if let Some(filled) = self.paint.as_fill() {
                if self.cells.get(self.cursor) != filled {
                    self.cells.set(self.cursor, filled);
                    renderer.draw_cell(surface, self.cursor, filled);
                    log::debug!("painted ({}, {}) to {}", self.cursor.x, self.cursor.y, filled);
                }
            }
        }

        if keys.is_up(Button::A) && self.paint != PaintColor::Inactive {
            self.paint = PaintColor::Inactive;
            log::debug!("paint released");
        }

        self
    }
}

/// Applies each triggered direction in turn, dropping steps that leave the grid.
pub fn move_cursor(mut cursor: CellPos, keys: &KeyState) -> CellPos {
    for direction in Direction::ALL {
        if keys.is_triggered(direction.into()) {
            if let Some(next) = cursor.step(direction) {
                cursor = next;
            }
        }
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_renderer::{BG_COLOR, FILLED_COLOR, GRID_COLOR, SELECT_CELL_COLOR};
    use crate::input::{InputSampler, KeyPad};
    use crate::screen::Screen;

    fn pos(x: u32, y: u32) -> CellPos {
        CellPos::new(x, y).unwrap()
    }

    struct Board {
        state: GameState,
        screen: Screen,
        renderer: GridRenderer,
        pad: KeyPad,
        sampler: InputSampler,
    }

    impl Board {
        fn new() -> Self {
            let mut screen = Screen::new();
            let renderer = GridRenderer::for_surface(&screen);
            let state = GameState::new();
            state.draw_initial(&renderer, &mut screen);
            Self {
                state,
                screen,
                renderer,
                pad: KeyPad::new(),
                sampler: InputSampler::new(),
            }
        }

        fn frame(&mut self) {
            let keys = self.sampler.scan(&self.pad);
            let state = std::mem::take(&mut self.state);
            self.state = state.update(&keys, &self.renderer, &mut self.screen);
        }

        fn tap(&mut self, button: Button) {
            self.pad.press(button);
            self.frame();
            self.pad.release(button);
            self.frame();
        }

        fn filled(&self, x: u32, y: u32) -> bool {
            self.state.cells.get(pos(x, y))
        }

        fn interior(&self, x: u32, y: u32) -> Option<u16> {
            let (sx, sy) = self.renderer.cell_origin(pos(x, y));
            self.screen.pixel(sx + 3, sy + 3)
        }

        fn border(&self, x: u32, y: u32) -> Option<u16> {
            let (sx, sy) = self.renderer.cell_origin(pos(x, y));
            self.screen.pixel(sx + 3, sy)
        }
    }

    fn keys(down: &[Button], held: &[Button]) -> KeyState {
        let mask = |buttons: &[Button]| buttons.iter().fold(0, |acc, b| acc | b.mask());
        KeyState {
            down: mask(down),
            down_repeat: 0,
            up: 0,
            held: mask(held) | mask(down),
        }
    }

    #[test]
    fn move_cursor_changes_one_coordinate() {
        let start = pos(8, 8);
        assert_eq!(move_cursor(start, &keys(&[Button::Left], &[])), pos(7, 8));
        assert_eq!(move_cursor(start, &keys(&[Button::Right], &[])), pos(9, 8));
        assert_eq!(move_cursor(start, &keys(&[Button::Up], &[])), pos(8, 7));
        assert_eq!(move_cursor(start, &keys(&[Button::Down], &[])), pos(8, 9));
        assert_eq!(move_cursor(start, &keys(&[], &[Button::Down])), start);
    }

    #[test]
    fn move_cursor_is_clamped_at_edges() {
        assert_eq!(move_cursor(pos(1, 1), &keys(&[Button::Left, Button::Up], &[])), pos(1, 1));
        assert_eq!(move_cursor(pos(15, 15), &keys(&[Button::Right, Button::Down], &[])), pos(15, 15));
        assert_eq!(move_cursor(pos(1, 15), &keys(&[Button::Left, Button::Up], &[])), pos(1, 14));
    }

    #[test]
    fn perpendicular_directions_move_diagonally() {
        assert_eq!(move_cursor(pos(4, 4), &keys(&[Button::Right, Button::Down], &[])), pos(5, 5));
        assert_eq!(move_cursor(pos(4, 4), &keys(&[Button::Left, Button::Right], &[])), pos(4, 4));
    }

    #[test]
    fn repeat_moves_the_cursor() {
        let state = KeyState {
            down_repeat: Button::Right.mask(),
            held: Button::Right.mask(),
            ..KeyState::default()
        };
        assert_eq!(move_cursor(pos(3, 3), &state), pos(4, 3));
    }

    #[test]
    fn initial_board_highlights_origin() {
        let board = Board::new();
        assert_eq!(board.state.cursor, pos(1, 1));
        assert_eq!(board.border(1, 1), Some(SELECT_CELL_COLOR));
        assert_eq!(board.interior(1, 1), Some(BG_COLOR));
    }

    #[test]
    fn press_toggles_and_press_again_restores() {
        let mut board = Board::new();
        board.tap(Button::A);
        assert!(board.filled(1, 1));
        assert_eq!(board.interior(1, 1), Some(FILLED_COLOR));
        assert_eq!(board.state.paint, PaintColor::Inactive);

        board.tap(Button::A);
        assert!(!board.filled(1, 1));
        assert_eq!(board.interior(1, 1), Some(BG_COLOR));
        assert_eq!(board.state.cells, FillGrid::new());
    }

    #[test]
    fn moving_cursor_restores_old_border() {
        let mut board = Board::new();
        board.tap(Button::Right);
        assert_eq!(board.state.cursor, pos(2, 1));
        assert_eq!(board.border(1, 1), Some(GRID_COLOR));
        assert_eq!(board.border(2, 1), Some(SELECT_CELL_COLOR));
    }

    #[test]
    fn walkthrough_fill_move_and_drag() {
        let mut board = Board::new();

        board.tap(Button::A);
        assert!(board.filled(1, 1));

        // Hold Right until auto-repeat has carried the cursor to (4,1).
        board.pad.press(Button::Right);
        board.frame();
        assert_eq!(board.state.cursor, pos(2, 1));
        while board.state.cursor != pos(4, 1) {
            board.frame();
        }
        board.pad.release(Button::Right);
        board.frame();
        assert_eq!(board.state.cursor, pos(4, 1));
        assert!(board.filled(1, 1));
        assert!(!board.filled(4, 1));

        // Press A together with Right: the toggle lands on (5,1), not (4,1).
        board.pad.press(Button::A);
        board.pad.press(Button::Right);
        board.frame();
        assert_eq!(board.state.cursor, pos(5, 1));
        assert!(board.filled(5, 1));
        assert!(!board.filled(4, 1));
        assert_eq!(board.interior(5, 1), Some(FILLED_COLOR));
        assert_eq!(board.state.paint, PaintColor::Filled);

        // Keep A held and step once more: the drag paints (6,1) the same way.
        board.pad.release(Button::Right);
        board.frame();
        board.pad.press(Button::Right);
        board.frame();
        assert_eq!(board.state.cursor, pos(6, 1));
        assert!(board.filled(6, 1));
        assert!(!board.filled(7, 1));

        board.pad.release(Button::Right);
        board.pad.release(Button::A);
        board.frame();
        assert_eq!(board.state.paint, PaintColor::Inactive);
        assert!(board.filled(1, 1));
        assert!(!board.filled(2, 1));
        assert!(!board.filled(3, 1));
        assert!(!board.filled(4, 1));
    }

    #[test]
    fn drag_applies_first_toggle_value_to_every_cell() {
        let mut board = Board::new();
        for &(x, y) in &[(2, 3), (4, 3)] {
            board.state.cells.set(pos(x, y), true);
        }
        board.state.cursor = pos(1, 3);

        // First toggle fills (1,3), so the drag fills everything it stops on.
        board.pad.press(Button::A);
        board.frame();
        assert_eq!(board.state.paint, PaintColor::Filled);
        for _ in 0..5 {
            board.pad.press(Button::Right);
            board.frame();
            board.pad.release(Button::Right);
            board.frame();
        }
        assert_eq!(board.state.cursor, pos(6, 3));
        for x in 1..=6 {
            assert!(board.filled(x, 3), "cell ({}, 3)", x);
        }
    }

    #[test]
    fn drag_can_erase() {
        let mut board = Board::new();
        for x in 1..=4 {
            board.state.cells.set(pos(x, 2), x != 3);
        }
        board.state.cursor = pos(1, 2);

        board.pad.press(Button::A);
        board.frame();
        assert_eq!(board.state.paint, PaintColor::Empty);
        for _ in 0..3 {
            board.pad.press(Button::Right);
            board.frame();
            board.pad.release(Button::Right);
            board.frame();
        }
        for x in 1..=4 {
            assert!(!board.filled(x, 2), "cell ({}, 2)", x);
        }
    }

    #[test]
    fn moving_without_fill_button_paints_nothing() {
        let mut board = Board::new();
        board.tap(Button::A);
        board.tap(Button::Right);
        board.tap(Button::Right);
        assert_eq!(board.state.cells.filled_count(), 1);
    }

    #[test]
    fn press_during_move_toggles_new_cell_once() {
        let mut board = Board::new();
        board.pad.press(Button::Right);
        board.pad.press(Button::A);
        board.frame();
        assert_eq!(board.state.cursor, pos(2, 1));
        assert!(board.filled(2, 1));
        assert!(!board.filled(1, 1));
        assert_eq!(board.interior(2, 1), Some(FILLED_COLOR));
        assert_eq!(board.state.paint, PaintColor::Filled);
    }

    #[test]
    fn fresh_press_after_drag_reads_the_cell() {
        let mut board = Board::new();
        board.pad.press(Button::A);
        board.frame();
        board.pad.press(Button::Right);
        board.frame();
        assert!(board.filled(2, 1));
        board.pad.release(Button::Right);
        board.pad.release(Button::A);
        board.frame();
        assert_eq!(board.state.paint, PaintColor::Inactive);

        board.tap(Button::A);
        assert!(!board.filled(2, 1));
        assert_eq!(board.interior(2, 1), Some(BG_COLOR));
    }

    #[test]
    fn held_button_without_active_paint_does_nothing() {
        let mut state = GameState::new();
        let mut screen = Screen::new();
        let renderer = GridRenderer::for_surface(&screen);
        state.draw_initial(&renderer, &mut screen);

        let drag = keys(&[Button::Right], &[Button::A]);
        state = state.update(&drag, &renderer, &mut screen);
        assert_eq!(state.cursor, pos(2, 1));
        assert_eq!(state.cells.filled_count(), 0);
    }
}
