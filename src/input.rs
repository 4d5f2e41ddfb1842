use crate::grid::Direction;

pub const REPEAT_DELAY: u32 = 10;
pub const REPEAT_INTERVAL: u32 = 5;

/// Keypad buttons, one bit each, in the handheld's register order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
}

impl Button {
    pub const ALL: [Button; 10] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::R,
        Button::L,
    ];

    pub fn mask(self) -> u16 {
        1 << self as u16
    }

    /// Case-insensitive lookup by variant name, e.g. `"select"`.
    pub fn from_name(name: &str) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|button| format!("{:?}", button).eq_ignore_ascii_case(name))
    }
}

impl From<Direction> for Button {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Button::Left,
            Direction::Right => Button::Right,
            Direction::Up => Button::Up,
            Direction::Down => Button::Down,
        }
    }
}

/// Physical button levels, updated from host key events as they arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyPad {
    held: u16,
}

impl KeyPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.held |= button.mask();
    }

    pub fn release(&mut self, button: Button) {
        self.held &= !button.mask();
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }

    pub fn bits(&self) -> u16 {
        self.held
    }
}

/// One frame's view of the keypad. All four masks come from the same scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub down: u16,
    pub down_repeat: u16,
    pub up: u16,
    pub held: u16,
}

impl KeyState {
    pub fn is_down(&self, button: Button) -> bool {
        self.down & button.mask() != 0
    }

    pub fn is_down_repeat(&self, button: Button) -> bool {
        self.down_repeat & button.mask() != 0
    }

    pub fn is_up(&self, button: Button) -> bool {
        self.up & button.mask() != 0
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held & button.mask() != 0
    }

    /// Pressed this frame, either freshly or by auto-repeat.
    pub fn is_triggered(&self, button: Button) -> bool {
        self.is_down(button) || self.is_down_repeat(button)
    }
}

/// Turns raw keypad levels into per-frame edges with auto-repeat.
#[derive(Debug, Clone)]
pub struct InputSampler {
    previous: u16,
    delay: u32,
    interval: u32,
    countdown: u32,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::with_repeat(REPEAT_DELAY, REPEAT_INTERVAL)
    }

    /// A delay of 0 disables auto-repeat entirely.
    pub fn with_repeat(delay: u32, interval: u32) -> Self {
        Self {
            previous: 0,
            delay,
            interval,
            countdown: delay,
        }
    }

    /// Samples the keypad; call exactly once per frame.
    pub fn scan(&mut self, keypad: &KeyPad) -> KeyState {
        let held = keypad.bits();
        let down = held & !self.previous;
        let up = self.previous & !held;

        let mut down_repeat = 0;
        if self.delay != 0 {
            if held != self.previous {
                self.countdown = self.delay;
                down_repeat = down;
            } else {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.countdown = self.interval.max(1);
                    down_repeat = held;
                }
            }
        }

        self.previous = held;
        KeyState {
            down,
            down_repeat,
            up,
            held,
        }
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}
