use std::collections::HashMap;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::input::{Button, KeyPad};

/// Keyboard layout used when no configuration overrides it.
pub const DEFAULT_BINDINGS: [(Button, &str); 10] = [
    (Button::A, "Z"),
    (Button::B, "X"),
    (Button::Select, "Back"),
    (Button::Start, "Return"),
    (Button::Right, "Right"),
    (Button::Left, "Left"),
    (Button::Up, "Up"),
    (Button::Down, "Down"),
    (Button::R, "S"),
    (Button::L, "A"),
];

/// What a keyboard event means to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Button(Button, bool),
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: HashMap<VirtualKeyCode, Button>,
}

impl InputMapper {
    pub fn new(bindings: HashMap<VirtualKeyCode, Button>) -> Self {
        Self { bindings }
    }

    pub fn map(&self, key_code: VirtualKeyCode) -> Option<Button> {
        self.bindings.get(&key_code).copied()
    }

    pub fn map_keyboard_input(&self, input: &KeyboardInput) -> KeyAction {
        let Some(key_code) = input.virtual_keycode else {
            return KeyAction::None;
        };
        let pressed = input.state == ElementState::Pressed;

        match self.map(key_code) {
            Some(button) => KeyAction::Button(button, pressed),
            None if key_code == VirtualKeyCode::Escape && pressed => KeyAction::Quit,
            None => KeyAction::None,
        }
    }

    /// Feeds a keyboard event into the keypad. Returns true when the user asked to quit.
    pub fn apply(&self, input: &KeyboardInput, keypad: &mut KeyPad) -> bool {
        match self.map_keyboard_input(input) {
            KeyAction::Button(button, true) => keypad.press(button),
            KeyAction::Button(button, false) => keypad.release(button),
            KeyAction::Quit => return true,
            KeyAction::None => {}
        }
        false
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .filter_map(|&(button, name)| key_from_name(name).map(|key| (key, button)))
            .collect();
        Self::new(bindings)
    }
}

/// Parses the key names accepted in the configuration file.
pub fn key_from_name(name: &str) -> Option<VirtualKeyCode> {
    let key = match name {
        "A" => VirtualKeyCode::A,
        "B" => VirtualKeyCode::B,
        "C" => VirtualKeyCode::C,
        "D" => VirtualKeyCode::D,
        "E" => VirtualKeyCode::E,
        "F" => VirtualKeyCode::F,
        "G" => VirtualKeyCode::G,
        "H" => VirtualKeyCode::H,
        "I" => VirtualKeyCode::I,
        "J" => VirtualKeyCode::J,
        "K" => VirtualKeyCode::K,
        "L" => VirtualKeyCode::L,
        "M" => VirtualKeyCode::M,
        "N" => VirtualKeyCode::N,
        "O" => VirtualKeyCode::O,
        "P" => VirtualKeyCode::P,
        "Q" => VirtualKeyCode::Q,
        "R" => VirtualKeyCode::R,
        "S" => VirtualKeyCode::S,
        "T" => VirtualKeyCode::T,
        "U" => VirtualKeyCode::U,
        "V" => VirtualKeyCode::V,
        "W" => VirtualKeyCode::W,
        "X" => VirtualKeyCode::X,
        "Y" => VirtualKeyCode::Y,
        "Z" => VirtualKeyCode::Z,

        "0" => VirtualKeyCode::Key0,
        "1" => VirtualKeyCode::Key1,
        "2" => VirtualKeyCode::Key2,
        "3" => VirtualKeyCode::Key3,
        "4" => VirtualKeyCode::Key4,
        "5" => VirtualKeyCode::Key5,
        "6" => VirtualKeyCode::Key6,
        "7" => VirtualKeyCode::Key7,
        "8" => VirtualKeyCode::Key8,
        "9" => VirtualKeyCode::Key9,

        "Up" => VirtualKeyCode::Up,
        "Down" => VirtualKeyCode::Down,
        "Left" => VirtualKeyCode::Left,
        "Right" => VirtualKeyCode::Right,

        "Return" | "Enter" => VirtualKeyCode::Return,
        "Back" | "Backspace" => VirtualKeyCode::Back,
        "Space" => VirtualKeyCode::Space,
        "Tab" => VirtualKeyCode::Tab,
        "LShift" => VirtualKeyCode::LShift,
        "RShift" => VirtualKeyCode::RShift,
        "LControl" => VirtualKeyCode::LControl,
        "RControl" => VirtualKeyCode::RControl,
        "Comma" => VirtualKeyCode::Comma,
        "Period" => VirtualKeyCode::Period,
        "Slash" => VirtualKeyCode::Slash,
        "Semicolon" => VirtualKeyCode::Semicolon,
        _ => return None,
    };
    Some(key)
}
