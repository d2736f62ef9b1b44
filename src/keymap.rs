//! Keymap tables
//!
//! Five layers over the 5x14 matrix. The default layer is a standard 60%-ish
//! block plus the split spacebar and the three-key macro cluster; Fn1 holds
//! the function row, a numpad block and media keys; Fn2 is the settings
//! layer with the status LED controls; Fn3/Fn4 are reserved macro layers.

#![allow(clippy::enum_glob_use)]

use crate::config::{MATRIX_COLS, MATRIX_ROWS};
use crate::keycode::{Keycode, LAYER_COUNT};

/// The compiled-in keymap
#[rustfmt::skip]
pub const fn default_keymap() -> [[[Keycode; MATRIX_COLS]; MATRIX_ROWS]; LAYER_COUNT] {
    use Keycode::*;
    [
        // Layer 0: default
        [
            [Escape,    N1,        N2,       N3,   N4,             N5,  N6,             N7,  N8,             N9,             N0,              Minus,          Equal,         Backspace],
            [Tab,       Q,         W,        E,    R,              T,   Y,              U,   I,              O,              P,               LeftBracket,    RightBracket,  Backslash],
            [CapsLock,  A,         S,        D,    F,              G,   H,              J,   K,              L,              Semicolon,       Quote,          Enter,         Home],
            [LeftShift, Z,         X,        C,    V,              B,   N,              M,   Comma,          Dot,            Slash,           RightShift,     Up,            End],
            [LeftCtrl,  LeftGui,   LeftAlt,  No,   Space,          Fn1, Space,          No,  Fn2,            Fn3,            Fn4,             Left,           Down,          Right],
        ],
        // Layer 1: function row, numpad block, media keys
        [
            [Grave,     F1,        F2,       F3,   F4,             F5,  F6,             F7,  F8,             F9,             F10,             F11,            F12,           Delete],
            [Tab,       Q,         LeftGui,  E,    R,              T,   Y,              U,   N7,             N8,             N9,              LeftBracket,    RightBracket,  Backslash],
            [CapsLock,  A,         S,        Delete, F,            G,   H,              J,   N4,             N5,             N6,              Quote,          Enter,         VolumeUp],
            [LeftShift, Z,         X,        C,    V,              B,   N,              M,   N1,             N2,             N3,              RightShift,     Mute,          VolumeDown],
            [LeftCtrl,  LeftGui,   LeftAlt,  No,   Space,          Fn1, Space,          No,  N0,             N0,             Dot,             MediaPrevTrack, MediaPlayPause, MediaNextTrack],
        ],
        // Layer 2: keyboard settings
        [
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             StatusBrightnessUp, No],
            [No,        No,        No,       No,   StatusModePrev, No,  StatusModeNext, No,  Fn2,            No,             No,              No,             StatusBrightnessDown, No],
        ],
        // Layer 3: reserved macro layer
        [
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             Fn3,            No,              No,             No,            No],
        ],
        // Layer 4: reserved macro layer
        [
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             No,              No,             No,            No],
            [No,        No,        No,       No,   No,             No,  No,             No,  No,             No,             Fn4,             No,             No,            No],
        ],
    ]
}
