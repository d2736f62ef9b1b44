//! Logical keycodes and layers
//!
//! A closed set of the codes this board emits. The host translates the
//! standard codes to HID usages; the `Fn*` and `Status*` codes are consumed
//! locally by the keymap dispatch and never reach the host report.

/// Keymap layers, bottom of the stack first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Layer {
    Default = 0,
    Fn1 = 1,
    Fn2 = 2,
    Fn3 = 3,
    Fn4 = 4,
}

/// Number of keymap layers
pub const LAYER_COUNT: usize = 5;

/// Logical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keycode {
    /// Unmapped position
    #[default]
    No,

    // Alphas
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Number row
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    N0,

    // Function row
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Punctuation
    Grave,
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Dot,
    Slash,

    // Control and navigation
    Escape,
    Tab,
    Backspace,
    Delete,
    Enter,
    Space,
    CapsLock,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,

    // Modifiers
    LeftShift,
    RightShift,
    LeftCtrl,
    LeftAlt,
    LeftGui,

    // Media
    Mute,
    VolumeUp,
    VolumeDown,
    MediaPrevTrack,
    MediaPlayPause,
    MediaNextTrack,

    // Momentary layer keys
    Fn1,
    Fn2,
    Fn3,
    Fn4,

    // Status LED controls (settings layer)
    StatusModeNext,
    StatusModePrev,
    StatusBrightnessUp,
    StatusBrightnessDown,
}
