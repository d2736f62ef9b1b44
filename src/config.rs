//! Static board configuration
//!
//! Matrix geometry, USB identity, pin assignments and the status LED timing
//! constants. The host framework consumes these when it builds its scan loop
//! and USB descriptors; nothing here is read back at runtime except the LED
//! constants.

use embassy_time::Duration;

/* Key matrix */
pub const MATRIX_ROWS: usize = 5;
pub const MATRIX_COLS: usize = 14;

/// Debounce window for the host scan loop, in milliseconds
pub const DEBOUNCE_MS: u8 = 5;

/* USB device identity */
pub const VENDOR_ID: u16 = 0xFEED;
pub const PRODUCT_ID: u16 = 0x9797;
pub const DEVICE_VERSION: u16 = 0x0001;
pub const MANUFACTURER: &str = "Uniform";
pub const PRODUCT: &str = "Uniform Keyboard";

/// Number of addressable status LEDs above the key cluster
pub const STATUS_LED_COUNT: usize = 3;

/// Fixed animation tick interval
///
/// Every effect counter in this crate (trace speeds, fade times, pulse
/// periods) is calibrated in ticks of this length.
pub const STATUS_LED_TICK: Duration = Duration::from_millis(16);

/// Delay before the first tick after init
pub const FIRST_TICK_DELAY: Duration = Duration::from_millis(1);

/// MCU pin identifier, named by port letter and pin number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinName {
    pub port: char,
    pub pin: u8,
}

const fn pin(port: char, pin: u8) -> PinName {
    PinName { port, pin }
}

/// Row strobe pins, top row first
pub const MATRIX_ROW_PINS: [PinName; MATRIX_ROWS] =
    [pin('B', 12), pin('B', 13), pin('B', 14), pin('B', 15), pin('A', 8)];

/// Column sense pins, left column first
pub const MATRIX_COL_PINS: [PinName; MATRIX_COLS] = [
    pin('A', 0),
    pin('A', 1),
    pin('A', 2),
    pin('A', 3),
    pin('A', 4),
    pin('A', 5),
    pin('A', 6),
    pin('A', 7),
    pin('B', 0),
    pin('B', 1),
    pin('B', 3),
    pin('B', 4),
    pin('B', 5),
    pin('B', 6),
];

/// Data pin for the status LED chain
pub const RGB_DATA_PIN: PinName = pin('A', 10);
