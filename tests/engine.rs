mod tests {
    use uniform_keyboard::config::{STATUS_LED_COUNT, STATUS_LED_TICK};
    use uniform_keyboard::keycode::Keycode;
    use uniform_keyboard::mode::ModeId;
    use uniform_keyboard::{Hsv, SettingsStore, StatusLedDriver, StatusLedEngine};

    /// In-memory stand-in for the host's persisted word
    struct MockStore {
        word: u32,
    }

    impl SettingsStore for MockStore {
        fn read(&self) -> u32 {
            self.word
        }

        fn write(&mut self, word: u32) {
            self.word = word;
        }
    }

    /// Captures the per-LED submissions of the last tick
    struct RecordingDriver {
        colors: [Hsv; STATUS_LED_COUNT],
    }

    impl RecordingDriver {
        fn new() -> Self {
            Self {
                colors: [Hsv {
                    hue: 0,
                    sat: 0,
                    val: 0,
                }; STATUS_LED_COUNT],
            }
        }
    }

    impl StatusLedDriver for RecordingDriver {
        fn set_hsv_at(&mut self, index: usize, color: Hsv) {
            self.colors[index] = color;
        }
    }

    #[test]
    fn test_tick_returns_fixed_interval() {
        let store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);
        let mut driver = RecordingDriver::new();

        assert_eq!(engine.tick(&mut driver), STATUS_LED_TICK);
        assert_eq!(engine.tick(&mut driver), STATUS_LED_TICK);
    }

    #[test]
    fn test_mode_increment_persists_low_byte() {
        let mut store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);
        assert_eq!(engine.mode_id(), ModeId::Sorbet);

        engine.next_mode(&mut store);
        assert_eq!(engine.mode_id(), ModeId::Rainbow);
        assert_eq!(store.word & 0xFF, 1);

        // full trip around the registry lands back on the first mode
        engine.next_mode(&mut store);
        engine.next_mode(&mut store);
        engine.next_mode(&mut store);
        assert_eq!(engine.mode_id(), ModeId::Sorbet);
        assert_eq!(store.word & 0xFF, 0);
    }

    #[test]
    fn test_mode_decrement_wraps() {
        let mut store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);

        engine.prev_mode(&mut store);
        assert_eq!(engine.mode_id(), ModeId::Imperial);
        assert_eq!(store.word & 0xFF, 3);
    }

    #[test]
    fn test_mode_change_preserves_other_lanes() {
        let mut store = MockStore { word: 0xBEEF_6401 };
        let mut engine = StatusLedEngine::load(&store);
        assert_eq!(engine.mode_id(), ModeId::Rainbow);

        engine.next_mode(&mut store);
        assert_eq!(store.word, 0xBEEF_6402);
    }

    #[test]
    fn test_brightness_decrease_scenario() {
        let mut store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);
        assert_eq!(engine.brightness(), 100);

        for _ in 0..5 {
            engine.brightness_down(&mut store);
        }
        assert_eq!(engine.brightness(), 75);
        assert_eq!((store.word >> 8) & 0xFF, 75);
    }

    #[test]
    fn test_brightness_clamps_over_any_sequence() {
        let mut store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);

        for _ in 0..10 {
            engine.brightness_up(&mut store);
        }
        assert_eq!(engine.brightness(), 100);

        for _ in 0..30 {
            engine.brightness_down(&mut store);
            assert!(engine.brightness() <= 100);
            assert!(engine.brightness().is_multiple_of(5));
        }
        assert_eq!(engine.brightness(), 0);

        engine.brightness_up(&mut store);
        assert_eq!(engine.brightness(), 5);
    }

    #[test]
    fn test_bad_stored_settings_are_coerced() {
        // mode index past the registry, brightness off the grid
        let store = MockStore { word: 0x0000_4909 };
        let engine = StatusLedEngine::load(&store);
        assert_eq!(engine.mode_id(), ModeId::Sorbet);
        assert_eq!(engine.brightness(), 100);
    }

    #[test]
    fn test_caps_flip_ignores_press() {
        let store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);
        assert!(!engine.modifiers().caps_lock());

        engine.flip_caps_lock(true);
        assert!(!engine.modifiers().caps_lock());

        engine.flip_caps_lock(false);
        assert!(engine.modifiers().caps_lock());
    }

    #[test]
    fn test_post_processing_at_rest_is_pure_brightness_scale() {
        // rainbow at 60% brightness: val must be exactly 255 * 60 / 100
        let store = MockStore { word: 0x0000_3C01 };
        let mut engine = StatusLedEngine::load(&store);
        let mut driver = RecordingDriver::new();

        engine.tick(&mut driver);

        let hues: Vec<u8> = driver.colors.iter().map(|c| c.hue).collect();
        assert_eq!(hues, [1, 21, 41]);
        for color in &driver.colors {
            assert_eq!(color.sat, 255);
            assert_eq!(color.val, 153);
        }
    }

    #[test]
    fn test_sorbet_trace_engages_and_recovers() {
        let store = MockStore { word: 0x0000_6400 };
        let mut engine = StatusLedEngine::load(&store);
        let mut driver = RecordingDriver::new();

        // caps lock on: the trace starts washing out saturation
        engine.flip_caps_lock(false);
        for _ in 0..25 {
            engine.tick(&mut driver);
        }
        let min_sat = driver.colors.iter().map(|c| c.sat).min().unwrap();
        assert!(min_sat < 255);

        // caps lock off: the trace fades back out to the base palette
        engine.flip_caps_lock(false);
        for _ in 0..60 {
            engine.tick(&mut driver);
        }
        for color in &driver.colors {
            assert_eq!(color.sat, 255);
        }

        // modifier tracking never touched the persisted word
        assert_eq!(store.word, 0x0000_6400);
    }

    #[test]
    fn test_imperial_marches_on_key_events() {
        let store = MockStore { word: 0x0000_6403 };
        let mut engine = StatusLedEngine::load(&store);
        let mut driver = RecordingDriver::new();
        assert_eq!(engine.mode_id(), ModeId::Imperial);

        // idle: the cluster sits at its rest glow
        engine.tick(&mut driver);
        for color in &driver.colors {
            assert_eq!(color.val, 25);
        }

        // a key press queues march phase and lights the sweep
        engine.key_event(Keycode::A, true);
        for _ in 0..10 {
            engine.tick(&mut driver);
        }
        let max_val = driver.colors.iter().map(|c| c.val).max().unwrap();
        assert!(max_val > 25);

        // queued phase drains and the fade dies back to the rest glow
        for _ in 0..80 {
            engine.tick(&mut driver);
        }
        for color in &driver.colors {
            assert_eq!(color.val, 25);
        }
    }
}
