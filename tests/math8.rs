mod tests {
    use uniform_keyboard::math8::{blend8, scale8, sin_blend};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sin_blend_endpoints_exact() {
        assert_eq!(sin_blend(10, 200, 0, 50), 10);
        assert_eq!(sin_blend(10, 200, 50, 50), 200);
        // strength past the ceiling still pins to the far endpoint
        assert_eq!(sin_blend(10, 200, 80, 50), 200);
    }

    #[test]
    fn test_sin_blend_midpoint() {
        // sin(0) at the half-way point gives an exact 50/50 blend
        assert_eq!(sin_blend(0, 100, 25, 50), 50);
        assert_eq!(sin_blend(100, 200, 25, 50), 150);
        assert_eq!(sin_blend(200, 100, 25, 50), 150);
    }

    #[test]
    fn test_sin_blend_ease_curve() {
        // the sine ramp starts slower than a linear crossfade...
        let early = sin_blend(0, 200, 5, 50);
        assert!(u16::from(early) < 200 * 5 / 50);
        // ...and ends slower too, mirrored around the midpoint
        let late = sin_blend(0, 200, 45, 50);
        assert!(u16::from(late) > 200 * 45 / 50);
        // mirrored around the midpoint, up to rounding
        assert!(early.abs_diff(200 - late) <= 1);
    }

    #[test]
    fn test_sin_blend_monotonic() {
        let mut prev = 0;
        for strength in 0..=50 {
            let value = sin_blend(0, 255, strength, 50);
            assert!(value >= prev);
            prev = value;
        }
    }
}
