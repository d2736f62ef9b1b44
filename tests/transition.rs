mod tests {
    use uniform_keyboard::transition::{Oscillator, TriggerFade};

    #[test]
    fn test_trigger_fade_rises_while_held() {
        let mut fade = TriggerFade::new(50);
        for _ in 0..10 {
            fade.drive(true);
        }
        assert_eq!(fade.strength(), 10);
    }

    #[test]
    fn test_trigger_fade_saturates_at_max() {
        let mut fade = TriggerFade::new(50);
        for _ in 0..80 {
            fade.drive(true);
        }
        assert_eq!(fade.strength(), 50);
    }

    #[test]
    fn test_trigger_fade_symmetry() {
        // held for N ticks, strength reaches min(N, fade_time)...
        let mut fade = TriggerFade::new(50);
        for _ in 0..10 {
            fade.drive(true);
        }
        // ...then decreases by one per tick until zero
        for expected in (0..10).rev() {
            let died = fade.drive(false);
            assert_eq!(fade.strength(), expected);
            assert_eq!(died, expected == 0);
        }
        // stays idle afterwards
        assert!(!fade.drive(false));
        assert_eq!(fade.strength(), 0);
        assert!(!fade.active(false));
    }

    #[test]
    fn test_trigger_fade_reassert_mid_decay() {
        let mut fade = TriggerFade::new(50);
        for _ in 0..20 {
            fade.drive(true);
        }
        for _ in 0..5 {
            fade.drive(false);
        }
        assert_eq!(fade.strength(), 15);
        // trigger re-asserted before dying out resumes the ramp
        fade.drive(true);
        assert_eq!(fade.strength(), 16);
    }

    #[test]
    fn test_oscillator_rest_restores_phase() {
        let mut osc = Oscillator::new(35.0, 70);
        let at_rest = osc.value();
        for _ in 0..17 {
            osc.advance();
        }
        assert!((osc.value() - at_rest).abs() > 1e-3);
        osc.rest();
        assert!((osc.value() - at_rest).abs() < 1e-6);
    }

    #[test]
    fn test_oscillator_stays_bounded_across_wrap() {
        // period is 2 * PI * speed ticks; run well past several wraps
        let mut osc = Oscillator::new(35.0, 70);
        for _ in 0..1000 {
            osc.advance();
            let value = osc.value();
            assert!((-1.0..=1.0).contains(&value));
        }
    }
}
