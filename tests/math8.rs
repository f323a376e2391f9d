mod tests {
    use embassy_time::Duration;
    use matrix_light_animator::math8::{blend8, ease_exponential_out, progress8, scale8};

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
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
        // Zero duration never divides
        assert_eq!(
            progress8(Duration::from_millis(5), Duration::from_millis(0)),
            0
        );
    }

    #[test]
    fn test_ease_exponential_out_endpoints() {
        assert_eq!(ease_exponential_out(0), 0);
        assert_eq!(ease_exponential_out(255), 255);
    }

    #[test]
    fn test_ease_exponential_out_monotonic() {
        let mut previous = 0;
        for t in 0..=255u8 {
            let eased = ease_exponential_out(t);
            assert!(eased >= previous, "not monotonic at t={t}");
            previous = eased;
        }
    }

    #[test]
    fn test_ease_exponential_out_fast_attack() {
        // Exponential-out rises much faster than linear early on
        assert!(ease_exponential_out(64) > 200);
    }
}
