mod tests {
    use matrix_light_animator::Rgb;
    use matrix_light_animator::gamma::{correct, gamma8};

    #[test]
    fn test_gamma8_endpoints() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(255), 255);
    }

    #[test]
    fn test_gamma8_darkens_midtones() {
        assert!(gamma8(128) < 128);
        assert!(gamma8(64) < 64);
    }

    #[test]
    fn test_gamma8_monotonic() {
        let mut previous = 0;
        for value in 0..=255u8 {
            let corrected = gamma8(value);
            assert!(corrected >= previous, "not monotonic at {value}");
            previous = corrected;
        }
    }

    #[test]
    fn test_correct_preserves_extremes() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(correct(black), black);
        assert_eq!(correct(white), white);
    }

    #[test]
    fn test_correct_applies_per_channel() {
        let color = Rgb {
            r: 255,
            g: 128,
            b: 0,
        };
        let corrected = correct(color);
        assert_eq!(corrected.r, 255);
        assert_eq!(corrected.g, gamma8(128));
        assert_eq!(corrected.b, 0);
    }
}
