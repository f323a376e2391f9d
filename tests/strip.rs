mod tests {
    use matrix_light_animator::{OutputDriver, Rgb, Strip};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    struct CaptureDriver {
        last: Vec<Rgb>,
    }

    impl OutputDriver for CaptureDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_starts_dark() {
        let strip = Strip::<8>::new(255);
        assert!(strip.frame().iter().all(|&pixel| pixel == BLACK));
    }

    #[test]
    fn test_set_pixel_reads_back() {
        let mut strip = Strip::<8>::new(255);
        strip.set_pixel(3, RED);
        assert_eq!(strip.pixel(3), RED);
        assert_eq!(strip.pixel(2), BLACK);
    }

    #[test]
    fn test_fill_covers_every_pixel() {
        let mut strip = Strip::<8>::new(255);
        strip.set_pixel(0, RED);
        strip.fill(Rgb { r: 0, g: 50, b: 0 });
        assert!(
            strip
                .frame()
                .iter()
                .all(|&pixel| pixel == Rgb { r: 0, g: 50, b: 0 })
        );
    }

    #[test]
    fn test_flush_at_full_brightness_is_raw() {
        let mut strip = Strip::<4>::new(255);
        strip.fill(RED);

        let mut driver = CaptureDriver { last: Vec::new() };
        strip.flush(&mut driver);
        assert!(driver.last.iter().all(|&pixel| pixel == RED));
    }

    #[test]
    fn test_flush_scales_by_brightness() {
        let mut strip = Strip::<4>::new(255);
        strip.fill(RED);
        strip.set_brightness(128);
        assert_eq!(strip.brightness(), 128);

        let mut driver = CaptureDriver { last: Vec::new() };
        strip.flush(&mut driver);
        assert!(
            driver
                .last
                .iter()
                .all(|&pixel| pixel == Rgb { r: 128, g: 0, b: 0 })
        );
        // The buffer itself stays unscaled
        assert!(strip.frame().iter().all(|&pixel| pixel == RED));
    }
}
