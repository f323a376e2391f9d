mod tests {
    use matrix_light_animator::Rgb;
    use matrix_light_animator::rng::Rng;
    use matrix_light_animator::sweep::{GyroSweep, VerticalSweep};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[test]
    fn test_gyro_wraps_once_per_lap() {
        let mut sweep = GyroSweep::new();
        let mut rng = Rng::new(1);

        let mut wraps = 0;
        for tick in 0..16 {
            let step = sweep.advance(16, &mut rng);
            assert_eq!(step.column, (tick + 1) % 16);
            if step.new_cycle {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(sweep.front_pixel(), 0);
    }

    #[test]
    fn test_gyro_keeps_color_until_wrap() {
        let mut sweep = GyroSweep::new();
        let mut rng = Rng::new(1);
        sweep.set_color(RED);

        for _ in 0..15 {
            let step = sweep.advance(16, &mut rng);
            assert!(!step.new_cycle);
            assert_eq!(step.color, RED);
        }

        let step = sweep.advance(16, &mut rng);
        assert!(step.new_cycle);
        // Fresh hue is fully saturated at half lightness
        let max = step.color.r.max(step.color.g).max(step.color.b);
        let min = step.color.r.min(step.color.g).min(step.color.b);
        assert_eq!(max, 255);
        assert_eq!(min, 0);
    }

    #[test]
    fn test_gyro_reset() {
        let mut sweep = GyroSweep::new();
        let mut rng = Rng::new(1);

        sweep.advance(16, &mut rng);
        sweep.advance(16, &mut rng);
        assert_eq!(sweep.front_pixel(), 2);

        sweep.reset();
        assert_eq!(sweep.front_pixel(), 0);
    }

    #[test]
    fn test_vertical_wraps_once_per_lap() {
        let mut sweep = VerticalSweep::new();
        let mut rng = Rng::new(1);

        let mut wraps = 0;
        for tick in 0..15 {
            let step = sweep.advance(15, &mut rng);
            assert_eq!(step.row, (tick + 1) % 15);
            if step.new_cycle {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(sweep.front_row(), 0);
    }

    #[test]
    fn test_vertical_keeps_color_until_wrap() {
        let mut sweep = VerticalSweep::new();
        let mut rng = Rng::new(1);
        sweep.set_color(RED);

        for _ in 0..14 {
            let step = sweep.advance(15, &mut rng);
            assert!(!step.new_cycle);
            assert_eq!(step.color, RED);
        }

        assert!(sweep.advance(15, &mut rng).new_cycle);
    }
}
