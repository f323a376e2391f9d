mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use embassy_time::{Duration, Instant};
    use matrix_light_animator::{
        AnimatorConfig, CommandChannel, FrameScheduler, MatrixAnimator, MatrixGeometry,
        OutputDriver, Rgb, SweepTimings,
    };

    struct CountingDriver {
        writes: Rc<Cell<usize>>,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, _colors: &[Rgb]) {
            self.writes.set(self.writes.get() + 1);
        }
    }

    fn scheduler<'a>(
        channel: &'a CommandChannel<4>,
        writes: &Rc<Cell<usize>>,
    ) -> FrameScheduler<'a, CountingDriver, 12, 16, 4> {
        let config = AnimatorConfig {
            geometry: MatrixGeometry::new(4, 3),
            brightness: 255,
            boot_color: Rgb { r: 0, g: 0, b: 0 },
            random_seed: 1,
            timings: SweepTimings::defaults(4),
        };
        let animator = MatrixAnimator::new(channel.receiver(), &config, Instant::from_millis(0));
        let driver = CountingDriver {
            writes: Rc::clone(writes),
        };
        FrameScheduler::with_frame_duration(animator, driver, Duration::from_millis(10))
    }

    #[test]
    fn test_tick_paces_frames() {
        let channel = CommandChannel::<4>::new();
        let writes = Rc::new(Cell::new(0));
        let mut scheduler = scheduler(&channel, &writes);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        // Waking early leaves the schedule untouched
        let result = scheduler.tick(Instant::from_millis(5));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));
    }

    #[test]
    fn test_tick_resets_schedule_after_long_stall() {
        let channel = CommandChannel::<4>::new();
        let writes = Rc::new(Cell::new(0));
        let mut scheduler = scheduler(&channel, &writes);

        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(10));

        // More than two frames behind: realign to now instead of bursting
        let result = scheduler.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(110));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_tick_flushes_once_per_frame() {
        let channel = CommandChannel::<4>::new();
        let writes = Rc::new(Cell::new(0));
        let mut scheduler = scheduler(&channel, &writes);

        for frame in 0..5u64 {
            scheduler.tick(Instant::from_millis(frame * 10));
        }
        assert_eq!(writes.get(), 5);
    }
}
