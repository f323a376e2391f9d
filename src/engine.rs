use embassy_time::{Duration, Instant};

#[cfg(feature = "log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, WHITE, blend_colors, darken, random_hue};
use crate::command::{Command, CommandReceiver};
use crate::gamma;
use crate::geometry::MatrixGeometry;
use crate::math8::ease_exponential_out;
use crate::mode::ModeId;
use crate::pool::{Animation, AnimationPool};
use crate::rng::Rng;
use crate::strip::Strip;
use crate::sweep::{GyroSweep, SWEEP_LIGHTNESS, VerticalStep, VerticalSweep, previous_row};

/// Pool slot both sweep drivers are armed on
const DRIVER_CHANNEL: usize = 0;
/// Secondary driver slot, stopped on every transition in case a mode
/// armed it
const SECONDARY_DRIVER_CHANNEL: usize = 1;

/// Rows the vertical band trails behind its front
const VERTICAL_TAIL_ROWS: u16 = 5;
/// Darkening applied per tail row, front to back
const VERTICAL_TAIL_DARKEN_STEP: u8 = 42;
/// Darkening applied per row by the `randomcolor` gradient
const ROW_GRADIENT_STEP: u8 = 5;

/// How fast each animation runs
#[derive(Debug, Clone, Copy)]
pub struct SweepTimings {
    /// Gyro driver period (front pixel advance rate)
    pub gyro_move: Duration,
    /// Gyro column fade-out duration
    pub gyro_fade: Duration,
    /// Vertical driver period (front row advance rate)
    pub vertical_move: Duration,
    /// Whole-matrix color fade duration
    pub color_fade: Duration,
    /// Fade-to-black duration for `off`
    pub off_fade: Duration,
}

impl SweepTimings {
    /// Default timings
    ///
    /// The gyro period is one 700 ms lap divided across the row, so the
    /// comet loops at the same speed regardless of matrix width.
    #[allow(clippy::cast_lossless)]
    pub const fn defaults(pixels_per_row: u16) -> Self {
        debug_assert!(pixels_per_row > 0);

        Self {
            gyro_move: Duration::from_millis(700 / pixels_per_row as u64),
            gyro_fade: Duration::from_millis(500),
            vertical_move: Duration::from_millis(100),
            color_fade: Duration::from_millis(300),
            off_fade: Duration::from_millis(500),
        }
    }
}

/// Configuration for the animator
#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    pub geometry: MatrixGeometry,
    /// Initial global brightness multiplier
    pub brightness: u8,
    /// Color the boot fade settles on before handing over to idle
    pub boot_color: Rgb,
    /// Boot-time entropy for sweep hues
    pub random_seed: u64,
    pub timings: SweepTimings,
}

/// Matrix animation engine - the main orchestrator
///
/// Owns the pixel buffer, the channel pool and the mode state machine.
/// Single-threaded and tick-driven: call [`tick`](Self::tick) once per
/// main-loop iteration with a monotonic timestamp, then
/// [`flush`](Self::flush) once to push the frame to hardware.
///
/// - `PIXELS` - frame buffer capacity (at least `geometry.pixel_count()`)
/// - `CHANNELS` - animation pool capacity, including the reserved driver
///   slots; size it for the richest mode (a whole-matrix fade wants one
///   channel per pixel)
/// - `COMMANDS` - command queue depth
pub struct MatrixAnimator<'a, const PIXELS: usize, const CHANNELS: usize, const COMMANDS: usize> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, COMMANDS>,
    geometry: MatrixGeometry,
    timings: SweepTimings,

    // Internal state
    strip: Strip<PIXELS>,
    pool: AnimationPool<CHANNELS>,
    mode: ModeId,
    gyro: GyroSweep,
    vertical: VerticalSweep,
    rng: Rng,
}

impl<'a, const PIXELS: usize, const CHANNELS: usize, const COMMANDS: usize>
    MatrixAnimator<'a, PIXELS, CHANNELS, COMMANDS>
{
    /// Create a new animator and arm the boot fade
    ///
    /// Starts in [`ModeId::Boot`]; once the boot fade completes and the
    /// pool drains, the engine moves to [`ModeId::Idle`] on its own.
    pub fn new(commands: CommandReceiver<'a, COMMANDS>, config: &AnimatorConfig, now: Instant) -> Self {
        assert!(config.geometry.pixel_count() <= PIXELS);

        let mut animator = Self {
            commands,
            geometry: config.geometry,
            timings: config.timings,
            strip: Strip::new(config.brightness),
            pool: AnimationPool::new(),
            mode: ModeId::Boot,
            gyro: GyroSweep::new(),
            vertical: VerticalSweep::new(),
            rng: Rng::new(config.random_seed),
        };
        animator.fade_all(config.boot_color, config.timings.color_fade, now);
        animator
    }

    /// Process one tick
    ///
    /// Drains pending commands, then advances every occupied channel in
    /// ascending slot order (stable draw order, last writer wins). Call
    /// this exactly once per main-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.process_commands(now);
        self.advance_channels(now);

        if self.mode == ModeId::Boot && self.pool.is_idle() {
            self.mode = ModeId::Idle;
        }
    }

    /// Push the current frame to hardware, scaled by global brightness
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        self.strip.flush(driver);
    }

    /// Currently active mode, for status reporting
    pub const fn mode(&self) -> ModeId {
        self.mode
    }

    /// The raw (brightness-uncorrected) frame buffer
    pub fn frame(&self) -> &[Rgb; PIXELS] {
        self.strip.frame()
    }

    /// The frame buffer owner
    pub const fn strip(&self) -> &Strip<PIXELS> {
        &self.strip
    }

    /// The animation channel pool
    pub const fn pool(&self) -> &AnimationPool<CHANNELS> {
        &self.pool
    }

    /// Matrix dimensions
    pub const fn geometry(&self) -> MatrixGeometry {
        self.geometry
    }

    /// Drain pending commands from the queue (non-blocking)
    ///
    /// Runs before the pool scan, so mode transitions that stop and start
    /// multiple channels never interleave with callback processing.
    fn process_commands(&mut self, now: Instant) {
        while let Ok(command) = self.commands.try_receive() {
            self.handle_command(command, now);
        }
    }

    fn handle_command(&mut self, command: Command, now: Instant) {
        #[cfg(feature = "log")]
        println!("[MatrixAnimator.handle_command] {:?}", command);

        match command {
            Command::SetColor(color) => {
                self.fade_all(color, self.timings.color_fade, now);
            }
            Command::RandomColor => {
                let base = random_hue(&mut self.rng, SWEEP_LIGHTNESS);
                self.colorize(base, now);
            }
            Command::Off => {
                self.stop_drivers();
                self.fade_all(BLACK, self.timings.off_fade, now);
                self.mode = ModeId::Idle;
            }
            Command::SetBrightness(brightness) => {
                self.strip.set_brightness(brightness);
            }
            Command::FullSteam => {
                self.strip.set_brightness(255);
                self.fade_all(WHITE, self.timings.color_fade, now);
            }
            Command::SetMode(mode) => {
                self.switch_mode(mode, now);
            }
        }
    }

    /// Stop the current driver(s), reset the sweep counters and arm the
    /// new mode's driver
    ///
    /// The stop always precedes the start so two driver timers never race
    /// for the same slot.
    fn switch_mode(&mut self, mode: ModeId, now: Instant) {
        #[cfg(feature = "log")]
        println!(
            "[MatrixAnimator.switch_mode] {} -> {}",
            self.mode.as_str(),
            mode.as_str()
        );

        self.stop_drivers();

        match mode {
            ModeId::Gyro => {
                let color = random_hue(&mut self.rng, SWEEP_LIGHTNESS);
                self.gyro.set_color(color);
                self.pool
                    .start(DRIVER_CHANNEL, self.timings.gyro_move, Animation::GyroTick, now);
            }
            ModeId::Vertical => {
                let color = random_hue(&mut self.rng, SWEEP_LIGHTNESS);
                self.vertical.set_color(color);
                self.pool.start(
                    DRIVER_CHANNEL,
                    self.timings.vertical_move,
                    Animation::VerticalTick,
                    now,
                );
            }
            ModeId::Boot | ModeId::Idle => {}
        }

        self.mode = mode;
    }

    fn stop_drivers(&mut self) {
        self.pool.stop(DRIVER_CHANNEL);
        self.pool.stop(SECONDARY_DRIVER_CHANNEL);
        self.gyro.reset();
        self.vertical.reset();
    }

    /// Advance every occupied channel by the elapsed time
    ///
    /// Completed fades free their slot; completed driver ticks restart
    /// themselves and kick off the next step of their sweep. Only the
    /// channel currently being processed mutates its own slot.
    fn advance_channels(&mut self, now: Instant) {
        for index in 0..CHANNELS {
            let Some((animation, progress, complete)) = self.pool.sample(index, now) else {
                continue;
            };

            self.apply_animation(animation, progress);

            if complete {
                self.finish_channel(index, animation, now);
            }
        }
    }

    /// Render one channel's payload into the frame buffer
    fn apply_animation(&mut self, animation: Animation, progress: u8) {
        match animation {
            Animation::PixelFade { from, to, pixel } => {
                let eased = ease_exponential_out(progress);
                self.strip
                    .set_pixel(pixel as usize, blend_colors(from, to, eased));
            }
            Animation::ColumnFade { from, to, column } => {
                let color = gamma::correct(blend_colors(from, to, progress));
                for row in 0..self.geometry.row_count {
                    let index = self.geometry.physical_index(row, column);
                    self.strip.set_pixel(index, color);
                }
            }
            Animation::GyroTick | Animation::VerticalTick => {}
        }
    }

    /// Handle a channel that reached full progress this tick
    fn finish_channel(&mut self, index: usize, animation: Animation, now: Instant) {
        match animation {
            Animation::PixelFade { .. } | Animation::ColumnFade { .. } => {
                self.pool.stop(index);
            }
            Animation::GyroTick => {
                // The driver is a timer; re-arm it first, then move the
                // front pixel and fade the column it just left.
                self.pool.restart(index, now);

                let step = self.gyro.advance(self.geometry.pixels_per_row, &mut self.rng);
                if let Some(slot) = self.pool.find_available(1) {
                    self.pool.start(
                        slot,
                        self.timings.gyro_fade,
                        Animation::ColumnFade {
                            from: step.color,
                            to: BLACK,
                            column: step.column,
                        },
                        now,
                    );
                }
                // No free slot: this column update is dropped for a tick.
            }
            Animation::VerticalTick => {
                self.pool.restart(index, now);

                let step = self.vertical.advance(self.geometry.row_count, &mut self.rng);
                self.paint_vertical_band(&step);
            }
        }
    }

    /// Fade every pixel of the matrix to one color
    fn fade_all(&mut self, target: Rgb, duration: Duration, now: Instant) {
        for pixel in 0..self.geometry.pixel_count() {
            self.start_pixel_fade(pixel, target, duration, now);
        }
    }

    /// Fade the matrix to `base` with a per-row darkening gradient
    fn colorize(&mut self, base: Rgb, now: Instant) {
        let duration = self.timings.color_fade;
        for row in 0..self.geometry.row_count {
            let amount = (u32::from(row) * u32::from(ROW_GRADIENT_STEP)).min(255);
            #[allow(clippy::cast_possible_truncation)]
            let color = darken(base, amount as u8);
            self.fade_row(row, color, duration, now);
        }
    }

    /// Fade one row to a color
    fn fade_row(&mut self, row: u16, target: Rgb, duration: Duration, now: Instant) {
        for col in 0..self.geometry.pixels_per_row {
            let pixel = self.geometry.physical_index(row, col);
            self.start_pixel_fade(pixel, target, duration, now);
        }
    }

    /// Start a fade on one physical pixel, from its current buffered color
    ///
    /// A still-running fade on the same pixel is cancelled first so two
    /// channels never fight over one pixel. If the pool is exhausted the
    /// update is skipped; slots free up as other fades complete.
    fn start_pixel_fade(&mut self, pixel: usize, target: Rgb, duration: Duration, now: Instant) {
        self.cancel_pixel_fade(pixel);

        let Some(index) = self.pool.find_available(1) else {
            return;
        };
        let from = self.strip.pixel(pixel);
        #[allow(clippy::cast_possible_truncation)]
        let animation = Animation::PixelFade {
            from,
            to: target,
            pixel: pixel as u16,
        };
        self.pool.start(index, duration, animation, now);
    }

    /// Stop any running fade targeting this pixel
    fn cancel_pixel_fade(&mut self, pixel: usize) {
        for index in 0..CHANNELS {
            if let Some(Animation::PixelFade { pixel: animated, .. }) = self.pool.animation(index) {
                if usize::from(animated) == pixel {
                    self.pool.stop(index);
                }
            }
        }
    }

    /// Paint the vertical band: full color at the front, darkening tail
    /// behind it, black just past the tail
    ///
    /// Painted synchronously into the buffer, not through the pool.
    fn paint_vertical_band(&mut self, step: &VerticalStep) {
        let row_count = self.geometry.row_count;
        self.fill_row(step.row, step.color);

        let tail = VERTICAL_TAIL_ROWS.min(row_count.saturating_sub(1));
        let mut row = step.row;
        for offset in 1..=tail {
            row = previous_row(row, row_count);
            let amount = (u32::from(offset) * u32::from(VERTICAL_TAIL_DARKEN_STEP)).min(255);
            #[allow(clippy::cast_possible_truncation)]
            self.fill_row(row, darken(step.color, amount as u8));
        }

        if tail + 1 < row_count {
            row = previous_row(row, row_count);
            self.fill_row(row, BLACK);
        }
    }

    fn fill_row(&mut self, row: u16, color: Rgb) {
        for col in 0..self.geometry.pixels_per_row {
            let index = self.geometry.physical_index(row, col);
            self.strip.set_pixel(index, color);
        }
    }
}
