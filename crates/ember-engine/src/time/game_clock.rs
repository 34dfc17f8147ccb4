use std::time::{Duration, Instant};

use crate::error::GameError;

/// Source of monotonic timestamps, expressed as elapsed time since an
/// arbitrary fixed origin.
///
/// Implemented for closures so tests can drive the clock by hand.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

impl<F> TimeSource for F
where
    F: Fn() -> Duration,
{
    fn now(&self) -> Duration {
        self()
    }
}

/// Default source backed by `Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicSource {
    origin: Instant,
}

impl MonotonicSource {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Game timing snapshot handed to `Updating` and `Drawing` subscribers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GameTime {
    /// Time elapsed since the previous tick.
    pub delta: Duration,

    /// Sum of every delta since the clock was initialized.
    pub total: Duration,

    /// Number of ticks before this one since the clock was initialized.
    pub frame_index: u64,
}

impl GameTime {
    /// Delta time in seconds.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total time in seconds.
    #[inline]
    pub fn total_secs(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

/// Stopwatch producing delta/total time per tick.
///
/// Unlike a render-loop frame clock, this one never clamps upwards: a stall
/// shows up as one large delta. Backwards steps of the time source are
/// clamped to a zero delta, so `total` never decreases.
#[derive(Debug, Clone)]
pub struct GameClock<S = MonotonicSource> {
    source: S,
    started: bool,
    last: Duration,
    delta: Duration,
    total: Duration,
    frame_index: u64,
}

impl GameClock {
    /// Creates an uninitialized clock reading `Instant`.
    pub fn new() -> Self {
        Self::with_source(MonotonicSource::new())
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> GameClock<S> {
    /// Creates an uninitialized clock reading from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            started: false,
            last: Duration::ZERO,
            delta: Duration::ZERO,
            total: Duration::ZERO,
            frame_index: 0,
        }
    }

    /// Resets the baseline to the current time and zeroes delta and total.
    pub fn initialize(&mut self) {
        self.last = self.source.now();
        self.delta = Duration::ZERO;
        self.total = Duration::ZERO;
        self.frame_index = 0;
        self.started = true;
    }

    /// Samples the source and accumulates the elapsed time.
    pub fn advance(&mut self) -> Result<GameTime, GameError> {
        if !self.started {
            return Err(GameError::NotInitialized);
        }

        let now = self.source.now();
        let snapshot_index = self.frame_index;

        self.delta = now.saturating_sub(self.last);
        self.last = now;
        self.total += self.delta;
        self.frame_index = self.frame_index.wrapping_add(1);

        Ok(GameTime {
            delta: self.delta,
            total: self.total,
            frame_index: snapshot_index,
        })
    }

    /// Current state as a snapshot, without sampling the source.
    pub fn snapshot(&self) -> GameTime {
        GameTime {
            delta: self.delta,
            total: self.total,
            frame_index: self.frame_index.saturating_sub(1),
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[inline]
    pub fn total(&self) -> Duration {
        self.total
    }

    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[inline]
    pub fn total_secs(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn manual_clock(start: Duration) -> (Rc<Cell<Duration>>, GameClock<impl TimeSource>) {
        let now = Rc::new(Cell::new(start));
        let reader = now.clone();
        (now, GameClock::with_source(move || reader.get()))
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn advance_before_initialize_fails() {
        let (_, mut clock) = manual_clock(ms(0));
        assert!(matches!(clock.advance(), Err(GameError::NotInitialized)));
        assert!(!clock.is_initialized());
    }

    #[test]
    fn initialize_zeroes_delta_and_total() {
        let (now, mut clock) = manual_clock(ms(100));
        clock.initialize();
        now.set(ms(150));
        clock.advance().unwrap();

        clock.initialize();
        assert_eq!(clock.delta(), Duration::ZERO);
        assert_eq!(clock.total(), Duration::ZERO);
        assert_eq!(clock.delta_secs(), 0.0);
        assert_eq!(clock.total_secs(), 0.0);
    }

    #[test]
    fn initialize_rebases_on_current_time() {
        let (now, mut clock) = manual_clock(ms(1_000));
        clock.initialize();
        now.set(ms(1_016));
        let t = clock.advance().unwrap();
        assert_eq!(t.delta, ms(16));
        assert_eq!(t.total, ms(16));
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn total_is_sum_of_observed_deltas() {
        let (now, mut clock) = manual_clock(ms(0));
        clock.initialize();

        let mut sum = Duration::ZERO;
        for step in [16, 17, 0, 33, 5, 250] {
            now.set(now.get() + ms(step));
            let t = clock.advance().unwrap();
            sum += t.delta;
            assert_eq!(t.total, sum);
        }
        assert_eq!(clock.total(), ms(321));
    }

    #[test]
    fn backwards_source_clamps_delta_to_zero() {
        let (now, mut clock) = manual_clock(ms(500));
        clock.initialize();

        now.set(ms(520));
        assert_eq!(clock.advance().unwrap().delta, ms(20));

        // Source jumps back; the delta is clamped and total holds.
        now.set(ms(400));
        let t = clock.advance().unwrap();
        assert_eq!(t.delta, Duration::ZERO);
        assert_eq!(t.total, ms(20));

        // Subsequent deltas are measured from the new, earlier baseline.
        now.set(ms(410));
        let t = clock.advance().unwrap();
        assert_eq!(t.delta, ms(10));
        assert_eq!(t.total, ms(30));
    }

    #[test]
    fn large_stall_is_not_capped() {
        let (now, mut clock) = manual_clock(ms(0));
        clock.initialize();
        now.set(Duration::from_secs(10));
        assert_eq!(clock.advance().unwrap().delta, Duration::from_secs(10));
    }

    #[test]
    fn frame_index_counts_ticks() {
        let (now, mut clock) = manual_clock(ms(0));
        clock.initialize();
        for expected in 0..4 {
            now.set(now.get() + ms(1));
            assert_eq!(clock.advance().unwrap().frame_index, expected);
        }
        assert_eq!(clock.snapshot().frame_index, 3);
    }

    #[test]
    fn seconds_accessors_match_durations() {
        let (now, mut clock) = manual_clock(ms(0));
        clock.initialize();
        now.set(ms(250));
        let t = clock.advance().unwrap();
        assert_eq!(t.delta_secs(), 0.25);
        assert_eq!(t.total_secs(), 0.25);
        assert_eq!(clock.snapshot(), t);
    }

    // ── monotonic source ──────────────────────────────────────────────────

    #[test]
    fn monotonic_clock_deltas_are_non_negative() {
        let mut clock = GameClock::new();
        clock.initialize();
        let mut sum = Duration::ZERO;
        for _ in 0..100 {
            let t = clock.advance().unwrap();
            sum += t.delta;
            assert_eq!(t.total, sum);
        }
    }
}
