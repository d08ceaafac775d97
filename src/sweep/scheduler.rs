//! Window Scheduler Module
//! Moves the visible window across the store on every tick.

use crate::charts::RedrawMode;
use crate::config::SweepConfig;
use crate::data::{SeriesStore, WindowSlice};
use crate::sweep::RepeatingTask;
use std::time::{Duration, Instant};

/// Lifecycle of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No data loaded yet, or stopped
    Idle,
    /// Timer active
    Running,
}

/// Left edge of the visible window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCursor {
    start: usize,
}

impl WindowCursor {
    #[cfg(test)]
    pub fn at(start: usize) -> Self {
        Self { start }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Shift forward while a full window still fits before the end, otherwise wrap to 0.
    pub fn advance(&mut self, len: usize, config: &SweepConfig) {
        if self.start + config.window_size < len {
            self.start += config.shift_size;
        } else {
            self.start = 0;
        }
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }
}

/// Owns the cursor and the repeating task driving it.
#[derive(Debug)]
pub struct WindowScheduler {
    config: SweepConfig,
    cursor: WindowCursor,
    task: RepeatingTask,
    pending_reset: bool,
    ticks: u64,
}

impl WindowScheduler {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            cursor: WindowCursor::default(),
            task: RepeatingTask::new(config.tick_interval),
            pending_reset: false,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.task.is_running() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> WindowCursor {
        self.cursor
    }

    /// Total ticks since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// (Re)start the sweep from the first reading. A running sweep is cancelled first.
    pub fn start(&mut self, now: Instant) {
        let restarted = self.task.is_running();
        let handle = self.task.start(now);
        self.cursor.reset();
        self.pending_reset = true;
        self.ticks = 0;
        tracing::info!(?handle, restarted, "window sweep started");
    }

    pub fn stop(&mut self) {
        if self.task.is_running() {
            self.task.cancel();
            tracing::info!("window sweep stopped");
        }
    }

    /// Advance the cursor once and cut the slice it now points at.
    pub fn tick(&mut self, store: &SeriesStore) -> WindowSlice {
        self.cursor.advance(store.len(), &self.config);
        self.ticks += 1;
        store.window(self.cursor.start(), self.config.window_size)
    }

    /// Run every tick that fell due and return the slice of the last one.
    ///
    /// The first slice after a start asks for a view reset; later ones are quiet.
    pub fn poll(&mut self, store: &SeriesStore, now: Instant) -> Option<(WindowSlice, RedrawMode)> {
        let due = self.task.poll(now);
        if due == 0 {
            return None;
        }
        if due > 1 {
            tracing::debug!(due, "catching up on missed ticks");
        }

        for _ in 1..due {
            self.cursor.advance(store.len(), &self.config);
            self.ticks += 1;
        }
        let slice = self.tick(store);

        let mode = if std::mem::take(&mut self.pending_reset) {
            RedrawMode::Reset
        } else {
            RedrawMode::Quiet
        };
        Some((slice, mode))
    }

    /// Time until the next tick while running.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.task.time_until_next(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(n: usize) -> SeriesStore {
        let mut store = SeriesStore::new();
        for i in 0..n {
            store.push_reading(format!("Reading {}", i + 1), i as f64, 0.0, 0.0);
        }
        store
    }

    #[test]
    fn test_cursor_advances_before_end() {
        let config = SweepConfig::default();
        let mut cursor = WindowCursor::at(129);
        cursor.advance(200, &config);
        assert_eq!(cursor.start(), 130);
    }

    #[test]
    fn test_cursor_wraps_at_end() {
        let config = SweepConfig::default();
        let mut cursor = WindowCursor::at(130);
        cursor.advance(200, &config);
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_short_series_never_advances() {
        let config = SweepConfig::default();
        let mut cursor = WindowCursor::default();
        for _ in 0..10 {
            cursor.advance(50, &config);
            assert_eq!(cursor.start(), 0);
        }

        cursor.advance(70, &config);
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_full_sweep_cycle() {
        let config = SweepConfig::default();
        let mut cursor = WindowCursor::default();
        let mut seen_max = 0;
        for _ in 0..131 {
            cursor.advance(200, &config);
            seen_max = seen_max.max(cursor.start());
        }
        assert_eq!(seen_max, 130);
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_idle_until_started() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(200);
        let now = Instant::now();

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(scheduler.poll(&store, now + Duration::from_secs(5)).is_none());
        assert_eq!(scheduler.time_until_next_tick(now), None);
    }

    #[test]
    fn test_tick_produces_shifted_slice() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(200);
        let t0 = Instant::now();
        scheduler.start(t0);

        let (slice, mode) = scheduler.poll(&store, t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(mode, RedrawMode::Reset);
        assert_eq!((slice.start, slice.end), (1, 71));
        assert_eq!(slice.labels[0], "Reading 2");

        let (slice, mode) = scheduler.poll(&store, t0 + Duration::from_millis(1000)).unwrap();
        assert_eq!(mode, RedrawMode::Quiet);
        assert_eq!(slice.start, 2);
        assert_eq!(scheduler.ticks(), 2);
    }

    #[test]
    fn test_poll_runs_missed_ticks() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(200);
        let t0 = Instant::now();
        scheduler.start(t0);

        let (slice, _) = scheduler.poll(&store, t0 + Duration::from_millis(2000)).unwrap();
        assert_eq!(slice.start, 4);
        assert_eq!(scheduler.ticks(), 4);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(200);
        let t0 = Instant::now();
        scheduler.start(t0);
        scheduler.poll(&store, t0 + Duration::from_millis(500));
        scheduler.poll(&store, t0 + Duration::from_millis(1000));
        assert_eq!(scheduler.cursor().start(), 2);

        let t1 = t0 + Duration::from_millis(1200);
        scheduler.start(t1);
        assert_eq!(scheduler.state(), SchedulerState::Running);
        assert_eq!(scheduler.cursor().start(), 0);

        assert!(scheduler.poll(&store, t1 + Duration::from_millis(499)).is_none());
        let (slice, mode) = scheduler.poll(&store, t1 + Duration::from_millis(500)).unwrap();
        assert_eq!(mode, RedrawMode::Reset);
        assert_eq!(slice.start, 1);
        assert_eq!(scheduler.ticks(), 1);
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(200);
        let t0 = Instant::now();
        scheduler.start(t0);
        scheduler.stop();

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(scheduler.poll(&store, t0 + Duration::from_secs(2)).is_none());
    }

    #[test]
    fn test_short_store_shows_full_range() {
        let mut scheduler = WindowScheduler::new(SweepConfig::default());
        let store = store_of(50);
        let t0 = Instant::now();
        scheduler.start(t0);

        for step in 1..=5u32 {
            let (slice, _) = scheduler
                .poll(&store, t0 + Duration::from_millis(500) * step)
                .unwrap();
            assert_eq!((slice.start, slice.end), (0, 50));
        }
    }
}
