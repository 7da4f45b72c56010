//! Stopwatch with optional countdown used to time a quiz attempt.
//!
//! The timer never schedules anything on its own. Whoever owns it calls
//! [`QuizTimer::tick`] once per [`QuizTimer::interval`] while
//! [`QuizTimer::is_running`] is true; elapsed time is recomputed from the
//! clock on every tick so late or missed ticks self-correct.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Source of monotonic time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock chosen at runtime, e.g. a virtual clock injected by tests.
pub type BoxedClock = Box<dyn Clock + Send + Sync>;

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_add(ms))
            })
            .ok();
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_millis(self.offset_ms.load(Ordering::Acquire))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerOptions {
    /// Start counting as soon as the timer is created.
    pub auto_start: bool,
    /// Countdown limit in seconds; 0 means unbounded.
    pub time_limit_secs: u64,
    /// How often the owner should call `tick`.
    pub interval: Duration,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            auto_start: false,
            time_limit_secs: 0,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Notifications produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick {
        elapsed_secs: u64,
        remaining_secs: u64,
    },
    TimeUp {
        elapsed_secs: u64,
    },
}

#[derive(Debug)]
pub struct QuizTimer<C: Clock = SystemClock> {
    clock: C,
    options: TimerOptions,
    elapsed_secs: u64,
    running: bool,
    started_at: Option<Instant>,
    paused: Duration,
}

impl QuizTimer<SystemClock> {
    pub fn new(options: TimerOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> QuizTimer<C> {
    pub fn with_clock(options: TimerOptions, clock: C) -> Self {
        let mut timer = Self {
            clock,
            options,
            elapsed_secs: 0,
            running: false,
            started_at: None,
            paused: Duration::ZERO,
        };
        if options.auto_start {
            timer.start();
        }
        timer
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        if self.options.time_limit_secs > 0 {
            self.options
                .time_limit_secs
                .saturating_sub(self.elapsed_secs)
        } else {
            0
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_time_up(&self) -> bool {
        self.options.time_limit_secs > 0 && self.elapsed_secs >= self.options.time_limit_secs
    }

    pub fn time_limit_secs(&self) -> u64 {
        self.options.time_limit_secs
    }

    pub fn interval(&self) -> Duration {
        if self.options.interval.is_zero() {
            DEFAULT_INTERVAL
        } else {
            self.options.interval
        }
    }

    /// Begin a fresh count from zero. Ignored while already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.started_at = Some(self.clock.now());
        self.paused = Duration::ZERO;
        self.elapsed_secs = 0;
        self.running = true;
        debug!(limit = self.options.time_limit_secs, "Timer started");
        true
    }

    /// Stop counting and bank the running time. The shown value stays frozen.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if let Some(started) = self.started_at.take() {
            self.paused += self.clock.now().saturating_duration_since(started);
        }
        self.running = false;
        debug!(elapsed_secs = self.elapsed_secs, "Timer paused");
        true
    }

    /// Continue from the accumulated time. Refused once the limit was reached.
    pub fn resume(&mut self) -> bool {
        if self.running || self.is_time_up() {
            return false;
        }
        self.started_at = Some(self.clock.now());
        self.running = true;
        debug!(elapsed_secs = self.elapsed_secs, "Timer resumed");
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
        self.started_at = None;
        self.paused = Duration::ZERO;
    }

    /// Zero the count without changing whether the timer runs.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.paused = Duration::ZERO;
        if self.running {
            self.started_at = Some(self.clock.now());
        }
    }

    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running || self.is_time_up() {
            return events;
        }
        let Some(started) = self.started_at else {
            return events;
        };

        let total = self.clock.now().saturating_duration_since(started) + self.paused;
        self.elapsed_secs = whole_secs(total);

        if self.is_time_up() {
            self.started_at = None;
            self.running = false;
            info!(
                elapsed_secs = self.elapsed_secs,
                limit = self.options.time_limit_secs,
                "Time limit reached"
            );
            events.push(TimerEvent::TimeUp {
                elapsed_secs: self.elapsed_secs,
            });
        }

        events.push(TimerEvent::Tick {
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.remaining_secs(),
        });
        events
    }
}

fn whole_secs(duration: Duration) -> u64 {
    (duration.as_millis() / 1000) as u64
}
