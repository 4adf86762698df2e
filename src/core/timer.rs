//! Live elapsed time for the open shift.
//!
//! [`ShiftTimer`] owns a repeating one-second task that recomputes
//! `now - clock_in` and publishes it on a watch channel. The task exists only
//! while a shift is open and is re-armed whenever the open shift changes.

use crate::models::shift::Shift;
use crate::utils::time::format_elapsed;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Display shown while no shift is open.
pub const IDLE_DISPLAY: &str = "00:00:00";

/// Source of wall-clock time, swappable in tests.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Elapsed display for a possibly open shift at `now`.
pub fn elapsed_display(open: Option<&Shift>, now: DateTime<Local>) -> String {
    match open {
        Some(shift) => format_elapsed(now - shift.clock_in),
        None => IDLE_DISPLAY.to_string(),
    }
}

struct Armed {
    shift_id: String,
    clock_in: DateTime<Local>,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct ShiftTimer {
    clock: Arc<dyn Clock>,
    display: Arc<watch::Sender<String>>,
    armed: Option<Armed>,
}

impl ShiftTimer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let (display, _) = watch::channel(IDLE_DISPLAY.to_string());
        Self {
            clock,
            display: Arc::new(display),
            armed: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    /// Latest published elapsed time.
    pub fn display(&self) -> String {
        self.display.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.armed.as_ref().is_some_and(|a| !a.handle.is_finished())
    }

    pub fn armed_for(&self) -> Option<&str> {
        self.armed.as_ref().map(|a| a.shift_id.as_str())
    }

    /// Align the ticker with the current open shift.
    ///
    /// Same shift: nothing happens. Different shift: the old task is cancelled
    /// and a new one armed. No shift: the task is cancelled and the display
    /// resets. Must be called from within a tokio runtime.
    pub fn sync(&mut self, open: Option<&Shift>) {
        match open {
            Some(shift)
                if self
                    .armed
                    .as_ref()
                    .is_some_and(|a| a.shift_id == shift.id && a.clock_in == shift.clock_in) => {}
            Some(shift) => {
                self.cancel();
                self.arm(shift);
            }
            None => {
                self.cancel();
                self.display.send_replace(IDLE_DISPLAY.to_string());
            }
        }
    }

    /// Stop the ticker, keeping the last published value.
    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.token.cancel();
            debug!(shift = %armed.shift_id, "timer cancelled");
        }
    }

    fn arm(&mut self, shift: &Shift) {
        let clock_in = shift.clock_in;
        self.display
            .send_replace(format_elapsed(self.clock.now() - clock_in));

        let token = CancellationToken::new();
        let task_token = token.clone();
        let clock = Arc::clone(&self.clock);
        let display = Arc::clone(&self.display);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK_PERIOD);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        let text = format_elapsed(clock.now() - clock_in);
                        trace!(elapsed = %text, "tick");
                        display.send_replace(text);
                    }
                }
            }
        });

        debug!(shift = %shift.id, "timer armed");
        self.armed = Some(Armed {
            shift_id: shift.id.clone(),
            clock_in,
            token,
            handle,
        });
    }
}

impl Drop for ShiftTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    /// Advances one second per read.
    struct SteppingClock {
        start: DateTime<Local>,
        reads: AtomicI64,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Local> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            self.start + chrono::Duration::seconds(n)
        }
    }

    #[test]
    fn test_elapsed_display_without_open_shift() {
        assert_eq!(elapsed_display(None, noon()), "00:00:00");
        let shift = Shift::open(noon() - chrono::Duration::hours(30));
        assert_eq!(elapsed_display(Some(&shift), noon()), "30:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_arms_and_resets() {
        let mut timer = ShiftTimer::new(Arc::new(FixedClock(noon())));
        assert_eq!(timer.display(), IDLE_DISPLAY);

        let shift = Shift::open(noon() - chrono::Duration::seconds(3661));
        timer.sync(Some(&shift));
        assert_eq!(timer.display(), "01:01:01");
        assert!(timer.is_running());

        timer.sync(None);
        assert_eq!(timer.display(), IDLE_DISPLAY);
        assert!(timer.armed_for().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_second_until_cancelled() {
        let clock = Arc::new(SteppingClock {
            start: noon(),
            reads: AtomicI64::new(0),
        });
        let mut timer = ShiftTimer::new(clock.clone());
        let shift = Shift::open(noon());
        timer.sync(Some(&shift));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let reads = clock.reads.load(Ordering::SeqCst);
        assert!(reads >= 4, "expected at least 4 clock reads, got {reads}");
        assert_ne!(timer.display(), IDLE_DISPLAY);

        timer.cancel();
        tokio::task::yield_now().await;
        let after_cancel = clock.reads.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(clock.reads.load(Ordering::SeqCst), after_cancel);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearms_only_when_open_shift_changes() {
        let mut timer = ShiftTimer::new(Arc::new(FixedClock(noon())));
        let first = Shift::open(noon() - chrono::Duration::minutes(5));
        timer.sync(Some(&first));
        timer.sync(Some(&first));
        assert_eq!(timer.armed_for(), Some(first.id.as_str()));

        let second = Shift::open(noon() - chrono::Duration::minutes(1));
        timer.sync(Some(&second));
        assert_eq!(timer.armed_for(), Some(second.id.as_str()));
        assert_eq!(timer.display(), "00:01:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_updates() {
        let mut timer = ShiftTimer::new(Arc::new(FixedClock(noon())));
        let mut rx = timer.subscribe();
        let shift = Shift::open(noon() - chrono::Duration::seconds(42));
        timer.sync(Some(&shift));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "00:00:42");
    }
}
