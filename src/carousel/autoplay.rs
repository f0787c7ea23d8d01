//! Autoplay timer for the carousel.
//!
//! The timer never touches carousel state itself. Each tick invokes a
//! callback (normally "send `AutoAdvance` to the event loop"), and the
//! reducer decides whether the tick still applies.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Period used when nothing else is configured.
pub const DEFAULT_AUTOPLAY_PERIOD: Duration = Duration::from_millis(3500);

/// Inputs the timer depends on. Any change tears the timer down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoplayDeps {
    pub eligible: bool,
    pub item_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayStatus {
    Running,
    Stopped,
}

pub struct Autoplay {
    runtime: Handle,
    period: Duration,
    deps: Option<AutoplayDeps>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl Autoplay {
    pub fn new(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period,
            deps: None,
            task: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> AutoplayStatus {
        match &self.task {
            Some(task) if !task.is_finished() => AutoplayStatus::Running,
            _ => AutoplayStatus::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status() == AutoplayStatus::Running
    }

    /// Number of timers started so far. Lets callers tag ticks.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reconciles the timer with the current dependencies.
    ///
    /// Unchanged dependencies keep the running timer. Otherwise the old timer
    /// is cancelled and, if still eligible, a fresh one is started with
    /// `on_tick` as its callback.
    pub fn sync<F>(&mut self, deps: AutoplayDeps, on_tick: F)
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        if self.deps == Some(deps) {
            return;
        }
        self.stop();
        self.deps = Some(deps);

        if !deps.eligible || deps.item_count <= 1 {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        debug!(generation, items = deps.item_count, ?period, "autoplay started");
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick(generation);
            }
        }));
    }

    /// Cancels the running timer, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = self.generation, "autoplay stopped");
        }
        self.deps = None;
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(u64) + Send + Sync + Clone + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn deps(eligible: bool, item_count: usize) -> AutoplayDeps {
        AutoplayDeps {
            eligible,
            item_count,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn no_timer_for_zero_or_one_item() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);

        autoplay.sync(deps(true, 0), on_tick.clone());
        assert_eq!(autoplay.status(), AutoplayStatus::Stopped);

        autoplay.sync(deps(true, 1), on_tick);
        assert_eq!(autoplay.status(), AutoplayStatus::Stopped);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);
        autoplay.sync(deps(true, 2), on_tick);
        assert!(autoplay.is_running());

        tokio::time::sleep(Duration::from_millis(3400)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(DEFAULT_AUTOPLAY_PERIOD).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn losing_eligibility_stops_ticks() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);
        autoplay.sync(deps(true, 3), on_tick.clone());
        autoplay.sync(deps(false, 3), on_tick);
        assert!(!autoplay.is_running());

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn same_deps_keep_single_timer() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);
        autoplay.sync(deps(true, 3), on_tick.clone());
        autoplay.sync(deps(true, 3), on_tick.clone());
        autoplay.sync(deps(true, 3), on_tick);
        assert_eq!(autoplay.generation(), 1);

        tokio::time::sleep(Duration::from_millis(3600)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn item_count_change_restarts_timer() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);
        autoplay.sync(deps(true, 3), on_tick.clone());
        tokio::time::sleep(Duration::from_millis(2000)).await;

        autoplay.sync(deps(true, 4), on_tick);
        assert_eq!(autoplay.generation(), 2);

        // The restarted timer counts its period from the restart.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_timer() {
        let (count, on_tick) = counter();
        let mut autoplay = Autoplay::new(Handle::current(), DEFAULT_AUTOPLAY_PERIOD);
        autoplay.sync(deps(true, 2), on_tick);
        drop(autoplay);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
