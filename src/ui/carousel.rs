//! Hero carousel with a cancellable auto-advance timer

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Default)]
struct Slides {
    index: AtomicUsize,
    count: AtomicUsize,
}

impl Slides {
    fn advance(&self) {
        let count = self.count.load(Ordering::SeqCst);
        if count == 0 {
            return;
        }
        let _ = self
            .index
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| Some((i + 1) % count));
    }
}

pub struct HeroCarousel {
    slides: Arc<Slides>,
    interval: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl HeroCarousel {
    pub fn new(slide_count: usize, interval: Duration) -> Self {
        let slides = Slides::default();
        slides.count.store(slide_count, Ordering::SeqCst);
        Self {
            slides: Arc::new(slides),
            interval,
            ticker: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.slides.index.load(Ordering::SeqCst)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.count.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Begin auto-advancing; a no-op while already running.
    /// The first advance happens one full interval from now.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        debug!("Carousel timer started ({:?})", self.interval);

        let slides = Arc::clone(&self.slides);
        let period = self.interval;
        let first = Instant::now() + period;
        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = interval_at(first, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                slides.advance();
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            debug!("Carousel timer stopped");
            ticker.abort();
        }
    }

    /// Restart the timer from a fresh full interval
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    pub fn hover_enter(&mut self) {
        self.stop();
    }

    pub fn hover_leave(&mut self) {
        self.start();
    }

    /// Jump to a slide. Cancels the pending tick without restarting the
    /// timer; the next hover-leave resumes it.
    pub fn go_to(&mut self, index: usize) {
        let count = self.slide_count();
        if count == 0 {
            return;
        }
        self.slides.index.store(index % count, Ordering::SeqCst);
        self.stop();
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index() + 1);
    }

    pub fn prev(&mut self) {
        let count = self.slide_count();
        if count == 0 {
            return;
        }
        self.go_to((self.current_index() + count - 1) % count);
    }

    /// Resize after slides load; an out-of-range index snaps back to 0
    pub fn set_slide_count(&mut self, count: usize) {
        self.slides.count.store(count, Ordering::SeqCst);
        if self.current_index() >= count {
            self.slides.index.store(0, Ordering::SeqCst);
        }
    }
}

impl Drop for HeroCarousel {
    fn drop(&mut self) {
        self.stop();
    }
}
