use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::events::AppEvent;

/// Timer task driving one detail-view mount.
///
/// Starting a new mount aborts the previous task, and so does dropping the
/// timer. Every event carries the mount id so late ticks from an aborted
/// task can be told apart.
#[derive(Default)]
pub struct CarouselTimer {
    handle: Option<JoinHandle<()>>,
}

impl CarouselTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Must be called from within a tokio runtime.
    ///
    /// `rotate_every` starts the repeating advance; `settle_after` the
    /// one-shot loading timer. Either may be absent.
    pub fn start(
        &mut self,
        mount: u64,
        rotate_every: Option<Duration>,
        settle_after: Option<Duration>,
        events: Sender<AppEvent>,
    ) {
        self.cancel();
        if rotate_every.is_none() && settle_after.is_none() {
            return;
        }

        tracing::debug!(mount, ?rotate_every, ?settle_after, "Starting carousel timer");
        let settle_events = events.clone();
        self.handle = Some(tokio::spawn(async move {
            let settle = async move {
                if let Some(delay) = settle_after {
                    tokio::time::sleep(delay).await;
                    let _ = settle_events.send(AppEvent::CarouselLoadingElapsed { mount });
                }
            };

            let rotate = async move {
                let Some(period) = rotate_every else {
                    return;
                };
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    if events.send(AppEvent::CarouselTick { mount }).is_err() {
                        break;
                    }
                }
            };

            tokio::join!(settle, rotate);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Carousel timer cancelled");
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
