//! Background side of the UI: page fetches and carousel timers.
//!
//! `App` never awaits anything. It sends a [`UiCommand`] and later receives
//! the outcome as an [`AppEvent`] on the draw loop's channel.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::ProductSource;
use crate::catalog::PageFetcher;
use crate::config::CarouselConfig;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::carousel::CarouselTimer;
use crate::ui::catalog::FetchKind;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 64;

/// Spawns the worker task on `runtime` and returns its command sender.
pub fn spawn_worker<S: ProductSource>(
    runtime: &Handle,
    fetcher: PageFetcher<S>,
    carousel: CarouselConfig,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

    runtime.spawn(async move {
        let mut timer = CarouselTimer::new();
        loop {
            let command = tokio::select! {
                _ = shutdown.wait() => break,
                command = rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                UiCommand::FetchPage {
                    page,
                    kind,
                    generation,
                } => spawn_fetch(fetcher.clone(), page, kind, generation, events.clone()),
                UiCommand::StartCarousel {
                    mount,
                    rotate,
                    settle_loading,
                } => timer.start(
                    mount,
                    rotate.then(|| carousel.interval()),
                    settle_loading.then(|| carousel.loading_delay()),
                    events.clone(),
                ),
                UiCommand::StopCarousel => timer.cancel(),
            }
        }
        tracing::debug!("UI worker stopped");
    });

    tx
}

/// Runs one page fetch. `FetchSettled` is emitted from a scope guard so the
/// loading flags are cleared even if the task is aborted mid-request.
fn spawn_fetch<S: ProductSource>(
    fetcher: PageFetcher<S>,
    page: u32,
    kind: FetchKind,
    generation: u64,
    events: Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let events = scopeguard::guard(events, move |events| {
            let _ = events.send(AppEvent::FetchSettled { generation });
        });

        let outcome = match fetcher.fetch_page(page).await {
            Ok(result) => AppEvent::PageLoaded {
                generation,
                kind,
                page: result,
            },
            Err(err) => AppEvent::PageFailed {
                generation,
                message: err.to_string(),
            },
        };
        let _ = events.send(outcome);
    });
}
