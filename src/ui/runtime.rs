use crate::api::ProductSource;
use crate::catalog::PageFetcher;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::list_viewport_rows;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use std::io;
use tokio::runtime::Handle;

/// Runs the catalog browser until the user quits or a signal arrives.
///
/// Drawing and input stay on the calling thread; fetches and carousel
/// timers run on `runtime`.
pub fn run<S: ProductSource>(
    config: &Config,
    fetcher: PageFetcher<S>,
    runtime: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    {
        let _enter = runtime.enter();
        shutdown.listen_for_signals(events.sender());
    }

    let mut app = App::new(&config.ui);
    app.set_command_sender(spawn_worker(
        runtime,
        fetcher,
        config.carousel.clone(),
        events.sender(),
        shutdown.clone(),
    ));
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(list_viewport_rows(cols, rows));
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(list_viewport_rows(cols, rows)),
            Ok(AppEvent::PageLoaded {
                generation,
                kind,
                page,
            }) => app.on_page_loaded(generation, kind, page),
            Ok(AppEvent::PageFailed {
                generation,
                message,
            }) => app.on_fetch_failed(generation, message),
            Ok(AppEvent::FetchSettled { generation }) => app.on_fetch_settled(generation),
            Ok(AppEvent::CarouselTick { mount }) => app.on_carousel_tick(mount),
            Ok(AppEvent::CarouselLoadingElapsed { mount }) => {
                app.on_carousel_loading_elapsed(mount)
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
