use crate::api::ProductPage;
use crate::config::UiConfig;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState, FetchKind};
use crate::ui::mvi::Reducer;
use crate::ui::store::{StoreIntent, StoreReducer, StoreState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

#[derive(Debug, PartialEq)]
pub enum UiCommand {
    FetchPage {
        page: u32,
        kind: FetchKind,
        generation: u64,
    },
    /// Replace the carousel timer with one for `mount`.
    StartCarousel {
        mount: u64,
        rotate: bool,
        settle_loading: bool,
    },
    StopCarousel,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    search_focused: bool,
    /// Rows available to the product list.
    viewport_rows: u16,
    load_more_threshold: f32,
    spinner: usize,
    /// Product list and search (MVI pattern).
    catalog: CatalogState,
    /// Selection and favorites, shared by both screens (MVI pattern).
    store: StoreState,
    /// Detail image carousel (MVI pattern).
    carousel: CarouselState,
    /// Incremented on every detail mount; carousel events carry it.
    mount: u64,
    /// Filtered row count when the in-flight fetch began.
    settle_baseline: usize,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            screen: Screen::List,
            search_focused: false,
            viewport_rows: 0,
            load_more_threshold: ui.load_more_threshold,
            spinner: 0,
            catalog: CatalogState::default(),
            store: StoreState::default(),
            carousel: CarouselState::default(),
            mount: 0,
            settle_baseline: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn spinner(&self) -> usize {
        self.spinner
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn on_tick(&mut self) {
        if self.catalog.is_busy() || self.carousel.is_loading() {
            self.spinner = self.spinner.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// First load when the list screen opens.
    pub fn start(&mut self) -> bool {
        self.fetch_page(1, FetchKind::Initial)
    }

    /// Pull-to-refresh: back to page 1, exhaustion and error cleared.
    pub fn refresh(&mut self) -> bool {
        self.fetch_page(1, FetchKind::Refresh)
    }

    /// Next page for infinite scroll. Ignored while a fetch is in flight,
    /// while refreshing, after an error, and once the source is exhausted.
    pub fn load_more(&mut self) -> bool {
        let next = self.catalog.page() + 1;
        self.fetch_page(next, FetchKind::More)
    }

    /// Issue a page request if the catalog accepts it.
    ///
    /// Returns false when the request was suppressed.
    pub fn fetch_page(&mut self, page: u32, kind: FetchKind) -> bool {
        if !self.catalog.accepts(kind) {
            return false;
        }

        self.dispatch_catalog(CatalogIntent::BeginFetch { page, kind });
        self.settle_baseline = if kind.replaces() {
            0
        } else {
            self.catalog.filtered().len()
        };
        let generation = self.catalog.generation();
        let page = self.catalog.page();

        if self.send_command(UiCommand::FetchPage {
            page,
            kind,
            generation,
        }) {
            return true;
        }

        // Nothing will ever answer this fetch; settle it here.
        let message = self
            .last_command_error
            .clone()
            .unwrap_or_else(|| "No fetch worker available".to_string());
        self.dispatch_catalog(CatalogIntent::FetchFailed {
            generation,
            message,
        });
        self.dispatch_catalog(CatalogIntent::FetchSettled { generation });
        false
    }

    pub fn on_page_loaded(&mut self, generation: u64, kind: FetchKind, page: ProductPage) {
        self.dispatch_catalog(CatalogIntent::PageLoaded {
            generation,
            kind,
            page,
        });
    }

    pub fn on_fetch_failed(&mut self, generation: u64, message: String) {
        self.dispatch_catalog(CatalogIntent::FetchFailed {
            generation,
            message,
        });
    }

    /// Settles a fetch and keeps filling the viewport, but only while
    /// fetches keep adding visible rows. A query that matches nothing must
    /// not page through the whole catalog on its own.
    pub fn on_fetch_settled(&mut self, generation: u64) {
        self.dispatch_catalog(CatalogIntent::FetchSettled { generation });
        if generation != self.catalog.generation() {
            return;
        }
        if self.catalog.filtered().len() > self.settle_baseline {
            self.maybe_load_more();
        }
    }

    /// Rows from the end of the list at which the next page is requested.
    pub fn load_more_window(&self) -> usize {
        let rows = f32::from(self.viewport_rows.max(1));
        ((rows * self.load_more_threshold).ceil() as usize).max(1)
    }

    /// Requests the next page when the cursor is close to the end of the list.
    pub fn maybe_load_more(&mut self) -> bool {
        if self.screen != Screen::List {
            return false;
        }
        if self.catalog.remaining_below_cursor() > self.load_more_window() {
            return false;
        }
        self.load_more()
    }

    // ========================================================================
    // List navigation and search
    // ========================================================================

    pub fn move_cursor(&mut self, delta: isize) {
        self.dispatch_catalog(CatalogIntent::MoveCursor { delta });
        self.maybe_load_more();
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.dispatch_catalog(CatalogIntent::SetQuery { query });
    }

    pub fn push_query_char(&mut self, ch: char) {
        let mut query = self.catalog.query().to_string();
        query.push(ch);
        self.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.catalog.query().to_string();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    // ========================================================================
    // Selection, favorites, detail screen
    // ========================================================================

    /// Select the product under the cursor and open its detail view.
    pub fn open_selected(&mut self) -> bool {
        let Some(product) = self.catalog.selected_product().cloned() else {
            return false;
        };
        self.dispatch_store(StoreIntent::SelectProduct(Some(product)));
        self.screen = Screen::Detail;
        self.search_focused = false;
        self.mount_carousel();
        true
    }

    pub fn close_detail(&mut self) {
        if self.screen != Screen::Detail {
            return;
        }
        self.screen = Screen::List;
        self.dispatch_carousel(CarouselIntent::Unmount);
        self.send_command(UiCommand::StopCarousel);
    }

    /// Toggle the favorite flag of the product under the list cursor.
    pub fn toggle_favorite_selected(&mut self) -> bool {
        let Some(id) = self.catalog.selected_product().map(|p| p.id) else {
            return false;
        };
        self.dispatch_store(StoreIntent::ToggleFavorite(id));
        true
    }

    /// Toggle the favorite flag of the product shown in the detail view.
    pub fn toggle_favorite_current(&mut self) -> bool {
        let Some(id) = self.store.selected().map(|p| p.id) else {
            return false;
        };
        self.dispatch_store(StoreIntent::ToggleFavorite(id));
        true
    }

    pub fn on_carousel_tick(&mut self, mount: u64) {
        if !self.is_current_mount(mount) {
            tracing::debug!(mount, current = self.mount, "Ignoring stale carousel tick");
            return;
        }
        self.dispatch_carousel(CarouselIntent::Advance);
        if !self.carousel.needs_rotation() {
            self.send_command(UiCommand::StopCarousel);
        }
    }

    pub fn on_carousel_loading_elapsed(&mut self, mount: u64) {
        if self.is_current_mount(mount) {
            self.dispatch_carousel(CarouselIntent::LoadingElapsed);
        }
    }

    fn mount_carousel(&mut self) {
        self.mount += 1;
        let product = self.store.selected().cloned();
        self.dispatch_carousel(CarouselIntent::Mount { product });

        let rotate = self.carousel.needs_rotation();
        let settle_loading = self.carousel.is_loading();
        let command = if rotate || settle_loading {
            UiCommand::StartCarousel {
                mount: self.mount,
                rotate,
                settle_loading,
            }
        } else {
            UiCommand::StopCarousel
        };
        self.send_command(command);
    }

    fn is_current_mount(&self, mount: u64) -> bool {
        self.screen == Screen::Detail && mount == self.mount
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    fn dispatch_store(&mut self, intent: StoreIntent) {
        dispatch_mvi!(self, store, StoreReducer, intent);
    }

    fn dispatch_carousel(&mut self, intent: CarouselIntent) {
        dispatch_mvi!(self, carousel, CarouselReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue UI command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
