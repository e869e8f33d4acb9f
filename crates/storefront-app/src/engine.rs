//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state (settings included), the message channel
//! and the API client, and broadcasts [`EngineEvent`]s for external consumers.

use tokio::sync::{broadcast, mpsc};

use storefront_api::{ApiClient, ProductApi};
use storefront_core::prelude::*;
use storefront_core::Route;

use crate::config::Settings;
use crate::detail::DetailPhase;
use crate::engine_event::EngineEvent;
use crate::listing::ListingPhase;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, Page};

/// Capacity of the message and event channels
const CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    location: String,
    page: Page,
    listing_phase: ListingPhase,
    detail_loading: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            location: state.location(),
            page: state.page(),
            listing_phase: state.listing.phase,
            detail_loading: state.detail.is_loading(),
        }
    }
}

/// Orchestration engine for the storefront.
///
/// Generic over the product API so tests and the headless runner can drive
/// it with an in-memory catalog.
pub struct Engine<A = ApiClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    api: A,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: ProductApi + Clone + Sync + 'static,
{
    /// Create an Engine showing `initial`.
    ///
    /// Must be called inside a tokio runtime: the signal handler is spawned
    /// here. Nothing is fetched until [`Engine::start`].
    pub fn new(api: A, settings: Settings, initial: Route) -> Self {
        let state = AppState::new(settings, initial);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            api,
            event_tx,
        }
    }

    /// Issue the fetch for the initial location
    pub fn start(&mut self) {
        info!("Starting at {}", self.state.location());
        self.process_message(Message::Reload);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// In-flight fetches are not cancelled; their results land in a closed
    /// channel and are dropped.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
        self.msg_rx.close();
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.location != post.location {
            self.emit(EngineEvent::LocationChanged {
                location: post.location.clone(),
            });
        }

        // Listing settled: Loading -> Loaded | Empty | Error
        if post.page == Page::Catalog
            && pre.listing_phase == ListingPhase::Loading
            && post.listing_phase != ListingPhase::Loading
        {
            match post.listing_phase {
                ListingPhase::Error => self.emit(EngineEvent::CatalogFailed {
                    location: post.location.clone(),
                    error: self.state.listing.error.clone().unwrap_or_default(),
                }),
                _ => {
                    if let Some(pagination) = self.state.listing.pagination() {
                        self.emit(EngineEvent::CatalogLoaded {
                            location: post.location.clone(),
                            product_count: self.state.listing.products().len(),
                            pagination: *pagination,
                        });
                    }
                }
            }
        }

        // Detail settled: Loading -> Found | NotFound
        if post.page == Page::Product && pre.detail_loading && !post.detail_loading {
            match &self.state.detail.phase {
                DetailPhase::Found(product) => self.emit(EngineEvent::ProductLoaded {
                    slug: product.slug.clone(),
                    name: product.name.clone(),
                    in_stock: product.is_in_stock(),
                }),
                DetailPhase::NotFound => self.emit(EngineEvent::ProductNotFound {
                    slug: self.state.detail.slug.clone(),
                }),
                DetailPhase::Loading => {}
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_api::test_utils::{test_product, test_products, FakeCatalog};
    use tokio::sync::broadcast::error::TryRecvError;

    fn engine(catalog: FakeCatalog, route: Route) -> Engine<FakeCatalog> {
        Engine::new(catalog, Settings::default(), route)
    }

    /// Process messages until a load outcome is broadcast
    async fn next_outcome(
        engine: &mut Engine<FakeCatalog>,
        events: &mut broadcast::Receiver<EngineEvent>,
    ) -> EngineEvent {
        loop {
            match events.try_recv() {
                Ok(event) if event.is_load_outcome() => return event,
                Ok(_) => continue,
                Err(TryRecvError::Empty) => {}
                Err(e) => panic!("event channel error: {e}"),
            }
            let processed = tokio::time::timeout(Duration::from_secs(2), engine.process_next())
                .await
                .expect("timed out waiting for a message");
            assert!(processed);
        }
    }

    #[tokio::test]
    async fn test_start_emits_catalog_loaded() {
        let mut engine = engine(FakeCatalog::new(test_products("Phone", 20)), Route::default());
        let mut events = engine.subscribe();
        engine.start();

        match next_outcome(&mut engine, &mut events).await {
            EngineEvent::CatalogLoaded {
                product_count,
                pagination,
                ..
            } => {
                assert_eq!(product_count, 12);
                assert_eq!(pagination.pages, 2);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_settings_drive_the_first_fetch() {
        let mut settings = Settings::default();
        settings.catalog.page_size = 8;
        let route = Route::Catalog(settings.filter_defaults());
        let catalog = FakeCatalog::new(test_products("Phone", 20));
        let mut engine = Engine::new(catalog, settings, route);
        assert_eq!(engine.state.settings.catalog.page_size, 8);

        let mut events = engine.subscribe();
        engine.start();
        match next_outcome(&mut engine, &mut events).await {
            EngineEvent::CatalogLoaded {
                product_count,
                pagination,
                ..
            } => {
                assert_eq!(product_count, 8);
                assert_eq!(pagination.pages, 3);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_filter_change_reports_location() {
        let mut engine = engine(FakeCatalog::new(test_products("Phone", 20)), Route::default());
        let mut events = engine.subscribe();
        engine.start();
        next_outcome(&mut engine, &mut events).await;

        engine.process_message(Message::GoToPage(2));
        assert_eq!(
            events.try_recv().ok(),
            Some(EngineEvent::LocationChanged {
                location: "/?page=2&limit=12&search=&minPrice=0&maxPrice=2000".into()
            })
        );

        match next_outcome(&mut engine, &mut events).await {
            EngineEvent::CatalogLoaded { product_count, .. } => assert_eq!(product_count, 8),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_emits_catalog_failed() {
        let catalog = FakeCatalog::new(test_products("Phone", 3));
        catalog.set_failing(true);
        let mut engine = engine(catalog, Route::default());
        let mut events = engine.subscribe();
        engine.start();

        assert!(matches!(
            next_outcome(&mut engine, &mut events).await,
            EngineEvent::CatalogFailed { .. }
        ));
        assert_eq!(engine.state.toasts.len(), 1);
    }

    #[tokio::test]
    async fn test_product_deep_link() {
        let catalog = FakeCatalog::new(vec![test_product("desk-lamp", "Desk Lamp", 45, 0)]);
        let mut engine = engine(catalog, Route::product("desk-lamp"));
        let mut events = engine.subscribe();
        engine.start();

        assert_eq!(
            next_outcome(&mut engine, &mut events).await,
            EngineEvent::ProductLoaded {
                slug: "desk-lamp".into(),
                name: "Desk Lamp".into(),
                in_stock: false,
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_slug_emits_not_found() {
        let mut engine = engine(FakeCatalog::default(), Route::product("nonexistent"));
        let mut events = engine.subscribe();
        engine.start();

        assert_eq!(
            next_outcome(&mut engine, &mut events).await,
            EngineEvent::ProductNotFound {
                slug: "nonexistent".into()
            }
        );
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let mut engine = engine(FakeCatalog::default(), Route::default());
        let mut events = engine.subscribe();
        engine.shutdown();
        assert_eq!(events.try_recv().ok(), Some(EngineEvent::Shutdown));
    }
}
