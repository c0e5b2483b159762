use super::api::{sample_events, EventSource};
use super::controls::ControlsView;
use super::model::{ActionKind, CategoryFilter, Event};
use super::view::{project_cards, DetailsView, EventCard, Feedback, Notifier, RenderSink};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Uninitialized,
    Loading,
    Ready,
}

/// How a new category or query interacts with the other criterion.
///
/// `ReplaceLast` matches the museum site: every filter or search call
/// recomputes from the full set and discards the other criterion.
/// `Combine` intersects both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    ReplaceLast,
    Combine,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not ready yet (state: {0:?})")]
    NotReady(CatalogState),
}

/// Owns the authoritative event list and the currently visible subset.
///
/// The filtered set is always re-derived from (full set, category,
/// query); it is never mutated on its own. One execution context acts
/// on an instance at a time, which `&mut self` enforces.
pub struct EventCatalog<S: EventSource> {
    source: S,
    sink: Option<Box<dyn RenderSink>>,
    filter_mode: FilterMode,
    state: CatalogState,
    events: Vec<Event>,
    filtered: Vec<Event>,
    category: CategoryFilter,
    query: String,
}

impl<S: EventSource> EventCatalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sink: None,
            filter_mode: FilterMode::default(),
            state: CatalogState::Uninitialized,
            events: Vec::new(),
            filtered: Vec::new(),
            category: CategoryFilter::All,
            query: String::new(),
        }
    }

    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// Attaches the display surface. The catalog is its sole writer
    /// from here on.
    pub fn attach_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = Some(sink);
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    /// Loads the full set once. Any fetch or parse failure substitutes
    /// the built-in samples, so the catalog always ends up `Ready` and
    /// non-empty. Does not render.
    pub async fn load(&mut self) {
        if self.state != CatalogState::Uninitialized {
            warn!("Load requested twice; keeping the existing set");
            return;
        }

        self.state = CatalogState::Loading;

        self.events = match self.source.fetch_events().await {
            Ok(events) => {
                info!("Loaded {} events", events.len());
                events
            }
            Err(e) => {
                warn!("Error loading events, using the sample set: {e}");
                sample_events()
            }
        };

        self.filtered = self.events.clone();
        self.state = CatalogState::Ready;
    }

    /// Recomputes the visible subset by category. The sentinel shows
    /// everything; an unknown tag yields an empty set, not a fault.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> Result<(), CatalogError> {
        self.ensure_ready()?;

        if self.filter_mode == FilterMode::ReplaceLast {
            self.query.clear();
        }

        self.category = filter;
        self.recompute();
        self.push_render();

        Ok(())
    }

    /// Recomputes the visible subset by case-insensitive substring
    /// match over title, description and location. An empty query
    /// resets to the full set.
    pub fn set_search_query(&mut self, query: &str) -> Result<(), CatalogError> {
        self.ensure_ready()?;

        if self.filter_mode == FilterMode::ReplaceLast {
            self.category = CategoryFilter::All;
        }

        self.query = query.to_string();
        self.recompute();
        self.push_render();

        Ok(())
    }

    /// Pure projection of the current filtered set, in order. Calling
    /// it twice without a state change yields identical output.
    pub fn render(&self) -> Vec<EventCard> {
        project_cards(&self.filtered)
    }

    /// Maps an action key from a rendered card onto user-facing
    /// behavior, reported through `notifier`. Unknown keys and unknown
    /// ids are diagnostic no-ops.
    pub fn dispatch_action(
        &self,
        action_key: &str,
        event_id: u64,
        notifier: &mut dyn Notifier,
    ) -> Result<(), CatalogError> {
        self.ensure_ready()?;

        let Some(event) = self.events.iter().find(|e| e.id == event_id) else {
            warn!("Dispatch for unknown event id {event_id}; ignoring");
            return Ok(());
        };

        match ActionKind::from_key(action_key) {
            ActionKind::Booking => notifier.notify(Feedback::BookingRequested {
                title: event.title.to_string(),
            }),
            ActionKind::Details => notifier.notify(Feedback::Details(DetailsView::from_event(event))),
            ActionKind::Unknown => {
                info!("Action: {action_key} for event: {}", event.title);
            }
        }

        Ok(())
    }

    /// Injects the filter/search controls into the sink unless the
    /// host already mounted some. Safe to call more than once.
    pub fn mount_controls(&mut self) -> Result<(), CatalogError> {
        self.ensure_ready()?;

        let controls = ControlsView::for_events(&self.events);

        match self.sink.as_mut() {
            None => warn!("No render target attached; skipping controls"),
            Some(sink) => {
                if !sink.has_controls() {
                    sink.mount_controls(&controls);
                }
            }
        }

        Ok(())
    }

    /// Load, mount controls, render. The whole page-ready sequence.
    pub async fn init(&mut self) -> Result<(), CatalogError> {
        self.load().await;
        self.mount_controls()?;
        self.push_render();

        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), CatalogError> {
        if self.state != CatalogState::Ready {
            return Err(CatalogError::NotReady(self.state));
        }

        Ok(())
    }

    fn recompute(&mut self) {
        let lower_query = self.query.to_lowercase();

        self.filtered = self
            .events
            .iter()
            .filter(|event| self.category.matches(event))
            .filter(|event| lower_query.is_empty() || event.matches_query(&lower_query))
            .cloned()
            .collect();
    }

    fn push_render(&mut self) {
        let cards = project_cards(&self.filtered);

        match self.sink.as_mut() {
            None => warn!("No render target attached; skipping render"),
            Some(sink) => sink.render(&cards),
        }
    }
}
