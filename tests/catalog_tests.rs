use museumguide::catalog::api::{ApiError, EventSource};
use museumguide::catalog::model::{CategoryFilter, Event, EventAction, Schedule};
use museumguide::catalog::state::{CatalogState, EventCatalog, FilterMode};
use museumguide::catalog::view::{
    cards_to_markup, DetailsView, Feedback, MarkupSink, Notifier, RenderSink,
};
use std::sync::{Arc, Mutex};

struct FixedSource {
    events: Vec<Event>,
}

impl EventSource for FixedSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        Ok(self.events.clone())
    }
}

struct DownSource;

impl EventSource for DownSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        Err(ApiError::InvalidResponse(
            serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        ))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    feedback: Vec<Feedback>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, feedback: Feedback) {
        self.feedback.push(feedback);
    }
}

/// MarkupSink that stays inspectable after the catalog boxes it.
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<MarkupSink>>);

impl RenderSink for SharedSink {
    fn has_controls(&self) -> bool {
        self.0.lock().unwrap().has_controls()
    }

    fn mount_controls(&mut self, controls: &museumguide::catalog::controls::ControlsView) {
        self.0.lock().unwrap().mount_controls(controls)
    }

    fn render(&mut self, cards: &[museumguide::catalog::view::EventCard]) {
        self.0.lock().unwrap().render(cards)
    }
}

fn gallery_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Renaissance Revisited".to_string(),
            "Masterpieces reinterpreted by emerging artists.".to_string(),
            Schedule::new("June 15-30, 2025".to_string(), "10:00 AM".to_string()),
            "Grand Art Gallery".to_string(),
            "€15".to_string(),
            "exhibition".to_string(),
            vec![
                EventAction::new(
                    "Book Tickets".to_string(),
                    "btn-primary".to_string(),
                    "fas fa-ticket-alt".to_string(),
                ),
                EventAction::new(
                    "More Details".to_string(),
                    "btn-secondary".to_string(),
                    "fas fa-info-circle".to_string(),
                ),
            ],
        ),
        Event::new(
            2,
            "Pottery Basics".to_string(),
            "Beginner wheel-throwing.".to_string(),
            Schedule::new("July 5, 2025".to_string(), "2:00 PM".to_string()),
            "Studio Wing".to_string(),
            "€25".to_string(),
            "workshop".to_string(),
            vec![EventAction::new(
                "Register Now".to_string(),
                "btn-primary".to_string(),
                "fas fa-pen".to_string(),
            )],
        ),
    ]
}

async fn ready_catalog() -> EventCatalog<FixedSource> {
    let mut catalog = EventCatalog::new(FixedSource {
        events: gallery_events(),
    });
    catalog.load().await;
    catalog
}

#[test_log::test(tokio::test)]
async fn fresh_load_shows_everything() {
    let catalog = ready_catalog().await;

    assert_eq!(catalog.state(), CatalogState::Ready);
    assert_eq!(catalog.filtered(), catalog.events());
    assert_eq!(catalog.events().len(), 2);
}

#[test_log::test(tokio::test)]
async fn unreachable_source_falls_back_to_samples() {
    let mut catalog = EventCatalog::new(DownSource);

    catalog.load().await;

    assert_eq!(catalog.state(), CatalogState::Ready);
    assert!(!catalog.filtered().is_empty());
    assert_eq!(catalog.filtered(), catalog.events());
}

#[test_log::test(tokio::test)]
async fn category_filter_partitions_the_set() {
    let mut catalog = ready_catalog().await;

    catalog
        .set_category_filter(CategoryFilter::parse("workshop"))
        .unwrap();
    assert_eq!(catalog.filtered().len(), 1);
    assert_eq!(catalog.filtered()[0].id, 2);

    catalog
        .set_category_filter(CategoryFilter::parse("all"))
        .unwrap();
    assert_eq!(catalog.filtered(), catalog.events());

    catalog
        .set_category_filter(CategoryFilter::parse("lecture"))
        .unwrap();
    assert!(catalog.filtered().is_empty());
}

#[test_log::test(tokio::test)]
async fn search_matches_title_description_and_location() {
    let mut catalog = ready_catalog().await;

    catalog.set_search_query("RENAISSANCE").unwrap();
    assert_eq!(catalog.filtered().len(), 1);
    assert_eq!(catalog.filtered()[0].id, 1);

    catalog.set_search_query("studio").unwrap();
    assert_eq!(catalog.filtered()[0].id, 2);

    catalog.set_search_query("").unwrap();
    assert_eq!(catalog.filtered(), catalog.events());
}

#[test_log::test(tokio::test)]
async fn search_replaces_an_active_category_filter() {
    let mut catalog = ready_catalog().await;

    catalog
        .set_category_filter(CategoryFilter::parse("workshop"))
        .unwrap();
    catalog.set_search_query("renaissance").unwrap();

    // the workshop filter is gone; search recomputed from the full set
    assert_eq!(catalog.filtered().len(), 1);
    assert_eq!(catalog.filtered()[0].id, 1);
}

#[test_log::test(tokio::test)]
async fn combine_mode_intersects_both_criteria() {
    let mut catalog = EventCatalog::new(FixedSource {
        events: gallery_events(),
    })
    .with_filter_mode(FilterMode::Combine);

    catalog.load().await;
    catalog
        .set_category_filter(CategoryFilter::parse("workshop"))
        .unwrap();
    catalog.set_search_query("renaissance").unwrap();

    assert!(catalog.filtered().is_empty());

    catalog.set_search_query("pottery").unwrap();
    assert_eq!(catalog.filtered().len(), 1);
    assert_eq!(catalog.filtered()[0].id, 2);
}

#[test_log::test(tokio::test)]
async fn render_is_idempotent() {
    let mut catalog = ready_catalog().await;

    catalog.set_search_query("pottery").unwrap();

    let first = catalog.render();
    let second = catalog.render();

    assert_eq!(first, second);
    assert_eq!(cards_to_markup(&first), cards_to_markup(&second));
}

#[test_log::test(tokio::test)]
async fn details_dispatch_reports_every_descriptive_field() {
    let catalog = ready_catalog().await;
    let mut notifier = RecordingNotifier::default();

    catalog.dispatch_action("more details", 1, &mut notifier).unwrap();

    assert_eq!(
        notifier.feedback,
        vec![Feedback::Details(DetailsView {
            title: "Renaissance Revisited".to_string(),
            date: "June 15-30, 2025".to_string(),
            time: "10:00 AM".to_string(),
            location: "Grand Art Gallery".to_string(),
            price: "€15".to_string(),
            description: "Masterpieces reinterpreted by emerging artists.".to_string(),
        })]
    );
}

#[test_log::test(tokio::test)]
async fn booking_dispatch_acknowledges_with_the_title() {
    let catalog = ready_catalog().await;
    let mut notifier = RecordingNotifier::default();

    catalog.dispatch_action("register now", 2, &mut notifier).unwrap();

    assert_eq!(
        notifier.feedback,
        vec![Feedback::BookingRequested {
            title: "Pottery Basics".to_string()
        }]
    );
}

#[test_log::test(tokio::test)]
async fn unknown_id_and_unknown_key_are_silent_noops() {
    let catalog = ready_catalog().await;
    let mut notifier = RecordingNotifier::default();
    let before = catalog.filtered().to_vec();

    catalog.dispatch_action("book tickets", 999, &mut notifier).unwrap();
    catalog.dispatch_action("share", 1, &mut notifier).unwrap();

    assert!(notifier.feedback.is_empty());
    assert_eq!(catalog.filtered(), before.as_slice());
}

#[test_log::test(tokio::test)]
async fn controls_mount_only_once() {
    let mut catalog = ready_catalog().await;
    let sink = SharedSink::default();

    catalog.attach_sink(Box::new(sink.clone()));
    catalog.mount_controls().unwrap();

    let mounted = sink.0.lock().unwrap().controls.clone();
    assert!(mounted.is_some());

    catalog.mount_controls().unwrap();
    assert_eq!(sink.0.lock().unwrap().controls, mounted);
}

#[test_log::test(tokio::test)]
async fn filter_changes_write_through_the_sink() {
    let mut catalog = ready_catalog().await;
    let sink = SharedSink::default();

    catalog.attach_sink(Box::new(sink.clone()));
    catalog
        .set_category_filter(CategoryFilter::parse("exhibition"))
        .unwrap();

    let markup = sink.0.lock().unwrap().markup.clone();
    assert!(markup.contains("Renaissance Revisited"));
    assert!(!markup.contains("Pottery Basics"));
}

#[test_log::test(tokio::test)]
async fn missing_sink_never_faults_state_changes() {
    let mut catalog = ready_catalog().await;

    catalog.set_search_query("pottery").unwrap();
    catalog.mount_controls().unwrap();

    assert_eq!(catalog.filtered().len(), 1);
}
