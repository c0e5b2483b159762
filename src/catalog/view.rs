use super::controls::ControlsView;
use super::model::{Event, EventAction};
use std::fmt::Write;

/// One card per event, in filtered-set order. Plain data; the sink
/// decides what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: u64,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: String,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionView {
    pub key: String,
    pub label: String,
    pub style: String,
    pub icon: String,
}

impl EventCard {
    fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            category: event.category.to_string(),
            title: event.title.to_string(),
            description: event.description.to_string(),
            date: event.schedule.date.to_string(),
            time: event.schedule.time.to_string(),
            location: event.location.to_string(),
            price: event.price.to_string(),
            actions: event.actions.iter().map(ActionView::from_action).collect(),
        }
    }
}

impl ActionView {
    fn from_action(action: &EventAction) -> Self {
        Self {
            key: action.key(),
            label: action.label.to_string(),
            style: action.style.to_string(),
            icon: action.icon.to_string(),
        }
    }
}

/// Pure projection of a filtered set into card view-models.
pub fn project_cards(events: &[Event]) -> Vec<EventCard> {
    events.iter().map(EventCard::from_event).collect()
}

/// Result of a dispatched card action, reported through a [`Notifier`]
/// instead of blocking the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Details(DetailsView),
    BookingRequested { title: String },
}

/// All descriptive fields of a single event, for the details behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: String,
    pub description: String,
}

impl DetailsView {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.to_string(),
            date: event.schedule.date.to_string(),
            time: event.schedule.time.to_string(),
            location: event.location.to_string(),
            price: event.price.to_string(),
            description: event.description.to_string(),
        }
    }
}

/// Capability the host implements to surface action outcomes to the user.
pub trait Notifier {
    fn notify(&mut self, feedback: Feedback);
}

/// The display surface. The catalog is its only writer once attached.
pub trait RenderSink {
    fn has_controls(&self) -> bool;
    fn mount_controls(&mut self, controls: &ControlsView);
    fn render(&mut self, cards: &[EventCard]);
}

/// Renders cards as the markup the museum site uses.
pub fn cards_to_markup(cards: &[EventCard]) -> String {
    let mut markup = String::new();

    for card in cards {
        let _ = write!(
            markup,
            r#"<div class="event-card" data-event-id="{}" data-event-type="{}">"#,
            card.id, card.category
        );
        let _ = write!(
            markup,
            r#"<div class="event-date"><i class="far fa-calendar-alt"></i> {}</div>"#,
            card.date
        );
        let _ = write!(markup, r#"<h3 class="event-title">{}</h3>"#, card.title);
        let _ = write!(
            markup,
            r#"<p class="event-description">{}</p>"#,
            card.description
        );
        let _ = write!(
            markup,
            r#"<div class="event-details"><div class="event-detail"><i class="fas fa-map-marker-alt"></i> {}</div><div class="event-detail"><i class="fas fa-clock"></i> {}</div><div class="event-detail"><i class="fas fa-euro-sign"></i> {}</div></div>"#,
            card.location, card.time, card.price
        );
        markup.push_str(r#"<div class="event-actions">"#);

        for action in &card.actions {
            let _ = write!(
                markup,
                r##"<a href="#" class="btn-event {}" data-action="{}"><i class="{}"></i> {}</a>"##,
                action.style, action.key, action.icon, action.label
            );
        }

        markup.push_str("</div></div>");
    }

    markup
}

/// In-memory display surface holding the last rendered markup. Used by
/// the binary and anywhere a real DOM is absent.
#[derive(Debug, Default)]
pub struct MarkupSink {
    pub controls: Option<String>,
    pub markup: String,
}

impl MarkupSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for MarkupSink {
    fn has_controls(&self) -> bool {
        self.controls.is_some()
    }

    fn mount_controls(&mut self, controls: &ControlsView) {
        self.controls = Some(controls.to_markup());
    }

    fn render(&mut self, cards: &[EventCard]) {
        self.markup = cards_to_markup(cards);
    }
}
