pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub schedule: Schedule,
    pub location: String,
    pub price: String,
    pub category: String,
    pub actions: Vec<EventAction>,
}

impl Event {
    pub fn new(
        id: u64,
        title: String,
        description: String,
        schedule: Schedule,
        location: String,
        price: String,
        category: String,
        actions: Vec<EventAction>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            schedule,
            location,
            price,
            category,
            actions,
        }
    }

    pub fn matches_query(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.description.to_lowercase().contains(lower_query)
            || self.location.to_lowercase().contains(lower_query)
    }
}

/// Display-oriented schedule information (free-form, as published)
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub date: String,
    pub time: String,
}

impl Schedule {
    pub fn new(date: String, time: String) -> Self {
        Self { date, time }
    }
}

/// A card button. Style and icon only affect rendering; the lowercased
/// label is the dispatch key.
#[derive(Debug, Clone, PartialEq)]
pub struct EventAction {
    pub label: String,
    pub style: String,
    pub icon: String,
}

impl EventAction {
    pub fn new(label: String, style: String, icon: String) -> Self {
        Self {
            label,
            style,
            icon,
        }
    }

    pub fn key(&self) -> String {
        self.label.to_lowercase()
    }
}

/// Behavior an action key dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Booking,
    Details,
    Unknown,
}

impl ActionKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "book tickets" | "register now" | "view schedule" => ActionKind::Booking,
            "more details" | "workshop details" | "event guide" => ActionKind::Details,
            _ => ActionKind::Unknown,
        }
    }
}

/// Category tags the default filter controls offer. Events themselves
/// carry free-form tags; these are only the well-known ones.
#[derive(strum::IntoStaticStr, strum::EnumIter, Debug, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Exhibition,
    Workshop,
    Festival,
}

/// Category criterion applied to the catalog. Matching is exact and
/// case-sensitive; `All` is the reserved sentinel meaning no filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(raw.to_string())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => event.category == *tag,
        }
    }
}
