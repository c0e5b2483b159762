use super::model::{Category, Event, ALL_CATEGORIES};
use itertools::Itertools;
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Filter/search controls as a view-model. The host may already provide
/// its own controls; the catalog only injects these when none exist.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub search_placeholder: String,
    pub filters: Vec<FilterButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
    pub active: bool,
}

impl ControlsView {
    /// One button per category present in the loaded set, in first-seen
    /// order, behind the `all` sentinel. Empty set falls back to the
    /// well-known categories.
    pub fn for_events(events: &[Event]) -> Self {
        let mut filters = vec![FilterButton {
            key: ALL_CATEGORIES.to_string(),
            label: "All Events".to_string(),
            active: true,
        }];

        let categories: Vec<String> = if events.is_empty() {
            Category::iter()
                .map(|category| <&'static str>::from(category).to_string())
                .collect()
        } else {
            events
                .iter()
                .map(|event| event.category.to_string())
                .unique()
                .collect()
        };

        filters.extend(categories.into_iter().map(|category| FilterButton {
            label: button_label(&category),
            key: category,
            active: false,
        }));

        Self {
            search_placeholder: "Search events...".to_string(),
            filters,
        }
    }

    pub fn to_markup(&self) -> String {
        let mut markup = String::from(
            r#"<div class="events-filter"><div class="search-box"><input type="text" id="eventSearch" placeholder=""#,
        );
        markup.push_str(&self.search_placeholder);
        markup.push_str(r#""><i class="fas fa-search"></i></div><div class="filter-buttons">"#);

        for button in &self.filters {
            let _ = write!(
                markup,
                r#"<button class="filter-btn{}" data-filter="{}">{}</button>"#,
                if button.active { " active" } else { "" },
                button.key,
                button.label
            );
        }

        markup.push_str("</div></div>");
        markup
    }
}

fn button_label(category: &str) -> String {
    let mut label: String = category
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 0 { c.to_ascii_uppercase() } else { c })
        .collect();
    label.push('s');
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::api::sample_events;

    #[test_log::test]
    fn controls_lead_with_the_all_sentinel() {
        let controls = ControlsView::for_events(&sample_events());

        assert_eq!(controls.filters[0].key, "all");
        assert!(controls.filters[0].active);
        assert!(controls.filters.iter().skip(1).all(|b| !b.active));
    }

    #[test_log::test]
    fn controls_follow_loaded_categories_in_first_seen_order() {
        let controls = ControlsView::for_events(&sample_events());

        let keys: Vec<&str> = controls.filters.iter().map(|b| b.key.as_str()).collect();

        assert_eq!(keys, vec!["all", "exhibition", "workshop", "festival"]);
        assert_eq!(controls.filters[2].label, "Workshops");
    }

    #[test_log::test]
    fn empty_set_falls_back_to_well_known_categories() {
        let controls = ControlsView::for_events(&[]);

        let keys: Vec<&str> = controls.filters.iter().map(|b| b.key.as_str()).collect();

        assert_eq!(keys, vec!["all", "exhibition", "workshop", "festival"]);
    }
}
