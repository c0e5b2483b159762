use crate::catalog::state::FilterMode;
use crate::config::model::{Config, DebugConfig};
use std::env;

pub fn load_config() -> Config {
    let events_url = env::var("EVENTS_URL").unwrap_or_else(|_| panic!("EVENTS_URL must be set."));

    let combine_filters = load_bool_config("COMBINE_FILTERS", false);
    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        events_url,
        filter_mode: if combine_filters {
            FilterMode::Combine
        } else {
            FilterMode::ReplaceLast
        },
    }
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => {
            Some(value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected an integer number.", name)
            }))
        }
        Err(_) => None,
    }
}
