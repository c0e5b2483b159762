use crate::catalog::state::FilterMode;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub events_url: String,
    pub filter_mode: FilterMode,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}
