use std::sync::Arc;

use shared::schedule::TimezonePolicy;

use crate::store::DocumentStore;

/// Shared handler state. The store is injected here rather than held globally.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub webinar_timezone: TimezonePolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, webinar_timezone: TimezonePolicy) -> Self {
        Self {
            store,
            webinar_timezone,
        }
    }
}
