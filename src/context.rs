//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use log::warn;

use feedback_core::{Config, FeedbackCache, FeedbackId, FeedbackItem, FetchTicket, HttpFeedbackApi, Lookup, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload feedback from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload feedback from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    config: StoredValue<Config>,
    /// Query cache for remote reads
    cache: StoredValue<FeedbackCache>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
        config: Config,
    ) -> Self {
        let cache = FeedbackCache::new(config.stale_after());
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
            cache: StoredValue::new(cache),
        }
    }

    /// Trigger a reload of the feedback list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Go to another page (updates the location hash too)
    pub fn navigate(&self, route: Route) {
        if let Err(err) = window().location().set_hash(&route.to_hash()) {
            warn!("[APP] Could not set location hash for {:?}: {:?}", route, err);
        }
        self.sync_route(route);
    }

    /// Follow a `hashchange`; the same route twice does not remount the page
    pub fn sync_route(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn api(&self) -> HttpFeedbackApi {
        self.config.with_value(HttpFeedbackApi::from_config)
    }

    // ========================
    // Query Cache
    // ========================

    pub fn cached_feedbacks(&self, now: DateTime<Utc>) -> Lookup<(FetchTicket, Vec<FeedbackItem>)> {
        self.cache.with_value(|c| c.feedbacks(now))
    }

    pub fn cache_feedbacks(&self, ticket: FetchTicket, items: Vec<FeedbackItem>, now: DateTime<Utc>) {
        self.cache.update_value(|c| c.store_feedbacks(ticket, items, now));
    }

    pub fn cached_feedback(&self, id: &FeedbackId, now: DateTime<Utc>) -> Lookup<FeedbackItem> {
        self.cache.with_value(|c| c.feedback(id, now))
    }

    pub fn cache_feedback(&self, item: FeedbackItem, now: DateTime<Utc>) {
        self.cache.update_value(|c| c.store_feedback(item, now));
    }

    pub fn invalidate_after_create(&self) {
        self.cache.update_value(|c| c.invalidate_after_create());
    }

    pub fn invalidate_after_update(&self, id: &FeedbackId) {
        self.cache.update_value(|c| c.invalidate_after_update(id));
    }

    pub fn invalidate_after_delete(&self, id: &FeedbackId) {
        self.cache.update_value(|c| c.invalidate_after_delete(id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
