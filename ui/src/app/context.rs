use std::rc::Rc;

use dioxus::prelude::*;

use crate::features::alerts::{AlertQueue, AlertVariant, Notifier};
use crate::services::client::{AdminApi, AdminClient, SessionTokenProvider};
use crate::services::config::ConsoleConfig;

/// Shared console services, provided once at the root.
#[derive(Clone)]
pub struct ConsoleContext {
    pub config: ConsoleConfig,
    pub api: Rc<dyn AdminApi>,
    /// Console-wide notifications (`addAlert` / `addError`).
    pub alerts: Signal<AlertQueue>,
}

impl Notifier for Signal<AlertQueue> {
    fn add_alert(&self, title: &str, variant: AlertVariant) {
        let mut alerts = *self;
        alerts.with_mut(|queue| {
            queue.push(title, variant);
        });
    }

    fn add_error(&self, title: &str, detail: &str) {
        let mut alerts = *self;
        alerts.with_mut(|queue| {
            queue.push_error(title, detail);
        });
    }
}

/// Builds the console context from stored configuration and provides it to
/// the component tree. Call once near the root.
pub fn use_console_provider() -> ConsoleContext {
    use_context_provider(|| {
        let config = ConsoleConfig::load();
        let token_provider = Rc::new(SessionTokenProvider::new(&config.token_storage_key));
        let client = AdminClient::new(&config.server_url, token_provider);

        ConsoleContext {
            config,
            api: Rc::new(client),
            alerts: Signal::new(AlertQueue::new()),
        }
    })
}

/// Panics if `use_console_provider()` was not called by an ancestor.
pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>()
}
