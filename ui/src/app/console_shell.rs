use dioxus::prelude::*;

use super::context::use_console_provider;
use crate::components::display::AlertGroup;
use crate::console_info;

const CONSOLE_CSS: Asset = asset!("/assets/styling/console.css");

/// Root layout: provides the console context and renders the console-wide
/// alert stack above the routed page.
#[component]
pub fn ConsoleShell(children: Element) -> Element {
    let console = use_console_provider();
    let mut alerts = console.alerts;
    let realm = console.config.realm.clone();

    use_hook(|| {
        console_info!(
            "[Console] Managing realm {} on {}",
            console.config.realm,
            console.config.server_url
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }

        div {
            class: "console-container",

            header {
                class: "console-header",
                h1 { class: "console-title", "Realm Console" }
                span { class: "console-realm", "Realm: {realm}" }
            }

            AlertGroup {
                alerts: alerts().alerts().to_vec(),
                timeout_ms: console.config.alert_timeout_ms,
                on_dismiss: move |id| {
                    alerts.with_mut(|queue| queue.dismiss(id));
                }
            }

            main {
                class: "console-content",
                {children}
            }
        }
    }
}
